//! Shared types and error definitions used across all parcel crates.

pub mod error;
pub mod types;

pub use {
    error::{Error, Result},
    types::{CapacityPolicy, InboxRef, Item, ItemTypeId, Placement, Player},
};
