//! Ownership-safe item delivery.
//!
//! A recipient is resolved through an ordered chain of [`RecipientResolver`]s
//! (resident sessions first, then storage). The resolved player is either
//! borrowed from the session directory or owned by the operation; the item is
//! created by the factory and moved into the recipient's inbox exactly once.

pub mod delivery;
pub mod error;
pub mod handle;
pub mod resolver;

pub use {
    delivery::{Delivered, ItemDelivery},
    error::{DeliveryError, Result},
    handle::PlayerHandle,
    resolver::{RecipientResolver, ResidentLookup, StorageLoad},
};
