//! Configuration loading and env substitution.
//!
//! Config files: `parcel.toml`, `parcel.yaml`, `parcel.yml` or `parcel.json`,
//! searched in `./` then `~/.config/parcel/`.
//!
//! Supports `${ENV_VAR}` substitution in all string values.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, discover_and_load, load_config, load_or_discover},
    schema::{DeliveryConfig, ParcelConfig, PlayerEntry, WorldConfig},
};
