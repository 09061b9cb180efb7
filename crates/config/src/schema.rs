/// Config schema types (delivery policies, in-memory world fixture).
use {
    parcel_common::{CapacityPolicy, ItemTypeId, Placement},
    serde::{Deserialize, Serialize},
};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParcelConfig {
    pub delivery: DeliveryConfig,
    pub world: WorldConfig,
}

/// Policies passed to the inbox on every delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub placement: Placement,
    pub capacity: CapacityPolicy,
}

/// The in-memory game world the CLI delivers into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Items per inbox when the capacity policy is enforced.
    pub inbox_capacity: usize,
    /// Item types the factory refuses to create.
    pub failing_item_ids: Vec<ItemTypeId>,
    /// Players currently in game.
    pub residents: Vec<PlayerEntry>,
    /// Players only present in storage.
    pub stored: Vec<PlayerEntry>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            inbox_capacity: 20,
            failing_item_ids: vec![99],
            residents: vec![PlayerEntry::new("example", true)],
            stored: vec![PlayerEntry::new("notloaded", false)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    #[serde(default)]
    pub online: bool,
}

impl PlayerEntry {
    pub fn new(name: impl Into<String>, online: bool) -> Self {
        Self {
            name: name.into(),
            online,
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let cfg: ParcelConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, ParcelConfig::default());
        assert_eq!(cfg.delivery.placement, Placement::Wherever);
        assert_eq!(cfg.delivery.capacity, CapacityPolicy::Ignore);
        assert_eq!(cfg.world.failing_item_ids, vec![99]);
    }

    #[test]
    fn partial_world_keeps_other_defaults() {
        let cfg: ParcelConfig = toml::from_str(
            r#"
            [world]
            inbox_capacity = 3

            [[world.residents]]
            name = "alice"
            online = true

            [[world.residents]]
            name = "bob"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.world.inbox_capacity, 3);
        assert_eq!(cfg.world.residents, vec![
            PlayerEntry::new("alice", true),
            PlayerEntry::new("bob", false),
        ]);
        assert_eq!(cfg.world.stored, vec![PlayerEntry::new("notloaded", false)]);
    }

    #[test]
    fn delivery_policy_from_toml() {
        let cfg: ParcelConfig = toml::from_str(
            r#"
            [delivery]
            placement = { slot = 2 }
            capacity = "enforce"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.delivery.placement, Placement::Slot(2));
        assert_eq!(cfg.delivery.capacity, CapacityPolicy::Enforce);
    }
}
