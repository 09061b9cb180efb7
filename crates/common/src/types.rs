//! Game-side value types exchanged between the delivery core and its
//! collaborators.

use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Item type identifier, as understood by the item factory.
pub type ItemTypeId = u16;

/// Opaque reference to a player's inbox container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InboxRef(pub u16);

impl fmt::Display for InboxRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A participant, either resident in the game or loaded from storage.
///
/// `Player::default()` is the empty value a session loader populates in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    name: String,
    inbox: InboxRef,
    online: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, inbox: InboxRef, online: bool) -> Self {
        Self {
            name: name.into(),
            inbox,
            online,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inbox(&self) -> InboxRef {
        self.inbox
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn is_offline(&self) -> bool {
        !self.online
    }
}

/// A unit of game content.
///
/// Deliberately neither `Clone` nor `Copy`: an item has exactly one owner at a
/// time and can only change hands by move.
#[derive(Debug, PartialEq, Eq)]
pub struct Item {
    type_id: ItemTypeId,
    serial: u64,
}

impl Item {
    pub fn new(type_id: ItemTypeId, serial: u64) -> Self {
        Self { type_id, serial }
    }

    pub fn type_id(&self) -> ItemTypeId {
        self.type_id
    }

    /// Unique per factory instance.
    pub fn serial(&self) -> u64 {
        self.serial
    }
}

/// Where in an inbox an accepted item goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// First free position.
    #[default]
    Wherever,
    /// A specific slot index.
    Slot(u16),
}

/// Whether an inbox may grow beyond its configured capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    #[default]
    Ignore,
    Enforce,
}

impl CapacityPolicy {
    pub fn ignores_limit(self) -> bool {
        matches!(self, Self::Ignore)
    }
}
