//! Collaborator interfaces consumed by the item delivery core.
//!
//! Each trait has a `Noop` implementation that resolves nothing and creates
//! nothing, allowing a delivery to be assembled before the game server's real
//! services are wired in.

use {
    parcel_common::{CapacityPolicy, InboxRef, Item, ItemTypeId, Placement, Player},
    tracing::debug,
};

// ── Session directory ───────────────────────────────────────────────────────

/// Lookup of participants that are already resident in the game.
pub trait SessionDirectory: Send + Sync {
    /// The returned player is borrowed from the directory and stays owned by it.
    fn find_by_name(&self, name: &str) -> Option<&Player>;
}

pub struct NoopSessionDirectory;

impl SessionDirectory for NoopSessionDirectory {
    fn find_by_name(&self, _name: &str) -> Option<&Player> {
        None
    }
}

// ── Session loader ──────────────────────────────────────────────────────────

/// Materializes a participant's state from durable storage.
pub trait SessionLoader: Send + Sync {
    /// Populate `player` in place. Returns `false` when storage has no record
    /// for `name`; `player` is then left in an unspecified state.
    fn load_by_name(&self, player: &mut Player, name: &str) -> bool;
}

pub struct NoopSessionLoader;

impl SessionLoader for NoopSessionLoader {
    fn load_by_name(&self, _player: &mut Player, _name: &str) -> bool {
        false
    }
}

// ── Item factory ────────────────────────────────────────────────────────────

pub trait ItemFactory: Send + Sync {
    /// Create a new item owned by the caller, or `None` for an unknown type.
    fn create(&self, type_id: ItemTypeId) -> Option<Item>;
}

pub struct NoopItemFactory;

impl ItemFactory for NoopItemFactory {
    fn create(&self, _type_id: ItemTypeId) -> Option<Item> {
        None
    }
}

// ── Inbox ───────────────────────────────────────────────────────────────────

pub trait InboxService: Send + Sync {
    /// Takes ownership of `item` unconditionally. If the item cannot be
    /// placed, disposing of it is the implementation's responsibility.
    fn accept(&self, inbox: InboxRef, item: Item, placement: Placement, capacity: CapacityPolicy);
}

pub struct NoopInboxService;

impl InboxService for NoopInboxService {
    fn accept(&self, inbox: InboxRef, item: Item, _placement: Placement, _capacity: CapacityPolicy) {
        debug!(%inbox, item_type = item.type_id(), "inbox service not configured, dropping item");
    }
}

// ── Persistence ─────────────────────────────────────────────────────────────

pub trait PersistenceService: Send + Sync {
    /// Persist the participant's state. The player stays with the caller.
    fn save(&self, player: &Player);
}

pub struct NoopPersistenceService;

impl PersistenceService for NoopPersistenceService {
    fn save(&self, _player: &Player) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_services_resolve_nothing() {
        assert!(NoopSessionDirectory.find_by_name("example").is_none());

        let mut player = Player::default();
        assert!(!NoopSessionLoader.load_by_name(&mut player, "example"));

        assert!(NoopItemFactory.create(1).is_none());
    }

    #[test]
    fn noop_inbox_consumes_item() {
        let item = Item::new(1, 0);
        NoopInboxService.accept(
            InboxRef(1),
            item,
            Placement::Wherever,
            CapacityPolicy::Ignore,
        );
        NoopPersistenceService.save(&Player::new("example", InboxRef(1), false));
    }
}
