//! In-memory game world implementing every collaborator the delivery core
//! consumes.
//!
//! The default world reproduces the demonstration fixture: `example` is in
//! game, `notloaded` exists only in storage, everyone else is unknown, and
//! item type 99 cannot be created.

pub mod catalog;
pub mod inboxes;
pub mod roster;
pub mod storage;

use {
    parcel_common::{InboxRef, Player},
    parcel_config::{DeliveryConfig, WorldConfig},
    parcel_delivery::ItemDelivery,
    std::sync::Arc,
    tracing::{error, info, warn},
};

pub use {
    catalog::ItemCatalog,
    inboxes::{InboxEntry, Inboxes},
    roster::Roster,
    storage::PlayerStorage,
};

/// Shared handles to the world's collaborators.
#[derive(Clone)]
pub struct World {
    pub roster: Arc<Roster>,
    pub storage: Arc<PlayerStorage>,
    pub catalog: Arc<ItemCatalog>,
    pub inboxes: Arc<Inboxes>,
}

impl World {
    /// Build a world from config. Inbox references are assigned in config
    /// order, residents first, starting at 1.
    pub fn from_config(config: &WorldConfig) -> Self {
        let mut roster = Roster::new();
        let storage = PlayerStorage::new();
        let mut inboxes = InboxNumbers::default();

        for entry in &config.residents {
            let Some(inbox) = inboxes.next() else {
                error!(player = %entry.name, "inbox references exhausted, resident not added");
                continue;
            };
            roster.insert(Player::new(&entry.name, inbox, entry.online));
            // Residents have a stored record too, so saves land somewhere known.
            storage.insert(&entry.name, inbox, entry.online);
        }

        for entry in &config.stored {
            if roster.get(&entry.name).is_some() {
                warn!(player = %entry.name, "stored player is already resident, skipping");
                continue;
            }
            let Some(inbox) = inboxes.next() else {
                error!(player = %entry.name, "inbox references exhausted, stored player not added");
                continue;
            };
            storage.insert(&entry.name, inbox, entry.online);
        }

        info!(
            residents = roster.len(),
            stored = config.stored.len(),
            inbox_capacity = config.inbox_capacity,
            "world ready"
        );

        Self {
            roster: Arc::new(roster),
            storage: Arc::new(storage),
            catalog: Arc::new(ItemCatalog::new(config.failing_item_ids.iter().copied())),
            inboxes: Arc::new(Inboxes::new(config.inbox_capacity)),
        }
    }

    /// The standard delivery chain wired to this world.
    pub fn delivery(&self, config: &DeliveryConfig) -> ItemDelivery {
        ItemDelivery::standard(
            self.roster.clone(),
            self.storage.clone(),
            self.catalog.clone(),
            self.inboxes.clone(),
            self.storage.clone(),
        )
        .with_policy(config.placement, config.capacity)
    }

    /// Inbox of a resident or stored player.
    pub fn inbox_of(&self, name: &str) -> Option<InboxRef> {
        self.roster
            .get(name)
            .map(Player::inbox)
            .or_else(|| self.storage.get(name).map(|p| p.inbox()))
    }
}

/// Inbox references `1..=u16::MAX`, each handed out once.
struct InboxNumbers {
    next: Option<u16>,
}

impl Default for InboxNumbers {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl Iterator for InboxNumbers {
    type Item = InboxRef;

    fn next(&mut self) -> Option<InboxRef> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(InboxRef(current))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::from_config(&WorldConfig::default())
    }
}
