//! Durable player records, kept in memory.

use {
    parcel_common::{InboxRef, Player},
    parcel_service_traits::{PersistenceService, SessionLoader},
    std::{
        collections::HashMap,
        sync::{
            Mutex,
            atomic::{AtomicU64, Ordering},
        },
    },
    tracing::{debug, info},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StoredRecord {
    inbox: InboxRef,
    online: bool,
}

/// Loads players by name and writes them back on save.
#[derive(Debug, Default)]
pub struct PlayerStorage {
    records: Mutex<HashMap<String, StoredRecord>>,
    loads: AtomicU64,
    saves: AtomicU64,
}

impl PlayerStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record directly, bypassing the save counter.
    pub fn insert(&self, name: impl Into<String>, inbox: InboxRef, online: bool) {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.insert(name.into(), StoredRecord { inbox, online });
    }

    /// A copy of the stored player, without counting it as a load.
    pub fn get(&self, name: &str) -> Option<Player> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records
            .get(name)
            .map(|r| Player::new(name, r.inbox, r.online))
    }

    /// Successful loads so far.
    pub fn loads(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn saves(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }
}

impl SessionLoader for PlayerStorage {
    fn load_by_name(&self, player: &mut Player, name: &str) -> bool {
        let Some(stored) = self.get(name) else {
            debug!(recipient = name, "no stored record");
            return false;
        };
        *player = stored;
        self.loads.fetch_add(1, Ordering::Relaxed);
        debug!(recipient = name, inbox = %player.inbox(), "loaded player from storage");
        true
    }
}

impl PersistenceService for PlayerStorage {
    fn save(&self, player: &Player) {
        self.insert(player.name(), player.inbox(), player.is_online());
        self.saves.fetch_add(1, Ordering::Relaxed);
        info!(player = player.name(), "saved player");
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_populates_in_place() {
        let storage = PlayerStorage::new();
        storage.insert("notloaded", InboxRef(4), false);

        let mut player = Player::default();
        assert!(storage.load_by_name(&mut player, "notloaded"));
        assert_eq!(player, Player::new("notloaded", InboxRef(4), false));
        assert_eq!(storage.loads(), 1);
    }

    #[test]
    fn load_miss_counts_nothing() {
        let storage = PlayerStorage::new();
        let mut player = Player::default();

        assert!(!storage.load_by_name(&mut player, "faillogin"));
        assert_eq!(storage.loads(), 0);
    }

    #[test]
    fn save_writes_record_back() {
        let storage = PlayerStorage::new();
        storage.insert("example", InboxRef(1), false);

        storage.save(&Player::new("example", InboxRef(1), true));
        assert_eq!(storage.saves(), 1);
        assert!(storage.get("example").unwrap().is_online());

        // Saving an unknown player creates its record.
        storage.save(&Player::new("newcomer", InboxRef(9), false));
        assert_eq!(storage.get("newcomer").unwrap().inbox(), InboxRef(9));
        assert_eq!(storage.saves(), 2);
    }
}
