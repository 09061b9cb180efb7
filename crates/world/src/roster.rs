//! Players currently in game.

use {
    parcel_common::Player,
    parcel_service_traits::SessionDirectory,
    std::collections::HashMap,
    tracing::trace,
};

/// Resident players keyed by name. Owns every player it hands out.
#[derive(Debug, Default)]
pub struct Roster {
    players: HashMap<String, Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resident player.
    pub fn insert(&mut self, player: Player) {
        self.players.insert(player.name().to_string(), player);
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Resident names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.players.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl SessionDirectory for Roster {
    fn find_by_name(&self, name: &str) -> Option<&Player> {
        let found = self.get(name);
        trace!(recipient = name, resident = found.is_some(), "roster lookup");
        found
    }
}
