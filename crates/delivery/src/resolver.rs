//! Recipient resolution strategies.

use {
    crate::handle::PlayerHandle,
    parcel_common::Player,
    parcel_service_traits::{SessionDirectory, SessionLoader},
    std::sync::Arc,
};

/// One source of recipients in the resolution chain.
pub trait RecipientResolver: Send + Sync {
    /// Short label, reported in [`Delivered`](crate::Delivered).
    fn name(&self) -> &'static str;

    /// Resolve `recipient`, or `None` to fall through to the next source.
    fn try_resolve(&self, recipient: &str) -> Option<PlayerHandle<'_>>;
}

/// Players already resident in the game. Never owns what it returns.
pub struct ResidentLookup {
    directory: Arc<dyn SessionDirectory>,
}

impl ResidentLookup {
    pub fn new(directory: Arc<dyn SessionDirectory>) -> Self {
        Self { directory }
    }
}

impl RecipientResolver for ResidentLookup {
    fn name(&self) -> &'static str {
        "resident"
    }

    fn try_resolve(&self, recipient: &str) -> Option<PlayerHandle<'_>> {
        self.directory
            .find_by_name(recipient)
            .map(PlayerHandle::Borrowed)
    }
}

/// Players loaded from durable storage into a fresh, operation-owned value.
pub struct StorageLoad {
    loader: Arc<dyn SessionLoader>,
}

impl StorageLoad {
    pub fn new(loader: Arc<dyn SessionLoader>) -> Self {
        Self { loader }
    }
}

impl RecipientResolver for StorageLoad {
    fn name(&self) -> &'static str {
        "storage"
    }

    fn try_resolve(&self, recipient: &str) -> Option<PlayerHandle<'_>> {
        let mut player = Player::default();
        if self.loader.load_by_name(&mut player, recipient) {
            Some(PlayerHandle::Owned(player))
        } else {
            // Dropped here, before the next source is tried.
            None
        }
    }
}
