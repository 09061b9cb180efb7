//! Item creation.

use {
    parcel_common::{Item, ItemTypeId},
    parcel_service_traits::ItemFactory,
    std::{
        collections::HashSet,
        sync::atomic::{AtomicU64, Ordering},
    },
    tracing::debug,
};

/// Creates items of any type except the refused ones. Serial numbers start
/// at 1 and are never reused.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    refused: HashSet<ItemTypeId>,
    created: AtomicU64,
}

impl ItemCatalog {
    pub fn new(refused: impl IntoIterator<Item = ItemTypeId>) -> Self {
        Self {
            refused: refused.into_iter().collect(),
            created: AtomicU64::new(0),
        }
    }

    pub fn created(&self) -> u64 {
        self.created.load(Ordering::Relaxed)
    }
}

impl ItemFactory for ItemCatalog {
    fn create(&self, type_id: ItemTypeId) -> Option<Item> {
        if self.refused.contains(&type_id) {
            debug!(item_type = type_id, "item type refused");
            return None;
        }
        let serial = self.created.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(item_type = type_id, serial, "item created");
        Some(Item::new(type_id, serial))
    }
}
