//! Per-player inbox containers.

use {
    parcel_common::{CapacityPolicy, Error, InboxRef, Item, ItemTypeId, Placement, Result},
    parcel_service_traits::InboxService,
    std::{
        collections::HashMap,
        sync::{
            Mutex,
            atomic::{AtomicU64, Ordering},
        },
    },
    tracing::{debug, warn},
};

/// A stored item as seen from outside the inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboxEntry {
    pub slot: u16,
    pub item_type: ItemTypeId,
    pub serial: u64,
}

/// Slot-addressed inboxes. Empty slots are `None`; slots are never compacted.
#[derive(Debug, Default)]
pub struct Inboxes {
    capacity: usize,
    slots: Mutex<HashMap<InboxRef, Vec<Option<Item>>>>,
    discarded: AtomicU64,
}

impl Inboxes {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Put `item` into `inbox`, returning the slot it landed in.
    ///
    /// On error the item has already been dropped.
    pub fn place(
        &self,
        inbox: InboxRef,
        item: Item,
        placement: Placement,
        capacity: CapacityPolicy,
    ) -> Result<u16> {
        let mut all = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        let slots = all.entry(inbox).or_default();

        let held = slots.iter().flatten().count();
        if !capacity.ignores_limit() && held >= self.capacity {
            return Err(Error::InboxFull {
                inbox,
                capacity: self.capacity,
            });
        }

        let index = match placement {
            Placement::Wherever => slots
                .iter()
                .position(Option::is_none)
                .unwrap_or(slots.len()),
            Placement::Slot(slot) => {
                let index = usize::from(slot);
                if slots.get(index).is_some_and(Option::is_some) {
                    return Err(Error::SlotOccupied { inbox, slot });
                }
                index
            },
        };
        let slot = u16::try_from(index)
            .map_err(|_| Error::message(format!("inbox {inbox} has no free slot index")))?;

        if index >= slots.len() {
            slots.resize_with(index + 1, || None);
        }
        slots[index] = Some(item);
        Ok(slot)
    }

    /// Snapshot of the items in `inbox`, in slot order.
    pub fn entries(&self, inbox: InboxRef) -> Vec<InboxEntry> {
        let all = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        all.get(&inbox)
            .map(|slots| {
                slots
                    .iter()
                    .enumerate()
                    .filter_map(|(index, item)| {
                        let item = item.as_ref()?;
                        Some(InboxEntry {
                            slot: u16::try_from(index).ok()?,
                            item_type: item.type_id(),
                            serial: item.serial(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count(&self, inbox: InboxRef) -> usize {
        self.entries(inbox).len()
    }

    /// Items accepted but dropped because they could not be placed.
    pub fn discarded(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }
}

impl InboxService for Inboxes {
    fn accept(&self, inbox: InboxRef, item: Item, placement: Placement, capacity: CapacityPolicy) {
        let item_type = item.type_id();
        let serial = item.serial();
        match self.place(inbox, item, placement, capacity) {
            Ok(slot) => debug!(%inbox, slot, item_type, serial, "item placed"),
            Err(e) => {
                self.discarded.fetch_add(1, Ordering::Relaxed);
                warn!(%inbox, item_type, serial, error = %e, "item discarded");
            },
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    const INBOX: InboxRef = InboxRef(1);

    fn item(serial: u64) -> Item {
        Item::new(1, serial)
    }

    #[test]
    fn wherever_fills_first_gap() {
        let inboxes = Inboxes::new(10);
        inboxes
            .place(INBOX, item(1), Placement::Slot(1), CapacityPolicy::Enforce)
            .unwrap();

        let slot = inboxes
            .place(INBOX, item(2), Placement::Wherever, CapacityPolicy::Enforce)
            .unwrap();
        assert_eq!(slot, 0);
        let slot = inboxes
            .place(INBOX, item(3), Placement::Wherever, CapacityPolicy::Enforce)
            .unwrap();
        assert_eq!(slot, 2);

        let serials: Vec<u64> = inboxes.entries(INBOX).iter().map(|e| e.serial).collect();
        assert_eq!(serials, vec![2, 1, 3]);
    }

    #[test]
    fn occupied_slot_is_rejected() {
        let inboxes = Inboxes::new(10);
        inboxes
            .place(INBOX, item(1), Placement::Slot(0), CapacityPolicy::Ignore)
            .unwrap();

        let err = inboxes
            .place(INBOX, item(2), Placement::Slot(0), CapacityPolicy::Ignore)
            .unwrap_err();
        assert!(matches!(err, Error::SlotOccupied { slot: 0, .. }));
        assert_eq!(inboxes.count(INBOX), 1);
    }

    #[test]
    fn capacity_enforced_only_on_request() {
        let inboxes = Inboxes::new(1);
        inboxes
            .place(INBOX, item(1), Placement::Wherever, CapacityPolicy::Enforce)
            .unwrap();

        assert!(matches!(
            inboxes.place(INBOX, item(2), Placement::Wherever, CapacityPolicy::Enforce),
            Err(Error::InboxFull { capacity: 1, .. })
        ));
        inboxes
            .place(INBOX, item(3), Placement::Wherever, CapacityPolicy::Ignore)
            .unwrap();
        assert_eq!(inboxes.count(INBOX), 2);
    }

    #[test]
    fn accept_counts_discarded_items() {
        let inboxes = Inboxes::new(0);
        inboxes.accept(INBOX, item(1), Placement::Wherever, CapacityPolicy::Enforce);
        inboxes.accept(INBOX, item(2), Placement::Wherever, CapacityPolicy::Ignore);

        assert_eq!(inboxes.discarded(), 1);
        assert_eq!(inboxes.count(INBOX), 1);
    }

    #[test]
    fn unknown_inbox_is_empty() {
        assert!(Inboxes::new(5).entries(InboxRef(42)).is_empty());
    }
}
