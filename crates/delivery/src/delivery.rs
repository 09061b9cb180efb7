//! The delivery procedure.

use {
    crate::{
        error::{DeliveryError, Result},
        resolver::{RecipientResolver, ResidentLookup, StorageLoad},
    },
    parcel_common::{CapacityPolicy, ItemTypeId, Placement, Player},
    parcel_service_traits::{
        InboxService, ItemFactory, PersistenceService, SessionDirectory, SessionLoader,
    },
    std::sync::Arc,
};

/// What a successful delivery did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
    pub recipient: String,
    /// Name of the resolver that produced the recipient.
    pub resolved_by: &'static str,
    /// True when the recipient was loaded for this operation and released at its end.
    pub owned: bool,
    pub item_type: ItemTypeId,
    pub serial: u64,
    /// True when the recipient was offline and a save was requested.
    pub saved: bool,
}

/// Hands newly created items to players.
///
/// Resolvers are tried in registration order; the first one that yields a
/// player wins. The procedure is synchronous and holds no locks, so callers
/// must serialize deliveries to the same player.
pub struct ItemDelivery {
    resolvers: Vec<Box<dyn RecipientResolver>>,
    items: Arc<dyn ItemFactory>,
    inboxes: Arc<dyn InboxService>,
    persistence: Arc<dyn PersistenceService>,
    placement: Placement,
    capacity: CapacityPolicy,
}

impl ItemDelivery {
    /// A delivery with an empty resolver chain.
    pub fn new(
        items: Arc<dyn ItemFactory>,
        inboxes: Arc<dyn InboxService>,
        persistence: Arc<dyn PersistenceService>,
    ) -> Self {
        Self {
            resolvers: Vec::new(),
            items,
            inboxes,
            persistence,
            placement: Placement::Wherever,
            capacity: CapacityPolicy::Ignore,
        }
    }

    /// Resident lookup first, then storage load.
    pub fn standard(
        directory: Arc<dyn SessionDirectory>,
        loader: Arc<dyn SessionLoader>,
        items: Arc<dyn ItemFactory>,
        inboxes: Arc<dyn InboxService>,
        persistence: Arc<dyn PersistenceService>,
    ) -> Self {
        Self::new(items, inboxes, persistence)
            .with_resolver(ResidentLookup::new(directory))
            .with_resolver(StorageLoad::new(loader))
    }

    /// Append a resolver to the end of the chain.
    pub fn with_resolver(mut self, resolver: impl RecipientResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Override the placement and capacity policies passed to the inbox.
    pub fn with_policy(mut self, placement: Placement, capacity: CapacityPolicy) -> Self {
        self.placement = placement;
        self.capacity = capacity;
        self
    }

    /// Names of the registered resolvers, in order.
    pub fn resolver_names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Best-effort delivery. Every failure is a silent no-op.
    pub fn deliver(&self, recipient: &str, item_type: ItemTypeId) {
        let _ = self.try_deliver(recipient, item_type);
    }

    /// Same as [`deliver`](Self::deliver), reporting what happened.
    pub fn try_deliver(&self, recipient: &str, item_type: ItemTypeId) -> Result<Delivered> {
        for resolver in &self.resolvers {
            // An owned `player` is released at the end of this iteration, on
            // the error path as well.
            let Some(player) = resolver.try_resolve(recipient) else {
                continue;
            };
            let owned = player.is_owned();
            let (serial, saved) = self.hand_over(&player, item_type)?;
            return Ok(Delivered {
                recipient: recipient.to_string(),
                resolved_by: resolver.name(),
                owned,
                item_type,
                serial,
                saved,
            });
        }
        Err(DeliveryError::RecipientUnresolved {
            recipient: recipient.to_string(),
        })
    }

    /// Create the item and move it into `player`'s inbox. Returns the item's
    /// serial and whether a save was requested.
    fn hand_over(&self, player: &Player, item_type: ItemTypeId) -> Result<(u64, bool)> {
        let item = self
            .items
            .create(item_type)
            .ok_or(DeliveryError::ItemCreationFailed { item_type })?;
        let serial = item.serial();

        self.inboxes
            .accept(player.inbox(), item, self.placement, self.capacity);

        let saved = player.is_offline();
        if saved {
            self.persistence.save(player);
        }
        Ok((serial, saved))
    }
}
