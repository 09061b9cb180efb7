use {parcel_common::ItemTypeId, thiserror::Error};

/// Why a delivery did not happen.
///
/// [`ItemDelivery::deliver`](crate::ItemDelivery::deliver) swallows these;
/// [`ItemDelivery::try_deliver`](crate::ItemDelivery::try_deliver) reports them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("recipient {recipient:?} is neither resident nor loadable")]
    RecipientUnresolved { recipient: String },

    #[error("item type {item_type} could not be created")]
    ItemCreationFailed { item_type: ItemTypeId },
}

pub type Result<T> = std::result::Result<T, DeliveryError>;
