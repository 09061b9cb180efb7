use {crate::types::InboxRef, thiserror::Error};

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error("inbox {inbox} is full ({capacity} items)")]
    InboxFull { inbox: InboxRef, capacity: usize },

    #[error("slot {slot} of inbox {inbox} is occupied")]
    SlotOccupied { inbox: InboxRef, slot: u16 },
}

impl Error {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
