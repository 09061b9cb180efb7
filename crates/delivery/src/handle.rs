use {parcel_common::Player, std::ops::Deref};

/// A resolved recipient, tagged with who owns it.
///
/// Delivery code only ever sees `&Player` through [`Deref`], so it cannot tell
/// the two apart. An `Owned` player is dropped together with the handle.
#[derive(Debug)]
pub enum PlayerHandle<'a> {
    /// Resident in the session directory; outlives the operation.
    Borrowed(&'a Player),
    /// Loaded from storage for the duration of one operation.
    Owned(Player),
}

impl PlayerHandle<'_> {
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl Deref for PlayerHandle<'_> {
    type Target = Player;

    fn deref(&self) -> &Player {
        match self {
            Self::Borrowed(player) => *player,
            Self::Owned(player) => player,
        }
    }
}
