use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque handle addressing an element independently of its position
///
/// The value 0 is reserved as the invalid/unset identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[display(fmt = "{}", _0)]
pub struct Id(u64);

impl Id {
    /// The unset identifier
    pub const INVALID: Id = Id(0);

    /// Wrap a raw value
    pub const fn new(value: u64) -> Self {
        Id(value)
    }

    /// Get the raw value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns true unless this is [`Id::INVALID`]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id(value)
    }
}

impl From<Id> for u64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl PartialEq<u64> for Id {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Id> for u64 {
    fn eq(&self, other: &Id) -> bool {
        *self == other.0
    }
}
