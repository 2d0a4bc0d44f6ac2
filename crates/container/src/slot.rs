//! Capability slots carried by elements
//!
//! An element is identifiable when its id slot is [`Id`] and sortable when
//! its index slot is `usize`. [`Absent`] fills either slot when the
//! capability is not wanted, at zero size.

use std::fmt::Debug;

use ident::Id;

/// Placeholder for a capability an element does not carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absent;

/// Storage for an element's identifier
pub trait IdSlot: Debug + Default + 'static {
    /// The stored identifier, if this slot carries one
    fn get(&self) -> Option<Id>;
}

impl IdSlot for Id {
    fn get(&self) -> Option<Id> {
        Some(*self)
    }
}

impl IdSlot for Absent {
    fn get(&self) -> Option<Id> {
        None
    }
}

/// Storage for an element's position within its parent
pub trait IndexSlot: Debug + Default + 'static {
    /// Whether positions are recorded at all
    const TRACKED: bool;

    /// The recorded position, if this slot carries one
    fn get(&self) -> Option<usize>;

    /// Record a new position. A no-op for untracked slots.
    fn set(&mut self, index: usize);
}

impl IndexSlot for usize {
    const TRACKED: bool = true;

    fn get(&self) -> Option<usize> {
        Some(*self)
    }

    fn set(&mut self, index: usize) {
        *self = index;
    }
}

impl IndexSlot for Absent {
    const TRACKED: bool = false;

    fn get(&self) -> Option<usize> {
        None
    }

    fn set(&mut self, _index: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_slots() {
        assert_eq!(IdSlot::get(&Absent), None);
        assert_eq!(IndexSlot::get(&Absent), None);
        assert!(!<Absent as IndexSlot>::TRACKED);
        assert_eq!(std::mem::size_of::<Absent>(), 0);
    }

    #[test]
    fn test_present_slots() {
        assert_eq!(IdSlot::get(&Id::new(3)), Some(Id::new(3)));

        let mut index = 0usize;
        IndexSlot::set(&mut index, 4);
        assert_eq!(IndexSlot::get(&index), Some(4));
        assert!(<usize as IndexSlot>::TRACKED);
    }
}
