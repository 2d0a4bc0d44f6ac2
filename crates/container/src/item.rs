//! Leaf elements

use derive_more::{Deref, DerefMut};
use ident::Id;

use crate::element::Element;
use crate::slot::{Absent, IdSlot, IndexSlot};

/// A leaf element that holds no children
///
/// `I` and `X` select the identifiable and sortable capabilities, as for
/// [`Container`](crate::Container). `P` is an arbitrary payload, reachable
/// directly through `Deref`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, DerefMut)]
pub struct Item<I = Absent, X = Absent, P = ()> {
    /// This item's identifier within its parent
    pub id: I,
    index: X,
    /// User-defined data carried by the item
    #[deref]
    #[deref_mut]
    pub payload: P,
}

impl<I: IdSlot, X: IndexSlot, P> Item<I, X, P> {
    /// Create an item carrying `payload`
    pub fn from_payload(payload: P) -> Self {
        Self {
            id: I::default(),
            index: X::default(),
            payload,
        }
    }
}

impl<X: IndexSlot, P> Item<Id, X, P> {
    /// Create an item carrying `id` and `payload`
    pub fn identified(id: Id, payload: P) -> Self {
        Self {
            id,
            index: X::default(),
            payload,
        }
    }
}

impl<X: IndexSlot, P: Default> Item<Id, X, P> {
    /// Create an item carrying `id` and a default payload
    pub fn with_id(id: Id) -> Self {
        Self::identified(id, P::default())
    }
}

impl<I, P> Item<I, usize, P> {
    /// This item's position within its parent
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<I: IdSlot, X: IndexSlot, P: 'static> Element for Item<I, X, P> {
    type Id = I;
    type Index = X;

    fn id_slot(&self) -> &I {
        &self.id
    }

    fn index_slot(&self) -> &X {
        &self.index
    }

    fn index_slot_mut(&mut self) -> &mut X {
        &mut self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_capabilities() {
        let item: Item<Id, usize> = Item::with_id(Id::new(3));
        assert_eq!(item.element_id(), Some(Id::new(3)));
        assert_eq!(item.element_index(), Some(0));
        assert!(item.nested().is_none());

        let plain: Item = Item::default();
        assert_eq!(plain.element_id(), None);
        assert_eq!(plain.element_index(), None);
        assert_eq!(std::mem::size_of::<Item>(), 0);
    }

    #[test]
    fn test_item_payload_deref() {
        let mut item: Item<Absent, Absent, String> = Item::from_payload("lead".to_string());
        item.push_str(" vocals");
        assert_eq!(item.len(), 11);
        assert_eq!(*item, "lead vocals");
    }
}
