use container::{Absent, Container, Element, Id, Nested};
use derive_more::{Deref, DerefMut};
use pretty_assertions::assert_eq;

/// A channel holding sub-channels of its own kind
#[derive(Debug, Default, Deref, DerefMut)]
struct Channel(Container<Channel, Id>);

impl Channel {
    fn new(id: u64) -> Self {
        Channel(Container::with_id(Id::new(id)))
    }
}

impl Element for Channel {
    type Id = Id;
    type Index = Absent;

    fn id_slot(&self) -> &Id {
        self.0.id_slot()
    }

    fn index_slot(&self) -> &Absent {
        self.0.index_slot()
    }

    fn index_slot_mut(&mut self) -> &mut Absent {
        self.0.index_slot_mut()
    }

    fn nested(&self) -> Option<&dyn Nested> {
        self.0.nested()
    }

    fn nested_mut(&mut self) -> Option<&mut dyn Nested> {
        self.0.nested_mut()
    }
}

type Column = Container<Channel>;

fn column() -> Column {
    let mut channel1 = Channel::new(1);
    channel1.add(Channel::new(4));
    channel1.add(Channel::new(5));
    channel1.add(Channel::new(6));

    let mut column = Column::new();
    column.add(channel1);
    column.add(Channel::new(2));
    column.add(Channel::new(3));
    column
}

#[test]
fn test_shallow_and_deep_find() {
    let column = column();

    assert_eq!(column.size(), 3);
    // Sub-channel should not be found in shallow find...
    assert!(column.find_by_id(Id::new(4)).is_none());
    // ...but should be in deep find
    assert!(column.deep_find_by_id::<Channel>(Id::new(4)).is_some());
    assert_eq!(column.deep_get_by_id::<Channel>(Id::new(3)).id, Id::new(3));
}

#[test]
fn test_shallow_deletion_by_id() {
    let mut column = column();
    column.remove_by_id(Id::new(1));

    assert_eq!(column.size(), 2);
    assert!(column.find_by_id(Id::new(1)).is_none());
    // The removed channel took its sub-channels with it
    assert!(column.deep_find_by_id::<Channel>(Id::new(4)).is_none());
}

#[test]
fn test_deep_deletion_by_id() {
    let mut column = column();
    // Channel with id 6 was inside channel with id 1
    let removed = column.deep_remove_by_id::<Channel>(Id::new(6));

    assert_eq!(removed.map(|channel| channel.id), Some(Id::new(6)));
    assert_eq!(column.size(), 3);
    assert_eq!(column.get_by_id(Id::new(1)).size(), 2);
    assert!(column.deep_find_by_id::<Channel>(Id::new(6)).is_none());
}

#[test]
fn test_deep_search_is_pre_order() {
    // Sibling-only uniqueness lets id 7 appear in two branches
    let mut first = Channel::new(1);
    first.add(Channel::new(7));
    let mut grandchild_holder = Channel::new(8);
    grandchild_holder.add(Channel::new(7));
    first.add(grandchild_holder);
    first.get_by_id_mut(Id::new(7)).add(Channel::new(70));

    let mut second = Channel::new(2);
    second.add(Channel::new(7));

    let column: Column = [first, second].into_iter().collect();

    // The first id 7 in pre-order is the direct child of channel 1, which
    // owns channel 70
    let found = column.deep_get_by_id::<Channel>(Id::new(7));
    assert!(found.contains(Id::new(70)));
}

#[test]
fn test_deep_mutation() {
    let mut column = column();
    column
        .deep_get_by_id_mut::<Channel>(Id::new(5))
        .add(Channel::new(50));

    let channel1 = column.get_by_id(Id::new(1));
    assert_eq!(channel1.get_by_id(Id::new(5)).size(), 1);
    assert!(column.deep_contains::<Channel>(Id::new(50)));
}

#[test]
fn test_clear_drops_subtree() {
    let mut column = column();
    column.clear();

    assert!(column.is_empty());
    assert!(!column.deep_contains::<Channel>(Id::new(4)));
}
