//! The element contract shared by containers and leaf items

use std::any::Any;

use ident::Id;

use crate::deep::Nested;
use crate::slot::{IdSlot, IndexSlot};

/// A value that can be stored in a [`Container`](crate::Container)
///
/// The slot types decide the element's capabilities at compile time:
///
/// * `Id = Id` makes the element identifiable, enabling id-based lookup,
///   removal and duplicate checks in the parent
/// * `Index = usize` makes the element sortable, so the parent records the
///   element's position in it and offers `insert`/`move_by_index`
///
/// Use [`Absent`](crate::Absent) for a capability the element does not
/// carry.
///
/// Elements that own children expose them through [`Element::nested`] so
/// that deep operations can descend into them. Leaves keep the default.
///
/// # Example
///
/// ```
/// use container::{Absent, Container, Element, Id, Nested};
///
/// #[derive(Debug, Default)]
/// struct Channel {
///     id: Id,
///     index: Absent,
///     subchannels: Container<Channel>,
/// }
///
/// impl Element for Channel {
///     type Id = Id;
///     type Index = Absent;
///
///     fn id_slot(&self) -> &Id {
///         &self.id
///     }
///     fn index_slot(&self) -> &Absent {
///         &self.index
///     }
///     fn index_slot_mut(&mut self) -> &mut Absent {
///         &mut self.index
///     }
///     fn nested(&self) -> Option<&dyn Nested> {
///         Some(&self.subchannels)
///     }
///     fn nested_mut(&mut self) -> Option<&mut dyn Nested> {
///         Some(&mut self.subchannels)
///     }
/// }
/// ```
pub trait Element: Any {
    /// Identifier storage: [`Id`] or [`Absent`](crate::Absent)
    type Id: IdSlot;

    /// Position storage: `usize` or [`Absent`](crate::Absent)
    type Index: IndexSlot;

    /// The element's identifier slot
    fn id_slot(&self) -> &Self::Id;

    /// The element's position slot
    fn index_slot(&self) -> &Self::Index;

    /// Mutable access to the position slot
    ///
    /// Only the owning container should write through this; it rewrites
    /// every position after each structural change.
    fn index_slot_mut(&mut self) -> &mut Self::Index;

    /// Children to descend into during deep operations
    fn nested(&self) -> Option<&dyn Nested> {
        None
    }

    /// Mutable counterpart of [`Element::nested`]
    fn nested_mut(&mut self) -> Option<&mut dyn Nested> {
        None
    }

    /// The element's identifier, when identifiable
    fn element_id(&self) -> Option<Id> {
        self.id_slot().get()
    }

    /// The element's recorded position, when sortable
    fn element_index(&self) -> Option<usize> {
        self.index_slot().get()
    }
}
