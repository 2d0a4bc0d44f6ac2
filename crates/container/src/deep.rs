//! Deep operations across nesting levels
//!
//! A hierarchy may use a different element type at each depth (columns
//! holding channels holding sub-channels, say). Deep operations name the
//! level they target with a type parameter `U` and walk the whole subtree in
//! pre-order: each element is checked before its own children, and siblings
//! are visited in order. An element matches only when it is of type `U` and
//! carries the requested id; descent continues through every level
//! regardless of whether that level is identifiable.

use std::any::{Any, TypeId};

use ident::Id;
use log::trace;

use crate::container::Container;
use crate::element::Element;
use crate::error::{ContainerError, OrFatal};
use crate::slot::{IdSlot, IndexSlot};

/// Type-erased view of an element's children, used to recurse through
/// heterogeneous levels
///
/// Implemented by [`Container`]. Element types that own a container expose
/// it through [`Element::nested`].
pub trait Nested {
    /// First pre-order element of type `level` carrying `id`
    fn find_nested(&self, level: TypeId, id: Id) -> Option<&dyn Any>;

    /// Mutable counterpart of [`Nested::find_nested`]
    fn find_nested_mut(&mut self, level: TypeId, id: Id) -> Option<&mut dyn Any>;

    /// Detach the first pre-order element of type `level` carrying `id`
    /// from whichever container holds it
    fn remove_nested(&mut self, level: TypeId, id: Id) -> Option<Box<dyn Any>>;
}

impl<T: Element, I: IdSlot, X: IndexSlot> Container<T, I, X> {
    fn matches(item: &T, level: TypeId, id: Id) -> bool {
        level == TypeId::of::<T>() && item.element_id() == Some(id)
    }
}

impl<T: Element, I: IdSlot, X: IndexSlot> Nested for Container<T, I, X> {
    fn find_nested(&self, level: TypeId, id: Id) -> Option<&dyn Any> {
        for item in &self.items {
            if Self::matches(item, level, id) {
                return Some(item as &dyn Any);
            }
            if let Some(found) = item.nested().and_then(|n| n.find_nested(level, id)) {
                return Some(found);
            }
        }
        None
    }

    fn find_nested_mut(&mut self, level: TypeId, id: Id) -> Option<&mut dyn Any> {
        for item in &mut self.items {
            if Self::matches(item, level, id) {
                return Some(item as &mut dyn Any);
            }
            if let Some(found) = item
                .nested_mut()
                .and_then(|n| n.find_nested_mut(level, id))
            {
                return Some(found);
            }
        }
        None
    }

    fn remove_nested(&mut self, level: TypeId, id: Id) -> Option<Box<dyn Any>> {
        for position in 0..self.items.len() {
            if Self::matches(&self.items[position], level, id) {
                trace!("Deep removal of element {} at {}", id, position);
                let removed: Box<dyn Any> = Box::new(self.remove_by_index(position));
                return Some(removed);
            }
            if let Some(removed) = self.items[position]
                .nested_mut()
                .and_then(|n| n.remove_nested(level, id))
            {
                return Some(removed);
            }
        }
        None
    }
}

impl<T: Element, I: IdSlot, X: IndexSlot> Container<T, I, X> {
    /// Find an element of level `U` carrying `id` anywhere in the subtree
    ///
    /// Returns the first match in pre-order.
    pub fn deep_find_by_id<U: Element>(&self, id: Id) -> Option<&U> {
        self.find_nested(TypeId::of::<U>(), id)?.downcast_ref::<U>()
    }

    /// Mutable counterpart of [`Container::deep_find_by_id`]
    pub fn deep_find_by_id_mut<U: Element>(&mut self, id: Id) -> Option<&mut U> {
        self.find_nested_mut(TypeId::of::<U>(), id)?
            .downcast_mut::<U>()
    }

    /// Returns true if an element of level `U` carries `id` anywhere in the
    /// subtree
    pub fn deep_contains<U: Element>(&self, id: Id) -> bool {
        self.deep_find_by_id::<U>(id).is_some()
    }

    /// Get an element of level `U` carrying `id` anywhere in the subtree
    pub fn try_deep_get_by_id<U: Element>(&self, id: Id) -> Result<&U, ContainerError> {
        self.deep_find_by_id::<U>(id)
            .ok_or(ContainerError::MissingId(id))
    }

    /// Get an element of level `U` carrying `id` anywhere in the subtree
    ///
    /// # Panics
    ///
    /// Panics if no such element exists.
    #[track_caller]
    pub fn deep_get_by_id<U: Element>(&self, id: Id) -> &U {
        self.try_deep_get_by_id::<U>(id).or_fatal()
    }

    /// Mutable counterpart of [`Container::deep_get_by_id`]
    #[track_caller]
    pub fn deep_get_by_id_mut<U: Element>(&mut self, id: Id) -> &mut U {
        self.deep_find_by_id_mut::<U>(id)
            .ok_or(ContainerError::MissingId(id))
            .or_fatal()
    }

    /// Remove the first pre-order element of level `U` carrying `id`
    ///
    /// The element is detached from the container that directly holds it,
    /// whose positions are then rewritten. Removing an id that is not
    /// present does nothing and returns `None`.
    pub fn deep_remove_by_id<U: Element>(&mut self, id: Id) -> Option<U> {
        let removed = self.remove_nested(TypeId::of::<U>(), id)?;
        removed.downcast::<U>().ok().map(|boxed| *boxed)
    }
}
