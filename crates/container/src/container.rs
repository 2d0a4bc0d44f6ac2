//! The ordered, owning container

use ident::Id;
use log::trace;

use crate::deep::Nested;
use crate::element::Element;
use crate::error::{ContainerError, OrFatal};
use crate::slot::{Absent, IdSlot, IndexSlot};

/// An ordered collection of elements that may itself be an element
///
/// Insertion order is meaningful: it is the iteration order and, for
/// sortable elements, the order recorded in every element's index slot.
///
/// `I` and `X` select whether the container itself is identifiable and
/// sortable when it is stored inside another container. Its own id and
/// index describe its place in that parent; the parent writes the index.
///
/// Operations that need identifiable elements exist only when
/// `T: Element<Id = Id>`, and those that need sortable elements only when
/// `T: Element<Index = usize>`.
///
/// Operations without a `try_` prefix treat a broken precondition as a
/// programming error and panic. The `try_` variants return a
/// [`ContainerError`] instead. Neither form mutates the container when a
/// precondition fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<T, I = Absent, X = Absent> {
    /// This container's identifier within its parent
    pub id: I,
    index: X,
    pub(crate) items: Vec<T>,
}

impl<T, I: Default, X: Default> Default for Container<T, I, X> {
    fn default() -> Self {
        Self {
            id: I::default(),
            index: X::default(),
            items: Vec::new(),
        }
    }
}

impl<T, I> Container<T, I, usize> {
    /// This container's position within its parent
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T: Element, X: IndexSlot> Container<T, Id, X> {
    /// Create an empty container carrying `id`
    pub fn with_id(id: Id) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Create a container carrying `id`, pre-filled with `items`
    ///
    /// # Panics
    ///
    /// Panics if two of the items share an id.
    #[track_caller]
    pub fn with_items(id: Id, items: impl IntoIterator<Item = T>) -> Self {
        let mut container = Self::with_id(id);
        container.extend(items);
        container
    }
}

impl<T: Element, I: IdSlot, X: IndexSlot> Container<T, I, X> {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct elements
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Number of direct elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no direct elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the direct elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably over the direct elements in order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// The direct elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Get the element at position `index`
    ///
    /// For sortable elements the element's recorded index is cross-checked
    /// against `index`.
    pub fn try_get_by_index(&self, index: usize) -> Result<&T, ContainerError> {
        let item = self.items.get(index).ok_or(ContainerError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })?;

        match item.element_index() {
            Some(stored) if stored != index => Err(ContainerError::StaleIndex {
                position: index,
                stored,
            }),
            _ => Ok(item),
        }
    }

    /// Get the element at position `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn get_by_index(&self, index: usize) -> &T {
        self.try_get_by_index(index).or_fatal()
    }

    /// Mutable counterpart of [`Container::get_by_index`]
    #[track_caller]
    pub fn get_by_index_mut(&mut self, index: usize) -> &mut T {
        self.try_get_by_index(index).or_fatal();
        &mut self.items[index]
    }

    /// Get the last element
    pub fn try_get_last(&self) -> Result<&T, ContainerError> {
        self.items.last().ok_or(ContainerError::Empty)
    }

    /// Get the last element
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[track_caller]
    pub fn get_last(&self) -> &T {
        self.try_get_last().or_fatal()
    }

    /// Mutable counterpart of [`Container::get_last`]
    #[track_caller]
    pub fn get_last_mut(&mut self) -> &mut T {
        self.items.last_mut().ok_or(ContainerError::Empty).or_fatal()
    }

    /// Returns true if any direct element satisfies `predicate`
    pub fn any_of(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().any(predicate)
    }

    /// Collect the direct elements satisfying `predicate`, in order
    pub fn get_if(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<&T> {
        self.items.iter().filter(|item| predicate(*item)).collect()
    }

    /// Mutable counterpart of [`Container::get_if`]
    pub fn get_if_mut(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Vec<&mut T> {
        self.items
            .iter_mut()
            .filter(|item| predicate(&**item))
            .collect()
    }

    /// Append `item` and return a reference to it in its new place
    ///
    /// On error the item is dropped and the container is left as it was.
    pub fn try_add(&mut self, item: T) -> Result<&mut T, ContainerError> {
        self.ensure_unique(&item)?;

        trace!("Adding element {:?} at {}", item.element_id(), self.items.len());
        self.items.push(item);
        self.rebuild_indexes();

        let last = self.items.len() - 1;
        Ok(&mut self.items[last])
    }

    /// Append `item` and return a reference to it in its new place
    ///
    /// # Panics
    ///
    /// Panics if a direct sibling already carries the item's id.
    #[track_caller]
    pub fn add(&mut self, item: T) -> &mut T {
        self.try_add(item).or_fatal()
    }

    /// Remove and return the element at position `index`
    pub fn try_remove_by_index(&mut self, index: usize) -> Result<T, ContainerError> {
        if index >= self.items.len() {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let item = self.items.remove(index);
        trace!("Removed element {:?} from {}", item.element_id(), index);
        self.rebuild_indexes();
        Ok(item)
    }

    /// Remove and return the element at position `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn remove_by_index(&mut self, index: usize) -> T {
        self.try_remove_by_index(index).or_fatal()
    }

    /// Remove every direct element, dropping their subtrees
    pub fn clear(&mut self) {
        trace!("Clearing {} elements", self.items.len());
        self.items.clear();
    }

    /// Position of the direct element carrying `id`, by linear scan
    fn position_of(&self, id: Id) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.element_id() == Some(id))
    }

    fn ensure_unique(&self, item: &T) -> Result<(), ContainerError> {
        match item.element_id() {
            Some(id) if self.position_of(id).is_some() => Err(ContainerError::DuplicateId(id)),
            _ => Ok(()),
        }
    }

    /// Write every direct element's physical position into its index slot
    fn rebuild_indexes(&mut self) {
        if !<T::Index as IndexSlot>::TRACKED {
            return;
        }
        for (index, item) in self.items.iter_mut().enumerate() {
            item.index_slot_mut().set(index);
        }
    }
}

impl<T, I, X> Container<T, I, X>
where
    T: Element<Id = Id>,
    I: IdSlot,
    X: IndexSlot,
{
    /// Find the direct element carrying `id`
    ///
    /// Descendants below the direct elements are not searched.
    pub fn find_by_id(&self, id: Id) -> Option<&T> {
        self.items.iter().find(|item| *item.id_slot() == id)
    }

    /// Mutable counterpart of [`Container::find_by_id`]
    pub fn find_by_id_mut(&mut self, id: Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| *item.id_slot() == id)
    }

    /// Returns true if a direct element carries `id`
    pub fn contains(&self, id: Id) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Get the direct element carrying `id`
    pub fn try_get_by_id(&self, id: Id) -> Result<&T, ContainerError> {
        self.find_by_id(id).ok_or(ContainerError::MissingId(id))
    }

    /// Get the direct element carrying `id`
    ///
    /// # Panics
    ///
    /// Panics if no direct element carries `id`.
    #[track_caller]
    pub fn get_by_id(&self, id: Id) -> &T {
        self.try_get_by_id(id).or_fatal()
    }

    /// Mutable counterpart of [`Container::get_by_id`]
    #[track_caller]
    pub fn get_by_id_mut(&mut self, id: Id) -> &mut T {
        self.find_by_id_mut(id)
            .ok_or(ContainerError::MissingId(id))
            .or_fatal()
    }

    /// Position of the direct element carrying `id`
    ///
    /// Sortable elements answer from their recorded index; others are
    /// located by scanning.
    pub fn try_get_index(&self, id: Id) -> Result<usize, ContainerError> {
        let item = self.try_get_by_id(id)?;
        match item.element_index() {
            Some(index) => Ok(index),
            None => self.position_of(id).ok_or(ContainerError::MissingId(id)),
        }
    }

    /// Position of the direct element carrying `id`
    ///
    /// # Panics
    ///
    /// Panics if no direct element carries `id`.
    #[track_caller]
    pub fn get_index(&self, id: Id) -> usize {
        self.try_get_index(id).or_fatal()
    }

    /// Remove every direct element carrying `id`
    ///
    /// Removing an id that is not present does nothing.
    pub fn remove_by_id(&mut self, id: Id) {
        let before = self.items.len();
        self.items.retain(|item| *item.id_slot() != id);

        if self.items.len() != before {
            trace!("Removed element {} ({} left)", id, self.items.len());
            self.rebuild_indexes();
        }
    }
}

impl<T, I, X> Container<T, I, X>
where
    T: Element<Index = usize>,
    I: IdSlot,
    X: IndexSlot,
{
    /// Insert `item` at position `index`, shifting later elements back
    ///
    /// An `index` equal to the size appends. When the container is empty
    /// `index` is ignored and the item becomes the first element.
    pub fn try_insert(&mut self, item: T, index: usize) -> Result<&mut T, ContainerError> {
        self.ensure_unique(&item)?;

        if self.items.is_empty() {
            return self.try_add(item);
        }

        if index > self.items.len() {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        trace!("Inserting element {:?} at {}", item.element_id(), index);
        self.items.insert(index, item);
        self.rebuild_indexes();
        Ok(&mut self.items[index])
    }

    /// Insert `item` at position `index`, shifting later elements back
    ///
    /// # Panics
    ///
    /// Panics if a direct sibling already carries the item's id, or if
    /// `index` is greater than the size of a non-empty container.
    #[track_caller]
    pub fn insert(&mut self, item: T, index: usize) -> &mut T {
        self.try_insert(item, index).or_fatal()
    }

    /// Move the element at `old_index` to `new_index`
    ///
    /// `new_index` is clamped to the last position. Elements strictly
    /// between the two positions shift by one slot and keep their relative
    /// order.
    pub fn try_move_by_index(
        &mut self,
        old_index: usize,
        new_index: usize,
    ) -> Result<(), ContainerError> {
        if old_index == new_index {
            return Ok(());
        }

        let len = self.items.len();
        if old_index >= len {
            return Err(ContainerError::IndexOutOfRange {
                index: old_index,
                len,
            });
        }

        let new_index = new_index.min(len - 1);
        if old_index < new_index {
            self.items[old_index..=new_index].rotate_left(1);
        } else {
            self.items[new_index..=old_index].rotate_right(1);
        }

        trace!("Moved element from {} to {}", old_index, new_index);
        self.rebuild_indexes();
        Ok(())
    }

    /// Move the element at `old_index` to `new_index`
    ///
    /// # Panics
    ///
    /// Panics if `old_index` is out of range.
    #[track_caller]
    pub fn move_by_index(&mut self, old_index: usize, new_index: usize) {
        self.try_move_by_index(old_index, new_index).or_fatal()
    }
}

impl<T, I, X> Container<T, I, X>
where
    T: Element<Id = Id, Index = usize>,
    I: IdSlot,
    X: IndexSlot,
{
    /// Move the direct element carrying `id` to `new_index`
    pub fn try_move_by_id(&mut self, id: Id, new_index: usize) -> Result<(), ContainerError> {
        let old_index = self.try_get_index(id)?;
        self.try_move_by_index(old_index, new_index)
    }

    /// Move the direct element carrying `id` to `new_index`
    ///
    /// # Panics
    ///
    /// Panics if no direct element carries `id`.
    #[track_caller]
    pub fn move_by_id(&mut self, id: Id, new_index: usize) {
        self.try_move_by_id(id, new_index).or_fatal()
    }
}

impl<T: Element, I: IdSlot, X: IndexSlot> Element for Container<T, I, X> {
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

    fn nested(&self) -> Option<&dyn Nested> {
        Some(self)
    }

    fn nested_mut(&mut self) -> Option<&mut dyn Nested> {
        Some(self)
    }
}

impl<T: Element, I: IdSlot, X: IndexSlot> Extend<T> for Container<T, I, X> {
    #[track_caller]
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Element, I: IdSlot, X: IndexSlot> FromIterator<T> for Container<T, I, X> {
    #[track_caller]
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl<T, I, X> IntoIterator for Container<T, I, X> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, I, X> IntoIterator for &'a Container<T, I, X> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T, I, X> IntoIterator for &'a mut Container<T, I, X> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
