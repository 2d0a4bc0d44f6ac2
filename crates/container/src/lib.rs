//! Hierarchical Container Library
//!
//! A generic ordered container whose elements may themselves be containers,
//! giving arbitrarily deep trees with stable identity and stable ordering.
//!
//! # Core Concepts
//!
//! - **Container**: ordered, owning collection of elements of one type
//! - **Item**: leaf element that holds no children
//! - **Element**: trait every element type implements, declaring through
//!   its slot types whether it is identifiable and/or sortable
//! - **Shallow / deep operations**: act on direct children only, or on the
//!   whole subtree in pre-order
//!
//! # Example
//!
//! ```
//! use container::{Container, Item};
//! use ident::{Id, IdGenerator};
//!
//! let mut ids = IdGenerator::new();
//! let mut tracks: Container<Item<Id, usize>> = Container::new();
//!
//! let first = ids.generate();
//! let second = ids.generate();
//! tracks.add(Item::with_id(first));
//! tracks.add(Item::with_id(second));
//!
//! assert_eq!(tracks.size(), 2);
//! assert_eq!(tracks.get_index(second), 1);
//! assert!(tracks.find_by_id(Id::new(99)).is_none());
//! ```

mod container;
mod deep;
mod element;
mod error;
mod item;
mod slot;

pub use container::Container;
pub use deep::Nested;
pub use element::Element;
pub use error::ContainerError;
pub use item::Item;
pub use slot::{Absent, IdSlot, IndexSlot};

pub use ident::Id;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Absent, Container, ContainerError, Element, Id, Item, Nested};
}
