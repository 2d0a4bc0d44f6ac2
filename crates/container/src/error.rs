use derive_more::Display;
use ident::Id;

/// A broken container precondition
///
/// The checked (`try_*`) operations report these and leave the container
/// untouched. The unchecked operations treat them as fatal and panic with
/// the same message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ContainerError {
    /// No direct element (or, for deep lookups, no element in the subtree)
    /// carries the requested id
    #[display(fmt = "no element with id {}", _0)]
    MissingId(Id),

    /// A direct sibling already carries the id of the element being stored
    #[display(fmt = "id {} is already used by a sibling", _0)]
    DuplicateId(Id),

    /// A position outside the container's bounds
    #[display(fmt = "index {} is out of range for {} elements", index, len)]
    IndexOutOfRange { index: usize, len: usize },

    /// The container has no elements
    #[display(fmt = "container is empty")]
    Empty,

    /// An element's recorded position disagrees with its physical one
    #[display(fmt = "element at position {} records index {}", position, stored)]
    StaleIndex { position: usize, stored: usize },
}

impl std::error::Error for ContainerError {}

/// Turns a broken precondition into a panic at the caller's location
pub(crate) trait OrFatal<T> {
    fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for Result<T, ContainerError> {
    #[track_caller]
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}
