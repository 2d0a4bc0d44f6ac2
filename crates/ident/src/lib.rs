// Identifiers for hierarchical containers
// This crate provides the opaque `Id` handle and the generator that mints them

mod generator;
mod id;

pub use generator::IdGenerator;
pub use id::Id;
