// crates/shared-kernel/src/lib.rs
pub mod value_objects;

pub use value_objects::{KeyPath, Occurrences, RankedEntry, ResolvedEntry};
