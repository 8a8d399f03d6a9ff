// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod entries;
pub mod key_path;

pub use counts::Occurrences;
pub use entries::{RankedEntry, ResolvedEntry};
pub use key_path::KeyPath;
