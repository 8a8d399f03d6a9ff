//! JSON key extraction: load a document, then either resolve requested dotted
//! keys or flatten every leaf into a dotted path.
//!
//! Documents are held as [`serde_json::Value`], so every traversal step is a
//! `match` on the value kind.

mod flatten;
mod loader;
mod resolver;

pub use flatten::flatten;
pub use loader::load_file;
pub use resolver::{resolve, resolve_all};
