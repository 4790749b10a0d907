//! Host document: style element arena, injection trait, queries.

pub mod node;
pub mod query;
pub mod tree;

pub use node::{ElementId, StyleElement};
pub use tree::{Document, HeadlessDocument};
