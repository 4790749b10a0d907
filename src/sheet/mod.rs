//! Style sheet registry and unique token sources.

pub mod registry;
pub mod token;

pub use registry::{AssignmentKey, Site, SiteId, StyleSheetRegistry};
pub use token::{SequenceTokens, ShortIdSource, TokenSource};
