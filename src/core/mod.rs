//! # Core Module
//!
//! The presentation-agnostic readers.
//!
//! ## Modules
//! - `store` - Read-only, per-call access to the two databases
//! - `identity` - Face clusters and their names
//! - `tags` - The flat tag list
//! - `path` - Rebuilds absolute image paths from album tables
//! - `images` - Finds images through person tags
//! - `search` - Person-name search across both databases
//! - `stats` - Row counts
//! - `export` - Writes found image paths to a file

pub mod export;
pub mod identity;
pub mod images;
pub mod path;
pub mod search;
pub mod stats;
pub mod store;
pub mod tags;

mod reader;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use identity::Identity;
pub use images::Image;
pub use path::{Album, AlbumRoot};
pub use reader::FaceDbReader;
pub use stats::Statistics;
pub use store::{StoreKind, StoreLocations};
pub use tags::Tag;
