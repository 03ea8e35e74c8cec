//! # Error Module
//!
//! Error types for reading the recognition and photo databases.
//!
//! ## Design Principles
//! - **Never panic** on store contents - return errors instead
//! - **Include context** - which store, which file, what went wrong
//! - **Two failure kinds** - a store that cannot be read at all, and a
//!   query whose result does not fit the data model
//! - An empty result is never an error

use crate::core::store::StoreKind;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for every reader operation
#[derive(Error, Debug)]
pub enum ReaderError {
    /// The store file is missing, inaccessible or not a readable database.
    #[error("The {store} database at {path} is unavailable: {reason}")]
    StoreUnavailable {
        store: StoreKind,
        path: PathBuf,
        reason: String,
    },

    /// Schema mismatch, or a required field came back empty.
    #[error("Query against the {store} database failed: {reason}")]
    QueryFailed { store: StoreKind, reason: String },

    #[error("Failed to export image paths to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ReaderError {
    /// True when the store itself could not be read.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }

    /// True when the store was readable but a query failed.
    pub fn is_query_failure(&self) -> bool {
        matches!(self, Self::QueryFailed { .. })
    }
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, ReaderError>;
