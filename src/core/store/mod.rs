//! # Store Module
//!
//! Read-only access to the two SQLite databases.
//!
//! ## Stores
//! - **Recognition** (`recognition.db`) - identities, their attributes and face matrices
//! - **Photos** (`digikam4.db`) - tags, images, albums and album roots
//!
//! ## Access Discipline
//! Nothing here holds a connection between calls. Each operation goes through
//! [`Store::read`], which opens the file read-only, runs the queries and drops
//! the connection before returning, on success and on error alike.

mod functions;
mod locations;

pub use functions::{register_functions, CONTAINS_CI};
pub use locations::StoreLocations;

use crate::error::{ReaderError, Result};
use rusqlite::{Connection, ErrorCode, OpenFlags};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Which of the two databases a store refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Recognition,
    Photos,
}

impl StoreKind {
    /// File name used inside a digiKam collection directory
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Recognition => "recognition.db",
            Self::Photos => "digikam4.db",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recognition => write!(f, "face recognition"),
            Self::Photos => write!(f, "photo management"),
        }
    }
}

/// A database file that can be opened read-only on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    kind: StoreKind,
    path: PathBuf,
}

impl Store {
    pub fn new(kind: StoreKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a read-only connection.
    ///
    /// Never creates the file. The connection carries the crate's SQL
    /// functions (see [`register_functions`]).
    pub fn open(&self) -> Result<Connection> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| self.unavailable(e.to_string()))?;
        if !metadata.is_file() {
            return Err(self.unavailable("not a regular file".to_string()));
        }

        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| self.map_error(e))?;

        register_functions(&conn).map_err(|e| self.map_error(e))?;

        tracing::debug!(store = %self.kind, path = %self.path.display(), "Opened store read-only");
        Ok(conn)
    }

    /// Run `query` against a freshly opened connection.
    ///
    /// The connection is dropped before this returns.
    pub fn read<T, F>(&self, query: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.open()?;
        let result = query(&conn).map_err(|e| self.map_error(e));
        drop(conn);
        result
    }

    /// Sort a rusqlite error into "store unreadable" or "query failed".
    pub fn map_error(&self, error: rusqlite::Error) -> ReaderError {
        let unreadable = matches!(
            error.sqlite_error_code(),
            Some(
                ErrorCode::CannotOpen
                    | ErrorCode::NotADatabase
                    | ErrorCode::DatabaseCorrupt
                    | ErrorCode::PermissionDenied
                    | ErrorCode::SystemIoFailure
            )
        );

        if unreadable {
            self.unavailable(error.to_string())
        } else {
            ReaderError::QueryFailed {
                store: self.kind,
                reason: error.to_string(),
            }
        }
    }

    fn unavailable(&self, reason: String) -> ReaderError {
        tracing::warn!(store = %self.kind, path = %self.path.display(), %reason, "Store unavailable");
        ReaderError::StoreUnavailable {
            store: self.kind,
            path: self.path.clone(),
            reason,
        }
    }
}

/// Read a `COUNT(...)` style scalar.
pub(crate) fn count(conn: &Connection, sql: &str) -> rusqlite::Result<u64> {
    conn.query_row(sql, [], |row| row.get::<_, i64>(0).map(|v| v as u64))
}
