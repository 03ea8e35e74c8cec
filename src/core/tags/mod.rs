//! # Tags Module
//!
//! The flat tag list from the photo database, person tags included.
//!
//! Tags form a tree through `parent_id`, but this module hands the rows back
//! as they are stored and never walks the hierarchy.

use crate::core::store::Store;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A tag; `parent_id == 0` marks a top-level tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub parent_id: i64,
    pub name: String,
    pub icon: i64,
    /// Icon name from the desktop theme
    pub icon_label: Option<String>,
}

impl Tag {
    pub fn is_root(&self) -> bool {
        self.parent_id == 0
    }
}

/// Reads tags from the photo database
#[derive(Debug, Clone)]
pub struct TagStore {
    store: Store,
}

impl TagStore {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Every tag, ordered by name (BINARY collation) then id.
    ///
    /// A NULL `pid` or `icon` reads as 0. A NULL name fails the query.
    pub fn list_tags(&self) -> Result<Vec<Tag>> {
        let tags = self.store.read(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, pid, name, icon, iconkde
                 FROM Tags
                 ORDER BY name ASC, id ASC",
            )?;

            let rows = stmt.query_map([], |row| {
                Ok(Tag {
                    id: row.get(0)?,
                    parent_id: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
                    name: row.get(2)?,
                    icon: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
                    icon_label: row.get(4)?,
                })
            })?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })?;

        tracing::debug!(count = tags.len(), "Listed tags");
        Ok(tags)
    }
}
