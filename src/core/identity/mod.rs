//! # Identity Module
//!
//! Face clusters from the recognition database and the names people gave them.
//!
//! An identity has a name only once someone assigns one, through an
//! `IdentityAttributes` row whose attribute is `name`.

use crate::core::store::Store;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Attribute key carrying an identity's display name
pub const NAME_ATTRIBUTE: &str = "name";

/// A recognized face cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: i64,
    /// Absent until a name attribute is assigned
    pub name: Option<String>,
}

/// Reads identities from the recognition database
#[derive(Debug, Clone)]
pub struct IdentityStore {
    store: Store,
}

impl IdentityStore {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Every identity exactly once, ordered by name.
    ///
    /// Ordering uses SQLite's BINARY collation with unnamed identities first,
    /// then ascending id. An identity with several name attributes reports the
    /// smallest one.
    pub fn list_identities(&self) -> Result<Vec<Identity>> {
        let identities = self.store.read(|conn| {
            let mut stmt = conn.prepare(
                "SELECT i.id, i.type, MIN(ia.value) AS name
                 FROM Identities i
                 LEFT JOIN IdentityAttributes ia ON i.id = ia.id AND ia.attribute = ?1
                 GROUP BY i.id, i.type
                 ORDER BY name ASC NULLS FIRST, i.id ASC",
            )?;

            let rows = stmt.query_map([NAME_ATTRIBUTE], |row| {
                Ok(Identity {
                    id: row.get(0)?,
                    kind: row.get(1)?,
                    name: row.get(2)?,
                })
            })?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })?;

        tracing::debug!(count = identities.len(), "Listed identities");
        Ok(identities)
    }
}
