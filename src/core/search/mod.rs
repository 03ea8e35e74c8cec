//! # Search Module
//!
//! Person-name lookup across both databases.
//!
//! Names come from two places: identity `name` attributes in the recognition
//! database and tag names in the photo database. Results are merged by exact
//! string equality, so `"jane"` and `"Jane"` from different sources both stay
//! in the list. Sorting is byte-wise ascending.

use crate::core::identity::{IdentityStore, NAME_ATTRIBUTE};
use crate::core::store::{Store, StoreLocations};
use crate::core::tags::TagStore;
use crate::error::Result;
use std::collections::BTreeSet;

/// Searches person names in the recognition and photo databases
#[derive(Debug, Clone)]
pub struct SearchEngine {
    recognition: Store,
    photos: Store,
}

impl SearchEngine {
    pub fn new(locations: &StoreLocations) -> Self {
        Self {
            recognition: locations.recognition(),
            photos: locations.photos(),
        }
    }

    /// Sorted, de-duplicated names containing `pattern`, ignoring case.
    ///
    /// An empty pattern returns every name from both sources.
    pub fn search_people_names(&self, pattern: &str) -> Result<Vec<String>> {
        let mut names = BTreeSet::new();

        let identity_names = self.recognition.read(|conn| {
            let mut stmt = conn.prepare(
                "SELECT DISTINCT value
                 FROM IdentityAttributes
                 WHERE attribute = ?1 AND contains_ci(value, ?2)",
            )?;
            let rows = stmt.query_map([NAME_ATTRIBUTE, pattern], |row| row.get::<_, String>(0))?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })?;
        tracing::debug!(pattern, count = identity_names.len(), "Matched identity names");
        names.extend(identity_names);

        let tag_names = self.photos.read(|conn| {
            let mut stmt = conn.prepare(
                "SELECT DISTINCT name
                 FROM Tags
                 WHERE contains_ci(name, ?1)",
            )?;
            let rows = stmt.query_map([pattern], |row| row.get::<_, String>(0))?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })?;
        tracing::debug!(pattern, count = tag_names.len(), "Matched tag names");
        names.extend(tag_names);

        Ok(names.into_iter().collect())
    }

    /// Every non-blank identity name and tag name, sorted and de-duplicated.
    pub fn list_people_names(&self) -> Result<Vec<String>> {
        let identities = IdentityStore::new(self.recognition.clone()).list_identities()?;
        let tags = TagStore::new(self.photos.clone()).list_tags()?;

        let names: BTreeSet<String> = identities
            .into_iter()
            .filter_map(|identity| identity.name)
            .chain(tags.into_iter().map(|tag| tag.name))
            .filter(|name| !name.trim().is_empty())
            .collect();

        Ok(names.into_iter().collect())
    }
}
