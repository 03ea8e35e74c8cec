//! Tag-driven image lookup.

use super::{newest_first, parse_timestamp, Image};
use crate::core::path::{resolve_path, Album, AlbumRoot};
use crate::core::store::Store;
use crate::error::Result;
use rusqlite::types::Type;
use rusqlite::Row;
use std::collections::HashSet;

const IMAGES_BY_TAG_SQL: &str = "
    SELECT i.id, i.album, i.name, i.status, i.category, ii.creationDate,
           i.fileSize, i.uniqueHash, ar.id, ar.specificPath, a.relativePath
    FROM Images i
    INNER JOIN Albums a ON i.album = a.id
    INNER JOIN AlbumRoots ar ON a.albumRoot = ar.id
    LEFT JOIN ImageInformation ii ON i.id = ii.imageid
    WHERE i.id IN (
        SELECT it.imageid
        FROM ImageTags it
        INNER JOIN Tags t ON it.tagid = t.id
        WHERE contains_ci(t.name, ?1)
    )";

/// Finds images through the tags attached to them
#[derive(Debug, Clone)]
pub struct ImageFinder {
    store: Store,
}

impl ImageFinder {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Images tagged with any tag whose name contains `pattern`, ignoring case.
    ///
    /// Each image appears once, however many matching tags it carries. An
    /// empty pattern matches every tag; no match at all is an empty list.
    pub fn find_images_by_person_name(&self, pattern: &str) -> Result<Vec<Image>> {
        let mut images = self.store.read(|conn| {
            let mut stmt = conn.prepare(IMAGES_BY_TAG_SQL)?;
            let rows = stmt.query_map([pattern], image_from_row)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })?;

        images.sort_by(newest_first);
        let mut seen = HashSet::new();
        images.retain(|image| seen.insert(image.id));

        tracing::debug!(pattern, count = images.len(), "Found images by tag");
        Ok(images)
    }
}

fn image_from_row(row: &Row<'_>) -> rusqlite::Result<Image> {
    let id: i64 = row.get(0)?;
    let album_id: i64 = row.get(1)?;
    let name: String = row.get(2)?;

    let modification_date = match row.get::<_, Option<String>>(5)? {
        Some(text) => parse_timestamp(&text)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?,
        None => None,
    };

    let root = AlbumRoot {
        id: row.get(8)?,
        specific_path: row.get(9)?,
    };
    let album = Album {
        id: album_id,
        album_root_id: root.id,
        relative_path: row.get(10)?,
    };
    let full_path = resolve_path(&root, &album, &name);

    let file_size = u64::try_from(row.get::<_, i64>(6)?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Integer, Box::new(e)))?;

    Ok(Image {
        id,
        album_id,
        name,
        status: row.get(3)?,
        category: row.get(4)?,
        modification_date,
        file_size,
        unique_hash: row.get(7)?,
        full_path,
    })
}
