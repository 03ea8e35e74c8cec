//! # Statistics Module
//!
//! Row counts over both databases. Face matrices are counted, never decoded.

use crate::core::store::{count, Store, StoreLocations};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Point-in-time counts from both databases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub identity_count: u64,
    /// Identities with at least one name attribute
    pub named_identity_count: u64,
    pub face_vector_count: u64,
    pub image_count: u64,
    pub album_count: u64,
    pub tag_count: u64,
    /// Distinct existing images carrying at least one tag
    pub tagged_image_count: u64,
}

/// Collects [`Statistics`]
#[derive(Debug, Clone)]
pub struct StatisticsCollector {
    recognition: Store,
    photos: Store,
}

impl StatisticsCollector {
    pub fn new(locations: &StoreLocations) -> Self {
        Self {
            recognition: locations.recognition(),
            photos: locations.photos(),
        }
    }

    pub fn get_statistics(&self) -> Result<Statistics> {
        let (identity_count, named_identity_count, face_vector_count) =
            self.recognition.read(|conn| {
                Ok((
                    count(conn, "SELECT COUNT(*) FROM Identities")?,
                    count(
                        conn,
                        "SELECT COUNT(DISTINCT id) FROM IdentityAttributes WHERE attribute = 'name'",
                    )?,
                    count(conn, "SELECT COUNT(*) FROM FaceMatrices")?,
                ))
            })?;

        let (image_count, album_count, tag_count, tagged_image_count) =
            self.photos.read(|conn| {
                Ok((
                    count(conn, "SELECT COUNT(*) FROM Images")?,
                    count(conn, "SELECT COUNT(*) FROM Albums")?,
                    count(conn, "SELECT COUNT(*) FROM Tags")?,
                    count(
                        conn,
                        "SELECT COUNT(DISTINCT it.imageid)
                         FROM ImageTags it
                         INNER JOIN Images i ON i.id = it.imageid",
                    )?,
                ))
            })?;

        let stats = Statistics {
            identity_count,
            named_identity_count,
            face_vector_count,
            image_count,
            album_count,
            tag_count,
            tagged_image_count,
        };
        tracing::debug!(?stats, "Collected statistics");
        Ok(stats)
    }
}
