//! Where the two database files live.

use super::{Store, StoreKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths of the recognition and photo databases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLocations {
    pub recognition_db: PathBuf,
    pub photos_db: PathBuf,
}

impl StoreLocations {
    pub fn new(recognition_db: impl Into<PathBuf>, photos_db: impl Into<PathBuf>) -> Self {
        Self {
            recognition_db: recognition_db.into(),
            photos_db: photos_db.into(),
        }
    }

    /// Both databases under their default names in `base_dir`
    pub fn from_base_dir(base_dir: &Path) -> Self {
        Self::new(
            base_dir.join(StoreKind::Recognition.default_file_name()),
            base_dir.join(StoreKind::Photos.default_file_name()),
        )
    }

    /// The user's pictures directory, or the working directory if unknown
    pub fn default_base_dir() -> PathBuf {
        dirs::picture_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn with_recognition_db(mut self, path: impl Into<PathBuf>) -> Self {
        self.recognition_db = path.into();
        self
    }

    pub fn with_photos_db(mut self, path: impl Into<PathBuf>) -> Self {
        self.photos_db = path.into();
        self
    }

    pub fn recognition(&self) -> Store {
        Store::new(StoreKind::Recognition, &self.recognition_db)
    }

    pub fn photos(&self) -> Store {
        Store::new(StoreKind::Photos, &self.photos_db)
    }
}
