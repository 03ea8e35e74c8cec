//! The consumer-facing entry point.

use crate::core::identity::{Identity, IdentityStore};
use crate::core::images::{Image, ImageFinder};
use crate::core::search::SearchEngine;
use crate::core::stats::{Statistics, StatisticsCollector};
use crate::core::store::StoreLocations;
use crate::core::tags::{Tag, TagStore};
use crate::error::Result;
use std::path::Path;

/// Reads people, tags and images from a digiKam collection.
///
/// Holds only file locations. Every call opens the databases it needs
/// read-only and closes them before returning, so repeated calls always see
/// the current contents and a reader can be shared freely.
///
/// ## Example
/// ```rust,ignore
/// let reader = FaceDbReader::from_base_dir(Path::new("/home/me/Pictures"));
/// for image in reader.find_images_by_person_name("jane")? {
///     println!("{}", image.full_path);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FaceDbReader {
    locations: StoreLocations,
}

impl FaceDbReader {
    pub fn new(locations: StoreLocations) -> Self {
        Self { locations }
    }

    /// `recognition.db` and `digikam4.db` inside `base_dir`
    pub fn from_base_dir(base_dir: &Path) -> Self {
        Self::new(StoreLocations::from_base_dir(base_dir))
    }

    pub fn locations(&self) -> &StoreLocations {
        &self.locations
    }

    pub fn list_identities(&self) -> Result<Vec<Identity>> {
        IdentityStore::new(self.locations.recognition()).list_identities()
    }

    pub fn list_tags(&self) -> Result<Vec<Tag>> {
        TagStore::new(self.locations.photos()).list_tags()
    }

    pub fn find_images_by_person_name(&self, pattern: &str) -> Result<Vec<Image>> {
        ImageFinder::new(self.locations.photos()).find_images_by_person_name(pattern)
    }

    pub fn search_people_names(&self, pattern: &str) -> Result<Vec<String>> {
        SearchEngine::new(&self.locations).search_people_names(pattern)
    }

    pub fn list_people_names(&self) -> Result<Vec<String>> {
        SearchEngine::new(&self.locations).list_people_names()
    }

    pub fn get_statistics(&self) -> Result<Statistics> {
        StatisticsCollector::new(&self.locations).get_statistics()
    }
}
