//! Throwaway digiKam-shaped databases for unit tests.

use crate::core::store::StoreLocations;
use rusqlite::{params, Connection};
use tempfile::TempDir;

const RECOGNITION_SCHEMA: &str = "
    CREATE TABLE Identities (id INTEGER PRIMARY KEY, type INTEGER);
    CREATE TABLE IdentityAttributes (id INTEGER, attribute TEXT, value TEXT);
    CREATE TABLE FaceMatrices (id INTEGER PRIMARY KEY, identity INTEGER, context TEXT,
                               type INTEGER, rows INTEGER, cols INTEGER, data BLOB);
";

const PHOTOS_SCHEMA: &str = "
    CREATE TABLE AlbumRoots (id INTEGER PRIMARY KEY, label TEXT, status INTEGER, type INTEGER,
                             identifier TEXT, specificPath TEXT);
    CREATE TABLE Albums (id INTEGER PRIMARY KEY, albumRoot INTEGER, relativePath TEXT);
    CREATE TABLE Images (id INTEGER PRIMARY KEY, album INTEGER, name TEXT, status INTEGER,
                         category INTEGER, modificationDate DATETIME, fileSize INTEGER,
                         uniqueHash TEXT);
    CREATE TABLE ImageInformation (imageid INTEGER PRIMARY KEY, rating INTEGER,
                                   creationDate DATETIME);
    CREATE TABLE ImageTags (imageid INTEGER, tagid INTEGER);
    CREATE TABLE Tags (id INTEGER PRIMARY KEY, pid INTEGER, name TEXT, icon INTEGER,
                       iconkde TEXT);
";

pub(crate) struct Fixture {
    _dir: TempDir,
    pub locations: StoreLocations,
    pub recognition: Connection,
    pub photos: Connection,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let locations = StoreLocations::from_base_dir(dir.path());

        let recognition = Connection::open(&locations.recognition_db).unwrap();
        recognition.execute_batch(RECOGNITION_SCHEMA).unwrap();
        let photos = Connection::open(&locations.photos_db).unwrap();
        photos.execute_batch(PHOTOS_SCHEMA).unwrap();

        Self {
            _dir: dir,
            locations,
            recognition,
            photos,
        }
    }

    pub fn identity(&self, id: i64, name: Option<&str>) -> &Self {
        self.recognition
            .execute("INSERT INTO Identities (id, type) VALUES (?1, 0)", [id])
            .unwrap();
        if let Some(name) = name {
            self.attribute(id, "name", name);
        }
        self
    }

    pub fn attribute(&self, id: i64, attribute: &str, value: &str) -> &Self {
        self.recognition
            .execute(
                "INSERT INTO IdentityAttributes (id, attribute, value) VALUES (?1, ?2, ?3)",
                params![id, attribute, value],
            )
            .unwrap();
        self
    }

    pub fn face_matrix(&self, identity: i64) -> &Self {
        self.recognition
            .execute(
                "INSERT INTO FaceMatrices (identity, context, type, rows, cols, data)
                 VALUES (?1, 'test', 0, 1, 128, zeroblob(512))",
                [identity],
            )
            .unwrap();
        self
    }

    pub fn tag(&self, id: i64, pid: i64, name: &str) -> &Self {
        self.photos
            .execute(
                "INSERT INTO Tags (id, pid, name, icon, iconkde) VALUES (?1, ?2, ?3, 0, NULL)",
                params![id, pid, name],
            )
            .unwrap();
        self
    }

    pub fn album_root(&self, id: i64, specific_path: &str) -> &Self {
        self.photos
            .execute(
                "INSERT INTO AlbumRoots (id, label, status, type, specificPath)
                 VALUES (?1, 'root', 0, 1, ?2)",
                params![id, specific_path],
            )
            .unwrap();
        self
    }

    pub fn album(&self, id: i64, album_root: i64, relative_path: &str) -> &Self {
        self.photos
            .execute(
                "INSERT INTO Albums (id, albumRoot, relativePath) VALUES (?1, ?2, ?3)",
                params![id, album_root, relative_path],
            )
            .unwrap();
        self
    }

    pub fn image(&self, id: i64, album: i64, name: &str, creation_date: Option<&str>) -> &Self {
        self.photos
            .execute(
                "INSERT INTO Images (id, album, name, status, category, fileSize, uniqueHash)
                 VALUES (?1, ?2, ?3, 1, 1, 2048, 'hash')",
                params![id, album, name],
            )
            .unwrap();
        if let Some(date) = creation_date {
            self.photos
                .execute(
                    "INSERT INTO ImageInformation (imageid, rating, creationDate) VALUES (?1, 0, ?2)",
                    params![id, date],
                )
                .unwrap();
        }
        self
    }

    pub fn image_tag(&self, image: i64, tag: i64) -> &Self {
        self.photos
            .execute(
                "INSERT INTO ImageTags (imageid, tagid) VALUES (?1, ?2)",
                [image, tag],
            )
            .unwrap();
        self
    }
}
