//! Shared fixtures: real SQLite files shaped like digiKam's databases.

#![allow(dead_code)]

use face_db_reader::{FaceDbReader, StoreLocations};
use rusqlite::{params, Connection};
use tempfile::TempDir;

pub struct Collection {
    pub dir: TempDir,
    pub locations: StoreLocations,
    recognition: Connection,
    photos: Connection,
}

impl Collection {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let locations = StoreLocations::from_base_dir(dir.path());

        let recognition = Connection::open(&locations.recognition_db).unwrap();
        recognition
            .execute_batch(
                "CREATE TABLE Identities (id INTEGER PRIMARY KEY, type INTEGER);
                 CREATE TABLE IdentityAttributes (id INTEGER, attribute TEXT, value TEXT);
                 CREATE TABLE FaceMatrices (id INTEGER PRIMARY KEY, identity INTEGER,
                                            context TEXT, type INTEGER, rows INTEGER,
                                            cols INTEGER, data BLOB);",
            )
            .unwrap();

        let photos = Connection::open(&locations.photos_db).unwrap();
        photos
            .execute_batch(
                "CREATE TABLE AlbumRoots (id INTEGER PRIMARY KEY, label TEXT, status INTEGER,
                                          type INTEGER, identifier TEXT, specificPath TEXT);
                 CREATE TABLE Albums (id INTEGER PRIMARY KEY, albumRoot INTEGER,
                                      relativePath TEXT);
                 CREATE TABLE Images (id INTEGER PRIMARY KEY, album INTEGER, name TEXT,
                                      status INTEGER, category INTEGER,
                                      modificationDate DATETIME, fileSize INTEGER,
                                      uniqueHash TEXT);
                 CREATE TABLE ImageInformation (imageid INTEGER PRIMARY KEY,
                                                creationDate DATETIME);
                 CREATE TABLE ImageTags (imageid INTEGER, tagid INTEGER);
                 CREATE TABLE Tags (id INTEGER PRIMARY KEY, pid INTEGER, name TEXT,
                                    icon INTEGER, iconkde TEXT);",
            )
            .unwrap();

        Self {
            dir,
            locations,
            recognition,
            photos,
        }
    }

    pub fn reader(&self) -> FaceDbReader {
        FaceDbReader::new(self.locations.clone())
    }

    pub fn identity(&self, id: i64, name: Option<&str>) -> &Self {
        self.recognition
            .execute("INSERT INTO Identities (id, type) VALUES (?1, 0)", [id])
            .unwrap();
        if let Some(name) = name {
            self.recognition
                .execute(
                    "INSERT INTO IdentityAttributes (id, attribute, value) VALUES (?1, 'name', ?2)",
                    params![id, name],
                )
                .unwrap();
        }
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

    pub fn tag(&self, id: i64, name: &str) -> &Self {
        self.photos
            .execute(
                "INSERT INTO Tags (id, pid, name, icon) VALUES (?1, 0, ?2, 0)",
                params![id, name],
            )
            .unwrap();
        self
    }

    pub fn album(&self, id: i64, root_id: i64, root_path: &str, relative_path: &str) -> &Self {
        self.photos
            .execute(
                "INSERT OR IGNORE INTO AlbumRoots (id, label, status, type, specificPath)
                 VALUES (?1, 'root', 0, 1, ?2)",
                params![root_id, root_path],
            )
            .unwrap();
        self.photos
            .execute(
                "INSERT INTO Albums (id, albumRoot, relativePath) VALUES (?1, ?2, ?3)",
                params![id, root_id, relative_path],
            )
            .unwrap();
        self
    }

    pub fn image(&self, id: i64, album: i64, name: &str, date: Option<&str>) -> &Self {
        self.photos
            .execute(
                "INSERT INTO Images (id, album, name, status, category, fileSize, uniqueHash)
                 VALUES (?1, ?2, ?3, 1, 1, ?4, NULL)",
                params![id, album, name, 1000 * id],
            )
            .unwrap();
        if let Some(date) = date {
            self.photos
                .execute(
                    "INSERT INTO ImageInformation (imageid, creationDate) VALUES (?1, ?2)",
                    params![id, date],
                )
                .unwrap();
        }
        self
    }

    pub fn link(&self, image: i64, tag: i64) -> &Self {
        self.photos
            .execute(
                "INSERT INTO ImageTags (imageid, tagid) VALUES (?1, ?2)",
                [image, tag],
            )
            .unwrap();
        self
    }

    /// Names of the tags attached to `image`
    pub fn tags_of(&self, image: i64) -> Vec<String> {
        let mut stmt = self
            .photos
            .prepare(
                "SELECT t.name FROM ImageTags it JOIN Tags t ON t.id = it.tagid
                 WHERE it.imageid = ?1",
            )
            .unwrap();
        stmt.query_map([image], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<String>>>()
            .unwrap()
    }
}
