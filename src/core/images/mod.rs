//! # Images Module
//!
//! Finds the photos a person is tagged in.
//!
//! ## Query Shape
//! tags matching the pattern → `ImageTags` → `Images` → `Albums` →
//! `AlbumRoots`, with `ImageInformation` left-joined for the creation date.
//! Images whose album or album root is missing drop out of the join.
//!
//! ## Ordering
//! Newest first by modification date. Images without a date come last, and
//! equal dates fall back to ascending image id.

mod finder;

pub use finder::ImageFinder;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;

/// An image together with its resolved location on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    pub album_id: i64,
    /// File name inside the album
    pub name: String,
    pub status: i64,
    pub category: i64,
    /// Absent when the image has no `ImageInformation` row or date
    pub modification_date: Option<NaiveDateTime>,
    /// File size in bytes
    pub file_size: u64,
    pub unique_hash: Option<String>,
    /// Album root + album path + file name
    pub full_path: String,
}

impl Image {
    pub fn path(&self) -> &Path {
        Path::new(&self.full_path)
    }
}

/// Newest first; undated images last; ties by ascending id.
pub fn newest_first(a: &Image, b: &Image) -> Ordering {
    let by_date = match (&a.modification_date, &b.modification_date) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| a.id.cmp(&b.id))
}

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a digiKam timestamp.
///
/// Accepts ISO date-times with `T` or a space, optional fractional seconds,
/// and bare dates (read as midnight). Blank text means no date.
///
/// Only text timestamps are read. A date stored as a number (for example a
/// Julian day REAL) fails the query instead of being guessed at.
pub fn parse_timestamp(text: &str) -> Result<Option<NaiveDateTime>, chrono::ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let mut last_error = None;
    for format in DATE_TIME_FORMATS {
        match NaiveDateTime::parse_from_str(text, format) {
            Ok(parsed) => return Ok(Some(parsed)),
            Err(e) => last_error = Some(e),
        }
    }

    match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_hms_opt(0, 0, 0)),
        Err(e) => Err(last_error.unwrap_or(e)),
    }
}
