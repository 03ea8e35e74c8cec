//! # Path Module
//!
//! Rebuilds an image's absolute path from the normalized album tables.
//!
//! digiKam stores a file's location in three pieces: the album root's
//! `specificPath` (e.g. `/home/me/Pictures`), the album's `relativePath`
//! inside that root (e.g. `/2024/Holiday`, or `/` for the root album) and the
//! image's file name.

use serde::{Deserialize, Serialize};
use std::path::{is_separator, MAIN_SEPARATOR};

/// A collection root on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRoot {
    pub id: i64,
    pub specific_path: String,
}

/// A folder inside an album root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub album_root_id: i64,
    pub relative_path: String,
}

/// Absolute path of `image_name` inside `album` under `root`.
pub fn resolve_path(root: &AlbumRoot, album: &Album, image_name: &str) -> String {
    join_segments([
        root.specific_path.as_str(),
        album.relative_path.as_str(),
        image_name,
    ])
}

/// Join path segments with the host separator.
///
/// Empty segments contribute nothing. Separators at a segment boundary are
/// collapsed to one, so a leading `/` on a later segment never discards what
/// came before it. The first non-empty segment keeps its leading separators.
pub fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();

    for segment in segments {
        let segment = if joined.is_empty() {
            segment
        } else {
            segment.trim_start_matches(is_separator)
        };
        if segment.is_empty() {
            continue;
        }

        if !joined.is_empty() && !joined.ends_with(is_separator) {
            joined.push(MAIN_SEPARATOR);
        }
        joined.push_str(segment);
    }

    joined
}
