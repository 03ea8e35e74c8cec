//! Export of image search results.
//!
//! Writes the resolved paths of found images to a plain text file, one path
//! per line, for use with other tools.

use crate::core::images::Image;
use crate::error::{ReaderError, Result};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one full path per line
pub fn export_image_paths<W: Write>(images: &[Image], mut writer: W) -> std::io::Result<()> {
    for image in images {
        writeln!(writer, "{}", image.full_path)?;
    }
    writer.flush()
}

/// Export to a file at `path`, replacing any existing file
pub fn export_image_paths_to_file(images: &[Image], path: &Path) -> Result<()> {
    let export_error = |source| ReaderError::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(export_error)?;
    export_image_paths(images, BufWriter::new(file)).map_err(export_error)?;

    tracing::info!(path = %path.display(), count = images.len(), "Exported image paths");
    Ok(())
}

/// Default export file name, e.g. `images_Jane_Doe_20240301_101500.txt`
///
/// Spaces and path separators in `pattern` become `_`, so the name always
/// stays a single file in the working directory.
pub fn export_file_name(pattern: &str, timestamp: NaiveDateTime) -> String {
    let pattern: String = pattern
        .chars()
        .map(|c| if matches!(c, ' ' | '/' | '\\') { '_' } else { c })
        .collect();
    format!(
        "images_{}_{}.txt",
        pattern,
        timestamp.format("%Y%m%d_%H%M%S")
    )
}
