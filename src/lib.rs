//! # Face DB Reader
//!
//! Finds people and the photos they appear in across digiKam's databases.
//!
//! ## Sources
//! - `recognition.db` - face clusters ("identities") and the names given to them
//! - `digikam4.db` - tags, images and the album tables that locate image files
//!
//! ## Guarantees
//! - **Read-only** - databases are opened read-only and never written
//! - **No shared handles** - each call opens and closes its own connections
//! - **All or nothing** - a call returns a complete result or an error
//!
//! ## Architecture
//! - `core` - The readers and queries
//! - `error` - Error types
//! - `cli` (binary only) - Command-line interface

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use crate::core::{FaceDbReader, Identity, Image, Statistics, StoreLocations, Tag};
pub use error::{ReaderError, Result};

/// Initialize tracing for the application
///
/// Logs go to stderr. `RUST_LOG` takes precedence; otherwise warnings only,
/// or debug output when `verbose` is set. Does nothing if a global
/// subscriber is already installed.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
