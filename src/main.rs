//! # face-db CLI
//!
//! Command-line interface for the face database reader.
//!
//! ## Usage
//! ```bash
//! face-db people
//! face-db images jane --output json
//! ```

mod cli;

use face_db_reader::Result;

fn main() -> Result<()> {
    cli::run()
}
