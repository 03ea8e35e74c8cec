//! # CLI Module
//!
//! Command-line interface for the face database reader.
//!
//! ## Usage
//! ```bash
//! # Everyone with a name, from faces and tags
//! face-db people
//!
//! # Search names
//! face-db search jan
//!
//! # Images tagged with a person, newest first
//! face-db images "Jane Doe" --limit 20
//!
//! # Export the image paths to a text file
//! face-db images jane --export
//!
//! # JSON output, custom collection location
//! face-db --base-dir ~/Pictures --output json stats
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use face_db_reader::core::export::{export_file_name, export_image_paths_to_file};
use face_db_reader::error::{ReaderError, Result};
use face_db_reader::{FaceDbReader, Identity, Image, Statistics, StoreLocations, Tag};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Face DB Reader - find people and their photos in a digiKam collection
#[derive(Parser, Debug)]
#[command(name = "face-db")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing recognition.db and digikam4.db
    #[arg(long, global = true, env = "FACE_DB_DIR")]
    base_dir: Option<PathBuf>,

    /// Path to the face recognition database (overrides --base-dir)
    #[arg(long, global = true)]
    recognition_db: Option<PathBuf>,

    /// Path to the digiKam photo database (overrides --base-dir)
    #[arg(long, global = true)]
    photos_db: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every known person name from faces and tags
    People,

    /// List face identities, including unnamed ones
    Identities,

    /// List all tags
    Tags,

    /// Search person names
    Search {
        /// Part of a name, case-insensitive
        pattern: String,
    },

    /// Find images tagged with a person
    Images {
        /// Part of a tag name, case-insensitive
        pattern: String,

        /// Show at most this many images
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write all image paths to a file (default name if none given)
        #[arg(long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// Show database statistics
    Stats,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (one value per line)
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    face_db_reader::init_tracing(cli.verbose);

    let reader = FaceDbReader::new(locations(&cli));
    tracing::debug!(locations = ?reader.locations(), "Using databases");

    let term = Term::stdout();
    let output = cli.output;

    match cli.command {
        Commands::People => {
            let names = with_spinner(output, "Reading names", || reader.list_people_names())?;
            print_names(&term, output, &names, "unique names");
        }
        Commands::Identities => {
            let identities =
                with_spinner(output, "Reading identities", || reader.list_identities())?;
            print_identities(&term, output, &identities);
        }
        Commands::Tags => {
            let tags = with_spinner(output, "Reading tags", || reader.list_tags())?;
            print_tags(&term, output, &tags);
        }
        Commands::Search { pattern } => {
            let pattern = non_blank(pattern, "Search term")?;
            let names = with_spinner(output, "Searching", || reader.search_people_names(&pattern))?;
            if names.is_empty() && matches!(output, OutputFormat::Pretty) {
                term.write_line(&format!("No people found matching '{}'", pattern)).ok();
            } else {
                print_names(&term, output, &names, &format!("people matching '{}'", pattern));
            }
        }
        Commands::Images {
            pattern,
            limit,
            export,
        } => {
            let pattern = non_blank(pattern, "Person name")?;
            let images = with_spinner(output, "Finding images", || {
                reader.find_images_by_person_name(&pattern)
            })?;
            print_images(&term, output, &pattern, &images, limit);

            if let Some(path) = export {
                let path = path.unwrap_or_else(|| {
                    PathBuf::from(export_file_name(&pattern, chrono::Local::now().naive_local()))
                });
                export_image_paths_to_file(&images, &path)?;
                if matches!(output, OutputFormat::Pretty) {
                    let shown = std::fs::canonicalize(&path).unwrap_or(path);
                    term.write_line(&format!(
                        "{} Exported {} paths to {}",
                        style("✓").green().bold(),
                        images.len(),
                        shown.display()
                    ))
                    .ok();
                }
            }
        }
        Commands::Stats => {
            let stats = with_spinner(output, "Counting", || reader.get_statistics())?;
            print_statistics(&term, output, &stats);
        }
    }

    Ok(())
}

fn locations(cli: &Cli) -> StoreLocations {
    let base_dir = cli
        .base_dir
        .clone()
        .unwrap_or_else(StoreLocations::default_base_dir);
    let mut locations = StoreLocations::from_base_dir(&base_dir);
    if let Some(path) = &cli.recognition_db {
        locations = locations.with_recognition_db(path);
    }
    if let Some(path) = &cli.photos_db {
        locations = locations.with_photos_db(path);
    }
    locations
}

fn non_blank(value: String, what: &str) -> Result<String> {
    if value.trim().is_empty() {
        Err(ReaderError::Config(format!("{} cannot be empty", what)))
    } else {
        Ok(value)
    }
}

fn with_spinner<T>(output: OutputFormat, message: &str, query: impl FnOnce() -> Result<T>) -> Result<T> {
    if !matches!(output, OutputFormat::Pretty) {
        return query();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = query();
    spinner.finish_and_clear();
    result
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!(error = %e, "Failed to serialize output"),
    }
}

fn print_names(term: &Term, output: OutputFormat, names: &[String], what: &str) {
    match output {
        OutputFormat::Pretty => {
            term.write_line(&format!(
                "{} {}",
                style(format!("Found {}", names.len())).bold(),
                what
            ))
            .ok();
            term.write_line("").ok();
            for (i, name) in names.iter().enumerate() {
                term.write_line(&format!("{:>4}. {}", style(i + 1).dim(), name)).ok();
            }
        }
        OutputFormat::Json => print_json(names),
        OutputFormat::Minimal => {
            for name in names {
                println!("{}", name);
            }
        }
    }
}

fn print_identities(term: &Term, output: OutputFormat, identities: &[Identity]) {
    match output {
        OutputFormat::Pretty => {
            for identity in identities {
                let name = match &identity.name {
                    Some(name) => style(name.clone()),
                    None => style("(unnamed)".to_string()).dim(),
                };
                term.write_line(&format!("{:>6}  {}", style(identity.id).cyan(), name)).ok();
            }
        }
        OutputFormat::Json => print_json(identities),
        OutputFormat::Minimal => {
            for identity in identities {
                println!("{}\t{}", identity.id, identity.name.as_deref().unwrap_or(""));
            }
        }
    }
}

fn print_tags(term: &Term, output: OutputFormat, tags: &[Tag]) {
    match output {
        OutputFormat::Pretty => {
            for tag in tags {
                let parent = if tag.is_root() {
                    String::new()
                } else {
                    format!(" (parent {})", tag.parent_id)
                };
                term.write_line(&format!(
                    "{:>6}  {}{}",
                    style(tag.id).cyan(),
                    tag.name,
                    style(parent).dim()
                ))
                .ok();
            }
        }
        OutputFormat::Json => print_json(tags),
        OutputFormat::Minimal => {
            for tag in tags {
                println!("{}", tag.name);
            }
        }
    }
}

fn print_images(
    term: &Term,
    output: OutputFormat,
    pattern: &str,
    images: &[Image],
    limit: Option<usize>,
) {
    let shown = &images[..limit.unwrap_or(images.len()).min(images.len())];

    match output {
        OutputFormat::Pretty => {
            if images.is_empty() {
                term.write_line(&format!("No images found for '{}'", pattern)).ok();
                term.write_line(&format!(
                    "{}",
                    style("Try `face-db search` first to see available names.").dim()
                ))
                .ok();
                return;
            }

            term.write_line(&format!(
                "{}",
                style(format!("Found {} images with '{}'", images.len(), pattern)).bold()
            ))
            .ok();
            term.write_line("").ok();

            for (i, image) in shown.iter().enumerate() {
                let date = image
                    .modification_date
                    .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());

                term.write_line(&format!("{:>4}. {}", style(i + 1).dim(), image.name)).ok();
                term.write_line(&format!("      Path: {}", image.path().display())).ok();
                term.write_line(&format!("      Size: {}", format_bytes(image.file_size))).ok();
                term.write_line(&format!("      Date Taken: {}", date)).ok();
                term.write_line("").ok();
            }

            if shown.len() < images.len() {
                term.write_line(&format!(
                    "{}",
                    style(format!("... {} more not shown", images.len() - shown.len())).dim()
                ))
                .ok();
            }
        }
        OutputFormat::Json => print_json(shown),
        OutputFormat::Minimal => {
            for image in shown {
                println!("{}", image.path().display());
            }
        }
    }
}

fn print_statistics(term: &Term, output: OutputFormat, stats: &Statistics) {
    match output {
        OutputFormat::Pretty => {
            term.write_line(&format!("{}", style("Recognition Database").bold().underlined())).ok();
            term.write_line(&format!("  Total Identities: {}", style(stats.identity_count).cyan())).ok();
            term.write_line(&format!("  Named Identities: {}", style(stats.named_identity_count).cyan())).ok();
            term.write_line(&format!("  Face Matrices:    {}", style(stats.face_vector_count).cyan())).ok();
            term.write_line("").ok();
            term.write_line(&format!("{}", style("digiKam Database").bold().underlined())).ok();
            term.write_line(&format!("  Total Images:     {}", style(stats.image_count).cyan())).ok();
            term.write_line(&format!("  Albums:           {}", style(stats.album_count).cyan())).ok();
            term.write_line(&format!("  Tags:             {}", style(stats.tag_count).cyan())).ok();
            term.write_line(&format!("  Tagged Images:    {}", style(stats.tagged_image_count).cyan())).ok();
        }
        OutputFormat::Json => print_json(stats),
        OutputFormat::Minimal => {
            println!("identities\t{}", stats.identity_count);
            println!("named_identities\t{}", stats.named_identity_count);
            println!("face_matrices\t{}", stats.face_vector_count);
            println!("images\t{}", stats.image_count);
            println!("albums\t{}", stats.album_count);
            println!("tags\t{}", stats.tag_count);
            println!("tagged_images\t{}", stats.tagged_image_count);
        }
    }
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
