//! Type-safe extraction of Low-Key Hillclimbs race results.
//!
//! Paceline turns the archived weekly result pages of the Low-Key
//! Hillclimbs series into typed records, tolerating the formatting drift
//! the archive accumulated over two decades of hand-edited HTML.
//!
//! # Features
//!
//! - **Typed records**: every row becomes an [`Entry`] with parsed rank,
//!   rider identity, elapsed time and score, or a typed error, never a
//!   half-parsed row
//! - **Format tolerance**: elapsed times in `SS.s`, `MM:SS.s` and
//!   `H:MM:SS` shapes, with embedded noise and unit suffixes, parse
//!   identically
//! - **Template tolerance**: the Strava segment reference is located
//!   through an ordered list of lookup strategies covering the archive's
//!   template variants
//! - **Strict layout checks**: a results row with an unexpected cell count
//!   fails the week loudly instead of misaligning data
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paceline::{DirArchive, extract_year, write_csv};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let archive = DirArchive::new("lowkeyhillclimbs.com");
//!     let season = extract_year(&archive, 2016).await?;
//!     write_csv(std::io::stdout().lock(), 2016, &season)?;
//!     Ok(())
//! }
//! ```
//!
//! The extraction core ([`assemble_week`] and everything under [`parse`])
//! is pure computation over already-parsed documents; all I/O lives behind
//! the [`ArchiveSource`] seam.

// Core types and error handling
mod error;
pub mod types;

// Extraction pipeline
pub mod assemble;
pub mod parse;

// Collaborators around the core
pub mod archive;
pub mod export;
pub mod season;

// Core exports
pub use error::{ExtractError, Result};
pub use types::{Division, Entry, Rider, WeekResults};

// Pipeline exports
pub use assemble::assemble_week;
pub use parse::{extract_divisions, extract_segment_id};

// Collaborator exports
pub use archive::{ArchiveSource, DirArchive, WeekDocuments};
pub use export::write_csv;
pub use season::{WEEKS_PER_SEASON, extract_year};
