//! Archived page loading.
//!
//! The extractor works against a local mirror of the series website; it
//! never fetches anything over the network. [`ArchiveSource`] is the seam
//! between the purely computational core and whatever supplies the raw
//! documents, and [`DirArchive`] is the production implementation reading
//! the mirror directory tree.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::{ExtractError, Result};

/// Raw documents for one week: the entry page and the results page.
///
/// Both are unparsed HTML; parsing happens in the caller so the source
/// stays a plain byte supplier.
#[derive(Debug, Clone)]
pub struct WeekDocuments {
    /// The week's entry page (`week<N>.html`)
    pub entry_page: String,
    /// The week's results page (`week<N>/results.html`)
    pub results_page: String,
}

/// Supplies the raw documents for a (year, week) pair.
#[async_trait]
pub trait ArchiveSource {
    /// Load both documents for one week.
    ///
    /// A missing page is reported the same way as an unreadable one: a
    /// [`ExtractError::File`] carrying the path. Callers treat either as
    /// "this week cannot be assembled".
    async fn week_documents(&self, year: u16, week: u32) -> Result<WeekDocuments>;
}

/// Archive mirror rooted at a local directory.
///
/// The mirror keeps the site's own layout: `<root>/<year>/week<N>.html`
/// for the entry page and `<root>/<year>/week<N>/results.html` for the
/// results page.
#[derive(Debug, Clone)]
pub struct DirArchive {
    root: PathBuf,
}

impl DirArchive {
    /// Create an archive over a mirror directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Mirror directory this archive reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the entry page for a (year, week).
    pub fn entry_path(&self, year: u16, week: u32) -> PathBuf {
        self.root.join(year.to_string()).join(format!("week{week}.html"))
    }

    /// Path of the results page for a (year, week).
    pub fn results_path(&self, year: u16, week: u32) -> PathBuf {
        self.root.join(year.to_string()).join(format!("week{week}")).join("results.html")
    }

    async fn read(path: PathBuf) -> Result<String> {
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(contents),
            Err(source) => Err(ExtractError::file(path, source)),
        }
    }
}

#[async_trait]
impl ArchiveSource for DirArchive {
    async fn week_documents(&self, year: u16, week: u32) -> Result<WeekDocuments> {
        let entry_page = Self::read(self.entry_path(year, week)).await?;
        let results_page = Self::read(self.results_path(year, week)).await?;
        Ok(WeekDocuments { entry_page, results_page })
    }
}
