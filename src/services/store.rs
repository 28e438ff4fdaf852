use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use crate::models::Listing;

/// Errors that can occur when reading or writing the listing store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CSV-backed listing store.
///
/// Listings live in a single delimited text file: posts append a row, reads
/// re-scan the whole file so edits made outside the process are picked up
/// on the next request. The file itself is small enough that no index or
/// cache is kept.
pub struct ListingStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ListingStore {
    /// Open a store at `path`, creating the parent directory when missing.
    /// The file itself is created lazily on the first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every listing in the store.
    ///
    /// A missing file is an empty store. Rows that fail to parse are logged
    /// and skipped rather than failing the whole read.
    pub fn load_all(&self) -> Result<Vec<Listing>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut listings = Vec::new();

        for (index, row) in reader.deserialize::<Listing>().enumerate() {
            match row {
                Ok(listing) => listings.push(listing),
                Err(e) => {
                    tracing::warn!(
                        "Skipping unreadable row {} in {}: {}",
                        index + 1,
                        self.path.display(),
                        e
                    );
                }
            }
        }

        tracing::debug!("Loaded {} listings from {}", listings.len(), self.path.display());

        Ok(listings)
    }

    /// Append one listing, writing the header first when the file is new or
    /// empty. Appends from concurrent handler threads are serialized.
    pub fn append(&self, listing: &Listing) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let needs_header = fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(listing)?;
        writer.flush()?;

        tracing::debug!("Appended listing {} to {}", listing.id, self.path.display());

        Ok(())
    }
}
