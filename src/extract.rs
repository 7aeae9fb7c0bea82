//! Example extractor: lesson documents to numbered fixture files
//!
//! Lesson documents interleave prose with code regions. A line equal to
//! `@code` opens a region (and starts a fresh listing), a line equal to
//! `@text` returns to prose. Everything scanned while a region is open is
//! collected; the listings from all documents accumulate into one ordered
//! collection whose index becomes the fixture file number.

use crate::corpus::Document;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Line that opens a code region and starts a fresh listing
pub const CODE_MARKER: &str = "@code";
/// Line that returns the scan to prose mode
pub const TEXT_MARKER: &str = "@text";

/// Errors raised while writing listing fixtures
#[derive(Debug, Clone)]
pub enum ExtractError {
    WriteFailed { path: PathBuf, message: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::WriteFailed { path, message } => {
                write!(f, "Failed to write listing '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Scan documents in order, collecting code-region lines into listings.
///
/// Every `@code` line pushes a fresh empty listing, even when a region is
/// already open; nothing is discarded by a re-open. `@text` only stops
/// further appends. Marker lines themselves are never collected, and a
/// region left open at end of file collects all trailing lines.
pub fn extract_listings(documents: &[Document]) -> Vec<String> {
    let mut listings: Vec<String> = Vec::new();
    for document in documents {
        let mut reading = false;
        for line in &document.lines {
            let line = line.as_str();
            if line == CODE_MARKER {
                listings.push(String::new());
                reading = true;
            } else if line == TEXT_MARKER {
                reading = false;
            } else if reading {
                // `reading` implies at least one listing has been pushed
                if let Some(listing) = listings.last_mut() {
                    listing.push_str(line);
                    listing.push('\n');
                }
            }
        }
    }
    listings
}

/// Fixture file name for a listing index: `test_000.txt`, `test_001.txt`, ...
pub fn fixture_name(index: usize) -> String {
    format!("test_{:03}.txt", index)
}

/// Write each listing verbatim to `<out_dir>/test_<index>.txt`.
///
/// The output directory is expected to exist; any write failure aborts
/// immediately with no cleanup of files already written.
pub fn write_listings(listings: &[String], out_dir: &Path) -> Result<(), ExtractError> {
    for (index, listing) in listings.iter().enumerate() {
        let path = out_dir.join(fixture_name(index));
        fs::write(&path, listing).map_err(|e| ExtractError::WriteFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_names_are_zero_padded() {
        assert_eq!(fixture_name(0), "test_000.txt");
        assert_eq!(fixture_name(7), "test_007.txt");
        assert_eq!(fixture_name(42), "test_042.txt");
        assert_eq!(fixture_name(123), "test_123.txt");
    }

    #[test]
    fn document_without_markers_yields_nothing() {
        let doc = Document::from_text("plain.mbl", "just prose\nmore prose\n");
        assert!(extract_listings(&[doc]).is_empty());
    }
}
