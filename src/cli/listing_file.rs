//! Loading listing drafts from JSON files.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use thiserror::Error;

use crate::catalog::domain::ListingDraft;

/// Errors raised while loading a listing file.
#[derive(Debug, Error)]
pub enum ListingFileError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The top-level JSON value is not an object.
    #[error("Config must be a JSON object.")]
    NotAnObject,

    /// The object does not describe a listing (missing or mistyped fields).
    #[error("Validation error: {0}")]
    InvalidListing(#[source] serde_json::Error),
}

/// Reads and parses the listing draft stored at `path`.
///
/// # Errors
///
/// Returns [`ListingFileError::Read`] when the file cannot be read, or any
/// error from [`parse_listing_draft`].
pub fn read_listing_draft(path: &Utf8Path) -> Result<ListingDraft, ListingFileError> {
    let text = read_utf8_file(path).map_err(|source| ListingFileError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse_listing_draft(&text)
}

/// Parses a listing draft from JSON text holding a single object.
///
/// # Errors
///
/// Returns [`ListingFileError::InvalidJson`] for malformed JSON,
/// [`ListingFileError::NotAnObject`] when the top-level value is not an
/// object, or [`ListingFileError::InvalidListing`] when required fields are
/// missing or mistyped.
pub fn parse_listing_draft(text: &str) -> Result<ListingDraft, ListingFileError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(ListingFileError::InvalidJson)?;
    if !value.is_object() {
        return Err(ListingFileError::NotAnObject);
    }
    serde_json::from_value(value).map_err(ListingFileError::InvalidListing)
}

fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} does not name a file"),
        )
    })?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
