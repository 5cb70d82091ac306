//! Drive and directory-entry models returned by the Graph client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named storage container (document library) within a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drive {
    /// Opaque drive identifier assigned by the service.
    pub id: String,
    /// Human-readable drive name, e.g. `"Documents"`.
    pub name: String,
}

/// A file or folder immediately contained within a folder of a drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveEntry {
    pub name: String,
    /// Browser URL of the entry.
    pub web_url: String,
    pub kind: EntryKind,
}

/// Classification of a directory entry.
///
/// `Unknown` covers payloads that carry neither a `folder` nor a `file`
/// facet (e.g. notebooks and other special item types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Folder,
    File,
    Unknown,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "folder"),
            Self::File => write!(f, "file"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Category filter for children listings.
///
/// The filter is applied by facet presence: an element is kept when it
/// carries the facet key named by [`as_key`]. Entries with neither facet
/// only appear in unfiltered listings.
///
/// [`as_key`]: EntryFilter::as_key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFilter {
    Folder,
    File,
}

impl EntryFilter {
    /// The JSON facet key whose presence this filter selects on.
    #[must_use]
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

impl fmt::Display for EntryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl std::str::FromStr for EntryFilter {
    type Err = crate::GraphError;

    /// Parse a filter name as used on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Validation`] for anything other than
    /// `"folder"` / `"folders"` / `"file"` / `"files"`.
    ///
    /// [`GraphError::Validation`]: crate::GraphError::Validation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folder" | "folders" => Ok(Self::Folder),
            "file" | "files" => Ok(Self::File),
            other => Err(crate::GraphError::Validation(format!(
                "unknown entry filter '{other}', expected 'folder' or 'file'"
            ))),
        }
    }
}
