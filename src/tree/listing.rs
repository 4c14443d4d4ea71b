//! Reading, sorting and filtering a single directory listing

use std::borrow::Cow;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::trace;

use crate::error::{Result, TreeError};

/// One filesystem object returned by listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Raw file name as returned by the filesystem. Used for ordering and
    /// for building child paths, so names that are not valid UTF-8 still
    /// resolve.
    pub file_name: OsString,
    pub is_dir: bool,
    /// Size in bytes. Only meaningful when `is_dir` is false.
    pub size: u64,
}

impl DirectoryEntry {
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            file_name: name.into(),
            is_dir: true,
            size: 0,
        }
    }

    pub fn file(name: impl Into<OsString>, size: u64) -> Self {
        Self {
            file_name: name.into(),
            is_dir: false,
            size,
        }
    }

    /// Name for display. Invalid UTF-8 is replaced with U+FFFD.
    pub fn name(&self) -> Cow<'_, str> {
        self.file_name.to_string_lossy()
    }

    fn from_fs(entry: &fs::DirEntry) -> std::io::Result<Self> {
        // DirEntry::metadata does not traverse symlinks, so a link is a leaf
        let meta = entry.metadata()?;
        Ok(Self {
            file_name: entry.file_name(),
            is_dir: meta.is_dir(),
            size: meta.len(),
        })
    }
}

/// Read the directory at `path`, sorted by name, optionally restricted to
/// subdirectories.
///
/// Fails if the directory cannot be opened or any of its entries cannot be
/// read. The directory handle is closed before returning on every path.
pub fn list_directory(path: &Path, include_files: bool) -> Result<Vec<DirectoryEntry>> {
    let read_dir = fs::read_dir(path).map_err(|e| TreeError::io(path, e))?;

    let entries = read_dir
        .map(|entry| entry.and_then(|e| DirectoryEntry::from_fs(&e)))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| TreeError::io(path, e))?;

    let mut entries = sort_entries(entries);
    if !include_files {
        entries.retain(|e| e.is_dir);
    }

    trace!(path = %path.display(), count = entries.len(), "listed directory");
    Ok(entries)
}

/// Sort entries by raw file name, byte-wise on unix. The sort is stable:
/// entries with equal names keep their relative order.
pub fn sort_entries(mut entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    entries
}
