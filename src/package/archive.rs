//! Archive access for SCORM packages.
//!
//! The package parser only needs two things from a container: the bytes of
//! one entry and whether an entry exists. [`ZipReader`] captures exactly
//! that, so hosts that already unpacked a package can hand over a
//! [`MemoryArchive`] instead of re-reading the ZIP.

use crate::common::{Error, Result};
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io::{Cursor, Read};

/// Read access to the entries of a package archive.
pub trait ZipReader {
    /// Read an entry's bytes; `Ok(None)` when the entry does not exist.
    fn entry(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Whether an entry exists.
    fn contains(&self, path: &str) -> bool;
}

/// Normalize an entry path: drop a leading `/` or `./` and use `/`
/// separators.
pub fn normalize_entry_path(path: &str) -> Cow<'_, str> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_prefix("./").unwrap_or(trimmed);
    if trimmed.contains('\\') {
        Cow::Owned(trimmed.replace('\\', "/"))
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Default bound on the decompressed size of one entry.
pub const MAX_ENTRY_SIZE: u64 = 64 * 1024 * 1024;

/// Initial buffer capacity never exceeds this, whatever the header claims.
const PREALLOC_LIMIT: u64 = 1024 * 1024;

/// ZIP archive reader over a borrowed byte buffer.
///
/// Entry names are indexed once at open; contents are decompressed on each
/// [`ZipReader::entry`] call. Entries larger than the configured limit,
/// declared or actual, are rejected as malformed.
pub struct ZipPackageReader<'data> {
    archive: RefCell<zip::ZipArchive<Cursor<&'data [u8]>>>,
    /// File entries, directories excluded
    names: HashSet<String>,
    max_entry_size: u64,
}

impl<'data> ZipPackageReader<'data> {
    /// Open a ZIP archive from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedArchive`] if the bytes are not a ZIP
    /// container.
    pub fn new(data: &'data [u8]) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| Error::MalformedArchive(e.to_string()))?;

        let names: HashSet<String> = archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .map(String::from)
            .collect();

        tracing::debug!(entries = names.len(), "opened package archive");

        Ok(Self {
            archive: RefCell::new(archive),
            names,
            max_entry_size: MAX_ENTRY_SIZE,
        })
    }

    /// Set the largest entry, in decompressed bytes, that may be read.
    #[inline]
    pub fn with_max_entry_size(mut self, limit: u64) -> Self {
        self.max_entry_size = limit;
        self
    }

    /// Number of file entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a requested path to the stored entry name.
    fn resolve(&self, path: &str) -> Option<&str> {
        self.names
            .get(path)
            .or_else(|| self.names.get(normalize_entry_path(path).as_ref()))
            .map(String::as_str)
    }
}

impl ZipReader for ZipPackageReader<'_> {
    fn entry(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let Some(name) = self.resolve(path) else {
            return Ok(None);
        };

        let mut archive = self.archive.borrow_mut();
        let file = archive.by_name(name)?;

        let declared = file.size();
        if declared > self.max_entry_size {
            return Err(Error::MalformedArchive(format!(
                "entry {} declares {} bytes, limit is {}",
                name, declared, self.max_entry_size
            )));
        }

        let mut content = Vec::with_capacity(declared.min(PREALLOC_LIMIT) as usize);
        file.take(self.max_entry_size.saturating_add(1))
            .read_to_end(&mut content)
            .map_err(|e| Error::MalformedArchive(format!("failed to read entry {}: {}", name, e)))?;
        if content.len() as u64 > self.max_entry_size {
            return Err(Error::MalformedArchive(format!(
                "entry {} exceeds {} bytes",
                name, self.max_entry_size
            )));
        }
        Ok(Some(content))
    }

    fn contains(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }
}

/// Already-extracted package entries held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryArchive {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; the path is normalized.
    pub fn insert(&mut self, path: &str, content: impl Into<Vec<u8>>) {
        self.entries
            .insert(normalize_entry_path(path).into_owned(), content.into());
    }

    /// Builder-style [`MemoryArchive::insert`].
    pub fn with_entry(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ZipReader for MemoryArchive {
    fn entry(&self, path: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(normalize_entry_path(path).as_ref()).cloned())
    }

    fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(normalize_entry_path(path).as_ref())
    }
}
