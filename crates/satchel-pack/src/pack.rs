//! Pack reader and its provider implementation.
//!
//! The container file is memory-mapped once; every resource opened from
//! it is a span over the shared map with an independent cursor, so any
//! number of streams can read the same pack without re-opening the file.

use std::collections::HashMap;
use std::fs::File;
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use memmap2::Mmap;
use tracing::{debug, info};

use satchel_stream::{AssetResource, AssetSource};

use crate::format::{self, PackEntry, HEADER_SIZE};
use crate::{PackError, Result};

/// Span of one entry inside the mapped container.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// Read-only pack container, memory-mapped.
#[derive(Debug)]
pub struct Pack {
    map: Arc<Mmap>,
    spans: HashMap<String, Span>,
    entries: Vec<PackEntry>,
    path: PathBuf,
}

impl Pack {
    /// Open and validate a pack container file.
    ///
    /// The entry table is parsed eagerly and every span is checked
    /// against the file bounds, so a resource open can never walk off the
    /// map later.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or mapped, or if the
    /// container is malformed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        #[allow(unsafe_code)]
        let map = unsafe { Mmap::map(&file)? };
        debug!(path = %path.display(), bytes = map.len(), "mapped pack container");

        let count = format::parse_header(&map)?;
        // A lying entry count cannot force a huge preallocation: the
        // table cannot hold more entries than the file has bytes for.
        let capacity = (count as usize).min(map.len() / format::entry_size(0));
        let mut entries = Vec::with_capacity(capacity);

        let mut pos = HEADER_SIZE;
        for _ in 0..count {
            let (entry, next) = format::parse_entry(&map, pos)?;
            pos = next;
            entries.push(entry);
        }
        let table_end = pos;

        // Spans can only be checked once the full table is known: blobs
        // live strictly past it.
        let mut spans = HashMap::with_capacity(entries.len());
        for entry in &entries {
            let start = usize::try_from(entry.offset)
                .map_err(|_| PackError::InvalidFormat(format!("offset overflow: {}", entry.offset)))?;
            let len = usize::try_from(entry.length)
                .map_err(|_| PackError::InvalidFormat(format!("length overflow: {}", entry.length)))?;
            let end = start
                .checked_add(len)
                .ok_or_else(|| PackError::InvalidFormat("span overflow".to_string()))?;
            if start < table_end || end > map.len() {
                return Err(PackError::InvalidFormat(format!(
                    "entry {:?} spans {start}..{end} outside data region {table_end}..{}",
                    entry.path,
                    map.len()
                )));
            }

            if spans.insert(entry.path.clone(), Span { start, len }).is_some() {
                return Err(PackError::InvalidFormat(format!(
                    "duplicate entry path: {}",
                    entry.path
                )));
            }
        }

        info!(path = %path.display(), entries = entries.len(), "opened pack container");
        Ok(Self {
            map: Arc::new(map),
            spans,
            entries,
            path: path.to_path_buf(),
        })
    }

    /// Path the container was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries in the container.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the container has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Table entries in container order.
    pub fn entries(&self) -> &[PackEntry] {
        &self.entries
    }

    /// Check if a resource exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.spans.contains_key(path)
    }
}

impl AssetSource for Pack {
    type Resource = PackResource;

    fn open(&self, path: &str) -> Option<Self::Resource> {
        let span = *self.spans.get(path)?;
        Some(PackResource {
            map: Arc::clone(&self.map),
            span,
            pos: 0,
        })
    }
}

/// One opened resource: a cursor over a span of the shared map.
#[derive(Debug)]
pub struct PackResource {
    map: Arc<Mmap>,
    span: Span,
    pos: i64,
}

impl PackResource {
    /// Length of the resource in bytes.
    pub fn len(&self) -> u64 {
        self.span.len as u64
    }

    /// Check if the resource is empty.
    pub fn is_empty(&self) -> bool {
        self.span.len == 0
    }
}

impl AssetResource for PackResource {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let Ok(pos) = usize::try_from(self.pos) else {
            return 0;
        };
        if pos >= self.span.len {
            return 0;
        }
        let n = buf.len().min(self.span.len - pos);
        let start = self.span.start + pos;
        buf[..n].copy_from_slice(&self.map[start..start + n]);
        self.pos += n as i64;
        n
    }

    fn seek(&mut self, pos: SeekFrom) -> i64 {
        let target = match pos {
            SeekFrom::Start(offset) => i64::try_from(offset).unwrap_or(i64::MAX),
            SeekFrom::Current(delta) => self.pos.saturating_add(delta),
            SeekFrom::End(delta) => (self.span.len as i64).saturating_add(delta),
        };
        if target < 0 {
            return -1;
        }
        self.pos = target;
        target
    }
}
