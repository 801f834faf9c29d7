//! In-memory asset source for tests, examples, and doctests.
//!
//! [`MemorySource`] maps relative paths to byte vectors and hands out
//! cursor-tracking resources over them. Every resource increments a
//! shared release counter when dropped, so tests can assert that the
//! registry releases each resource exactly once — including on the
//! open-failure paths. It also serves as the minimal reference
//! implementation of the [`AssetSource`] boundary.

use std::collections::HashMap;
use std::io::SeekFrom;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::source::{AssetResource, AssetSource};

/// Shared release/open accounting for a [`MemorySource`].
#[derive(Debug, Default)]
pub struct SourceCounters {
    opened: AtomicUsize,
    released: AtomicUsize,
}

impl SourceCounters {
    /// Resources opened over the source's lifetime.
    pub fn opens(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Resources released (dropped) over the source's lifetime.
    pub fn releases(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Resources currently alive.
    pub fn live(&self) -> usize {
        self.opens() - self.releases()
    }
}

/// Path-keyed in-memory asset container.
#[derive(Debug, Default)]
pub struct MemorySource {
    entries: HashMap<String, Arc<Vec<u8>>>,
    counters: Arc<SourceCounters>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` under `path`, replacing any previous entry.
    pub fn insert(&mut self, path: &str, data: Vec<u8>) {
        self.entries.insert(path.to_string(), Arc::new(data));
    }

    /// Handle to the shared counters, usable after the source moves into
    /// an adapter.
    pub fn counters(&self) -> Arc<SourceCounters> {
        Arc::clone(&self.counters)
    }

    /// Resources currently alive.
    pub fn open_resources(&self) -> usize {
        self.counters.live()
    }

    /// Resources released over the source's lifetime.
    pub fn releases(&self) -> usize {
        self.counters.releases()
    }
}

impl AssetSource for MemorySource {
    type Resource = MemoryResource;

    fn open(&self, path: &str) -> Option<Self::Resource> {
        let data = self.entries.get(path)?;
        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Some(MemoryResource {
            data: Arc::clone(data),
            pos: 0,
            counters: Arc::clone(&self.counters),
        })
    }
}

/// Cursor-tracking resource over one in-memory entry.
#[derive(Debug)]
pub struct MemoryResource {
    data: Arc<Vec<u8>>,
    pos: i64,
    counters: Arc<SourceCounters>,
}

impl MemoryResource {
    fn len(&self) -> i64 {
        self.data.len() as i64
    }
}

impl AssetResource for MemoryResource {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        if self.pos < 0 || self.pos >= self.len() {
            return 0;
        }
        let start = self.pos as usize;
        let n = buf.len().min(self.data.len() - start);
        buf[..n].copy_from_slice(&self.data[start..start + n]);
        self.pos += n as i64;
        n
    }

    fn seek(&mut self, pos: SeekFrom) -> i64 {
        let target = match pos {
            SeekFrom::Start(offset) => i64::try_from(offset).unwrap_or(i64::MAX),
            SeekFrom::Current(delta) => self.pos.saturating_add(delta),
            SeekFrom::End(delta) => self.len().saturating_add(delta),
        };
        if target < 0 {
            return -1;
        }
        self.pos = target;
        target
    }
}

impl Drop for MemoryResource {
    fn drop(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}
