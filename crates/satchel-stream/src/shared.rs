//! Mutex-guarded adapter for cross-thread use.
//!
//! The bare [`AssetStreams`] is confined to its owner by `&mut self`
//! receivers; no locking happens inside it. When several threads must
//! share one adapter, [`SharedStreams`] serializes every operation behind
//! a [`parking_lot::Mutex`] — each call is a single critical section, so
//! the registry's no-concurrent-access assumption holds by construction.
//! Callers still must not hand one stream handle to two threads and
//! expect coherent interleaving of cursors; the lock serializes the
//! operations, not the protocol.

use std::io::SeekFrom;

use parking_lot::Mutex;

use crate::factory::StreamFactory;
use crate::handle::{ResourceId, StreamHandle};
use crate::mode::OpenMode;
use crate::source::AssetSource;
use crate::stream::AssetStreams;
use crate::Result;

/// Thread-safe wrapper mirroring every [`AssetStreams`] operation.
pub struct SharedStreams<S: AssetSource, F: StreamFactory> {
    inner: Mutex<AssetStreams<S, F>>,
}

impl<S: AssetSource, F: StreamFactory> SharedStreams<S, F> {
    /// Wrap an adapter for shared use.
    pub const fn new(streams: AssetStreams<S, F>) -> Self {
        Self {
            inner: Mutex::new(streams),
        }
    }

    /// See [`AssetStreams::open`].
    pub fn open(&self, path: &str, mode: OpenMode) -> Result<StreamHandle> {
        self.inner.lock().open(path, mode)
    }

    /// See [`AssetStreams::read`].
    pub fn read(&self, stream: StreamHandle, buf: &mut [u8]) -> usize {
        self.inner.lock().read(stream, buf)
    }

    /// See [`AssetStreams::seek`].
    pub fn seek(&self, stream: StreamHandle, pos: SeekFrom) -> Result<()> {
        self.inner.lock().seek(stream, pos)
    }

    /// See [`AssetStreams::tell`].
    pub fn tell(&self, stream: StreamHandle) -> i64 {
        self.inner.lock().tell(stream)
    }

    /// See [`AssetStreams::close`].
    pub fn close(&self, stream: StreamHandle) -> Result<()> {
        self.inner.lock().close(stream)
    }

    /// See [`AssetStreams::release`].
    pub fn release(&self, resource_id: ResourceId) -> Result<()> {
        self.inner.lock().release(resource_id)
    }

    /// See [`AssetStreams::size`].
    pub fn size(&self, stream: StreamHandle) -> Result<u64> {
        self.inner.lock().size(stream)
    }

    /// Number of currently open streams.
    pub fn open_streams(&self) -> usize {
        self.inner.lock().open_streams()
    }

    /// Unwrap the adapter, consuming the lock.
    pub fn into_inner(self) -> AssetStreams<S, F> {
        self.inner.into_inner()
    }
}
