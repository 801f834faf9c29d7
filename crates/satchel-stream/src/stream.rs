//! Stream adapter: the caller-facing open/read/seek/tell/close operations.
//!
//! [`AssetStreams`] owns the handle registry and the two injected
//! collaborators. Every operation runs synchronously on the calling
//! thread with no internal suspension points; "blocking" is whatever the
//! provider itself does. Exclusive access is enforced at compile time by
//! the `&mut self` receivers — callers that need to share an adapter
//! across threads use [`SharedStreams`](crate::SharedStreams).

use std::io::SeekFrom;

use tracing::{debug, trace, warn};

use crate::handle::{ResourceId, StreamHandle};
use crate::mode::OpenMode;
use crate::registry::{Binding, Registry};
use crate::source::{AssetResource, AssetSource};
use crate::{factory::StreamFactory, Result, StreamError};

/// Position reported by [`AssetStreams::tell`] for an unknown handle,
/// mirroring the end-of-file sentinel of the buffered stream API.
pub const STREAM_EOF: i64 = -1;

/// Adapter routing buffered-stream operations into an asset container.
///
/// Holds the registry of open bindings plus the injected
/// [`AssetSource`] (container side) and [`StreamFactory`] (host-runtime
/// side). Independent adapters are fully isolated; nothing is
/// process-wide.
pub struct AssetStreams<S: AssetSource, F: StreamFactory> {
    source: S,
    factory: F,
    registry: Registry<S::Resource>,
    next_resource: u64,
}

impl<S: AssetSource, F: StreamFactory> AssetStreams<S, F> {
    /// Create an adapter over `source`, minting handles through `factory`.
    pub const fn new(source: S, factory: F) -> Self {
        Self {
            source,
            factory,
            registry: Registry::new(),
            next_resource: 0,
        }
    }

    /// The injected asset source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Number of currently open streams.
    pub fn open_streams(&self) -> usize {
        self.registry.len()
    }

    /// Open the resource at `path` and mint a stream handle for it.
    ///
    /// Any mode requesting write access fails up front; the container is
    /// read-only. A single leading separator is stripped from `path`,
    /// since container paths are always relative. On success the new
    /// stream's cursor is 0.
    ///
    /// # Errors
    ///
    /// [`StreamError::WriteAccess`] for a writing mode,
    /// [`StreamError::NotFound`] if the container has no such resource,
    /// [`StreamError::StreamCreation`] if the host runtime declines to
    /// mint a handle (the already-opened resource is released before the
    /// error returns).
    pub fn open(&mut self, path: &str, mode: OpenMode) -> Result<StreamHandle> {
        if mode.writes() {
            return Err(StreamError::WriteAccess);
        }

        // Container paths never begin with a separator.
        let path = path.strip_prefix('/').unwrap_or(path);

        let resource = self
            .source
            .open(path)
            .ok_or_else(|| StreamError::NotFound(path.to_string()))?;

        self.next_resource += 1;
        let resource_id = ResourceId::from_raw(self.next_resource);

        let Some(stream) = self.factory.create_stream(resource_id) else {
            drop(resource);
            debug!(%path, "host runtime declined to mint a stream handle");
            return Err(StreamError::StreamCreation);
        };
        if self.registry.contains_stream(stream) {
            drop(resource);
            warn!(%stream, "host runtime minted a handle that is already open");
            return Err(StreamError::StreamCreation);
        }

        debug!(%path, %stream, resource = %resource_id, "opened asset stream");
        self.registry
            .insert(Binding::new(resource, resource_id, stream));
        Ok(stream)
    }

    /// Read up to `buf.len()` bytes from the stream into `buf`.
    ///
    /// Returns the number of bytes actually transferred and advances the
    /// cached cursor by the same amount. A short read is a valid outcome
    /// and is returned as-is, never retried. An unknown handle reads zero
    /// bytes — the permissive contract of the underlying stream API, not
    /// an error.
    pub fn read(&mut self, stream: StreamHandle, buf: &mut [u8]) -> usize {
        let Some(binding) = self.registry.find_by_stream(stream) else {
            trace!(%stream, "read on unknown stream handle");
            return 0;
        };
        let transferred = binding.resource_mut().read(buf);
        binding.advance(transferred);
        trace!(%stream, transferred, cursor = binding.cursor(), "read");
        transferred
    }

    /// Reposition the stream.
    ///
    /// The provider resolves `pos` to a new absolute offset which becomes
    /// the cached cursor. A provider-side failure sentinel (negative
    /// offset) is stored as-is and observable through [`tell`]; the call
    /// itself only fails for an unknown handle.
    ///
    /// [`tell`]: AssetStreams::tell
    ///
    /// # Errors
    ///
    /// [`StreamError::UnknownStream`] if no binding exists for `stream`.
    pub fn seek(&mut self, stream: StreamHandle, pos: SeekFrom) -> Result<()> {
        let binding = self
            .registry
            .find_by_stream(stream)
            .ok_or(StreamError::UnknownStream(stream))?;
        let resolved = binding.resource_mut().seek(pos);
        if resolved < 0 {
            warn!(%stream, resolved, "provider seek failed; sentinel cached");
        }
        binding.set_cursor(resolved);
        trace!(%stream, cursor = resolved, "seek");
        Ok(())
    }

    /// Report the cached cursor for the stream.
    ///
    /// The cache is the source of truth between reads and seeks; no
    /// provider call is made. An unknown handle reports [`STREAM_EOF`].
    pub fn tell(&mut self, stream: StreamHandle) -> i64 {
        self.registry
            .find_by_stream(stream)
            .map_or(STREAM_EOF, |binding| binding.cursor())
    }

    /// Close the stream explicitly, releasing its resource.
    ///
    /// # Errors
    ///
    /// [`StreamError::UnknownStream`] if the handle is not (or no longer)
    /// bound — including when the host-triggered path already released
    /// the resource.
    pub fn close(&mut self, stream: StreamHandle) -> Result<()> {
        let binding = self
            .registry
            .remove_by_stream(stream)
            .ok_or(StreamError::UnknownStream(stream))?;
        debug!(%stream, resource = %binding.resource_id(), "closed asset stream");
        drop(binding);
        Ok(())
    }

    /// Host-triggered teardown path, keyed by the resource cookie.
    ///
    /// Invoked by the host runtime when it destroys the stream object
    /// itself; the runtime only knows the [`ResourceId`] it was handed at
    /// stream creation. Removal and release happen here exactly as in
    /// [`close`](AssetStreams::close); whichever path runs first takes
    /// the binding and the other reports not-found.
    ///
    /// # Errors
    ///
    /// [`StreamError::UnknownResource`] if no binding owns `resource_id`.
    pub fn release(&mut self, resource_id: ResourceId) -> Result<()> {
        let binding = self
            .registry
            .remove_by_resource(resource_id)
            .ok_or(StreamError::UnknownResource(resource_id))?;
        debug!(stream = %binding.stream(), resource = %resource_id, "released asset stream");
        drop(binding);
        Ok(())
    }

    /// Total size of the resource behind the stream, in bytes.
    ///
    /// Seeks the provider to the end to learn the size, then restores the
    /// provider position from the cached cursor. The cursor itself is not
    /// rewritten — a size query never perturbs the logical position.
    ///
    /// # Errors
    ///
    /// [`StreamError::UnknownStream`] if the handle is not bound,
    /// [`StreamError::Unsized`] if the provider cannot resolve the end of
    /// the resource.
    pub fn size(&mut self, stream: StreamHandle) -> Result<u64> {
        let binding = self
            .registry
            .find_by_stream(stream)
            .ok_or(StreamError::UnknownStream(stream))?;

        let saved = binding.cursor();
        let end = binding.resource_mut().seek(SeekFrom::End(0));

        // Restore the provider position; a cached failure sentinel cannot
        // be presented to an absolute seek.
        let restore = u64::try_from(saved).unwrap_or(0);
        binding.resource_mut().seek(SeekFrom::Start(restore));

        u64::try_from(end).map_err(|_| StreamError::Unsized)
    }
}
