//! Host-runtime stream factory boundary.
//!
//! The host runtime is whatever layer gives callers their stream objects.
//! At open time the adapter asks it to mint an opaque [`StreamHandle`]
//! for a stream whose read/seek/close behavior is the adapter itself; the
//! runtime keeps the [`ResourceId`] cookie and presents it back through
//! [`AssetStreams::release`](crate::AssetStreams::release) if it tears the
//! stream object down on its own.
//!
//! Streams minted through this boundary are read-only: the adapter
//! exposes no write path, so a runtime wiring up a write callback rejects
//! every write.
//!
//! [`HandleMint`] is the built-in implementation for hosts that have no
//! stream facility of their own (tests, tools, plain Rust callers).

use crate::handle::{ResourceId, StreamHandle};

/// Mints opaque stream handles on behalf of the host runtime.
pub trait StreamFactory {
    /// Mint a stream handle for a new stream backed by `cookie`.
    ///
    /// Returns `None` if the runtime cannot create a stream object. The
    /// minted handle must not collide with one still open; the adapter
    /// treats a collision as a failed mint and releases the resource.
    fn create_stream(&mut self, cookie: ResourceId) -> Option<StreamHandle>;
}

/// Sequential in-process handle mint.
///
/// Hands out monotonically increasing handles starting at 1, so a zero
/// raw value never denotes a live stream.
#[derive(Debug, Default)]
pub struct HandleMint {
    next: u64,
}

impl HandleMint {
    /// Create a mint whose first handle is 1.
    pub const fn new() -> Self {
        Self { next: 0 }
    }
}

impl StreamFactory for HandleMint {
    fn create_stream(&mut self, _cookie: ResourceId) -> Option<StreamHandle> {
        self.next += 1;
        Some(StreamHandle::from_raw(self.next))
    }
}
