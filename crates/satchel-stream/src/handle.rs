//! Opaque handle types crossing the adapter's two boundaries.
//!
//! Neither token carries any capability: the core never dereferences a
//! [`StreamHandle`] (the host runtime owns whatever it denotes) and a
//! [`ResourceId`] is only ever compared for equality. Both exist purely
//! as lookup keys into the registry.

use std::fmt;

/// Opaque caller-facing token for an open logical stream.
///
/// Minted by the host runtime's [`StreamFactory`](crate::StreamFactory);
/// the adapter treats the inner value as an uninterpreted identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamHandle(u64);

impl StreamHandle {
    /// Wrap a raw handle value minted by the host runtime.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle value, for handing back to the host runtime.
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StreamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Opaque provider-level identity for one opened resource.
///
/// Assigned by the adapter at open time and handed to the host runtime as
/// the stream's cookie; the runtime presents it back on implicit teardown
/// (see [`AssetStreams::release`](crate::AssetStreams::release)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(u64);

impl ResourceId {
    /// Wrap a raw resource identity.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identity value.
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
