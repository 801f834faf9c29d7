//! Archive-resource provider boundary.
//!
//! An [`AssetSource`] is the container side of the system: it hands out
//! read-only resources by relative path. The adapter never interprets the
//! container format itself; it only moves bytes through this boundary and
//! tracks cursor state.
//!
//! Releasing a resource is dropping it. The registry owns each resource
//! exclusively, so release happens exactly once regardless of which close
//! path (explicit or host-triggered) removes the binding.

use std::io::SeekFrom;

/// A container of read-only resources addressable by relative path.
pub trait AssetSource {
    /// The resource type this container hands out.
    type Resource: AssetResource;

    /// Open the resource stored at `path`.
    ///
    /// `path` is relative to the container root; the adapter has already
    /// stripped a leading separator. Returns `None` if no resource exists
    /// at that path.
    fn open(&self, path: &str) -> Option<Self::Resource>;
}

/// One open resource inside an asset container.
///
/// The contract mirrors a low-level platform asset API: reads report the
/// byte count actually transferred (a short read is a valid outcome, not
/// an error), and seeks report the new absolute offset or a negative
/// sentinel on failure.
pub trait AssetResource {
    /// Read up to `buf.len()` bytes at the current position.
    ///
    /// Returns the number of bytes transferred; `0` at end of resource or
    /// when the provider cannot read.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Reposition the resource cursor.
    ///
    /// Returns the new absolute offset from the start of the resource, or
    /// a negative sentinel if the target could not be resolved (in which
    /// case the position is unchanged).
    fn seek(&mut self, pos: SeekFrom) -> i64;
}
