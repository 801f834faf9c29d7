//! Handle registry: the bindings between stream handles, resources, and
//! cursors.
//!
//! The registry is an insertion-ordered vector scanned linearly. Lookups
//! by stream handle move the hit to the front, since repeated operations
//! overwhelmingly target the most recently used stream; for the handful
//! of concurrently open streams this layer is built for, the reordered
//! scan beats a hash map. Lookups by resource id happen once per binding
//! (host-triggered teardown) and leave the order alone.
//!
//! Removal returns the binding by value. The resource it owns is released
//! when the binding is dropped, so whichever close path removes a binding
//! first performs the one and only release; the other path scans, misses,
//! and reports not-found.

use tracing::trace;

use crate::handle::{ResourceId, StreamHandle};

/// Registry record for one open stream.
#[derive(Debug)]
pub struct Binding<R> {
    resource: R,
    resource_id: ResourceId,
    stream: StreamHandle,
    cursor: i64,
}

impl<R> Binding<R> {
    /// Create a binding for a freshly opened resource, cursor at 0.
    pub const fn new(resource: R, resource_id: ResourceId, stream: StreamHandle) -> Self {
        Self {
            resource,
            resource_id,
            stream,
            cursor: 0,
        }
    }

    /// The owned resource.
    pub const fn resource_mut(&mut self) -> &mut R {
        &mut self.resource
    }

    /// Provider-level identity of the owned resource.
    pub const fn resource_id(&self) -> ResourceId {
        self.resource_id
    }

    /// The caller-facing stream handle.
    pub const fn stream(&self) -> StreamHandle {
        self.stream
    }

    /// Cached read position.
    pub const fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Overwrite the cached read position.
    pub const fn set_cursor(&mut self, cursor: i64) {
        self.cursor = cursor;
    }

    /// Advance the cached read position by `bytes`.
    pub const fn advance(&mut self, bytes: usize) {
        self.cursor += bytes as i64;
    }
}

/// Insertion-ordered collection of [`Binding`]s with two keyed views.
///
/// Invariant: at most one binding per stream handle and per resource id
/// is live at any time. The adapter upholds it by minting fresh resource
/// ids and refusing duplicate stream handles; `insert` debug-asserts it.
#[derive(Debug)]
pub struct Registry<R> {
    bindings: Vec<Binding<R>>,
}

impl<R> Registry<R> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no bindings are live.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Check for a live binding under `stream` without reordering.
    pub fn contains_stream(&self, stream: StreamHandle) -> bool {
        self.bindings.iter().any(|b| b.stream == stream)
    }

    /// Insert a binding at the front of the scan order.
    pub fn insert(&mut self, binding: Binding<R>) {
        debug_assert!(
            !self.contains_stream(binding.stream),
            "stream handle already bound"
        );
        debug_assert!(
            !self.bindings.iter().any(|b| b.resource_id == binding.resource_id),
            "resource id already bound"
        );
        trace!(stream = %binding.stream, resource = %binding.resource_id, "registering binding");
        self.bindings.insert(0, binding);
    }

    /// Find the binding for `stream`, moving it to the front on a hit.
    pub fn find_by_stream(&mut self, stream: StreamHandle) -> Option<&mut Binding<R>> {
        let pos = self.bindings.iter().position(|b| b.stream == stream)?;
        if pos > 0 {
            let binding = self.bindings.remove(pos);
            self.bindings.insert(0, binding);
        }
        self.bindings.first_mut()
    }

    /// Find the binding owning `resource_id`. No reordering.
    pub fn find_by_resource(&mut self, resource_id: ResourceId) -> Option<&mut Binding<R>> {
        self.bindings
            .iter_mut()
            .find(|b| b.resource_id == resource_id)
    }

    /// Unlink and return the binding for `stream`.
    ///
    /// The scan does not reorder; dropping the returned binding releases
    /// its resource.
    pub fn remove_by_stream(&mut self, stream: StreamHandle) -> Option<Binding<R>> {
        let pos = self.bindings.iter().position(|b| b.stream == stream)?;
        Some(self.bindings.remove(pos))
    }

    /// Unlink and return the binding owning `resource_id`.
    pub fn remove_by_resource(&mut self, resource_id: ResourceId) -> Option<Binding<R>> {
        let pos = self
            .bindings
            .iter()
            .position(|b| b.resource_id == resource_id)?;
        Some(self.bindings.remove(pos))
    }

    /// Stream handles in current scan order, front first.
    pub fn scan_order(&self) -> impl Iterator<Item = StreamHandle> + '_ {
        self.bindings.iter().map(|b| b.stream)
    }
}

impl<R> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}
