//! Stream-handle registry and adapter for read-only asset containers.
//!
//! Code written against a buffered-stream API (open/read/seek/tell/close)
//! can transparently access resources packaged inside an application
//! bundle's asset container instead of the regular file system. Callers
//! obtain an opaque [`StreamHandle`] and use the same handful of
//! operations they would use for any file; internally every operation is
//! routed to an archive-resource provider while a per-stream cursor is
//! kept in sync.
//!
//! The crate is built around two collaborators, both dependency-injected:
//!
//! - an [`AssetSource`](source::AssetSource) supplies read-only resources
//!   by relative path (the container side),
//! - a [`StreamFactory`](factory::StreamFactory) mints the opaque stream
//!   handles callers hold (the host-runtime side).
//!
//! [`AssetStreams`] owns the registry of open bindings and dispatches the
//! stream operations. [`SharedStreams`](shared::SharedStreams) is the same
//! adapter behind a mutex for callers that must share it across threads.
//!
//! # Example
//!
//! ```rust
//! use satchel_stream::{AssetStreams, HandleMint, OpenMode};
//! use satchel_stream::test_utils::MemorySource;
//!
//! let mut source = MemorySource::new();
//! source.insert("images/logo.png", vec![0u8; 64]);
//!
//! let mut streams = AssetStreams::new(source, HandleMint::new());
//! let handle = streams.open("images/logo.png", OpenMode::Read)?;
//!
//! let mut buf = [0u8; 16];
//! assert_eq!(streams.read(handle, &mut buf), 16);
//! assert_eq!(streams.tell(handle), 16);
//! streams.close(handle)?;
//! # Ok::<(), satchel_stream::StreamError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]

use thiserror::Error;

// Opaque handle types crossing the two boundaries
pub mod handle;

// Archive-resource provider boundary
pub mod source;

// Host-runtime stream factory boundary
pub mod factory;

// Open-mode parsing and classification
pub mod mode;

// Handle registry (bindings, move-to-front lookup)
pub mod registry;

// Stream adapter (the caller-facing operations)
pub mod stream;

// std::io view over an open stream
pub mod io;

// Mutex-guarded wrapper for cross-thread use
pub mod shared;

// In-memory provider for tests and examples
pub mod test_utils;

pub use factory::{HandleMint, StreamFactory};
pub use handle::{ResourceId, StreamHandle};
pub use io::StreamReader;
pub use mode::OpenMode;
pub use registry::{Binding, Registry};
pub use shared::SharedStreams;
pub use source::{AssetResource, AssetSource};
pub use stream::{AssetStreams, STREAM_EOF};

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;

/// Errors that can occur during stream operations.
///
/// Lookup misses on `read` and `tell` are deliberately not errors; those
/// operations report the permissive sentinels of the underlying stream
/// API (zero bytes transferred, [`STREAM_EOF`]) instead.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The requested open mode asks for write access; the container is
    /// read-only.
    #[error("write access requested on a read-only asset container")]
    WriteAccess,

    /// The mode string could not be parsed.
    #[error("unrecognized open mode: {0:?}")]
    InvalidMode(String),

    /// No resource exists at the given path in the container.
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The host runtime declined to mint a stream handle, or minted one
    /// that is already registered.
    #[error("stream handle could not be created")]
    StreamCreation,

    /// No open binding exists for the given stream handle.
    #[error("no open stream for handle {0}")]
    UnknownStream(StreamHandle),

    /// No open binding exists for the given resource id.
    #[error("no open stream for resource {0}")]
    UnknownResource(ResourceId),

    /// The provider could not report a total size for the resource.
    #[error("resource does not report a size")]
    Unsized,
}
