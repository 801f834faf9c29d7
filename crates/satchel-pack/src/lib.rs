//! Asset pack container and filesystem sources for satchel streams.
//!
//! Two providers for the [`satchel_stream`] adapter:
//!
//! - [`Pack`]: a single-file, read-only asset container. The whole file
//!   is memory-mapped; every opened resource is a span over the shared
//!   map with its own cursor. [`PackBuilder`] writes containers.
//! - [`DirSource`]: a plain directory of loose asset files, for
//!   development trees that have not been packed yet.
//!
//! # Example
//!
//! ```rust,no_run
//! use satchel_pack::{Pack, PackBuilder};
//! use satchel_stream::{AssetStreams, HandleMint, OpenMode};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = PackBuilder::new();
//! builder.add("images/logo.png", std::fs::read("logo.png")?)?;
//! builder.write_path("assets.pack")?;
//!
//! let pack = Pack::open("assets.pack")?;
//! let mut streams = AssetStreams::new(pack, HandleMint::new());
//! let handle = streams.open("images/logo.png", OpenMode::Read)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]

use thiserror::Error;

// Container layout (magic, entry table)
pub mod format;

// Container writer
pub mod builder;

// Container reader + provider implementation
pub mod pack;

// Loose-file directory provider
pub mod dir;

pub use builder::PackBuilder;
pub use dir::DirSource;
pub use format::{PackEntry, PACK_MAGIC};
pub use pack::{Pack, PackResource};

/// Result type for pack operations.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while building or opening packs.
#[derive(Debug, Error)]
pub enum PackError {
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a pack or its entry table is inconsistent.
    #[error("invalid pack format: {0}")]
    InvalidFormat(String),

    /// Two entries were added under the same path.
    #[error("duplicate entry path: {0}")]
    DuplicatePath(String),

    /// An entry path exceeds the length the table can encode.
    #[error("entry path too long ({len} bytes): {path}")]
    PathTooLong {
        /// The offending path.
        path: String,
        /// Its encoded length in bytes.
        len: usize,
    },

    /// The source path for a directory provider is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),
}
