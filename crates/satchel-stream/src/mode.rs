//! Open-mode classification.
//!
//! The container is read-only, so the only mode that reaches the provider
//! is [`OpenMode::Read`]. The other variants exist so mode strings from
//! stdio-style call sites parse into something the adapter can reject
//! with a precise error.

use std::str::FromStr;

use crate::StreamError;

/// Requested access mode for [`open`](crate::AssetStreams::open).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read-only access.
    Read,
    /// Read and write access (`"r+"` family).
    ReadWrite,
    /// Write/truncate access (`"w"` family).
    Write,
    /// Append access (`"a"` family).
    Append,
}

impl OpenMode {
    /// Check if this mode requests any form of write access.
    pub const fn writes(self) -> bool {
        !matches!(self, Self::Read)
    }
}

impl FromStr for OpenMode {
    type Err = StreamError;

    /// Parse a stdio-style mode string.
    ///
    /// The `b` binary qualifier is accepted anywhere stdio accepts it and
    /// changes nothing; container resources are always binary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" | "rb" => Ok(Self::Read),
            "r+" | "rb+" | "r+b" => Ok(Self::ReadWrite),
            "w" | "wb" | "w+" | "wb+" | "w+b" => Ok(Self::Write),
            "a" | "ab" | "a+" | "ab+" | "a+b" => Ok(Self::Append),
            other => Err(StreamError::InvalidMode(other.to_string())),
        }
    }
}
