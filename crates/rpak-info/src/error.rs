//! Error types for asset info building.

use thiserror::Error;

use crate::entry::AssetKind;

/// Errors that can occur while building asset info for a single entry.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] rpak_common::Error),

    /// A virtual address points outside the mapped pages.
    #[error("virtual address {index}:{offset:#x} is outside the mapped pages")]
    AddressOutOfRange { index: u32, offset: u32 },

    /// The entry belongs to an archive that is not mapped in the context.
    #[error("archive {0} is not mapped")]
    ArchiveNotMapped(usize),

    /// The declared header version/size pair has no known layout.
    #[error("unsupported header layout: version {version}, size {size:#x}")]
    UnsupportedLayout { version: u32, size: u32 },

    /// A stored string is unterminated, too long, or not UTF-8.
    #[error("malformed string at position {position:#x}")]
    MalformedString { position: u64 },

    /// No builder exists for this category tag.
    #[error("unsupported asset kind: {0}")]
    UnsupportedKind(AssetKind),
}

/// Result type for asset info operations.
pub type Result<T> = std::result::Result<T, Error>;
