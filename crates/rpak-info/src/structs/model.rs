//! Model (`mdl_`) headers and the version shim that normalizes them.
//!
//! Three on-disk layouts exist. The declared header size picks between the
//! compact family (up to [`COMPACT_HEADER_LIMIT`] bytes) and the extended
//! layout; within the compact family the asset version picks between the
//! legacy and the current layout. Whatever the source, decoding produces a
//! [`ModelHeader`] in which every field the layout does not carry is zero.

use rpak_common::BinaryReader;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::address::PagePtr;
use crate::{Error, Result};

/// Largest declared size still decoded with a compact layout.
pub const COMPACT_HEADER_LIMIT: u32 = 0x68;

/// Newest asset version that still uses the legacy compact layout.
pub const LEGACY_VERSION_CUTOFF: u32 = 8;

/// Legacy compact model header (asset version 8 and older).
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct ModelHeaderV8 {
    pub skeleton: PagePtr,
    pub reserved0: u64,
    pub name: PagePtr,
    pub reserved1: u64,
    pub physics: PagePtr,
    pub reserved2: [u8; 0x28],
}

/// Current compact model header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct ModelHeaderV9 {
    pub skeleton: PagePtr,
    pub reserved0: u64,
    pub name: PagePtr,
    pub reserved1: u64,
    pub physics: PagePtr,
    pub reserved2: u64,
    pub data_flags: u32,
    pub data_size: u32,
    pub reserved3: [u8; 0x20],
    pub anim_sequence_count: u32,
    pub anim_sequences: PagePtr,
    pub reserved4: u32,
}

/// Extended model header, used when the declared size exceeds the compact limit.
///
/// Everything between `physics` and `anim_sequence_count` is format specific
/// and is never decoded.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct ModelHeaderExt {
    pub skeleton: PagePtr,
    pub reserved0: u64,
    pub name: PagePtr,
    pub reserved1: u64,
    pub physics: PagePtr,
    pub reserved2: u64,
    pub reserved_region: [u8; 0x3C],
    pub anim_sequence_count: u32,
    pub anim_sequences: PagePtr,
    pub reserved4: u64,
}

const _: () = assert!(std::mem::size_of::<ModelHeaderV8>() == 0x50);
const _: () = assert!(std::mem::size_of::<ModelHeaderV9>() == 0x68);
const _: () = assert!(std::mem::size_of::<ModelHeaderExt>() == 0x80);

/// Version independent model header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelHeader {
    pub skeleton: PagePtr,
    pub name: PagePtr,
    pub physics: PagePtr,
    pub data_flags: u32,
    pub data_size: u32,
    pub anim_sequence_count: u32,
    pub anim_sequences: PagePtr,
}

impl From<ModelHeaderV8> for ModelHeader {
    fn from(header: ModelHeaderV8) -> Self {
        Self {
            skeleton: header.skeleton,
            name: header.name,
            ..Self::default()
        }
    }
}

impl From<ModelHeaderV9> for ModelHeader {
    fn from(header: ModelHeaderV9) -> Self {
        Self {
            skeleton: header.skeleton,
            name: header.name,
            physics: header.physics,
            data_flags: header.data_flags,
            data_size: header.data_size,
            anim_sequence_count: header.anim_sequence_count,
            anim_sequences: header.anim_sequences,
        }
    }
}

impl From<ModelHeaderExt> for ModelHeader {
    fn from(header: ModelHeaderExt) -> Self {
        Self {
            skeleton: header.skeleton,
            name: header.name,
            physics: header.physics,
            anim_sequence_count: header.anim_sequence_count,
            anim_sequences: header.anim_sequences,
            ..Self::default()
        }
    }
}

/// On-disk model header layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelLayout {
    /// [`ModelHeaderV8`]
    Legacy,
    /// [`ModelHeaderV9`]
    Compact,
    /// [`ModelHeaderExt`]
    Extended,
}

impl ModelLayout {
    /// Pick the layout for a declared asset version and header size.
    ///
    /// Fails when the declared header ends before the last field the layout maps.
    pub fn select(version: u32, size: u32) -> Result<Self> {
        let layout = if size > COMPACT_HEADER_LIMIT {
            Self::Extended
        } else if version > LEGACY_VERSION_CUTOFF {
            Self::Compact
        } else {
            Self::Legacy
        };

        if (size as usize) < layout.mapped_len() {
            return Err(Error::UnsupportedLayout { version, size });
        }

        tracing::trace!(version, size, ?layout, "selected model header layout");
        Ok(layout)
    }

    /// Number of header bytes the layout occupies.
    pub const fn size(self) -> usize {
        match self {
            Self::Legacy => std::mem::size_of::<ModelHeaderV8>(),
            Self::Compact => std::mem::size_of::<ModelHeaderV9>(),
            Self::Extended => std::mem::size_of::<ModelHeaderExt>(),
        }
    }

    /// End of the last field carried into [`ModelHeader`].
    pub const fn mapped_len(self) -> usize {
        match self {
            // name
            Self::Legacy => 0x18,
            // anim_sequences
            Self::Compact => 0x64,
            Self::Extended => 0x78,
        }
    }

    /// Header bytes to read for a declared size: never past the declared end.
    #[inline]
    pub fn read_len(self, size: u32) -> usize {
        (size as usize).min(self.size())
    }

    /// Decode a header declared as `size` bytes long.
    ///
    /// Only the first [`read_len`](Self::read_len) bytes are used; the rest of
    /// the layout reads as zero.
    pub fn decode(self, bytes: &[u8], size: u32) -> Result<ModelHeader> {
        let declared = BinaryReader::new(bytes).read_bytes(self.read_len(size))?;
        let mut padded = vec![0u8; self.size()];
        padded[..declared.len()].copy_from_slice(declared);

        let mut reader = BinaryReader::new(&padded);
        Ok(match self {
            Self::Legacy => reader.read_struct::<ModelHeaderV8>()?.into(),
            Self::Compact => reader.read_struct::<ModelHeaderV9>()?.into(),
            Self::Extended => reader.read_struct::<ModelHeaderExt>()?.into(),
        })
    }
}

impl ModelHeader {
    /// Decode raw header bytes given the entry's declared version and size.
    pub fn decode(bytes: &[u8], version: u32, size: u32) -> Result<Self> {
        ModelLayout::select(version, size)?.decode(bytes, size)
    }
}
