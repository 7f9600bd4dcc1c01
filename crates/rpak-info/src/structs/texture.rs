//! Texture (`txtr`) and UI image atlas (`uiia`) headers.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::address::PagePtr;

/// Texture header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct TextureHeader {
    pub guid: u64,
    /// Optional; null when the archive strips texture names.
    pub name: PagePtr,
    pub width: u16,
    pub height: u16,
    pub unknown: u16,
    pub format: u16,
    pub data_size: u32,
    pub reserved0: u8,
    pub array_size: u8,
    pub layer_count: u8,
    pub reserved1: u8,
    pub permanent_mip_count: u8,
    pub streamed_mip_count: u8,
    pub opt_streamed_mip_count: u8,
    pub reserved2: [u8; 5],
}

/// UI image header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct UiImageHeader {
    pub reserved0: u64,
    pub hash: u64,
    pub reserved1: u64,
    pub width: u16,
    pub height: u16,
    pub width_ratio: f32,
    pub height_ratio: f32,
    /// Bits 0-3: compression type.
    pub flags: u16,
    pub reserved2: u16,
}

const _: () = assert!(std::mem::size_of::<TextureHeader>() == 0x28);
const _: () = assert!(std::mem::size_of::<UiImageHeader>() == 0x28);

impl UiImageHeader {
    /// Raw compression type field.
    #[inline]
    pub fn compression_type(&self) -> u8 {
        (self.flags & 0x0F) as u8
    }

    /// Decoded compression mode.
    #[inline]
    pub fn compression(&self) -> UiImageCompression {
        UiImageCompression::from(self.compression_type())
    }
}

/// Compression mode of a UI image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiImageCompression {
    None,
    Default,
    Snowflake,
    Unknown(u8),
}

impl From<u8> for UiImageCompression {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Default,
            2 => Self::Snowflake,
            other => Self::Unknown(other),
        }
    }
}

impl UiImageCompression {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Default => "DEFAULT",
            Self::Snowflake => "SNOWFLAKE",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}
