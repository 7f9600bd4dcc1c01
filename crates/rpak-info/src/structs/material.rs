//! Material (`matl`) header.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::address::PagePtr;
use crate::entry::GameVersion;

/// Size of one texture table slot.
const TEXTURE_SLOT_SIZE: u32 = 8;

/// Material header.
///
/// Titanfall 2 archives keep the texture tables at `0x40`, Apex archives at `0x60`.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct MaterialHeader {
    pub reserved0: [u8; 0x10],
    pub guid: u64,
    pub name: PagePtr,
    pub surface: PagePtr,
    pub reserved1: [u8; 0x18],
    pub tf_textures: PagePtr,
    pub tf_secondary: PagePtr,
    pub reserved2: [u8; 0x10],
    pub textures: PagePtr,
    pub secondary: PagePtr,
    pub reserved3: [u8; 0x10],
}

const _: () = assert!(std::mem::size_of::<MaterialHeader>() == 0x80);

impl MaterialHeader {
    /// The (texture table, secondary table) pair used by `game`.
    ///
    /// The Titanfall 2 tech test pair is assumed to match retail Titanfall 2;
    /// this is provisional and unverified against tech test archives.
    pub fn texture_tables(&self, game: GameVersion) -> (PagePtr, PagePtr) {
        match game {
            GameVersion::Apex => (self.textures, self.secondary),
            GameVersion::Titanfall2 | GameVersion::Titanfall2TechTest => {
                (self.tf_textures, self.tf_secondary)
            }
        }
    }

    /// Number of texture slots, from the distance between the two tables.
    ///
    /// A secondary table placed before the texture table counts as zero slots.
    pub fn texture_count(&self, game: GameVersion) -> u32 {
        let (textures, secondary) = self.texture_tables(game);
        secondary.offset.saturating_sub(textures.offset) / TEXTURE_SLOT_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> MaterialHeader {
        MaterialHeader {
            reserved0: [0; 0x10],
            guid: 0x1234,
            name: PagePtr::new(1, 0),
            surface: PagePtr::NULL,
            reserved1: [0; 0x18],
            tf_textures: PagePtr::new(2, 0x100),
            tf_secondary: PagePtr::new(2, 0x120),
            reserved2: [0; 0x10],
            textures: PagePtr::new(2, 16),
            secondary: PagePtr::new(2, 40),
            reserved3: [0; 0x10],
        }
    }

    #[test]
    fn test_apex_pair() {
        assert_eq!(header().texture_count(GameVersion::Apex), 3);
    }

    #[test]
    fn test_titanfall_pair_is_shared() {
        let header = header();
        assert_eq!(header.texture_count(GameVersion::Titanfall2), 4);
        assert_eq!(header.texture_count(GameVersion::Titanfall2TechTest), 4);
    }

    #[test]
    fn test_inverted_tables_count_zero() {
        let mut header = header();
        header.secondary = PagePtr::new(2, 8);
        assert_eq!(header.texture_count(GameVersion::Apex), 0);
    }
}
