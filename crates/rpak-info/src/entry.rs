//! Archive directory entries and category tags.

use crate::address::PagePtr;
use crate::info::AssetType;

/// Build a category tag from its four ASCII characters.
const fn tag(fourcc: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*fourcc)
}

/// Category of an archive entry, decoded from its four-character tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// `mdl_`
    Model,
    /// `arig`
    AnimationRig,
    /// `aseq`
    RawAnimation,
    /// `matl`
    Material,
    /// `txtr`
    Texture,
    /// `uiia`
    UiImage,
    /// `dtbl`
    DataTable,
    /// `subt`
    Subtitles,
    /// `shds`
    ShaderSet,
    /// Any tag without a builder.
    Other(u32),
}

impl AssetKind {
    pub const MODEL_TAG: u32 = tag(b"mdl_");
    pub const ANIMATION_RIG_TAG: u32 = tag(b"arig");
    pub const RAW_ANIMATION_TAG: u32 = tag(b"aseq");
    pub const MATERIAL_TAG: u32 = tag(b"matl");
    pub const TEXTURE_TAG: u32 = tag(b"txtr");
    pub const UI_IMAGE_TAG: u32 = tag(b"uiia");
    pub const DATA_TABLE_TAG: u32 = tag(b"dtbl");
    pub const SUBTITLES_TAG: u32 = tag(b"subt");
    pub const SHADER_SET_TAG: u32 = tag(b"shds");

    /// Decode a little-endian category tag.
    pub const fn from_tag(value: u32) -> Self {
        match value {
            Self::MODEL_TAG => Self::Model,
            Self::ANIMATION_RIG_TAG => Self::AnimationRig,
            Self::RAW_ANIMATION_TAG => Self::RawAnimation,
            Self::MATERIAL_TAG => Self::Material,
            Self::TEXTURE_TAG => Self::Texture,
            Self::UI_IMAGE_TAG => Self::UiImage,
            Self::DATA_TABLE_TAG => Self::DataTable,
            Self::SUBTITLES_TAG => Self::Subtitles,
            Self::SHADER_SET_TAG => Self::ShaderSet,
            other => Self::Other(other),
        }
    }

    /// Decode a tag from its four-character spelling, e.g. `"mdl_"`.
    pub fn from_fourcc(fourcc: &str) -> Option<Self> {
        let bytes: [u8; 4] = fourcc.as_bytes().try_into().ok()?;
        Some(Self::from_tag(tag(&bytes)))
    }

    /// The raw little-endian tag.
    pub const fn tag(self) -> u32 {
        match self {
            Self::Model => Self::MODEL_TAG,
            Self::AnimationRig => Self::ANIMATION_RIG_TAG,
            Self::RawAnimation => Self::RAW_ANIMATION_TAG,
            Self::Material => Self::MATERIAL_TAG,
            Self::Texture => Self::TEXTURE_TAG,
            Self::UiImage => Self::UI_IMAGE_TAG,
            Self::DataTable => Self::DATA_TABLE_TAG,
            Self::Subtitles => Self::SUBTITLES_TAG,
            Self::ShaderSet => Self::SHADER_SET_TAG,
            Self::Other(value) => value,
        }
    }

    /// Display category for records of this kind.
    pub const fn asset_type(self) -> AssetType {
        match self {
            Self::Model => AssetType::Model,
            Self::AnimationRig | Self::RawAnimation => AssetType::AnimationSet,
            Self::Material => AssetType::Material,
            Self::Texture => AssetType::Image,
            Self::UiImage => AssetType::UiImage,
            Self::DataTable => AssetType::DataTable,
            Self::Subtitles => AssetType::Subtitles,
            Self::ShaderSet => AssetType::ShaderSet,
            Self::Other(_) => AssetType::Unknown,
        }
    }

    /// Prefix used for identifiers synthesized from the name hash.
    pub const fn name_prefix(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::AnimationRig => "animrig",
            Self::RawAnimation => "anim",
            Self::Material => "material",
            Self::Texture => "texture",
            Self::UiImage => "uiimage",
            Self::DataTable => "datatable",
            Self::Subtitles => "subtitles",
            Self::ShaderSet => "shaderset",
            Self::Other(_) => "asset",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.tag().to_le_bytes();
        if bytes.iter().all(|b| b.is_ascii_graphic()) {
            // all printable ASCII, so each byte is a char
            for b in bytes {
                write!(f, "{}", b as char)?;
            }
            Ok(())
        } else {
            write!(f, "{:#010x}", self.tag())
        }
    }
}

/// Game generation an archive was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameVersion {
    /// Titanfall 2 tech test archives (RPak version 6).
    Titanfall2TechTest,
    /// Titanfall 2 archives (RPak version 7).
    Titanfall2,
    /// Apex Legends archives (RPak version 8).
    Apex,
}

impl GameVersion {
    /// Map an RPak file version to its game.
    pub const fn from_rpak_version(version: u16) -> Option<Self> {
        match version {
            6 => Some(Self::Titanfall2TechTest),
            7 => Some(Self::Titanfall2),
            8 => Some(Self::Apex),
            _ => None,
        }
    }
}

/// One record from an archive's asset directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetEntry {
    /// 64-bit hash of the asset name.
    pub name_hash: u64,
    /// Declared category.
    pub kind: AssetKind,
    /// Asset format version.
    pub version: u32,
    /// Virtual address of the asset header.
    pub header: PagePtr,
    /// Declared header size in bytes.
    pub header_size: u32,
    /// Index of the owning archive in the archive context.
    pub archive: usize,
    /// Game the owning archive was built for.
    pub game: GameVersion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        assert_eq!(AssetKind::MODEL_TAG, 0x5F6C_646D);
        assert_eq!(AssetKind::from_tag(0x5F6C_646D), AssetKind::Model);
        assert_eq!(AssetKind::from_fourcc("txtr"), Some(AssetKind::Texture));
        assert_eq!(AssetKind::from_fourcc("shds"), Some(AssetKind::ShaderSet));
        assert_eq!(AssetKind::from_fourcc("toolong"), None);
    }

    #[test]
    fn test_unknown_tag() {
        let kind = AssetKind::from_fourcc("rson").unwrap();
        assert_eq!(kind, AssetKind::Other(u32::from_le_bytes(*b"rson")));
        assert_eq!(kind.asset_type(), AssetType::Unknown);
        assert_eq!(kind.to_string(), "rson");
    }

    #[test]
    fn test_display() {
        assert_eq!(AssetKind::Model.to_string(), "mdl_");
        assert_eq!(AssetKind::Other(1).to_string(), "0x00000001");
    }

    #[test]
    fn test_animation_kinds_share_display_type() {
        assert_eq!(AssetKind::AnimationRig.asset_type(), AssetType::AnimationSet);
        assert_eq!(AssetKind::RawAnimation.asset_type(), AssetType::AnimationSet);
        assert_eq!(AssetKind::Texture.asset_type(), AssetType::Image);
    }

    #[test]
    fn test_game_version() {
        assert_eq!(GameVersion::from_rpak_version(8), Some(GameVersion::Apex));
        assert_eq!(GameVersion::from_rpak_version(7), Some(GameVersion::Titanfall2));
        assert_eq!(
            GameVersion::from_rpak_version(6),
            Some(GameVersion::Titanfall2TechTest)
        );
        assert_eq!(GameVersion::from_rpak_version(9), None);
    }
}
