//! Output records produced for each asset.

/// Display category of an asset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssetType {
    Model,
    AnimationSet,
    Image,
    UiImage,
    Material,
    DataTable,
    Subtitles,
    ShaderSet,
    /// Category tag without a builder; only used for failure records.
    Unknown,
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Model => "Model",
            Self::AnimationSet => "AnimationSet",
            Self::Image => "Image",
            Self::UiImage => "UIImage",
            Self::Material => "Material",
            Self::DataTable => "DataTable",
            Self::Subtitles => "Subtitles",
            Self::ShaderSet => "ShaderSet",
            Self::Unknown => "Unknown",
        })
    }
}

/// Load status of an asset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssetStatus {
    /// The record was built from the archive.
    Loaded,
    /// The record stands in for an entry whose build failed.
    Error,
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Loaded => "Loaded",
            Self::Error => "Error",
        })
    }
}

/// Identity and summary of one asset, as shown by a listing tool.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetInfo {
    pub name: String,
    pub asset_type: AssetType,
    pub status: AssetStatus,
    /// One-line human readable summary.
    pub info: Option<String>,
    /// Extra diagnostic detail.
    pub debug_info: Option<String>,
}

impl AssetInfo {
    /// A loaded record with no summary.
    pub fn loaded(name: String, asset_type: AssetType) -> Self {
        Self {
            name,
            asset_type,
            status: AssetStatus::Loaded,
            info: None,
            debug_info: None,
        }
    }

    /// Set the summary line.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Set the diagnostic detail.
    pub fn with_debug_info(mut self, debug_info: impl Into<String>) -> Self {
        self.debug_info = Some(debug_info.into());
        self
    }
}
