//! Category dispatch and the per-category info builders.
//!
//! Every builder is a plain function from an archive context and an entry to
//! an [`AssetInfo`]. Builders keep no state between calls, so any number of
//! entries can be built at once against the same context.

mod anim;
mod datatable;
mod material;
mod model;
mod shader_set;
mod subtitles;
mod texture;
mod ui_image;

use crate::address::PagePtr;
use crate::context::{ArchiveContext, EntryReader};
use crate::entry::{AssetEntry, AssetKind};
use crate::info::AssetInfo;
use crate::names::{normalize_name, synthesized_name, NameLookup};
use crate::{Error, Result};

/// Signature shared by all builders.
pub type BuildFn<C> = fn(&BuildContext<'_, C>, &AssetEntry) -> Result<AssetInfo>;

/// Select the builder for a category, or `None` for tags handled elsewhere.
pub fn dispatch<C: ArchiveContext>(kind: AssetKind) -> Option<BuildFn<C>> {
    let build: BuildFn<C> = match kind {
        AssetKind::Model => model::build::<C>,
        AssetKind::AnimationRig => anim::build_rig::<C>,
        AssetKind::RawAnimation => anim::build_sequence::<C>,
        AssetKind::Material => material::build::<C>,
        AssetKind::Texture => texture::build::<C>,
        AssetKind::UiImage => ui_image::build::<C>,
        AssetKind::DataTable => datatable::build::<C>,
        AssetKind::Subtitles => subtitles::build::<C>,
        AssetKind::ShaderSet => shader_set::build::<C>,
        AssetKind::Other(_) => return None,
    };
    Some(build)
}

/// Everything a builder may read from: the loaded archives and the external name table.
pub struct BuildContext<'a, C: ArchiveContext> {
    archives: &'a C,
    names: &'a dyn NameLookup,
}

impl<'a, C: ArchiveContext> BuildContext<'a, C> {
    /// Create a build context.
    pub fn new(archives: &'a C, names: &'a dyn NameLookup) -> Self {
        Self { archives, names }
    }

    /// The loaded archives.
    #[inline]
    pub fn archives(&self) -> &'a C {
        self.archives
    }

    /// The external hash to name table.
    #[inline]
    pub fn names(&self) -> &'a dyn NameLookup {
        self.names
    }

    /// Build the info record for one entry.
    pub fn build(&self, entry: &AssetEntry) -> Result<AssetInfo> {
        let build = dispatch::<C>(entry.kind).ok_or(Error::UnsupportedKind(entry.kind))?;
        build(self, entry)
    }
}

/// Read a stored asset path and turn it into a display name.
///
/// Paths that normalize to nothing fall back to the hash-derived identifier.
fn stored_name<C: ArchiveContext>(reader: &mut EntryReader<'_, C>, ptr: PagePtr) -> Result<String> {
    let path = reader.read_string_at(ptr)?;
    let name = normalize_name(&path);
    if name.is_empty() {
        Ok(fallback_name(reader.entry()))
    } else {
        Ok(name)
    }
}

/// Hash-derived identifier for an entry.
fn fallback_name(entry: &AssetEntry) -> String {
    synthesized_name(entry.kind.name_prefix(), entry.name_hash)
}
