use crate::context::{ArchiveContext, EntryReader};
use crate::entry::AssetEntry;
use crate::info::AssetInfo;
use crate::structs::{ModelLayout, SkeletonHeader};
use crate::Result;

use super::{stored_name, BuildContext};

/// `Bones: B, Meshes: M[, Animations: A]`
pub(super) fn build<C: ArchiveContext>(
    cx: &BuildContext<'_, C>,
    entry: &AssetEntry,
) -> Result<AssetInfo> {
    let layout = ModelLayout::select(entry.version, entry.header_size)?;

    let mut reader = EntryReader::open(cx.archives(), entry)?;
    reader.seek_header()?;
    let bytes = reader.read_bytes(layout.read_len(entry.header_size))?;
    let header = layout.decode(&bytes, entry.header_size)?;

    let name = stored_name(&mut reader, header.name)?;
    let skeleton: SkeletonHeader = reader.read_at(header.skeleton)?;

    let mut info = format!(
        "Bones: {}, Meshes: {}",
        skeleton.bone_count(),
        skeleton.body_part_count()
    );
    if header.anim_sequence_count > 0 {
        info.push_str(&format!(", Animations: {}", header.anim_sequence_count));
    }

    Ok(AssetInfo::loaded(name, entry.kind.asset_type()).with_info(info))
}
