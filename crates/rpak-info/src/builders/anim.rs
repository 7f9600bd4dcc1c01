use crate::context::{ArchiveContext, EntryReader};
use crate::entry::AssetEntry;
use crate::info::AssetInfo;
use crate::structs::{AnimRigHeader, AnimSeqHeader, SkeletonHeader};
use crate::Result;

use super::{stored_name, BuildContext};

/// `Animations: A, Bones: B`
pub(super) fn build_rig<C: ArchiveContext>(
    cx: &BuildContext<'_, C>,
    entry: &AssetEntry,
) -> Result<AssetInfo> {
    let mut reader = EntryReader::open(cx.archives(), entry)?;
    let rig: AnimRigHeader = reader.read_at(entry.header)?;

    let name = stored_name(&mut reader, rig.name)?;
    let skeleton: SkeletonHeader = reader.read_at(rig.skeleton)?;

    let animations = rig.animation_reference_count;
    let info = format!("Animations: {}, Bones: {}", animations, skeleton.bone_count());

    Ok(AssetInfo::loaded(name, entry.kind.asset_type()).with_info(info))
}

/// Name only.
pub(super) fn build_sequence<C: ArchiveContext>(
    cx: &BuildContext<'_, C>,
    entry: &AssetEntry,
) -> Result<AssetInfo> {
    let mut reader = EntryReader::open(cx.archives(), entry)?;
    let sequence: AnimSeqHeader = reader.read_at(entry.header)?;

    let name = stored_name(&mut reader, sequence.name)?;

    Ok(AssetInfo::loaded(name, entry.kind.asset_type()))
}
