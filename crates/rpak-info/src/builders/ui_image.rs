use crate::context::{ArchiveContext, EntryReader};
use crate::entry::AssetEntry;
use crate::info::AssetInfo;
use crate::structs::UiImageHeader;
use crate::Result;

use super::{fallback_name, BuildContext};

/// `Width: W Height: H`, with the compression mode as debug info.
pub(super) fn build<C: ArchiveContext>(
    cx: &BuildContext<'_, C>,
    entry: &AssetEntry,
) -> Result<AssetInfo> {
    let mut reader = EntryReader::open(cx.archives(), entry)?;
    let header: UiImageHeader = reader.read_at(entry.header)?;

    let (width, height) = (header.width, header.height);
    let mode = format!(
        "Mode: {} ({})",
        header.compression().label(),
        header.compression_type()
    );

    Ok(AssetInfo::loaded(fallback_name(entry), entry.kind.asset_type())
        .with_info(format!("Width: {width} Height: {height}"))
        .with_debug_info(mode))
}
