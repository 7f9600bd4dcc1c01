use crate::context::ArchiveContext;
use crate::entry::AssetEntry;
use crate::info::AssetInfo;
use crate::Result;

use super::{fallback_name, BuildContext};

/// Identifier only: the shader set header layout is not read.
pub(super) fn build<C: ArchiveContext>(
    _cx: &BuildContext<'_, C>,
    entry: &AssetEntry,
) -> Result<AssetInfo> {
    Ok(AssetInfo::loaded(fallback_name(entry), entry.kind.asset_type()).with_info("N/A"))
}
