use crate::context::{ArchiveContext, EntryReader};
use crate::entry::AssetEntry;
use crate::info::AssetInfo;
use crate::structs::DataTableHeader;
use crate::Result;

use super::{fallback_name, BuildContext};

/// `Columns: C Rows: R`
pub(super) fn build<C: ArchiveContext>(
    cx: &BuildContext<'_, C>,
    entry: &AssetEntry,
) -> Result<AssetInfo> {
    let mut reader = EntryReader::open(cx.archives(), entry)?;
    let header: DataTableHeader = reader.read_at(entry.header)?;

    let (columns, rows) = (header.column_count, header.row_count);

    Ok(AssetInfo::loaded(fallback_name(entry), entry.kind.asset_type())
        .with_info(format!("Columns: {columns} Rows: {rows}")))
}
