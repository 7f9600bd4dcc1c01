use crate::context::ArchiveContext;
use crate::entry::AssetEntry;
use crate::info::AssetInfo;
use crate::Result;

use super::{fallback_name, BuildContext};

/// Named through the external hash table; no header read.
pub(super) fn build<C: ArchiveContext>(
    cx: &BuildContext<'_, C>,
    entry: &AssetEntry,
) -> Result<AssetInfo> {
    let name = cx
        .names()
        .lookup(entry.name_hash)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| fallback_name(entry));

    Ok(AssetInfo::loaded(name, entry.kind.asset_type()).with_info("N/A"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::fixture::{entry, ArchiveBuilder, HASH};
    use crate::{AssetKind, AssetType, BuildContext, NoNames};

    #[test]
    fn test_subtitles_from_lookup() {
        let archives = ArchiveBuilder::new().archives();
        let names = HashMap::from([(HASH, "subtitles_english".to_string())]);
        let cx = BuildContext::new(&archives, &names);

        let info = cx.build(&entry(AssetKind::Subtitles, 0, 0)).unwrap();

        assert_eq!(info.name, "subtitles_english");
        assert_eq!(info.asset_type, AssetType::Subtitles);
        assert_eq!(info.info.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_subtitles_without_lookup_entry() {
        let archives = ArchiveBuilder::new().archives();
        let cx = BuildContext::new(&archives, &NoNames);

        let info = cx.build(&entry(AssetKind::Subtitles, 0, 0)).unwrap();

        assert_eq!(info.name, format!("subtitles_0x{HASH:x}"));
    }
}
