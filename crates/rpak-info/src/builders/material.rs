use crate::context::{ArchiveContext, EntryReader};
use crate::entry::AssetEntry;
use crate::info::AssetInfo;
use crate::structs::MaterialHeader;
use crate::Result;

use super::{stored_name, BuildContext};

/// `Textures: N`
pub(super) fn build<C: ArchiveContext>(
    cx: &BuildContext<'_, C>,
    entry: &AssetEntry,
) -> Result<AssetInfo> {
    let mut reader = EntryReader::open(cx.archives(), entry)?;
    let header: MaterialHeader = reader.read_at(entry.header)?;

    let name = stored_name(&mut reader, header.name)?;
    let textures = header.texture_count(entry.game);

    Ok(AssetInfo::loaded(name, entry.kind.asset_type()).with_info(format!("Textures: {textures}")))
}

#[cfg(test)]
mod tests {
    use crate::fixture::{entry, ArchiveBuilder, PageWriter};
    use crate::structs::MaterialHeader;
    use crate::{AssetKind, AssetType, GameVersion, PagePtr};

    fn material_page() -> Vec<u8> {
        let mut page = PageWriter::new();
        page.put(&MaterialHeader {
            reserved0: [0; 0x10],
            guid: 0xABCD,
            name: PagePtr::new(0, 0x80),
            surface: PagePtr::NULL,
            reserved1: [0; 0x18],
            tf_textures: PagePtr::new(0, 0x100),
            tf_secondary: PagePtr::new(0, 0x128),
            reserved2: [0; 0x10],
            textures: PagePtr::new(0, 16),
            secondary: PagePtr::new(0, 40),
            reserved3: [0; 0x10],
        });
        page.put_cstring("material/Models/Weapons/R97/R97_Sight.rpak");
        page.into_bytes()
    }

    fn build(game: GameVersion) -> crate::AssetInfo {
        let mut builder = ArchiveBuilder::new();
        builder.add_page(material_page());

        let mut entry = entry(AssetKind::Material, 12, 0x80);
        entry.game = game;
        builder.build(&entry).unwrap()
    }

    #[test]
    fn test_apex_material() {
        let info = build(GameVersion::Apex);

        assert_eq!(info.name, "r97_sight");
        assert_eq!(info.asset_type, AssetType::Material);
        assert_eq!(info.info.as_deref(), Some("Textures: 3"));
    }

    #[test]
    fn test_titanfall_materials_share_pair() {
        assert_eq!(
            build(GameVersion::Titanfall2).info.as_deref(),
            Some("Textures: 5")
        );
        assert_eq!(
            build(GameVersion::Titanfall2TechTest).info.as_deref(),
            Some("Textures: 5")
        );
    }
}
