use crate::context::{ArchiveContext, EntryReader};
use crate::entry::AssetEntry;
use crate::info::AssetInfo;
use crate::structs::TextureHeader;
use crate::Result;

use super::{fallback_name, stored_name, BuildContext};

/// `Width: W Height: H`
pub(super) fn build<C: ArchiveContext>(
    cx: &BuildContext<'_, C>,
    entry: &AssetEntry,
) -> Result<AssetInfo> {
    let mut reader = EntryReader::open(cx.archives(), entry)?;
    let header: TextureHeader = reader.read_at(entry.header)?;

    // stripped archives leave the name pointer null
    let name_ptr = header.name;
    let name = if name_ptr.is_null() {
        fallback_name(entry)
    } else {
        stored_name(&mut reader, name_ptr)?
    };

    let (width, height) = (header.width, header.height);
    let info = format!("Width: {width} Height: {height}");

    Ok(AssetInfo::loaded(name, entry.kind.asset_type()).with_info(info))
}

#[cfg(test)]
mod tests {
    use crate::fixture::{ArchiveBuilder, PageWriter, HASH};
    use crate::structs::TextureHeader;
    use crate::{AssetKind, AssetType, PagePtr};

    fn texture(name: PagePtr) -> TextureHeader {
        TextureHeader {
            guid: HASH,
            name,
            width: 2048,
            height: 1024,
            unknown: 0,
            format: 0x13,
            data_size: 0x20_0000,
            reserved0: 0,
            array_size: 1,
            layer_count: 0,
            reserved1: 0,
            permanent_mip_count: 4,
            streamed_mip_count: 7,
            opt_streamed_mip_count: 0,
            reserved2: [0; 5],
        }
    }

    #[test]
    fn test_unnamed_texture() {
        let mut page = PageWriter::new();
        page.put(&texture(PagePtr::NULL));

        let mut builder = ArchiveBuilder::new();
        builder.add_page(page.into_bytes());
        let info = builder.build_entry(AssetKind::Texture, 8, 0x28).unwrap();

        assert_eq!(info.name, format!("texture_0x{HASH:x}"));
        assert_eq!(info.asset_type, AssetType::Image);
        assert_eq!(info.info.as_deref(), Some("Width: 2048 Height: 1024"));
    }

    #[test]
    fn test_named_texture() {
        let mut header = PageWriter::new();
        header.put(&texture(PagePtr::new(1, 0)));
        let mut names = PageWriter::new();
        names.put_cstring("texture/Models/Weapons/R97/R97_Col.dds");

        let mut builder = ArchiveBuilder::new();
        builder.add_page(header.into_bytes());
        builder.add_page(names.into_bytes());
        let info = builder.build_entry(AssetKind::Texture, 8, 0x28).unwrap();

        assert_eq!(info.name, "r97_col");
        assert_eq!(info.info.as_deref(), Some("Width: 2048 Height: 1024"));
    }

    #[test]
    fn test_name_in_page_zero_with_offset() {
        // only a fully zero pointer counts as absent
        let mut page = PageWriter::new();
        page.put(&texture(PagePtr::new(0, 0x28)));
        page.put_cstring("Sky.dds");

        let mut builder = ArchiveBuilder::new();
        builder.add_page(page.into_bytes());
        let info = builder.build_entry(AssetKind::Texture, 8, 0x28).unwrap();

        assert_eq!(info.name, "sky");
    }
}
