//! In-memory archives for builder tests.

use zerocopy::{FromZeros, Immutable, IntoBytes};

use crate::address::{PagePtr, PageTable};
use crate::builders::BuildContext;
use crate::context::{MappedArchive, MappedArchives};
use crate::entry::{AssetEntry, AssetKind, GameVersion};
use crate::info::AssetInfo;
use crate::names::{NameLookup, NoNames};
use crate::structs::SkeletonHeader;
use crate::Result;

/// Name hash given to every fixture entry.
pub const HASH: u64 = 0x3A5F_0C11_9B2E_7D40;

/// Bytes in front of the first page, so page positions never start at zero.
const PAGE_BASE: u64 = 0x40;

/// Entry in archive 0 whose header sits at the start of page 0.
pub fn entry(kind: AssetKind, version: u32, header_size: u32) -> AssetEntry {
    AssetEntry {
        name_hash: HASH,
        kind,
        version,
        header: PagePtr::new(0, 0),
        header_size,
        archive: 0,
        game: GameVersion::Apex,
    }
}

/// A zeroed skeleton with the given bone and body part counts.
pub fn skeleton(bones: u32, body_parts: u32) -> SkeletonHeader {
    let mut skeleton = SkeletonHeader::new_zeroed();
    skeleton.id = u32::from_le_bytes(*b"IDST");
    skeleton.bone_count = bones;
    skeleton.body_part_count = body_parts;
    skeleton
}

/// Appends values to one page and reports the offset each landed at.
#[derive(Default)]
pub struct PageWriter {
    bytes: Vec<u8>,
}

impl PageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u32 {
        self.bytes.len() as u32
    }

    pub fn put<T: IntoBytes + Immutable>(&mut self, value: &T) -> u32 {
        self.put_bytes(value.as_bytes())
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) -> u32 {
        let at = self.offset();
        self.bytes.extend_from_slice(bytes);
        at
    }

    pub fn put_cstring(&mut self, value: &str) -> u32 {
        let at = self.put_bytes(value.as_bytes());
        self.bytes.push(0);
        at
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Lays pages out back to back into a single mapped archive.
pub struct ArchiveBuilder {
    data: Vec<u8>,
    lens: Vec<u32>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            data: vec![0xCD; PAGE_BASE as usize],
            lens: Vec::new(),
        }
    }

    /// Append a page and return its index.
    pub fn add_page(&mut self, page: Vec<u8>) -> u32 {
        self.lens.push(page.len() as u32);
        self.data.extend(page);
        self.lens.len() as u32 - 1
    }

    pub fn archives(&self) -> MappedArchives<Vec<u8>> {
        let pages = PageTable::contiguous(PAGE_BASE, self.lens.iter().copied());
        [MappedArchive::new(self.data.clone(), pages)]
            .into_iter()
            .collect()
    }

    pub fn build(&self, entry: &AssetEntry) -> Result<AssetInfo> {
        self.build_with(entry, &NoNames)
    }

    pub fn build_with(&self, entry: &AssetEntry, names: &dyn NameLookup) -> Result<AssetInfo> {
        let archives = self.archives();
        BuildContext::new(&archives, names).build(entry)
    }

    pub fn build_entry(&self, kind: AssetKind, version: u32, header_size: u32) -> Result<AssetInfo> {
        self.build(&entry(kind, version, header_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArchiveContext;

    #[test]
    fn test_page_layout() {
        let mut page = PageWriter::new();
        assert_eq!(page.put(&7u32), 0);
        assert_eq!(page.put_cstring("ab"), 4);
        assert_eq!(page.offset(), 7);

        let mut builder = ArchiveBuilder::new();
        assert_eq!(builder.add_page(page.into_bytes()), 0);
        assert_eq!(builder.add_page(vec![1, 2]), 1);

        let archives = builder.archives();
        let entry = entry(AssetKind::Texture, 8, 0x28);
        let position = archives.resolve(&entry, PagePtr::new(1, 1)).unwrap();
        assert_eq!(position, PAGE_BASE + 8);
    }
}
