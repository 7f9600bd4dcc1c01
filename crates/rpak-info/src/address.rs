//! Virtual addresses and page tables.
//!
//! Every reference stored inside an RPak header is a [`PagePtr`]: a page index
//! plus a byte offset into that page. Pointers are only meaningful against the
//! page table of the archive that owns them and must be resolved before any read.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{Error, Result};

/// A virtual address inside an archive: page index and offset within the page.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
#[repr(C)]
pub struct PagePtr {
    /// Index of the page in the archive's page table.
    pub index: u32,
    /// Byte offset within the page.
    pub offset: u32,
}

impl PagePtr {
    /// The null pointer used for absent optional references.
    pub const NULL: Self = Self::new(0, 0);

    /// Create a new pointer.
    #[inline]
    pub const fn new(index: u32, offset: u32) -> Self {
        Self { index, offset }
    }

    /// Whether both the index and the offset are zero.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.index == 0 && self.offset == 0
    }
}

impl std::fmt::Display for PagePtr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:#x}", self.index, self.offset)
    }
}

/// A mapped page: where it starts in the archive stream and how long it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Absolute position of the first byte of the page.
    pub position: u64,
    /// Mapped length of the page in bytes.
    pub len: u32,
}

/// The page table of one mapped archive.
#[derive(Debug, Clone, Default)]
pub struct PageTable {
    pages: Vec<Page>,
}

impl PageTable {
    /// Create a page table from already-mapped pages.
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Lay out pages of the given lengths back to back, starting at `base`.
    pub fn contiguous(base: u64, lens: impl IntoIterator<Item = u32>) -> Self {
        let mut position = base;
        let pages = lens
            .into_iter()
            .map(|len| {
                let page = Page { position, len };
                position += u64::from(len);
                page
            })
            .collect();
        Self { pages }
    }

    /// Number of mapped pages.
    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by index.
    #[inline]
    pub fn page(&self, index: u32) -> Option<&Page> {
        self.pages.get(index as usize)
    }

    /// Resolve a virtual address to an absolute stream position.
    ///
    /// The offset may equal the page length (one past the end) but not exceed it.
    pub fn resolve(&self, ptr: PagePtr) -> Result<u64> {
        let out_of_range = || {
            tracing::trace!(%ptr, pages = self.pages.len(), "virtual address out of range");
            Error::AddressOutOfRange {
                index: ptr.index,
                offset: ptr.offset,
            }
        };

        let page = self.page(ptr.index).ok_or_else(out_of_range)?;
        if ptr.offset > page.len {
            return Err(out_of_range());
        }

        page.position
            .checked_add(u64::from(ptr.offset))
            .ok_or_else(out_of_range)
    }
}
