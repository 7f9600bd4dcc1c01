//! Data table (`dtbl`) header.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::address::PagePtr;

/// Data table header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DataTableHeader {
    pub column_count: u32,
    pub row_count: u32,
    pub columns: PagePtr,
    pub rows: PagePtr,
    pub row_stride: u32,
    pub reserved: u32,
}

const _: () = assert!(std::mem::size_of::<DataTableHeader>() == 0x20);
