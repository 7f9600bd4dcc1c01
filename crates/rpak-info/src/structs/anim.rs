//! Animation rig (`arig`) and animation sequence (`aseq`) headers.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::address::PagePtr;

/// Animation rig header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct AnimRigHeader {
    pub skeleton: PagePtr,
    pub name: PagePtr,
    pub reserved0: u32,
    pub animation_reference_count: u32,
    pub animation_references: PagePtr,
    pub reserved1: u64,
}

/// Animation sequence header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct AnimSeqHeader {
    pub name: PagePtr,
    pub data: PagePtr,
    pub models: PagePtr,
    pub model_count: u32,
    pub setting_count: u32,
    pub settings: PagePtr,
}

const _: () = assert!(std::mem::size_of::<AnimRigHeader>() == 0x28);
const _: () = assert!(std::mem::size_of::<AnimSeqHeader>() == 0x28);
