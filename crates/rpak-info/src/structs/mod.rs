//! On-disk asset header structures.
//!
//! All structures are little-endian and packed. Every reference they hold is a
//! [`PagePtr`](crate::PagePtr) that must be resolved before it is read.

mod anim;
mod datatable;
mod material;
mod model;
mod skeleton;
mod texture;

pub use anim::{AnimRigHeader, AnimSeqHeader};
pub use datatable::DataTableHeader;
pub use material::MaterialHeader;
pub use model::{
    ModelHeader, ModelHeaderExt, ModelHeaderV8, ModelHeaderV9, ModelLayout,
    COMPACT_HEADER_LIMIT, LEGACY_VERSION_CUTOFF,
};
pub use skeleton::SkeletonHeader;
pub use texture::{TextureHeader, UiImageCompression, UiImageHeader};
