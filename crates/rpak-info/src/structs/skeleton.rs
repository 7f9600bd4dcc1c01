//! Studio skeleton header shared by models and animation rigs.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Skeleton (studio) header, as referenced by model and rig headers.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct SkeletonHeader {
    /// Magic (`IDST`).
    pub id: u32,
    pub version: u32,
    pub checksum: u32,
    pub name_table_offset: u32,
    /// Internal model name, null padded.
    pub name: [u8; 64],
    pub length: u32,
    pub eye_position: [f32; 3],
    pub illum_position: [f32; 3],
    pub hull_min: [f32; 3],
    pub hull_max: [f32; 3],
    pub view_bb_min: [f32; 3],
    pub view_bb_max: [f32; 3],
    pub flags: u32,
    pub bone_count: u32,
    pub bone_index: u32,
    pub bone_controller_count: u32,
    pub bone_controller_index: u32,
    pub hitbox_set_count: u32,
    pub hitbox_set_index: u32,
    pub local_anim_count: u32,
    pub local_anim_index: u32,
    pub local_seq_count: u32,
    pub local_seq_index: u32,
    pub activity_list_version: u32,
    pub events_indexed: u32,
    pub texture_count: u32,
    pub texture_index: u32,
    pub cd_texture_count: u32,
    pub cd_texture_index: u32,
    pub skin_ref_count: u32,
    pub skin_family_count: u32,
    pub skin_index: u32,
    /// Number of body parts; each body part is listed as a mesh.
    pub body_part_count: u32,
    pub body_part_index: u32,
    pub reserved: [u8; 0x0C],
}

const _: () = assert!(std::mem::size_of::<SkeletonHeader>() == 0x100);

impl SkeletonHeader {
    /// Number of bones.
    #[inline]
    pub fn bone_count(&self) -> u32 {
        self.bone_count
    }

    /// Number of body parts.
    #[inline]
    pub fn body_part_count(&self) -> u32 {
        self.body_part_count
    }
}
