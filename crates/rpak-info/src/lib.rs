//! Asset identity and summary metadata for Respawn RPak archives.
//!
//! Given the page tables of already-loaded archives and an asset directory
//! entry, this crate reads the asset's header and produces an [`AssetInfo`]:
//! display name, category, load status and a one-line summary.
//!
//! Supported categories:
//!
//! - Models (`mdl_`), with three header layouts selected by version and size
//! - Animation rigs (`arig`) and animation sequences (`aseq`)
//! - Materials (`matl`), textures (`txtr`) and UI image atlases (`uiia`)
//! - Data tables (`dtbl`), subtitles (`subt`) and shader sets (`shds`)
//!
//! # Example
//!
//! ```
//! use rpak_info::{
//!     AssetEntry, AssetKind, BuildContext, GameVersion, MappedArchive, MappedArchives, NoNames,
//!     PagePtr, PageTable,
//! };
//!
//! // one page holding a data table header: 3 columns, 12 rows
//! let mut page = vec![0u8; 0x20];
//! page[0..4].copy_from_slice(&3u32.to_le_bytes());
//! page[4..8].copy_from_slice(&12u32.to_le_bytes());
//!
//! let archives: MappedArchives<Vec<u8>> =
//!     [MappedArchive::new(page, PageTable::contiguous(0, [0x20]))].into_iter().collect();
//! let entry = AssetEntry {
//!     name_hash: 0xfeed,
//!     kind: AssetKind::DataTable,
//!     version: 1,
//!     header: PagePtr::new(0, 0),
//!     header_size: 0x20,
//!     archive: 0,
//!     game: GameVersion::Apex,
//! };
//!
//! let info = BuildContext::new(&archives, &NoNames).build(&entry)?;
//! assert_eq!(info.name, "datatable_0xfeed");
//! assert_eq!(info.info.as_deref(), Some("Columns: 3 Rows: 12"));
//! # Ok::<(), rpak_info::Error>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: [`BuildContext::build_all_parallel`] on the rayon pool
//! - `serde`: serialization of output records

mod address;
mod batch;
mod builders;
mod context;
mod entry;
mod error;
mod info;
mod names;
pub mod structs;

#[cfg(test)]
mod fixture;

pub use address::{Page, PagePtr, PageTable};
pub use batch::{BuildFailure, BuildResult};
pub use builders::{dispatch, BuildContext, BuildFn};
pub use context::{ArchiveContext, EntryReader, MappedArchive, MappedArchives, MAX_STRING_LEN};
pub use entry::{AssetEntry, AssetKind, GameVersion};
pub use error::{Error, Result};
pub use info::{AssetInfo, AssetStatus, AssetType};
pub use names::{normalize_name, synthesized_name, NameLookup, NoNames};
