//! Building many entries at once.
//!
//! A failing entry never aborts the batch: its error is reported in the
//! result slot of that entry and every other entry is still built.

use crate::builders::BuildContext;
use crate::context::ArchiveContext;
use crate::entry::{AssetEntry, AssetKind};
use crate::info::{AssetInfo, AssetStatus};
use crate::names::synthesized_name;
use crate::Error;

/// Why one entry of a batch could not be built.
#[derive(Debug, thiserror::Error)]
#[error("failed to build {kind} asset {name_hash:#x}: {error}")]
pub struct BuildFailure {
    pub name_hash: u64,
    pub kind: AssetKind,
    #[source]
    pub error: Error,
}

impl BuildFailure {
    fn new(entry: &AssetEntry, error: Error) -> Self {
        Self {
            name_hash: entry.name_hash,
            kind: entry.kind,
            error,
        }
    }

    /// A placeholder record with [`AssetStatus::Error`], for listings that
    /// show failed entries alongside loaded ones.
    pub fn to_info(&self) -> AssetInfo {
        AssetInfo {
            name: synthesized_name(self.kind.name_prefix(), self.name_hash),
            asset_type: self.kind.asset_type(),
            status: AssetStatus::Error,
            info: Some(self.error.to_string()),
            debug_info: None,
        }
    }
}

/// Outcome of building one entry of a batch.
pub type BuildResult = std::result::Result<AssetInfo, BuildFailure>;

impl<C: ArchiveContext> BuildContext<'_, C> {
    fn build_one(&self, entry: &AssetEntry) -> BuildResult {
        self.build(entry).map_err(|error| {
            tracing::debug!(
                hash = format_args!("{:#x}", entry.name_hash),
                kind = %entry.kind,
                %error,
                "asset build failed"
            );
            BuildFailure::new(entry, error)
        })
    }

    /// Build every entry in order. Results line up with `entries`.
    pub fn build_all(&self, entries: &[AssetEntry]) -> Vec<BuildResult> {
        entries.iter().map(|entry| self.build_one(entry)).collect()
    }

    /// Build every entry on the rayon pool. Results line up with `entries`.
    #[cfg(feature = "parallel")]
    pub fn build_all_parallel(&self, entries: &[AssetEntry]) -> Vec<BuildResult> {
        use rayon::prelude::*;

        entries
            .par_iter()
            .map(|entry| self.build_one(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{entry, ArchiveBuilder, PageWriter, HASH};
    use crate::names::NoNames;
    use crate::structs::DataTableHeader;
    use crate::{AssetType, PagePtr};

    fn archive() -> ArchiveBuilder {
        let mut page = PageWriter::new();
        page.put(&DataTableHeader {
            column_count: 2,
            row_count: 9,
            columns: PagePtr::NULL,
            rows: PagePtr::NULL,
            row_stride: 8,
            reserved: 0,
        });
        let mut builder = ArchiveBuilder::new();
        builder.add_page(page.into_bytes());
        builder
    }

    fn batch() -> Vec<AssetEntry> {
        let mut broken = entry(AssetKind::Texture, 8, 0x28);
        broken.header = PagePtr::new(4, 0);
        let mut unknown = entry(AssetKind::from_tag(0x6E6F_7372), 1, 0);
        unknown.name_hash = 0x77;

        vec![
            entry(AssetKind::DataTable, 1, 0x20),
            broken,
            entry(AssetKind::ShaderSet, 8, 0x70),
            unknown,
        ]
    }

    #[test]
    fn test_failures_do_not_abort_batch() {
        let archives = archive().archives();
        let cx = BuildContext::new(&archives, &NoNames);
        let results = cx.build_all(&batch());

        assert_eq!(results.len(), 4);
        assert_eq!(
            results[0].as_ref().unwrap().info.as_deref(),
            Some("Columns: 2 Rows: 9")
        );
        assert!(matches!(
            results[1].as_ref().unwrap_err().error,
            Error::AddressOutOfRange { index: 4, .. }
        ));
        assert_eq!(
            results[2].as_ref().unwrap().name,
            format!("shaderset_0x{HASH:x}")
        );
        assert!(matches!(
            results[3].as_ref().unwrap_err().error,
            Error::UnsupportedKind(AssetKind::Other(_))
        ));
    }

    #[test]
    fn test_failure_record() {
        let archives = archive().archives();
        let cx = BuildContext::new(&archives, &NoNames);
        let results = cx.build_all(&batch());

        let record = results[1].as_ref().unwrap_err().to_info();
        assert_eq!(record.name, format!("texture_0x{HASH:x}"));
        assert_eq!(record.asset_type, AssetType::Image);
        assert_eq!(record.status, AssetStatus::Error);
        assert!(record.info.unwrap().contains("4:0x0"));

        let unknown = results[3].as_ref().unwrap_err().to_info();
        assert_eq!(unknown.name, "asset_0x77");
        assert_eq!(unknown.asset_type, AssetType::Unknown);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let archives = archive().archives();
        let cx = BuildContext::new(&archives, &NoNames);
        let entries = batch();

        let sequential = cx.build_all(&entries);
        let parallel = cx.build_all_parallel(&entries);

        assert_eq!(sequential.len(), parallel.len());
        for (a, b) in sequential.iter().zip(&parallel) {
            match (a, b) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
                _ => panic!("sequential and parallel builds disagree"),
            }
        }
    }
}
