//! JSON manifest describing pre-extracted archive page dumps.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use memmap2::Mmap;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use rpak_info::{
    AssetEntry, AssetKind, GameVersion, MappedArchive, MappedArchives, Page, PagePtr, PageTable,
};

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub archives: Vec<ArchiveSpec>,
    pub assets: Vec<AssetSpec>,
    /// Subtitle asset names by hash.
    #[serde(default)]
    pub subtitles: FxHashMap<u64, String>,
}

#[derive(Debug, Deserialize)]
pub struct ArchiveSpec {
    /// Page dump, relative to the manifest.
    pub path: PathBuf,
    pub game: GameVersion,
    pub pages: Vec<PageSpec>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageSpec {
    pub position: u64,
    pub len: u32,
}

#[derive(Debug, Deserialize)]
pub struct AssetSpec {
    pub hash: u64,
    /// Four-character category tag, e.g. `mdl_`.
    pub tag: String,
    pub version: u32,
    pub header_index: u32,
    pub header_offset: u32,
    pub header_size: u32,
    pub archive: usize,
}

/// A loaded manifest: mapped archives plus the entries pointing into them.
pub struct Loaded {
    pub archives: MappedArchives<Mmap>,
    pub entries: Vec<AssetEntry>,
    pub subtitles: FxHashMap<u64, String>,
}

impl Manifest {
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }

    /// Map every page dump and turn the asset list into directory entries.
    pub fn load(self, path: &Path) -> Result<Loaded> {
        let base = path.parent().unwrap_or(Path::new("."));

        let mut archives = MappedArchives::new();
        let mut games = Vec::with_capacity(self.archives.len());
        for spec in &self.archives {
            let dump = base.join(&spec.path);
            let file = File::open(&dump)
                .with_context(|| format!("Failed to open page dump {}", dump.display()))?;
            let mmap = unsafe { Mmap::map(&file)? };

            check_pages(&dump, &spec.pages, mmap.len())?;
            let pages = spec
                .pages
                .iter()
                .map(|page| Page {
                    position: page.position,
                    len: page.len,
                })
                .collect();

            tracing::debug!(path = %dump.display(), pages = spec.pages.len(), "mapped page dump");
            archives.push(MappedArchive::new(mmap, PageTable::new(pages)));
            games.push(spec.game);
        }

        let entries = self
            .assets
            .iter()
            .map(|asset| asset.to_entry(&games))
            .collect::<Result<Vec<_>>>()?;

        Ok(Loaded {
            archives,
            entries,
            subtitles: self.subtitles,
        })
    }
}

impl AssetSpec {
    fn to_entry(&self, games: &[GameVersion]) -> Result<AssetEntry> {
        let Some(kind) = AssetKind::from_fourcc(&self.tag) else {
            bail!("Asset {:#x} has invalid tag {:?}", self.hash, self.tag);
        };
        let Some(&game) = games.get(self.archive) else {
            bail!(
                "Asset {:#x} references archive {} but the manifest lists {}",
                self.hash,
                self.archive,
                games.len()
            );
        };

        Ok(AssetEntry {
            name_hash: self.hash,
            kind,
            version: self.version,
            header: PagePtr::new(self.header_index, self.header_offset),
            header_size: self.header_size,
            archive: self.archive,
            game,
        })
    }
}

/// Pages must lie inside the dump they describe.
fn check_pages(dump: &Path, pages: &[PageSpec], len: usize) -> Result<()> {
    for (index, page) in pages.iter().enumerate() {
        let end = page.position.checked_add(u64::from(page.len));
        if end.map_or(true, |end| end > len as u64) {
            bail!(
                "Page {} of {} ends past the dump ({} bytes)",
                index,
                dump.display(),
                len
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest: Manifest = serde_json::from_str(
            r#"{
                "archives": [{ "path": "common.bin", "game": "titanfall2",
                               "pages": [{ "position": 0, "len": 4096 }] }],
                "assets": [{ "hash": 1234, "tag": "mdl_", "version": 9,
                             "header_index": 0, "header_offset": 16, "header_size": 104,
                             "archive": 0 }],
                "subtitles": { "5678": "subtitles_english" }
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.archives[0].game, GameVersion::Titanfall2);
        assert_eq!(manifest.subtitles[&5678], "subtitles_english");

        let entry = manifest.assets[0].to_entry(&[GameVersion::Titanfall2]).unwrap();
        assert_eq!(entry.kind, AssetKind::Model);
        assert_eq!(entry.header, PagePtr::new(0, 16));
        assert_eq!(entry.game, GameVersion::Titanfall2);
    }

    #[test]
    fn test_asset_archive_must_exist() {
        let asset = AssetSpec {
            hash: 1,
            tag: "txtr".into(),
            version: 8,
            header_index: 0,
            header_offset: 0,
            header_size: 0x28,
            archive: 2,
        };
        assert!(asset.to_entry(&[GameVersion::Apex]).is_err());
    }

    #[test]
    fn test_pages_must_fit_dump() {
        let pages = [
            PageSpec { position: 0, len: 0x10 },
            PageSpec { position: 0x10, len: 0x20 },
        ];
        assert!(check_pages(Path::new("a.bin"), &pages, 0x30).is_ok());
        assert!(check_pages(Path::new("a.bin"), &pages, 0x2F).is_err());
    }
}
