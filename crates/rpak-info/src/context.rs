//! Archive context and per-entry stream access.
//!
//! Builders never reach for global state: the page tables and byte streams of
//! every loaded archive are handed to them through an [`ArchiveContext`].
//!
//! # Concurrency contract
//!
//! An `ArchiveContext` is shared by reference between workers, so it must be
//! `Sync`, and every call to [`ArchiveContext::open_stream`] must return a
//! stream with its own position. Builds never share a stream and the core
//! takes no locks.

use std::io::{Cursor, Read, Seek, SeekFrom};

use rpak_common::{FromBytes, ReadExt};

use crate::address::{PagePtr, PageTable};
use crate::entry::AssetEntry;
use crate::{Error, Result};

/// Longest stored string accepted, terminator excluded.
pub const MAX_STRING_LEN: usize = 0x1000;

/// Access to the loaded archives an entry can point into.
pub trait ArchiveContext: Sync {
    /// Seekable stream over an archive's mapped pages.
    type Stream<'a>: Read + Seek
    where
        Self: 'a;

    /// Open an independently positioned stream over the entry's archive.
    fn open_stream(&self, entry: &AssetEntry) -> Result<Self::Stream<'_>>;

    /// Resolve a virtual address of the entry's archive to a stream position.
    fn resolve(&self, entry: &AssetEntry, ptr: PagePtr) -> Result<u64>;
}

/// One archive whose pages are already decompressed into memory.
#[derive(Debug)]
pub struct MappedArchive<D> {
    data: D,
    pages: PageTable,
}

impl<D: AsRef<[u8]>> MappedArchive<D> {
    /// Wrap mapped archive bytes and their page table.
    pub fn new(data: D, pages: PageTable) -> Self {
        Self { data, pages }
    }

    /// The archive bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// The archive page table.
    #[inline]
    pub fn pages(&self) -> &PageTable {
        &self.pages
    }
}

/// A set of in-memory archives, indexed by [`AssetEntry::archive`].
///
/// `D` is anything that derefs to bytes: a `Vec<u8>` or a memory map.
#[derive(Debug)]
pub struct MappedArchives<D> {
    archives: Vec<MappedArchive<D>>,
}

impl<D: AsRef<[u8]>> MappedArchives<D> {
    /// Create an empty archive set.
    pub fn new() -> Self {
        Self {
            archives: Vec::new(),
        }
    }

    /// Add an archive and return its index.
    pub fn push(&mut self, archive: MappedArchive<D>) -> usize {
        self.archives.push(archive);
        self.archives.len() - 1
    }

    /// Number of archives.
    #[inline]
    pub fn len(&self) -> usize {
        self.archives.len()
    }

    /// Whether no archive is loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.archives.is_empty()
    }

    fn archive(&self, entry: &AssetEntry) -> Result<&MappedArchive<D>> {
        self.archives
            .get(entry.archive)
            .ok_or(Error::ArchiveNotMapped(entry.archive))
    }
}

impl<D: AsRef<[u8]>> Default for MappedArchives<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: AsRef<[u8]>> FromIterator<MappedArchive<D>> for MappedArchives<D> {
    fn from_iter<I: IntoIterator<Item = MappedArchive<D>>>(iter: I) -> Self {
        Self {
            archives: iter.into_iter().collect(),
        }
    }
}

impl<D: AsRef<[u8]> + Sync> ArchiveContext for MappedArchives<D> {
    type Stream<'a> = Cursor<&'a [u8]> where Self: 'a;

    fn open_stream(&self, entry: &AssetEntry) -> Result<Self::Stream<'_>> {
        Ok(Cursor::new(self.archive(entry)?.data()))
    }

    fn resolve(&self, entry: &AssetEntry, ptr: PagePtr) -> Result<u64> {
        self.archive(entry)?.pages().resolve(ptr)
    }
}

/// A stream positioned by virtual address for the reads of one entry's build.
pub struct EntryReader<'a, C: ArchiveContext + 'a> {
    context: &'a C,
    entry: &'a AssetEntry,
    stream: C::Stream<'a>,
}

impl<'a, C: ArchiveContext + 'a> EntryReader<'a, C> {
    /// Open a fresh stream for `entry`.
    pub fn open(context: &'a C, entry: &'a AssetEntry) -> Result<Self> {
        let stream = context.open_stream(entry)?;
        Ok(Self {
            context,
            entry,
            stream,
        })
    }

    /// The entry being read.
    #[inline]
    pub fn entry(&self) -> &AssetEntry {
        self.entry
    }

    /// Resolve `ptr` and seek to it, returning the absolute position.
    pub fn seek_to(&mut self, ptr: PagePtr) -> Result<u64> {
        let position = self.context.resolve(self.entry, ptr)?;
        self.stream.seek(SeekFrom::Start(position))?;
        Ok(position)
    }

    /// Seek to the entry's own header.
    pub fn seek_header(&mut self) -> Result<u64> {
        self.seek_to(self.entry.header)
    }

    /// Read a fixed-shape value at the current position.
    pub fn read<T: FromBytes>(&mut self) -> Result<T> {
        Ok(self.stream.read_struct()?)
    }

    /// Read a fixed-shape value at a virtual address.
    pub fn read_at<T: FromBytes>(&mut self, ptr: PagePtr) -> Result<T> {
        self.seek_to(ptr)?;
        self.read()
    }

    /// Read `count` raw bytes at the current position.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        Ok(self.stream.read_vec(count)?)
    }

    /// Read a null-terminated string at a virtual address.
    pub fn read_string_at(&mut self, ptr: PagePtr) -> Result<String> {
        let position = self.seek_to(ptr)?;
        self.stream
            .read_cstring(MAX_STRING_LEN)
            .map_err(|e| match e {
                rpak_common::Error::Io(io) => Error::Io(io),
                _ => Error::MalformedString { position },
            })
    }
}
