//! Binary readers for RPak page data.
//!
//! [`BinaryReader`] is a cursor-like type that reads binary data from a byte
//! slice without copying. [`ReadExt`] adds the same fixed-shape reads to any
//! [`Read`] stream, for callers that only hold a seekable stream.

use std::io::{self, Read};

use zerocopy::FromBytes;

use crate::{Error, Result};

/// Reads fixed-shape values out of an in-memory header slice.
///
/// # Example
///
/// ```
/// use rpak_common::{BinaryReader, FromBytes, Immutable, KnownLayout};
///
/// #[derive(FromBytes, Immutable, KnownLayout)]
/// #[repr(C, packed)]
/// struct Ptr {
///     index: u32,
///     offset: u32,
/// }
///
/// let data = [0x02, 0, 0, 0, 0x40, 0, 0, 0];
/// let mut reader = BinaryReader::new(&data);
///
/// let ptr: Ptr = reader.read_struct().unwrap();
/// assert_eq!(({ ptr.index }, { ptr.offset }), (2, 0x40));
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if available < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available,
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Copy the next `size_of::<T>()` bytes out as a `T`.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            needed: size,
            available: bytes.len(),
        })
    }
}

/// Trait for reading binary data from streams.
///
/// This extends `Read` with methods for reading fixed-size structures and
/// null-terminated strings. Reads never consume more than they return.
pub trait ReadExt: Read {
    /// Read a structure from the stream.
    fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let mut bytes = vec![0u8; size];
        self.read_exact(&mut bytes).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => Error::UnexpectedEof {
                needed: size,
                available: 0,
            },
            _ => Error::Io(e),
        })?;
        T::read_from_bytes(&bytes).map_err(|_| Error::UnexpectedEof {
            needed: size,
            available: bytes.len(),
        })
    }

    /// Read exactly `count` bytes from the stream.
    fn read_vec(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; count];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    /// Read a null-terminated string of at most `limit` bytes (terminator excluded).
    ///
    /// The stream is read one byte at a time so that it is left positioned
    /// directly after the terminator.
    fn read_cstring(&mut self, limit: usize) -> Result<String> {
        let mut bytes = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            match self.read(&mut byte) {
                Ok(0) => return Err(Error::MissingNullTerminator),
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }

            if byte[0] == 0 {
                break;
            }
            if bytes.len() == limit {
                return Err(Error::StringTooLong { limit });
            }
            bytes.push(byte[0]);
        }

        String::from_utf8(bytes).map_err(|e| Error::Utf8(e.utf8_error()))
    }
}

impl<R: Read + ?Sized> ReadExt for R {}
