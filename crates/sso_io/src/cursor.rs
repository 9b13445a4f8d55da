//! Bounds-checked reading and writing of little-endian buffers.
//!

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Seek, SeekFrom, Write};
use tracing::instrument;

use crate::error::{Error, Result};

/// Positioned reader over an in-memory buffer.
///
/// Every convenience read checks the remaining length up front and reports
/// offset, wanted and remaining byte counts when the input falls short.
/// The position only moves forward; random access belongs to [`Seek`],
/// which is implemented (together with [`Read`]) so fixed-layout structs
/// can be parsed straight from the cursor.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    inner: io::Cursor<&'a [u8]>,
}

impl<'a> ByteCursor<'a> {
    /// Wrap a borrowed buffer, positioned at its start.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            inner: io::Cursor::new(data),
        }
    }

    /// Current read position from the start of the buffer.
    pub fn position(&self) -> u64 {
        self.inner.position()
    }

    /// Bytes left between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        let len = self.inner.get_ref().len() as u64;
        len.saturating_sub(self.inner.position()) as usize
    }

    fn ensure(&self, wanted: usize) -> Result<()> {
        let remaining = self.remaining();
        if wanted > remaining {
            return Err(Error::UnexpectedEnd {
                offset: self.inner.position(),
                wanted,
                remaining,
            });
        }
        Ok(())
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.inner.read_u8()?)
    }

    /// Read a little-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        Ok(self.inner.read_u16::<LittleEndian>()?)
    }

    /// Read a little-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        Ok(self.inner.read_u32::<LittleEndian>()?)
    }

    /// Read a fixed-size block.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure(N)?;
        let mut block = [0u8; N];
        self.inner.read_exact(&mut block)?;
        Ok(block)
    }

    /// Read `len` bytes into an owned buffer.
    ///
    /// The length is validated against the remaining input before any
    /// allocation happens, so a corrupt length field cannot trigger an
    /// oversized reservation.
    #[instrument(skip(self), err)]
    pub fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        self.ensure(len)?;
        let mut buffer = vec![0u8; len];
        self.inner.read_exact(&mut buffer)?;
        Ok(buffer)
    }
}

impl Read for ByteCursor<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.inner.read_exact(buf)
    }
}

impl Seek for ByteCursor<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// Growable little-endian sink that mirrors [`ByteCursor`]'s reads.
///
/// Backed by a plain `Vec<u8>`; [`ByteWriter::into_vec`] hands the encoded
/// buffer back once serialization is done.
#[derive(Debug, Default)]
pub struct ByteWriter {
    inner: io::Cursor<Vec<u8>>,
}

impl ByteWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with `capacity` bytes reserved up front.
    #[instrument(err)]
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(capacity)?;
        Ok(Self {
            inner: io::Cursor::new(buffer),
        })
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.inner.get_ref().is_empty()
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        Ok(self.inner.write_u8(value)?)
    }

    /// Write a little-endian `u16`.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        Ok(self.inner.write_u16::<LittleEndian>(value)?)
    }

    /// Write a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        Ok(self.inner.write_u32::<LittleEndian>(value)?)
    }

    /// Write a block of bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        Ok(self.inner.write_all(bytes)?)
    }

    /// Unwrap into the encoded buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl Write for ByteWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Seek for ByteWriter {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
