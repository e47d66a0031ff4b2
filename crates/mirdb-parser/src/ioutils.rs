//! Reader primitives for the database byte stream.
//!
//! The stream was written by a .NET `BinaryWriter`: integers are
//! little-endian, bools are a single nonzero byte, and strings carry a
//! 7-bit variable-length byte-count prefix followed by UTF-8 data.

use crate::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Longest accepted 7-bit length prefix. Five bytes already encode 35
/// bits, more than any length a writer can produce.
const MAX_PREFIX_BYTES: u32 = 5;

/// Upper bound on a single string's byte length. Real databases top out
/// at multi-line tooltips of a few kilobytes.
const MAX_STRING_BYTES: u64 = 1 << 20;

/// Upper bound on a single list count. The largest real sections hold a
/// few tens of thousands of records.
const MAX_LIST_ENTRIES: i32 = 1 << 20;

/// Extension trait for the format-specific primitives the record codecs
/// consume. Fixed-width integers come straight from [`ReadBytesExt`].
pub trait ReadMirExt: Read {
    /// Read a single-byte bool. Any nonzero value is true.
    fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a length-prefixed UTF-8 string.
    fn read_string(&mut self) -> Result<String> {
        let mut length: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = self.read_u8()?;
            length |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                break;
            }
            shift += 7;
            if shift >= MAX_PREFIX_BYTES * 7 {
                return Err(Error::StringLength {
                    max: MAX_STRING_BYTES,
                });
            }
        }
        if length > MAX_STRING_BYTES {
            return Err(Error::StringLength {
                max: MAX_STRING_BYTES,
            });
        }
        let mut buf = vec![0u8; length as usize];
        self.read_exact(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Read an `i32` list count and validate it.
    fn read_count(&mut self) -> Result<usize> {
        let count = self.read_i32::<LittleEndian>()?;
        if !(0..=MAX_LIST_ENTRIES).contains(&count) {
            return Err(Error::CountOutOfRange(i64::from(count)));
        }
        Ok(count as usize)
    }
}

impl<R: Read + ?Sized> ReadMirExt for R {}
