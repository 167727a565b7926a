/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::io::{Error, ErrorKind, Result};

/// Reads fixed-width values out of an in-memory byte buffer. The byte order
/// can be switched between reads, which the Shapefile format needs because it
/// mixes big- and little-endian fields within a single record.
///
/// A read that would run past the end of the buffer fails with
/// `ErrorKind::UnexpectedEof` and leaves the cursor where it was.
pub struct ByteOrderReader<'a> {
    is_le: bool,
    buffer: &'a [u8],
    pos: usize,
}

impl<'a> ByteOrderReader<'a> {
    pub fn new(buffer: &'a [u8], byte_order: Endianness) -> ByteOrderReader<'a> {
        ByteOrderReader {
            is_le: byte_order == Endianness::LittleEndian,
            buffer,
            pos: 0usize,
        }
    }

    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.is_le = byte_order == Endianness::LittleEndian;
    }

    pub fn seek(&mut self, position: usize) {
        self.pos = position;
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.pos)
    }

    fn take(&mut self, num_bytes: usize) -> Result<&'a [u8]> {
        let end = match self.pos.checked_add(num_bytes) {
            Some(end) if end <= self.buffer.len() => end,
            _ => {
                return Err(Error::new(
                    ErrorKind::UnexpectedEof,
                    format!(
                        "cannot read {} bytes at offset {}; buffer holds {} bytes",
                        num_bytes,
                        self.pos,
                        self.buffer.len()
                    ),
                ))
            }
        };
        let buffer: &'a [u8] = self.buffer;
        let bytes = &buffer[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        if self.is_le {
            return Ok(LittleEndian::read_i32(bytes));
        }
        Ok(BigEndian::read_i32(bytes))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let bytes = self.take(8)?;
        if self.is_le {
            return Ok(LittleEndian::read_f64(bytes));
        }
        Ok(BigEndian::read_f64(bytes))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Endianness {
    #[default]
    LittleEndian,
    BigEndian,
}

#[cfg(test)]
mod test {
    use super::{ByteOrderReader, Endianness};
    use std::io::ErrorKind;

    #[test]
    fn test_mixed_byte_order_reads() {
        let buffer = [
            0x00, 0x00, 0x27, 0x0a, // 9994, big-endian
            0xe8, 0x03, 0x00, 0x00, // 1000, little-endian
        ];
        let mut bor = ByteOrderReader::new(&buffer, Endianness::BigEndian);
        assert_eq!(bor.read_i32().unwrap(), 9994);
        bor.set_byte_order(Endianness::LittleEndian);
        assert_eq!(bor.read_i32().unwrap(), 1000);
        assert_eq!(bor.pos(), 8);
        assert_eq!(bor.remaining(), 0);
    }

    #[test]
    fn test_read_f64() {
        let mut buffer = 1.5f64.to_le_bytes().to_vec();
        buffer.extend_from_slice(&(-2.25f64).to_be_bytes());
        let mut bor = ByteOrderReader::new(&buffer, Endianness::LittleEndian);
        assert_eq!(bor.read_f64().unwrap(), 1.5);
        bor.set_byte_order(Endianness::BigEndian);
        assert_eq!(bor.read_f64().unwrap(), -2.25);
    }

    #[test]
    fn test_read_past_end_fails_without_moving() {
        let buffer = [1u8, 2, 3, 4, 5, 6];
        let mut bor = ByteOrderReader::new(&buffer, Endianness::LittleEndian);
        bor.seek(4);
        let err = bor.read_i32().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert_eq!(bor.pos(), 4);
        bor.seek(2);
        assert_eq!(bor.read_i32().unwrap(), i32::from_le_bytes([3, 4, 5, 6]));
    }

    #[test]
    fn test_seek_beyond_end() {
        let buffer = [0u8; 4];
        let mut bor = ByteOrderReader::new(&buffer, Endianness::LittleEndian);
        bor.seek(usize::MAX);
        assert_eq!(bor.remaining(), 0);
        assert!(bor.read_i32().is_err());
        assert_eq!(bor.pos(), usize::MAX);
    }
}
