//! Primitive encoding of binary values,
//! driven by the active transfer syntax's byte order.

use crate::header::Tag;
use byteordered::{ByteOrdered, Endianness};
use std::io::Write;

type Result<T> = std::io::Result<T>;

/// A basic encoder of DICOM primitive values,
/// with the byte order resolved at run time.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct BasicEncoder {
    endianness: Endianness,
}

impl BasicEncoder {
    /// Create a basic encoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        BasicEncoder { endianness }
    }

    /// Retrieve the byte order applied by this encoder.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Encode an unsigned short value to the given writer.
    pub fn encode_us<W>(&self, to: W, value: u16) -> Result<()>
    where
        W: Write,
    {
        ByteOrdered::runtime(to, self.endianness).write_u16(value)
    }

    /// Encode an unsigned long value to the given writer.
    pub fn encode_ul<W>(&self, to: W, value: u32) -> Result<()>
    where
        W: Write,
    {
        ByteOrdered::runtime(to, self.endianness).write_u32(value)
    }

    /// Encode a signed short value to the given writer.
    pub fn encode_ss<W>(&self, to: W, value: i16) -> Result<()>
    where
        W: Write,
    {
        ByteOrdered::runtime(to, self.endianness).write_i16(value)
    }

    /// Encode a signed long value to the given writer.
    pub fn encode_sl<W>(&self, to: W, value: i32) -> Result<()>
    where
        W: Write,
    {
        ByteOrdered::runtime(to, self.endianness).write_i32(value)
    }

    /// Encode a single precision float value to the given writer.
    pub fn encode_fl<W>(&self, to: W, value: f32) -> Result<()>
    where
        W: Write,
    {
        ByteOrdered::runtime(to, self.endianness).write_f32(value)
    }

    /// Encode a double precision float value to the given writer.
    pub fn encode_fd<W>(&self, to: W, value: f64) -> Result<()>
    where
        W: Write,
    {
        ByteOrdered::runtime(to, self.endianness).write_f64(value)
    }

    /// Encode a DICOM attribute tag to the given writer.
    pub fn encode_tag<W>(&self, mut to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        self.encode_us(&mut to, tag.group())?;
        self.encode_us(to, tag.element())
    }
}

impl From<Endianness> for BasicEncoder {
    fn from(endianness: Endianness) -> Self {
        BasicEncoder::new(endianness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_scalars() {
        let le = BasicEncoder::new(Endianness::Little);
        let be = BasicEncoder::new(Endianness::Big);

        let mut out = Vec::new();
        le.encode_us(&mut out, 0x3CC3).unwrap();
        assert_eq!(out, [0xC3, 0x3C]);

        out.clear();
        be.encode_us(&mut out, 0x3CC3).unwrap();
        assert_eq!(out, [0x3C, 0xC3]);

        out.clear();
        le.encode_ul(&mut out, 0xCC33_3CC3).unwrap();
        assert_eq!(out, [0xC3, 0x3C, 0x33, 0xCC]);
    }

    #[test]
    fn encode_tags() {
        let le = BasicEncoder::new(Endianness::Little);
        let mut out = Vec::new();
        le.encode_tag(&mut out, Tag(0x7FE0, 0x0010)).unwrap();
        assert_eq!(out, [0xE0, 0x7F, 0x10, 0x00]);
    }
}
