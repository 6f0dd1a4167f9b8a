//! Primitive decoding of binary values,
//! driven by the active transfer syntax's byte order.

use crate::header::Tag;
use byteordered::{ByteOrdered, Endianness};
use std::io::Read;

type Result<T> = std::io::Result<T>;

/// A basic decoder of DICOM primitive values,
/// with the byte order resolved at run time.
///
/// The byte order is the one declared by the transfer syntax,
/// never the host's; a native big-endian build decodes
/// little endian data all the same.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct BasicDecoder {
    endianness: Endianness,
}

impl BasicDecoder {
    /// Create a basic decoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        BasicDecoder { endianness }
    }

    /// Retrieve the source's endianness, as expected by this decoder.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Decode an unsigned short value from the given source.
    pub fn decode_us<S>(&self, source: S) -> Result<u16>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_u16()
    }

    /// Decode a sequence of unsigned short values from the given source.
    pub fn decode_us_into<S>(&self, source: S, target: &mut [u16]) -> Result<()>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_u16_into(target)
    }

    /// Decode an unsigned long value from the given source.
    pub fn decode_ul<S>(&self, source: S) -> Result<u32>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_u32()
    }

    /// Decode a sequence of unsigned long values from the given source.
    pub fn decode_ul_into<S>(&self, source: S, target: &mut [u32]) -> Result<()>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_u32_into(target)
    }

    /// Decode a signed short value from the given source.
    pub fn decode_ss<S>(&self, source: S) -> Result<i16>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_i16()
    }

    /// Decode a sequence of signed short values from the given source.
    pub fn decode_ss_into<S>(&self, source: S, target: &mut [i16]) -> Result<()>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_i16_into(target)
    }

    /// Decode a signed long value from the given source.
    pub fn decode_sl<S>(&self, source: S) -> Result<i32>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_i32()
    }

    /// Decode a sequence of signed long values from the given source.
    pub fn decode_sl_into<S>(&self, source: S, target: &mut [i32]) -> Result<()>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_i32_into(target)
    }

    /// Decode a single precision float value from the given source.
    pub fn decode_fl<S>(&self, source: S) -> Result<f32>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_f32()
    }

    /// Decode a sequence of single precision float values from the given source.
    pub fn decode_fl_into<S>(&self, source: S, target: &mut [f32]) -> Result<()>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_f32_into(target)
    }

    /// Decode a double precision float value from the given source.
    pub fn decode_fd<S>(&self, source: S) -> Result<f64>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_f64()
    }

    /// Decode a sequence of double precision float values from the given source.
    pub fn decode_fd_into<S>(&self, source: S, target: &mut [f64]) -> Result<()>
    where
        S: Read,
    {
        ByteOrdered::runtime(source, self.endianness).read_f64_into(target)
    }

    /// Decode a DICOM attribute tag from the given source.
    pub fn decode_tag<S>(&self, mut source: S) -> Result<Tag>
    where
        S: Read,
    {
        let g = self.decode_us(&mut source)?;
        let e = self.decode_us(source)?;
        Ok(Tag(g, e))
    }
}

impl From<Endianness> for BasicDecoder {
    fn from(endianness: Endianness) -> Self {
        BasicDecoder::new(endianness)
    }
}
