//! Encoding of data element headers and primitive payloads.
//!
//! The counterpart of the [`decode`](crate::decode) module:
//! one [`ElementEncoder`] covers the byte order and explicitness axes,
//! emitting headers, item framing, and primitive values.

use crate::header::{DataElementHeader, Header, Length, Tag, VR};
use crate::value::PrimitiveValue;
use byteordered::Endianness;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Write};

pub mod basic;

pub use basic::BasicEncoder;

/// Module-level error type:
/// for errors which may occur while encoding DICOM data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to write tag"))]
    WriteTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write element header"))]
    WriteHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item header"))]
    WriteItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item delimiter"))]
    WriteItemDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write sequence delimiter"))]
    WriteSequenceDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write {} value", typ))]
    WriteBinary {
        typ: &'static str,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write string value"))]
    WriteString {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write bytes"))]
    WriteBytes {
        backtrace: Backtrace,
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An encoder of data element headers and primitive payloads,
/// parameterised over byte order and explicit value representations.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElementEncoder {
    basic: BasicEncoder,
    explicit_vr: bool,
}

impl ElementEncoder {
    /// Create an element encoder for the given encoding mode.
    pub fn new(endianness: Endianness, explicit_vr: bool) -> Self {
        ElementEncoder {
            basic: BasicEncoder::new(endianness),
            explicit_vr,
        }
    }

    /// Obtain an element encoder for the file meta group,
    /// which is always in Explicit VR Little Endian.
    pub fn file_header_encoder() -> Self {
        ElementEncoder::new(Endianness::Little, true)
    }

    /// Retrieve the encoder for primitive values under this byte order.
    pub fn basic(&self) -> BasicEncoder {
        self.basic
    }

    /// Retrieve the byte order in effect.
    pub fn endianness(&self) -> Endianness {
        self.basic.endianness()
    }

    /// Whether value representations are written to the wire.
    pub fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Encode and write an element tag.
    pub fn encode_tag<W>(&self, to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        self.basic.encode_tag(to, tag).context(WriteTagSnafu)
    }

    /// Encode and write a data element header to the given destination.
    /// Returns the number of bytes effectively written on success.
    ///
    /// The length in the header must already be the on-wire length:
    /// even-padded for defined lengths,
    /// or `0xFFFF_FFFF` for delimited content.
    pub fn encode_element_header<W>(&self, mut to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        self.basic
            .encode_tag(&mut to, de.tag())
            .context(WriteHeaderSnafu)?;

        if !self.explicit_vr {
            self.basic
                .encode_ul(&mut to, de.len.0)
                .context(WriteHeaderSnafu)?;
            return Ok(8);
        }

        to.write_all(&de.vr().to_bytes()).context(WriteHeaderSnafu)?;
        if de.vr().uses_long_length() {
            // 2 reserved bytes, then a 4 byte length
            to.write_all(&[0u8, 0]).context(WriteHeaderSnafu)?;
            self.basic
                .encode_ul(&mut to, de.len.0)
                .context(WriteHeaderSnafu)?;
            Ok(12)
        } else {
            self.basic
                .encode_us(&mut to, de.len.0 as u16)
                .context(WriteHeaderSnafu)?;
            Ok(8)
        }
    }

    /// Encode and write a sequence item header.
    pub fn encode_item_header<W>(&self, mut to: W, len: Length) -> Result<usize>
    where
        W: Write,
    {
        self.basic
            .encode_tag(&mut to, Tag(0xFFFE, 0xE000))
            .context(WriteItemHeaderSnafu)?;
        self.basic
            .encode_ul(&mut to, len.0)
            .context(WriteItemHeaderSnafu)?;
        Ok(8)
    }

    /// Encode and write an item delimiter.
    pub fn encode_item_delimiter<W>(&self, mut to: W) -> Result<usize>
    where
        W: Write,
    {
        self.basic
            .encode_tag(&mut to, Tag(0xFFFE, 0xE00D))
            .context(WriteItemDelimiterSnafu)?;
        self.basic
            .encode_ul(&mut to, 0)
            .context(WriteItemDelimiterSnafu)?;
        Ok(8)
    }

    /// Encode and write a sequence delimiter.
    pub fn encode_sequence_delimiter<W>(&self, mut to: W) -> Result<usize>
    where
        W: Write,
    {
        self.basic
            .encode_tag(&mut to, Tag(0xFFFE, 0xE0DD))
            .context(WriteSequenceDelimiterSnafu)?;
        self.basic
            .encode_ul(&mut to, 0)
            .context(WriteSequenceDelimiterSnafu)?;
        Ok(8)
    }

    /// Encode a primitive value to the given writer.
    /// Returns the number of bytes written, before any even-length padding.
    pub fn encode_primitive<W>(&self, mut to: W, value: &PrimitiveValue) -> Result<usize>
    where
        W: Write,
    {
        use PrimitiveValue::*;
        match value {
            Empty => Ok(0), // no-op
            Str(s) => {
                to.write_all(s.as_bytes()).context(WriteStringSnafu)?;
                Ok(s.len())
            }
            Strs(s) => encode_collection_delimited(&mut to, s, |to, s| {
                to.write_all(s.as_bytes())?;
                Ok(s.len())
            })
            .context(WriteStringSnafu),
            Tags(tags) => {
                for tag in tags {
                    self.basic.encode_tag(&mut to, *tag).context(WriteTagSnafu)?;
                }
                Ok(tags.len() * 4)
            }
            U8(values) => {
                to.write_all(values).context(WriteBytesSnafu)?;
                Ok(values.len())
            }
            I8(values) => {
                for v in values {
                    to.write_all(&[*v as u8]).context(WriteBytesSnafu)?;
                }
                Ok(values.len())
            }
            U16(values) => {
                for v in values {
                    self.basic
                        .encode_us(&mut to, *v)
                        .context(WriteBinarySnafu { typ: "U16" })?;
                }
                Ok(values.len() * 2)
            }
            I16(values) => {
                for v in values {
                    self.basic
                        .encode_ss(&mut to, *v)
                        .context(WriteBinarySnafu { typ: "I16" })?;
                }
                Ok(values.len() * 2)
            }
            U32(values) => {
                for v in values {
                    self.basic
                        .encode_ul(&mut to, *v)
                        .context(WriteBinarySnafu { typ: "U32" })?;
                }
                Ok(values.len() * 4)
            }
            I32(values) => {
                for v in values {
                    self.basic
                        .encode_sl(&mut to, *v)
                        .context(WriteBinarySnafu { typ: "I32" })?;
                }
                Ok(values.len() * 4)
            }
            F32(values) => {
                for v in values {
                    self.basic
                        .encode_fl(&mut to, *v)
                        .context(WriteBinarySnafu { typ: "F32" })?;
                }
                Ok(values.len() * 4)
            }
            F64(values) => {
                for v in values {
                    self.basic
                        .encode_fd(&mut to, *v)
                        .context(WriteBinarySnafu { typ: "F64" })?;
                }
                Ok(values.len() * 8)
            }
        }
    }

    /// Encode a numeric text value (DS or IS) back into its text form,
    /// rewrapping collapsed scalars into `\`-separated lists.
    pub fn encode_numeric_text<W>(&self, mut to: W, value: &PrimitiveValue, vr: VR) -> Result<usize>
    where
        W: Write,
    {
        let text = numeric_text_form(value, vr);
        to.write_all(text.as_bytes()).context(WriteStringSnafu)?;
        Ok(text.len())
    }
}

/// Produce the `\`-separated textual form of a decoded DS or IS value.
pub(crate) fn numeric_text_form(value: &PrimitiveValue, vr: VR) -> String {
    use PrimitiveValue::*;
    match (vr, value) {
        (VR::IS, I32(values)) => values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("\\"),
        (VR::DS, F64(values)) => values
            .iter()
            .map(|v| format_ds(*v))
            .collect::<Vec<_>>()
            .join("\\"),
        // values assigned in text form pass through unchanged
        (_, Str(s)) => s.clone(),
        (_, Strs(s)) => s.join("\\"),
        (_, other) => numeric_text_fallback(other),
    }
}

fn numeric_text_fallback(value: &PrimitiveValue) -> String {
    use PrimitiveValue::*;
    match value {
        Empty => String::new(),
        I32(values) => values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("\\"),
        F64(values) => values
            .iter()
            .map(|v| format_ds(*v))
            .collect::<Vec<_>>()
            .join("\\"),
        other => format!("{:?}", other),
    }
}

/// Format a decimal string token: integral values print without
/// a fractional part, as commonly found in files.
fn format_ds(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

fn encode_collection_delimited<W, T, F>(
    to: &mut W,
    col: &[T],
    mut encode_element_fn: F,
) -> io::Result<usize>
where
    W: ?Sized + Write,
    F: FnMut(&mut W, &T) -> io::Result<usize>,
{
    let mut acc = 0;
    for (i, v) in col.iter().enumerate() {
        acc += encode_element_fn(to, v)?;
        if i < col.len() - 1 {
            to.write_all(b"\\")?;
            acc += 1;
        }
    }
    Ok(acc)
}
