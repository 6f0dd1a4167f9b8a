//! A stateful data set reader.
//!
//! [`StatefulReader`] drives an [`ElementDecoder`] over a positioned
//! byte source, materialising data elements into a [`DataSet`]:
//! it handles the graceful end-of-stream terminator, group bounds,
//! caller-supplied VR overrides, recursive sequences and items in both
//! their defined and delimited length forms, and the two shapes of
//! pixel data.

use crate::dataset::DataSet;
use crate::decode::{self, ElementDecoder};
use crate::dictionary;
use crate::header::{
    DataElementHeader, Length, SequenceItemHeader, SequenceItemHeaderError, Tag, VR,
};
use crate::pixeldata;
use crate::value::{C, DataElement, PrimitiveValue, Value};
use smallvec::smallvec;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::collections::BTreeMap;
use std::io::{Read, Seek, SeekFrom};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not decode element header at position {}", position))]
    DecodeElementHeader {
        position: u64,
        #[snafu(backtrace)]
        source: decode::Error,
    },

    #[snafu(display("Could not decode item header at position {}", position))]
    DecodeItemHeader {
        position: u64,
        #[snafu(backtrace)]
        source: decode::Error,
    },

    #[snafu(display("Expected item tag in sequence at position {}", position))]
    ExpectedItemTag {
        position: u64,
        #[snafu(backtrace)]
        source: SequenceItemHeaderError,
    },

    #[snafu(display("Unexpected end of stream at position {}", position))]
    UnexpectedEndOfStream { position: u64, backtrace: Backtrace },

    #[snafu(display("Unexpected delimiter at position {}", position))]
    UnexpectedDelimiter { position: u64, backtrace: Backtrace },

    #[snafu(display("Could not read value from source at position {}", position))]
    ReadValueData {
        position: u64,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not move source cursor at position {}", position))]
    SeekSource {
        position: u64,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display(
        "Undefined value length of element tagged {} at position {}",
        tag,
        position
    ))]
    UndefinedValueLength {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },

    #[snafu(display(
        "No value representation available for tag {} at position {}",
        tag,
        position
    ))]
    UnknownVr {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },

    #[snafu(display("Invalid integer text value at position {}", position))]
    ReadInt {
        position: u64,
        source: std::num::ParseIntError,
    },

    #[snafu(display("Invalid decimal text value at position {}", position))]
    ReadFloat {
        position: u64,
        source: std::num::ParseFloatError,
    },

    #[snafu(display("Attempted to read non-primitive value at position {}", position))]
    NonPrimitiveType { position: u64, backtrace: Backtrace },

    #[snafu(display("Could not decode pixel data at position {}", position))]
    DecodePixelData {
        position: u64,
        #[snafu(backtrace)]
        source: pixeldata::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A caller-supplied override of an element's value representation,
/// applied before the dictionary and the wire take effect.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VrOverride {
    /// Decode the element with this value representation.
    Use(VR),
    /// Do not materialise the element:
    /// advance past its value (padded to an even byte count).
    Skip,
}

/// The per-tag VR override map.
///
/// The entry under `(0x0000,0x0000)` is the wildcard:
/// it supplies the representation for tags otherwise unknown
/// to the dictionary.
pub type VrOverrides = BTreeMap<Tag, VrOverride>;

/// The initial capacity of the reader's scratch buffer.
const READER_BUFFER_CAPACITY: usize = 2048;

/// How far an element loop extends.
#[derive(Debug, Clone, Copy)]
enum Limit {
    /// Until end of stream or a tag with group above the bound.
    Root { max_group: Option<u16> },
    /// Until the reader reaches the given absolute position.
    Bytes(u64),
    /// Until an item delimiter is read.
    Delimited,
}

/// A stateful reader of data sets over a positioned byte source.
#[derive(Debug)]
pub struct StatefulReader<S> {
    from: S,
    decoder: ElementDecoder,
    /// the assumed position of the reader source
    position: u64,
    buffer: Vec<u8>,
}

impl<S> StatefulReader<S>
where
    S: Read + Seek,
{
    /// Create a new stateful reader over the given source,
    /// assuming it is positioned at the beginning.
    pub fn new(from: S, decoder: ElementDecoder) -> Self {
        StatefulReader {
            from,
            decoder,
            position: 0,
            buffer: Vec::with_capacity(READER_BUFFER_CAPACITY),
        }
    }

    /// The current decoding mode.
    pub fn decoder(&self) -> ElementDecoder {
        self.decoder
    }

    /// Change the decoding mode for the elements that follow,
    /// as decided by the transfer syntax.
    pub fn set_decoder(&mut self, decoder: ElementDecoder) {
        self.decoder = decoder;
    }

    /// The number of bytes read so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read a complete data set in the current mode,
    /// until end of stream or a tag with group above `max_group`.
    pub fn read_data_set(
        &mut self,
        overrides: &VrOverrides,
        max_group: Option<u16>,
    ) -> Result<DataSet> {
        let mut ds = DataSet::new(self.decoder.endianness(), self.decoder.explicit_vr());
        self.read_into(&mut ds, overrides, max_group)?;
        Ok(ds)
    }

    /// Read data elements into an existing data set,
    /// until end of stream or a tag with group above `max_group`.
    /// The bounding tag itself is not consumed.
    pub fn read_into(
        &mut self,
        ds: &mut DataSet,
        overrides: &VrOverrides,
        max_group: Option<u16>,
    ) -> Result<()> {
        self.read_elements(ds, overrides, Limit::Root { max_group })
    }

    // ---------------- private methods ---------------------

    fn read_elements(
        &mut self,
        ds: &mut DataSet,
        overrides: &VrOverrides,
        limit: Limit,
    ) -> Result<()> {
        loop {
            if let Limit::Bytes(end) = limit {
                if self.position >= end {
                    break;
                }
            }

            let tag = match self
                .decoder
                .try_decode_tag(&mut self.from)
                .context(DecodeElementHeaderSnafu {
                    position: self.position,
                })? {
                Some(tag) => tag,
                None => match limit {
                    // ending cleanly before an element is the graceful terminator
                    Limit::Root { .. } => break,
                    _ => {
                        return UnexpectedEndOfStreamSnafu {
                            position: self.position,
                        }
                        .fail()
                    }
                },
            };
            self.position += 4;

            if let Limit::Root {
                max_group: Some(max_group),
            } = limit
            {
                if tag.group() > max_group {
                    // leave the bounding tag unconsumed
                    self.seek_relative(-4)?;
                    break;
                }
            }

            if tag == Tag(0xFFFE, 0xE00D) {
                // item delimiter: consume the zero length field and finish
                self.skip_bytes(4)?;
                break;
            }

            // the meta group is self-describing:
            // force explicit VR little endian while within it
            let saved = self.decoder;
            if tag.group() <= 0x0002 {
                self.decoder = ElementDecoder::file_header_decoder();
            }
            let outcome = self.read_element(ds, tag, overrides);
            self.decoder = saved;
            outcome?;
        }
        Ok(())
    }

    fn read_element(
        &mut self,
        ds: &mut DataSet,
        tag: Tag,
        overrides: &VrOverrides,
    ) -> Result<()> {
        let (header, bytes_read) = self
            .decoder
            .decode_header_with_tag(&mut self.from, tag)
            .context(DecodeElementHeaderSnafu {
                position: self.position,
            })?;
        self.position += bytes_read as u64 - 4;

        let vr = match overrides.get(&tag) {
            Some(VrOverride::Skip) => return self.skip_element(&header),
            Some(VrOverride::Use(vr)) => *vr,
            None => {
                // private tags outside the creator range keep the UN
                // fallback; any other tag unknown to the dictionary
                // has no usable representation in implicit mode
                if !self.decoder.explicit_vr()
                    && header.vr == VR::UN
                    && !tag.is_private()
                    && dictionary::vr_of(tag).is_none()
                {
                    match overrides.get(&Tag(0x0000, 0x0000)) {
                        Some(VrOverride::Use(vr)) => *vr,
                        Some(VrOverride::Skip) => return self.skip_element(&header),
                        None => {
                            return UnknownVrSnafu {
                                tag,
                                position: self.position,
                            }
                            .fail()
                        }
                    }
                } else {
                    header.vr
                }
            }
        };
        let header = DataElementHeader::new(tag, vr, header.len);
        ds.record_vr(tag, vr);

        let elem = if tag == Tag(0x7FE0, 0x0010) && header.len.is_undefined() {
            self.read_encapsulated_pixel_data(&header)?
        } else if vr == VR::SQ || header.len.is_undefined() {
            self.read_sequence(&header, overrides)?
        } else if tag == Tag(0x7FE0, 0x0010) {
            self.read_native_pixel_data(ds, &header)?
        } else {
            let value = self.read_value(&header)?;
            self.consume_padding(&header)?;
            DataElement::new_with_len(tag, vr, header.len, Value::Primitive(value))
        };
        ds.put(elem);
        Ok(())
    }

    fn skip_element(&mut self, header: &DataElementHeader) -> Result<()> {
        let len = self.require_known_length(header)?;
        self.skip_bytes((len + len % 2) as u64)
    }

    fn consume_padding(&mut self, header: &DataElementHeader) -> Result<()> {
        if let Some(len) = header.len.get() {
            if len % 2 == 1 {
                self.skip_bytes(1)?;
            }
        }
        Ok(())
    }

    fn skip_bytes(&mut self, count: u64) -> Result<()> {
        self.from
            .seek(SeekFrom::Current(count as i64))
            .context(SeekSourceSnafu {
                position: self.position,
            })?;
        self.position += count;
        Ok(())
    }

    fn seek_relative(&mut self, offset: i64) -> Result<()> {
        self.from
            .seek(SeekFrom::Current(offset))
            .context(SeekSourceSnafu {
                position: self.position,
            })?;
        self.position = (self.position as i64 + offset) as u64;
        Ok(())
    }

    fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        let header = match self.decoder.decode_item_header(&mut self.from) {
            Ok(header) => header,
            Err(decode::Error::BadSequenceHeader { source }) => {
                return Err(source).context(ExpectedItemTagSnafu {
                    position: self.position,
                })
            }
            Err(e) => {
                return Err(e).context(DecodeItemHeaderSnafu {
                    position: self.position,
                })
            }
        };
        self.position += 8;
        Ok(header)
    }

    fn read_sequence(
        &mut self,
        header: &DataElementHeader,
        overrides: &VrOverrides,
    ) -> Result<DataElement> {
        let mut items: C<DataSet> = smallvec![];

        if let Some(len) = header.len.get() {
            // defined length: consume exactly this many bytes of items
            let end = self.position + u64::from(len);
            while self.position < end {
                match self.decode_item_header()? {
                    SequenceItemHeader::Item { len } => {
                        items.push(self.read_item(len, overrides)?);
                    }
                    SequenceItemHeader::SequenceDelimiter => break,
                    SequenceItemHeader::ItemDelimiter => {
                        return UnexpectedDelimiterSnafu {
                            position: self.position,
                        }
                        .fail()
                    }
                }
            }
        } else {
            // undefined length: read items until the sequence delimiter
            loop {
                match self.decode_item_header()? {
                    SequenceItemHeader::Item { len } => {
                        items.push(self.read_item(len, overrides)?);
                    }
                    SequenceItemHeader::SequenceDelimiter => break,
                    SequenceItemHeader::ItemDelimiter => {
                        return UnexpectedDelimiterSnafu {
                            position: self.position,
                        }
                        .fail()
                    }
                }
            }
        }

        Ok(DataElement::new_with_len(
            header.tag,
            VR::SQ,
            header.len,
            Value::Sequence {
                items,
                size: header.len,
            },
        ))
    }

    fn read_item(&mut self, len: Length, overrides: &VrOverrides) -> Result<DataSet> {
        let mut ds = DataSet::new_item(
            self.decoder.endianness(),
            self.decoder.explicit_vr(),
            len,
        );
        let limit = match len.get() {
            Some(len) => Limit::Bytes(self.position + u64::from(len)),
            None => Limit::Delimited,
        };
        self.read_elements(&mut ds, overrides, limit)?;
        Ok(ds)
    }

    fn read_native_pixel_data(
        &mut self,
        ds: &DataSet,
        header: &DataElementHeader,
    ) -> Result<DataElement> {
        let len = self.require_known_length(header)?;
        let mut data = vec![0u8; len];
        self.from
            .read_exact(&mut data)
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        self.consume_padding(header)?;

        let pixels = pixeldata::decode_native(ds, header.vr, &data).context(
            DecodePixelDataSnafu {
                position: self.position,
            },
        )?;
        Ok(DataElement::new_with_len(
            header.tag,
            header.vr,
            header.len,
            Value::Pixels(pixels),
        ))
    }

    fn read_encapsulated_pixel_data(
        &mut self,
        header: &DataElementHeader,
    ) -> Result<DataElement> {
        let mut offset_table = Vec::new();
        let mut fragments = Vec::new();
        let mut first = true;

        loop {
            match self.decode_item_header()? {
                SequenceItemHeader::Item { len } => {
                    let len = len.get().context(UndefinedValueLengthSnafu {
                        tag: Tag(0xFFFE, 0xE000),
                        position: self.position,
                    })? as usize;
                    let mut buf = vec![0u8; len];
                    self.from
                        .read_exact(&mut buf)
                        .context(ReadValueDataSnafu {
                            position: self.position,
                        })?;
                    self.position += len as u64;
                    if first {
                        // the first item is the Basic Offset Table
                        offset_table = buf;
                        first = false;
                    } else {
                        fragments.push(buf);
                    }
                }
                SequenceItemHeader::SequenceDelimiter => break,
                SequenceItemHeader::ItemDelimiter => {
                    return UnexpectedDelimiterSnafu {
                        position: self.position,
                    }
                    .fail()
                }
            }
        }

        Ok(DataElement::new_with_len(
            header.tag,
            header.vr,
            header.len,
            Value::PixelSequence {
                offset_table,
                fragments,
            },
        ))
    }

    fn require_known_length(&self, header: &DataElementHeader) -> Result<usize> {
        header
            .len
            .get()
            .map(|len| len as usize)
            .context(UndefinedValueLengthSnafu {
                position: self.position,
                tag: header.tag,
            })
    }

    /// Eagerly read the following data in the source as a primitive value,
    /// interpreted according to the header's value representation.
    pub fn read_value(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        if header.len == Length(0) {
            return Ok(PrimitiveValue::Empty);
        }
        match header.vr {
            VR::AE | VR::AS | VR::CS | VR::DA | VR::DT | VR::LO | VR::SH | VR::TM | VR::UI => {
                self.read_value_strs(header)
            }
            VR::PN => self.read_value_pn(header),
            VR::ST | VR::LT | VR::UT => self.read_value_str(header),
            VR::DS => self.read_value_ds(header),
            VR::IS => self.read_value_is(header),
            VR::AT => self.read_value_tag(header),
            VR::OB | VR::UN => self.read_value_ob(header),
            VR::US | VR::OW => self.read_value_us(header),
            VR::SS => self.read_value_ss(header),
            VR::UL => self.read_value_ul(header),
            VR::SL => self.read_value_sl(header),
            VR::FL | VR::OF => self.read_value_fl(header),
            VR::FD => self.read_value_fd(header),
            VR::SQ => NonPrimitiveTypeSnafu {
                position: self.position,
            }
            .fail(),
        }
    }

    fn fill_buffer(&mut self, len: usize) -> Result<()> {
        self.buffer.resize_with(len, Default::default);
        self.from
            .read_exact(&mut self.buffer)
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(())
    }

    fn read_value_strs(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        self.fill_buffer(len)?;

        let parts: C<String> = self
            .buffer
            .split(|v| *v == b'\\')
            .map(|slice| {
                let text = String::from_utf8_lossy(slice);
                text.trim_matches(|c| c == ' ' || c == '\0').to_string()
            })
            .collect();
        Ok(PrimitiveValue::Strs(parts))
    }

    fn read_value_pn(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        self.fill_buffer(len)?;

        // person names keep their whitespace, only NUL padding is removed
        let parts: C<String> = self
            .buffer
            .split(|v| *v == b'\\')
            .map(|slice| {
                String::from_utf8_lossy(slice)
                    .trim_end_matches('\0')
                    .to_string()
            })
            .collect();
        Ok(PrimitiveValue::Strs(parts))
    }

    fn read_value_str(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        self.fill_buffer(len)?;
        Ok(PrimitiveValue::Str(
            String::from_utf8_lossy(&self.buffer).into_owned(),
        ))
    }

    fn read_value_ds(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        self.fill_buffer(len)?;

        let buffer = std::mem::take(&mut self.buffer);
        let parts: Result<C<f64>> = buffer
            .split(|v| *v == b'\\')
            .map(|slice| {
                let text = String::from_utf8_lossy(slice);
                let text = text.trim_matches(|c| c == ' ' || c == '\0');
                if text.is_empty() {
                    // empty tokens decode as zero by policy
                    Ok(0.)
                } else {
                    text.parse::<f64>().context(ReadFloatSnafu {
                        position: self.position,
                    })
                }
            })
            .collect();
        self.buffer = buffer;
        Ok(PrimitiveValue::F64(parts?))
    }

    fn read_value_is(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        self.fill_buffer(len)?;

        let buffer = std::mem::take(&mut self.buffer);
        let parts: Result<C<i32>> = buffer
            .split(|v| *v == b'\\')
            .map(|slice| {
                let text = String::from_utf8_lossy(slice);
                let text = text.trim_matches(|c| c == ' ' || c == '\0');
                if text.is_empty() {
                    Ok(0)
                } else {
                    text.parse::<i32>().context(ReadIntSnafu {
                        position: self.position,
                    })
                }
            })
            .collect();
        self.buffer = buffer;
        Ok(PrimitiveValue::I32(parts?))
    }

    fn read_value_tag(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        let basic = self.decoder.basic();
        let ntags = len >> 2;
        let parts: Result<C<Tag>> = (0..ntags)
            .map(|_| {
                basic
                    .decode_tag(&mut self.from)
                    .context(ReadValueDataSnafu {
                        position: self.position,
                    })
            })
            .collect();
        self.position += len as u64;
        Ok(PrimitiveValue::Tags(parts?))
    }

    fn read_value_ob(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        let mut buf = smallvec![0u8; len];
        self.from.read_exact(&mut buf).context(ReadValueDataSnafu {
            position: self.position,
        })?;
        self.position += len as u64;
        Ok(PrimitiveValue::U8(buf))
    }

    fn read_value_us(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        let mut vec = smallvec![0u16; len >> 1];
        self.decoder
            .basic()
            .decode_us_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::U16(vec))
    }

    fn read_value_ss(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        let mut vec = smallvec![0i16; len >> 1];
        self.decoder
            .basic()
            .decode_ss_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::I16(vec))
    }

    fn read_value_ul(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        let mut vec = smallvec![0u32; len >> 2];
        self.decoder
            .basic()
            .decode_ul_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::U32(vec))
    }

    fn read_value_sl(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        let mut vec = smallvec![0i32; len >> 2];
        self.decoder
            .basic()
            .decode_sl_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::I32(vec))
    }

    fn read_value_fl(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        let mut vec = smallvec![0f32; len >> 2];
        self.decoder
            .basic()
            .decode_fl_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::F32(vec))
    }

    fn read_value_fd(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        let mut vec = smallvec![0f64; len >> 3];
        self.decoder
            .basic()
            .decode_fd_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::F64(vec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteordered::Endianness;
    use std::io::Cursor;

    fn reader(data: &[u8], explicit: bool) -> StatefulReader<Cursor<&[u8]>> {
        StatefulReader::new(
            Cursor::new(data),
            ElementDecoder::new(Endianness::Little, explicit),
        )
    }

    #[test]
    fn read_simple_data_set() {
        // (0008,0060) CS "MR", (0010,0010) PN "Doe^John"
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00,
            b'D', b'o', b'e', b'^', b'J', b'o', b'h', b'n',
        ];
        let mut reader = reader(data, true);
        let ds = reader.read_data_set(&VrOverrides::new(), None).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(
            ds.element_by_name("Modality").unwrap().to_str().unwrap(),
            "MR"
        );
        assert_eq!(
            ds.element_by_name("PatientName").unwrap().to_str().unwrap(),
            "Doe^John"
        );
        assert_eq!(ds.observed_vrs()[&Tag(0x0008, 0x0060)], VR::CS);
    }

    #[test]
    fn max_group_leaves_tag_unconsumed() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x00, 0x00,
        ];
        let mut reader = reader(data, true);
        let ds = reader
            .read_data_set(&VrOverrides::new(), Some(0x0008))
            .unwrap();
        assert_eq!(ds.len(), 1);
        assert!(ds.contains(Tag(0x0008, 0x0060)));
        assert!(!ds.contains(Tag(0x0010, 0x0010)));
        // the reader stopped right before the out-of-bound tag
        assert_eq!(reader.position(), 10);
    }

    #[test]
    fn skip_override_drops_element() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00, b'X', b'^', b'Y', b' ',
            0x18, 0x00, 0x50, 0x00, b'D', b'S', 0x02, 0x00, b'1', b'0',
        ];
        let mut overrides = VrOverrides::new();
        overrides.insert(Tag(0x0010, 0x0010), VrOverride::Skip);
        let mut reader = reader(data, true);
        let ds = reader.read_data_set(&overrides, None).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(!ds.contains(Tag(0x0010, 0x0010)));
        assert!(ds.contains(Tag(0x0018, 0x0050)));
    }

    #[test]
    fn unknown_tag_in_implicit_mode() {
        // an even-group tag unknown to the dictionary
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x08, 0x00, 0x99, 0x99, 0x02, 0x00, 0x00, 0x00, b'A', b'B',
        ];
        let mut reader = reader(data, false);
        let err = reader
            .read_data_set(&VrOverrides::new(), None)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownVr { .. }));

        // the wildcard override supplies the missing VR
        let mut overrides = VrOverrides::new();
        overrides.insert(Tag(0x0000, 0x0000), VrOverride::Use(VR::SH));
        let mut reader = StatefulReader::new(
            Cursor::new(data),
            ElementDecoder::new(Endianness::Little, false),
        );
        let ds = reader.read_data_set(&overrides, None).unwrap();
        assert_eq!(
            ds.element(Tag(0x0008, 0x9999)).unwrap().to_str().unwrap(),
            "AB"
        );
    }

    #[test]
    fn private_tags_fall_back_to_un() {
        // a private tag outside the creator range decodes as raw bytes
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x09, 0x00, 0x02, 0x10, 0x02, 0x00, 0x00, 0x00, 0xAB, 0xCD,
        ];
        let mut reader1 = reader(data, false);
        let ds = reader1.read_data_set(&VrOverrides::new(), None).unwrap();
        let elem = ds.element(Tag(0x0009, 0x1002)).unwrap();
        assert_eq!(elem.vr(), VR::UN);
        match elem.value() {
            Value::Primitive(PrimitiveValue::U8(bytes)) => {
                assert_eq!(&bytes[..], &[0xAB, 0xCD]);
            }
            other => panic!("unexpected value {:?}", other),
        }
        // the private creator range still resolves to LO
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x09, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, b'A', b'C', b'M', b'E',
        ];
        let mut reader2 = reader(data, false);
        let ds = reader2.read_data_set(&VrOverrides::new(), None).unwrap();
        let elem = ds.element(Tag(0x0009, 0x0010)).unwrap();
        assert_eq!(elem.vr(), VR::LO);
        assert_eq!(elem.to_str().unwrap(), "ACME");
    }

    #[test]
    fn read_sequence_with_undefined_length() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0008,1110) SQ, undefined length
            0x08, 0x00, 0x10, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            // item, undefined length
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            // (0008,1150) UI "1.2" (padded)
            0x08, 0x00, 0x50, 0x11, b'U', b'I', 0x04, 0x00, b'1', b'.', b'2', 0x00,
            // item delimiter
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // item, defined length 12
            0xFE, 0xFF, 0x00, 0xE0, 0x0C, 0x00, 0x00, 0x00,
            0x08, 0x00, 0x50, 0x11, b'U', b'I', 0x04, 0x00, b'3', b'.', b'4', 0x00,
            // sequence delimiter
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // (0010,0040) CS "F " after the sequence
            0x10, 0x00, 0x40, 0x00, b'C', b'S', 0x02, 0x00, b'F', b' ',
        ];
        let mut reader = reader(data, true);
        let ds = reader.read_data_set(&VrOverrides::new(), None).unwrap();

        let seq = ds.element(Tag(0x0008, 0x1110)).unwrap();
        let items = seq.value().items().expect("should be a sequence");
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0]
                .element(Tag(0x0008, 0x1150))
                .unwrap()
                .to_str()
                .unwrap(),
            "1.2"
        );
        assert_eq!(
            items[1]
                .element(Tag(0x0008, 0x1150))
                .unwrap()
                .to_str()
                .unwrap(),
            "3.4"
        );
        assert_eq!(
            ds.element(Tag(0x0010, 0x0040)).unwrap().to_str().unwrap(),
            "F"
        );
    }

    #[test]
    fn read_sequence_with_defined_length() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0008,1110) SQ, defined length 20
            0x08, 0x00, 0x10, 0x11, b'S', b'Q', 0x00, 0x00, 0x14, 0x00, 0x00, 0x00,
            // item, defined length 12
            0xFE, 0xFF, 0x00, 0xE0, 0x0C, 0x00, 0x00, 0x00,
            0x08, 0x00, 0x50, 0x11, b'U', b'I', 0x04, 0x00, b'1', b'.', b'2', 0x00,
            // next element, directly after the sequence bytes
            0x10, 0x00, 0x40, 0x00, b'C', b'S', 0x02, 0x00, b'M', b' ',
        ];
        let mut reader = reader(data, true);
        let ds = reader.read_data_set(&VrOverrides::new(), None).unwrap();
        let seq = ds.element(Tag(0x0008, 0x1110)).unwrap();
        assert_eq!(seq.value().items().unwrap().len(), 1);
        assert_eq!(
            ds.element(Tag(0x0010, 0x0040)).unwrap().to_str().unwrap(),
            "M"
        );
    }

    #[test]
    fn bad_sequence_framing() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0008,1110) SQ, undefined length
            0x08, 0x00, 0x10, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            // not an item tag
            0x08, 0x00, 0x50, 0x11, b'U', b'I', 0x04, 0x00, b'1', b'.', b'2', 0x00,
        ];
        let mut reader = reader(data, true);
        let err = reader
            .read_data_set(&VrOverrides::new(), None)
            .unwrap_err();
        assert!(matches!(err, Error::ExpectedItemTag { .. }));
    }

    #[test]
    fn read_encapsulated_pixel_data() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (7FE0,0010) OB, undefined length
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            // basic offset table, empty
            0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // fragment of 4 bytes
            0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, 0xDE, 0xAD, 0xBE, 0xEF,
            // sequence delimiter
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        let mut reader = reader(data, true);
        let ds = reader.read_data_set(&VrOverrides::new(), None).unwrap();
        match ds.get(Tag(0x7FE0, 0x0010)).unwrap() {
            Value::PixelSequence {
                offset_table,
                fragments,
            } => {
                assert!(offset_table.is_empty());
                assert_eq!(fragments.len(), 1);
                assert_eq!(fragments[0], [0xDE, 0xAD, 0xBE, 0xEF]);
            }
            other => panic!("expected pixel sequence, got {:?}", other),
        }
    }

    #[test]
    fn numeric_text_values() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0028,1052) DS "-1024\\" - note the trailing empty token
            0x28, 0x00, 0x52, 0x10, b'D', b'S', 0x06, 0x00, b'-', b'1', b'0', b'2', b'4', b'\\',
            // (0020,0013) IS "4 "
            0x20, 0x00, 0x13, 0x00, b'I', b'S', 0x02, 0x00, b'4', b' ',
        ];
        let mut reader = reader(data, true);
        let ds = reader.read_data_set(&VrOverrides::new(), None).unwrap();
        let intercept = ds.element(Tag(0x0028, 0x1052)).unwrap();
        match intercept.value() {
            Value::Primitive(PrimitiveValue::F64(v)) => {
                assert_eq!(&v[..], &[-1024.0, 0.0]);
            }
            other => panic!("unexpected value {:?}", other),
        }
        assert_eq!(ds.element(Tag(0x0020, 0x0013)).unwrap().to_int().unwrap(), 4);
    }

    #[test]
    fn malformed_numeric_text() {
        let data: &[u8] = &[
            0x20, 0x00, 0x13, 0x00, b'I', b'S', 0x04, 0x00, b'4', b'x', b'2', b' ',
        ];
        let mut reader = reader(data, true);
        let err = reader
            .read_data_set(&VrOverrides::new(), None)
            .unwrap_err();
        assert!(matches!(err, Error::ReadInt { .. }));
    }

    #[test]
    fn eof_mid_element_is_fatal() {
        // header declares 8 bytes of value, only 2 present
        let data: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00, b'D', b'o',
        ];
        let mut reader = reader(data, true);
        assert!(reader.read_data_set(&VrOverrides::new(), None).is_err());
    }
}
