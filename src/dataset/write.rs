//! A stateful data set writer.
//!
//! [`DataSetWriter`] emits the elements of a [`DataSet`] in ascending
//! tag order through an [`ElementEncoder`]. Sequences are written in
//! their canonical delimited form, and every value is padded to an
//! even byte count with a trailing zero.

use crate::dataset::DataSet;
use crate::encode::{self, ElementEncoder};
use crate::header::{DataElementHeader, Header, Length, Tag, VR};
use crate::pixeldata;
use crate::value::{DataElement, Value};
use snafu::{Backtrace, ResultExt, Snafu};
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not encode data element {}", tag))]
    EncodeElement {
        tag: Tag,
        #[snafu(backtrace)]
        source: encode::Error,
    },

    #[snafu(display("Could not write value of element {}", tag))]
    WriteValueData {
        tag: Tag,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not encode pixel data"))]
    EncodePixelData {
        #[snafu(backtrace)]
        source: pixeldata::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The per-tag VR map applied when writing,
/// overriding the representations recorded in the elements.
pub type WriteVrOverrides = BTreeMap<Tag, VR>;

/// A stateful writer of data sets over a byte sink.
#[derive(Debug)]
pub struct DataSetWriter<W> {
    to: W,
    encoder: ElementEncoder,
}

impl<W> DataSetWriter<W>
where
    W: Write,
{
    /// Create a new data set writer over the given sink.
    pub fn new(to: W, encoder: ElementEncoder) -> Self {
        DataSetWriter { to, encoder }
    }

    /// The current encoding mode.
    pub fn encoder(&self) -> ElementEncoder {
        self.encoder
    }

    /// Recover the inner sink.
    pub fn into_inner(self) -> W {
        self.to
    }

    /// Write every element of the data set, in ascending tag order.
    pub fn write_data_set(&mut self, ds: &DataSet, overrides: &WriteVrOverrides) -> Result<()> {
        for elem in ds {
            self.write_element(ds, elem, overrides)?;
        }
        Ok(())
    }

    /// Write a single data element.
    ///
    /// The containing data set provides the context needed to
    /// serialise native pixel data. Elements of the file meta group
    /// are always written in Explicit VR Little Endian,
    /// whatever the mode of this writer.
    pub fn write_element(
        &mut self,
        ds: &DataSet,
        elem: &DataElement,
        overrides: &WriteVrOverrides,
    ) -> Result<()> {
        let tag = elem.tag();
        let vr = overrides.get(&tag).copied().unwrap_or_else(|| elem.vr());

        let saved = self.encoder;
        if tag.group() <= 0x0002 {
            self.encoder = ElementEncoder::file_header_encoder();
        }
        let outcome = self.write_element_parts(ds, tag, vr, elem.value(), overrides);
        self.encoder = saved;
        outcome
    }

    fn write_element_parts(
        &mut self,
        ds: &DataSet,
        tag: Tag,
        vr: VR,
        value: &Value,
        overrides: &WriteVrOverrides,
    ) -> Result<()> {
        match value {
            Value::Sequence { items, .. } => {
                // sequences are normalised to the delimited form:
                // an undefined length header, one delimited item per
                // entry, and a closing sequence delimiter
                self.encoder
                    .encode_element_header(
                        &mut self.to,
                        DataElementHeader::new(tag, VR::SQ, Length::UNDEFINED),
                    )
                    .context(EncodeElementSnafu { tag })?;
                for item in items {
                    self.encoder
                        .encode_item_header(&mut self.to, Length::UNDEFINED)
                        .context(EncodeElementSnafu { tag })?;
                    self.write_data_set(item, overrides)?;
                    self.encoder
                        .encode_item_delimiter(&mut self.to)
                        .context(EncodeElementSnafu { tag })?;
                }
                self.encoder
                    .encode_sequence_delimiter(&mut self.to)
                    .context(EncodeElementSnafu { tag })?;
            }
            Value::PixelSequence {
                offset_table,
                fragments,
            } => {
                self.encoder
                    .encode_element_header(
                        &mut self.to,
                        DataElementHeader::new(tag, vr, Length::UNDEFINED),
                    )
                    .context(EncodeElementSnafu { tag })?;
                self.write_fragment(tag, offset_table)?;
                for fragment in fragments {
                    self.write_fragment(tag, fragment)?;
                }
                self.encoder
                    .encode_sequence_delimiter(&mut self.to)
                    .context(EncodeElementSnafu { tag })?;
            }
            Value::Pixels(pixels) => {
                let data = pixeldata::encode_native(ds, pixels, self.encoder.explicit_vr())
                    .context(EncodePixelDataSnafu)?;
                self.write_payload(tag, vr, &data)?;
            }
            Value::Primitive(value) => {
                let mut payload = Vec::with_capacity(value.calculate_byte_len());
                match vr {
                    VR::DS | VR::IS => self
                        .encoder
                        .encode_numeric_text(&mut payload, value, vr)
                        .context(EncodeElementSnafu { tag })?,
                    _ => self
                        .encoder
                        .encode_primitive(&mut payload, value)
                        .context(EncodeElementSnafu { tag })?,
                };
                self.write_payload(tag, vr, &payload)?;
            }
        }
        Ok(())
    }

    /// Write a defined-length element: header, payload,
    /// and the even-length pad byte when needed.
    fn write_payload(&mut self, tag: Tag, vr: VR, payload: &[u8]) -> Result<()> {
        let wire_len = (payload.len() + payload.len() % 2) as u32;
        self.encoder
            .encode_element_header(
                &mut self.to,
                DataElementHeader::new(tag, vr, Length(wire_len)),
            )
            .context(EncodeElementSnafu { tag })?;
        self.to
            .write_all(payload)
            .context(WriteValueDataSnafu { tag })?;
        if payload.len() % 2 == 1 {
            self.to.write_all(&[0u8]).context(WriteValueDataSnafu { tag })?;
        }
        Ok(())
    }

    /// Write one encapsulated pixel data item, padded to an even length.
    fn write_fragment(&mut self, tag: Tag, data: &[u8]) -> Result<()> {
        let wire_len = (data.len() + data.len() % 2) as u32;
        self.encoder
            .encode_item_header(&mut self.to, Length(wire_len))
            .context(EncodeElementSnafu { tag })?;
        self.to.write_all(data).context(WriteValueDataSnafu { tag })?;
        if data.len() % 2 == 1 {
            self.to.write_all(&[0u8]).context(WriteValueDataSnafu { tag })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{PrimitiveValue, C};
    use byteordered::Endianness;
    use smallvec::smallvec;

    fn write_set(ds: &DataSet, explicit: bool) -> Vec<u8> {
        let mut writer = DataSetWriter::new(
            Vec::new(),
            ElementEncoder::new(Endianness::Little, explicit),
        );
        writer
            .write_data_set(ds, &WriteVrOverrides::new())
            .unwrap();
        writer.into_inner()
    }

    #[test]
    fn write_simple_elements_in_tag_order() {
        let mut ds = DataSet::create_empty();
        ds.put(DataElement::new(
            Tag(0x0010, 0x0010),
            VR::PN,
            Value::from(PrimitiveValue::from("Doe^John")),
        ));
        ds.put(DataElement::new(
            Tag(0x0008, 0x0060),
            VR::CS,
            Value::from(PrimitiveValue::from("MR")),
        ));

        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00,
            b'D', b'o', b'e', b'^', b'J', b'o', b'h', b'n',
        ];
        assert_eq!(write_set(&ds, true), expected);
    }

    #[test]
    fn odd_values_are_padded_with_zero() {
        let mut ds = DataSet::create_empty();
        ds.put(DataElement::new(
            Tag(0x0008, 0x0018),
            VR::UI,
            Value::from(PrimitiveValue::from("1.2.3")),
        ));
        let out = write_set(&ds, true);
        // length field says 6, value is "1.2.3\0"
        assert_eq!(out[6..8], [0x06, 0x00]);
        assert_eq!(&out[8..], b"1.2.3\0");
    }

    #[test]
    fn write_sequence_in_delimited_form() {
        let mut item = DataSet::create_empty();
        item.put(DataElement::new(
            Tag(0x0008, 0x1150),
            VR::UI,
            Value::from(PrimitiveValue::from("1.2")),
        ));
        let items: C<DataSet> = smallvec![item];
        let mut ds = DataSet::create_empty();
        ds.put(DataElement::new_with_len(
            Tag(0x0008, 0x1110),
            VR::SQ,
            Length::UNDEFINED,
            Value::Sequence {
                items,
                size: Length::UNDEFINED,
            },
        ));

        #[rustfmt::skip]
        let expected: &[u8] = &[
            // SQ header with undefined length
            0x08, 0x00, 0x10, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            // item with undefined length
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            // the item's single element, padded
            0x08, 0x00, 0x50, 0x11, b'U', b'I', 0x04, 0x00, b'1', b'.', b'2', 0x00,
            // item delimiter, sequence delimiter
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(write_set(&ds, true), expected);
    }

    #[test]
    fn write_implicit_mode_omits_vr() {
        let mut ds = DataSet::new(Endianness::Little, false);
        ds.put(DataElement::new(
            Tag(0x0008, 0x0060),
            VR::CS,
            Value::from(PrimitiveValue::from("CT")),
        ));
        assert_eq!(
            write_set(&ds, false),
            [0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00, b'C', b'T']
        );
    }

    #[test]
    fn meta_group_stays_explicit_little_in_implicit_mode() {
        let mut ds = DataSet::new(Endianness::Little, false);
        ds.put(DataElement::new(
            Tag(0x0002, 0x0010),
            VR::UI,
            Value::from(PrimitiveValue::from("1.2.840.10008.1.2")),
        ));
        let out = write_set(&ds, false);
        // VR bytes are present despite the implicit mode
        assert_eq!(&out[4..6], b"UI");
    }

    #[test]
    fn write_encapsulated_fragments() {
        let mut ds = DataSet::create_empty();
        ds.put(DataElement::new_with_len(
            Tag(0x7FE0, 0x0010),
            VR::OB,
            Length::UNDEFINED,
            Value::PixelSequence {
                offset_table: vec![],
                fragments: vec![vec![0xDE, 0xAD, 0xBE]],
            },
        ));
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            // empty basic offset table
            0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // fragment, padded to 4 bytes
            0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, 0xDE, 0xAD, 0xBE, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(write_set(&ds, true), expected);
    }

    #[test]
    fn vr_override_applies_on_write() {
        let mut ds = DataSet::create_empty();
        ds.put(DataElement::new(
            Tag(0x0018, 0x1170),
            VR::IS,
            Value::from(PrimitiveValue::I32(smallvec![30])),
        ));
        let mut overrides = WriteVrOverrides::new();
        overrides.insert(Tag(0x0018, 0x1170), VR::DS);
        let mut writer = DataSetWriter::new(
            Vec::new(),
            ElementEncoder::new(Endianness::Little, true),
        );
        writer.write_data_set(&ds, &overrides).unwrap();
        let out = writer.into_inner();
        assert_eq!(&out[4..6], b"DS");
        assert_eq!(&out[8..], b"30");
    }
}
