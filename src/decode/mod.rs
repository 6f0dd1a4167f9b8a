//! Decoding of data element headers.
//!
//! A single [`ElementDecoder`] covers the full transfer syntax matrix:
//! the byte order and the presence of explicit value representations
//! are both selected at run time, as inferred from the file.

use crate::dictionary;
use crate::header::{DataElementHeader, Length, SequenceItemHeader, Tag, VR};
use byteordered::Endianness;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read};

pub mod basic;

pub use basic::BasicDecoder;

/// Module-level error type:
/// for errors which may occur while decoding element headers.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to read the beginning (tag) of the header"))]
    ReadHeaderTag {
        backtrace: Option<Backtrace>,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's value representation"))]
    ReadVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's reserved bytes"))]
    ReadReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's element length field"))]
    ReadLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the item header"))]
    ReadItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Bad sequence item header"))]
    BadSequenceHeader {
        #[snafu(backtrace)]
        source: crate::header::SequenceItemHeaderError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A decoder of data element headers,
/// parameterised over the two wire-format axes decided by the
/// transfer syntax: byte order and explicit value representations.
///
/// Item and delimiter tags (group `0xFFFE`) are always decoded in the
/// implicit form, regardless of the explicitness in effect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElementDecoder {
    basic: BasicDecoder,
    explicit_vr: bool,
}

impl ElementDecoder {
    /// Create an element decoder for the given decoding mode.
    pub fn new(endianness: Endianness, explicit_vr: bool) -> Self {
        ElementDecoder {
            basic: BasicDecoder::new(endianness),
            explicit_vr,
        }
    }

    /// Obtain an element decoder for the file meta group,
    /// which is always in Explicit VR Little Endian.
    pub fn file_header_decoder() -> Self {
        ElementDecoder::new(Endianness::Little, true)
    }

    /// Retrieve the decoder for primitive values under this byte order.
    pub fn basic(&self) -> BasicDecoder {
        self.basic
    }

    /// Retrieve the byte order in effect.
    pub fn endianness(&self) -> Endianness {
        self.basic.endianness()
    }

    /// Whether value representations are read from the wire.
    pub fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Decode an element tag, expecting more data.
    ///
    /// Unlike [`try_decode_tag`](ElementDecoder::try_decode_tag),
    /// a clean end of stream is an error here.
    pub fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        self.basic.decode_tag(source).context(ReadHeaderTagSnafu)
    }

    /// Decode an element tag, where a clean end of stream
    /// at the first byte yields `None` rather than an error.
    ///
    /// This is the graceful terminator of a data set:
    /// ending exactly before a new element is not a failure,
    /// whereas ending within one is.
    pub fn try_decode_tag<S>(&self, source: &mut S) -> Result<Option<Tag>>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 4];
        let mut read = 0;
        while read < buf.len() {
            let n = source.read(&mut buf[read..]).context(ReadHeaderTagSnafu)?;
            if n == 0 {
                if read == 0 {
                    return Ok(None);
                }
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof))
                    .context(ReadHeaderTagSnafu);
            }
            read += n;
        }
        self.basic
            .decode_tag(&buf[..])
            .context(ReadHeaderTagSnafu)
            .map(Some)
    }

    /// Decode the remainder of an element header once its tag is known.
    /// Returns the header and the number of bytes read for it,
    /// including the 4 bytes of the tag itself.
    pub fn decode_header_with_tag<S>(
        &self,
        source: &mut S,
        tag: Tag,
    ) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        // item and delimiter headers carry no VR nor reserved field
        if tag.group() == 0xFFFE {
            let len = self.basic.decode_ul(source).context(ReadLengthSnafu)?;
            return Ok((DataElementHeader::new(tag, VR::UN, Length(len)), 8));
        }

        if self.explicit_vr {
            let mut buf = [0u8; 2];
            source.read_exact(&mut buf).context(ReadVrSnafu)?;
            let vr = VR::from_binary(buf).unwrap_or(VR::UN);

            let (len, bytes_read) = if vr.uses_long_length() {
                // 2 reserved bytes, then a 4 byte length
                source.read_exact(&mut buf).context(ReadReservedSnafu)?;
                let len = self.basic.decode_ul(source).context(ReadLengthSnafu)?;
                (len, 12)
            } else {
                let len = self.basic.decode_us(source).context(ReadLengthSnafu)?;
                (u32::from(len), 8)
            };

            Ok((DataElementHeader::new(tag, vr, Length(len)), bytes_read))
        } else {
            let len = self.basic.decode_ul(source).context(ReadLengthSnafu)?;

            // VR resolution is done with the help of the data dictionary.
            // In the implicit form, Pixel Data (7FE0,0010)
            // and Overlay Data (60xx,3000) must be read as OW,
            // and group length elements as UL.
            let vr = if tag == Tag(0x7FE0, 0x0010) || (tag.0 >> 8 == 0x60 && tag.1 == 0x3000) {
                VR::OW
            } else if tag.element() == 0x0000 {
                VR::UL
            } else {
                dictionary::vr_of(tag).unwrap_or(VR::UN)
            };
            Ok((DataElementHeader::new(tag, vr, Length(len)), 8))
        }
    }

    /// Decode a full element header from the source.
    pub fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        let tag = self.decode_tag(source)?;
        self.decode_header_with_tag(source, tag)
    }

    /// Decode a sequence item header from the source.
    /// Only the item, item delimiter, and sequence delimiter tags
    /// are admitted at this position.
    pub fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 8];
        source.read_exact(&mut buf).context(ReadItemHeaderSnafu)?;
        let tag = self
            .basic
            .decode_tag(&buf[0..4])
            .context(ReadItemHeaderSnafu)?;
        let len = self
            .basic
            .decode_ul(&buf[4..8])
            .context(ReadItemHeaderSnafu)?;

        SequenceItemHeader::new(tag, Length(len)).context(BadSequenceHeaderSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{HasLength, Header};
    use std::io::{Cursor, Read, Seek, SeekFrom};

    // manually crafting some DICOM data elements
    //  Tag: (0002,0002) Media Storage SOP Class UID
    //  VR: UI
    //  Length: 26
    //  Value: "1.2.840.10008.5.1.4.1.1.1\0"
    // --
    //  Tag: (0002,0010) Transfer Syntax UID
    //  VR: UI
    //  Length: 20
    //  Value: "1.2.840.10008.1.2.1\0" == ExplicitVRLittleEndian
    // --
    const RAW_EXPLICIT: &[u8; 62] = &[
        0x02, 0x00, 0x02, 0x00, 0x55, 0x49, 0x1a, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30,
        0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x35, 0x2e, 0x31, 0x2e, 0x34, 0x2e, 0x31, 0x2e,
        0x31, 0x2e, 0x31, 0x00, 0x02, 0x00, 0x10, 0x00, 0x55, 0x49, 0x14, 0x00, 0x31, 0x2e, 0x32,
        0x2e, 0x38, 0x34, 0x30, 0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x31, 0x2e, 0x32, 0x2e,
        0x31, 0x00,
    ];

    #[test]
    fn decode_explicit_data_elements() {
        let dec = ElementDecoder::file_header_decoder();
        let mut cursor = Cursor::new(RAW_EXPLICIT.as_ref());
        {
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(2, 2));
            assert_eq!(elem.vr(), VR::UI);
            assert_eq!(elem.length(), Length(26));
            assert_eq!(bytes_read, 8);
            // read only half of the value data
            let mut buffer = [0; 13];
            cursor.read_exact(&mut buffer).expect("should read it fine");
            assert_eq!(&buffer, b"1.2.840.10008".as_ref());
        }
        // there is no automatic skipping: the cursor sits at #21,
        // and moves to #34 after skipping the rest of the value
        assert_eq!(cursor.seek(SeekFrom::Current(13)).unwrap(), 34);
        {
            let (elem, _bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(2, 16));
            assert_eq!(elem.vr(), VR::UI);
            assert_eq!(elem.length(), Length(20));
        }
    }

    #[test]
    fn decode_implicit_data_elements() {
        // same elements as above, in the implicit form
        const RAW: &[u8; 16] = &[
            0x02, 0x00, 0x02, 0x00, 0x1a, 0x00, 0x00, 0x00, 0x02, 0x00, 0x10, 0x00, 0x14, 0x00,
            0x00, 0x00,
        ];
        let dec = ElementDecoder::new(Endianness::Little, false);
        let mut cursor = Cursor::new(RAW.as_ref());

        let (elem, bytes_read) = dec
            .decode_header(&mut cursor)
            .expect("should find an element");
        assert_eq!(elem.tag(), Tag(2, 2));
        assert_eq!(elem.vr(), VR::UI);
        assert_eq!(elem.length(), Length(26));
        assert_eq!(bytes_read, 8);

        let (elem, _) = dec
            .decode_header(&mut cursor)
            .expect("should find an element");
        assert_eq!(elem.tag(), Tag(2, 16));
        assert_eq!(elem.vr(), VR::UI);
        assert_eq!(elem.length(), Length(20));
    }

    // manually crafting a sequence element and its delimiters
    //  Tag: (0008,1110) Referenced Study Sequence
    //  VR: SQ
    //  Reserved bytes: 0x0000
    //  Length: 0xFFFF_FFFF
    // --
    //  Tag: (FFFE,E000) Item, length 0xFFFF_FFFF (unspecified)
    //  Tag: (FFFE,E00D) Item Delimitation Item, length 0
    //  Tag: (FFFE,E0DD) Sequence Delimitation Item, length 0
    const RAW_SEQUENCE_ITEMS: &[u8] = &[
        0x08, 0x00, 0x10, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0x00,
        0xE0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00, 0xFE, 0xFF,
        0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_items() {
        let dec = ElementDecoder::new(Endianness::Little, true);
        let mut cursor = Cursor::new(RAW_SEQUENCE_ITEMS);
        {
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element header");
            assert_eq!(elem.tag(), Tag(8, 0x1110));
            assert_eq!(elem.vr(), VR::SQ);
            assert!(elem.length().is_undefined());
            assert_eq!(bytes_read, 12);
        }
        {
            let elem = dec
                .decode_item_header(&mut cursor)
                .expect("should find an item header");
            assert!(elem.is_item());
            assert!(elem.length().is_undefined());
        }
        {
            let elem = dec
                .decode_item_header(&mut cursor)
                .expect("should find an item header");
            assert!(elem.is_item_delimiter());
        }
        {
            let elem = dec
                .decode_item_header(&mut cursor)
                .expect("should find an item header");
            assert!(elem.is_sequence_delimiter());
        }
    }

    #[test]
    fn decode_big_endian_headers() {
        //  Tag: (0008,0060) Modality, VR CS, length 2, "US"
        const RAW: &[u8] = &[0x00, 0x08, 0x00, 0x60, b'C', b'S', 0x00, 0x02, b'U', b'S'];
        let dec = ElementDecoder::new(Endianness::Big, true);
        let mut cursor = Cursor::new(RAW);
        let (elem, _) = dec
            .decode_header(&mut cursor)
            .expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x0008, 0x0060));
        assert_eq!(elem.vr(), VR::CS);
        assert_eq!(elem.length(), Length(2));
    }

    #[test]
    fn graceful_end_of_stream() {
        let dec = ElementDecoder::new(Endianness::Little, false);
        // empty source terminates gracefully
        let mut cursor = Cursor::new(&[][..]);
        assert!(dec.try_decode_tag(&mut cursor).unwrap().is_none());
        // a partial tag does not
        let mut cursor = Cursor::new(&[0x08u8, 0x00][..]);
        assert!(dec.try_decode_tag(&mut cursor).is_err());
    }
}
