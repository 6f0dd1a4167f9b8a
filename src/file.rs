//! Reading and writing of DICOM Part 10 file objects:
//! the optional 128-byte preamble and "DICM" magic code,
//! the file meta group prelude,
//! transfer syntax inference,
//! and the body in the inferred encoding.

use crate::dataset::read::{StatefulReader, VrOverrides};
use crate::dataset::write::{DataSetWriter, WriteVrOverrides};
use crate::dataset::{read, write, DataSet};
use crate::decode::ElementDecoder;
use crate::dictionary::tags;
use crate::encode::ElementEncoder;
use crate::header::{Header, VR};
use crate::transfer_syntax;
use crate::value::{DataElement, PrimitiveValue, Value};
use byteordered::Endianness;
use smallvec::smallvec;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};

const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not open file '{}'", path.display()))]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not create file '{}'", path.display()))]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not list directory '{}'", path.display()))]
    ReadDirectory {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read file preamble"))]
    ReadPreamble {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Invalid DICOM file (magic code check failed)"))]
    InvalidPreamble { backtrace: Backtrace },

    #[snafu(display("Could not write file preamble"))]
    WritePreamble {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not write file meta group"))]
    WriteMetaGroup {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read data set"))]
    ReadDataSet {
        #[snafu(backtrace)]
        source: read::Error,
    },

    #[snafu(display("Could not write data set"))]
    WriteDataSet {
        #[snafu(backtrace)]
        source: write::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Options for parsing a DICOM file object.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOptions {
    /// Skip the 128-byte preamble and require the "DICM" magic code.
    /// When disabled, parsing starts at the first byte of the source.
    pub preamble: bool,
    /// Stop parsing as soon as a tag's group exceeds this bound.
    /// The bounding tag is left unconsumed.
    pub max_group: Option<u16>,
    /// Per-tag VR overrides, taking precedence over the wire
    /// and the dictionary.
    pub vr_overrides: VrOverrides,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            preamble: true,
            max_group: None,
            vr_overrides: VrOverrides::new(),
        }
    }
}

impl ReadOptions {
    /// Options for a headless file: no preamble, no magic code.
    pub fn headless() -> Self {
        ReadOptions {
            preamble: false,
            ..ReadOptions::default()
        }
    }
}

/// Options for writing a DICOM file object.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOptions {
    /// Emit the 128-byte preamble and the "DICM" magic code.
    pub preamble: bool,
    /// Per-tag VR overrides, taking precedence over the
    /// representations recorded in the data set.
    pub vr_overrides: WriteVrOverrides,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            preamble: true,
            vr_overrides: WriteVrOverrides::new(),
        }
    }
}

/// Create a DICOM data set by reading from a file.
///
/// This function assumes the standard file encoding structure:
/// 128-byte preamble, magic code, file meta group,
/// and the rest of the data set.
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<DataSet> {
    open_file_with(path, &ReadOptions::default())
}

/// Create a DICOM data set by reading from a file,
/// with the given parsing options.
pub fn open_file_with<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<DataSet> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path).context(OpenFileSnafu { path })?);
    from_reader(file, options)
}

/// Create a DICOM data set by reading from a positioned byte source.
pub fn from_reader<S>(mut source: S, options: &ReadOptions) -> Result<DataSet>
where
    S: Read + Seek,
{
    if options.preamble {
        let mut preamble = [0u8; 128];
        source.read_exact(&mut preamble).context(ReadPreambleSnafu)?;
        let mut magic = [0u8; 4];
        source.read_exact(&mut magic).context(ReadPreambleSnafu)?;
        ensure!(magic == DICM_MAGIC_CODE, InvalidPreambleSnafu);
    }

    // the meta group prelude is always Explicit VR Little Endian;
    // read it first, leaving the first body tag unconsumed
    let mut reader = StatefulReader::new(source, ElementDecoder::file_header_decoder());
    let mut ds = reader
        .read_data_set(&options.vr_overrides, Some(0x0002))
        .context(ReadDataSetSnafu)?;

    let (endianness, explicit_vr) = body_encoding(&ds);
    ds.set_encoding(endianness, explicit_vr);
    reader.set_decoder(ElementDecoder::new(endianness, explicit_vr));
    reader
        .read_into(&mut ds, &options.vr_overrides, options.max_group)
        .context(ReadDataSetSnafu)?;
    Ok(ds)
}

/// Parse every regular file in the given directory
/// and sort the resulting data sets by Instance Number.
pub fn open_directory<P: AsRef<Path>>(path: P) -> Result<Vec<DataSet>> {
    let path = path.as_ref();
    let entries = std::fs::read_dir(path)
        .context(ReadDirectorySnafu { path })?
        .collect::<std::io::Result<Vec<_>>>()
        .context(ReadDirectorySnafu { path })?;

    let mut paths: Vec<PathBuf> = entries
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut sets = paths
        .iter()
        .map(open_file)
        .collect::<Result<Vec<_>>>()?;
    sets.sort_by_key(|ds| {
        ds.get(tags::INSTANCE_NUMBER)
            .and_then(|v| v.to_int().ok())
            .unwrap_or(i64::MAX)
    });
    Ok(sets)
}

/// Determine the body encoding declared by the data set's
/// Transfer Syntax UID element.
///
/// Unknown UIDs fall back to Explicit VR Little Endian;
/// an absent element means the default Implicit VR Little Endian.
fn body_encoding(ds: &DataSet) -> (Endianness, bool) {
    match ds
        .get(tags::TRANSFER_SYNTAX_UID)
        .and_then(|v| v.to_str().ok())
    {
        Some(uid) => match transfer_syntax::from_uid(&uid) {
            Some(ts) => (ts.endianness, ts.explicit_vr),
            None => {
                tracing::warn!(
                    "unknown transfer syntax UID `{}`, assuming Explicit VR Little Endian",
                    uid
                );
                (Endianness::Little, true)
            }
        },
        None => (Endianness::Little, false),
    }
}

/// Write the data set to a file as a DICOM file object.
pub fn write_file<P: AsRef<Path>>(path: P, ds: &DataSet, options: &WriteOptions) -> Result<()> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path).context(CreateFileSnafu { path })?);
    to_writer(file, ds, options)
}

/// Write the data set to the given sink as a DICOM file object:
/// optional preamble, meta group in Explicit VR Little Endian with a
/// recomputed group length, and the body in the set's own mode.
///
/// When the set carries no Transfer Syntax UID element, one matching
/// its encoding mode is inserted into the written meta group.
pub fn to_writer<W>(to: W, ds: &DataSet, options: &WriteOptions) -> Result<()>
where
    W: Write,
{
    let mut to = to;
    if options.preamble {
        to.write_all(&[0u8; 128]).context(WritePreambleSnafu)?;
        to.write_all(&DICM_MAGIC_CODE).context(WritePreambleSnafu)?;
    }

    // assemble the meta group, synthesising the transfer syntax
    // element when absent, so that the mode can be inferred back
    let mut meta_set = DataSet::new(Endianness::Little, true);
    for elem in ds {
        let tag = elem.tag();
        if tag.group() > 0x0002 {
            break;
        }
        if tag != tags::FILE_META_INFORMATION_GROUP_LENGTH {
            meta_set.put(elem.clone());
        }
    }
    let (endianness, explicit_vr) = match ds.get(tags::TRANSFER_SYNTAX_UID) {
        Some(_) => body_encoding(ds),
        None => {
            let mode = (ds.endianness(), ds.explicit_vr());
            let ts = transfer_syntax::from_mode(mode.0, mode.1);
            meta_set.put(DataElement::new(
                tags::TRANSFER_SYNTAX_UID,
                VR::UI,
                Value::from(PrimitiveValue::from(ts.uid)),
            ));
            mode
        }
    };

    // the group length element spans the serialised meta payload
    let mut meta_writer = DataSetWriter::new(Vec::new(), ElementEncoder::file_header_encoder());
    meta_writer
        .write_data_set(&meta_set, &options.vr_overrides)
        .context(WriteDataSetSnafu)?;
    let meta_payload = meta_writer.into_inner();

    let mut head_writer = DataSetWriter::new(&mut to, ElementEncoder::file_header_encoder());
    head_writer
        .write_element(
            &meta_set,
            &DataElement::new(
                tags::FILE_META_INFORMATION_GROUP_LENGTH,
                VR::UL,
                Value::from(PrimitiveValue::U32(smallvec![meta_payload.len() as u32])),
            ),
            &options.vr_overrides,
        )
        .context(WriteDataSetSnafu)?;
    to.write_all(&meta_payload).context(WriteMetaGroupSnafu)?;

    // body in the set's own mode, in ascending tag order
    let mut writer = DataSetWriter::new(&mut to, ElementEncoder::new(endianness, explicit_vr));
    for elem in ds {
        if elem.tag().group() <= 0x0002 {
            continue;
        }
        writer
            .write_element(ds, elem, &options.vr_overrides)
            .context(WriteDataSetSnafu)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Tag;
    use std::io::Cursor;

    fn element_bytes(tag: Tag, vr: &[u8], value: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&tag.group().to_le_bytes());
        out.extend_from_slice(&tag.element().to_le_bytes());
        out.extend_from_slice(vr);
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
        out.extend_from_slice(value);
        out
    }

    fn meta_group(body_ts: &str) -> Vec<u8> {
        let ts = element_bytes(Tag(0x0002, 0x0010), b"UI", body_ts.as_bytes());
        let mut out = element_bytes(
            Tag(0x0002, 0x0000),
            b"UL",
            &(ts.len() as u32).to_le_bytes(),
        );
        out.extend_from_slice(&ts);
        out
    }

    #[test]
    fn read_standard_file_object() {
        let mut file = vec![0u8; 128];
        file.extend_from_slice(b"DICM");
        file.extend_from_slice(&meta_group("1.2.840.10008.1.2.1\0"));
        file.extend_from_slice(&element_bytes(Tag(0x0008, 0x0060), b"CS", b"MR"));

        let ds = from_reader(Cursor::new(&file), &ReadOptions::default()).unwrap();
        assert_eq!(ds.endianness(), Endianness::Little);
        assert!(ds.explicit_vr());
        assert_eq!(
            ds.element_by_name("Modality").unwrap().to_str().unwrap(),
            "MR"
        );
        // meta elements live in the same data set
        assert!(ds.contains(Tag(0x0002, 0x0010)));
    }

    #[test]
    fn missing_magic_code_is_fatal() {
        let mut file = vec![0u8; 128];
        file.extend_from_slice(b"DKOM");
        file.extend_from_slice(&element_bytes(Tag(0x0008, 0x0060), b"CS", b"MR"));
        let err = from_reader(Cursor::new(&file), &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidPreamble { .. }));
    }

    #[test]
    fn headless_file_defaults_to_implicit_little() {
        // (0008,0060) CS "OT" in implicit VR little endian, no meta
        let mut file = Vec::new();
        file.extend_from_slice(&[0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00]);
        file.extend_from_slice(b"OT");

        let ds = from_reader(Cursor::new(&file), &ReadOptions::headless()).unwrap();
        assert_eq!(ds.endianness(), Endianness::Little);
        assert!(!ds.explicit_vr());
        assert_eq!(
            ds.element_by_name("Modality").unwrap().to_str().unwrap(),
            "OT"
        );
    }

    #[test]
    fn unknown_transfer_syntax_defaults_to_explicit_little() {
        let mut file = vec![0u8; 128];
        file.extend_from_slice(b"DICM");
        file.extend_from_slice(&meta_group("1.2.840.10008.1.2.4.50"));
        file.extend_from_slice(&element_bytes(Tag(0x0008, 0x0060), b"CS", b"US"));

        let ds = from_reader(Cursor::new(&file), &ReadOptions::default()).unwrap();
        assert!(ds.explicit_vr());
        assert_eq!(ds.endianness(), Endianness::Little);
        assert_eq!(
            ds.element_by_name("Modality").unwrap().to_str().unwrap(),
            "US"
        );
    }

    #[test]
    fn big_endian_body_after_little_endian_meta() {
        let mut file = vec![0u8; 128];
        file.extend_from_slice(b"DICM");
        file.extend_from_slice(&meta_group("1.2.840.10008.1.2.2\0"));
        // (0008,0060) CS "US" in big endian
        file.extend_from_slice(&[0x00, 0x08, 0x00, 0x60, b'C', b'S', 0x00, 0x02]);
        file.extend_from_slice(b"US");

        let ds = from_reader(Cursor::new(&file), &ReadOptions::default()).unwrap();
        assert_eq!(ds.endianness(), Endianness::Big);
        assert_eq!(
            ds.element_by_name("Modality").unwrap().to_str().unwrap(),
            "US"
        );
    }

    #[test]
    fn write_inserts_transfer_syntax_and_group_length() {
        let mut ds = DataSet::new(Endianness::Little, false);
        ds.put(DataElement::new(
            Tag(0x0008, 0x0060),
            VR::CS,
            Value::from(PrimitiveValue::from("CT")),
        ));

        let mut out = Vec::new();
        to_writer(&mut out, &ds, &WriteOptions::default()).unwrap();
        assert_eq!(&out[128..132], b"DICM");
        // (0002,0000) UL 4
        assert_eq!(
            &out[132..144],
            &[0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0x1A, 0x00, 0x00, 0x00][..]
        );
        // (0002,0010) UI "1.2.840.10008.1.2\0"
        assert_eq!(&out[144..152], &[0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x12, 0x00][..]);
        assert_eq!(&out[152..170], b"1.2.840.10008.1.2\0");
        // body element in implicit VR
        assert_eq!(
            &out[170..],
            &[0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00, b'C', b'T'][..]
        );

        // and the written form parses back to the same body
        let ds2 = from_reader(Cursor::new(&out), &ReadOptions::default()).unwrap();
        assert!(!ds2.explicit_vr());
        assert_eq!(
            ds2.element(Tag(0x0008, 0x0060)).unwrap().to_str().unwrap(),
            "CT"
        );
    }

    #[test]
    fn max_group_stops_early() {
        let mut file = vec![0u8; 128];
        file.extend_from_slice(b"DICM");
        file.extend_from_slice(&meta_group("1.2.840.10008.1.2.1\0"));
        file.extend_from_slice(&element_bytes(Tag(0x0008, 0x0060), b"CS", b"MR"));
        file.extend_from_slice(&element_bytes(Tag(0x0010, 0x0010), b"PN", b"Doe^Jane"));

        let options = ReadOptions {
            max_group: Some(0x0008),
            ..ReadOptions::default()
        };
        let ds = from_reader(Cursor::new(&file), &options).unwrap();
        assert!(ds.contains(Tag(0x0008, 0x0060)));
        assert!(!ds.contains(Tag(0x0010, 0x0010)));
    }

    #[test]
    fn observed_vrs_round_trip_through_write_options() {
        let mut file = vec![0u8; 128];
        file.extend_from_slice(b"DICM");
        file.extend_from_slice(&meta_group("1.2.840.10008.1.2.1\0"));
        // (0018,1170) carried as DS, against the dictionary's IS
        file.extend_from_slice(&element_bytes(Tag(0x0018, 0x1170), b"DS", b"30"));

        let ds = from_reader(Cursor::new(&file), &ReadOptions::default()).unwrap();
        assert_eq!(ds.observed_vrs()[&Tag(0x0018, 0x1170)], VR::DS);

        let options = WriteOptions {
            vr_overrides: ds.observed_vrs().clone(),
            ..WriteOptions::default()
        };
        let mut first = Vec::new();
        to_writer(&mut first, &ds, &options).unwrap();

        let ds2 = from_reader(Cursor::new(&first), &ReadOptions::default()).unwrap();
        let mut second = Vec::new();
        let options2 = WriteOptions {
            vr_overrides: ds2.observed_vrs().clone(),
            ..WriteOptions::default()
        };
        to_writer(&mut second, &ds2, &options2).unwrap();
        assert_eq!(first, second);
    }
}
