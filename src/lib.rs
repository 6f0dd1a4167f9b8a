#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces
)]
#![warn(missing_docs, unused_qualifications)]

//! A reader and writer for DICOM Part 10 file objects.
//!
//! A file is decoded into a [`DataSet`]: an ordered mapping from
//! attribute [tags](Tag) to typed [values](Value), which can be
//! accessed by tag, by attribute keyword, or through the constants in
//! [`dictionary::tags`]. Writing the set back produces a byte-identical
//! file after one normalising round trip, for the uncompressed transfer
//! syntaxes (implicit and explicit VR little endian, and explicit VR
//! big endian).
//!
//! Encapsulated (compressed) pixel data is preserved as opaque
//! fragments; native pixel data is decoded into a dense
//! [`ndarray`]-backed array with the column as the first axis.
//!
//! # Example
//!
//! ```no_run
//! use dcmio::{open_file, tags};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("0001.dcm")?;
//! let modality = obj.element_by_name("Modality")?.to_str()?;
//! let rows = obj.element(tags::ROWS)?.to_int()?;
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod decode;
pub mod dictionary;
pub mod encode;
pub mod file;
pub mod header;
pub mod pixeldata;
pub mod transfer_syntax;
pub mod value;

pub use crate::dataset::read::{StatefulReader, VrOverride, VrOverrides};
pub use crate::dataset::write::DataSetWriter;
pub use crate::dataset::DataSet;
pub use crate::dictionary::{tag_for_keyword, tags, vr_of};
pub use crate::file::{
    from_reader, open_directory, open_file, open_file_with, to_writer, write_file, ReadOptions,
    WriteOptions,
};
pub use crate::header::{DataElementHeader, Header, Length, Tag, VR};
pub use crate::pixeldata::RescaleDirection;
pub use crate::value::{DataElement, PixelArray, PrimitiveValue, Value};

// re-exported for downstream use of the pixel array and byte order types
pub use byteordered::Endianness;
pub use ndarray;
