//! High level abstractions over a DICOM data element's value:
//! the multi-valued primitive union, native pixel arrays,
//! and the full element value which may nest data sets.

use crate::dataset::DataSet;
use crate::header::{DataElementHeader, HasLength, Header, Length, Tag, VR};
use ndarray::ArrayD;
use smallvec::SmallVec;
use snafu::Snafu;
use std::borrow::Cow;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An enum representing an abstraction of a DICOM value's type.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValueType {
    /// No value
    Empty,
    /// A single string
    Str,
    /// A sequence of strings
    Strs,
    /// A sequence of attribute tags
    Tags,
    /// Unsigned 8-bit integers
    U8,
    /// Signed 8-bit integers
    I8,
    /// Unsigned 16-bit integers
    U16,
    /// Signed 16-bit integers
    I16,
    /// Unsigned 32-bit integers
    U32,
    /// Signed 32-bit integers
    I32,
    /// Single precision floats
    F32,
    /// Double precision floats
    F64,
    /// A nested item sequence
    Seq,
    /// An encapsulated pixel data sequence
    PixelSeq,
    /// A native pixel data array
    Pixels,
}

/// An error raised when retrieving a value of one type
/// out of an element of an incompatible type.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(display("bad value cast: requested {} but value is {:?}", requested, got))]
pub struct CastValueError {
    /// The value type requested by the caller.
    pub requested: &'static str,
    /// The type of the value stored in the element.
    pub got: ValueType,
}

type Result<T, E = CastValueError> = std::result::Result<T, E>;

/// A primitive DICOM value,
/// which may be multi-valued according to the element's multiplicity.
///
/// Values of multiplicity 1 are stored as one-element collections;
/// the scalar accessors (`string`, `uint16`, and friends)
/// unwrap them transparently.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    /// No value; an empty element.
    Empty,
    /// A single raw string, kept as encoded in the file.
    Str(String),
    /// A sequence of strings, split at the `\` separator.
    Strs(C<String>),
    /// A sequence of attribute tags (VR AT).
    Tags(C<Tag>),
    /// Raw bytes (VR OB, UN).
    U8(C<u8>),
    /// Signed 8-bit integers.
    I8(C<i8>),
    /// Unsigned 16-bit integers (VR US, OW).
    U16(C<u16>),
    /// Signed 16-bit integers (VR SS).
    I16(C<i16>),
    /// Unsigned 32-bit integers (VR UL).
    U32(C<u32>),
    /// Signed 32-bit integers (VR SL, IS).
    I32(C<i32>),
    /// Single precision floats (VR FL, OF).
    F32(C<f32>),
    /// Double precision floats (VR FD, DS).
    F64(C<f64>),
}

/// Macro for implementing scalar and slice getters on `PrimitiveValue`.
macro_rules! impl_primitive_getters {
    ($name_single: ident, $name_multi: ident, $variant: ident, $ret: ty) => {
        /// Get a single value of the requested type.
        /// If it contains multiple values, only the first one is returned.
        /// An error is returned if the variant is not compatible.
        pub fn $name_single(&self) -> Result<$ret> {
            match self {
                PrimitiveValue::$variant(c) if !c.is_empty() => Ok(c[0]),
                value => Err(CastValueError {
                    requested: stringify!($name_single),
                    got: value.value_type(),
                }),
            }
        }

        /// Get a sequence of values of the requested type without copying.
        /// An error is returned if the variant is not compatible.
        pub fn $name_multi(&self) -> Result<&[$ret]> {
            match self {
                PrimitiveValue::$variant(c) => Ok(c),
                value => Err(CastValueError {
                    requested: stringify!($name_multi),
                    got: value.value_type(),
                }),
            }
        }
    };
}

impl PrimitiveValue {
    /// Retrieve the specific type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Empty => ValueType::Empty,
            PrimitiveValue::Str(_) => ValueType::Str,
            PrimitiveValue::Strs(_) => ValueType::Strs,
            PrimitiveValue::Tags(_) => ValueType::Tags,
            PrimitiveValue::U8(_) => ValueType::U8,
            PrimitiveValue::I8(_) => ValueType::I8,
            PrimitiveValue::U16(_) => ValueType::U16,
            PrimitiveValue::I16(_) => ValueType::I16,
            PrimitiveValue::U32(_) => ValueType::U32,
            PrimitiveValue::I32(_) => ValueType::I32,
            PrimitiveValue::F32(_) => ValueType::F32,
            PrimitiveValue::F64(_) => ValueType::F64,
        }
    }

    /// Retrieve the number of individual values in this primitive,
    /// which is the element's multiplicity.
    pub fn multiplicity(&self) -> usize {
        match self {
            PrimitiveValue::Empty => 0,
            PrimitiveValue::Str(_) => 1,
            PrimitiveValue::Strs(c) => c.len(),
            PrimitiveValue::Tags(c) => c.len(),
            PrimitiveValue::U8(c) => c.len(),
            PrimitiveValue::I8(c) => c.len(),
            PrimitiveValue::U16(c) => c.len(),
            PrimitiveValue::I16(c) => c.len(),
            PrimitiveValue::U32(c) => c.len(),
            PrimitiveValue::I32(c) => c.len(),
            PrimitiveValue::F32(c) => c.len(),
            PrimitiveValue::F64(c) => c.len(),
        }
    }

    /// Compute the byte length which this value occupies on the wire,
    /// before even-length padding.
    pub fn calculate_byte_len(&self) -> usize {
        match self {
            PrimitiveValue::Empty => 0,
            PrimitiveValue::Str(s) => s.len(),
            PrimitiveValue::Strs(c) => {
                c.iter().map(|s| s.len()).sum::<usize>() + c.len().saturating_sub(1)
            }
            PrimitiveValue::Tags(c) => c.len() * 4,
            PrimitiveValue::U8(c) => c.len(),
            PrimitiveValue::I8(c) => c.len(),
            PrimitiveValue::U16(c) => c.len() * 2,
            PrimitiveValue::I16(c) => c.len() * 2,
            PrimitiveValue::U32(c) => c.len() * 4,
            PrimitiveValue::I32(c) => c.len() * 4,
            PrimitiveValue::F32(c) => c.len() * 4,
            PrimitiveValue::F64(c) => c.len() * 8,
        }
    }

    /// Get a single string value.
    ///
    /// If it contains multiple strings, only the first one is returned.
    /// An error is returned if the variant is not compatible.
    pub fn string(&self) -> Result<&str> {
        match self {
            PrimitiveValue::Str(s) => Ok(s),
            PrimitiveValue::Strs(c) if !c.is_empty() => Ok(&c[0]),
            value => Err(CastValueError {
                requested: "string",
                got: value.value_type(),
            }),
        }
    }

    /// Get the inner sequence of string values
    /// if the variant is either `Str` or `Strs`.
    pub fn strings(&self) -> Result<&[String]> {
        match self {
            PrimitiveValue::Str(s) => Ok(std::slice::from_ref(s)),
            PrimitiveValue::Strs(c) => Ok(c),
            value => Err(CastValueError {
                requested: "strings",
                got: value.value_type(),
            }),
        }
    }

    /// Get a single attribute tag value.
    pub fn tag(&self) -> Result<Tag> {
        match self {
            PrimitiveValue::Tags(c) if !c.is_empty() => Ok(c[0]),
            value => Err(CastValueError {
                requested: "tag",
                got: value.value_type(),
            }),
        }
    }

    impl_primitive_getters!(uint8, uint8_slice, U8, u8);
    impl_primitive_getters!(int8, int8_slice, I8, i8);
    impl_primitive_getters!(uint16, uint16_slice, U16, u16);
    impl_primitive_getters!(int16, int16_slice, I16, i16);
    impl_primitive_getters!(uint32, uint32_slice, U32, u32);
    impl_primitive_getters!(int32, int32_slice, I32, i32);
    impl_primitive_getters!(float32, float32_slice, F32, f32);
    impl_primitive_getters!(float64, float64_slice, F64, f64);

    /// Retrieve the value as a single clean string, with no trailing
    /// whitespace. Multi-valued strings are joined with the `\` separator.
    pub fn to_str(&self) -> Cow<str> {
        match self {
            PrimitiveValue::Empty => Cow::from(""),
            PrimitiveValue::Str(s) => Cow::from(s.trim_end()),
            PrimitiveValue::Strs(c) if c.len() == 1 => Cow::from(c[0].trim_end()),
            PrimitiveValue::Strs(c) => Cow::from(c.join("\\")),
            value => Cow::from(format!("{:?}", value)),
        }
    }

    /// Retrieve and convert this value into a signed 64-bit integer.
    ///
    /// Numeric values are widened; numeric text is parsed.
    /// If the value has multiple entries, only the first is converted.
    pub fn to_int(&self) -> Result<i64> {
        match self {
            PrimitiveValue::U8(c) if !c.is_empty() => Ok(c[0] as i64),
            PrimitiveValue::I8(c) if !c.is_empty() => Ok(c[0] as i64),
            PrimitiveValue::U16(c) if !c.is_empty() => Ok(c[0] as i64),
            PrimitiveValue::I16(c) if !c.is_empty() => Ok(c[0] as i64),
            PrimitiveValue::U32(c) if !c.is_empty() => Ok(c[0] as i64),
            PrimitiveValue::I32(c) if !c.is_empty() => Ok(c[0] as i64),
            PrimitiveValue::Str(s) => s.trim().parse().map_err(|_| CastValueError {
                requested: "to_int",
                got: ValueType::Str,
            }),
            PrimitiveValue::Strs(c) if !c.is_empty() => {
                c[0].trim().parse().map_err(|_| CastValueError {
                    requested: "to_int",
                    got: ValueType::Strs,
                })
            }
            value => Err(CastValueError {
                requested: "to_int",
                got: value.value_type(),
            }),
        }
    }

    /// Retrieve and convert this value into a double precision float.
    pub fn to_float64(&self) -> Result<f64> {
        match self {
            PrimitiveValue::F32(c) if !c.is_empty() => Ok(c[0] as f64),
            PrimitiveValue::F64(c) if !c.is_empty() => Ok(c[0]),
            value => value.to_int().map(|v| v as f64).map_err(|_| CastValueError {
                requested: "to_float64",
                got: value.value_type(),
            }),
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(s: &str) -> Self {
        PrimitiveValue::Str(s.to_string())
    }
}

impl From<String> for PrimitiveValue {
    fn from(s: String) -> Self {
        PrimitiveValue::Str(s)
    }
}

/// The sample type of a native pixel array.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelKind {
    /// unsigned 8-bit samples
    U8,
    /// signed 8-bit samples
    I8,
    /// unsigned 16-bit samples
    U16,
    /// signed 16-bit samples
    I16,
    /// floating point samples, the result of a rescale transform
    F32,
}

impl PixelKind {
    /// The number of bytes a single sample occupies on the wire.
    pub fn sample_size(self) -> usize {
        match self {
            PixelKind::U8 | PixelKind::I8 => 1,
            PixelKind::U16 | PixelKind::I16 => 2,
            PixelKind::F32 => 4,
        }
    }
}

/// A dense native pixel data array.
///
/// Axes are ordered `[columns, rows, frames, samples]` with axes of size 1
/// dropped. This is an API convention of the data model: the first axis is
/// the image width, regardless of how the samples were interleaved on the
/// wire. The on-wire order is recovered on write from the data set's
/// shape attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelArray {
    /// unsigned 8-bit samples
    U8(ArrayD<u8>),
    /// signed 8-bit samples
    I8(ArrayD<i8>),
    /// unsigned 16-bit samples
    U16(ArrayD<u16>),
    /// signed 16-bit samples
    I16(ArrayD<i16>),
    /// floating point samples, the result of a rescale transform
    F32(ArrayD<f32>),
}

impl PixelArray {
    /// The sample type held by this array.
    pub fn kind(&self) -> PixelKind {
        match self {
            PixelArray::U8(_) => PixelKind::U8,
            PixelArray::I8(_) => PixelKind::I8,
            PixelArray::U16(_) => PixelKind::U16,
            PixelArray::I16(_) => PixelKind::I16,
            PixelArray::F32(_) => PixelKind::F32,
        }
    }

    /// The total number of samples in the array.
    pub fn len(&self) -> usize {
        match self {
            PixelArray::U8(a) => a.len(),
            PixelArray::I8(a) => a.len(),
            PixelArray::U16(a) => a.len(),
            PixelArray::I16(a) => a.len(),
            PixelArray::F32(a) => a.len(),
        }
    }

    /// Whether the array holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The user-facing shape of the array.
    pub fn shape(&self) -> &[usize] {
        match self {
            PixelArray::U8(a) => a.shape(),
            PixelArray::I8(a) => a.shape(),
            PixelArray::U16(a) => a.shape(),
            PixelArray::I16(a) => a.shape(),
            PixelArray::F32(a) => a.shape(),
        }
    }

    /// The byte length the samples occupy on the wire.
    pub fn calculate_byte_len(&self) -> usize {
        self.len() * self.kind().sample_size()
    }
}

/// Representation of a full DICOM element value,
/// which may be a primitive, a nested item sequence,
/// or one of the two pixel data forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A complex sequence of items.
    Sequence {
        /// Item collection.
        items: C<DataSet>,
        /// The size in bytes (length).
        size: Length,
    },
    /// An encapsulated pixel data sequence.
    PixelSequence {
        /// The value contents of the Basic Offset Table,
        /// kept as an opaque byte run.
        offset_table: Vec<u8>,
        /// The sequence of compressed fragments, kept opaque.
        fragments: Vec<Vec<u8>>,
    },
    /// A decoded native pixel data array.
    Pixels(PixelArray),
}

impl Value {
    /// Retrieve the specific type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Primitive(v) => v.value_type(),
            Value::Sequence { .. } => ValueType::Seq,
            Value::PixelSequence { .. } => ValueType::PixelSeq,
            Value::Pixels(_) => ValueType::Pixels,
        }
    }

    /// Retrieve the primitive value, if this is one.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Retrieve the sequence items, if this is a sequence.
    /// The output is always a list for sequence values,
    /// possibly empty, never a collapsed scalar.
    pub fn items(&self) -> Option<&[DataSet]> {
        match self {
            Value::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Retrieve the native pixel array, if this is one.
    pub fn pixels(&self) -> Option<&PixelArray> {
        match self {
            Value::Pixels(p) => Some(p),
            _ => None,
        }
    }

    /// Retrieve the value as a single clean string.
    /// Returns an error if the value is not primitive.
    pub fn to_str(&self) -> Result<Cow<str>> {
        match self {
            Value::Primitive(v) => Ok(v.to_str()),
            value => Err(CastValueError {
                requested: "to_str",
                got: value.value_type(),
            }),
        }
    }

    /// Retrieve and convert the value into a signed 64-bit integer.
    /// Returns an error if the value is not primitive.
    pub fn to_int(&self) -> Result<i64> {
        match self {
            Value::Primitive(v) => v.to_int(),
            value => Err(CastValueError {
                requested: "to_int",
                got: value.value_type(),
            }),
        }
    }

    /// Retrieve and convert the value into a double precision float.
    /// Returns an error if the value is not primitive.
    pub fn to_float64(&self) -> Result<f64> {
        match self {
            Value::Primitive(v) => v.to_float64(),
            value => Err(CastValueError {
                requested: "to_float64",
                got: value.value_type(),
            }),
        }
    }
}

impl From<PrimitiveValue> for Value {
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl From<PixelArray> for Value {
    fn from(v: PixelArray) -> Self {
        Value::Pixels(v)
    }
}

/// A data type that represents and owns a DICOM data element.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement {
    header: DataElementHeader,
    value: Value,
}

impl HasLength for DataElement {
    #[inline]
    fn length(&self) -> Length {
        self.header.length()
    }
}

impl Header for DataElement {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag()
    }
}

impl DataElement {
    /// Create a data element from the given parts,
    /// keeping the length recorded in the header.
    ///
    /// This method will not check whether the value representation is
    /// compatible with the given value.
    pub fn new_with_len<T>(tag: Tag, vr: VR, len: Length, value: T) -> Self
    where
        T: Into<Value>,
    {
        DataElement {
            header: DataElementHeader { tag, vr, len },
            value: value.into(),
        }
    }

    /// Create a data element from the given parts,
    /// where the length is inferred from the value's byte length.
    pub fn new<T>(tag: Tag, vr: VR, value: T) -> Self
    where
        T: Into<Value>,
    {
        let value = value.into();
        let len = match &value {
            Value::Primitive(v) => Length(v.calculate_byte_len() as u32),
            Value::Pixels(p) => Length(p.calculate_byte_len() as u32),
            Value::Sequence { .. } | Value::PixelSequence { .. } => Length::UNDEFINED,
        };
        DataElement {
            header: DataElementHeader { tag, vr, len },
            value,
        }
    }

    /// Create an empty data element.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            header: DataElementHeader {
                tag,
                vr,
                len: Length(0),
            },
            value: PrimitiveValue::Empty.into(),
        }
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the value representation.
    pub fn vr(&self) -> VR {
        self.header.vr()
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Move the data value out of the element, discarding the header.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Retrieve the element's value as a single clean string.
    pub fn to_str(&self) -> Result<Cow<str>> {
        self.value.to_str()
    }

    /// Retrieve and convert the element's value into an integer.
    pub fn to_int(&self) -> Result<i64> {
        self.value.to_int()
    }

    /// Retrieve and convert the element's value into a float.
    pub fn to_float64(&self) -> Result<f64> {
        self.value.to_float64()
    }
}
