//! Decoding and encoding of native pixel data,
//! and the intensity rescale transform.
//!
//! Native pixel data is shaped by attributes of the surrounding data set:
//! sample width and signedness, matrix dimensions, frame count, and the
//! interleaving of multi-sample images. On the wire the sample (or the
//! plane, in the planar configuration) is the fastest varying axis; the
//! user-facing array puts the column first, with size-1 axes dropped.

use crate::dataset::DataSet;
use crate::decode::BasicDecoder;
use crate::dictionary::tags;
use crate::encode::BasicEncoder;
use crate::header::{Tag, VR};
use crate::value::{DataElement, PixelArray, Value};
use ndarray::{ArrayD, Axis, IxDyn};
use num_traits::NumCast;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Missing image attribute {} for pixel data", tag))]
    MissingImageAttribute { tag: Tag, backtrace: Backtrace },

    #[snafu(display(
        "Unsupported sample format ({} bits allocated, representation {})",
        bits,
        representation
    ))]
    UnsupportedSampleFormat {
        bits: u16,
        representation: u16,
        backtrace: Backtrace,
    },

    #[snafu(display("Pixel data has {} bytes, expected {}", got, expected))]
    LengthMismatch {
        expected: usize,
        got: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("Pixel array has {} samples, but the image attributes require {}", got, expected))]
    ShapeMismatch {
        expected: usize,
        got: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("Cannot write {}-bit pixel samples in implicit VR mode", bits))]
    ImplicitPixelNotWords { bits: u16, backtrace: Backtrace },

    #[snafu(display("Invalid pixel matrix shape"))]
    Shape {
        source: ndarray::ShapeError,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to read pixel samples"))]
    ReadSamples {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to write pixel samples"))]
    WriteSamples {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Rescaled value {} does not fit the stored pixel type", value))]
    NumericCast { value: f64, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The direction of the intensity rescale transform.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RescaleDirection {
    /// Map stored values to output units: `v * slope + intercept`.
    Forward,
    /// Map output units back to stored values:
    /// `round((v - intercept) / slope)`.
    Backward,
}

/// The pixel matrix geometry harvested from a data set.
#[derive(Debug, Copy, Clone, PartialEq)]
struct ImageShape {
    rows: usize,
    cols: usize,
    frames: usize,
    samples: usize,
    planar: bool,
}

impl ImageShape {
    fn harvest(ds: &DataSet) -> Result<ImageShape> {
        let rows = int_attr(ds, tags::ROWS).context(MissingImageAttributeSnafu {
            tag: tags::ROWS,
        })? as usize;
        let cols = int_attr(ds, tags::COLUMNS).context(MissingImageAttributeSnafu {
            tag: tags::COLUMNS,
        })? as usize;
        // the retired Planes attribute multiplies the frame count
        let planes = int_attr(ds, tags::PLANES).unwrap_or(1).max(1) as usize;
        let frames = int_attr(ds, tags::NUMBER_OF_FRAMES).unwrap_or(1).max(1) as usize * planes;
        let samples = int_attr(ds, tags::SAMPLES_PER_PIXEL).unwrap_or(1).max(1) as usize;
        let planar = int_attr(ds, tags::PLANAR_CONFIGURATION).unwrap_or(0) == 1;
        Ok(ImageShape {
            rows,
            cols,
            frames,
            samples,
            planar,
        })
    }

    fn sample_count(&self) -> usize {
        self.rows * self.cols * self.frames * self.samples
    }

    /// The on-wire axis order, row major: the rightmost axis varies fastest.
    fn stream_shape(&self) -> [usize; 4] {
        if self.planar {
            [self.frames, self.samples, self.rows, self.cols]
        } else {
            [self.frames, self.rows, self.cols, self.samples]
        }
    }

    /// The user-facing axis order before size-1 axes are dropped.
    fn user_shape(&self) -> [usize; 4] {
        [self.cols, self.rows, self.frames, self.samples]
    }

    /// Permutation from the stream order to the user-facing order.
    fn decode_permutation(&self) -> [usize; 4] {
        if self.planar {
            // [frames, samples, rows, cols] -> [cols, rows, frames, samples]
            [3, 2, 0, 1]
        } else {
            // [frames, rows, cols, samples] -> [cols, rows, frames, samples]
            [2, 1, 0, 3]
        }
    }

    /// Permutation from the user-facing order back to the stream order.
    fn encode_permutation(&self) -> [usize; 4] {
        if self.planar {
            // [cols, rows, frames, samples] -> [frames, samples, rows, cols]
            [2, 3, 1, 0]
        } else {
            [2, 1, 0, 3]
        }
    }
}

/// Retrieve an integer-valued attribute, whichever numeric or
/// numeric-text form it was decoded in.
fn int_attr(ds: &DataSet, tag: Tag) -> Option<i64> {
    ds.get(tag).and_then(|v| v.to_int().ok())
}

/// Determine the stored sample format from the data set,
/// falling back to the pixel data VR when the bit depth
/// attributes are absent.
fn sample_format(ds: &DataSet, vr: VR) -> Result<(u16, bool)> {
    let bits = int_attr(ds, tags::BITS_ALLOCATED)
        .or_else(|| int_attr(ds, tags::BITS_STORED))
        .unwrap_or(if vr == VR::OB { 8 } else { 16 }) as u16;
    let representation = int_attr(ds, tags::PIXEL_REPRESENTATION).unwrap_or(0) as u16;
    ensure!(
        bits == 8 || bits == 16,
        UnsupportedSampleFormatSnafu {
            bits,
            representation
        }
    );
    Ok((bits, representation == 1))
}

/// Decode a native (defined length) pixel data payload
/// into a dense array, consulting the data set for its geometry.
pub fn decode_native(ds: &DataSet, vr: VR, data: &[u8]) -> Result<PixelArray> {
    let (bits, signed) = sample_format(ds, vr)?;
    let shape = ImageShape::harvest(ds)?;
    let n = shape.sample_count();
    let expected = n * <usize as From<u16>>::from(bits / 8);
    ensure!(
        data.len() >= expected,
        LengthMismatchSnafu {
            expected,
            got: data.len()
        }
    );

    let basic = BasicDecoder::new(ds.endianness());
    match (bits, signed) {
        (8, false) => shape_native(data[..n].to_vec(), &shape).map(PixelArray::U8),
        (8, true) => {
            let samples = data[..n].iter().map(|b| *b as i8).collect();
            shape_native(samples, &shape).map(PixelArray::I8)
        }
        (16, false) => {
            let mut samples = vec![0u16; n];
            basic
                .decode_us_into(&data[..expected], &mut samples)
                .context(ReadSamplesSnafu)?;
            shape_native(samples, &shape).map(PixelArray::U16)
        }
        (16, true) => {
            let mut samples = vec![0i16; n];
            basic
                .decode_ss_into(&data[..expected], &mut samples)
                .context(ReadSamplesSnafu)?;
            shape_native(samples, &shape).map(PixelArray::I16)
        }
        _ => unreachable!(),
    }
}

/// Arrange raw samples in stream order into the user-facing array:
/// permute so that the column comes first, and drop size-1 axes.
fn shape_native<T>(samples: Vec<T>, shape: &ImageShape) -> Result<ArrayD<T>> {
    let a = ArrayD::from_shape_vec(IxDyn(&shape.stream_shape()), samples).context(ShapeSnafu)?;
    let mut a = a.permuted_axes(IxDyn(&shape.decode_permutation()));
    for ax in (0..a.ndim()).rev() {
        if a.ndim() > 1 && a.shape()[ax] == 1 {
            a = a.index_axis_move(Axis(ax), 0);
        }
    }
    Ok(a)
}

/// Encode a native pixel array back into its on-wire byte order,
/// re-deriving the sample interleaving from the data set.
pub fn encode_native(ds: &DataSet, pixels: &PixelArray, explicit_vr: bool) -> Result<Vec<u8>> {
    let bits = (pixels.kind().sample_size() * 8) as u16;
    ensure!(
        explicit_vr || pixels.kind().sample_size() == 2,
        ImplicitPixelNotWordsSnafu { bits }
    );

    let shape = ImageShape::harvest(ds)?;
    ensure!(
        pixels.len() == shape.sample_count(),
        ShapeMismatchSnafu {
            expected: shape.sample_count(),
            got: pixels.len()
        }
    );

    let basic = BasicEncoder::new(ds.endianness());
    let mut out = Vec::with_capacity(pixels.calculate_byte_len());
    match pixels {
        PixelArray::U8(a) => {
            out.extend(stream_samples(a, &shape)?);
        }
        PixelArray::I8(a) => {
            out.extend(stream_samples(a, &shape)?.into_iter().map(|v| v as u8));
        }
        PixelArray::U16(a) => {
            for v in stream_samples(a, &shape)? {
                basic.encode_us(&mut out, v).context(WriteSamplesSnafu)?;
            }
        }
        PixelArray::I16(a) => {
            for v in stream_samples(a, &shape)? {
                basic.encode_ss(&mut out, v).context(WriteSamplesSnafu)?;
            }
        }
        PixelArray::F32(a) => {
            for v in stream_samples(a, &shape)? {
                basic.encode_fl(&mut out, v).context(WriteSamplesSnafu)?;
            }
        }
    }
    Ok(out)
}

/// Reinsert the dropped size-1 axes, apply the inverse permutation,
/// and return the samples in on-wire order.
fn stream_samples<T: Copy>(a: &ArrayD<T>, shape: &ImageShape) -> Result<Vec<T>> {
    let target = shape.user_shape();
    let mut v = a.view();
    for (i, dim) in target.iter().enumerate() {
        if v.ndim() < 4 && *dim == 1 && (i >= v.ndim() || v.shape()[i] != 1) {
            v = v.insert_axis(Axis(i));
        }
    }
    ensure!(
        v.shape() == &target[..],
        ShapeMismatchSnafu {
            expected: shape.sample_count(),
            got: a.len()
        }
    );
    let streamed = v.permuted_axes(IxDyn(&shape.encode_permutation()));
    Ok(streamed.iter().copied().collect())
}

/// Retrieve the rescale parameters, if the data set has both of them.
fn rescale_parameters(ds: &DataSet) -> Option<(f64, f64)> {
    let slope = ds.get(tags::RESCALE_SLOPE)?.to_float64().ok()?;
    let intercept = ds.get(tags::RESCALE_INTERCEPT)?.to_float64().ok()?;
    Some((slope, intercept))
}

macro_rules! map_samples {
    ($a: expr, $f: expr) => {
        $a.iter().map(|v| $f(<f64 as From<_>>::from(*v))).collect::<Vec<_>>()
    };
}

impl DataSet {
    /// Apply the intensity rescale transform to the native pixel data
    /// in place.
    ///
    /// The transform only takes place when both Rescale Slope and
    /// Rescale Intercept are present and the set holds a native pixel
    /// array; the return value tells whether it did. The forward
    /// direction widens the samples to floating point; the backward
    /// direction rounds and narrows them back to the stored type
    /// declared by the bit depth attributes.
    pub fn rescale(&mut self, direction: RescaleDirection) -> Result<bool> {
        let (slope, intercept) = match rescale_parameters(self) {
            Some(params) => params,
            None => return Ok(false),
        };
        let elem = match self.remove(tags::PIXEL_DATA) {
            Some(e) if matches!(e.value(), Value::Pixels(_)) => e,
            Some(e) => {
                self.put(e);
                return Ok(false);
            }
            None => return Ok(false),
        };
        let vr = elem.vr();
        let pixels = match elem.into_value() {
            Value::Pixels(p) => p,
            _ => unreachable!(),
        };

        let transformed = match direction {
            RescaleDirection::Forward => forward_rescale(&pixels, slope, intercept),
            RescaleDirection::Backward => backward_rescale(self, vr, &pixels, slope, intercept),
        };
        match transformed {
            Ok(p) => {
                self.put(DataElement::new(tags::PIXEL_DATA, vr, p));
                Ok(true)
            }
            Err(e) => {
                // leave the set untouched on failure
                self.put(DataElement::new(tags::PIXEL_DATA, vr, pixels));
                Err(e)
            }
        }
    }
}

fn forward_rescale(pixels: &PixelArray, slope: f64, intercept: f64) -> Result<PixelArray> {
    let f = |v: f64| (v * slope + intercept) as f32;
    let (shape, samples) = match pixels {
        PixelArray::U8(a) => (a.raw_dim(), map_samples!(a, f)),
        PixelArray::I8(a) => (a.raw_dim(), map_samples!(a, f)),
        PixelArray::U16(a) => (a.raw_dim(), map_samples!(a, f)),
        PixelArray::I16(a) => (a.raw_dim(), map_samples!(a, f)),
        PixelArray::F32(a) => (a.raw_dim(), map_samples!(a, f)),
    };
    // iteration above follows the logical order of the array view,
    // so the rebuilt array has the same indexing
    Ok(PixelArray::F32(
        ArrayD::from_shape_vec(shape, samples).context(ShapeSnafu)?,
    ))
}

fn backward_rescale(
    ds: &DataSet,
    vr: VR,
    pixels: &PixelArray,
    slope: f64,
    intercept: f64,
) -> Result<PixelArray> {
    let (bits, signed) = sample_format(ds, vr)?;
    let f = |v: f64| ((v - intercept) / slope).round();

    let (shape, samples) = match pixels {
        PixelArray::U8(a) => (a.raw_dim(), map_samples!(a, f)),
        PixelArray::I8(a) => (a.raw_dim(), map_samples!(a, f)),
        PixelArray::U16(a) => (a.raw_dim(), map_samples!(a, f)),
        PixelArray::I16(a) => (a.raw_dim(), map_samples!(a, f)),
        PixelArray::F32(a) => (a.raw_dim(), map_samples!(a, f)),
    };

    fn narrow<T: NumCast>(samples: Vec<f64>) -> Result<Vec<T>> {
        samples
            .into_iter()
            .map(|v| NumCast::from(v).context(NumericCastSnafu { value: v }))
            .collect()
    }

    let out = match (bits, signed) {
        (8, false) => PixelArray::U8(
            ArrayD::from_shape_vec(shape, narrow(samples)?).context(ShapeSnafu)?,
        ),
        (8, true) => PixelArray::I8(
            ArrayD::from_shape_vec(shape, narrow(samples)?).context(ShapeSnafu)?,
        ),
        (16, false) => PixelArray::U16(
            ArrayD::from_shape_vec(shape, narrow(samples)?).context(ShapeSnafu)?,
        ),
        (16, true) => PixelArray::I16(
            ArrayD::from_shape_vec(shape, narrow(samples)?).context(ShapeSnafu)?,
        ),
        _ => unreachable!(),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PrimitiveValue;
    use byteordered::Endianness;
    use smallvec::smallvec;

    fn image_set(rows: u16, cols: u16, samples: u16, planar: u16, bits: u16) -> DataSet {
        let mut ds = DataSet::new(Endianness::Little, true);
        ds.put(DataElement::new(
            tags::ROWS,
            VR::US,
            Value::from(PrimitiveValue::U16(smallvec![rows])),
        ));
        ds.put(DataElement::new(
            tags::COLUMNS,
            VR::US,
            Value::from(PrimitiveValue::U16(smallvec![cols])),
        ));
        ds.put(DataElement::new(
            tags::SAMPLES_PER_PIXEL,
            VR::US,
            Value::from(PrimitiveValue::U16(smallvec![samples])),
        ));
        ds.put(DataElement::new(
            tags::PLANAR_CONFIGURATION,
            VR::US,
            Value::from(PrimitiveValue::U16(smallvec![planar])),
        ));
        ds.put(DataElement::new(
            tags::BITS_ALLOCATED,
            VR::US,
            Value::from(PrimitiveValue::U16(smallvec![bits])),
        ));
        ds
    }

    #[test]
    fn native_interleaved_rgb() {
        // 2 columns x 3 rows of interleaved RGB bytes:
        // pixel (c, r) has value 10*r + c in each sample, with the
        // sample index added on top
        let ds = image_set(3, 2, 3, 0, 8);
        let mut data = Vec::new();
        for r in 0..3u8 {
            for c in 0..2u8 {
                for s in 0..3u8 {
                    data.push(10 * r + c + s);
                }
            }
        }
        let pixels = decode_native(&ds, VR::OB, &data).unwrap();
        assert_eq!(pixels.shape(), &[2, 3, 3]);
        match &pixels {
            PixelArray::U8(a) => {
                assert_eq!(a[[0, 0, 0]], 0);
                assert_eq!(a[[1, 0, 0]], 1);
                assert_eq!(a[[0, 1, 0]], 10);
                assert_eq!(a[[1, 2, 2]], 23);
            }
            _ => panic!("expected u8 pixels"),
        }

        // writing restores the original stream order
        let out = encode_native(&ds, &pixels, true).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn native_planar_configuration() {
        // same image, but each sample plane stored contiguously
        let ds = image_set(3, 2, 3, 1, 8);
        let mut data = Vec::new();
        for s in 0..3u8 {
            for r in 0..3u8 {
                for c in 0..2u8 {
                    data.push(10 * r + c + s);
                }
            }
        }
        let pixels = decode_native(&ds, VR::OB, &data).unwrap();
        assert_eq!(pixels.shape(), &[2, 3, 3]);
        match &pixels {
            PixelArray::U8(a) => {
                assert_eq!(a[[0, 0, 0]], 0);
                assert_eq!(a[[0, 0, 1]], 1);
                assert_eq!(a[[1, 1, 2]], 13);
            }
            _ => panic!("expected u8 pixels"),
        }

        let out = encode_native(&ds, &pixels, true).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn native_16_bit_big_endian() {
        let mut ds = image_set(2, 2, 1, 0, 16);
        ds.set_encoding(Endianness::Big, true);
        ds.put(DataElement::new(
            tags::PIXEL_REPRESENTATION,
            VR::US,
            Value::from(PrimitiveValue::U16(smallvec![1])),
        ));
        // values -2, -1, 0, 513 in big endian words
        let data = [0xFF, 0xFE, 0xFF, 0xFF, 0x00, 0x00, 0x02, 0x01];
        let pixels = decode_native(&ds, VR::OW, &data).unwrap();
        assert_eq!(pixels.shape(), &[2, 2]);
        match &pixels {
            PixelArray::I16(a) => {
                assert_eq!(a[[0, 0]], -2);
                assert_eq!(a[[1, 0]], -1);
                assert_eq!(a[[0, 1]], 0);
                assert_eq!(a[[1, 1]], 513);
            }
            _ => panic!("expected i16 pixels"),
        }
        let out = encode_native(&ds, &pixels, true).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn implicit_mode_requires_words() {
        let ds = image_set(1, 2, 1, 0, 8);
        let pixels = decode_native(&ds, VR::OB, &[1, 2]).unwrap();
        let err = encode_native(&ds, &pixels, false).unwrap_err();
        assert!(matches!(err, Error::ImplicitPixelNotWords { .. }));
    }

    #[test]
    fn short_payload_is_an_error() {
        let ds = image_set(4, 4, 1, 0, 16);
        let err = decode_native(&ds, VR::OW, &[0u8; 16]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { expected: 32, .. }));
    }

    #[test]
    fn rescale_round_trip() {
        let mut ds = image_set(2, 2, 1, 0, 16);
        ds.put(DataElement::new(
            tags::PIXEL_REPRESENTATION,
            VR::US,
            Value::from(PrimitiveValue::U16(smallvec![1])),
        ));
        ds.put(DataElement::new(
            tags::RESCALE_INTERCEPT,
            VR::DS,
            Value::from(PrimitiveValue::F64(smallvec![-1024.0])),
        ));
        ds.put(DataElement::new(
            tags::RESCALE_SLOPE,
            VR::DS,
            Value::from(PrimitiveValue::F64(smallvec![1.0])),
        ));
        let data: [u8; 8] = [75, 0, 0, 8, 0, 0, 108, 8]; // 75, 2048, 0, 2156 LE
        let pixels = decode_native(&ds, VR::OW, &data).unwrap();
        ds.put(DataElement::new(tags::PIXEL_DATA, VR::OW, pixels));

        assert!(ds.rescale(RescaleDirection::Forward).unwrap());
        match ds.get(tags::PIXEL_DATA).unwrap() {
            Value::Pixels(PixelArray::F32(a)) => {
                let min = a.iter().cloned().fold(f32::INFINITY, f32::min);
                let max = a.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
                assert_eq!(min, -1024.0);
                assert_eq!(max, 1132.0);
            }
            other => panic!("expected f32 pixels, got {:?}", other),
        }

        assert!(ds.rescale(RescaleDirection::Backward).unwrap());
        match ds.get(tags::PIXEL_DATA).unwrap() {
            Value::Pixels(PixelArray::I16(a)) => {
                let mut values: Vec<_> = a.iter().cloned().collect();
                values.sort_unstable();
                assert_eq!(values, [0, 75, 2048, 2156]);
            }
            other => panic!("expected i16 pixels, got {:?}", other),
        }
    }

    #[test]
    fn rescale_without_parameters_is_a_no_op() {
        let mut ds = image_set(1, 1, 1, 0, 8);
        assert!(!ds.rescale(RescaleDirection::Forward).unwrap());
    }
}
