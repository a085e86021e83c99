//! The binary format of arrays.
//!
//! ```text
//! u32 ndims | u32 has_null | u32 element oid
//! ndims x (u32 extent | u32 lower bound)
//! elements x (i32 length, -1 for NULL | length bytes)
//! ```
//!
//! Elements are in row-major order and all integers are big-endian.
//! An empty array has no dimensions and no elements.

use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use bytes::{Buf, BufMut};
use pgarray_adapt::{
    AdaptError, DataError, Dumper, Format, Loader, Oid, Transformer, Value, ValueKind, oid,
};

use super::{EncodedArray, array_oid};
use crate::{macros::register_dumper, types::unexpected_value};

const NULL_LENGTH: i32 = -1;
const LOWER_BOUND: u32 = 1;

/// Reads big-endian fields from `data`, failing with [`DataError::Truncated`] rather than reading out of bounds.
struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn ensure(&self, needed: usize) -> Result<(), DataError> {
        if self.data.len() < needed {
            Err(DataError::Truncated {
                offset: self.offset,
                needed,
                available: self.data.len(),
            })
        } else {
            Ok(())
        }
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], DataError> {
        self.ensure(needed)?;
        let (head, tail) = self.data.split_at(needed);
        self.data = tail;
        self.offset += needed;
        Ok(head)
    }

    fn read_u32(&mut self) -> Result<u32, DataError> {
        self.ensure(4)?;
        self.offset += 4;
        Ok(self.data.get_u32())
    }

    fn read_i32(&mut self) -> Result<i32, DataError> {
        self.ensure(4)?;
        self.offset += 4;
        Ok(self.data.get_i32())
    }
}

/// The flat sequence of the elements of an array, loaded one at a time.
///
/// The sequence is unbounded, the consumer takes as many elements as the dimensions declare.
struct Elements<'a> {
    reader: ByteReader<'a>,
    loader: Arc<dyn Loader>,
}

impl Elements<'_> {
    fn read_element(&mut self) -> Result<Value, AdaptError> {
        match self.reader.read_i32()? {
            NULL_LENGTH => Ok(Value::Null),
            length => {
                let length = usize::try_from(length)
                    .map_err(|_| DataError::InvalidElementLength(length))?;
                self.loader.load(self.reader.take(length)?)
            }
        }
    }
}

impl Iterator for Elements<'_> {
    type Item = Result<Value, AdaptError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.read_element())
    }
}

/// Assemble the elements into nested lists with the extents `dims`.
fn build(dims: &[usize], elements: &mut Elements) -> Result<Value, AdaptError> {
    let items: Vec<Value> = match dims {
        [] => return Err(AdaptError::Internal("array without dimensions".to_string())),
        [extent] => elements.by_ref().take(*extent).collect::<Result<_, _>>()?,
        [extent, inner @ ..] => (0..*extent)
            .map(|_| build(inner, elements))
            .collect::<Result<_, _>>()?,
    };
    Ok(Value::List(items))
}

/// Return the extents of `list`, following the first item of each dimension.
fn dimensions(list: &[Value], max_depth: usize) -> Result<Vec<usize>, DataError> {
    let mut dims = Vec::new();
    let mut current = list;
    loop {
        let Some(first) = current.first() else {
            return Err(DataError::EmptyNestedList);
        };
        if dims.len() == max_depth {
            return Err(DataError::NestingTooDeep { max_depth });
        }
        dims.push(current.len());
        match first {
            Value::List(inner) => current = inner,
            _ => return Ok(dims),
        }
    }
}

struct BinaryEncoder<'a> {
    transformer: &'a Transformer,
    dims: Vec<usize>,
    out: Vec<u8>,
    has_null: bool,
    base_oid: Option<Oid>,
}

impl BinaryEncoder<'_> {
    fn encode_list(&mut self, list: &[Value], dim: usize) -> Result<(), AdaptError> {
        let expected = self.dims[dim];
        if list.len() != expected {
            return Err(DataError::InconsistentLengths {
                expected,
                found: list.len(),
            }
            .into());
        }

        let leaf = dim + 1 == self.dims.len();
        for item in list {
            match item {
                Value::List(inner) if !leaf => self.encode_list(inner, dim + 1)?,
                _ if !leaf => return Err(DataError::InconsistentDepths.into()),
                Value::List(_) => return Err(DataError::InconsistentDepths.into()),
                Value::Null => {
                    self.has_null = true;
                    self.out.put_i32(NULL_LENGTH);
                }
                item => {
                    let dumper = self.transformer.get_dumper(item, Format::Binary)?;
                    let data = dumper.dump(item)?;
                    let length = i32::try_from(data.len())
                        .map_err(|_| DataError::ElementTooLarge(data.len()))?;
                    self.out.put_i32(length);
                    self.out.put_slice(&data);
                    self.base_oid.get_or_insert_with(|| dumper.oid());
                }
            }
        }
        Ok(())
    }
}

/// Encode `list` to the binary format.
///
/// `list` must be rectangular: the lists at each depth have the same length, and elements are only at the deepest level.
/// The element oid of the header and the array oid are those of the first non-`NULL` element, `text` and `text[]` if there is none.
///
/// # Errors
/// Returns a [`DataError`] if `list` is not rectangular, contains an empty nested list, or is nested too deep.
/// Returns an error if there is no dumper for an element or an element fails to dump.
pub fn encode_binary(
    transformer: &Transformer,
    list: &[Value],
) -> Result<EncodedArray, AdaptError> {
    if list.is_empty() {
        let mut out = Vec::with_capacity(12);
        out.put_u32(0);
        out.put_u32(0);
        out.put_u32(oid::TEXT);
        return Ok(EncodedArray::new(out, oid::TEXT_ARRAY));
    }

    let dims = dimensions(list, transformer.options().max_array_depth())?;
    let mut out = Vec::with_capacity(12 + 8 * dims.len());
    let ndims =
        u32::try_from(dims.len()).map_err(|_| DataError::DimensionTooLarge(dims.len()))?;
    out.put_u32(ndims);
    out.put_u32(0); // has_null
    out.put_u32(0); // element oid
    for &extent in &dims {
        let extent = u32::try_from(extent).map_err(|_| DataError::DimensionTooLarge(extent))?;
        out.put_u32(extent);
        out.put_u32(LOWER_BOUND);
    }

    let mut encoder = BinaryEncoder {
        transformer,
        dims,
        out,
        has_null: false,
        base_oid: None,
    };
    encoder.encode_list(list, 0)?;

    let BinaryEncoder {
        mut out,
        has_null,
        base_oid,
        ..
    } = encoder;
    out[4..8].copy_from_slice(&u32::from(has_null).to_be_bytes());
    out[8..12].copy_from_slice(&base_oid.unwrap_or(oid::TEXT).to_be_bytes());
    Ok(EncodedArray::new(out, array_oid(transformer, base_oid)))
}

/// Decode a binary format array.
///
/// Elements are loaded with the binary loader of the element oid in the header.
/// A zero element oid in the header is replaced with `default_base_oid`.
/// Data after the last element is ignored.
fn decode(
    transformer: &Transformer,
    data: &[u8],
    default_base_oid: Option<Oid>,
) -> Result<Value, AdaptError> {
    let mut reader = ByteReader::new(data);
    let ndims = reader.read_u32()? as usize;
    let _has_null = reader.read_u32()?;
    let base_oid = reader.read_u32()?;
    if ndims == 0 {
        return Ok(Value::List(vec![]));
    }

    let max_depth = transformer.options().max_array_depth();
    if ndims > max_depth {
        return Err(DataError::NestingTooDeep { max_depth }.into());
    }
    let base_oid = match (base_oid, default_base_oid) {
        (0, Some(default_base_oid)) => default_base_oid,
        (base_oid, _) => base_oid,
    };
    let loader = transformer.get_loader(base_oid, Format::Binary)?;

    let mut dims = Vec::with_capacity(ndims);
    for dimension in 0..ndims {
        let extent = reader.read_u32()? as usize;
        let _lower_bound = reader.read_u32()?;
        // An empty array has no dimensions
        if extent == 0 {
            return Err(DataError::ZeroExtent { dimension }.into());
        }
        dims.push(extent);
    }

    // Every element has at least a length field
    let count = dims.iter().fold(1usize, |count, &extent| count.saturating_mul(extent));
    reader.ensure(count.saturating_mul(4))?;

    let mut elements = Elements { reader, loader };
    build(&dims, &mut elements)
}

/// Decode a binary format array.
///
/// Elements are loaded with the binary loader of the element oid in the header.
/// Data after the last element is ignored.
///
/// # Errors
/// Returns an error if
///  - `data` is shorter than its header, dimensions, or elements declare,
///  - the array has more dimensions than [`AdaptOptions::max_array_depth`](pgarray_adapt::AdaptOptions::max_array_depth),
///  - there is no binary loader for the element oid, or
///  - an element fails to load.
pub fn decode_binary(transformer: &Transformer, data: &[u8]) -> Result<Value, AdaptError> {
    decode(transformer, data, None)
}

/// The binary format array dumper.
///
/// [`Dumper::oid`] returns the array oid of the last dumped array, `text[]` before the first.
#[derive(Debug)]
pub struct ArrayBinaryDumper {
    transformer: Transformer,
    last_oid: AtomicU32,
}
register_dumper!(ValueKind::List, Format::Binary, |transformer| {
    ArrayBinaryDumper::new(transformer.clone())
});

impl ArrayBinaryDumper {
    /// Create a new binary array dumper.
    #[must_use]
    pub fn new(transformer: Transformer) -> Self {
        Self {
            transformer,
            last_oid: AtomicU32::new(oid::TEXT_ARRAY),
        }
    }
}

impl Dumper for ArrayBinaryDumper {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
        let Value::List(list) = value else {
            return Err(unexpected_value(ValueKind::List, value));
        };
        let encoded = encode_binary(&self.transformer, list)?;
        self.last_oid.store(encoded.oid(), Ordering::Relaxed);
        Ok(encoded.into_data())
    }

    fn oid(&self) -> Oid {
        self.last_oid.load(Ordering::Relaxed)
    }
}

/// The binary format loader of arrays with `base_oid` elements.
///
/// The element oid in the header takes precedence, `base_oid` is used if the header has none.
#[derive(Debug, Clone)]
pub struct ArrayBinaryLoader {
    base_oid: Oid,
    transformer: Transformer,
}

impl ArrayBinaryLoader {
    /// Create a new binary array loader for elements of type `base_oid`.
    #[must_use]
    pub fn new(base_oid: Oid, transformer: Transformer) -> Self {
        Self {
            base_oid,
            transformer,
        }
    }

    /// Return the element type oid.
    #[must_use]
    pub fn base_oid(&self) -> Oid {
        self.base_oid
    }
}

impl Loader for ArrayBinaryLoader {
    fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
        decode(&self.transformer, data, Some(self.base_oid))
    }
}
