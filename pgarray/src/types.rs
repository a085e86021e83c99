//! Dumpers and loaders of the builtin scalar types.
//!
//! | [`ValueKind`] | dumped as | loaded from |
//! |---|---|---|
//! | `Bool` | `bool` | `bool` |
//! | `Int2`, `Int4`, `Int8` | `int2`, `int4`, `int8` | `int2`, `int4`, `int8` |
//! | `Float4`, `Float8` | `float4`, `float8` | `float4`, `float8` |
//! | `Text` | `text` | `text`, `varchar`, `bpchar`, `name` |
//! | `Bytea` | `bytea` | `bytea` |
//!
//! All types support both the text and the binary format.

mod bool;
mod bytea;
mod numeric;
mod text;

pub use self::bool::{BoolBinaryDumper, BoolBinaryLoader, BoolDumper, BoolLoader};
pub use bytea::{ByteaBinaryDumper, ByteaBinaryLoader, ByteaDumper, ByteaLoader};
pub use numeric::{
    Float4BinaryDumper, Float4BinaryLoader, Float4Dumper, Float4Loader, Float8BinaryDumper,
    Float8BinaryLoader, Float8Dumper, Float8Loader, Int2BinaryDumper, Int2BinaryLoader,
    Int2Dumper, Int2Loader, Int4BinaryDumper, Int4BinaryLoader, Int4Dumper, Int4Loader,
    Int8BinaryDumper, Int8BinaryLoader, Int8Dumper, Int8Loader,
};
pub use text::{TextDumper, TextLoader};

use pgarray_adapt::{AdaptError, DataError, Value, ValueKind};

/// The error of a dumper of `expected` values receiving `value`.
pub(crate) fn unexpected_value(expected: ValueKind, value: &Value) -> AdaptError {
    DataError::UnexpectedValue {
        expected,
        found: value.kind(),
    }
    .into()
}

/// Split `data` into a fixed size array, as required by the binary format of fixed size types.
fn fixed_bytes<const N: usize>(
    type_name: &'static str,
    data: &[u8],
) -> Result<[u8; N], DataError> {
    data.try_into().map_err(|_| {
        DataError::invalid_value(
            type_name,
            format!("expected {N} bytes, found {}", data.len()),
        )
    })
}

/// Interpret `data` as UTF-8, as required by the text format.
fn utf8<'a>(type_name: &'static str, data: &'a [u8]) -> Result<&'a str, DataError> {
    std::str::from_utf8(data).map_err(|err| DataError::invalid_value(type_name, err))
}
