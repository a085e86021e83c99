//! The `bytea` type.
//!
//! The text format is the hex format, `\x` followed by two hex digits per byte.
//! The binary format is the bytes.

use pgarray_adapt::{AdaptError, DataError, Dumper, Format, Loader, Oid, Value, ValueKind, oid};

use super::unexpected_value;
use crate::macros::{register_dumper, register_loader};

/// The text `bytea` dumper.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteaDumper;
register_dumper!(ValueKind::Bytea, Format::Text, |_transformer| ByteaDumper);

impl Dumper for ByteaDumper {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
        match value {
            Value::Bytea(bytes) => {
                let mut data = Vec::with_capacity(2 + 2 * bytes.len());
                data.extend_from_slice(br"\x");
                data.extend_from_slice(hex::encode(bytes).as_bytes());
                Ok(data)
            }
            other => Err(unexpected_value(ValueKind::Bytea, other)),
        }
    }

    fn oid(&self) -> Oid {
        oid::BYTEA
    }
}

/// The binary `bytea` dumper.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteaBinaryDumper;
register_dumper!(ValueKind::Bytea, Format::Binary, |_transformer| ByteaBinaryDumper);

impl Dumper for ByteaBinaryDumper {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
        match value {
            Value::Bytea(bytes) => Ok(bytes.clone()),
            other => Err(unexpected_value(ValueKind::Bytea, other)),
        }
    }

    fn oid(&self) -> Oid {
        oid::BYTEA
    }
}

/// The text `bytea` loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteaLoader;
register_loader!(oid::BYTEA, Format::Text, |_transformer| ByteaLoader);

impl Loader for ByteaLoader {
    fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
        let digits = data
            .strip_prefix(br"\x")
            .ok_or_else(|| DataError::invalid_value("bytea", "expected the hex format"))?;
        let bytes = hex::decode(digits).map_err(|err| DataError::invalid_value("bytea", err))?;
        Ok(Value::Bytea(bytes))
    }
}

/// The binary `bytea` loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteaBinaryLoader;
register_loader!(oid::BYTEA, Format::Binary, |_transformer| ByteaBinaryLoader);

impl Loader for ByteaBinaryLoader {
    fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
        Ok(Value::Bytea(data.to_vec()))
    }
}
