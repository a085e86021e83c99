//! The `bool` type.

use pgarray_adapt::{AdaptError, DataError, Dumper, Format, Loader, Oid, Value, ValueKind, oid};

use super::{fixed_bytes, unexpected_value};
use crate::macros::{register_dumper, register_loader};

/// The text `bool` dumper, `t` or `f`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolDumper;
register_dumper!(ValueKind::Bool, Format::Text, |_transformer| BoolDumper);

impl Dumper for BoolDumper {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
        match value {
            Value::Bool(true) => Ok(b"t".to_vec()),
            Value::Bool(false) => Ok(b"f".to_vec()),
            other => Err(unexpected_value(ValueKind::Bool, other)),
        }
    }

    fn oid(&self) -> Oid {
        oid::BOOL
    }
}

/// The binary `bool` dumper, a single byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolBinaryDumper;
register_dumper!(ValueKind::Bool, Format::Binary, |_transformer| BoolBinaryDumper);

impl Dumper for BoolBinaryDumper {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
        match value {
            Value::Bool(b) => Ok(vec![u8::from(*b)]),
            other => Err(unexpected_value(ValueKind::Bool, other)),
        }
    }

    fn oid(&self) -> Oid {
        oid::BOOL
    }
}

/// The text `bool` loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolLoader;
register_loader!(oid::BOOL, Format::Text, |_transformer| BoolLoader);

impl Loader for BoolLoader {
    fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
        match data {
            b"t" => Ok(Value::Bool(true)),
            b"f" => Ok(Value::Bool(false)),
            _ => Err(DataError::invalid_value(
                "bool",
                format!("unexpected '{}'", String::from_utf8_lossy(data)),
            )
            .into()),
        }
    }
}

/// The binary `bool` loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolBinaryLoader;
register_loader!(oid::BOOL, Format::Binary, |_transformer| BoolBinaryLoader);

impl Loader for BoolBinaryLoader {
    fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
        let [byte] = fixed_bytes::<1>("bool", data)?;
        Ok(Value::Bool(byte != 0))
    }
}
