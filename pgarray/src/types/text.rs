//! The `text` type and the other string types.
//!
//! Strings are UTF-8 in both formats.

use pgarray_adapt::{AdaptError, Dumper, Format, Loader, Oid, Value, ValueKind, oid};

use super::{unexpected_value, utf8};
use crate::macros::{register_dumper, register_loader};

/// The `text` dumper, for both formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDumper;
register_dumper!(ValueKind::Text, Format::Text, |_transformer| TextDumper);
register_dumper!(ValueKind::Text, Format::Binary, |_transformer| TextDumper);

impl Dumper for TextDumper {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
        match value {
            Value::Text(s) => Ok(s.as_bytes().to_vec()),
            other => Err(unexpected_value(ValueKind::Text, other)),
        }
    }

    fn oid(&self) -> Oid {
        oid::TEXT
    }
}

/// The string loader, for both formats and for `text`, `varchar`, `bpchar`, and `name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLoader;
register_loader!(oid::TEXT, Format::Text, |_transformer| TextLoader);
register_loader!(oid::TEXT, Format::Binary, |_transformer| TextLoader);
register_loader!(oid::VARCHAR, Format::Text, |_transformer| TextLoader);
register_loader!(oid::VARCHAR, Format::Binary, |_transformer| TextLoader);
register_loader!(oid::BPCHAR, Format::Text, |_transformer| TextLoader);
register_loader!(oid::BPCHAR, Format::Binary, |_transformer| TextLoader);
register_loader!(oid::NAME, Format::Text, |_transformer| TextLoader);
register_loader!(oid::NAME, Format::Binary, |_transformer| TextLoader);

impl Loader for TextLoader {
    fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
        Ok(Value::Text(utf8("text", data)?.to_string()))
    }
}
