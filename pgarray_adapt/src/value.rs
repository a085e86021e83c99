use derive_more::Display;

/// A value exchanged with the server.
///
/// [`Value::List`] is an array value: a possibly nested sequence of values.
/// A well-formed multi-dimensional array is rectangular, with all sub-lists at one depth having the same length.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A SQL `NULL`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A 16-bit integer.
    Int2(i16),
    /// A 32-bit integer.
    Int4(i32),
    /// A 64-bit integer.
    Int8(i64),
    /// A single precision float.
    Float4(f32),
    /// A double precision float.
    Float8(f64),
    /// A string.
    Text(String),
    /// A byte string.
    Bytea(Vec<u8>),
    /// A list of values.
    List(Vec<Value>),
}

/// The kind of a [`Value`], used to select a [`Dumper`](crate::Dumper).
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`].
    #[display("null")]
    Null,
    /// [`Value::Bool`].
    #[display("bool")]
    Bool,
    /// [`Value::Int2`].
    #[display("int2")]
    Int2,
    /// [`Value::Int4`].
    #[display("int4")]
    Int4,
    /// [`Value::Int8`].
    #[display("int8")]
    Int8,
    /// [`Value::Float4`].
    #[display("float4")]
    Float4,
    /// [`Value::Float8`].
    #[display("float8")]
    Float8,
    /// [`Value::Text`].
    #[display("text")]
    Text,
    /// [`Value::Bytea`].
    #[display("bytea")]
    Bytea,
    /// [`Value::List`].
    #[display("list")]
    List,
}

impl Value {
    /// Return the kind of the value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int2(_) => ValueKind::Int2,
            Self::Int4(_) => ValueKind::Int4,
            Self::Int8(_) => ValueKind::Int8,
            Self::Float4(_) => ValueKind::Float4,
            Self::Float8(_) => ValueKind::Float8,
            Self::Text(_) => ValueKind::Text,
            Self::Bytea(_) => ValueKind::Bytea,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Returns true if the value is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Return the items if the value is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_value {
    ($type:ty, $variant:ident) => {
        impl From<$type> for Value {
            fn from(value: $type) -> Self {
                Self::$variant(value)
            }
        }
    };
}

impl_from_for_value!(bool, Bool);
impl_from_for_value!(i16, Int2);
impl_from_for_value!(i32, Int4);
impl_from_for_value!(i64, Int8);
impl_from_for_value!(f32, Float4);
impl_from_for_value!(f64, Float8);
impl_from_for_value!(String, Text);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytea(value.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_conversions() {
        assert_eq!(Value::from(1i32), Value::Int4(1));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(
            Value::from(vec![Some("a"), None]),
            Value::List(vec![Value::Text("a".to_string()), Value::Null])
        );
        assert_eq!(
            Value::from(vec![vec![1i16], vec![2]]),
            Value::List(vec![
                Value::List(vec![Value::Int2(1)]),
                Value::List(vec![Value::Int2(2)])
            ])
        );
        assert_eq!(Value::from(&b"\x01"[..]).kind(), ValueKind::Bytea);
    }

    #[test]
    fn value_kind() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert!(Value::Null.is_null());
        assert_eq!(Value::List(vec![]).kind().to_string(), "list");
        assert_eq!(Value::List(vec![]).as_list(), Some(&[][..]));
        assert!(Value::Int4(1).as_list().is_none());
    }
}
