//! The `int2`, `int4`, `int8`, `float4`, and `float8` types.
//!
//! The text format of integers is their decimal representation.
//! The text format of floats is their shortest round-trip representation, with `NaN`, `Infinity`, and `-Infinity` for the special values.
//! The binary format of all types is big-endian.

use pgarray_adapt::{AdaptError, DataError, Dumper, Format, Loader, Oid, Value, ValueKind, oid};

use super::{fixed_bytes, unexpected_value, utf8};
use crate::macros::{register_dumper, register_loader};

macro_rules! int_adapters {
    (
        $type:ty, $variant:ident, $oid:expr, $name:literal,
        $dumper:ident, $binary_dumper:ident, $loader:ident, $binary_loader:ident $(,)?
    ) => {
        #[doc = concat!("The text `", $name, "` dumper.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $dumper;
        register_dumper!(ValueKind::$variant, Format::Text, |_transformer| $dumper);

        impl Dumper for $dumper {
            fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
                match value {
                    Value::$variant(v) => Ok(itoa::Buffer::new().format(*v).as_bytes().to_vec()),
                    other => Err(unexpected_value(ValueKind::$variant, other)),
                }
            }

            fn oid(&self) -> Oid {
                $oid
            }
        }

        #[doc = concat!("The binary `", $name, "` dumper.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $binary_dumper;
        register_dumper!(ValueKind::$variant, Format::Binary, |_transformer| $binary_dumper);

        impl Dumper for $binary_dumper {
            fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
                match value {
                    Value::$variant(v) => Ok(v.to_be_bytes().to_vec()),
                    other => Err(unexpected_value(ValueKind::$variant, other)),
                }
            }

            fn oid(&self) -> Oid {
                $oid
            }
        }

        #[doc = concat!("The text `", $name, "` loader.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $loader;
        register_loader!($oid, Format::Text, |_transformer| $loader);

        impl Loader for $loader {
            fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
                let v = utf8($name, data)?
                    .parse::<$type>()
                    .map_err(|err| DataError::invalid_value($name, err))?;
                Ok(Value::$variant(v))
            }
        }

        #[doc = concat!("The binary `", $name, "` loader.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $binary_loader;
        register_loader!($oid, Format::Binary, |_transformer| $binary_loader);

        impl Loader for $binary_loader {
            fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
                let bytes = fixed_bytes($name, data)?;
                Ok(Value::$variant(<$type>::from_be_bytes(bytes)))
            }
        }
    };
}

int_adapters!(
    i16,
    Int2,
    oid::INT2,
    "int2",
    Int2Dumper,
    Int2BinaryDumper,
    Int2Loader,
    Int2BinaryLoader,
);
int_adapters!(
    i32,
    Int4,
    oid::INT4,
    "int4",
    Int4Dumper,
    Int4BinaryDumper,
    Int4Loader,
    Int4BinaryLoader,
);
int_adapters!(
    i64,
    Int8,
    oid::INT8,
    "int8",
    Int8Dumper,
    Int8BinaryDumper,
    Int8Loader,
    Int8BinaryLoader,
);

macro_rules! float_adapters {
    (
        $type:ty, $variant:ident, $oid:expr, $name:literal,
        $dumper:ident, $binary_dumper:ident, $loader:ident, $binary_loader:ident $(,)?
    ) => {
        #[doc = concat!("The text `", $name, "` dumper.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $dumper;
        register_dumper!(ValueKind::$variant, Format::Text, |_transformer| $dumper);

        impl Dumper for $dumper {
            fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
                match value {
                    Value::$variant(v) if v.is_nan() => Ok(b"NaN".to_vec()),
                    Value::$variant(v) if v.is_infinite() => Ok(if v.is_sign_positive() {
                        b"Infinity".to_vec()
                    } else {
                        b"-Infinity".to_vec()
                    }),
                    Value::$variant(v) => Ok(v.to_string().into_bytes()),
                    other => Err(unexpected_value(ValueKind::$variant, other)),
                }
            }

            fn oid(&self) -> Oid {
                $oid
            }
        }

        #[doc = concat!("The binary `", $name, "` dumper.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $binary_dumper;
        register_dumper!(ValueKind::$variant, Format::Binary, |_transformer| $binary_dumper);

        impl Dumper for $binary_dumper {
            fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
                match value {
                    Value::$variant(v) => Ok(v.to_be_bytes().to_vec()),
                    other => Err(unexpected_value(ValueKind::$variant, other)),
                }
            }

            fn oid(&self) -> Oid {
                $oid
            }
        }

        #[doc = concat!("The text `", $name, "` loader.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $loader;
        register_loader!($oid, Format::Text, |_transformer| $loader);

        impl Loader for $loader {
            fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
                // Rust parses `NaN`, `Infinity` and `-Infinity` case-insensitively
                let v = utf8($name, data)?
                    .parse::<$type>()
                    .map_err(|err| DataError::invalid_value($name, err))?;
                Ok(Value::$variant(v))
            }
        }

        #[doc = concat!("The binary `", $name, "` loader.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $binary_loader;
        register_loader!($oid, Format::Binary, |_transformer| $binary_loader);

        impl Loader for $binary_loader {
            fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
                let bytes = fixed_bytes($name, data)?;
                Ok(Value::$variant(<$type>::from_be_bytes(bytes)))
            }
        }
    };
}

float_adapters!(
    f32,
    Float4,
    oid::FLOAT4,
    "float4",
    Float4Dumper,
    Float4BinaryDumper,
    Float4Loader,
    Float4BinaryLoader,
);
float_adapters!(
    f64,
    Float8,
    oid::FLOAT8,
    "float8",
    Float8Dumper,
    Float8BinaryDumper,
    Float8Loader,
    Float8BinaryLoader,
);
