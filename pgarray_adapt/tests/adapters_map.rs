//! Tests for adapter resolution through an [`AdaptersMap`].
#![allow(missing_docs)]

use std::sync::Arc;

use pgarray_adapt::{
    AdaptError, AdaptersMap, DataError, Dumper, DumperRuntimePlugin, Format, Loader, LoaderPlugin,
    LoaderRuntimePlugin, Oid, Transformer, Value, ValueKind,
};

const TEST_OID: Oid = 90_001;

#[derive(Debug)]
struct ShoutDumper;

impl Dumper for ShoutDumper {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
        match value {
            Value::Text(s) => Ok(s.to_uppercase().into_bytes()),
            other => Err(DataError::UnexpectedValue {
                expected: ValueKind::Text,
                found: other.kind(),
            }
            .into()),
        }
    }

    fn oid(&self) -> Oid {
        TEST_OID
    }
}

#[derive(Debug)]
struct LengthLoader {
    offset: i32,
}

impl Loader for LengthLoader {
    fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
        let len = i32::try_from(data.len()).map_err(|_| DataError::ElementTooLarge(data.len()))?;
        Ok(Value::Int4(len + self.offset))
    }
}

fn create_length_loader(_transformer: &Transformer) -> Arc<dyn Loader> {
    Arc::new(LengthLoader { offset: 0 })
}

inventory::submit! {
    LoaderPlugin::new(TEST_OID, Format::Text, create_length_loader)
}

#[test]
fn compile_time_loader() {
    let adapters = Arc::new(AdaptersMap::default());
    let transformer = Transformer::new(adapters.clone());
    assert!(adapters.has_loader(TEST_OID, Format::Text));
    assert!(!adapters.has_loader(TEST_OID, Format::Binary));

    let loader = transformer.get_loader(TEST_OID, Format::Text).unwrap();
    assert_eq!(loader.load(b"abc").unwrap(), Value::Int4(3));

    assert_eq!(
        transformer.get_loader(TEST_OID, Format::Binary).unwrap_err(),
        AdaptError::NoLoader {
            oid: TEST_OID,
            format: Format::Binary
        }
    );
}

#[test]
fn runtime_loader_takes_precedence() {
    let adapters = Arc::new(AdaptersMap::default());
    let transformer = Transformer::new(adapters.clone());

    let handle = adapters.register_loader(
        TEST_OID,
        Format::Text,
        LoaderRuntimePlugin::new("length_plus_ten", |_transformer: &Transformer| {
            Arc::new(LengthLoader { offset: 10 }) as Arc<dyn Loader>
        }),
    );
    let loader = transformer.get_loader(TEST_OID, Format::Text).unwrap();
    assert_eq!(loader.load(b"abc").unwrap(), Value::Int4(13));

    assert!(adapters.unregister_loader(TEST_OID, Format::Text, &handle));
    let loader = transformer.get_loader(TEST_OID, Format::Text).unwrap();
    assert_eq!(loader.load(b"abc").unwrap(), Value::Int4(3));
}

#[test]
fn runtime_dumper() {
    let adapters = Arc::new(AdaptersMap::default());
    let transformer = Transformer::new(adapters.clone());
    let value = Value::from("hi");

    // Compile-time dumpers of other crates are absent here
    assert!(!adapters.has_dumper(ValueKind::Text, Format::Text));
    assert_eq!(
        transformer.get_dumper(&value, Format::Text).unwrap_err(),
        AdaptError::NoDumper {
            kind: ValueKind::Text,
            format: Format::Text
        }
    );

    let handle = adapters.register_dumper(
        ValueKind::Text,
        Format::Text,
        DumperRuntimePlugin::new("shout", |_transformer: &Transformer| {
            Arc::new(ShoutDumper) as Arc<dyn Dumper>
        }),
    );
    assert!(adapters.has_dumper(ValueKind::Text, Format::Text));
    let dumper = transformer.get_dumper(&value, Format::Text).unwrap();
    assert_eq!(dumper.dump(&value).unwrap(), b"HI");
    assert_eq!(dumper.oid(), TEST_OID);
    assert!(matches!(
        dumper.dump(&Value::Int4(1)),
        Err(AdaptError::Data(DataError::UnexpectedValue { .. }))
    ));

    assert!(adapters.unregister_dumper(ValueKind::Text, Format::Text, &handle));
    assert!(adapters.runtime_dumpers().is_empty());
}
