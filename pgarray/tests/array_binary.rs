//! Binary format arrays through the default adapters.

use pgarray::array::{EncodedArray, decode_binary, encode_binary};
use pgarray::{AdaptError, DataError, Format, Value, oid};

fn encode(value: &Value) -> Result<Vec<u8>, AdaptError> {
    encode_binary(&pgarray::transformer(), value.as_list().unwrap()).map(EncodedArray::into_data)
}

fn be_u32(data: &[u8], index: usize) -> u32 {
    u32::from_be_bytes(data[index * 4..index * 4 + 4].try_into().unwrap())
}

#[test]
fn ragged() {
    let value = Value::from(vec![vec![1i32, 2], vec![3]]);
    assert_eq!(
        encode(&value),
        Err(DataError::InconsistentLengths {
            expected: 2,
            found: 1
        }
        .into())
    );
}

#[test]
fn empty_nested() {
    let value = Value::from(vec![vec![], vec![1i32]]);
    assert_eq!(encode(&value), Err(DataError::EmptyNestedList.into()));
}

#[test]
fn inconsistent_depths() {
    let value = Value::List(vec![Value::from(vec![1i32]), Value::Int4(2)]);
    assert_eq!(encode(&value), Err(DataError::InconsistentDepths.into()));

    let value = Value::List(vec![Value::Int4(1), Value::from(vec![2i32])]);
    assert_eq!(encode(&value), Err(DataError::InconsistentDepths.into()));
}

#[test]
fn nulls() {
    let transformer = pgarray::transformer();
    let value = Value::from(vec![Some(1i32), None, Some(3)]);
    let encoded = encode_binary(&transformer, value.as_list().unwrap()).unwrap();
    assert_eq!(encoded.oid(), oid::INT4_ARRAY);
    let data = encoded.data();
    assert_eq!(be_u32(data, 0), 1); // ndims
    assert_eq!(be_u32(data, 1), 1); // has_null
    assert_eq!(be_u32(data, 2), oid::INT4);
    assert_eq!(be_u32(data, 3), 3); // extent
    assert_eq!(be_u32(data, 4), 1); // lower bound
    assert_eq!(decode_binary(&transformer, data), Ok(value));
}

#[test]
fn no_nulls() {
    let data = encode(&Value::from(vec![1i16, 2])).unwrap();
    assert_eq!(be_u32(&data, 1), 0);
    assert_eq!(be_u32(&data, 2), oid::INT2);
}

#[test]
fn empty() {
    let data = encode(&Value::List(vec![])).unwrap();
    assert_eq!(data.len(), 12);
    assert_eq!(be_u32(&data, 0), 0);
    assert_eq!(be_u32(&data, 1), 0);
    assert_eq!(be_u32(&data, 2), oid::TEXT);
    assert_eq!(
        decode_binary(&pgarray::transformer(), &data),
        Ok(Value::List(vec![]))
    );
}

#[test]
fn round_trip() {
    let transformer = pgarray::transformer();
    let values = [
        Value::from(vec![Some(true), None]),
        Value::from(vec![vec![vec![1i16, 2], vec![3, 4]], vec![vec![5, 6], vec![7, 8]]]),
        Value::from(vec![i32::MIN, i32::MAX]),
        Value::from(vec![vec![Some(1i64)], vec![None]]),
        Value::from(vec![1.5f32, -2.0]),
        Value::from(vec![f64::MIN_POSITIVE, f64::MAX]),
        Value::from(vec![vec!["a", "b c"], vec!["", "NULL"]]),
        Value::from(vec![&b"\x00\x01"[..], &b""[..]]),
    ];
    for value in values {
        let encoded = encode_binary(&transformer, value.as_list().unwrap()).unwrap();
        assert_eq!(decode_binary(&transformer, encoded.data()), Ok(value.clone()));

        let loader = transformer.get_loader(encoded.oid(), Format::Binary).unwrap();
        assert_eq!(loader.load(encoded.data()), Ok(value));
    }
}

#[test]
fn truncated() {
    let transformer = pgarray::transformer();
    let data = encode(&Value::from(vec![vec!["abc", "def"]])).unwrap();
    for len in 0..data.len() {
        let result = decode_binary(&transformer, &data[..len]);
        assert!(
            matches!(result, Err(AdaptError::Data(DataError::Truncated { .. }))),
            "{len}: {result:?}"
        );
    }
    assert!(decode_binary(&transformer, &data).is_ok());
}

#[test]
fn trailing_data() {
    let transformer = pgarray::transformer();
    let mut data = encode(&Value::from(vec![7i32])).unwrap();
    data.extend_from_slice(b"trailing");
    assert_eq!(decode_binary(&transformer, &data), Ok(Value::from(vec![7i32])));
}

#[test]
fn unknown_element_oid() {
    let transformer = pgarray::transformer();
    let mut data = encode(&Value::from(vec![7i32])).unwrap();
    data[8..12].copy_from_slice(&oid::UUID.to_be_bytes());
    assert_eq!(
        decode_binary(&transformer, &data),
        Err(AdaptError::NoLoader {
            oid: oid::UUID,
            format: Format::Binary
        })
    );
}

#[test]
fn element_fails_to_load() {
    let transformer = pgarray::transformer();
    let mut data = encode(&Value::from(vec![7i32])).unwrap();
    // Declare int2 elements, the payload is 4 bytes
    data[8..12].copy_from_slice(&oid::INT2.to_be_bytes());
    assert!(matches!(
        decode_binary(&transformer, &data),
        Err(AdaptError::Data(DataError::InvalidValue { .. }))
    ));
}
