use super::*;
use crate::{CodecError, FormatError, SchemaError};

#[test]
fn skip_hints() {
    assert_eq!(ValueType::TEXT.skip_hint(), 0);
    assert_eq!(ValueType::Integer.skip_hint(), 4);
}

#[test]
fn text_decode_and_encode() {
    let v = ValueType::TEXT.decode(&[48, 57, 57]).unwrap();
    assert_eq!(v, Value::from("foo"));
    assert_eq!(ValueType::TEXT.encode(&v).unwrap(), vec![48, 57, 57]);
}

#[test]
fn integer_is_little_endian() {
    let v = ValueType::Integer.decode(&[1, 1, 0, 0]).unwrap();
    assert_eq!(v, Value::Integer(257));
    let v = ValueType::Integer.decode(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
    assert_eq!(v, Value::Integer(-1));
    assert_eq!(
        ValueType::Integer.encode(&Value::Integer(-2)).unwrap(),
        vec![0xFE, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn integer_requires_four_bytes() {
    let err = ValueType::Integer.decode(&[1, 2, 3]).unwrap_err();
    assert_eq!(
        err,
        CodecError::Format(FormatError::InvalidWidth {
            expected: 4,
            actual: 3
        })
    );
}

#[test]
fn round_trip_values() {
    for n in [0, 1, -1, 42, i32::MIN, i32::MAX] {
        let bytes = ValueType::Integer.encode(&Value::Integer(n)).unwrap();
        assert_eq!(ValueType::Integer.decode(&bytes).unwrap(), Value::Integer(n));
    }
    for s in ["", "Hello, World!", "a_b|c\\d", "line\nbreak"] {
        let bytes = ValueType::TEXT.encode(&Value::from(s)).unwrap();
        assert_eq!(ValueType::TEXT.decode(&bytes).unwrap(), Value::from(s));
    }
}

#[test]
fn text_limit() {
    let ty = ValueType::text_with_limit(3).unwrap();
    assert_eq!(ty.decode(&[48, 57, 57]).unwrap(), Value::from("foo"));

    let err = ty.decode(&[48, 57, 57, 57]).unwrap_err();
    assert_eq!(
        err,
        CodecError::Schema(SchemaError::InvalidSize { len: 4, limit: 3 })
    );
    assert!(ty.encode(&Value::from("food")).is_err());
}

#[test]
fn text_limit_bounds() {
    assert_eq!(
        ValueType::text_with_limit(0),
        Err(SchemaError::InvalidSizeLimit(0))
    );
    assert_eq!(
        ValueType::text_with_limit(255),
        Err(SchemaError::InvalidSizeLimit(255))
    );
    assert!(ValueType::text_with_limit(1).is_ok());
    assert!(ValueType::text_with_limit(254).is_ok());
}

#[test]
fn encode_rejects_other_kind() {
    let err = ValueType::Integer.encode(&Value::from("x")).unwrap_err();
    assert_eq!(
        err,
        CodecError::Schema(SchemaError::TypeMismatch {
            expected: "Integer",
            found: "Text"
        })
    );
}

#[test]
fn render() {
    assert_eq!(ValueType::Integer.render(&Value::Integer(-17)), "-17");
    assert_eq!(ValueType::TEXT.render(&Value::from("bob")), "bob");
}
