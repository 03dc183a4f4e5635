//! Tests for the element-type tag enum.

use cvmat::MatType;

#[test]
fn test_type_size() {
    assert_eq!(MatType::UInt8.size_bytes(), 1);
    assert_eq!(MatType::Int8.size_bytes(), 1);
    assert_eq!(MatType::UInt16.size_bytes(), 2);
    assert_eq!(MatType::Int16.size_bytes(), 2);
    assert_eq!(MatType::Int32.size_bytes(), 4);
    assert_eq!(MatType::Float32.size_bytes(), 4);
    assert_eq!(MatType::Float64.size_bytes(), 8);
}

#[test]
fn test_type_roundtrip() {
    for code in 0..=6 {
        let t = MatType::from_raw(code).unwrap();
        assert_eq!(t.to_raw(), code);
    }
}

#[test]
fn test_type_invalid() {
    assert!(MatType::from_raw(7).is_err());
    assert!(MatType::from_raw(99).is_err());
    assert!(MatType::from_raw(-1).is_err());
}

#[test]
fn test_type_classification() {
    assert!(MatType::Float32.is_float());
    assert!(MatType::Float64.is_float());
    assert!(!MatType::Int32.is_float());

    assert!(MatType::UInt8.is_integer());
    assert!(MatType::Int16.is_integer());
    assert!(!MatType::Float64.is_integer());
}

#[test]
fn test_type_names() {
    assert_eq!(MatType::UInt8.name(), "uint8");
    assert_eq!(MatType::Int16.name(), "int16");
    assert_eq!(MatType::Float32.name(), "float32");
    assert_eq!(MatType::Float64.to_string(), "float64");
}
