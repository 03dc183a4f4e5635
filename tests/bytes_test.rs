//! Tests for byte-buffer marshalling across the C boundary.

use cvmat::core::bytes::{self, ByteArray};
use cvmat::Error;

#[test]
fn test_byte_array_roundtrip() {
    let data = vec![1u8, 2, 3, 255, 0, 42];
    let arr = ByteArray::from_bytes(&data).unwrap();
    let back = unsafe { bytes::to_vec(arr.as_raw()) };
    assert_eq!(back, data);
}

#[test]
fn test_byte_array_rejects_empty_source() {
    assert!(matches!(
        ByteArray::from_bytes(&[]),
        Err(Error::EmptyByteBuffer)
    ));
}

#[test]
fn test_to_vec_is_independent_copy() {
    let data = vec![9u8, 8, 7];
    let raw = ByteArray::from_bytes(&data).unwrap().as_raw();
    let copy = unsafe { bytes::to_vec(raw) };
    drop(data);
    assert_eq!(copy, vec![9u8, 8, 7]);
}

#[test]
fn test_to_vec_of_null_pair_is_empty() {
    let raw = cvmat::core::sys::ByteArray {
        data: std::ptr::null(),
        length: 0,
    };
    assert!(unsafe { bytes::to_vec(raw) }.is_empty());
}
