//! Tests for the Mat handle wrapper: lifecycle, shape queries, region views.

use cvmat::{Mat, MatType, Rect, Scalar};

#[test]
fn test_new_mat_is_empty() {
    let m = Mat::new();
    assert!(m.empty());
    assert_eq!(m.rows(), 0);
    assert_eq!(m.cols(), 0);
}

#[test]
fn test_new_with_size_reports_shape() {
    let m = Mat::new_with_size(4, 4, MatType::UInt8);
    assert!(!m.empty());
    assert_eq!(m.rows(), 4);
    assert_eq!(m.cols(), 4);
    assert_eq!(m.mat_type().unwrap(), MatType::UInt8);
}

#[test]
fn test_zero_sized_mat_is_valid_and_empty() {
    let m = Mat::new_with_size(0, 0, MatType::Float32);
    assert!(m.empty());
    assert_eq!(m.rows(), 0);
    assert_eq!(m.cols(), 0);
}

#[test]
fn test_close_is_idempotent() {
    let mut m = Mat::new_with_size(2, 2, MatType::UInt8);
    m.close();
    assert!(m.is_closed());
    // second close must be a safe no-op, not a double-free
    m.close();
    assert!(m.is_closed());
}

#[test]
#[should_panic(expected = "used after close")]
fn test_query_after_close_panics() {
    let mut m = Mat::new();
    m.close();
    let _ = m.rows();
}

#[test]
fn test_region_reports_sub_extent() {
    let m = Mat::new_with_size(4, 4, MatType::UInt8);
    let view = m.region(Rect::new(1, 1, 2, 2)).unwrap();
    assert_eq!(view.rows(), 2);
    assert_eq!(view.cols(), 2);
    assert!(!view.empty());
    assert_eq!(view.mat_type().unwrap(), MatType::UInt8);
}

#[test]
fn test_region_on_empty_mat_is_rejected() {
    let m = Mat::new();
    assert!(m.region(Rect::new(0, 0, 1, 1)).is_err());
}

#[test]
fn test_region_out_of_bounds_is_rejected() {
    let m = Mat::new_with_size(4, 4, MatType::UInt8);
    assert!(m.region(Rect::new(2, 2, 3, 3)).is_err());
    assert!(m.region(Rect::new(-1, 0, 2, 2)).is_err());
    assert!(m.region(Rect::new(0, 0, 5, 1)).is_err());
}

#[test]
fn test_region_writes_visible_through_parent() {
    let m = Mat::new_with_size(4, 4, MatType::UInt8);
    {
        let mut view = m.region(Rect::new(1, 1, 2, 2)).unwrap();
        view.set_to(Scalar::all(7.0));
    }
    // the view aliases the parent's storage rather than copying it
    assert_eq!(m.get_uchar(1, 1), 7);
    assert_eq!(m.get_uchar(2, 2), 7);
    // elements outside the viewed block are untouched
    assert_eq!(m.get_uchar(0, 0), 0);
    assert_eq!(m.get_uchar(3, 3), 0);
}

#[test]
fn test_parent_writes_visible_through_region() {
    let mut m = Mat::new_with_size(3, 3, MatType::UInt8);
    m.set_to(Scalar::all(9.0));
    let view = m.region(Rect::new(0, 0, 2, 2)).unwrap();
    assert_eq!(view.get_uchar(0, 0), 9);
    assert_eq!(view.get_uchar(1, 1), 9);
}

#[test]
fn test_region_of_region_aliases_root_storage() {
    let m = Mat::new_with_size(6, 6, MatType::UInt8);
    let outer = m.region(Rect::new(1, 1, 4, 4)).unwrap();
    let mut inner = outer.region(Rect::new(1, 1, 2, 2)).unwrap();
    inner.set_to(Scalar::all(5.0));
    // inner origin is (2, 2) in root coordinates
    assert_eq!(m.get_uchar(2, 2), 5);
    assert_eq!(m.get_uchar(3, 3), 5);
    assert_eq!(m.get_uchar(1, 1), 0);
}

#[test]
fn test_set_to_float_mat() {
    let mut m = Mat::new_with_size(2, 2, MatType::Float32);
    m.set_to(Scalar::all(1.5));
    assert_eq!(m.get_float(0, 0), 1.5);
    assert_eq!(m.get_float(1, 1), 1.5);
}

#[test]
fn test_set_to_saturates_to_element_type() {
    let mut m = Mat::new_with_size(1, 1, MatType::UInt8);
    m.set_to(Scalar::all(300.0));
    assert_eq!(m.get_uchar(0, 0), 255);
}

#[test]
fn test_debug_formats() {
    let mut m = Mat::new_with_size(2, 3, MatType::Float64);
    assert_eq!(format!("{m:?}"), "Mat(2x3, float64)");
    m.close();
    assert_eq!(format!("{m:?}"), "Mat(closed)");
}
