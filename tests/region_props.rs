//! Property tests for mat construction and region views.

use cvmat::{Mat, MatType, Rect};
use proptest::prelude::*;

fn mat_types() -> impl Strategy<Value = MatType> {
    (0..=6i32).prop_map(|code| MatType::from_raw(code).unwrap())
}

proptest! {
    #[test]
    fn prop_new_with_size_reports_shape(
        rows in 0..64i32,
        cols in 0..64i32,
        t in mat_types(),
    ) {
        let m = Mat::new_with_size(rows, cols, t);
        prop_assert_eq!(m.rows(), rows);
        prop_assert_eq!(m.cols(), cols);
        prop_assert_eq!(m.empty(), rows == 0 || cols == 0);
        prop_assert_eq!(m.mat_type().unwrap(), t);
    }

    #[test]
    fn prop_region_accepts_exactly_in_bounds_rects(
        rows in 1..32i32,
        cols in 1..32i32,
        x in 0..40i32,
        y in 0..40i32,
        width in 0..40i32,
        height in 0..40i32,
    ) {
        let m = Mat::new_with_size(rows, cols, MatType::UInt8);
        let in_bounds = x + width <= cols && y + height <= rows;
        match m.region(Rect::new(x, y, width, height)) {
            Ok(view) => {
                prop_assert!(in_bounds);
                prop_assert_eq!(view.rows(), height);
                prop_assert_eq!(view.cols(), width);
            }
            Err(_) => prop_assert!(!in_bounds),
        };
    }

    #[test]
    fn prop_type_codes_are_stable(code in 0..=6i32) {
        prop_assert_eq!(MatType::from_raw(code).unwrap().to_raw(), code);
    }
}
