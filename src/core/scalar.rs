//! Scalar type used to pass multi-channel pixel values across the boundary.

use crate::core::sys;

/// A 4-element vector of doubles, typically a color in BGR(A) order.
///
/// Unused components default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scalar {
    pub val1: f64,
    pub val2: f64,
    pub val3: f64,
    pub val4: f64,
}

impl Scalar {
    pub fn new(val1: f64, val2: f64, val3: f64, val4: f64) -> Self {
        Scalar { val1, val2, val3, val4 }
    }

    /// A scalar with the same value in all four components.
    pub fn all(val: f64) -> Self {
        Scalar::new(val, val, val, val)
    }

    pub(crate) fn to_raw(self) -> sys::Scalar {
        sys::Scalar {
            val1: self.val1,
            val2: self.val2,
            val3: self.val3,
            val4: self.val4,
        }
    }
}
