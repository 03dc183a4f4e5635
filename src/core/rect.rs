//! Rectangle type used to describe region views.

use crate::core::sys;

/// An axis-aligned rectangle: origin `(x, y)` plus extent.
///
/// This layer only marshals the rectangle; bounds checking against the
/// parent mat is performed by the native layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub(crate) fn to_raw(self) -> sys::Rect {
        sys::Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}
