//! Raw FFI bindings to the native matrix library's C shim.
//!
//! These are low-level, unsafe bindings that map directly to the shim's C
//! interface. Users should prefer the safe wrappers in [`super::mat::Mat`].
//!
//! With the `native` feature enabled, these bind to the real C symbols of
//! the shim library. Without it, a pure-Rust fallback backend exports the
//! same ABI: a small dense-matrix implementation with refcounted storage and
//! aliasing region views, so the crate compiles and the full test suite runs
//! on hosts without the native library installed.

use std::ffi::c_void;
use std::os::raw::{c_char, c_double, c_int};

/// Opaque handle to a native matrix object.
pub type Mat = *mut c_void;

/// C mirror of a region rectangle: origin and extent.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: c_int,
    pub y: c_int,
    pub width: c_int,
    pub height: c_int,
}

/// C mirror of a 4-element scalar.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    pub val1: c_double,
    pub val2: c_double,
    pub val3: c_double,
    pub val4: c_double,
}

/// A borrowed (pointer, length) pair crossing the boundary in either
/// direction. Does not own the bytes it points at.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ByteArray {
    pub data: *const c_char,
    pub length: c_int,
}

// ─── `native` feature: link against the real C shim ──────────────────────────
#[cfg(feature = "native")]
#[allow(non_snake_case)]
extern "C" {
    pub fn Mat_New() -> Mat;
    pub fn Mat_NewWithSize(rows: c_int, cols: c_int, mat_type: c_int) -> Mat;
    pub fn Mat_Close(mat: Mat);
    pub fn Mat_Empty(mat: Mat) -> c_int;
    pub fn Mat_Rows(mat: Mat) -> c_int;
    pub fn Mat_Cols(mat: Mat) -> c_int;
    pub fn Mat_Type(mat: Mat) -> c_int;
    pub fn Mat_Region(mat: Mat, rect: Rect) -> Mat;
    pub fn Mat_SetTo(mat: Mat, value: Scalar);
    pub fn Mat_GetUChar(mat: Mat, row: c_int, col: c_int) -> u8;
    pub fn Mat_GetFloat(mat: Mat, row: c_int, col: c_int) -> c_float;
}

// ─── Fallback backend ─────────────────────────────────────────────────────────
//
// A handle is a heap-allocated `Header` describing a window (offset, step,
// shape) into storage shared through an `Arc`, mirroring how the native
// library refcounts element data underneath its own headers. `Mat_Region`
// allocates a new header over the same storage, so views genuinely alias
// their parent. `Mat_Close` frees one header; the storage goes away with the
// last header referencing it.

#[cfg(not(feature = "native"))]
#[allow(non_snake_case)]
pub mod fallback {
    use super::{Mat, Rect, Scalar};
    use std::cell::UnsafeCell;
    use std::os::raw::{c_float, c_int};
    use std::ptr;
    use std::sync::Arc;

    struct Storage(UnsafeCell<Vec<u8>>);

    // Callers synchronize access themselves, same as with the real library.
    unsafe impl Send for Storage {}
    unsafe impl Sync for Storage {}

    struct Header {
        storage: Arc<Storage>,
        rows: c_int,
        cols: c_int,
        mat_type: c_int,
        /// Byte offset of element (0, 0) within the storage.
        offset: usize,
        /// Bytes per row in the underlying allocation (unchanged in views).
        step: usize,
    }

    fn elem_size(mat_type: c_int) -> usize {
        match mat_type {
            0 | 1 => 1,
            2 | 3 => 2,
            4 | 5 => 4,
            _ => 8,
        }
    }

    unsafe fn header<'a>(mat: Mat) -> &'a Header {
        &*(mat as *const Header)
    }

    #[no_mangle]
    pub extern "C" fn Mat_New() -> Mat {
        Mat_NewWithSize(0, 0, 0)
    }

    #[no_mangle]
    pub extern "C" fn Mat_NewWithSize(rows: c_int, cols: c_int, mat_type: c_int) -> Mat {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let step = cols as usize * elem_size(mat_type);
        let header = Header {
            storage: Arc::new(Storage(UnsafeCell::new(vec![0u8; rows as usize * step]))),
            rows,
            cols,
            mat_type,
            offset: 0,
            step,
        };
        Box::into_raw(Box::new(header)) as Mat
    }

    #[no_mangle]
    pub extern "C" fn Mat_Close(mat: Mat) {
        if !mat.is_null() {
            drop(unsafe { Box::from_raw(mat as *mut Header) });
        }
    }

    #[no_mangle]
    pub extern "C" fn Mat_Empty(mat: Mat) -> c_int {
        if mat.is_null() {
            return 1;
        }
        let h = unsafe { header(mat) };
        (h.rows == 0 || h.cols == 0) as c_int
    }

    #[no_mangle]
    pub extern "C" fn Mat_Rows(mat: Mat) -> c_int {
        if mat.is_null() {
            return 0;
        }
        unsafe { header(mat) }.rows
    }

    #[no_mangle]
    pub extern "C" fn Mat_Cols(mat: Mat) -> c_int {
        if mat.is_null() {
            return 0;
        }
        unsafe { header(mat) }.cols
    }

    #[no_mangle]
    pub extern "C" fn Mat_Type(mat: Mat) -> c_int {
        if mat.is_null() {
            return 0;
        }
        unsafe { header(mat) }.mat_type
    }

    #[no_mangle]
    pub extern "C" fn Mat_Region(mat: Mat, rect: Rect) -> Mat {
        if mat.is_null() {
            return ptr::null_mut();
        }
        let h = unsafe { header(mat) };
        let Rect { x, y, width, height } = rect;
        let in_bounds = x >= 0
            && y >= 0
            && width >= 0
            && height >= 0
            && x as i64 + width as i64 <= h.cols as i64
            && y as i64 + height as i64 <= h.rows as i64;
        if !in_bounds {
            return ptr::null_mut();
        }
        let view = Header {
            storage: Arc::clone(&h.storage),
            rows: height,
            cols: width,
            mat_type: h.mat_type,
            offset: h.offset + y as usize * h.step + x as usize * elem_size(h.mat_type),
            step: h.step,
        };
        Box::into_raw(Box::new(view)) as Mat
    }

    #[no_mangle]
    pub extern "C" fn Mat_SetTo(mat: Mat, value: Scalar) {
        if mat.is_null() {
            return;
        }
        let h = unsafe { header(mat) };
        let esize = elem_size(h.mat_type);
        let base = unsafe { (*h.storage.0.get()).as_mut_ptr() };
        for row in 0..h.rows as usize {
            for col in 0..h.cols as usize {
                let p = unsafe { base.add(h.offset + row * h.step + col * esize) };
                unsafe { write_elem(p, h.mat_type, value.val1) };
            }
        }
    }

    /// Write one element, saturating to the destination type. Storage has
    /// byte alignment only, so multi-byte writes must be unaligned.
    unsafe fn write_elem(p: *mut u8, mat_type: c_int, v: f64) {
        match mat_type {
            0 => *p = v.clamp(0.0, u8::MAX as f64) as u8,
            1 => ptr::write_unaligned(p as *mut i8, v.clamp(i8::MIN as f64, i8::MAX as f64) as i8),
            2 => ptr::write_unaligned(p as *mut u16, v.clamp(0.0, u16::MAX as f64) as u16),
            3 => {
                ptr::write_unaligned(p as *mut i16, v.clamp(i16::MIN as f64, i16::MAX as f64) as i16)
            }
            4 => {
                ptr::write_unaligned(p as *mut i32, v.clamp(i32::MIN as f64, i32::MAX as f64) as i32)
            }
            5 => ptr::write_unaligned(p as *mut f32, v as f32),
            _ => ptr::write_unaligned(p as *mut f64, v),
        }
    }

    /// Byte index of `(row, col)` with an element width of `width`, or
    /// `None` when the access would fall outside the storage. The real
    /// library leaves such accesses undefined; the fallback stays
    /// memory-safe and reads zero instead.
    fn checked_index(h: &Header, row: c_int, col: c_int, width: usize) -> Option<usize> {
        if row < 0 || col < 0 || row >= h.rows || col >= h.cols {
            return None;
        }
        let idx = h.offset + row as usize * h.step + col as usize * width;
        let len = unsafe { (*h.storage.0.get()).len() };
        (idx + width <= len).then_some(idx)
    }

    #[no_mangle]
    pub extern "C" fn Mat_GetUChar(mat: Mat, row: c_int, col: c_int) -> u8 {
        if mat.is_null() {
            return 0;
        }
        let h = unsafe { header(mat) };
        match checked_index(h, row, col, 1) {
            Some(idx) => unsafe { *(*h.storage.0.get()).as_ptr().add(idx) },
            None => 0,
        }
    }

    #[no_mangle]
    pub extern "C" fn Mat_GetFloat(mat: Mat, row: c_int, col: c_int) -> c_float {
        if mat.is_null() {
            return 0.0;
        }
        let h = unsafe { header(mat) };
        match checked_index(h, row, col, 4) {
            Some(idx) => unsafe {
                ptr::read_unaligned((*h.storage.0.get()).as_ptr().add(idx) as *const c_float)
            },
            None => 0.0,
        }
    }
}

#[cfg(not(feature = "native"))]
pub use fallback::*;
