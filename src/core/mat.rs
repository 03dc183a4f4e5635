//! Safe wrapper around the native mat type.
//!
//! The [`Mat`] type manages the lifecycle of one opaque native matrix handle:
//! `Drop` (or an explicit, idempotent [`Mat::close`]) releases the native
//! object exactly once. [`Mat::region`] produces a [`MatView`], a non-owning
//! handle that aliases a sub-block of the parent's storage.
//!
//! # Safety Model
//!
//! Each `Mat` is the single owner of its native object; there is no hidden
//! reference counting in this layer. A view borrows its parent through a
//! Rust lifetime, so the parent cannot be released while any view is live.
//! Querying a handle after `close` is a caller error and fails loudly with a
//! panic rather than reading through a dangling handle.
//!
//! The native object is not assumed to be internally synchronized, so `Mat`
//! is `Send` but not `Sync`; concurrent access is the caller's concern.

use std::marker::PhantomData;
use std::ptr;

use crate::core::mat_type::MatType;
use crate::core::rect::Rect;
use crate::core::scalar::Scalar;
use crate::core::sys;
use crate::error::{Error, Result};

/// An owning handle to a native dense matrix.
///
/// This is a thin wrapper around an opaque pointer; the matrix data itself
/// lives in native memory and is freed when the owning handle is closed or
/// dropped.
pub struct Mat {
    pub(crate) inner: sys::Mat,
}

// A handle may move between threads. No `Sync`: the native object is not
// assumed safe for concurrent access through shared references.
unsafe impl Send for Mat {}

impl Mat {
    /// Wrap a raw mat pointer. The caller transfers ownership.
    ///
    /// # Safety
    /// `ptr` must be a valid, non-null mat handle. The caller must not call
    /// `Mat_Close` on `ptr` after this call.
    pub(crate) unsafe fn from_raw(ptr: sys::Mat) -> Self {
        debug_assert!(!ptr.is_null(), "Mat::from_raw received null pointer");
        Mat { inner: ptr }
    }

    /// Create a new empty mat.
    pub fn new() -> Self {
        unsafe { Self::from_raw(sys::Mat_New()) }
    }

    /// Create a mat with the given shape and element type.
    ///
    /// Zero rows or columns are permitted and yield a valid, empty-bodied
    /// object.
    pub fn new_with_size(rows: i32, cols: i32, mat_type: MatType) -> Self {
        unsafe { Self::from_raw(sys::Mat_NewWithSize(rows, cols, mat_type.to_raw())) }
    }

    /// Release the underlying native object.
    ///
    /// Idempotent: the handle is nulled on the first call, so a second call
    /// is a safe no-op, never a double-free. `Drop` performs the same
    /// release, so calling this explicitly is only needed to free native
    /// resources before the handle goes out of scope.
    pub fn close(&mut self) {
        if !self.inner.is_null() {
            tracing::trace!("closing mat handle");
            unsafe { sys::Mat_Close(self.inner) };
            self.inner = ptr::null_mut();
        }
    }

    /// Whether [`close`](Mat::close) has already been called on this handle.
    pub fn is_closed(&self) -> bool {
        self.inner.is_null()
    }

    fn assert_open(&self) {
        assert!(!self.inner.is_null(), "mat handle used after close");
    }

    /// True iff the mat has zero rows or zero columns.
    ///
    /// # Panics
    /// Panics if the handle has been closed, as do all queries below.
    pub fn empty(&self) -> bool {
        self.assert_open();
        unsafe { sys::Mat_Empty(self.inner) != 0 }
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.assert_open();
        unsafe { sys::Mat_Rows(self.inner) }
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.assert_open();
        unsafe { sys::Mat_Cols(self.inner) }
    }

    /// Element type of the mat.
    pub fn mat_type(&self) -> Result<MatType> {
        self.assert_open();
        let code = unsafe { sys::Mat_Type(self.inner) };
        MatType::from_raw(code)
    }

    /// Zero-copy view of the sub-block described by `rect`.
    ///
    /// The view aliases this mat's storage: mutations through the view are
    /// visible through this mat and vice versa. The view borrows `self`, so
    /// this mat cannot be closed or dropped while the view is in use.
    ///
    /// Bounds checking is performed by the native layer; an out-of-bounds
    /// rectangle surfaces as [`Error::RegionOutOfBounds`].
    pub fn region(&self, rect: Rect) -> Result<MatView<'_>> {
        self.assert_open();
        unsafe { region_of(self.inner, rect) }
    }

    /// Fill every element with the scalar's first component, saturating to
    /// the element type.
    pub fn set_to(&mut self, value: Scalar) {
        self.assert_open();
        unsafe { sys::Mat_SetTo(self.inner, value.to_raw()) }
    }

    /// Read the element at `(row, col)` as an unsigned byte.
    ///
    /// Only meaningful for [`MatType::UInt8`] mats.
    pub fn get_uchar(&self, row: i32, col: i32) -> u8 {
        self.assert_open();
        unsafe { sys::Mat_GetUChar(self.inner, row, col) }
    }

    /// Read the element at `(row, col)` as a 32-bit float.
    ///
    /// Only meaningful for [`MatType::Float32`] mats.
    pub fn get_float(&self, row: i32, col: i32) -> f32 {
        self.assert_open();
        unsafe { sys::Mat_GetFloat(self.inner, row, col) }
    }

    /// The raw handle, for passing to other native entry points.
    ///
    /// The pointer remains owned by this `Mat`; it must not be closed
    /// through the raw API.
    pub fn as_raw(&self) -> sys::Mat {
        self.inner
    }
}

impl Default for Mat {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Mat {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for Mat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.inner.is_null() {
            return write!(f, "Mat(closed)");
        }
        let t = self.mat_type().map(|t| t.name()).unwrap_or("?");
        write!(f, "Mat({}x{}, {})", self.rows(), self.cols(), t)
    }
}

/// A non-owning view aliasing a sub-block of a parent mat's storage.
///
/// The view holds its own native header, released on drop, but shares the
/// parent's element storage: writes through the view are visible through the
/// parent and vice versa. The lifetime parameter ties the view to its
/// parent, so the parent handle outlives every view taken from it.
pub struct MatView<'a> {
    inner: sys::Mat,
    _parent: PhantomData<&'a sys::Mat>,
}

unsafe impl Send for MatView<'_> {}

/// Shared region machinery for [`Mat::region`] and [`MatView::region`].
///
/// # Safety
/// `parent` must be a valid, open mat handle.
unsafe fn region_of<'a>(parent: sys::Mat, rect: Rect) -> Result<MatView<'a>> {
    let ptr = sys::Mat_Region(parent, rect.to_raw());
    if ptr.is_null() {
        let (rows, cols) = (sys::Mat_Rows(parent), sys::Mat_Cols(parent));
        tracing::debug!(?rect, rows, cols, "region rejected by native layer");
        return Err(Error::RegionOutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            rows,
            cols,
        });
    }
    Ok(MatView {
        inner: ptr,
        _parent: PhantomData,
    })
}

impl MatView<'_> {
    /// True iff the view has zero rows or zero columns.
    pub fn empty(&self) -> bool {
        unsafe { sys::Mat_Empty(self.inner) != 0 }
    }

    /// Number of rows in the view.
    pub fn rows(&self) -> i32 {
        unsafe { sys::Mat_Rows(self.inner) }
    }

    /// Number of columns in the view.
    pub fn cols(&self) -> i32 {
        unsafe { sys::Mat_Cols(self.inner) }
    }

    /// Element type, inherited from the parent.
    pub fn mat_type(&self) -> Result<MatType> {
        let code = unsafe { sys::Mat_Type(self.inner) };
        MatType::from_raw(code)
    }

    /// A view of a sub-block of this view, with the same aliasing semantics
    /// as [`Mat::region`].
    pub fn region(&self, rect: Rect) -> Result<MatView<'_>> {
        unsafe { region_of(self.inner, rect) }
    }

    /// Fill every element of the viewed sub-block with the scalar's first
    /// component. The write is visible through the parent.
    pub fn set_to(&mut self, value: Scalar) {
        unsafe { sys::Mat_SetTo(self.inner, value.to_raw()) }
    }

    /// Read the element at `(row, col)`, relative to the view's origin, as
    /// an unsigned byte.
    pub fn get_uchar(&self, row: i32, col: i32) -> u8 {
        unsafe { sys::Mat_GetUChar(self.inner, row, col) }
    }

    /// Read the element at `(row, col)`, relative to the view's origin, as a
    /// 32-bit float.
    pub fn get_float(&self, row: i32, col: i32) -> f32 {
        unsafe { sys::Mat_GetFloat(self.inner, row, col) }
    }

    /// The raw view handle. Owned by this view; do not close it through the
    /// raw API.
    pub fn as_raw(&self) -> sys::Mat {
        self.inner
    }
}

impl Drop for MatView<'_> {
    fn drop(&mut self) {
        // Releases the view header only; the shared storage stays with the
        // parent (the native layer refcounts it underneath).
        unsafe { sys::Mat_Close(self.inner) };
    }
}

impl std::fmt::Debug for MatView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let t = self.mat_type().map(|t| t.name()).unwrap_or("?");
        write!(f, "MatView({}x{}, {})", self.rows(), self.cols(), t)
    }
}
