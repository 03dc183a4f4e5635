//! Rust bindings to a native computer-vision matrix library
//!
//! The wrapped library does the heavy lifting (pixel kernels, memory layout,
//! SIMD); this crate provides the safe handle layer: an owning [`Mat`]
//! wrapper with RAII lifecycle, zero-copy [`MatView`] region views scoped by
//! borrow, and marshalling of the simple value types that cross the C
//! boundary.

pub mod core;
pub mod error;

pub use crate::core::{Mat, MatType, MatView, Rect, Scalar};
pub use crate::error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
