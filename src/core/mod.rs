//! Bindings to the native matrix library's core module.
//!
//! This module provides safe, idiomatic Rust wrappers around the C shim of
//! the native computer-vision matrix library. The library itself is a black
//! box reached through opaque handles; everything here is lifecycle, shape
//! queries, and value marshalling.
//!
//! # Architecture
//!
//! - [`sys`]: Raw FFI declarations (extern "C" bindings) plus the portable
//!   fallback backend used when the `native` feature is off.
//! - [`mat`]: Safe `Mat` type with RAII lifecycle management and borrowing
//!   `MatView` region views.
//! - [`mat_type`]: Element-type tags mapping to the shim's integer codes.
//! - [`rect`] / [`scalar`]: Plain value types marshalled across the boundary.
//! - [`bytes`]: Byte-buffer marshalling pair.

// With the fallback backend the FFI surface is plain Rust functions, so
// `unsafe` blocks around their calls are technically unnecessary. Suppress
// the warning; the blocks are required when linking the real C shim.
pub mod bytes;
#[allow(unused_unsafe)]
pub mod mat;
pub mod mat_type;
pub mod rect;
pub mod scalar;
pub mod sys;

pub use mat::{Mat, MatView};
pub use mat_type::MatType;
pub use rect::Rect;
pub use scalar::Scalar;
