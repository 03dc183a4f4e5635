//! Byte-buffer marshalling across the C boundary.
//!
//! The forward direction borrows a Rust slice as a native `(pointer, length)`
//! pair; the reverse direction copies native bytes into an independently
//! allocated `Vec<u8>`.

use std::marker::PhantomData;
use std::os::raw::{c_char, c_int};

use crate::core::sys;
use crate::error::{Error, Result};

/// A borrowed byte slice marshalled as a native `(pointer, length)` pair.
///
/// Holds the address of the slice's first element, so construction requires
/// a non-empty source. The lifetime ties the native pair to the borrowed
/// slice: the pair must not outlive the bytes it points at.
pub struct ByteArray<'a> {
    raw: sys::ByteArray,
    _marker: PhantomData<&'a [u8]>,
}

impl<'a> ByteArray<'a> {
    /// Marshal a non-empty byte slice for the native side.
    ///
    /// Empty input is rejected rather than producing a dangling pair.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyByteBuffer);
        }
        Ok(ByteArray {
            raw: sys::ByteArray {
                data: bytes.as_ptr() as *const c_char,
                length: bytes.len() as c_int,
            },
            _marker: PhantomData,
        })
    }

    /// The native pair, valid for the lifetime of the borrowed slice.
    pub fn as_raw(&self) -> sys::ByteArray {
        self.raw
    }
}

/// Copy a native `(pointer, length)` pair into a host-owned `Vec<u8>`.
///
/// A null pointer or non-positive length yields an empty vector.
///
/// # Safety
/// If `raw.data` is non-null it must point to at least `raw.length` readable
/// bytes for the duration of the call.
pub unsafe fn to_vec(raw: sys::ByteArray) -> Vec<u8> {
    if raw.data.is_null() || raw.length <= 0 {
        return Vec::new();
    }
    std::slice::from_raw_parts(raw.data as *const u8, raw.length as usize).to_vec()
}
