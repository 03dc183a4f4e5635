//! Element-type tags for the native mat type.
//!
//! Maps the shim's integer type codes to a Rust enum for type-safe
//! construction. The codes are part of the wire contract with the native
//! layer and must not be renumbered.

use crate::error::{Error, Result};

/// Supported element types for a [`Mat`](super::mat::Mat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MatType {
    UInt8 = 0,
    Int8 = 1,
    UInt16 = 2,
    Int16 = 3,
    Int32 = 4,
    Float32 = 5,
    Float64 = 6,
}

impl MatType {
    /// Size of a single element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            MatType::UInt8 | MatType::Int8 => 1,
            MatType::UInt16 | MatType::Int16 => 2,
            MatType::Int32 | MatType::Float32 => 4,
            MatType::Float64 => 8,
        }
    }

    /// Convert from a raw integer code returned by the C shim.
    pub fn from_raw(code: i32) -> Result<Self> {
        match code {
            0 => Ok(MatType::UInt8),
            1 => Ok(MatType::Int8),
            2 => Ok(MatType::UInt16),
            3 => Ok(MatType::Int16),
            4 => Ok(MatType::Int32),
            5 => Ok(MatType::Float32),
            6 => Ok(MatType::Float64),
            _ => Err(Error::InvalidMatType(code)),
        }
    }

    /// Convert to the raw integer code expected by the C shim.
    pub fn to_raw(self) -> i32 {
        self as i32
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            MatType::UInt8 => "uint8",
            MatType::Int8 => "int8",
            MatType::UInt16 => "uint16",
            MatType::Int16 => "int16",
            MatType::Int32 => "int32",
            MatType::Float32 => "float32",
            MatType::Float64 => "float64",
        }
    }

    /// Whether this is a floating-point type.
    pub fn is_float(self) -> bool {
        matches!(self, MatType::Float32 | MatType::Float64)
    }

    /// Whether this is an integer type.
    pub fn is_integer(self) -> bool {
        !self.is_float()
    }
}

impl std::fmt::Display for MatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
