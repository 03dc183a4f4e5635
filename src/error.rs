//! Error types for the cvmat crate.

use thiserror::Error;

/// Top-level error type for cvmat operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid mat type code: {0}")]
    InvalidMatType(i32),

    #[error("region ({x},{y}) {width}x{height} out of bounds for {rows}x{cols} mat")]
    RegionOutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        rows: i32,
        cols: i32,
    },

    #[error("cannot marshal an empty byte buffer")]
    EmptyByteBuffer,
}

pub type Result<T> = std::result::Result<T, Error>;
