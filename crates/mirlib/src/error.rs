//! Error types for sprite-container reading.
//!
//! Only `open` surfaces errors to callers. Per-frame failures inside
//! `get_image` are recovered locally and reported as "no image", so a
//! single corrupt frame cannot abort a bulk extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for sprite-container operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Sprite-container error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Container file does not exist
    #[error("sprite library not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Container format version this reader does not understand
    #[error("unsupported library version: {0}")]
    UnsupportedVersion(i32),

    /// Frame count in the header is negative or absurd
    #[error("frame count {0} is out of range")]
    FrameCountOutOfRange(i32),

    /// Frame header with a non-positive dimension or payload length
    #[error("frame header is malformed")]
    MalformedFrame,

    /// Payload decompressed to fewer bytes than the dimensions require
    #[error("decompressed frame is {actual} bytes, need at least {expected}")]
    ShortPixelBuffer { expected: usize, actual: usize },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}
