//! Error types for database decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Database decoding error types.
///
/// Every variant is fatal to the decode that raised it. The format has
/// no framing markers and no resync points, so a later section cannot be
/// trusted once an earlier read has gone wrong; the reader never returns
/// a partial result.
#[derive(Error, Debug)]
pub enum Error {
    /// Database file does not exist
    #[error("database file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error, including truncation anywhere in the stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Version at the head of the file is outside the supported range
    #[error("unsupported database version {0}, supported range is {1} to {2}")]
    UnsupportedVersion(i32, i32, i32),

    /// String length prefix is malformed or implies an absurd length
    #[error("string length prefix is malformed or exceeds {max} bytes")]
    StringLength { max: u64 },

    /// String bytes are not valid UTF-8
    #[error("string is not valid UTF-8: {0}")]
    StringEncoding(#[from] std::string::FromUtf8Error),

    /// A list count is negative or implies a read past any plausible file
    #[error("record count {0} is out of range")]
    CountOutOfRange(i64),
}
