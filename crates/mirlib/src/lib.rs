//! Reader for the indexed Mir sprite-container format.
//!
//! A `.Lib` container stores one compressed image per frame index,
//! addressed through an offset table read at open. The main consumer is
//! icon extraction: a tool walks an item catalog, asks for each item's
//! image index, and writes out whatever frames exist. To make that loop
//! robust, [`SpriteLibrary::get_image`] converts every per-frame
//! failure into `None` instead of an error.

mod error;
mod image;

pub mod container;

pub use container::{FrameHeader, SpriteLibrary};
pub use error::{Error, Result};
