//! Decoder for the legacy Mir content database format.
//!
//! The database is a single little-endian byte stream with no magic
//! number, no checksums and no section delimiters: a version integer at
//! the head gates which optional fields exist for the rest of the file,
//! and every record must be consumed exactly or everything after it is
//! garbage. This crate reads the four record sections (maps, items,
//! monsters, NPCs) in one forward pass and hands back immutable
//! collections for the reporting tools.
//!
//! Item records can be either materialized or structurally skipped;
//! both projections share one parse path so they can never disagree on
//! byte counts. See [`item::parse_item`].

mod error;
mod ioutils;
mod stats;

pub mod gates;
pub mod item;
pub mod map;
pub mod monster;
pub mod npc;
pub mod reader;

pub use error::{Error, Result};
pub use gates::FormatVersion;
pub use item::{ItemMode, ItemRecord};
pub use reader::{Database, DatabaseContent, ItemSection};
