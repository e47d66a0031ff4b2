//! Database reader: header, discarded index counters, and the four
//! count-prefixed record sections in fixed order.
//!
//! The decode is one strictly forward pass. There are no section
//! delimiters and no checksums; integrity rests entirely on every codec
//! honoring the version gates, so any structural error aborts the whole
//! decode and no partial result is ever returned.

use crate::{
    Error, Result,
    gates::FormatVersion,
    ioutils::ReadMirExt,
    item::{ItemMode, ItemRecord, parse_item},
    map::MapRecord,
    monster::MonsterNameEntry,
    npc::NpcRecord,
};
use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// An open database file, ready for one decode pass.
///
/// `decode` consumes the handle: the reader owns its cursor exclusively
/// for the duration of the pass and cannot be reentered.
#[derive(Debug)]
pub struct Database {
    file: BufReader<File>,
}

impl Database {
    /// Open a database file. A missing file is reported as
    /// [`Error::NotFound`] without attempting a decode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::NotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        Ok(Self {
            file: BufReader::new(file),
        })
    }

    /// Decode the whole database front to back.
    pub fn decode(mut self, item_mode: ItemMode) -> Result<DatabaseContent> {
        DatabaseContent::read(&mut self.file, item_mode)
    }
}

/// Which form the item section took in a decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSection {
    /// Items were materialized.
    Loaded(Vec<ItemRecord>),
    /// Items were structurally skipped; only the record count is known.
    Skipped(usize),
}

impl ItemSection {
    /// Number of item records the section held, in either mode.
    pub fn count(&self) -> usize {
        match self {
            Self::Loaded(items) => items.len(),
            Self::Skipped(count) => *count,
        }
    }
}

/// Fully decoded database content. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseContent {
    pub version: FormatVersion,
    pub custom_version: i32,
    pub maps: Vec<MapRecord>,
    pub items: ItemSection,
    pub monster_names: Vec<MonsterNameEntry>,
    pub npcs: Vec<NpcRecord>,
}

impl DatabaseContent {
    /// Decode a database from any byte source.
    ///
    /// The version is read once at the head and threaded into every
    /// record codec; it is never re-read mid-stream.
    pub fn read<R: Read>(reader: &mut R, item_mode: ItemMode) -> Result<Self> {
        let version = FormatVersion::new(reader.read_i32::<LittleEndian>()?)?;
        let custom_version = reader.read_i32::<LittleEndian>()?;
        debug!("database version {}, custom version {}", version, custom_version);

        // Allocation counters the live server persists. This subsystem
        // only has to consume them to stay aligned.
        let _map_index = reader.read_i32::<LittleEndian>()?;
        let _item_index = reader.read_i32::<LittleEndian>()?;
        let _monster_index = reader.read_i32::<LittleEndian>()?;
        let _npc_index = reader.read_i32::<LittleEndian>()?;
        let _quest_index = reader.read_i32::<LittleEndian>()?;
        if version.has_gameshop_counter() {
            let _gameshop_index = reader.read_i32::<LittleEndian>()?;
        }
        if version.has_conquest_counter() {
            let _conquest_index = reader.read_i32::<LittleEndian>()?;
        }
        if version.has_respawn_counter() {
            let _respawn_tick = reader.read_i32::<LittleEndian>()?;
        }

        let count = reader.read_count()?;
        let mut maps = Vec::with_capacity(count);
        for _ in 0..count {
            maps.push(MapRecord::parse(reader, version)?);
        }
        debug!("decoded {} maps", maps.len());

        let count = reader.read_count()?;
        let items = match item_mode {
            ItemMode::Materialize => {
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    if let Some(item) = parse_item(reader, version, item_mode)? {
                        items.push(item);
                    }
                }
                ItemSection::Loaded(items)
            }
            ItemMode::Skip => {
                for _ in 0..count {
                    parse_item(reader, version, item_mode)?;
                }
                ItemSection::Skipped(count)
            }
        };
        debug!("item section: {} records", items.count());

        let count = reader.read_count()?;
        let mut monster_names = Vec::with_capacity(count);
        for _ in 0..count {
            monster_names.push(MonsterNameEntry::parse(reader, version)?);
        }
        debug!("decoded {} monster names", monster_names.len());

        let count = reader.read_count()?;
        let mut npcs = Vec::with_capacity(count);
        for _ in 0..count {
            npcs.push(NpcRecord::parse(reader, version)?);
        }
        debug!("decoded {} NPCs", npcs.len());

        Ok(Self {
            version,
            custom_version,
            maps,
            items,
            monster_names,
            npcs,
        })
    }

    /// Decode a database file in one call.
    pub fn read_path(path: impl AsRef<Path>, item_mode: ItemMode) -> Result<Self> {
        Database::open(path)?.decode(item_mode)
    }

    /// NPCs placed on the map with the given record index.
    pub fn npcs_on_map(&self, map_index: i32) -> impl Iterator<Item = &NpcRecord> {
        self.npcs.iter().filter(move |npc| npc.map_index == map_index)
    }

    /// Display name for a monster record index, if the database has one.
    pub fn monster_name(&self, monster_index: i32) -> Option<&str> {
        self.monster_names
            .iter()
            .find(|entry| entry.index == monster_index)
            .map(|entry| entry.name.as_str())
    }
}
