//! Map record codec.
//!
//! A map record is the scalar header, four nested counted lists
//! (safe zones, respawns, movements, mine zones), a fixed run of
//! restriction flags, and a version-gated trailer. Entry order inside
//! every nested list is significant and preserved as read.

use crate::{Result, gates::FormatVersion, ioutils::ReadMirExt};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Player-safe area within a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeZone {
    pub x: i32,
    pub y: i32,
    pub size: u16,
    pub start_point: bool,
}

/// Monster respawn definition.
///
/// The timing block (`random_delay` onwards) only exists past its gate;
/// absent fields decode to their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Respawn {
    pub monster_index: i32,
    pub x: i32,
    pub y: i32,
    pub count: u16,
    pub spread: u16,
    pub delay: u16,
    pub direction: u8,
    pub route_path: String,
    pub random_delay: u16,
    pub respawn_index: i32,
    pub save_respawn_time: bool,
    pub respawn_ticks: u16,
}

/// Teleport link between two map cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movement {
    pub map_index: i32,
    pub src_x: i32,
    pub src_y: i32,
    pub dst_x: i32,
    pub dst_y: i32,
    pub need_hole: bool,
    pub need_move: bool,
    pub conquest_index: i32,
    pub show_on_big_map: bool,
    pub big_map_icon: i32,
}

/// Mineable area within a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MineZone {
    pub x: i32,
    pub y: i32,
    pub size: u16,
    pub mine_type: u8,
}

/// One fully decoded map record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapRecord {
    pub index: i32,
    pub file_name: String,
    pub title: String,
    pub mini_map: u16,
    pub light: u8,
    pub big_map: u16,
    pub music: u16,

    pub safe_zones: Vec<SafeZone>,
    pub respawns: Vec<Respawn>,
    pub movements: Vec<Movement>,

    pub no_teleport: bool,
    pub no_reconnect: bool,
    pub no_random: bool,
    pub no_escape: bool,
    pub no_recall: bool,
    pub no_drug: bool,
    pub no_position: bool,
    pub no_throw_item: bool,
    pub no_drop_player: bool,
    pub no_drop_monster: bool,
    pub no_names: bool,
    pub no_mount: bool,
    pub need_bridle: bool,
    pub no_fight: bool,
    pub fight: bool,
    pub no_group: bool,
    pub fire: bool,
    pub fire_damage: i32,
    pub lightning: bool,
    pub lightning_damage: i32,
    pub map_dark_light: u8,
    pub mine_index: u8,

    pub mine_zones: Vec<MineZone>,

    // gated trailer
    pub no_town_teleport: bool,
    pub no_reincarnation: bool,
    pub weather: u16,
    pub music_loop: bool,
    pub music_volume: u8,
    pub no_hero: bool,
    pub no_pet: bool,
    pub no_siege: bool,
    pub no_marriage: bool,
    pub no_trade: bool,
    pub player_limit: i32,
    pub instanced: bool,
    pub auto_close: bool,
    pub close_delay: i32,
}

impl SafeZone {
    fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            x: reader.read_i32::<LittleEndian>()?,
            y: reader.read_i32::<LittleEndian>()?,
            size: reader.read_u16::<LittleEndian>()?,
            start_point: reader.read_bool()?,
        })
    }
}

impl Respawn {
    fn parse<R: Read>(reader: &mut R, version: FormatVersion) -> Result<Self> {
        let mut respawn = Self {
            monster_index: reader.read_i32::<LittleEndian>()?,
            x: reader.read_i32::<LittleEndian>()?,
            y: reader.read_i32::<LittleEndian>()?,
            count: reader.read_u16::<LittleEndian>()?,
            spread: reader.read_u16::<LittleEndian>()?,
            delay: reader.read_u16::<LittleEndian>()?,
            direction: reader.read_u8()?,
            route_path: reader.read_string()?,
            ..Self::default()
        };
        if version.respawn_has_timing() {
            respawn.random_delay = reader.read_u16::<LittleEndian>()?;
            respawn.respawn_index = reader.read_i32::<LittleEndian>()?;
            respawn.save_respawn_time = reader.read_bool()?;
            respawn.respawn_ticks = reader.read_u16::<LittleEndian>()?;
        }
        Ok(respawn)
    }
}

impl Movement {
    fn parse<R: Read>(reader: &mut R, version: FormatVersion) -> Result<Self> {
        let mut movement = Self {
            map_index: reader.read_i32::<LittleEndian>()?,
            src_x: reader.read_i32::<LittleEndian>()?,
            src_y: reader.read_i32::<LittleEndian>()?,
            dst_x: reader.read_i32::<LittleEndian>()?,
            dst_y: reader.read_i32::<LittleEndian>()?,
            need_hole: reader.read_bool()?,
            need_move: reader.read_bool()?,
            ..Self::default()
        };
        if version.movement_has_conquest() {
            movement.conquest_index = reader.read_i32::<LittleEndian>()?;
        }
        if version.movement_has_big_map_icon() {
            movement.show_on_big_map = reader.read_bool()?;
            movement.big_map_icon = reader.read_i32::<LittleEndian>()?;
        }
        Ok(movement)
    }
}

impl MineZone {
    fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            x: reader.read_i32::<LittleEndian>()?,
            y: reader.read_i32::<LittleEndian>()?,
            size: reader.read_u16::<LittleEndian>()?,
            mine_type: reader.read_u8()?,
        })
    }
}

impl MapRecord {
    /// Parse one map record at the current cursor position.
    pub fn parse<R: Read>(reader: &mut R, version: FormatVersion) -> Result<Self> {
        let mut map = Self {
            index: reader.read_i32::<LittleEndian>()?,
            file_name: reader.read_string()?,
            title: reader.read_string()?,
            mini_map: reader.read_u16::<LittleEndian>()?,
            light: reader.read_u8()?,
            big_map: reader.read_u16::<LittleEndian>()?,
            music: reader.read_u16::<LittleEndian>()?,
            ..Self::default()
        };

        let count = reader.read_count()?;
        map.safe_zones.reserve(count);
        for _ in 0..count {
            map.safe_zones.push(SafeZone::parse(reader)?);
        }

        let count = reader.read_count()?;
        map.respawns.reserve(count);
        for _ in 0..count {
            map.respawns.push(Respawn::parse(reader, version)?);
        }

        let count = reader.read_count()?;
        map.movements.reserve(count);
        for _ in 0..count {
            map.movements.push(Movement::parse(reader, version)?);
        }

        map.no_teleport = reader.read_bool()?;
        map.no_reconnect = reader.read_bool()?;
        map.no_random = reader.read_bool()?;
        map.no_escape = reader.read_bool()?;
        map.no_recall = reader.read_bool()?;
        map.no_drug = reader.read_bool()?;
        map.no_position = reader.read_bool()?;
        map.no_throw_item = reader.read_bool()?;
        map.no_drop_player = reader.read_bool()?;
        map.no_drop_monster = reader.read_bool()?;
        map.no_names = reader.read_bool()?;
        map.no_mount = reader.read_bool()?;
        map.need_bridle = reader.read_bool()?;
        map.no_fight = reader.read_bool()?;
        map.fight = reader.read_bool()?;
        map.no_group = reader.read_bool()?;
        map.fire = reader.read_bool()?;
        map.fire_damage = reader.read_i32::<LittleEndian>()?;
        map.lightning = reader.read_bool()?;
        map.lightning_damage = reader.read_i32::<LittleEndian>()?;
        map.map_dark_light = reader.read_u8()?;
        map.mine_index = reader.read_u8()?;

        let count = reader.read_count()?;
        map.mine_zones.reserve(count);
        for _ in 0..count {
            map.mine_zones.push(MineZone::parse(reader)?);
        }

        if version.map_has_no_town_teleport() {
            map.no_town_teleport = reader.read_bool()?;
        }
        if version.map_has_no_reincarnation() {
            map.no_reincarnation = reader.read_bool()?;
        }
        if version.map_has_weather() {
            map.weather = reader.read_u16::<LittleEndian>()?;
        }
        if version.map_has_music_controls() {
            map.music_loop = reader.read_bool()?;
            map.music_volume = reader.read_u8()?;
        }
        if version.map_has_instance_block() {
            map.no_hero = reader.read_bool()?;
            map.no_pet = reader.read_bool()?;
            map.no_siege = reader.read_bool()?;
            map.no_marriage = reader.read_bool()?;
            map.no_trade = reader.read_bool()?;
            map.player_limit = reader.read_i32::<LittleEndian>()?;
            map.instanced = reader.read_bool()?;
            map.auto_close = reader.read_bool()?;
            map.close_delay = reader.read_i32::<LittleEndian>()?;
        }

        Ok(map)
    }
}
