//! NPC record codec.

use crate::{Result, gates::FormatVersion, ioutils::ReadMirExt};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// One decoded NPC record.
///
/// The quest linkage lists and the display-scheduling trailer are
/// consumed during parsing but not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NpcRecord {
    pub index: i32,
    pub map_index: i32,
    pub file_name: String,
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl NpcRecord {
    /// Parse one NPC record at the current cursor position.
    pub fn parse<R: Read>(reader: &mut R, version: FormatVersion) -> Result<Self> {
        let npc = Self {
            index: reader.read_i32::<LittleEndian>()?,
            map_index: reader.read_i32::<LittleEndian>()?,
            file_name: reader.read_string()?,
            name: reader.read_string()?,
            x: reader.read_i32::<LittleEndian>()?,
            y: reader.read_i32::<LittleEndian>()?,
        };

        if version.npc_has_wide_image() {
            let _image = reader.read_u16::<LittleEndian>()?;
        } else {
            let _image = reader.read_u8()?;
        }
        let _rate = reader.read_u16::<LittleEndian>()?;

        // Quest linkage, unused by the reporting tools.
        let count = reader.read_count()?;
        for _ in 0..count {
            let _collect_quest = reader.read_i32::<LittleEndian>()?;
        }
        let count = reader.read_count()?;
        for _ in 0..count {
            let _finish_quest = reader.read_i32::<LittleEndian>()?;
        }

        if version.npc_has_schedule() {
            let _time_visible = reader.read_bool()?;
            let _hour_start = reader.read_u8()?;
            let _minute_start = reader.read_u8()?;
            let _hour_end = reader.read_u8()?;
            let _minute_end = reader.read_u8()?;
            let _min_lev = reader.read_i16::<LittleEndian>()?;
            let _max_lev = reader.read_i16::<LittleEndian>()?;
            let _day_of_week = reader.read_string()?;
            let _class_required = reader.read_string()?;
            if version.npc_has_conquest_index() {
                let _conquest_index = reader.read_i32::<LittleEndian>()?;
            } else {
                let _flag_needed = reader.read_bool()?;
            }
            let _flag_index = reader.read_i32::<LittleEndian>()?;
        }
        if version.npc_has_big_map_icon() {
            let _show_on_big_map = reader.read_bool()?;
            let _big_map_icon = reader.read_i32::<LittleEndian>()?;
        }
        if version.npc_has_teleport_flag() {
            let _can_teleport_to = reader.read_bool()?;
        }
        if version.npc_has_conquest_visibility() {
            let _conquest_visible = reader.read_bool()?;
        }

        Ok(npc)
    }
}
