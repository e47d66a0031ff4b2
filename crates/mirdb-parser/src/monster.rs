//! Monster record codec.
//!
//! Only the index and display name are materialized. Everything after
//! them — AI, level, stats, speeds, experience, behavioral flags — is
//! consumed with the full version-gated layout and discarded, because
//! mis-skipping any of it would desynchronize every later record.

use crate::{Result, gates::FormatVersion, ioutils::ReadMirExt, stats::skip_stat_list};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Index/name projection of one monster record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterNameEntry {
    pub index: i32,
    pub name: String,
}

impl MonsterNameEntry {
    /// Parse one monster record, keeping only index and name.
    pub fn parse<R: Read>(reader: &mut R, version: FormatVersion) -> Result<Self> {
        let index = reader.read_i32::<LittleEndian>()?;
        let name = reader.read_string()?;

        let _image = reader.read_u16::<LittleEndian>()?;
        let _ai = reader.read_u8()?;
        let _effect = reader.read_u8()?;
        let _level = reader.read_u16::<LittleEndian>()?;
        let _view_range = reader.read_u8()?;
        let _cool_eye = reader.read_u8()?;

        if version.has_stat_list() {
            skip_stat_list(reader)?;
        } else if version.monster_has_byte_stats() {
            let mut stats = [0u8; 10];
            reader.read_exact(&mut stats)?;
        } else {
            for _ in 0..20 {
                let _stat = reader.read_u16::<LittleEndian>()?;
            }
        }

        let _attack_speed = reader.read_u16::<LittleEndian>()?;
        let _move_speed = reader.read_u16::<LittleEndian>()?;
        let _experience = reader.read_u32::<LittleEndian>()?;
        let _can_push = reader.read_bool()?;
        let _can_tame = reader.read_bool()?;

        if version.monster_has_revival_flags() {
            let _auto_rev = reader.read_bool()?;
            let _undead = reader.read_bool()?;
        }
        if version.monster_has_drop_path() {
            let _drop_path = reader.read_string()?;
        }
        if version.monster_has_spawn_script() {
            let _has_spawn_script = reader.read_bool()?;
        }
        if version.monster_has_hide_flag() {
            let _can_hide = reader.read_bool()?;
        }

        Ok(Self { index, name })
    }
}
