//! Version gates for the database stream.
//!
//! The format carries no framing and no checksums: which optional fields
//! exist is decided solely by the version integer at the head of the
//! file. Every gate lives here as a named predicate so that the gating
//! rule for a field group exists in exactly one place; the record codecs
//! never compare raw version integers inline.
//!
//! Thresholds are inclusive unless the predicate name or comment says
//! strictly greater.

use crate::{Error, Result};
use std::ops::RangeInclusive;

/// Database format revision, read once from the head of the file.
///
/// Construction validates the supported range, so a held value is always
/// one the codecs understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormatVersion(i32);

impl FormatVersion {
    /// Inclusive range of versions this reader understands. The ceiling
    /// is the newest gate in the format's history; later revisions may
    /// append fields this reader cannot skip safely.
    pub const SUPPORTED: RangeInclusive<i32> = 1..=116;

    pub fn new(raw: i32) -> Result<Self> {
        if Self::SUPPORTED.contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(Error::UnsupportedVersion(
                raw,
                *Self::SUPPORTED.start(),
                *Self::SUPPORTED.end(),
            ))
        }
    }

    pub fn raw(self) -> i32 {
        self.0
    }

    // -- header --

    /// Gameshop index counter present (>= 63).
    pub fn has_gameshop_counter(self) -> bool {
        self.0 >= 63
    }

    /// Conquest index counter present (>= 66).
    pub fn has_conquest_counter(self) -> bool {
        self.0 >= 66
    }

    /// Respawn tick counter present (>= 68).
    pub fn has_respawn_counter(self) -> bool {
        self.0 >= 68
    }

    // -- map --

    /// Respawn entries carry the timing block (strictly > 67).
    pub fn respawn_has_timing(self) -> bool {
        self.0 > 67
    }

    /// Movement entries carry a conquest index (>= 69).
    pub fn movement_has_conquest(self) -> bool {
        self.0 >= 69
    }

    /// Movement entries carry big-map icon fields (>= 95).
    pub fn movement_has_big_map_icon(self) -> bool {
        self.0 >= 95
    }

    /// Map trailer: town-teleport restriction (>= 78).
    pub fn map_has_no_town_teleport(self) -> bool {
        self.0 >= 78
    }

    /// Map trailer: reincarnation restriction (>= 79).
    pub fn map_has_no_reincarnation(self) -> bool {
        self.0 >= 79
    }

    /// Map trailer: weather setting (>= 110).
    pub fn map_has_weather(self) -> bool {
        self.0 >= 110
    }

    /// Map trailer: music loop flag and volume (>= 111).
    pub fn map_has_music_controls(self) -> bool {
        self.0 >= 111
    }

    /// Map trailer: instance block (>= 114).
    pub fn map_has_instance_block(self) -> bool {
        self.0 >= 114
    }

    // -- item --

    /// Items carry the legacy fixed-width inline stat blocks and a u32
    /// stack size (<= 84). After the pivot the stats are a
    /// self-describing list and the stack size narrows to u16.
    pub fn item_has_legacy_stats(self) -> bool {
        self.0 <= 84
    }

    /// Items carry the socket-slot byte (strictly > 83).
    pub fn item_has_slots(self) -> bool {
        self.0 > 83
    }

    // -- stats list, shared by items and monsters --

    /// Records carry the self-describing (tag, value) stats list
    /// (strictly > 84).
    pub fn has_stat_list(self) -> bool {
        self.0 > 84
    }

    // -- monster --

    /// Monster legacy stat arrays are byte-width, 10 elements (< 62).
    /// From 62 they widen to u16 and grow to 20 elements, until the
    /// stat-list pivot retires both shapes.
    pub fn monster_has_byte_stats(self) -> bool {
        self.0 < 62
    }

    /// Monsters carry auto-revival and undead flags (>= 18).
    pub fn monster_has_revival_flags(self) -> bool {
        self.0 >= 18
    }

    /// Monsters carry a drop-file path (>= 89).
    pub fn monster_has_drop_path(self) -> bool {
        self.0 >= 89
    }

    /// Monsters carry the spawn-script flag (>= 115).
    pub fn monster_has_spawn_script(self) -> bool {
        self.0 >= 115
    }

    /// Monsters carry the hide flag (>= 116).
    pub fn monster_has_hide_flag(self) -> bool {
        self.0 >= 116
    }

    // -- npc --

    /// NPC image index is two bytes instead of one (>= 72).
    pub fn npc_has_wide_image(self) -> bool {
        self.0 >= 72
    }

    /// NPCs carry the display-scheduling block (>= 64).
    pub fn npc_has_schedule(self) -> bool {
        self.0 >= 64
    }

    /// Inside the scheduling block, the conquest index replaces the old
    /// flag-needed bool (>= 66).
    pub fn npc_has_conquest_index(self) -> bool {
        self.0 >= 66
    }

    /// NPCs carry big-map icon fields (strictly > 95).
    pub fn npc_has_big_map_icon(self) -> bool {
        self.0 > 95
    }

    /// NPCs carry the teleport-target flag (strictly > 96).
    pub fn npc_has_teleport_flag(self) -> bool {
        self.0 > 96
    }

    /// NPCs carry the conquest-visibility flag (>= 107).
    pub fn npc_has_conquest_visibility(self) -> bool {
        self.0 >= 107
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
