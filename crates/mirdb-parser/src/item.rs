//! Item record codec.
//!
//! The item layout pivots at the stat-list revision: before it, stats
//! are fixed-width inline blocks at three points in the record and the
//! stack size is four bytes; after it, a single self-describing list
//! replaces the blocks and the stack size narrows to two bytes.
//!
//! Historically this format had two independently maintained item
//! parsers, one that decoded and one that only skipped ahead, and any
//! drift between them silently desynchronized the rest of the stream.
//! Here a single parse path serves both callers: the mode only decides
//! whether the fields that were read become a record. Both modes take
//! identical branches and consume identical byte counts by construction.

use crate::{Result, gates::FormatVersion, ioutils::ReadMirExt, stats::skip_stat_list};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Projection mode for [`parse_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMode {
    /// Materialize the display fields into an [`ItemRecord`].
    Materialize,
    /// Consume the record and discard it, advancing the cursor only.
    Skip,
}

/// Display projection of one item record.
///
/// Stats, bonus blocks and behavioral flags are consumed during parsing
/// but not kept; the reporting tools this crate feeds only use the
/// fields below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRecord {
    pub index: i32,
    pub name: String,
    pub item_type: u8,
    pub grade: u8,
    pub shape: i16,
    pub image: u16,
    pub durability: u16,
    /// Normalized to u32; the wire width depends on the version.
    pub stack_size: u32,
    pub price: u32,
    pub required_amount: u8,
    pub tooltip: Option<String>,
}

/// Parse one item record at the current cursor position.
///
/// Returns `Some` iff `mode` is [`ItemMode::Materialize`]. Every field
/// is read in both modes; see the module docs for why.
pub fn parse_item<R: Read>(
    reader: &mut R,
    version: FormatVersion,
    mode: ItemMode,
) -> Result<Option<ItemRecord>> {
    let index = reader.read_i32::<LittleEndian>()?;
    let name = reader.read_string()?;
    let item_type = reader.read_u8()?;
    let grade = reader.read_u8()?;
    let _required_type = reader.read_u8()?;
    let _required_class = reader.read_u8()?;
    let _required_gender = reader.read_u8()?;
    let _set = reader.read_u8()?;
    let shape = reader.read_i16::<LittleEndian>()?;
    let _weight = reader.read_u8()?;
    let _light = reader.read_u8()?;
    let required_amount = reader.read_u8()?;
    let image = reader.read_u16::<LittleEndian>()?;
    let durability = reader.read_u16::<LittleEndian>()?;

    let stack_size = if version.item_has_legacy_stats() {
        reader.read_u32::<LittleEndian>()?
    } else {
        u32::from(reader.read_u16::<LittleEndian>()?)
    };
    let price = reader.read_u32::<LittleEndian>()?;

    if version.item_has_legacy_stats() {
        // Point A: armour and damage ranges, 10 bytes.
        let mut block = [0u8; 10];
        reader.read_exact(&mut block)?;

        let _start_item = reader.read_bool()?;
        let _effect = reader.read_u8()?;

        // Point B: accuracy, agility, HP, MP.
        let _accuracy = reader.read_u8()?;
        let _agility = reader.read_u8()?;
        let _hp = reader.read_u16::<LittleEndian>()?;
        let _mp = reader.read_u16::<LittleEndian>()?;

        if version.item_has_slots() {
            let _slots = reader.read_u8()?;
        }

        // Point C: resistance, recovery and bonus bytes, 20 bytes.
        let mut block = [0u8; 20];
        reader.read_exact(&mut block)?;
    } else {
        skip_stat_list(reader)?;

        let _start_item = reader.read_bool()?;
        let _effect = reader.read_u8()?;

        // Always present after the stat pivot, but keep the same gate
        // the legacy branch consults.
        if version.item_has_slots() {
            let _slots = reader.read_u8()?;
        }
    }

    let _need_identify = reader.read_bool()?;
    let _show_group_pickup = reader.read_bool()?;
    let _class_based = reader.read_bool()?;
    let _level_based = reader.read_bool()?;
    let _can_mine = reader.read_bool()?;

    // Version-independent conditional: tooltip text exists only when the
    // flag byte immediately before it is set.
    let has_tooltip = reader.read_bool()?;
    let tooltip = if has_tooltip {
        Some(reader.read_string()?)
    } else {
        None
    };

    Ok(match mode {
        ItemMode::Materialize => Some(ItemRecord {
            index,
            name,
            item_type,
            grade,
            shape,
            image,
            durability,
            stack_size,
            price,
            required_amount,
            tooltip,
        }),
        ItemMode::Skip => None,
    })
}
