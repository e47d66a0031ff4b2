//! Shared helpers for building synthetic database bytes.
//!
//! The crate has no write side, so the tests carry their own little
//! .NET-compatible encoder mirroring the layout the decoder expects.

#![allow(dead_code)]

use mirdb_parser::gates::FormatVersion;
use mirdb_parser::item::ItemRecord;
use mirdb_parser::map::{MapRecord, MineZone, Movement, Respawn, SafeZone};
use mirdb_parser::monster::MonsterNameEntry;
use mirdb_parser::npc::NpcRecord;

/// Byte-buffer writer producing .NET `BinaryWriter`-compatible output.
#[derive(Default)]
pub struct BinWriter {
    buf: Vec<u8>,
}

impl BinWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_i8(&mut self, v: i8) {
        self.buf.push(v as u8);
    }

    pub fn write_bool(&mut self, v: bool) {
        self.buf.push(u8::from(v));
    }

    pub fn write_i16(&mut self, v: i16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// 7-bit variable-length byte-count prefix, then UTF-8 data.
    pub fn write_string(&mut self, s: &str) {
        let mut len = s.len();
        loop {
            if len >= 0x80 {
                self.buf.push((len as u8 & 0x7f) | 0x80);
                len >>= 7;
            } else {
                self.buf.push(len as u8);
                break;
            }
        }
        self.buf.extend_from_slice(s.as_bytes());
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

// -- record encoders, mirroring the decoder's layout field for field --

pub fn encode_safe_zone(w: &mut BinWriter, zone: &SafeZone) {
    w.write_i32(zone.x);
    w.write_i32(zone.y);
    w.write_u16(zone.size);
    w.write_bool(zone.start_point);
}

pub fn encode_respawn(w: &mut BinWriter, respawn: &Respawn, version: FormatVersion) {
    w.write_i32(respawn.monster_index);
    w.write_i32(respawn.x);
    w.write_i32(respawn.y);
    w.write_u16(respawn.count);
    w.write_u16(respawn.spread);
    w.write_u16(respawn.delay);
    w.write_u8(respawn.direction);
    w.write_string(&respawn.route_path);
    if version.respawn_has_timing() {
        w.write_u16(respawn.random_delay);
        w.write_i32(respawn.respawn_index);
        w.write_bool(respawn.save_respawn_time);
        w.write_u16(respawn.respawn_ticks);
    }
}

pub fn encode_movement(w: &mut BinWriter, movement: &Movement, version: FormatVersion) {
    w.write_i32(movement.map_index);
    w.write_i32(movement.src_x);
    w.write_i32(movement.src_y);
    w.write_i32(movement.dst_x);
    w.write_i32(movement.dst_y);
    w.write_bool(movement.need_hole);
    w.write_bool(movement.need_move);
    if version.movement_has_conquest() {
        w.write_i32(movement.conquest_index);
    }
    if version.movement_has_big_map_icon() {
        w.write_bool(movement.show_on_big_map);
        w.write_i32(movement.big_map_icon);
    }
}

pub fn encode_mine_zone(w: &mut BinWriter, zone: &MineZone) {
    w.write_i32(zone.x);
    w.write_i32(zone.y);
    w.write_u16(zone.size);
    w.write_u8(zone.mine_type);
}

pub fn encode_map(w: &mut BinWriter, map: &MapRecord, version: FormatVersion) {
    w.write_i32(map.index);
    w.write_string(&map.file_name);
    w.write_string(&map.title);
    w.write_u16(map.mini_map);
    w.write_u8(map.light);
    w.write_u16(map.big_map);
    w.write_u16(map.music);

    w.write_i32(map.safe_zones.len() as i32);
    for zone in &map.safe_zones {
        encode_safe_zone(w, zone);
    }
    w.write_i32(map.respawns.len() as i32);
    for respawn in &map.respawns {
        encode_respawn(w, respawn, version);
    }
    w.write_i32(map.movements.len() as i32);
    for movement in &map.movements {
        encode_movement(w, movement, version);
    }

    w.write_bool(map.no_teleport);
    w.write_bool(map.no_reconnect);
    w.write_bool(map.no_random);
    w.write_bool(map.no_escape);
    w.write_bool(map.no_recall);
    w.write_bool(map.no_drug);
    w.write_bool(map.no_position);
    w.write_bool(map.no_throw_item);
    w.write_bool(map.no_drop_player);
    w.write_bool(map.no_drop_monster);
    w.write_bool(map.no_names);
    w.write_bool(map.no_mount);
    w.write_bool(map.need_bridle);
    w.write_bool(map.no_fight);
    w.write_bool(map.fight);
    w.write_bool(map.no_group);
    w.write_bool(map.fire);
    w.write_i32(map.fire_damage);
    w.write_bool(map.lightning);
    w.write_i32(map.lightning_damage);
    w.write_u8(map.map_dark_light);
    w.write_u8(map.mine_index);

    w.write_i32(map.mine_zones.len() as i32);
    for zone in &map.mine_zones {
        encode_mine_zone(w, zone);
    }

    if version.map_has_no_town_teleport() {
        w.write_bool(map.no_town_teleport);
    }
    if version.map_has_no_reincarnation() {
        w.write_bool(map.no_reincarnation);
    }
    if version.map_has_weather() {
        w.write_u16(map.weather);
    }
    if version.map_has_music_controls() {
        w.write_bool(map.music_loop);
        w.write_u8(map.music_volume);
    }
    if version.map_has_instance_block() {
        w.write_bool(map.no_hero);
        w.write_bool(map.no_pet);
        w.write_bool(map.no_siege);
        w.write_bool(map.no_marriage);
        w.write_bool(map.no_trade);
        w.write_i32(map.player_limit);
        w.write_bool(map.instanced);
        w.write_bool(map.auto_close);
        w.write_i32(map.close_delay);
    }
}

/// Encode an item record. Consumed-but-unmaterialized fields take
/// deterministic filler derived from the index so that truncation or
/// misalignment shows up as a decode failure rather than a lucky match.
pub fn encode_item(w: &mut BinWriter, item: &ItemRecord, version: FormatVersion) {
    let filler = (item.index as u8).wrapping_add(0x11);

    w.write_i32(item.index);
    w.write_string(&item.name);
    w.write_u8(item.item_type);
    w.write_u8(item.grade);
    w.write_u8(filler); // required type
    w.write_u8(filler); // required class
    w.write_u8(filler); // required gender
    w.write_u8(filler); // set
    w.write_i16(item.shape);
    w.write_u8(filler); // weight
    w.write_u8(filler); // light
    w.write_u8(item.required_amount);
    w.write_u16(item.image);
    w.write_u16(item.durability);

    if version.item_has_legacy_stats() {
        w.write_u32(item.stack_size);
    } else {
        w.write_u16(item.stack_size as u16);
    }
    w.write_u32(item.price);

    if version.item_has_legacy_stats() {
        w.write_bytes(&[filler; 10]); // point A
        w.write_bool(false); // start item
        w.write_u8(filler); // effect
        w.write_u8(filler); // accuracy
        w.write_u8(filler); // agility
        w.write_u16(u16::from(filler)); // hp
        w.write_u16(u16::from(filler)); // mp
        if version.item_has_slots() {
            w.write_u8(filler);
        }
        w.write_bytes(&[filler; 20]); // point C
    } else {
        w.write_i32(2); // stat list
        w.write_u8(4);
        w.write_i32(i32::from(filler));
        w.write_u8(9);
        w.write_i32(-3);
        w.write_bool(false); // start item
        w.write_u8(filler); // effect
        if version.item_has_slots() {
            w.write_u8(filler);
        }
    }

    w.write_bool(false); // need identify
    w.write_bool(true); // show group pickup
    w.write_bool(false); // class based
    w.write_bool(false); // level based
    w.write_bool(true); // can mine

    w.write_bool(item.tooltip.is_some());
    if let Some(tooltip) = &item.tooltip {
        w.write_string(tooltip);
    }
}

pub fn encode_monster(w: &mut BinWriter, monster: &MonsterNameEntry, version: FormatVersion) {
    let filler = (monster.index as u8).wrapping_add(0x23);

    w.write_i32(monster.index);
    w.write_string(&monster.name);
    w.write_u16(u16::from(filler)); // image
    w.write_u8(filler); // ai
    w.write_u8(filler); // effect
    w.write_u16(44); // level
    w.write_u8(7); // view range
    w.write_u8(0); // cool eye

    if version.has_stat_list() {
        w.write_i32(3);
        for tag in 0u8..3 {
            w.write_u8(tag);
            w.write_i32(i32::from(filler) + i32::from(tag));
        }
    } else if version.monster_has_byte_stats() {
        w.write_bytes(&[filler; 10]);
    } else {
        for _ in 0..20 {
            w.write_u16(u16::from(filler));
        }
    }

    w.write_u16(2500); // attack speed
    w.write_u16(1800); // move speed
    w.write_u32(4200); // experience
    w.write_bool(true); // can push
    w.write_bool(false); // can tame

    if version.monster_has_revival_flags() {
        w.write_bool(false); // auto rev
        w.write_bool(false); // undead
    }
    if version.monster_has_drop_path() {
        w.write_string("Mons44\\WoomaTaurus");
    }
    if version.monster_has_spawn_script() {
        w.write_bool(false);
    }
    if version.monster_has_hide_flag() {
        w.write_bool(false);
    }
}

pub fn encode_npc(w: &mut BinWriter, npc: &NpcRecord, version: FormatVersion) {
    w.write_i32(npc.index);
    w.write_i32(npc.map_index);
    w.write_string(&npc.file_name);
    w.write_string(&npc.name);
    w.write_i32(npc.x);
    w.write_i32(npc.y);

    if version.npc_has_wide_image() {
        w.write_u16(180);
    } else {
        w.write_u8(18);
    }
    w.write_u16(100); // rate

    w.write_i32(2); // collect quests
    w.write_i32(301);
    w.write_i32(302);
    w.write_i32(1); // finish quests
    w.write_i32(303);

    if version.npc_has_schedule() {
        w.write_bool(false); // time visible
        w.write_u8(0); // hour start
        w.write_u8(0); // minute start
        w.write_u8(23); // hour end
        w.write_u8(59); // minute end
        w.write_i16(0); // min lev
        w.write_i16(0); // max lev
        w.write_string(""); // day of week
        w.write_string(""); // class required
        if version.npc_has_conquest_index() {
            w.write_i32(0);
        } else {
            w.write_bool(false);
        }
        w.write_i32(0); // flag index
    }
    if version.npc_has_big_map_icon() {
        w.write_bool(true);
        w.write_i32(91);
    }
    if version.npc_has_teleport_flag() {
        w.write_bool(false);
    }
    if version.npc_has_conquest_visibility() {
        w.write_bool(true);
    }
}

/// Encode a complete database stream: header, index counters, and the
/// four sections in their fixed order.
pub fn encode_database(
    version: FormatVersion,
    custom_version: i32,
    maps: &[MapRecord],
    items: &[ItemRecord],
    monsters: &[MonsterNameEntry],
    npcs: &[NpcRecord],
) -> Vec<u8> {
    let mut w = BinWriter::new();
    w.write_i32(version.raw());
    w.write_i32(custom_version);

    w.write_i32(1000); // map index counter
    w.write_i32(2000); // item index counter
    w.write_i32(3000); // monster index counter
    w.write_i32(4000); // npc index counter
    w.write_i32(5000); // quest index counter
    if version.has_gameshop_counter() {
        w.write_i32(6000);
    }
    if version.has_conquest_counter() {
        w.write_i32(7000);
    }
    if version.has_respawn_counter() {
        w.write_i32(8000);
    }

    w.write_i32(maps.len() as i32);
    for map in maps {
        encode_map(&mut w, map, version);
    }
    w.write_i32(items.len() as i32);
    for item in items {
        encode_item(&mut w, item, version);
    }
    w.write_i32(monsters.len() as i32);
    for monster in monsters {
        encode_monster(&mut w, monster, version);
    }
    w.write_i32(npcs.len() as i32);
    for npc in npcs {
        encode_npc(&mut w, npc, version);
    }
    w.into_bytes()
}

// -- fixtures --

/// Every gate edge in the format history plus its predecessor.
pub const GATE_EDGE_VERSIONS: &[i32] = &[
    1, 17, 18, 61, 62, 63, 65, 66, 67, 68, 69, 71, 72, 77, 78, 79, 83, 84, 85, 88, 89, 94, 95, 96,
    97, 106, 107, 109, 110, 111, 113, 114, 115, 116,
];

/// A representative map with populated nested lists. Gated fields are
/// only set when the version carries them, so a decode of the encoded
/// bytes must reproduce the fixture exactly.
pub fn sample_map(version: FormatVersion) -> MapRecord {
    let mut map = MapRecord {
        index: 7,
        file_name: "D2071".to_string(),
        title: "Mongchon Province".to_string(),
        mini_map: 14,
        light: 1,
        big_map: 40,
        music: 130,
        no_teleport: true,
        no_recall: true,
        no_names: false,
        fight: false,
        fire: true,
        fire_damage: 5,
        lightning: false,
        lightning_damage: 0,
        map_dark_light: 2,
        mine_index: 1,
        ..MapRecord::default()
    };

    map.safe_zones.push(SafeZone {
        x: 288,
        y: 616,
        size: 50,
        start_point: true,
    });
    map.safe_zones.push(SafeZone {
        x: 100,
        y: 100,
        size: 12,
        start_point: false,
    });

    let mut respawn = Respawn {
        monster_index: 55,
        x: 400,
        y: 380,
        count: 12,
        spread: 40,
        delay: 10,
        direction: 3,
        route_path: "WoomaRoute".to_string(),
        ..Respawn::default()
    };
    if version.respawn_has_timing() {
        respawn.random_delay = 5;
        respawn.respawn_index = 9;
        respawn.save_respawn_time = true;
        respawn.respawn_ticks = 2;
    }
    map.respawns.push(respawn);

    let mut movement = Movement {
        map_index: 3,
        src_x: 10,
        src_y: 20,
        dst_x: 200,
        dst_y: 220,
        need_hole: false,
        need_move: true,
        ..Movement::default()
    };
    if version.movement_has_conquest() {
        movement.conquest_index = 2;
    }
    if version.movement_has_big_map_icon() {
        movement.show_on_big_map = true;
        movement.big_map_icon = 17;
    }
    map.movements.push(movement);

    map.mine_zones.push(MineZone {
        x: 50,
        y: 60,
        size: 8,
        mine_type: 2,
    });

    if version.map_has_no_town_teleport() {
        map.no_town_teleport = true;
    }
    if version.map_has_no_reincarnation() {
        map.no_reincarnation = true;
    }
    if version.map_has_weather() {
        map.weather = 3;
    }
    if version.map_has_music_controls() {
        map.music_loop = true;
        map.music_volume = 80;
    }
    if version.map_has_instance_block() {
        map.no_hero = true;
        map.no_pet = false;
        map.no_siege = true;
        map.no_marriage = false;
        map.no_trade = true;
        map.player_limit = 64;
        map.instanced = false;
        map.auto_close = true;
        map.close_delay = 300;
    }
    map
}

pub fn sample_item(index: i32, name: &str) -> ItemRecord {
    ItemRecord {
        index,
        name: name.to_string(),
        item_type: 2,
        grade: 1,
        shape: 33,
        image: 2600,
        durability: 5000,
        stack_size: 1,
        price: 12800,
        required_amount: 22,
        tooltip: Some("Forged in the Bichon smithy.".to_string()),
    }
}

pub fn sample_monster(index: i32, name: &str) -> MonsterNameEntry {
    MonsterNameEntry {
        index,
        name: name.to_string(),
    }
}

pub fn sample_npc(index: i32, map_index: i32, name: &str) -> NpcRecord {
    NpcRecord {
        index,
        map_index,
        file_name: format!("{:02}Npc", index),
        name: name.to_string(),
        x: 288,
        y: 615,
    }
}
