//! `dump ROM OUT_DIR` — extract all 54 holes to per-course JSON directories.

use std::path::Path;

use crate::codec::{self, CompressionTables};
use crate::holedata::{Cell, HoleData, Metadata, Row};
use crate::packer::{patches, tables};
use crate::rom::Rom;
use crate::DYNERR;

use super::{save_course_dir, CourseJson, COURSE_NAMES};

fn hole_bank(rom: &Rom, course_index: usize, hole_in_course: usize) -> Result<usize, DYNERR> {
    if patches::multi_bank_lookup_patch().is_applied(&rom.prg) {
        let hole_idx = course_index * tables::HOLES_PER_COURSE + hole_in_course;
        let off = crate::addr::cpu_to_prg_switched(tables::PACKED_BANK_TABLE + 2 * hole_idx as u16, tables::GREENS_BANK)?;
        Ok(rom.prg[off] as usize)
    } else {
        Ok(rom.read_fixed_byte(tables::COURSE_BANK_TERRAIN + course_index as u16)? as usize)
    }
}

fn dump_hole(rom: &Rom, terrain_tables: &CompressionTables, greens_tables: &CompressionTables, course_index: usize, hole_in_course: usize) -> Result<HoleData, DYNERR> {
    let hole_idx = course_index * tables::HOLES_PER_COURSE + hole_in_course;
    let bank = hole_bank(rom, course_index, hole_in_course)?;

    let terrain_start = rom.read_fixed_word(tables::TERRAIN_START_PTR + 2 * hole_idx as u16)?;
    let terrain_end = rom.read_fixed_word(tables::TERRAIN_END_PTR + 2 * hole_idx as u16)?;
    let compressed_terrain = rom.read_switched(terrain_start, bank, (terrain_end - terrain_start) as usize)?;
    let terrain_bytes = codec::decompress_terrain(compressed_terrain, terrain_tables, codec::TERRAIN_ROW_WIDTH, None)?;
    let terrain: Vec<Row> = terrain_bytes.iter().map(|r| Row(r.iter().map(|&b| Cell::Byte(b)).collect())).collect();
    let terrain_height = terrain.len();

    let attr_bytes = rom.read_switched(terrain_end, bank, 72)?;
    let attr_height = (terrain_height + 1) / 2;
    let attributes = crate::holedata::attributes::unpack_attributes(attr_bytes, attr_height);

    let greens_ptr = rom.read_fixed_word(tables::GREENS_PTR + 2 * hole_idx as u16)?;
    let max_len = (tables::GREENS_REGION_END - greens_ptr) as usize;
    let probe = rom.read_switched(greens_ptr, tables::GREENS_BANK, max_len)?;
    let len = codec::recover_greens_length(probe, greens_tables).unwrap_or(max_len);
    let compressed_greens = &probe[..len];
    let greens_bytes = codec::decompress_greens(compressed_greens, greens_tables, None)?;
    let greens: Vec<Row> = greens_bytes.iter().map(|r| Row(r.iter().map(|&b| Cell::Byte(b)).collect())).collect();

    let par = rom.read_fixed_byte(tables::PAR + hole_idx as u16)?;
    let handicap = rom.read_fixed_byte(tables::HANDICAP + hole_idx as u16)?;
    let h = rom.read_fixed_byte(tables::DISTANCE_100 + hole_idx as u16)?;
    let t = rom.read_fixed_byte(tables::DISTANCE_10 + hole_idx as u16)?;
    let o = rom.read_fixed_byte(tables::DISTANCE_1 + hole_idx as u16)?;
    let distance = crate::holedata::bcd::bcd_to_int(h, t, o);
    let scroll_limit = rom.read_fixed_byte(tables::SCROLL_LIMIT + hole_idx as u16)? as usize;
    let green = crate::holedata::Point {
        x: rom.read_fixed_byte(tables::GREEN_X + hole_idx as u16)? as i32,
        y: rom.read_fixed_byte(tables::GREEN_Y + hole_idx as u16)? as i32,
    };
    let tee = crate::holedata::Point {
        x: rom.read_fixed_byte(tables::TEE_X + hole_idx as u16)? as i32,
        y: rom.read_fixed_word(tables::TEE_Y + hole_idx as u16 * 2)? as i32,
    };
    let mut flag_positions = [crate::holedata::FlagPosition { x_offset: 0, y_offset: 0 }; 4];
    for (f, slot) in flag_positions.iter_mut().enumerate() {
        slot.x_offset = rom.read_fixed_byte(tables::FLAG_X_OFFSET + (hole_idx * 4 + f) as u16)? as i32;
        slot.y_offset = rom.read_fixed_byte(tables::FLAG_Y_OFFSET + (hole_idx * 4 + f) as u16)? as i32;
    }

    Ok(HoleData {
        hole: hole_idx as u32 + 1,
        terrain,
        terrain_height,
        attributes,
        greens,
        metadata: Metadata { par, distance, handicap, scroll_limit, green, tee, flag_positions },
    })
}

pub fn run(rom_path: &Path, out_dir: &Path) -> Result<(), DYNERR> {
    let rom = super::load_rom(rom_path)?;
    let terrain_tables = CompressionTables::load_terrain(&rom.prg)?;
    let greens_tables = CompressionTables::load_greens(&rom.prg, tables::GREENS_BANK)?;

    for (course_index, name) in COURSE_NAMES.iter().enumerate() {
        let mut holes = Vec::with_capacity(tables::HOLES_PER_COURSE);
        for hole_in_course in 0..tables::HOLES_PER_COURSE {
            holes.push(dump_hole(&rom, &terrain_tables, &greens_tables, course_index, hole_in_course)?);
        }
        let course_dir = out_dir.join(name);
        let course = CourseJson { hole_offset: course_index * tables::HOLES_PER_COURSE };
        save_course_dir(&course_dir, &course, &holes)?;
        log::info!("dumped course '{name}' ({} holes) to {}", holes.len(), course_dir.display());
    }
    Ok(())
}
