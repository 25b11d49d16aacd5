//! The simpler one-course-per-bank writer: no bank allocation across courses, no
//! per-hole bank table, no multi-bank lookup patch. Terrain is rewritten sequentially
//! into the course's already-assigned bank; greens are rewritten sequentially starting
//! at the course's existing first-hole greens pointer.

use crate::addr;
use crate::codec::{self, CompressionTables};
use crate::holedata::HoleData;
use crate::rom::Rom;

use super::{patches, tables, writer::Writer, Error};

#[derive(Debug, Default)]
pub struct SingleWriteStats {
    pub course_index: usize,
    pub bank: usize,
    pub per_hole_compressed_terrain: Vec<usize>,
    pub bank_bytes_used: usize,
    pub bank_capacity: usize,
    pub greens_total_bytes: usize,
    pub old_greens_total_bytes: usize,
}

/// Write one 18-hole course into the bank it is already assigned to, per `course.json`'s
/// `hole_offset` / the ROM's course→terrain-bank table.
pub fn write_course(rom: &mut Rom, course_index: usize, holes: &[HoleData], verbose: bool) -> Result<SingleWriteStats, Error> {
    if holes.len() != tables::HOLES_PER_COURSE {
        return Err(Error::InvalidCourseShape(1));
    }
    if course_index == 1 {
        let patch = patches::course2_mirror_patch();
        patch.apply(&mut rom.prg)?;
    }

    let hole_offset = course_index * tables::HOLES_PER_COURSE;
    let bank = rom.read_fixed_byte(tables::COURSE_BANK_TERRAIN + course_index as u16)? as usize;
    let bank_start = super::alloc::BANK_START[bank];
    let bank_capacity = super::alloc::BANK_CAPACITY[bank];

    let terrain_tables = CompressionTables::load_terrain(&rom.prg).map_err(codec::Error::from)?;
    let greens_tables = CompressionTables::load_greens(&rom.prg, tables::GREENS_BANK).map_err(codec::Error::from)?;

    let mut compressed = Vec::with_capacity(holes.len());
    let mut old_greens_total = 0usize;
    for (i, hole) in holes.iter().enumerate() {
        hole.validate_no_placeholders()?;
        let terrain_bytes = hole.terrain_bytes()?;
        let terrain = codec::compress_terrain(&terrain_bytes, &terrain_tables, codec::TERRAIN_ROW_WIDTH).map_err(codec::Error::from)?;
        let attrs = hole.packed_attributes()?;
        let greens_bytes = hole.greens_bytes()?;
        let greens = codec::compress_greens(&greens_bytes, &greens_tables).map_err(codec::Error::from)?;

        let old_ptr = rom.read_fixed_word(tables::GREENS_PTR + 2 * (hole_offset + i) as u16)?;
        if let Some(old_raw) = rom.read_switched(old_ptr, tables::GREENS_BANK, codec::GREENS_WIDTH * codec::GREENS_HEIGHT * 2).ok() {
            if let Some(len) = codec::recover_greens_length(old_raw, &greens_tables) {
                old_greens_total += len;
            }
        }
        compressed.push((terrain, attrs, greens));
    }

    let payload_sizes: Vec<usize> = compressed.iter().map(|(t, _, _)| t.len() + 72).collect();
    let total_required: usize = payload_sizes.iter().sum();
    if total_required > bank_capacity {
        return Err(Error::Alloc(super::alloc::Error::BankOverflow {
            hole: hole_offset,
            required: total_required,
            total_required,
            total_available: bank_capacity,
        }));
    }

    let first_greens_ptr = rom.read_fixed_word(tables::GREENS_PTR + 2 * hole_offset as u16)?;
    let greens_total: usize = compressed.iter().map(|(_, _, g)| g.len()).sum();
    let greens_capacity = (tables::GREENS_REGION_END - first_greens_ptr) as usize;
    if greens_total > greens_capacity {
        return Err(Error::GreensOverflow { used: greens_total, capacity: greens_capacity });
    }

    let mut w = Writer::new(&mut rom.prg, verbose);
    let mut cursor = bank_start;
    for (i, (terrain, attrs, _)) in compressed.iter().enumerate() {
        let hole_idx = hole_offset + i;
        let start = cursor;
        let attrs_start = start + terrain.len() as u16;
        w.annotate(format!("hole {hole_idx} terrain")).write_switched(start, bank, terrain)?;
        w.annotate(format!("hole {hole_idx} attributes")).write_switched(attrs_start, bank, attrs.as_slice())?;
        w.write_fixed_word(tables::TERRAIN_START_PTR + 2 * hole_idx as u16, start)?;
        w.write_fixed_word(tables::TERRAIN_END_PTR + 2 * hole_idx as u16, attrs_start)?;
        cursor = attrs_start + attrs.len() as u16;
    }

    let mut greens_cursor = first_greens_ptr;
    for (i, (_, _, greens)) in compressed.iter().enumerate() {
        let hole_idx = hole_offset + i;
        w.annotate(format!("hole {hole_idx} greens")).write_switched(greens_cursor, tables::GREENS_BANK, greens)?;
        w.write_fixed_word(tables::GREENS_PTR + 2 * hole_idx as u16, greens_cursor)?;
        greens_cursor += greens.len() as u16;
    }

    for (i, hole) in holes.iter().enumerate() {
        let hole_idx = hole_offset + i;
        w.write_fixed_byte(tables::PAR + hole_idx as u16, hole.metadata.par)?;
        w.write_fixed_byte(tables::HANDICAP + hole_idx as u16, hole.metadata.handicap)?;
        let (h, t, o) = hole.distance_bcd()?;
        w.write_fixed_byte(tables::DISTANCE_100 + hole_idx as u16, h)?;
        w.write_fixed_byte(tables::DISTANCE_10 + hole_idx as u16, t)?;
        w.write_fixed_byte(tables::DISTANCE_1 + hole_idx as u16, o)?;
        w.write_fixed_byte(tables::SCROLL_LIMIT + hole_idx as u16, hole.metadata.scroll_limit as u8)?;
        w.write_fixed_byte(tables::GREEN_X + hole_idx as u16, hole.metadata.green.x as u8)?;
        w.write_fixed_byte(tables::GREEN_Y + hole_idx as u16, hole.metadata.green.y as u8)?;
        w.write_fixed_byte(tables::TEE_X + hole_idx as u16, hole.metadata.tee.x as u8)?;
        w.write_fixed_word(tables::TEE_Y + hole_idx as u16 * 2, hole.metadata.tee.y as u16)?;
        for (f, flag) in hole.metadata.flag_positions.iter().enumerate() {
            w.write_fixed_byte(tables::FLAG_X_OFFSET + (hole_idx * 4 + f) as u16, flag.x_offset as u8)?;
            w.write_fixed_byte(tables::FLAG_Y_OFFSET + (hole_idx * 4 + f) as u16, flag.y_offset as u8)?;
        }
    }

    Ok(SingleWriteStats {
        course_index,
        bank,
        per_hole_compressed_terrain: compressed.iter().map(|(t, _, _)| t.len()).collect(),
        bank_bytes_used: total_required,
        bank_capacity,
        greens_total_bytes: greens_total,
        old_greens_total_bytes: old_greens_total,
    })
}

#[cfg(test)]
mod single_test {
    use super::*;
    use crate::holedata::{Cell, Row, Metadata, Point, FlagPosition};

    fn blank_rom() -> Rom {
        let mut data = vec![0u8; crate::rom::INES_HEADER_SIZE + crate::rom::PRG_BANKS * addr::BANK_SIZE];
        data[0..4].copy_from_slice(b"NES\x1a");
        data[4] = crate::rom::PRG_BANKS as u8;
        for patch in [patches::course2_mirror_patch()] {
            let start = crate::rom::INES_HEADER_SIZE + patch.offset;
            data[start..start + patch.original.len()].copy_from_slice(&patch.original);
        }
        let mut rom = Rom::from_bytes(&data).unwrap();
        let off = addr::cpu_to_prg_fixed(tables::GREENS_PTR).unwrap();
        rom.prg[off..off + 2].copy_from_slice(&tables::GREENS_REGION_START.to_le_bytes());
        rom
    }

    fn flat_hole(n: u32) -> HoleData {
        let terrain = (0..30).map(|_| Row(vec![Cell::Byte(0x20); 22])).collect();
        let attributes = vec![vec![1u8; 11]; 15];
        let greens = (0..24).map(|_| Row(vec![Cell::Byte(0x20); 24])).collect();
        HoleData {
            hole: n,
            terrain,
            terrain_height: 30,
            attributes,
            greens,
            metadata: Metadata {
                par: 4,
                distance: 200,
                handicap: 1,
                scroll_limit: 1,
                green: Point { x: 5, y: 5 },
                tee: Point { x: 1, y: 1 },
                flag_positions: [FlagPosition { x_offset: 0, y_offset: 0 }; 4],
            },
        }
    }

    #[test]
    fn writes_course_zero_into_its_assigned_bank() {
        let mut rom = blank_rom();
        // Course 0 assigned to bank 0, per the unpatched course->terrain-bank table
        // (left at 0 in this blank fixture, which is bank 0).
        let holes: Vec<HoleData> = (0..18).map(flat_hole).collect();
        let stats = write_course(&mut rom, 0, &holes, false).unwrap();
        assert_eq!(stats.bank, 0);
        assert!(stats.bank_bytes_used <= stats.bank_capacity);
    }
}
