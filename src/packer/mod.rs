//! # Packer
//!
//! Compresses one or two 18-hole courses, allocates their terrain across the three
//! terrain banks, writes greens and the per-hole bank lookup table into bank 3, and
//! repaints every fixed-bank pointer/metadata table a patched ROM needs.

pub mod patches;
pub mod alloc;
pub mod tables;
pub mod writer;
pub mod single;

use crate::addr;
use crate::codec::{self, CompressionTables};
use crate::holedata::HoleData;
use crate::rom::Rom;
use writer::Writer;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Addr(#[from] addr::Error),
    #[error(transparent)]
    Rom(#[from] crate::rom::Error),
    #[error(transparent)]
    Codec(#[from] codec::Error),
    #[error(transparent)]
    HoleData(#[from] crate::holedata::Error),
    #[error(transparent)]
    Patch(#[from] patches::Error),
    #[error(transparent)]
    Alloc(#[from] alloc::Error),
    #[error(transparent)]
    Writer(#[from] writer::Error),
    #[error("expected 1 or 2 courses of exactly 18 holes each, got {0} courses")]
    InvalidCourseShape(usize),
    #[error("greens region overflow: {used} bytes needed, {capacity} available")]
    GreensOverflow { used: usize, capacity: usize },
}

#[derive(Debug, Default)]
pub struct PackedWriteStats {
    pub per_hole_compressed_terrain: Vec<usize>,
    pub bank_usage: [usize; 3],
    pub bank_capacity: [usize; 3],
    pub greens_total_bytes: usize,
    pub applied_patches: Vec<&'static str>,
}

fn compress_hole(
    hole: &HoleData,
    terrain_tables: &CompressionTables,
    greens_tables: &CompressionTables,
) -> Result<(Vec<u8>, [u8; 72], Vec<u8>), Error> {
    hole.validate_no_placeholders()?;
    let terrain_bytes = hole.terrain_bytes()?;
    let terrain_compressed = codec::compress_terrain(&terrain_bytes, terrain_tables, codec::TERRAIN_ROW_WIDTH).map_err(codec::Error::from)?;
    let attrs = hole.packed_attributes()?;
    let greens_bytes = hole.greens_bytes()?;
    let greens_compressed = codec::compress_greens(&greens_bytes, greens_tables).map_err(codec::Error::from)?;
    Ok((terrain_compressed, attrs, greens_compressed))
}

fn required_patches(course_count: usize) -> Vec<patches::Patch> {
    let mut v = vec![patches::multi_bank_lookup_patch(), patches::course3_mirror_patch()];
    if course_count == 1 {
        v.push(patches::course2_mirror_patch());
    }
    v
}

/// Side-effect-free dry run: compresses and allocates without touching `rom`.
pub fn validate(rom: &Rom, courses: &[Vec<HoleData>]) -> Result<PackedWriteStats, Error> {
    if courses.is_empty() || courses.len() > 2 || courses.iter().any(|c| c.len() != tables::HOLES_PER_COURSE) {
        return Err(Error::InvalidCourseShape(courses.len()));
    }
    let terrain_tables = CompressionTables::load_terrain(&rom.prg).map_err(codec::Error::from)?;
    let greens_tables = CompressionTables::load_greens(&rom.prg, tables::GREENS_BANK).map_err(codec::Error::from)?;

    let mut compressed = Vec::new();
    for course in courses {
        for hole in course {
            compressed.push(compress_hole(hole, &terrain_tables, &greens_tables)?);
        }
    }

    let payload_sizes: Vec<usize> = compressed.iter().map(|(t, _, _)| t.len() + 72).collect();
    let allocations = alloc::allocate(&payload_sizes)?;

    let mut bank_usage = [0usize; 3];
    for a in &allocations {
        bank_usage[a.bank] += payload_sizes[a.hole_index];
    }

    let greens_total: usize = compressed.iter().map(|(_, _, g)| g.len()).sum();
    let capacity = (tables::GREENS_REGION_END - tables::GREENS_REGION_START) as usize;
    if greens_total > capacity {
        return Err(Error::GreensOverflow { used: greens_total, capacity });
    }

    Ok(PackedWriteStats {
        per_hole_compressed_terrain: compressed.iter().map(|(t, _, _)| t.len()).collect(),
        bank_usage,
        bank_capacity: alloc::BANK_CAPACITY,
        greens_total_bytes: greens_total,
        applied_patches: required_patches(courses.len()).iter().map(|p| p.name).collect(),
    })
}

/// Full write pipeline: patch, compress, allocate, write terrain/attributes, write the
/// bank table, write greens, repaint pointer and metadata tables.
pub fn pack_courses(rom: &mut Rom, courses: &[Vec<HoleData>], verbose: bool) -> Result<PackedWriteStats, Error> {
    if courses.is_empty() || courses.len() > 2 || courses.iter().any(|c| c.len() != tables::HOLES_PER_COURSE) {
        return Err(Error::InvalidCourseShape(courses.len()));
    }

    let required = required_patches(courses.len());
    for patch in &required {
        patch.apply(&mut rom.prg)?;
    }

    let terrain_tables = CompressionTables::load_terrain(&rom.prg).map_err(codec::Error::from)?;
    let greens_tables = CompressionTables::load_greens(&rom.prg, tables::GREENS_BANK).map_err(codec::Error::from)?;

    let flat_holes: Vec<&HoleData> = courses.iter().flatten().collect();
    let mut compressed = Vec::with_capacity(flat_holes.len());
    for hole in &flat_holes {
        compressed.push(compress_hole(hole, &terrain_tables, &greens_tables)?);
    }

    let payload_sizes: Vec<usize> = compressed.iter().map(|(t, _, _)| t.len() + 72).collect();
    let allocations = alloc::allocate(&payload_sizes)?;

    let greens_total: usize = compressed.iter().map(|(_, _, g)| g.len()).sum();
    let capacity = (tables::GREENS_REGION_END - tables::GREENS_REGION_START) as usize;
    if greens_total > capacity {
        return Err(Error::GreensOverflow { used: greens_total, capacity });
    }

    let mut w = Writer::new(&mut rom.prg, verbose);

    // Terrain + attributes, per allocation. Attributes land immediately after the
    // compressed terrain; the "terrain end" pointer marks that boundary, not the end
    // of the whole allocated payload (which also includes the 72 attribute bytes).
    let mut terrain_ptrs = vec![(0u16, 0u16); flat_holes.len()];
    for a in &allocations {
        let (terrain, attrs, _) = &compressed[a.hole_index];
        let attrs_start = a.terrain_start + terrain.len() as u16;
        w.annotate(format!("hole {} terrain", a.hole_index))
            .write_switched(a.terrain_start, a.bank, terrain)?;
        w.annotate(format!("hole {} attributes", a.hole_index))
            .write_switched(attrs_start, a.bank, attrs.as_slice())?;
        terrain_ptrs[a.hole_index] = (a.terrain_start, attrs_start);
    }

    // Per-hole bank lookup table in bank 3.
    for a in &allocations {
        w.annotate(format!("hole {} bank table entry", a.hole_index)).write_switched(
            tables::PACKED_BANK_TABLE + 2 * a.hole_index as u16,
            tables::GREENS_BANK,
            &[a.bank as u8],
        )?;
    }

    // Greens, written sequentially.
    let mut greens_ptrs = vec![0u16; flat_holes.len()];
    let mut cursor = tables::GREENS_REGION_START;
    for (i, (_, _, greens)) in compressed.iter().enumerate() {
        greens_ptrs[i] = cursor;
        w.annotate(format!("hole {i} greens")).write_switched(cursor, tables::GREENS_BANK, greens)?;
        cursor += greens.len() as u16;
    }

    // Repaint pointer and metadata tables for every written hole.
    for (i, hole) in flat_holes.iter().enumerate() {
        let (start, end) = terrain_ptrs[i];
        w.annotate(format!("hole {i} terrain ptr")).write_fixed_word(tables::TERRAIN_START_PTR + 2 * i as u16, start)?;
        w.annotate(format!("hole {i} terrain end ptr")).write_fixed_word(tables::TERRAIN_END_PTR + 2 * i as u16, end)?;
        w.annotate(format!("hole {i} greens ptr")).write_fixed_word(tables::GREENS_PTR + 2 * i as u16, greens_ptrs[i])?;

        w.annotate(format!("hole {i} par")).write_fixed_byte(tables::PAR + i as u16, hole.metadata.par)?;
        w.annotate(format!("hole {i} handicap")).write_fixed_byte(tables::HANDICAP + i as u16, hole.metadata.handicap)?;
        let (h, t, o) = hole.distance_bcd()?;
        w.annotate(format!("hole {i} distance")).write_fixed_byte(tables::DISTANCE_100 + i as u16, h)?;
        w.write_fixed_byte(tables::DISTANCE_10 + i as u16, t)?;
        w.write_fixed_byte(tables::DISTANCE_1 + i as u16, o)?;
        w.annotate(format!("hole {i} scroll limit"))
            .write_fixed_byte(tables::SCROLL_LIMIT + i as u16, hole.metadata.scroll_limit as u8)?;
        w.annotate(format!("hole {i} green pos")).write_fixed_byte(tables::GREEN_X + i as u16, hole.metadata.green.x as u8)?;
        w.write_fixed_byte(tables::GREEN_Y + i as u16, hole.metadata.green.y as u8)?;
        w.annotate(format!("hole {i} tee pos")).write_fixed_byte(tables::TEE_X + i as u16, hole.metadata.tee.x as u8)?;
        w.write_fixed_word(tables::TEE_Y + i as u16 * 2, hole.metadata.tee.y as u16)?;
        for (f, flag) in hole.metadata.flag_positions.iter().enumerate() {
            w.write_fixed_byte(tables::FLAG_X_OFFSET + (i * 4 + f) as u16, flag.x_offset as u8)?;
            w.write_fixed_byte(tables::FLAG_Y_OFFSET + (i * 4 + f) as u16, flag.y_offset as u8)?;
        }
    }

    // Holes beyond the written course(s) are never read by the game, but
    // `GREENS_PTR` spans all 54 holes; pad the rest with hole 0's address so the
    // table holds no stale or garbage pointers.
    for i in flat_holes.len()..tables::TOTAL_HOLES {
        w.annotate(format!("hole {i} greens ptr (padding)"))
            .write_fixed_word(tables::GREENS_PTR + 2 * i as u16, greens_ptrs[0])?;
    }

    let mut bank_usage = [0usize; 3];
    for a in &allocations {
        bank_usage[a.bank] += payload_sizes[a.hole_index];
    }

    Ok(PackedWriteStats {
        per_hole_compressed_terrain: compressed.iter().map(|(t, _, _)| t.len()).collect(),
        bank_usage,
        bank_capacity: alloc::BANK_CAPACITY,
        greens_total_bytes: greens_total,
        applied_patches: required.iter().map(|p| p.name).collect(),
    })
}

#[cfg(test)]
mod packer_test;
