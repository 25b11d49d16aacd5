//! `write ROM COURSE_DIR [-o OUT.nes] [-c COURSE_IDX] [--validate-only] [--verbose]`
//!
//! The single-course writer: rewrites one course into its already-assigned terrain bank.

use std::path::Path;

use crate::packer::single;
use crate::DYNERR;

#[allow(clippy::too_many_arguments)]
pub fn run(
    rom_path: &Path,
    course_dir: &Path,
    out_path: Option<&Path>,
    course_index: Option<usize>,
    validate_only: bool,
    verbose: bool,
) -> Result<(), DYNERR> {
    let mut rom = super::load_rom(rom_path)?;
    let (course, holes) = super::load_course_dir(course_dir)?;
    let course_index = course_index.unwrap_or(course.hole_offset / crate::packer::tables::HOLES_PER_COURSE);

    if validate_only {
        let mut probe = rom.clone();
        let stats = single::write_course(&mut probe, course_index, &holes, verbose)?;
        println!(
            "course {} would use {}/{} bytes in bank {}, {} bytes of greens (was {})",
            course_index, stats.bank_bytes_used, stats.bank_capacity, stats.bank, stats.greens_total_bytes, stats.old_greens_total_bytes
        );
        return Ok(());
    }

    let stats = single::write_course(&mut rom, course_index, &holes, verbose)?;
    log::info!(
        "wrote course {} into bank {} ({}/{} bytes)",
        course_index, stats.bank, stats.bank_bytes_used, stats.bank_capacity
    );

    let out = out_path.unwrap_or(rom_path);
    super::save_rom(&rom, out)
}
