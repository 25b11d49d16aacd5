//! `pack ROM COURSE_DIR... [-o OUT.nes] [--validate-only] [--verbose]`
//!
//! The full multi-bank packer: patches the ROM, allocates terrain across all three
//! banks, writes the per-hole bank table, and repaints every pointer/metadata table.

use std::path::Path;

use crate::packer;
use crate::DYNERR;

pub fn run(
    rom_path: &Path,
    course_dirs: &[std::path::PathBuf],
    out_path: Option<&Path>,
    validate_only: bool,
    verbose: bool,
) -> Result<(), DYNERR> {
    let rom = super::load_rom(rom_path)?;
    let mut courses = Vec::with_capacity(course_dirs.len());
    for dir in course_dirs {
        let (_, holes) = super::load_course_dir(dir)?;
        courses.push(holes);
    }

    if validate_only {
        let stats = packer::validate(&rom, &courses)?;
        println!(
            "bank usage: {:?}/{:?}, greens {} bytes, patches: {:?}",
            stats.bank_usage, stats.bank_capacity, stats.greens_total_bytes, stats.applied_patches
        );
        return Ok(());
    }

    let mut rom = rom;
    let stats = packer::pack_courses(&mut rom, &courses, verbose)?;
    log::info!(
        "packed {} course(s): bank usage {:?}/{:?}, greens {} bytes",
        courses.len(), stats.bank_usage, stats.bank_capacity, stats.greens_total_bytes
    );

    let out = out_path.unwrap_or(rom_path);
    super::save_rom(&rom, out)
}
