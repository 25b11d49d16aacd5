//! CLI command implementations. Each submodule implements one subcommand and returns a
//! plain `STDRESULT`/`DYNERR`, matching the convention used throughout the library.

pub mod dump;
pub mod write;
pub mod pack;
pub mod extract_tables;
pub mod analyze_neighbors;
pub mod fill;
pub mod completions;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::holedata::{HoleData, HoleJson};
use crate::packer::tables::HOLES_PER_COURSE;
use crate::rom::Rom;
use crate::DYNERR;

pub const COURSE_NAMES: [&str; 3] = ["japan", "us", "uk"];

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("course directory {0} is missing course.json")]
    MissingCourseJson(String),
    #[error("expected {expected} hole files in {dir}, found {found}")]
    WrongHoleCount { dir: String, expected: usize, found: usize },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CourseJson {
    pub hole_offset: usize,
}

pub fn load_rom(path: &Path) -> Result<Rom, DYNERR> {
    let data = fs::read(path)?;
    log::info!("reading ROM from {}", path.display());
    Ok(Rom::from_bytes(&data)?)
}

pub fn save_rom(rom: &Rom, path: &Path) -> Result<(), DYNERR> {
    fs::write(path, rom.to_bytes())?;
    log::info!("wrote ROM to {}", path.display());
    Ok(())
}

pub fn load_course_dir(dir: &Path) -> Result<(CourseJson, Vec<HoleData>), DYNERR> {
    let course_json_path = dir.join("course.json");
    if !course_json_path.exists() {
        return Err(Box::new(Error::MissingCourseJson(dir.display().to_string())));
    }
    let course: CourseJson = serde_json::from_str(&fs::read_to_string(course_json_path)?)?;

    let mut holes = Vec::with_capacity(HOLES_PER_COURSE);
    for i in 1..=HOLES_PER_COURSE {
        let path = dir.join(format!("hole_{i:02}.json"));
        let j: HoleJson = serde_json::from_str(&fs::read_to_string(&path)?)?;
        holes.push(HoleData::from(j));
    }
    if holes.len() != HOLES_PER_COURSE {
        return Err(Box::new(Error::WrongHoleCount {
            dir: dir.display().to_string(),
            expected: HOLES_PER_COURSE,
            found: holes.len(),
        }));
    }
    Ok((course, holes))
}

pub fn save_course_dir(dir: &Path, course: &CourseJson, holes: &[HoleData]) -> Result<(), DYNERR> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("course.json"), serde_json::to_string_pretty(course)?)?;
    for (i, hole) in holes.iter().enumerate() {
        let json = HoleJson::from(hole);
        fs::write(dir.join(format!("hole_{:02}.json", i + 1)), serde_json::to_string_pretty(&json)?)?;
    }
    Ok(())
}
