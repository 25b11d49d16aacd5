//! `fill COURSE_DIR HOLE_NUM --stats NEIGHBOR_STATS.json [--max-backtracks N]`
//!
//! Runs the Wave Function Collapse forest fill over one hole's placeholder terrain
//! regions and rewrites that hole's JSON file in place.

use std::fs;
use std::path::Path;

use crate::forest::{self, NeighborStats, NeighborStatsJson};
use crate::holedata::{HoleData, HoleJson};
use crate::DYNERR;

pub fn run(course_dir: &Path, hole_num: u32, stats_path: &Path, max_backtracks: Option<u32>) -> Result<(), DYNERR> {
    let hole_path = course_dir.join(format!("hole_{hole_num:02}.json"));
    let j: HoleJson = serde_json::from_str(&fs::read_to_string(&hole_path)?)?;
    let mut hole = HoleData::from(j);

    let stats_json: NeighborStatsJson = serde_json::from_str(&fs::read_to_string(stats_path)?)?;
    let stats = NeighborStats::from_json(stats_json);

    let budget = max_backtracks.unwrap_or(forest::DEFAULT_BACKTRACK_BUDGET);
    let summary = forest::fill_terrain(&mut hole.terrain, &stats, budget);

    log::info!(
        "hole {hole_num}: filled {} region(s), {} backtrack(s), {} cell(s) left unfilled",
        summary.regions_filled, summary.total_backtracks, summary.unfilled.len()
    );
    if !summary.unfilled.is_empty() {
        log::warn!("hole {hole_num}: {} cell(s) could not be filled: {:?}", summary.unfilled.len(), summary.unfilled);
    }

    let out = HoleJson::from(&hole);
    fs::write(&hole_path, serde_json::to_string_pretty(&out)?)?;
    Ok(())
}
