//! `analyze_neighbors COURSE_DIR... -o STATS.json` — scan hole terrain grids across course
//! directories and build tile-adjacency frequency statistics for the forest fill.

use std::path::Path;

use crate::forest::{Direction, NeighborStats};
use crate::DYNERR;

pub fn run(course_dirs: &[std::path::PathBuf], out_path: &Path) -> Result<(), DYNERR> {
    let mut stats = NeighborStats::new();
    let mut holes_analyzed = 0u32;

    for dir in course_dirs {
        let (_, holes) = super::load_course_dir(dir)?;
        for hole in &holes {
            let grid: Vec<Vec<Option<u8>>> = hole
                .visible_terrain()
                .iter()
                .map(|row| row.iter().map(|cell| cell.as_byte()).collect())
                .collect();

            let height = grid.len();
            for (r, row) in grid.iter().enumerate() {
                let width = row.len();
                for (c, &cell) in row.iter().enumerate() {
                    let Some(tile) = cell else { continue };
                    if r > 0 {
                        if let Some(up) = grid[r - 1][c] {
                            stats.record(tile, Direction::Up, up);
                        }
                    }
                    if r + 1 < height {
                        if let Some(down) = grid[r + 1][c] {
                            stats.record(tile, Direction::Down, down);
                        }
                    }
                    if c > 0 {
                        if let Some(left) = row[c - 1] {
                            stats.record(tile, Direction::Left, left);
                        }
                    }
                    if c + 1 < width {
                        if let Some(right) = row[c + 1] {
                            stats.record(tile, Direction::Right, right);
                        }
                    }
                }
            }
            holes_analyzed += 1;
        }
    }

    stats.finalize_metadata();
    stats.metadata.total_holes_analyzed = holes_analyzed;

    std::fs::write(out_path, serde_json::to_string_pretty(&stats.to_json())?)?;
    log::info!("analyzed {holes_analyzed} holes, wrote neighbor stats to {}", out_path.display());
    Ok(())
}
