//! # Forest Fill
//!
//! Wave Function Collapse fill of placeholder terrain regions with forest fill/border
//! tiles, driven by neighbor frequency statistics gathered from real courses.

pub mod neighbor_stats;
pub mod regions;
pub mod solver;

pub use neighbor_stats::{Direction, NeighborStats, NeighborStatsJson};
pub use solver::{FillReport, DEFAULT_BACKTRACK_BUDGET};

use crate::holedata::{Cell, Row};

/// Result of filling every placeholder region of a terrain grid.
#[derive(Debug, Default)]
pub struct FillSummary {
    pub regions_filled: usize,
    pub total_backtracks: u32,
    pub unfilled: Vec<(usize, usize)>,
}

/// Fill every placeholder region in `terrain` in place, one region at a time, committing
/// each region's placements before moving to the next.
pub fn fill_terrain(terrain: &mut [Row], stats: &NeighborStats, backtrack_budget: u32) -> FillSummary {
    let mut summary = FillSummary::default();

    loop {
        let grid: Vec<Vec<Option<u8>>> =
            terrain.iter().map(|row| row.iter().map(|cell| cell.as_byte()).collect()).collect();
        let all_regions = regions::find_regions(&grid);
        let Some(region) = all_regions.into_iter().find(|r| !r.is_empty()) else {
            break;
        };

        let dist = regions::distance_field(&region, &grid);
        let report = solver::solve_region(&grid, &region, &dist, stats, backtrack_budget);

        for (&(r, c), &tile) in &report.placed {
            terrain[r][c] = Cell::Byte(tile);
        }
        summary.regions_filled += 1;
        summary.total_backtracks += report.backtracks_used;
        summary.unfilled.extend(report.unfilled);

        // A region that made no progress at all would loop forever; bail out rather
        // than spin (only possible if every cell in it was reported unfilled).
        if terrain
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, cell)| (r, c, cell)))
            .filter(|(r, c, _)| region.contains(&(*r, *c)))
            .all(|(_, _, cell)| cell.is_placeholder())
        {
            break;
        }
    }

    summary
}

#[cfg(test)]
mod forest_test {
    use super::*;

    fn row(bytes: &[Cell]) -> Row {
        Row(bytes.to_vec())
    }

    #[test]
    fn fills_a_single_placeholder_surrounded_by_known_fill_tiles() {
        let mut terrain = vec![
            row(&[Cell::Byte(0x20), Cell::Byte(solver::FILL_MIN), Cell::Byte(0x20)]),
            row(&[Cell::Byte(solver::FILL_MIN), Cell::Placeholder, Cell::Byte(solver::FILL_MIN)]),
            row(&[Cell::Byte(0x20), Cell::Byte(solver::FILL_MIN), Cell::Byte(0x20)]),
        ];
        let mut stats = NeighborStats::new();
        for dir in Direction::ALL {
            stats.record(solver::FILL_MIN, dir, solver::FILL_MIN);
        }

        let summary = fill_terrain(&mut terrain, &stats, DEFAULT_BACKTRACK_BUDGET);
        assert_eq!(summary.regions_filled, 1);
        assert!(summary.unfilled.is_empty());
        assert_eq!(terrain[1][1], Cell::Byte(solver::FILL_MIN));
    }

    #[test]
    fn leaves_no_region_behind_even_with_empty_stats() {
        let mut terrain =
            vec![row(&[Cell::Placeholder, Cell::Placeholder]), row(&[Cell::Byte(0x20), Cell::Byte(0x20)])];
        let stats = NeighborStats::new();
        let summary = fill_terrain(&mut terrain, &stats, DEFAULT_BACKTRACK_BUDGET);
        assert_eq!(summary.regions_filled, 1);
        assert!(terrain.iter().all(|r| r.iter().all(|c| !c.is_placeholder())));
    }
}
