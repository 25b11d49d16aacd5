//! Placeholder region detection and distance-field preparation for WFC forest fill.

use std::collections::{HashMap, VecDeque};

pub const OUT_OF_BOUNDS_MIN: u8 = 0x80;
pub const OUT_OF_BOUNDS_MAX: u8 = 0x9B;

fn is_out_of_bounds_tile(b: u8) -> bool {
    (OUT_OF_BOUNDS_MIN..=OUT_OF_BOUNDS_MAX).contains(&b)
}

/// Find every maximal 4-connected region of placeholder cells (`grid[r][c].is_none()`).
pub fn find_regions(grid: &[Vec<Option<u8>>]) -> Vec<Vec<(usize, usize)>> {
    let height = grid.len();
    let mut visited = vec![vec![false; grid.first().map_or(0, |r| r.len())]; height];
    let mut regions = Vec::new();

    for r in 0..height {
        for c in 0..grid[r].len() {
            if grid[r][c].is_some() || visited[r][c] {
                continue;
            }
            let mut region = Vec::new();
            let mut queue = VecDeque::new();
            queue.push_back((r, c));
            visited[r][c] = true;
            while let Some((cr, cc)) = queue.pop_front() {
                region.push((cr, cc));
                for (nr, nc) in orthogonal_neighbors(cr, cc, height, grid[cr].len()) {
                    if grid[nr][nc].is_none() && !visited[nr][nc] {
                        visited[nr][nc] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
            regions.push(region);
        }
    }
    regions
}

fn orthogonal_neighbors(r: usize, c: usize, height: usize, width: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::with_capacity(4);
    if r > 0 {
        out.push((r - 1, c));
    }
    if r + 1 < height {
        out.push((r + 1, c));
    }
    if c > 0 {
        out.push((r, c - 1));
    }
    if c + 1 < width {
        out.push((r, c + 1));
    }
    out
}

fn eight_neighbors(r: usize, c: usize, height: usize, width: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::with_capacity(8);
    let ri = r as isize;
    let ci = c as isize;
    for dr in -1..=1isize {
        for dc in -1..=1isize {
            if dr == 0 && dc == 0 {
                continue;
            }
            let nr = ri + dr;
            let nc = ci + dc;
            if nr >= 0 && nc >= 0 && (nr as usize) < height && (nc as usize) < width {
                out.push((nr as usize, nc as usize));
            }
        }
    }
    out
}

/// Manhattan-ish distance of every region cell from the nearest out-of-bounds border
/// tile reachable by multi-source BFS confined to the region; falls back to
/// distance-to-edge-plus-one when no out-of-bounds tile seeds the region.
pub fn distance_field(region: &[(usize, usize)], grid: &[Vec<Option<u8>>]) -> HashMap<(usize, usize), u32> {
    let height = grid.len();
    let width = grid.first().map_or(0, |r| r.len());
    let region_set: std::collections::HashSet<(usize, usize)> = region.iter().copied().collect();

    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    for &(r, c) in region {
        let touches_border = eight_neighbors(r, c, height, width)
            .into_iter()
            .any(|(nr, nc)| grid[nr][nc].map_or(false, is_out_of_bounds_tile));
        if touches_border {
            dist.insert((r, c), 1u32);
            queue.push_back((r, c));
        }
    }

    if queue.is_empty() {
        for &(r, c) in region {
            let d = (r.min(c).min(height.saturating_sub(1) - r).min(width.saturating_sub(1) - c)) as u32 + 1;
            dist.insert((r, c), d);
        }
        return dist;
    }

    while let Some((r, c)) = queue.pop_front() {
        let d = dist[&(r, c)];
        for (nr, nc) in orthogonal_neighbors(r, c, height, width) {
            if region_set.contains(&(nr, nc)) && !dist.contains_key(&(nr, nc)) {
                dist.insert((nr, nc), d + 1);
                queue.push_back((nr, nc));
            }
        }
    }
    dist
}

#[cfg(test)]
mod regions_test {
    use super::*;

    fn grid_from(rows: &[&str]) -> Vec<Vec<Option<u8>>> {
        rows.iter()
            .map(|row| row.chars().map(|ch| if ch == '.' { None } else { Some(0x20) }).collect())
            .collect()
    }

    #[test]
    fn separates_disjoint_regions() {
        let grid = grid_from(&["x.x", "xxx", "x.x"]);
        let regions = find_regions(&grid);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].len(), 1);
        assert_eq!(regions[1].len(), 1);
    }

    #[test]
    fn one_region_merges_across_4_connectivity() {
        let grid = grid_from(&["x.x", "...", "x.x"]);
        let regions = find_regions(&grid);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 5);
    }

    #[test]
    fn falls_back_to_edge_distance_with_no_border_tiles() {
        let grid = grid_from(&["xxxxx", "x...x", "x...x", "x...x", "xxxxx"]);
        let regions = find_regions(&grid);
        let d = distance_field(&regions[0], &grid);
        assert_eq!(d[&(2, 2)], 3);
        assert_eq!(d[&(1, 1)], 2);
    }
}
