//! Wave Function Collapse solver for one placeholder region.

use std::collections::{HashMap, VecDeque};

use super::neighbor_stats::{Direction, NeighborStats};

pub const FILL_MIN: u8 = 0xA0;
pub const FILL_MAX: u8 = 0xA3;
pub const BORDER_MIN: u8 = 0xA4;
pub const BORDER_MAX: u8 = 0xBB;
pub const FOREST_TILE_COUNT: u32 = (BORDER_MAX - FILL_MIN) as u32 + 1;

pub fn is_fill(tile: u8) -> bool {
    (FILL_MIN..=FILL_MAX).contains(&tile)
}

pub fn is_border(tile: u8) -> bool {
    (BORDER_MIN..=BORDER_MAX).contains(&tile)
}

fn tile_bit(tile: u8) -> u32 {
    1u32 << (tile - FILL_MIN)
}

fn full_forest_mask() -> u32 {
    (0..FOREST_TILE_COUNT).fold(0u32, |m, i| m | (1 << i))
}

fn mask_tiles(mask: u32) -> Vec<u8> {
    (0..FOREST_TILE_COUNT).filter(|i| mask & (1 << i) != 0).map(|i| FILL_MIN + i as u8).collect()
}

fn dir_offset(dir: Direction) -> (isize, isize) {
    match dir {
        Direction::Up => (-1, 0),
        Direction::Down => (1, 0),
        Direction::Left => (0, -1),
        Direction::Right => (0, 1),
    }
}

#[derive(Default, Debug)]
pub struct FillReport {
    pub placed: HashMap<(usize, usize), u8>,
    pub backtracks_used: u32,
    pub unfilled: Vec<(usize, usize)>,
}

pub const DEFAULT_BACKTRACK_BUDGET: u32 = 10_000;

struct Board<'a> {
    grid: &'a [Vec<Option<u8>>],
    height: usize,
    width: usize,
}

impl<'a> Board<'a> {
    fn in_bounds(&self, r: isize, c: isize) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.height && (c as usize) < self.width
    }

    fn known(&self, committed: &HashMap<(usize, usize), u8>, r: usize, c: usize) -> Option<u8> {
        committed.get(&(r, c)).copied().or_else(|| self.grid[r][c])
    }
}

fn allowed_mask_for_neighbor(stats: &NeighborStats, dir: Direction, neighbor: u8) -> u32 {
    let mut mask = 0u32;
    for i in 0..FOREST_TILE_COUNT {
        let t = FILL_MIN + i as u8;
        if stats.is_valid_neighbor(t, dir, neighbor) {
            mask |= 1 << i;
        }
    }
    mask
}

fn constrain_from_known_neighbors(
    board: &Board,
    committed: &HashMap<(usize, usize), u8>,
    stats: &NeighborStats,
    r: usize,
    c: usize,
    mask: u32,
) -> u32 {
    let mut m = mask;
    for dir in Direction::ALL {
        let (dr, dc) = dir_offset(dir);
        let (nr, nc) = (r as isize + dr, c as isize + dc);
        if !board.in_bounds(nr, nc) {
            continue;
        }
        if let Some(n) = board.known(committed, nr as usize, nc as usize) {
            m &= allowed_mask_for_neighbor(stats, dir, n);
        }
    }
    m
}

/// Category bias + pattern-phase + neighbor-frequency score, excluding lookahead.
fn base_score(
    board: &Board,
    committed: &HashMap<(usize, usize), u8>,
    stats: &NeighborStats,
    r: usize,
    c: usize,
    distance: u32,
    tile: u8,
) -> f64 {
    let mut score = 0.0;

    if (distance <= 1 && is_border(tile)) || (distance > 1 && is_fill(tile)) {
        score += 100.0;
    }

    if is_fill(tile) {
        let phase = pattern_phase(board, committed, r, c);
        if tile == FILL_MIN + phase {
            score += 50.0;
        }
    }

    let mut freq_total = 0.0;
    let mut freq_dirs = 0u32;
    for dir in Direction::ALL {
        let (dr, dc) = dir_offset(dir);
        let (nr, nc) = (r as isize + dr, c as isize + dc);
        if !board.in_bounds(nr, nc) {
            continue;
        }
        let Some(n) = board.known(committed, nr as usize, nc as usize) else { continue };
        let f = stats.frequency(tile, dir, n);
        if f == 0 {
            continue;
        }
        freq_dirs += 1;
        if f > 5 {
            freq_total += 50.0 * (1.0 + f as f64).log2();
            if is_fill(tile) && is_fill(n) {
                freq_total += 30.0;
            }
        }
    }
    if freq_dirs > 0 {
        score += freq_total / freq_dirs as f64;
    }

    score
}

fn pattern_phase(board: &Board, committed: &HashMap<(usize, usize), u8>, r: usize, c: usize) -> u8 {
    // The leftmost already-placed fill tile in the row, wherever it sits relative
    // to `c` — collapse order isn't left-to-right, so it can be to either side.
    for cc in 0..board.width {
        if let Some(t) = board.known(committed, r, cc) {
            if is_fill(t) {
                let base_phase = (t - FILL_MIN) as isize - cc as isize;
                let phase = (base_phase + c as isize).rem_euclid(4);
                return phase as u8;
            }
        }
    }
    (if r % 2 == 0 { 2 } else { 0 }) + (c % 4) as u8
}

fn lookahead_score(
    board: &Board,
    committed: &HashMap<(usize, usize), u8>,
    superpositions: &HashMap<(usize, usize), u32>,
    stats: &NeighborStats,
    r: usize,
    c: usize,
    tile: u8,
    base: f64,
) -> f64 {
    let mut contradictions = 0u32;
    let mut total_entropy = 0i64;
    for dir in Direction::ALL {
        let (dr, dc) = dir_offset(dir);
        let (nr, nc) = (r as isize + dr, c as isize + dc);
        if !board.in_bounds(nr, nc) {
            continue;
        }
        let key = (nr as usize, nc as usize);
        if committed.contains_key(&key) {
            continue;
        }
        if let Some(&mask) = superpositions.get(&key) {
            let narrowed = mask & allowed_mask_for_neighbor(stats, dir.opposite(), tile);
            if narrowed == 0 {
                contradictions += 1;
            } else {
                total_entropy += narrowed.count_ones() as i64;
            }
        }
    }
    for (&key, &mask) in superpositions {
        if key == (r, c) {
            continue;
        }
        let (nr, nc) = key;
        let is_cardinal = Direction::ALL.iter().any(|&d| {
            let (dr, dc) = dir_offset(d);
            (r as isize + dr, c as isize + dc) == (nr as isize, nc as isize)
        });
        if !is_cardinal {
            total_entropy += mask.count_ones() as i64;
        }
    }
    base - 10000.0 * contradictions as f64 + 0.1 * total_entropy as f64
}

/// Solve one placeholder region, returning every placed tile plus diagnostics.
pub fn solve_region(
    grid: &[Vec<Option<u8>>],
    region: &[(usize, usize)],
    distances: &HashMap<(usize, usize), u32>,
    stats: &NeighborStats,
    backtrack_budget: u32,
) -> FillReport {
    let height = grid.len();
    let width = grid.first().map_or(0, |r| r.len());
    let board = Board { grid, height, width };

    let mut superpositions: HashMap<(usize, usize), u32> = HashMap::new();
    for &cell in region {
        superpositions.insert(cell, full_forest_mask());
    }
    let mut committed: HashMap<(usize, usize), u8> = HashMap::new();

    struct Frame {
        cell: (usize, usize),
        alternatives: Vec<u8>,
        snapshot_superpositions: HashMap<(usize, usize), u32>,
        snapshot_committed: HashMap<(usize, usize), u8>,
    }
    let mut decision_stack: Vec<Frame> = Vec::new();
    let mut backtracks_used = 0u32;

    let mut worklist: VecDeque<(usize, usize)> = region.iter().copied().collect();

    'outer: loop {
        // Propagate.
        let mut contradiction = false;
        while let Some((r, c)) = worklist.pop_front() {
            if committed.contains_key(&(r, c)) {
                continue;
            }
            let Some(&mask) = superpositions.get(&(r, c)) else { continue };
            let new_mask = constrain_from_known_neighbors(&board, &committed, stats, r, c, mask);
            if new_mask != mask {
                superpositions.insert((r, c), new_mask);
                if new_mask == 0 {
                    contradiction = true;
                    break;
                }
                for dir in Direction::ALL {
                    let (dr, dc) = dir_offset(dir);
                    let (nr, nc) = (r as isize + dr, c as isize + dc);
                    if board.in_bounds(nr, nc) {
                        let key = (nr as usize, nc as usize);
                        if superpositions.contains_key(&key) && !committed.contains_key(&key) {
                            worklist.push_back(key);
                        }
                    }
                }
            }
        }

        if contradiction {
            loop {
                let Some(mut frame) = decision_stack.pop() else {
                    break 'outer;
                };
                if frame.alternatives.is_empty() {
                    continue;
                }
                backtracks_used += 1;
                superpositions = frame.snapshot_superpositions.clone();
                committed = frame.snapshot_committed.clone();
                let next = frame.alternatives.remove(0);
                committed.insert(frame.cell, next);
                superpositions.remove(&frame.cell);
                worklist.clear();
                worklist.push_back(frame.cell);
                for dir in Direction::ALL {
                    let (dr, dc) = dir_offset(dir);
                    let (nr, nc) = (frame.cell.0 as isize + dr, frame.cell.1 as isize + dc);
                    if board.in_bounds(nr, nc) {
                        worklist.push_back((nr as usize, nc as usize));
                    }
                }
                if !frame.alternatives.is_empty() {
                    decision_stack.push(frame);
                }
                if backtracks_used > backtrack_budget {
                    break 'outer;
                }
                continue 'outer;
            }
        }

        // Select the lowest-entropy uncollapsed cell.
        let next_cell = superpositions
            .iter()
            .filter(|(k, _)| !committed.contains_key(*k))
            .min_by_key(|(_, mask)| mask.count_ones())
            .map(|(k, _)| *k);

        let Some(cell) = next_cell else {
            break;
        };
        let (r, c) = cell;
        let mask = superpositions[&cell];
        let distance = distances.get(&cell).copied().unwrap_or(1);

        let mut scored: Vec<(u8, f64)> = mask_tiles(mask)
            .into_iter()
            .map(|t| {
                let base = base_score(&board, &committed, stats, r, c, distance, t);
                let full = lookahead_score(&board, &committed, &superpositions, stats, r, c, t, base);
                (t, full)
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

        let snapshot_superpositions = superpositions.clone();
        let snapshot_committed = committed.clone();

        let best = scored.remove(0).0;
        committed.insert(cell, best);
        superpositions.remove(&cell);
        for dir in Direction::ALL {
            let (dr, dc) = dir_offset(dir);
            let (nr, nc) = (r as isize + dr, c as isize + dc);
            if board.in_bounds(nr, nc) {
                let key = (nr as usize, nc as usize);
                if superpositions.contains_key(&key) {
                    worklist.push_back(key);
                }
            }
        }

        if !scored.is_empty() {
            decision_stack.push(Frame {
                cell,
                alternatives: scored.into_iter().map(|(t, _)| t).collect(),
                snapshot_superpositions,
                snapshot_committed,
            });
        }
    }

    let mut unfilled: Vec<(usize, usize)> =
        region.iter().copied().filter(|cell| !committed.contains_key(cell)).collect();

    if !unfilled.is_empty() {
        relax(&board, &mut committed, &mut unfilled, stats, distances);
    }

    FillReport { placed: committed, backtracks_used, unfilled }
}

fn relax(
    board: &Board,
    committed: &mut HashMap<(usize, usize), u8>,
    unfilled: &mut Vec<(usize, usize)>,
    stats: &NeighborStats,
    distances: &HashMap<(usize, usize), u32>,
) {
    let mut remaining = std::mem::take(unfilled);
    let mut still_unfilled = Vec::new();
    for (r, c) in remaining.drain(..) {
        let distance = distances.get(&(r, c)).copied().unwrap_or(1);
        let mask = constrain_from_known_neighbors(board, committed, stats, r, c, full_forest_mask());
        let candidates = mask_tiles(mask);
        let tile = if !candidates.is_empty() {
            candidates
                .into_iter()
                .map(|t| (t, base_score(board, committed, stats, r, c, distance, t)))
                .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
                .map(|(t, _)| t)
        } else {
            (FILL_MIN..=BORDER_MAX)
                .map(|t| (t, admissible_neighbor_count(board, committed, stats, r, c, t)))
                .max_by_key(|(_, count)| *count)
                .map(|(t, _)| t)
        };
        match tile {
            Some(t) => {
                committed.insert((r, c), t);
            }
            None => still_unfilled.push((r, c)),
        }
    }
    *unfilled = still_unfilled;
}

fn admissible_neighbor_count(
    board: &Board,
    committed: &HashMap<(usize, usize), u8>,
    stats: &NeighborStats,
    r: usize,
    c: usize,
    tile: u8,
) -> u32 {
    let mut count = 0;
    for dir in Direction::ALL {
        let (dr, dc) = dir_offset(dir);
        let (nr, nc) = (r as isize + dr, c as isize + dc);
        if !board.in_bounds(nr, nc) {
            count += 1;
            continue;
        }
        match board.known(committed, nr as usize, nc as usize) {
            None => count += 1,
            Some(n) => {
                if stats.is_valid_neighbor(tile, dir, n) {
                    count += 1;
                }
            }
        }
    }
    count
}
