//! Per-tile, per-direction neighbor frequency statistics, loaded from or saved to the
//! JSON file produced by `analyze_neighbors`.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// The opposite direction, from the neighbor's point of view.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NeighborStatsMetadata {
    pub total_holes_analyzed: u32,
    pub total_unique_tiles: u32,
    pub total_relationships: u32,
}

/// `tile -> direction -> neighbor tile -> observed count`.
#[derive(Clone, Debug, Default)]
pub struct NeighborStats {
    pub metadata: NeighborStatsMetadata,
    counts: HashMap<u8, HashMap<Direction, HashMap<u8, u32>>>,
}

impl NeighborStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tile: u8, dir: Direction, neighbor: u8) {
        *self.counts.entry(tile).or_default().entry(dir).or_default().entry(neighbor).or_insert(0) += 1;
        self.metadata.total_relationships += 1;
    }

    pub fn frequency(&self, tile: u8, dir: Direction, neighbor: u8) -> u32 {
        self.counts.get(&tile).and_then(|d| d.get(&dir)).and_then(|n| n.get(&neighbor)).copied().unwrap_or(0)
    }

    pub fn is_valid_neighbor(&self, tile: u8, dir: Direction, neighbor: u8) -> bool {
        self.frequency(tile, dir, neighbor) > 0
    }

    pub fn finalize_metadata(&mut self) {
        self.metadata.total_unique_tiles = self.counts.len() as u32;
    }

    pub fn to_json(&self) -> NeighborStatsJson {
        let mut neighbors = HashMap::new();
        for (&tile, dirs) in &self.counts {
            let mut dir_map = HashMap::new();
            for (&dir, neighbor_counts) in dirs {
                let mut n_map = HashMap::new();
                for (&n, &count) in neighbor_counts {
                    n_map.insert(format!("{n:#04X}"), count);
                }
                dir_map.insert(dir.as_str().to_string(), n_map);
            }
            neighbors.insert(format!("{tile:#04X}"), dir_map);
        }
        NeighborStatsJson { metadata: self.metadata.clone(), neighbors }
    }

    pub fn from_json(json: NeighborStatsJson) -> Self {
        let mut counts = HashMap::new();
        for (tile_key, dirs) in json.neighbors {
            let Some(tile) = parse_hex_byte(&tile_key) else { continue };
            let mut dir_map = HashMap::new();
            for (dir_key, n_map) in dirs {
                let Some(dir) = Direction::from_str(&dir_key) else { continue };
                let mut parsed = HashMap::new();
                for (n_key, count) in n_map {
                    if let Some(n) = parse_hex_byte(&n_key) {
                        parsed.insert(n, count);
                    }
                }
                dir_map.insert(dir, parsed);
            }
            counts.insert(tile, dir_map);
        }
        Self { metadata: json.metadata, counts }
    }
}

fn parse_hex_byte(key: &str) -> Option<u8> {
    u8::from_str_radix(key.trim_start_matches("0x").trim_start_matches("0X"), 16).ok()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NeighborStatsJson {
    pub metadata: NeighborStatsMetadata,
    pub neighbors: HashMap<String, HashMap<String, HashMap<String, u32>>>,
}

#[cfg(test)]
mod neighbor_stats_test {
    use super::*;

    #[test]
    fn records_and_reads_frequency() {
        let mut stats = NeighborStats::new();
        stats.record(0xA0, Direction::Right, 0xA1);
        stats.record(0xA0, Direction::Right, 0xA1);
        assert_eq!(stats.frequency(0xA0, Direction::Right, 0xA1), 2);
        assert!(stats.is_valid_neighbor(0xA0, Direction::Right, 0xA1));
        assert!(!stats.is_valid_neighbor(0xA0, Direction::Right, 0xFF));
    }

    #[test]
    fn round_trips_through_json() {
        let mut stats = NeighborStats::new();
        stats.record(0xA4, Direction::Up, 0x20);
        stats.finalize_metadata();
        let json = stats.to_json();
        let restored = NeighborStats::from_json(json);
        assert_eq!(restored.frequency(0xA4, Direction::Up, 0x20), 1);
    }
}
