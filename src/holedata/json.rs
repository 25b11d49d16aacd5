//! The on-disk hole JSON schema and its conversion to/from [`super::HoleData`].

use serde::{Deserialize, Serialize};
use super::{Cell, HoleData, Metadata, Row};

#[derive(Serialize, Deserialize)]
pub struct GridJson {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Row>,
}

#[derive(Serialize, Deserialize)]
pub struct AttrGridJson {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Vec<u8>>,
}

#[derive(Serialize, Deserialize)]
pub struct HoleJson {
    pub hole: u32,
    pub par: u8,
    pub distance: u32,
    pub handicap: u8,
    pub scroll_limit: usize,
    pub green: super::Point,
    pub tee: super::Point,
    pub flag_positions: [super::FlagPosition; 4],
    pub terrain: GridJson,
    pub attributes: AttrGridJson,
    pub greens: GridJson,
}

impl From<&HoleData> for HoleJson {
    fn from(h: &HoleData) -> Self {
        HoleJson {
            hole: h.hole,
            par: h.metadata.par,
            distance: h.metadata.distance,
            handicap: h.metadata.handicap,
            scroll_limit: h.metadata.scroll_limit,
            green: h.metadata.green,
            tee: h.metadata.tee,
            flag_positions: h.metadata.flag_positions,
            terrain: GridJson {
                width: h.terrain.first().map(|r| r.len()).unwrap_or(0),
                height: h.terrain_height,
                rows: h.terrain[..h.terrain_height.min(h.terrain.len())].to_vec(),
            },
            attributes: AttrGridJson {
                width: 11,
                height: h.attributes.len(),
                rows: h.attributes.clone(),
            },
            greens: GridJson {
                width: 24,
                height: 24,
                rows: h.greens.clone(),
            },
        }
    }
}

impl From<HoleJson> for HoleData {
    fn from(j: HoleJson) -> Self {
        let row_width = j.terrain.width;
        let mut terrain = j.terrain.rows;
        for row in terrain.iter_mut() {
            if row.len() < row_width {
                row.0.resize(row_width, Cell::Byte(0));
            }
        }
        HoleData {
            hole: j.hole,
            terrain_height: j.terrain.height,
            terrain,
            attributes: j.attributes.rows,
            greens: j.greens.rows,
            metadata: Metadata {
                par: j.par,
                distance: j.distance,
                handicap: j.handicap,
                scroll_limit: j.scroll_limit,
                green: j.green,
                tee: j.tee,
                flag_positions: j.flag_positions,
            },
        }
    }
}
