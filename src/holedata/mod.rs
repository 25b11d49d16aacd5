//! # Hole Data Model
//!
//! One hole's terrain, attributes, greens, and metadata, plus the JSON form used by the
//! `dump`/`write`/`pack`/`fill` commands.

pub mod cell;
pub mod row;
pub mod attributes;
pub mod bcd;
pub mod rows;

pub use cell::Cell;
pub use row::Row;

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Attributes(#[from] attributes::Error),
    #[error(transparent)]
    Bcd(#[from] bcd::Error),
    #[error("hole contains placeholder or out-of-range tile at {kind} row {row} col {col}")]
    InvalidTile { kind: &'static str, row: usize, col: usize },
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlagPosition {
    pub x_offset: i32,
    pub y_offset: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    pub par: u8,
    pub distance: u32,
    pub handicap: u8,
    pub scroll_limit: usize,
    pub green: Point,
    pub tee: Point,
    pub flag_positions: [FlagPosition; 4],
}

/// One hole: terrain, attributes, greens, and metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoleData {
    pub hole: u32,
    pub terrain: Vec<Row>,
    pub terrain_height: usize,
    pub attributes: Vec<Vec<u8>>,
    pub greens: Vec<Row>,
    pub metadata: Metadata,
}

impl HoleData {
    /// Visible terrain rows (ignores soft-removed rows beyond `terrain_height`).
    pub fn visible_terrain(&self) -> &[Row] {
        &self.terrain[..self.terrain_height.min(self.terrain.len())]
    }

    pub fn add_row_pair(&mut self) {
        rows::add_row_pair(&mut self.terrain, &mut self.attributes, &mut self.terrain_height);
        self.metadata.scroll_limit = rows::scroll_limit(self.terrain_height);
    }

    pub fn remove_row_pair(&mut self) {
        rows::remove_row_pair(&mut self.terrain_height);
        self.metadata.scroll_limit = rows::scroll_limit(self.terrain_height);
    }

    /// Validate that every visible terrain and greens cell is a concrete byte, as
    /// required before compression/packing.
    pub fn validate_no_placeholders(&self) -> Result<(), Error> {
        for (r, row) in self.visible_terrain().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_placeholder() {
                    return Err(Error::InvalidTile { kind: "terrain", row: r, col: c });
                }
            }
        }
        for (r, row) in self.greens.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_placeholder() {
                    return Err(Error::InvalidTile { kind: "greens", row: r, col: c });
                }
            }
        }
        Ok(())
    }

    /// Visible terrain as plain byte rows, for the codec. Fails if any cell is a
    /// placeholder.
    pub fn terrain_bytes(&self) -> Result<Vec<Vec<u8>>, Error> {
        self.visible_terrain()
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| cell.as_byte().ok_or(Error::InvalidTile { kind: "terrain", row: r, col: c }))
                    .collect()
            })
            .collect()
    }

    /// Greens as plain byte rows, for the codec.
    pub fn greens_bytes(&self) -> Result<Vec<Vec<u8>>, Error> {
        self.greens
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| cell.as_byte().ok_or(Error::InvalidTile { kind: "greens", row: r, col: c }))
                    .collect()
            })
            .collect()
    }

    pub fn packed_attributes(&self) -> Result<[u8; 72], Error> {
        Ok(attributes::pack_attributes(&self.attributes)?)
    }

    pub fn distance_bcd(&self) -> Result<(u8, u8, u8), Error> {
        Ok(bcd::int_to_bcd(self.metadata.distance)?)
    }
}

pub mod json;
pub use json::HoleJson;

#[cfg(test)]
mod holedata_test;
