//! # `linksleeve` main library
//!
//! This library round-trips course data inside an NES golf cartridge ROM image.
//! It extracts hole layouts to editable JSON, and packs edited JSON back into a
//! ROM image that boots unchanged on original hardware.
//!
//! ## Architecture
//!
//! * `addr` converts between CPU addresses, absolute PRG offsets, and (bank, offset) pairs.
//! * `codec` compresses and decompresses terrain and greens data against cartridge-resident
//!   lookup tables.
//! * `holedata` models one hole (terrain, attributes, greens, metadata) and its JSON form.
//! * `packer` compresses a whole course, allocates holes across PRG banks, and repaints every
//!   fixed-bank pointer table a patched ROM needs.
//! * `forest` fills placeholder regions with forest tiles using a constraint-propagating,
//!   backtracking Wave Function Collapse solver driven by observed neighbor statistics.
//!
//! ## Error Handling
//!
//! Each module above defines its own `thiserror::Error` enum. Entry points that cross module
//! boundaries return `Result<T, DYNERR>`, matching the shape used throughout this crate's
//! command layer.

pub mod addr;
pub mod rom;
pub mod codec;
pub mod holedata;
pub mod packer;
pub mod forest;
pub mod commands;

/// Boxed error type used at module boundaries.
pub type DYNERR = Box<dyn std::error::Error>;
/// Result alias for operations with no success payload.
pub type STDRESULT = Result<(), DYNERR>;
