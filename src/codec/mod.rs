//! # Terrain / Greens Codec
//!
//! Two-pass decompression (RLE + dictionary expansion, then vertical fill) and a
//! matching greedy compressor, built around a cartridge-resident [`tables::CompressionTables`].

pub mod tables;
pub mod decompress;
pub mod compress;
pub mod greens_size;

pub use tables::CompressionTables;
pub use decompress::{decompress_terrain, decompress_greens, DecompressionStats};
pub use compress::{compress_terrain, compress_greens};
pub use greens_size::recover_greens_length;

pub const TERRAIN_ROW_WIDTH: usize = 22;
pub const GREENS_WIDTH: usize = 24;
pub const GREENS_HEIGHT: usize = 24;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Tables(#[from] tables::Error),
    #[error(transparent)]
    Decompress(#[from] decompress::Error),
    #[error(transparent)]
    Compress(#[from] compress::Error),
}
