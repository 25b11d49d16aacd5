//! Recovering the exact compressed length of a greens blob when no trustworthy
//! "next pointer" delta is available (see the packer's precise-overwrite path).

use super::decompress::decompress_greens;
use super::tables::CompressionTables;

const GREENS_TILES: usize = 24 * 24;

fn tiles_produced(buf: &[u8], tables: &CompressionTables) -> usize {
    // A prefix too short to decompress is, for sizing purposes, simply "not enough
    // tiles yet" — `recover_greens_length`'s binary search treats it the same as a
    // short-but-valid prefix.
    decompress_greens(buf, tables, None).map(|rows| rows.into_iter().map(|r| r.len()).sum()).unwrap_or(0)
}

/// Binary-search the smallest prefix length of `buf` whose decompression produces at
/// least 576 greens tiles. Returns `None` if even the whole buffer falls short.
pub fn recover_greens_length(buf: &[u8], tables: &CompressionTables) -> Option<usize> {
    if tiles_produced(buf, tables) < GREENS_TILES {
        return None;
    }
    let (mut lo, mut hi) = (1usize, buf.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if tiles_produced(&buf[..mid], tables) >= GREENS_TILES {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Some(lo)
}

#[cfg(test)]
mod greens_size_test;
