//! Greedy longest-match compressor, the inverse of [`super::decompress`].

use super::tables::CompressionTables;
use super::decompress::{decompress_terrain, decompress_greens};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("byte {0:#04x} cannot be represented as a literal or dictionary code")]
    UnencodableValue(u8),
    #[error(transparent)]
    Decompress(#[from] super::decompress::Error),
}

const MAX_RUN: u8 = 31;

/// Reverse the vertical-fill pass: wherever `vertical[row above] == this cell`, the
/// original stream would have had a `0x00` marker here. Row 0 is left untouched.
fn reverse_vertical_fill(grid: &[Vec<u8>], tables: &CompressionTables) -> Vec<Vec<u8>> {
    let mut src = grid.to_vec();
    for r in 1..grid.len() {
        for c in 0..grid[r].len() {
            if tables.vertical_of(grid[r - 1][c]) == grid[r][c] {
                src[r][c] = 0x00;
            }
        }
    }
    src
}

fn encode_literal(byte: u8, dict_codes_by_first: &[(u8, u8)]) -> Result<Vec<u8>, Error> {
    if byte == 0x00 || (0x20..=0xDF).contains(&byte) {
        return Ok(vec![byte]);
    }
    // 0x01-0x1F and 0xE0-0xFF cannot appear as raw literals; find the shortest
    // dictionary code whose expansion starts with this byte.
    for &(first, code) in dict_codes_by_first {
        if first == byte {
            return Ok(vec![code]);
        }
    }
    Err(Error::UnencodableValue(byte))
}

/// Compress a flattened byte stream against `tables`, producing a stream that
/// `decompress_terrain`/`decompress_greens` will expand back to `linear`.
fn compress_linear(linear: &[u8], tables: &CompressionTables) -> Result<Vec<u8>, Error> {
    let reverse_dict = tables.reverse_dictionary();
    // Sorted shortest-expansion-first, the opposite of `reverse_dictionary`'s
    // longest-first order, so `encode_literal`'s first match is the shortest code.
    let mut dict_codes_by_first: Vec<(u8, u8, usize)> =
        (0..32).map(|i| (tables.dictionary[i].first_byte, 0xE0u8 + i as u8, tables.expand(i).len())).collect();
    dict_codes_by_first.sort_by_key(|&(_, _, len)| len);
    let dict_codes_by_first: Vec<(u8, u8)> = dict_codes_by_first.into_iter().map(|(first, code, _)| (first, code)).collect();

    let mut out = Vec::new();
    let mut pos = 0usize;
    while pos < linear.len() {
        // 1. Longest dictionary match.
        let mut matched = None;
        for (expansion, code) in &reverse_dict {
            let len = expansion.len();
            if len == 0 || pos + len > linear.len() {
                continue;
            }
            if &linear[pos..pos + len] == expansion.as_slice() {
                matched = Some((len, *code));
                break;
            }
        }
        if let Some((len, code)) = matched {
            out.push(code);
            pos += len;
            continue;
        }

        // 2. Literal plus horizontal run.
        let byte = linear[pos];
        out.extend(encode_literal(byte, &dict_codes_by_first)?);
        pos += 1;
        let mut run_len: u8 = 0;
        let mut last = byte;
        while run_len < MAX_RUN && pos < linear.len() && linear[pos] == tables.horizontal_of(last) {
            last = linear[pos];
            pos += 1;
            run_len += 1;
        }
        if run_len > 0 {
            out.push(run_len);
        }
    }
    Ok(out)
}

/// Compress a terrain grid (rows padded to `row_width`).
pub fn compress_terrain(grid: &[Vec<u8>], tables: &CompressionTables, row_width: usize) -> Result<Vec<u8>, Error> {
    let src = reverse_vertical_fill(grid, tables);
    let mut linear = Vec::with_capacity(grid.len() * row_width);
    for row in &src {
        let mut padded = row.clone();
        padded.resize(row_width, 0);
        linear.extend(padded);
    }
    compress_linear(&linear, tables)
}

/// Compress a 24x24 greens grid.
pub fn compress_greens(grid: &[Vec<u8>], tables: &CompressionTables) -> Result<Vec<u8>, Error> {
    let src = reverse_vertical_fill(grid, tables);
    let linear: Vec<u8> = src.into_iter().flatten().collect();
    compress_linear(&linear, tables)
}

/// Round-trip a terrain grid through compress+decompress; used by tests and by
/// dry-run validation to size a hole's payload.
pub fn round_trip_terrain(grid: &[Vec<u8>], tables: &CompressionTables, row_width: usize) -> Result<Vec<Vec<u8>>, Error> {
    let compressed = compress_terrain(grid, tables, row_width)?;
    Ok(decompress_terrain(&compressed, tables, row_width, None)?)
}

/// Round-trip a greens grid through compress+decompress.
pub fn round_trip_greens(grid: &[Vec<u8>], tables: &CompressionTables) -> Result<Vec<Vec<u8>>, Error> {
    let compressed = compress_greens(grid, tables)?;
    Ok(decompress_greens(&compressed, tables, None)?)
}

#[cfg(test)]
mod compress_test;
