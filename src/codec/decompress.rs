//! Two-pass decompression shared by terrain and greens.

use std::collections::HashMap;
use super::tables::CompressionTables;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("compressed stream ended unexpectedly")]
    CorruptStream,
}

/// Collected counters describing what a decompression pass actually did; mirrors the
/// statistics the `extract_tables`/diagnostic tooling reports.
#[derive(Default, Debug, Clone)]
pub struct DecompressionStats {
    pub dict_code_uses: HashMap<u8, u32>,
    pub repeat_code_uses: HashMap<u8, u32>,
    pub horiz_transitions: HashMap<(u8, u8), u32>,
    pub vert_fills: HashMap<(u8, u8), u32>,
}

impl DecompressionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, other: &DecompressionStats) {
        for (k, v) in &other.dict_code_uses {
            *self.dict_code_uses.entry(*k).or_insert(0) += v;
        }
        for (k, v) in &other.repeat_code_uses {
            *self.repeat_code_uses.entry(*k).or_insert(0) += v;
        }
        for (k, v) in &other.horiz_transitions {
            *self.horiz_transitions.entry(*k).or_insert(0) += v;
        }
        for (k, v) in &other.vert_fills {
            *self.vert_fills.entry(*k).or_insert(0) += v;
        }
    }

    fn record_dict(&mut self, code: u8) {
        *self.dict_code_uses.entry(code).or_insert(0) += 1;
    }
    fn record_repeat(&mut self, count: u8) {
        *self.repeat_code_uses.entry(count).or_insert(0) += 1;
    }
    fn record_horiz(&mut self, prev: u8, next: u8) {
        *self.horiz_transitions.entry((prev, next)).or_insert(0) += 1;
    }
    fn record_vert(&mut self, above: u8, next: u8) {
        *self.vert_fills.entry((above, next)).or_insert(0) += 1;
    }
}

fn expand_pass1(
    compressed: &[u8],
    tables: &CompressionTables,
    terminate_at: Option<usize>,
    mut stats: Option<&mut DecompressionStats>,
) -> Result<Vec<u8>, Error> {
    let mut out: Vec<u8> = Vec::new();
    let mut idx = 0;
    while idx < compressed.len() {
        if let Some(limit) = terminate_at {
            if out.len() >= limit {
                break;
            }
        }
        let byte = compressed[idx];
        idx += 1;
        if byte >= 0xE0 {
            let dict_idx = (byte - 0xE0) as usize;
            let entry = tables.dictionary[dict_idx];
            out.push(entry.first_byte);
            if let Some(s) = stats.as_deref_mut() {
                s.record_dict(byte);
            }
            for _ in 0..entry.repeat_count {
                let prev = *out.last().unwrap();
                let next = tables.horizontal_of(prev);
                out.push(next);
                if let Some(s) = stats.as_deref_mut() {
                    s.record_horiz(prev, next);
                }
            }
        } else if byte == 0x00 {
            out.push(0);
        } else if byte < 0x20 {
            let repeat_count = byte;
            for _ in 0..repeat_count {
                let prev = out.last().copied().unwrap_or(0);
                let next = tables.horizontal_of(prev);
                out.push(next);
                if let Some(s) = stats.as_deref_mut() {
                    s.record_repeat(repeat_count);
                    s.record_horiz(prev, next);
                }
            }
        } else {
            out.push(byte);
        }
    }
    if let Some(limit) = terminate_at {
        // The stream ran out before producing the required tile count: truncated
        // or otherwise corrupt input.
        if out.len() < limit {
            return Err(Error::CorruptStream);
        }
        out.truncate(limit);
    }
    Ok(out)
}

fn vertical_fill(
    mut rows: Vec<Vec<u8>>,
    tables: &CompressionTables,
    mut stats: Option<&mut DecompressionStats>,
) -> Vec<Vec<u8>> {
    for r in 1..rows.len() {
        let row_width = rows[r].len();
        for c in 0..row_width {
            if rows[r][c] == 0x00 {
                let above = rows[r - 1][c];
                let next = tables.vertical_of(above);
                rows[r][c] = next;
                if let Some(s) = stats.as_deref_mut() {
                    s.record_vert(above, next);
                }
            }
        }
    }
    rows
}

/// Decompress a terrain stream into rows of `row_width` bytes each, padding the final
/// row with zeros. Terminates at end of input.
pub fn decompress_terrain(
    compressed: &[u8],
    tables: &CompressionTables,
    row_width: usize,
    mut stats: Option<&mut DecompressionStats>,
) -> Result<Vec<Vec<u8>>, Error> {
    let out = expand_pass1(compressed, tables, None, stats.as_deref_mut())?;
    let mut rows: Vec<Vec<u8>> = out
        .chunks(row_width)
        .map(|chunk| {
            let mut row = chunk.to_vec();
            row.resize(row_width, 0);
            row
        })
        .collect();
    if rows.is_empty() {
        rows.push(vec![0u8; row_width]);
    }
    Ok(vertical_fill(rows, tables, stats))
}

/// Decompress a greens stream into a fixed 24x24 grid. Terminates once 576 tiles are
/// produced; returns `CorruptStream` if the input runs out first.
pub fn decompress_greens(
    compressed: &[u8],
    tables: &CompressionTables,
    mut stats: Option<&mut DecompressionStats>,
) -> Result<Vec<Vec<u8>>, Error> {
    const ROW_WIDTH: usize = 24;
    const TOTAL: usize = ROW_WIDTH * ROW_WIDTH;
    let out = expand_pass1(compressed, tables, Some(TOTAL), stats.as_deref_mut())?;
    let rows: Vec<Vec<u8>> = out.chunks(ROW_WIDTH).map(|c| c.to_vec()).collect();
    Ok(vertical_fill(rows, tables, stats))
}

#[cfg(test)]
mod decompress_test;
