//! Packing/unpacking of the 2x2-supertile palette attribute grid into NES attribute bytes.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("attribute rows cannot be empty")]
    Empty,
    #[error("row {0} has {1} columns, expected 11")]
    WrongWidth(usize, usize),
    #[error("invalid palette value {value} at row {row}, col {col}, must be 0-3")]
    InvalidPalette { row: usize, col: usize, value: u8 },
}

/// Pack 11-wide attribute rows into 72 bytes, prepending a zeroed HUD column.
/// Bit layout of each byte: `[BR BR BL BL TR TR TL TL]`.
pub fn pack_attributes(rows: &[Vec<u8>]) -> Result<[u8; 72], Error> {
    if rows.is_empty() {
        return Err(Error::Empty);
    }
    for (r, row) in rows.iter().enumerate() {
        if row.len() != 11 {
            return Err(Error::WrongWidth(r, row.len()));
        }
        for (c, &v) in row.iter().enumerate() {
            if v > 3 {
                return Err(Error::InvalidPalette { row: r, col: c, value: v });
            }
        }
    }

    let mut out = Vec::with_capacity(72);
    let megatile_rows = (rows.len() + 1) / 2;
    for mr in 0..megatile_rows {
        let top_idx = mr * 2;
        let bottom_idx = (top_idx + 1).min(rows.len() - 1);
        let mut top_full = vec![0u8];
        top_full.extend_from_slice(&rows[top_idx]);
        let mut bottom_full = vec![0u8];
        bottom_full.extend_from_slice(&rows[bottom_idx]);

        for megatile_col in 0..6 {
            let col = megatile_col * 2;
            let tl = top_full[col];
            let tr = top_full[col + 1];
            let bl = bottom_full[col];
            let br = bottom_full[col + 1];
            out.push(tl | (tr << 2) | (bl << 4) | (br << 6));
        }
    }
    out.resize(72, 0);
    Ok(out.try_into().unwrap())
}

/// Unpack 72 attribute bytes into `num_rows` rows of 11 palette indices, dropping the
/// leading HUD column.
pub fn unpack_attributes(bytes: &[u8], num_rows: usize) -> Vec<Vec<u8>> {
    let mut rows = Vec::new();
    let mut idx = 0usize;
    for _ in 0..((num_rows + 1) / 2) {
        let mut top_row = Vec::with_capacity(12);
        let mut bottom_row = Vec::with_capacity(12);
        for _ in 0..6 {
            if idx >= bytes.len() {
                break;
            }
            let attr = bytes[idx];
            idx += 1;
            let tl = attr & 0x03;
            let tr = (attr >> 2) & 0x03;
            let bl = (attr >> 4) & 0x03;
            let br = (attr >> 6) & 0x03;
            top_row.push(tl);
            top_row.push(tr);
            bottom_row.push(bl);
            bottom_row.push(br);
        }
        if top_row.len() >= 12 {
            rows.push(top_row[1..12].to_vec());
            rows.push(bottom_row[1..12].to_vec());
        }
    }
    rows.truncate(num_rows);
    rows
}

#[cfg(test)]
mod attributes_test;
