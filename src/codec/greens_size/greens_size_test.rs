use super::*;
use crate::codec::compress::compress_greens;
use crate::codec::tables::CompressionTables;

fn tables() -> CompressionTables {
    let mut horizontal = vec![0u8; 256];
    horizontal[0x40] = 0x41;
    CompressionTables::from_raw(horizontal, vec![0u8; 256], &[0u8; 64]).unwrap()
}

#[test]
fn recovers_exact_blob_length_with_trailing_garbage() {
    let tables = tables();
    let grid: Vec<Vec<u8>> = (0..24).map(|_| vec![0x20u8; 24]).collect();
    let mut compressed = compress_greens(&grid, &tables).unwrap();
    let real_len = compressed.len();
    compressed.extend_from_slice(&[0x99, 0x99, 0x99]); // unrelated data from the next hole
    assert_eq!(recover_greens_length(&compressed, &tables), Some(real_len));
}

#[test]
fn insufficient_buffer_yields_none() {
    let tables = tables();
    assert_eq!(recover_greens_length(&[0x20], &tables), None);
}
