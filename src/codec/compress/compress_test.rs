use super::*;
use crate::codec::tables::CompressionTables;

fn tables_with_chain() -> CompressionTables {
    let mut horizontal = vec![0u8; 256];
    horizontal[0x40] = 0x41;
    horizontal[0x41] = 0x42;
    horizontal[0x42] = 0x43;
    let mut vertical = vec![0u8; 256];
    vertical[0x40] = 0x40;
    vertical[0x41] = 0x41;
    vertical[0x42] = 0x42;
    vertical[0x43] = 0x43;
    CompressionTables::from_raw(horizontal, vertical, &[0u8; 64]).unwrap()
}

#[test]
fn terrain_round_trip_literal_run() {
    let tables = tables_with_chain();
    let grid = vec![vec![0x40, 0x41, 0x42, 0x43]];
    let out = round_trip_terrain(&grid, &tables, 4).unwrap();
    assert_eq!(out, grid);
}

#[test]
fn terrain_round_trip_with_vertical_repetition() {
    let tables = tables_with_chain();
    // row 1 repeats row 0 exactly, so reverse-vertical-fill should fold it to zeros
    // and re-expand identically.
    let grid = vec![vec![0x40, 0x41], vec![0x40, 0x41]];
    let out = round_trip_terrain(&grid, &tables, 2).unwrap();
    assert_eq!(out, grid);
}

#[test]
fn dictionary_round_trip() {
    let mut dict_raw = vec![0u8; 64];
    dict_raw[0] = 0xA0;
    dict_raw[1] = 3;
    let mut horizontal = vec![0u8; 256];
    horizontal[0xA0] = 0xA1;
    horizontal[0xA1] = 0xA2;
    horizontal[0xA2] = 0xA3;
    let tables = CompressionTables::from_raw(horizontal, vec![0u8; 256], &dict_raw).unwrap();
    let grid = vec![vec![0xA0, 0xA1, 0xA2, 0xA3]];
    let compressed = compress_terrain(&grid, &tables, 4).unwrap();
    assert_eq!(compressed, vec![0xE0]);
}

#[test]
fn greens_round_trip() {
    let tables = tables_with_chain();
    let grid: Vec<Vec<u8>> = (0..24).map(|_| vec![0x40u8; 24]).collect();
    let out = round_trip_greens(&grid, &tables).unwrap();
    assert_eq!(out, grid);
}

#[test]
fn unencodable_run_marker_byte_needs_dictionary_fallback() {
    let mut dict_raw = vec![0u8; 64];
    dict_raw[0] = 0x05; // dictionary code expands starting with the problem byte
    dict_raw[1] = 0;
    let tables = CompressionTables::from_raw(vec![0u8; 256], vec![0u8; 256], &dict_raw).unwrap();
    let grid = vec![vec![0x05]];
    let compressed = compress_terrain(&grid, &tables, 1).unwrap();
    assert_eq!(compressed, vec![0xE0]);
}

#[test]
fn byte_with_no_dictionary_route_is_rejected() {
    let tables = CompressionTables::from_raw(vec![0u8; 256], vec![0u8; 256], &[0u8; 64]).unwrap();
    let grid = vec![vec![0x05]];
    assert!(matches!(compress_terrain(&grid, &tables, 1), Err(Error::UnencodableValue(0x05))));
}
