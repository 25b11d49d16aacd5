use super::*;
use crate::codec::tables::CompressionTables;

fn scenario_tables() -> CompressionTables {
    let mut horizontal = vec![0u8; 256];
    horizontal[0x40] = 0x41;
    horizontal[0x41] = 0x41;
    let mut vertical = vec![0u8; 256];
    vertical[0x40] = 0x50;
    vertical[0x41] = 0x51;
    CompressionTables::from_raw(horizontal, vertical, &[0u8; 64]).unwrap()
}

#[test]
fn terrain_decompress_then_vertical_fill() {
    let tables = scenario_tables();
    let stream = [0x40u8, 0x02, 0x00, 0x00];
    let rows = decompress_terrain(&stream, &tables, 2, None).unwrap();
    assert_eq!(rows, vec![vec![0x40, 0x41], vec![0x41, 0x51], vec![0x51, 0x00]]);
}

#[test]
fn dictionary_code_expands_through_horizontal_chain() {
    let mut dict_raw = vec![0u8; 64];
    dict_raw[0] = 0xA0;
    dict_raw[1] = 3;
    let mut horizontal = vec![0u8; 256];
    horizontal[0xA0] = 0xA1;
    horizontal[0xA1] = 0xA2;
    horizontal[0xA2] = 0xA3;
    let tables = CompressionTables::from_raw(horizontal, vec![0u8; 256], &dict_raw).unwrap();
    let rows = decompress_terrain(&[0xE0], &tables, 4, None).unwrap();
    assert_eq!(rows, vec![vec![0xA0, 0xA1, 0xA2, 0xA3]]);
}

#[test]
fn greens_decompression_stops_at_576_tiles() {
    let tables = scenario_tables();
    let stream = vec![0x1Fu8; 40]; // would overrun 576 tiles if untruncated
    let rows = decompress_greens(&stream, &tables, None).unwrap();
    let total: usize = rows.iter().map(|r| r.len()).sum();
    assert_eq!(total, 576);
}

#[test]
fn greens_decompression_reports_corrupt_stream_when_input_runs_out() {
    let tables = scenario_tables();
    let rows = decompress_greens(&[0x00], &tables, None);
    assert!(matches!(rows, Err(Error::CorruptStream)));
}

#[test]
fn stats_record_dictionary_and_horizontal_usage() {
    let mut dict_raw = vec![0u8; 64];
    dict_raw[0] = 0xA0;
    dict_raw[1] = 2;
    let mut horizontal = vec![0u8; 256];
    horizontal[0xA0] = 0xA1;
    horizontal[0xA1] = 0xA2;
    let tables = CompressionTables::from_raw(horizontal, vec![0u8; 256], &dict_raw).unwrap();
    let mut stats = DecompressionStats::new();
    decompress_terrain(&[0xE0], &tables, 3, Some(&mut stats)).unwrap();
    assert_eq!(*stats.dict_code_uses.get(&0xE0).unwrap(), 1);
    assert_eq!(*stats.horiz_transitions.get(&(0xA0, 0xA1)).unwrap(), 1);
}
