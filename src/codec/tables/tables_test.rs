use super::*;

fn small_tables() -> CompressionTables {
    let mut dict_raw = vec![0u8; 64];
    dict_raw[0] = 0xA0;
    dict_raw[1] = 3;
    let mut horizontal = vec![0u8; 256];
    horizontal[0xA0] = 0xA1;
    horizontal[0xA1] = 0xA2;
    horizontal[0xA2] = 0xA3;
    CompressionTables::from_raw(horizontal, vec![0u8; 256], &dict_raw).unwrap()
}

#[test]
fn dictionary_expands_via_horizontal_chain() {
    let tables = small_tables();
    assert_eq!(tables.expand(0), vec![0xA0, 0xA1, 0xA2, 0xA3]);
}

#[test]
fn reverse_dictionary_sorts_longest_first() {
    let tables = small_tables();
    let rev = tables.reverse_dictionary();
    assert_eq!(rev[0].0, vec![0xA0, 0xA1, 0xA2, 0xA3]);
    assert_eq!(rev[0].1, 0xE0);
}

#[test]
fn out_of_range_lookups_yield_zero() {
    let tables = small_tables();
    assert_eq!(tables.horizontal_of(0xFF), 0);
    assert_eq!(tables.vertical_of(0xFF), 0);
}

#[test]
fn short_dictionary_is_rejected() {
    assert!(CompressionTables::from_raw(vec![], vec![], &[0u8; 10]).is_err());
}
