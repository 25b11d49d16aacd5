use super::*;
use super::json::HoleJson;

fn sample_hole() -> HoleData {
    let width = 22;
    let height = 30;
    let terrain = (0..height).map(|_| Row(vec![Cell::Byte(0x20); width])).collect();
    let attributes = vec![vec![1u8; 11]; 15];
    let greens = (0..24).map(|_| Row(vec![Cell::Byte(0x00); 24])).collect();
    HoleData {
        hole: 1,
        terrain,
        terrain_height: height,
        attributes,
        greens,
        metadata: Metadata {
            par: 4,
            distance: 380,
            handicap: 7,
            scroll_limit: rows::scroll_limit(height),
            green: Point { x: 10, y: 20 },
            tee: Point { x: 1, y: 2 },
            flag_positions: [FlagPosition { x_offset: 0, y_offset: 0 }; 4],
        },
    }
}

#[test]
fn hole_round_trips_through_json_dto() {
    let hole = sample_hole();
    let dto = HoleJson::from(&hole);
    let s = serde_json::to_string(&dto).unwrap();
    let back: HoleJson = serde_json::from_str(&s).unwrap();
    let restored: HoleData = back.into();
    assert_eq!(restored, hole);
}

#[test]
fn placeholder_fails_validation() {
    let mut hole = sample_hole();
    hole.terrain[0].0[0] = Cell::Placeholder;
    assert!(hole.validate_no_placeholders().is_err());
}

#[test]
fn attribute_pack_unpack_round_trip() {
    let attrs = vec![
        vec![1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3],
        vec![3, 2, 1, 0, 3, 2, 1, 0, 3, 2, 1],
    ];
    let packed = attributes::pack_attributes(&attrs).unwrap();
    assert_eq!(packed.len(), 72);
    assert_eq!(packed[0] & 0x0F, 0x04); // HUD=0 (bits0-1), next col=1 (bits2-3)
    let unpacked = attributes::unpack_attributes(&packed, 2);
    assert_eq!(unpacked, attrs);
}

#[test]
fn add_then_remove_row_pair_updates_scroll_limit() {
    let mut hole = sample_hole();
    hole.add_row_pair();
    assert_eq!(hole.terrain_height, 32);
    assert_eq!(hole.metadata.scroll_limit, 2);
    hole.remove_row_pair();
    assert_eq!(hole.terrain_height, 30);
    assert_eq!(hole.metadata.scroll_limit, 1);
}
