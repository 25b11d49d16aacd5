use super::*;
use crate::holedata::{Cell, Row, Metadata, Point, FlagPosition};

fn blank_rom() -> Rom {
    let mut data = vec![0u8; crate::rom::INES_HEADER_SIZE + crate::rom::PRG_BANKS * addr::BANK_SIZE];
    data[0..4].copy_from_slice(b"NES\x1a");
    data[4] = crate::rom::PRG_BANKS as u8;
    for patch in [patches::multi_bank_lookup_patch(), patches::course3_mirror_patch(), patches::course2_mirror_patch()] {
        let start = crate::rom::INES_HEADER_SIZE + patch.offset;
        data[start..start + patch.original.len()].copy_from_slice(&patch.original);
    }
    Rom::from_bytes(&data).unwrap()
}

fn flat_hole(n: u32) -> HoleData {
    let terrain = (0..30).map(|_| Row(vec![Cell::Byte(0x20); 22])).collect();
    let attributes = vec![vec![1u8; 11]; 15];
    let greens = (0..24).map(|_| Row(vec![Cell::Byte(0x20); 24])).collect();
    HoleData {
        hole: n,
        terrain,
        terrain_height: 30,
        attributes,
        greens,
        metadata: Metadata {
            par: 4,
            distance: 380,
            handicap: (n % 18 + 1) as u8,
            scroll_limit: crate::holedata::rows::scroll_limit(30),
            green: Point { x: 10, y: 20 },
            tee: Point { x: 1, y: 2 },
            flag_positions: [FlagPosition { x_offset: 0, y_offset: 0 }; 4],
        },
    }
}

fn one_course() -> Vec<Vec<HoleData>> {
    vec![(0..18).map(flat_hole).collect()]
}

#[test]
fn pack_single_course_applies_patches_and_fits_capacity() {
    let mut rom = blank_rom();
    let stats = pack_courses(&mut rom, &one_course(), false).unwrap();

    assert_eq!(stats.applied_patches.len(), 3);
    for bank in 0..3 {
        assert!(stats.bank_usage[bank] <= alloc::BANK_CAPACITY[bank]);
    }

    let patch = patches::multi_bank_lookup_patch();
    assert!(patch.is_applied(&rom.prg));
    let c3 = patches::course3_mirror_patch();
    assert!(c3.is_applied(&rom.prg));
    let c2 = patches::course2_mirror_patch();
    assert!(c2.is_applied(&rom.prg));
}

#[test]
fn validate_does_not_mutate_rom() {
    let rom = blank_rom();
    let before = rom.prg.clone();
    let stats = validate(&rom, &one_course()).unwrap();
    assert_eq!(rom.prg, before);
    assert_eq!(stats.per_hole_compressed_terrain.len(), 18);
}

#[test]
fn rejects_wrong_course_shape() {
    let rom = blank_rom();
    let short_course = vec![(0..17).map(flat_hole).collect()];
    assert!(matches!(validate(&rom, &short_course), Err(Error::InvalidCourseShape(1))));
}

#[test]
fn two_courses_skip_course2_mirror_patch() {
    let mut rom = blank_rom();
    let courses = vec![(0..18).map(flat_hole).collect(), (18..36).map(flat_hole).collect()];
    let stats = pack_courses(&mut rom, &courses, false).unwrap();
    assert_eq!(stats.applied_patches.len(), 2);
    assert!(!stats.applied_patches.contains(&"course2_mirror"));
}
