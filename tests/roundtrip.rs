use linksleeve::holedata::{Cell, FlagPosition, HoleData, Metadata, Point, Row};
use linksleeve::packer::{self, patches, tables};
use linksleeve::rom::{self, Rom};
use linksleeve::{addr, commands};

fn blank_rom() -> Rom {
    let mut data = vec![0u8; rom::INES_HEADER_SIZE + rom::PRG_BANKS * addr::BANK_SIZE];
    data[0..4].copy_from_slice(b"NES\x1a");
    data[4] = rom::PRG_BANKS as u8;
    for patch in [patches::multi_bank_lookup_patch(), patches::course3_mirror_patch(), patches::course2_mirror_patch()] {
        let start = rom::INES_HEADER_SIZE + patch.offset;
        data[start..start + patch.original.len()].copy_from_slice(&patch.original);
    }
    Rom::from_bytes(&data).unwrap()
}

fn flat_hole(n: u32, fill: u8) -> HoleData {
    let terrain = (0..30).map(|_| Row(vec![Cell::Byte(fill); 22])).collect();
    let attributes = vec![vec![(n % 4) as u8; 11]; 15];
    let greens = (0..24).map(|_| Row(vec![Cell::Byte(fill); 24])).collect();
    HoleData {
        hole: n,
        terrain,
        terrain_height: 30,
        attributes,
        greens,
        metadata: Metadata {
            par: 3 + (n % 3) as u8,
            distance: 100 + n,
            handicap: 1 + (n % 18) as u8,
            scroll_limit: 1,
            green: Point { x: 5, y: 6 },
            tee: Point { x: 1, y: 2 },
            flag_positions: [FlagPosition { x_offset: n as i32 % 8, y_offset: 0 }; 4],
        },
    }
}

#[test]
fn packed_two_courses_round_trip_through_dump() {
    let mut rom = blank_rom();
    let japan: Vec<HoleData> = (0..18).map(|i| flat_hole(i, 0x20)).collect();
    let us: Vec<HoleData> = (0..18).map(|i| flat_hole(100 + i, 0x21)).collect();
    let courses = vec![japan.clone(), us.clone()];

    packer::pack_courses(&mut rom, &courses, false).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let rom_path = dir.path().join("packed.nes");
    std::fs::write(&rom_path, rom.to_bytes()).unwrap();

    let out_dir = dir.path().join("dumped");
    commands::dump::run(&rom_path, &out_dir).unwrap();

    for (name, original) in [("japan", &japan), ("us", &us)] {
        let (_, holes) = commands::load_course_dir(&out_dir.join(name)).unwrap();
        assert_eq!(holes.len(), original.len());
        for (got, want) in holes.iter().zip(original.iter()) {
            assert_eq!(got.terrain_bytes().unwrap(), want.terrain_bytes().unwrap());
            assert_eq!(got.attributes, want.attributes);
            assert_eq!(got.greens_bytes().unwrap(), want.greens_bytes().unwrap());
            assert_eq!(got.metadata.par, want.metadata.par);
            assert_eq!(got.metadata.handicap, want.metadata.handicap);
            assert_eq!(got.metadata.distance, want.metadata.distance);
            assert_eq!(got.metadata.green, want.metadata.green);
            assert_eq!(got.metadata.tee, want.metadata.tee);
            assert_eq!(got.metadata.flag_positions, want.metadata.flag_positions);
        }
    }
}
