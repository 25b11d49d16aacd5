//! `extract_tables ROM OUT.json` — dump the terrain and greens compression tables as JSON.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::codec::tables::CompressionTables;
use crate::packer::tables::GREENS_BANK;
use crate::DYNERR;

#[derive(Serialize)]
struct DictEntryJson {
    first_byte: u8,
    repeat_count: u8,
}

#[derive(Serialize)]
struct ExpansionJson {
    first_byte: u8,
    repeat_count: u8,
    sequence: Vec<u8>,
    length: usize,
}

#[derive(Serialize)]
struct TablesJson {
    horizontal: Vec<u8>,
    vertical: Vec<u8>,
    dictionary: Vec<DictEntryJson>,
    expansions: HashMap<String, ExpansionJson>,
    reverse_dictionary: HashMap<String, Vec<u8>>,
}

impl From<&CompressionTables> for TablesJson {
    fn from(t: &CompressionTables) -> Self {
        let mut expansions = HashMap::new();
        let mut reverse_dictionary: HashMap<String, Vec<u8>> = HashMap::new();
        for (i, entry) in t.dictionary.iter().enumerate() {
            let code = 0xE0u8 + i as u8;
            let sequence = t.expand(i);
            expansions.insert(
                format!("{code:#04X}"),
                ExpansionJson { first_byte: entry.first_byte, repeat_count: entry.repeat_count, length: sequence.len(), sequence: sequence.clone() },
            );
            let key = sequence.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ");
            reverse_dictionary.entry(key).or_default().push(code);
        }
        for codes in reverse_dictionary.values_mut() {
            codes.sort_unstable();
        }
        TablesJson {
            horizontal: t.horizontal.clone(),
            vertical: t.vertical.clone(),
            dictionary: t.dictionary.iter().map(|d| DictEntryJson { first_byte: d.first_byte, repeat_count: d.repeat_count }).collect(),
            expansions,
            reverse_dictionary,
        }
    }
}

#[derive(Serialize)]
struct ExtractedTables {
    terrain: TablesJson,
    greens: TablesJson,
}

pub fn run(rom_path: &Path, out_path: &Path) -> Result<(), DYNERR> {
    let rom = super::load_rom(rom_path)?;
    let terrain = CompressionTables::load_terrain(&rom.prg)?;
    let greens = CompressionTables::load_greens(&rom.prg, GREENS_BANK)?;

    let out = ExtractedTables { terrain: (&terrain).into(), greens: (&greens).into() };
    std::fs::write(out_path, serde_json::to_string_pretty(&out)?)?;
    log::info!("wrote compression tables to {}", out_path.display());
    Ok(())
}
