//! Lookup tables shared by the terrain and greens codecs.

use crate::addr;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("expected {expected} bytes for {name}, found {found}")]
    ShortTable { name: &'static str, expected: usize, found: usize },
    #[error(transparent)]
    Addr(#[from] addr::Error),
}

/// One entry of the 32-slot dictionary: codes `0xE0..=0xFF` reference entries `0..32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DictEntry {
    pub first_byte: u8,
    pub repeat_count: u8,
}

/// The three co-resident tables that drive one flavor of the codec (terrain or greens).
#[derive(Clone, Debug)]
pub struct CompressionTables {
    /// Successor under horizontal flow, indexed by byte value.
    pub horizontal: Vec<u8>,
    /// Vertical-continuation successor, indexed by byte value.
    pub vertical: Vec<u8>,
    /// The 32-entry dictionary.
    pub dictionary: [DictEntry; 32],
}

impl CompressionTables {
    /// Build tables from raw horizontal/vertical bytes and a raw 64-byte dictionary blob
    /// (pairs of `first_byte, repeat_count`).
    pub fn from_raw(horizontal: Vec<u8>, vertical: Vec<u8>, dict_raw: &[u8]) -> Result<Self, Error> {
        if dict_raw.len() != 64 {
            return Err(Error::ShortTable { name: "dictionary", expected: 64, found: dict_raw.len() });
        }
        let mut dictionary = [DictEntry { first_byte: 0, repeat_count: 0 }; 32];
        for i in 0..32 {
            dictionary[i] = DictEntry {
                first_byte: dict_raw[2 * i],
                repeat_count: dict_raw[2 * i + 1],
            };
        }
        Ok(Self { horizontal, vertical, dictionary })
    }

    /// Horizontal successor of `byte`, or 0 if `byte` falls outside the loaded table.
    pub fn horizontal_of(&self, byte: u8) -> u8 {
        self.horizontal.get(byte as usize).copied().unwrap_or(0)
    }

    /// Vertical successor of `byte`, or 0 if `byte` falls outside the loaded table.
    pub fn vertical_of(&self, byte: u8) -> u8 {
        self.vertical.get(byte as usize).copied().unwrap_or(0)
    }

    /// Expansion bytes produced by dictionary code `0xE0 + idx`.
    pub fn expand(&self, idx: usize) -> Vec<u8> {
        let entry = self.dictionary[idx];
        let mut out = vec![entry.first_byte];
        for _ in 0..entry.repeat_count {
            let prev = *out.last().unwrap();
            out.push(self.horizontal_of(prev));
        }
        out
    }

    /// Reverse-dictionary map from an expansion's bytes to the dictionary codes that
    /// produce it, sorted so the longest expansions are tried first by the compressor.
    pub fn reverse_dictionary(&self) -> Vec<(Vec<u8>, u8)> {
        let mut entries: Vec<(Vec<u8>, u8)> = (0..32)
            .map(|i| (self.expand(i), 0xE0u8 + i as u8))
            .collect();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        entries
    }

    /// Load the terrain tables (224/224/64 bytes) from the fixed bank of a PRG image.
    pub fn load_terrain(prg: &[u8]) -> Result<Self, Error> {
        let h_off = addr::cpu_to_prg_fixed(0xE1AC)?;
        let v_off = addr::cpu_to_prg_fixed(0xE28C)?;
        let d_off = addr::cpu_to_prg_fixed(0xE36C)?;
        Self::from_raw(
            prg[h_off..h_off + 224].to_vec(),
            prg[v_off..v_off + 224].to_vec(),
            &prg[d_off..d_off + 64],
        )
    }

    /// Load the greens tables (192/192/64 bytes) from the start of `bank` of a PRG image.
    pub fn load_greens(prg: &[u8], bank: usize) -> Result<Self, Error> {
        let h_off = addr::cpu_to_prg_switched(0x8000, bank)?;
        let v_off = addr::cpu_to_prg_switched(0x80C0, bank)?;
        let d_off = addr::cpu_to_prg_switched(0x8180, bank)?;
        Self::from_raw(
            prg[h_off..h_off + 192].to_vec(),
            prg[v_off..v_off + 192].to_vec(),
            &prg[d_off..d_off + 64],
        )
    }
}

#[cfg(test)]
mod tables_test;
