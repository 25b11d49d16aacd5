//! In-place ROM code patches the packer depends on.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("patch '{name}' at offset {offset:#x}: neither original nor patched bytes found")]
    Unrecognized { name: &'static str, offset: usize },
}

/// A fixed-byte-replacement code patch, idempotent to apply.
#[derive(Clone, Debug)]
pub struct Patch {
    pub name: &'static str,
    pub offset: usize,
    pub original: Vec<u8>,
    pub patched: Vec<u8>,
}

impl Patch {
    fn slice<'a>(&self, rom: &'a [u8]) -> &'a [u8] {
        &rom[self.offset..self.offset + self.original.len()]
    }

    pub fn is_applied(&self, rom: &[u8]) -> bool {
        self.slice(rom) == self.patched.as_slice()
    }

    pub fn can_apply(&self, rom: &[u8]) -> bool {
        self.slice(rom) == self.original.as_slice()
    }

    /// Idempotent: a no-op if already applied.
    pub fn apply(&self, rom: &mut [u8]) -> Result<(), Error> {
        if self.is_applied(rom) {
            log::debug!("patch '{}' already applied", self.name);
            return Ok(());
        }
        if !self.can_apply(rom) {
            return Err(Error::Unrecognized { name: self.name, offset: self.offset });
        }
        rom[self.offset..self.offset + self.patched.len()].copy_from_slice(&self.patched);
        log::debug!("applied patch '{}' at {:#x}", self.name, self.offset);
        Ok(())
    }
}

/// Replaces the course-bank lookup routine so that terrain bank for hole `h` is fetched
/// from a per-hole table at `$A700` in bank 3, indexed by `2h`.
pub fn multi_bank_lookup_patch() -> Patch {
    Patch {
        name: "multi_bank_lookup",
        offset: 0x3DB68,
        original: vec![0xAE, 0x02, 0x01, 0xBD, 0xBE, 0xDB, 0x20, 0x52, 0xD3],
        patched: vec![0xA6, 0x31, 0xBD, 0x00, 0xA7, 0x20, 0x52, 0xD3, 0xEA],
    }
}

/// Aliases course 3 onto course 1's holes.
pub fn course3_mirror_patch() -> Patch {
    Patch {
        name: "course3_mirror",
        offset: 0x3DBBD,
        original: vec![0x24],
        patched: vec![0x00],
    }
}

/// Aliases course 2 onto course 1's holes; only needed when a single course is written.
pub fn course2_mirror_patch() -> Patch {
    Patch {
        name: "course2_mirror",
        offset: 0x3DBBC,
        original: vec![0x12],
        patched: vec![0x00],
    }
}

#[cfg(test)]
mod patches_test {
    use super::*;

    fn rom_with(offset: usize, bytes: &[u8]) -> Vec<u8> {
        let mut rom = vec![0u8; 0x40000];
        rom[offset..offset + bytes.len()].copy_from_slice(bytes);
        rom
    }

    #[test]
    fn apply_is_idempotent() {
        let patch = course3_mirror_patch();
        let mut rom = rom_with(patch.offset, &patch.original);
        patch.apply(&mut rom).unwrap();
        assert!(patch.is_applied(&rom));
        patch.apply(&mut rom).unwrap();
        assert!(patch.is_applied(&rom));
    }

    #[test]
    fn unrecognized_bytes_are_rejected() {
        let patch = course2_mirror_patch();
        let mut rom = rom_with(patch.offset, &[0xFF]);
        assert!(patch.apply(&mut rom).is_err());
    }

    #[test]
    fn multi_bank_patch_rewrites_expected_bytes() {
        let patch = multi_bank_lookup_patch();
        let mut rom = rom_with(patch.offset, &patch.original);
        patch.apply(&mut rom).unwrap();
        assert_eq!(&rom[patch.offset..patch.offset + 9], patch.patched.as_slice());
    }
}
