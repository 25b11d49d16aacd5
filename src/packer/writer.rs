//! Annotated PRG writes: a thin builder over a mutable PRG buffer that logs every write
//! at debug level and, if requested, accumulates a trace a caller can print.

use crate::addr;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Addr(#[from] addr::Error),
}

#[derive(Clone, Debug)]
pub struct WriteLogEntry {
    pub description: String,
    pub offset: usize,
    pub len: usize,
}

pub struct Writer<'a> {
    prg: &'a mut Vec<u8>,
    pending_note: Option<String>,
    log: Vec<WriteLogEntry>,
    verbose: bool,
}

impl<'a> Writer<'a> {
    pub fn new(prg: &'a mut Vec<u8>, verbose: bool) -> Self {
        Self { prg, pending_note: None, log: Vec::new(), verbose }
    }

    /// Stash a description for the next write call.
    pub fn annotate(&mut self, msg: impl Into<String>) -> &mut Self {
        self.pending_note = Some(msg.into());
        self
    }

    fn record(&mut self, offset: usize, len: usize) {
        let description = self.pending_note.take().unwrap_or_default();
        log::debug!("write {description} at prg+{offset:#x} ({len} bytes)");
        if self.verbose {
            self.log.push(WriteLogEntry { description, offset, len });
        }
    }

    pub fn write_prg(&mut self, offset: usize, bytes: &[u8]) {
        self.prg[offset..offset + bytes.len()].copy_from_slice(bytes);
        self.record(offset, bytes.len());
    }

    pub fn write_fixed_byte(&mut self, cpu_addr: u16, value: u8) -> Result<(), Error> {
        let off = addr::cpu_to_prg_fixed(cpu_addr)?;
        self.write_prg(off, &[value]);
        Ok(())
    }

    pub fn write_fixed_word(&mut self, cpu_addr: u16, value: u16) -> Result<(), Error> {
        let off = addr::cpu_to_prg_fixed(cpu_addr)?;
        self.write_prg(off, &value.to_le_bytes());
        Ok(())
    }

    pub fn write_switched(&mut self, cpu_addr: u16, bank: usize, bytes: &[u8]) -> Result<(), Error> {
        let off = addr::cpu_to_prg_switched(cpu_addr, bank)?;
        self.write_prg(off, bytes);
        Ok(())
    }

    pub fn write_log(&self) -> &[WriteLogEntry] {
        &self.log
    }
}

#[cfg(test)]
mod writer_test {
    use super::*;

    #[test]
    fn annotation_is_consumed_by_next_write() {
        let mut prg = vec![0u8; 0x4000];
        let mut w = Writer::new(&mut prg, true);
        w.annotate("hole 0 terrain").write_fixed_byte(0xC000, 0xAB).unwrap();
        assert_eq!(w.write_log()[0].description, "hole 0 terrain");
        w.write_fixed_byte(0xC001, 0xCD).unwrap();
        assert_eq!(w.write_log()[1].description, "");
    }

    #[test]
    fn writes_land_at_translated_offsets() {
        let mut prg = vec![0u8; addr::BANK_SIZE * 16];
        let mut w = Writer::new(&mut prg, false);
        w.write_fixed_word(0xC000, 0x1234).unwrap();
        let off = addr::cpu_to_prg_fixed(0xC000).unwrap();
        assert_eq!(&prg[off..off + 2], &[0x34, 0x12]);
    }
}
