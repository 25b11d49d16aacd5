//! # ROM Address Translator
//!
//! Pure conversions between CPU addresses, absolute PRG offsets, and (bank, offset) pairs
//! for an iNES image laid out as 16 banks of 16 KB, with bank 15 fixed at `$C000-$FFFF` and
//! banks 0-14 switched into `$8000-$BFFF`.

/// Size in bytes of one PRG bank.
pub const BANK_SIZE: usize = 0x4000;
/// Number of switched banks (excludes the fixed bank).
pub const SWITCHED_BANKS: usize = 15;
/// Bank index that is always mapped at `$C000-$FFFF`.
pub const FIXED_BANK: usize = 15;
/// Absolute PRG offset where the fixed bank begins.
pub const FIXED_BANK_PRG: usize = FIXED_BANK * BANK_SIZE;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("CPU address {0:#06x} is out of range for the fixed bank")]
    FixedRange(u16),
    #[error("CPU address {0:#06x} is out of range for a switched bank")]
    SwitchedRange(u16),
    #[error("bank index {0} is out of range, must be 0-14")]
    BankRange(usize),
    #[error("PRG offset {0:#x} exceeds the 256 KB image")]
    PrgRange(usize),
}

/// Convert a CPU address in `$C000-$FFFF` to its absolute PRG offset in the fixed bank.
pub fn cpu_to_prg_fixed(addr: u16) -> Result<usize, Error> {
    if !(0xC000..=0xFFFF).contains(&addr) {
        return Err(Error::FixedRange(addr));
    }
    Ok(FIXED_BANK_PRG + (addr as usize - 0xC000))
}

/// Convert a CPU address in `$8000-$BFFF` plus a bank index to its absolute PRG offset.
pub fn cpu_to_prg_switched(addr: u16, bank: usize) -> Result<usize, Error> {
    if !(0x8000..=0xBFFF).contains(&addr) {
        return Err(Error::SwitchedRange(addr));
    }
    if bank >= SWITCHED_BANKS {
        return Err(Error::BankRange(bank));
    }
    Ok(bank * BANK_SIZE + (addr as usize - 0x8000))
}

/// Convert an absolute PRG offset back to `(bank, cpu_address)`.
/// Offsets in the fixed bank's range yield `(15, 0xC000..=0xFFFF)`.
pub fn prg_to_bank_and_cpu(offset: usize) -> Result<(usize, u16), Error> {
    if offset >= FIXED_BANK * BANK_SIZE + BANK_SIZE {
        return Err(Error::PrgRange(offset));
    }
    if offset >= FIXED_BANK_PRG {
        return Ok((FIXED_BANK, 0xC000 + (offset - FIXED_BANK_PRG) as u16));
    }
    let bank = offset / BANK_SIZE;
    let cpu = 0x8000 + (offset % BANK_SIZE) as u16;
    Ok((bank, cpu))
}

/// Convert an absolute PRG offset to the CPU address it would occupy in the switched
/// window, ignoring which bank it came from. Useful when the caller already knows the
/// bank from context.
pub fn prg_to_cpu_switched(offset: usize) -> u16 {
    0x8000 + (offset % BANK_SIZE) as u16
}

#[cfg(test)]
mod addr_test;
