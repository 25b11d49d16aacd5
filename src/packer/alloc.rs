//! Greedy first-fit allocation of compressed hole payloads across the three terrain banks.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("hole {hole} needs {required} bytes but only {total_available} remain across {total_required} bytes requested")]
    BankOverflow { hole: usize, required: usize, total_required: usize, total_available: usize },
}

/// Usable CPU-address window capacity of each terrain bank, in bytes.
pub const BANK_CAPACITY: [usize; 3] = [8766, 8678, 8661];
/// CPU start address of each bank's usable terrain window.
pub const BANK_START: [u16; 3] = [0x8000, 0x8000, 0x837F];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankAllocation {
    pub hole_index: usize,
    pub bank: usize,
    pub terrain_start: u16,
    pub terrain_end: u16,
}

/// Greedy first-fit: for each hole in order, place it in the lowest-indexed bank with
/// enough remaining space.
pub fn allocate(payload_sizes: &[usize]) -> Result<Vec<BankAllocation>, Error> {
    let mut cursor = BANK_START;
    let mut used = [0usize; 3];
    let mut out = Vec::with_capacity(payload_sizes.len());

    for (hole_index, &size) in payload_sizes.iter().enumerate() {
        let mut placed = None;
        for bank in 0..3 {
            if used[bank] + size <= BANK_CAPACITY[bank] {
                placed = Some(bank);
                break;
            }
        }
        let bank = match placed {
            Some(b) => b,
            None => {
                let total_required: usize = payload_sizes.iter().sum();
                let total_available: usize = BANK_CAPACITY.iter().sum();
                return Err(Error::BankOverflow { hole: hole_index, required: size, total_required, total_available });
            }
        };
        let start = cursor[bank];
        let end = start + size as u16;
        out.push(BankAllocation { hole_index, bank, terrain_start: start, terrain_end: end });
        cursor[bank] = end;
        used[bank] += size;
    }
    Ok(out)
}

#[cfg(test)]
mod alloc_test {
    use super::*;

    #[test]
    fn packs_in_index_order_first_fit() {
        let sizes = vec![100usize, 200, 300];
        let allocs = allocate(&sizes).unwrap();
        assert_eq!(allocs[0].bank, 0);
        assert_eq!(allocs[0].terrain_start, 0x8000);
        assert_eq!(allocs[0].terrain_end, 0x8064);
        assert_eq!(allocs[1].terrain_start, 0x8064);
    }

    #[test]
    fn overflow_reports_totals() {
        let sizes: Vec<usize> = std::iter::repeat(1072usize).take(30).collect();
        let err = allocate(&sizes).unwrap_err();
        match err {
            Error::BankOverflow { total_required, total_available, .. } => {
                assert_eq!(total_required, 32160);
                assert_eq!(total_available, 26105);
            }
        }
    }

    #[test]
    fn fills_bank_to_capacity_then_spills_to_next() {
        let sizes = vec![BANK_CAPACITY[0], 1];
        let allocs = allocate(&sizes).unwrap();
        assert_eq!(allocs[0].bank, 0);
        assert_eq!(allocs[1].bank, 1);
    }
}
