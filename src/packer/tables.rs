//! Fixed-bank pointer and metadata table addresses (CPU addresses, little-endian words).

pub const TOTAL_HOLES: usize = 54;
pub const HOLES_PER_COURSE: usize = 18;

pub const COURSE_HOLE_OFFSET: u16 = 0xDBBB;
pub const COURSE_BANK_TERRAIN: u16 = 0xDBBE;
pub const TERRAIN_START_PTR: u16 = 0xDBC1;
pub const TERRAIN_END_PTR: u16 = 0xDC2D;
pub const GREENS_PTR: u16 = 0xDC99;
pub const PAR: u16 = 0xDD05;
pub const DISTANCE_100: u16 = 0xDD3B;
pub const DISTANCE_10: u16 = 0xDD71;
pub const DISTANCE_1: u16 = 0xDDA7;
pub const HANDICAP: u16 = 0xDDDD;
pub const SCROLL_LIMIT: u16 = 0xDE13;
pub const GREEN_X: u16 = 0xDE49;
pub const GREEN_Y: u16 = 0xDE7F;
pub const TEE_X: u16 = 0xDEB5;
pub const TEE_Y: u16 = 0xDEEB;
pub const FLAG_X_OFFSET: u16 = 0xDF57;
pub const FLAG_Y_OFFSET: u16 = 0xE02F;

pub const HORIZ_TRANSITION: u16 = 0xE1AC;
pub const VERT_CONTINUATION: u16 = 0xE28C;
pub const DICTIONARY: u16 = 0xE36C;

/// Per-hole bank lookup table the multi-bank patch reads from, in bank 3.
pub const PACKED_BANK_TABLE: u16 = 0xA700;
/// Start of the greens data region in bank 3.
pub const GREENS_REGION_START: u16 = 0x81C0;
/// First byte past the greens region / start of the bank table.
pub const GREENS_REGION_END: u16 = 0xA700;

pub const GREENS_BANK: usize = 3;
