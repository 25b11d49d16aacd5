//! A terrain/greens grid cell: either a concrete byte tile or an unfilled placeholder.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One cell of a terrain or greens grid.
///
/// Kept as a tagged enum rather than a wider integer (`u16`) so that the type system,
/// not a runtime check, excludes placeholders from code paths that only accept `u8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    Byte(u8),
    #[default]
    Placeholder,
}

impl Cell {
    pub fn as_byte(self) -> Option<u8> {
        match self {
            Cell::Byte(b) => Some(b),
            Cell::Placeholder => None,
        }
    }

    pub fn is_placeholder(self) -> bool {
        matches!(self, Cell::Placeholder)
    }
}

impl From<u8> for Cell {
    fn from(b: u8) -> Self {
        Cell::Byte(b)
    }
}

/// Placeholder cells serialize as the literal token `"100"`, byte cells as two-digit hex.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Byte(b) => s.serialize_str(&format!("{:02x}", b)),
            Cell::Placeholder => s.serialize_str("100"),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        if s == "100" {
            return Ok(Cell::Placeholder);
        }
        u8::from_str_radix(&s, 16)
            .map(Cell::Byte)
            .map_err(|_| serde::de::Error::custom(format!("invalid cell token: {s}")))
    }
}

#[cfg(test)]
mod cell_test {
    use super::*;

    #[test]
    fn placeholder_round_trips_through_json() {
        let c = Cell::Placeholder;
        let j = serde_json::to_string(&c).unwrap();
        assert_eq!(j, "\"100\"");
        let back: Cell = serde_json::from_str(&j).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn byte_round_trips_through_json() {
        let c = Cell::Byte(0xDF);
        let j = serde_json::to_string(&c).unwrap();
        assert_eq!(j, "\"df\"");
        let back: Cell = serde_json::from_str(&j).unwrap();
        assert_eq!(back, c);
    }
}
