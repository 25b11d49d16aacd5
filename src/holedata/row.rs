//! A single terrain or greens row, serialized as one space-separated hex string
//! (placeholders as the literal token `100`) to match the hole JSON schema.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use super::cell::Cell;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Row(pub Vec<Cell>);

impl Row {
    pub fn of_bytes(width: usize, fill: u8) -> Self {
        Row(vec![Cell::Byte(fill); width])
    }
}

impl std::ops::Deref for Row {
    type Target = Vec<Cell>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl std::ops::DerefMut for Row {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

fn token(c: &Cell) -> String {
    match c {
        Cell::Byte(b) => format!("{:02x}", b),
        Cell::Placeholder => "100".to_string(),
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let joined = self.0.iter().map(token).collect::<Vec<_>>().join(" ");
        s.serialize_str(&joined)
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        let mut cells = Vec::new();
        for tok in s.split_whitespace() {
            if tok == "100" {
                cells.push(Cell::Placeholder);
            } else {
                let b = u8::from_str_radix(tok, 16)
                    .map_err(|_| serde::de::Error::custom(format!("invalid row token: {tok}")))?;
                cells.push(Cell::Byte(b));
            }
        }
        Ok(Row(cells))
    }
}
