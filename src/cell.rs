/// Contents of a single cell: either `EMPTY` or the identifier of the vehicle covering it.
pub type Cell = u8;

/// Vehicles are identified by the value they write into the cells they cover.
pub type VehicleId = u8;

pub const EMPTY: Cell = 0;

/// The vehicle that has to reach the exit.
pub const TARGET: VehicleId = 1;

/// The largest identifier that still has a single-character representation.
pub const MAX_VEHICLE_ID: VehicleId = 35;

/// Given a cell, return the character representing it in the text format: `.` for an empty cell,
/// `1`–`9` and then `a`–`z` for vehicles.
pub fn to_char(cell: Cell) -> char {
    match cell {
        EMPTY => '.',
        1..=9 => (b'0' + cell) as char,
        10..=MAX_VEHICLE_ID => (b'a' + cell - 10) as char,
        _ => '?',
    }
}

/// Try to parse a given character as a cell of a board description.
pub fn from_char(c: char) -> Option<Cell> {
    match c {
        '.' | '0' => Some(EMPTY),
        '1'..='9' => Some(c as u8 - b'0'),
        'a'..='z' => Some(c as u8 - b'a' + 10),
        'A'..='Z' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_from() {
        for cell in 0..=MAX_VEHICLE_ID {
            assert_eq!(Some(cell), from_char(to_char(cell)));
        }
        assert_eq!(Some(12), from_char('C'));
    }

    #[test]
    fn invalid_char() {
        for chr in "#@ -+*/".chars() {
            assert!(from_char(chr).is_none());
        }
    }
}
