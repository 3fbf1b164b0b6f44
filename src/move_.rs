use std::convert::TryFrom;
use std::fmt;

use crate::cell::{self, VehicleId, EMPTY};
use crate::direction::Direction;
use crate::util::RushHourError;

/// A one-cell slide of one vehicle. A move only makes sense relative to the board it was
/// generated for; it does not carry any board state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Which vehicle slides?
    pub vehicle: VehicleId,

    /// Where was the move directed?
    pub direction: Direction,
}

impl Move {
    pub fn new(vehicle: VehicleId, direction: Direction) -> Self {
        Move { vehicle, direction }
    }

    /// The move undoing this one.
    pub fn reverse(self) -> Self {
        Move::new(self.vehicle, self.direction.reverse())
    }

    /// Short notation, e.g. `4D` for "vehicle 4 slides down".
    pub fn to_notation(&self) -> String {
        format!("{}{}", cell::to_char(self.vehicle), self.direction.to_char())
    }
}

/// Parse a whitespace separated list of moves in short notation.
pub fn parse(s: &str) -> Result<Vec<Move>, RushHourError> {
    s.split_whitespace().map(Move::try_from).collect()
}

/// Render a list of moves in short notation.
pub fn to_notation(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_notation)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "vehicle {} {}", cell::to_char(self.vehicle), self.direction)
    }
}

impl<'a> TryFrom<&'a str> for Move {
    type Error = RushHourError;

    fn try_from(s: &'a str) -> Result<Move, RushHourError> {
        let invalid = || RushHourError::InvalidMove(s.to_owned());
        let mut chars = s.chars();
        let (id, dir) = match (chars.next(), chars.next(), chars.next()) {
            (Some(id), Some(dir), None) => (id, dir),
            _ => return Err(invalid()),
        };
        let vehicle = match cell::from_char(id) {
            Some(EMPTY) | None => return Err(invalid()),
            Some(vehicle) => vehicle,
        };
        let direction = Direction::from_char(dir).ok_or_else(invalid)?;
        Ok(Move::new(vehicle, direction))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::direction::DIRECTIONS;

    #[test]
    fn to_from() {
        for &dir in &DIRECTIONS {
            for &id in &[1, 7, 12] {
                let mv = Move::new(id, dir);
                assert_eq!(Ok(mv), Move::try_from(mv.to_notation().as_str()));
            }
        }
    }

    #[test]
    fn parse_list() {
        use crate::direction::Direction::*;
        let moves = parse(" 4D 1r  bU ").unwrap();
        assert_eq!(
            moves,
            vec![Move::new(4, Down), Move::new(1, Right), Move::new(11, Up)]
        );
        assert_eq!(to_notation(&moves), "4D 1R bU");
    }

    #[test]
    fn invalid_notation() {
        for s in &["", "4", "4X", ".L", "0R", "4DD", "#U"] {
            assert_eq!(
                Move::try_from(*s),
                Err(RushHourError::InvalidMove((*s).to_owned()))
            );
        }
    }

    #[test]
    fn display() {
        let mv = Move::new(3, Direction::Left);
        assert_eq!(mv.to_string(), "vehicle 3 left");
        assert_eq!(mv.reverse().to_string(), "vehicle 3 right");
    }
}
