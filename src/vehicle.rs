use crate::cell::VehicleId;
use crate::direction::{Direction, Orientation};
use crate::position::Position;

/// A view of one vehicle as it currently sits on a board. Vehicles are not stored anywhere;
/// this is derived by scanning the cells carrying the vehicle's identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vehicle {
    pub id: VehicleId,
    pub orientation: Orientation,

    /// The top-most or left-most cell, i.e. the first cell in row-major order.
    pub start: Position,

    pub length: usize,
}

impl Vehicle {
    /// The bottom-most or right-most cell.
    pub fn end(&self) -> Position {
        self.start.offset(self.forward(), self.length as isize - 1)
    }

    /// All cells covered by the vehicle, from `start` to `end`.
    pub fn cells(&self) -> Vec<Position> {
        let forward = self.forward();
        (0..self.length as isize)
            .map(|i| self.start.offset(forward, i))
            .collect()
    }

    /// The cell the vehicle would slide into when moving in the given direction.
    pub fn cell_ahead(&self, direction: Direction) -> Position {
        if direction.is_backward() {
            self.start.neighbour(direction)
        } else {
            self.end().neighbour(direction)
        }
    }

    fn forward(&self) -> Direction {
        match self.orientation {
            Orientation::Horizontal => Direction::Right,
            Orientation::Vertical => Direction::Down,
        }
    }
}
