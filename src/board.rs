use std::collections::HashSet;
use std::fmt;

use crate::cell::{self, Cell, VehicleId, EMPTY, TARGET};
use crate::direction::Orientation;
use crate::position::Position;
use crate::util::RushHourError;
use crate::vehicle::Vehicle;

mod builder;
mod moves;
mod slide;

/// Number of rows and columns of a board.
pub const SIZE: usize = 6;

/// The row the target vehicle lives in. The exit is at the right end of this row.
pub const EXIT_ROW: usize = 2;

/// A full puzzle state. Boards are immutable values: moving a vehicle produces a new board, so
/// they can be stored in hash sets directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// `SIZE * SIZE` cells in row-major order
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Create a board from a grid of vehicle identifiers, `0` marking an empty cell. The grid
    /// is checked to describe a valid puzzle.
    pub fn new(grid: [[Cell; SIZE]; SIZE]) -> Result<Board, RushHourError> {
        let mut cells = [EMPTY; SIZE * SIZE];
        for (row, line) in grid.iter().enumerate() {
            cells[row * SIZE..(row + 1) * SIZE].copy_from_slice(line);
        }
        let board = Board { cells };
        board.validate()?;
        Ok(board)
    }

    /// The contents of the cell at the given coordinates.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, RushHourError> {
        self.get(Position::new(row, col))
            .ok_or(RushHourError::OutOfBounds {
                row: row as isize,
                col: col as isize,
            })
    }

    /// The contents of the cell at `pos`, or `None` outside the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        pos.to_index(SIZE).map(|i| self.cells[i])
    }

    /// Is the cell with the given coordinates on the board and not covered by a vehicle?
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Some(EMPTY)
    }

    /// Is the given cell covered by vehicle `id`?
    pub fn holds(&self, pos: Position, id: VehicleId) -> bool {
        id != EMPTY && self.get(pos) == Some(id)
    }

    /// Check whether the target vehicle has reached the exit, i.e. covers the two right-most
    /// cells of the exit row.
    pub fn is_goal(&self) -> bool {
        self.holds(Position::new(EXIT_ROW, SIZE - 2), TARGET)
            && self.holds(Position::new(EXIT_ROW, SIZE - 1), TARGET)
    }

    /// Find the vehicle with the given identifier. Returns `None` if the identifier does not
    /// occur or only covers a single cell.
    pub fn vehicle(&self, id: VehicleId) -> Option<Vehicle> {
        if id == EMPTY {
            return None;
        }
        let index = self.cells.iter().position(|&c| c == id)?;
        self.vehicle_at(Position::from_index(index, SIZE))
    }

    /// All vehicles on the board, in row-major order of their first cell.
    pub fn vehicles(&self) -> Vec<Vehicle> {
        let mut seen = HashSet::new();
        let mut result = vec![];
        for (index, &id) in self.cells.iter().enumerate() {
            if id == EMPTY || !seen.insert(id) {
                continue;
            }
            if let Some(vehicle) = self.vehicle_at(Position::from_index(index, SIZE)) {
                result.push(vehicle);
            }
        }
        result
    }

    /// The number of cells covered by any vehicle.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Derive the vehicle whose top-most or left-most cell is `start`.
    fn vehicle_at(&self, start: Position) -> Option<Vehicle> {
        use crate::direction::Direction::*;
        let id = self.get(start)?;
        let orientation = if self.holds(start.neighbour(Right), id) {
            Orientation::Horizontal
        } else if self.holds(start.neighbour(Down), id) {
            Orientation::Vertical
        } else {
            return None;
        };
        let forward = orientation.directions()[1];
        let mut length = 1;
        while self.holds(start.offset(forward, length as isize), id) {
            length += 1;
        }
        Some(Vehicle {
            id,
            orientation,
            start,
            length,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells.chunks(SIZE).enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{}", cell::to_char(c))?;
            }
        }
        Ok(())
    }
}
