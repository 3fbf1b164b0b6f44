use crate::direction::Direction;

/// A cell on the board given as (row, column) coordinates. Coordinates are signed so that the
/// neighbour of a cell on the border can be represented and then rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position {
            row: row as isize,
            col: col as isize,
        }
    }

    pub fn from_index(index: usize, columns: usize) -> Self {
        Position::new(index / columns, index % columns)
    }

    /// The row-major index of this position, if it lies inside a `size`×`size` grid.
    pub fn to_index(&self, size: usize) -> Option<usize> {
        if self.is_inside(size) {
            Some(self.col as usize + self.row as usize * size)
        } else {
            None
        }
    }

    pub fn is_inside(&self, size: usize) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as usize) < size && (self.col as usize) < size
    }

    /// Return the neighbouring Position in the given direction.
    pub fn neighbour(&self, direction: Direction) -> Self {
        self.offset(direction, 1)
    }

    /// Walk `steps` cells in the given direction.
    pub fn offset(&self, direction: Direction, steps: isize) -> Self {
        use crate::direction::Direction::*;
        let (row, col) = match direction {
            Left => (self.row, self.col - steps),
            Right => (self.row, self.col + steps),
            Up => (self.row - steps, self.col),
            Down => (self.row + steps, self.col),
        };
        Position { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::DIRECTIONS;

    #[test]
    fn neighbours_are_adjacent() {
        let pos = Position::new(2, 3);
        for &dir in &DIRECTIONS {
            let next = pos.neighbour(dir);
            assert_eq!((next.row - pos.row).abs() + (next.col - pos.col).abs(), 1);
            assert_eq!(pos, pos.neighbour(dir).neighbour(dir.reverse()));
        }
    }

    #[test]
    fn bounds() {
        assert_eq!(Position::new(0, 0).neighbour(Direction::Up).to_index(6), None);
        assert_eq!(Position::new(5, 5).neighbour(Direction::Right).to_index(6), None);
        assert_eq!(Position::new(2, 4).to_index(6), Some(16));
        assert_eq!(Position::from_index(16, 6), Position::new(2, 4));
    }
}
