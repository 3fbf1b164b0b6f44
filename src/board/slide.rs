use crate::board::{Board, SIZE};
use crate::cell::EMPTY;
use crate::move_::Move;
use crate::position::Position;
use crate::util::RushHourError;

impl Board {
    /// Return the board resulting from performing `mv`. The move is expected to come from
    /// `possible_moves` on this very board; legality is not checked again. `self` is left
    /// untouched.
    pub fn apply(&self, mv: Move) -> Result<Board, RushHourError> {
        let id = mv.vehicle;
        let direction = mv.direction;

        // Scan towards the direction of travel so that the first cell found is the leading edge.
        let leading = if direction.is_backward() {
            self.cells.iter().position(|&c| c == id)
        } else {
            self.cells.iter().rposition(|&c| c == id)
        };
        let leading = match leading {
            Some(index) if id != EMPTY => Position::from_index(index, SIZE),
            _ => return Err(RushHourError::UnknownVehicle(id)),
        };

        let ahead = leading.neighbour(direction);
        let ahead_index = ahead.to_index(SIZE).ok_or(RushHourError::OutOfBounds {
            row: ahead.row,
            col: ahead.col,
        })?;

        // The trailing cell is two behind the leading edge for trucks, one behind for cars.
        let behind = direction.reverse();
        let trailing = if self.holds(leading.offset(behind, 2), id) {
            leading.offset(behind, 2)
        } else {
            leading.neighbour(behind)
        };
        let trailing_index = match trailing.to_index(SIZE) {
            Some(index) if self.cells[index] == id => index,
            _ => return Err(RushHourError::InvariantViolation { vehicle: id }),
        };

        let mut result = *self;
        result.cells[ahead_index] = id;
        result.cells[trailing_index] = EMPTY;
        result.check_footprints()?;
        Ok(result)
    }

    /// Every vehicle has to cover at least two cells. A vehicle covering only one means the
    /// slide logic is broken.
    fn check_footprints(&self) -> Result<(), RushHourError> {
        match self.footprints().into_iter().find(|&(_, count)| count < 2) {
            Some((vehicle, _)) => {
                error!("vehicle {} fragmented:\n{}", vehicle, self);
                Err(RushHourError::InvariantViolation { vehicle })
            }
            None => Ok(()),
        }
    }
}
