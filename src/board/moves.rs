use std::collections::HashSet;

use crate::board::{Board, SIZE};
use crate::cell::{VehicleId, EMPTY};
use crate::direction::Direction::{self, *};
use crate::move_::Move;
use crate::position::Position;

impl Board {
    /// All moves that are legal on this board.
    ///
    /// Vehicles are discovered by scanning the board in row-major order, so the first cell of a
    /// vehicle found is its left-most (or top-most) one. Only the cell to the right and the cell
    /// below are probed to find out the orientation. Each vehicle contributes at most one move
    /// towards smaller and one towards larger indices, in the order left, right, up, down.
    pub fn possible_moves(&self) -> Vec<Move> {
        let mut seen: HashSet<VehicleId> = HashSet::new();
        let mut moves = vec![];

        for (index, &id) in self.cells.iter().enumerate() {
            if id == EMPTY || !seen.insert(id) {
                continue;
            }
            let start = Position::from_index(index, SIZE);

            if self.holds(start.neighbour(Right), id) {
                self.push_slides(&mut moves, id, start, Left, Right);
            }
            if self.holds(start.neighbour(Down), id) {
                self.push_slides(&mut moves, id, start, Up, Down);
            }
        }

        trace!("{} legal moves on\n{}", moves.len(), self);
        moves
    }

    /// Check both ends of the vehicle starting at `start` and record a move for every end that
    /// has an empty cell in front of it.
    fn push_slides(
        &self,
        moves: &mut Vec<Move>,
        id: VehicleId,
        start: Position,
        backward: Direction,
        forward: Direction,
    ) {
        if self.is_empty(start.neighbour(backward)) {
            moves.push(Move::new(id, backward));
        }

        // The vehicle is either two or three cells long.
        let mut ahead = start.offset(forward, 2);
        if self.holds(ahead, id) {
            ahead = ahead.neighbour(forward);
        }
        if self.is_empty(ahead) {
            moves.push(Move::new(id, forward));
        }
    }
}
