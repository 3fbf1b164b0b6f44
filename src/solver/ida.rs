use std::collections::{HashMap, HashSet};

use crate::board::{Board, SIZE};
use crate::cell::{EMPTY, TARGET};
use crate::move_::Move;
use crate::position::Position;
use crate::solver::{Outcome, Solution};
use crate::util::RushHourError;

/// A lower bound on the number of moves needed to solve `board`: the target has to cover the
/// distance to the exit one cell at a time, and every other vehicle standing in its way has to
/// move at least once.
pub fn heuristic(board: &Board) -> usize {
    let target = match board.vehicle(TARGET) {
        Some(target) => target,
        None => return 0,
    };
    let end = target.end();
    let blockers: HashSet<_> = (end.col + 1..SIZE as isize)
        .filter_map(|col| board.get(Position { row: end.row, col }))
        .filter(|&c| c != EMPTY)
        .collect();
    SIZE - 1 - end.col as usize + blockers.len()
}

/// What a bounded depth-first search learned about the next bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Found,

    /// Some board was cut off; this is the smallest estimate that exceeded the bound.
    Exceeded(usize),

    /// Nothing was cut off, so raising the bound does not help.
    Exhausted,
}

impl Bound {
    fn min(self, other: Bound) -> Bound {
        use self::Bound::*;
        match (self, other) {
            (Found, _) | (_, Found) => Found,
            (Exceeded(a), Exceeded(b)) => Exceeded(a.min(b)),
            (Exceeded(a), Exhausted) | (Exhausted, Exceeded(a)) => Exceeded(a),
            (Exhausted, Exhausted) => Exhausted,
        }
    }
}

struct Search {
    threshold: usize,
    path: Vec<Move>,

    /// The smallest number of moves each board has been expanded with in this iteration.
    depths: HashMap<Board, usize>,

    /// Every board reached in any iteration.
    seen: HashSet<Board>,

    /// Every board expanded in any iteration.
    expanded: HashSet<Board>,
    generated: usize,
}

impl Search {
    fn search(&mut self, board: &Board, moves: usize) -> Result<Bound, RushHourError> {
        self.seen.insert(*board);

        // Everything below this board has been searched with at least as much slack already.
        match self.depths.get(board) {
            Some(&depth) if depth <= moves => return Ok(Bound::Exhausted),
            _ => {}
        }

        let estimate = moves + heuristic(board);
        if estimate > self.threshold {
            return Ok(Bound::Exceeded(estimate));
        }
        if board.is_goal() {
            return Ok(Bound::Found);
        }
        self.depths.insert(*board, moves);
        self.expanded.insert(*board);

        let mut bound = Bound::Exhausted;
        for mv in board.possible_moves() {
            let next = board.apply(mv)?;
            self.generated += 1;
            self.path.push(mv);
            match self.search(&next, moves + 1)? {
                Bound::Found => return Ok(Bound::Found),
                other => bound = bound.min(other),
            }
            self.path.pop();
        }
        Ok(bound)
    }
}

/// Iterative-deepening A*: repeated depth-first searches, each cutting off boards whose move
/// count plus `heuristic` exceeds the current threshold. The threshold starts at the estimate
/// for the initial board and is raised to the smallest estimate that was cut off. Since the
/// heuristic never overestimates, the first solution found is a shortest one.
///
/// Goal boards are never expanded, so once every board reached so far has also been expanded
/// the whole reachable space has been searched and there is no solution.
pub fn solve(initial: &Board) -> Result<Outcome, RushHourError> {
    let mut search = Search {
        threshold: heuristic(initial),
        path: vec![],
        depths: HashMap::new(),
        seen: HashSet::new(),
        expanded: HashSet::new(),
        generated: 0,
    };

    loop {
        debug!(
            "threshold {}: {} boards visited so far",
            search.threshold,
            search.expanded.len()
        );
        search.depths.clear();
        search.path.clear();

        match search.search(initial, 0)? {
            Bound::Found => {
                return Ok(Outcome::Solved(Solution {
                    moves: search.path,
                    visited: search.expanded.len(),
                    generated: search.generated,
                }))
            }
            Bound::Exceeded(next) if search.seen.len() > search.expanded.len() => {
                search.threshold = next
            }
            Bound::Exceeded(_) | Bound::Exhausted => {
                return Ok(Outcome::NoSolution {
                    visited: search.expanded.len(),
                    generated: search.generated,
                })
            }
        }
    }
}
