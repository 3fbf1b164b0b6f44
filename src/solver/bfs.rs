use std::collections::{HashSet, VecDeque};

use crate::board::Board;
use crate::move_::Move;
use crate::solver::{Outcome, Solution};
use crate::util::RushHourError;

/// Breadth-first search over boards. Boards are dequeued in the order they were discovered and
/// each board is expanded at most once, so the first goal board dequeued has been reached with
/// as few moves as possible.
pub fn solve(initial: &Board) -> Result<Outcome, RushHourError> {
    let mut visited: HashSet<Board> = HashSet::new();
    let mut frontier: VecDeque<(Board, Vec<Move>)> = VecDeque::with_capacity(500);
    frontier.push_back((*initial, vec![]));

    let mut generated = 0;
    let mut depth = 0;

    while let Some((board, path)) = frontier.pop_front() {
        if board.is_goal() {
            return Ok(Outcome::Solved(Solution {
                moves: path,
                visited: visited.len(),
                generated,
            }));
        }

        // Reached before by a path that is at most as long as this one.
        if !visited.insert(board) {
            continue;
        }

        if path.len() > depth {
            depth = path.len();
            debug!(
                "depth {}: {} boards visited, {} queued",
                depth,
                visited.len(),
                frontier.len()
            );
        }

        for mv in board.possible_moves() {
            let next = board.apply(mv)?;
            if !visited.contains(&next) {
                let mut next_path = path.clone();
                next_path.push(mv);
                frontier.push_back((next, next_path));
                generated += 1;
            }
        }
    }

    Ok(Outcome::NoSolution {
        visited: visited.len(),
        generated,
    })
}
