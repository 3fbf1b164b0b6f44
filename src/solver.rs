//! Searching for shortest solutions.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::board::Board;
use crate::move_::{self, Move};
use crate::util::RushHourError;

mod bfs;
mod ida;

pub use self::ida::heuristic;

/// How to explore the space of boards. Both strategies find a solution with as few moves as
/// possible; they differ in memory use and in which of several shortest solutions they return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Plain breadth-first search over all reachable boards.
    BreadthFirst,

    /// Iterative-deepening A* guided by the distance of the target vehicle to the exit.
    IterativeDeepening,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::BreadthFirst
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "bfs" => Ok(Strategy::BreadthFirst),
            "ida" => Ok(Strategy::IterativeDeepening),
            _ => Err(format!("unknown strategy '{}', expected 'bfs' or 'ida'", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Strategy::BreadthFirst => write!(f, "bfs"),
            Strategy::IterativeDeepening => write!(f, "ida"),
        }
    }
}

/// A shortest sequence of moves leading to a goal board, together with some statistics about
/// the search that found it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub moves: Vec<Move>,

    /// Number of distinct boards that were expanded.
    pub visited: usize,

    /// Number of successor boards put on the frontier.
    pub generated: usize,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Replay the solution starting from `initial`. The result contains the initial board
    /// followed by the board after each move.
    pub fn boards(&self, initial: &Board) -> Result<Vec<Board>, RushHourError> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        boards.push(*initial);
        let mut current = *initial;
        for &mv in &self.moves {
            current = current.apply(mv)?;
            boards.push(current);
        }
        Ok(boards)
    }

    /// The moves in short notation, e.g. `2R 4D 1R`.
    pub fn to_notation(&self) -> String {
        move_::to_notation(&self.moves)
    }
}

/// The result of a search that ran to completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Solved(Solution),

    /// Every reachable board has been examined without finding the goal.
    NoSolution { visited: usize, generated: usize },
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match *self {
            Outcome::Solved(ref solution) => Some(solution),
            Outcome::NoSolution { .. } => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solution().is_some()
    }

    /// Number of distinct boards expanded during the search.
    pub fn visited(&self) -> usize {
        match *self {
            Outcome::Solved(ref solution) => solution.visited,
            Outcome::NoSolution { visited, .. } => visited,
        }
    }
}

/// Search for a shortest sequence of moves that brings the target vehicle to the exit.
///
/// Running out of boards to explore is reported as `Outcome::NoSolution`. An `Err` is only
/// returned if applying a generated move fails, which indicates a broken board.
pub fn solve(board: &Board, strategy: Strategy) -> Result<Outcome, RushHourError> {
    let start = Instant::now();
    let outcome = match strategy {
        Strategy::BreadthFirst => bfs::solve(board)?,
        Strategy::IterativeDeepening => ida::solve(board)?,
    };

    match outcome {
        Outcome::Solved(ref solution) => info!(
            "{}: found a solution with {} moves after visiting {} boards in {:.2?}",
            strategy,
            solution.len(),
            solution.visited,
            start.elapsed()
        ),
        Outcome::NoSolution { visited, .. } => warn!(
            "{}: no solution after visiting {} boards in {:.2?}",
            strategy,
            visited,
            start.elapsed()
        ),
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::test::REFERENCE;

    #[test]
    fn strategy_from_str() {
        assert_eq!("bfs".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!("ida".parse::<Strategy>(), Ok(Strategy::IterativeDeepening));
        assert!("dfs".parse::<Strategy>().is_err());
        for &s in &[Strategy::BreadthFirst, Strategy::IterativeDeepening] {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
    }

    #[test]
    fn strategies_agree_on_length() {
        let board = Board::new(REFERENCE).unwrap();
        let bfs = solve(&board, Strategy::BreadthFirst).unwrap();
        let ida = solve(&board, Strategy::IterativeDeepening).unwrap();
        let bfs = bfs.solution().unwrap();
        let ida = ida.solution().unwrap();
        assert_eq!(bfs.len(), ida.len());

        for solution in &[bfs, ida] {
            let boards = solution.boards(&board).unwrap();
            assert_eq!(boards.len(), solution.len() + 1);
            assert!(boards.last().unwrap().is_goal());
            assert!(boards[..solution.len()].iter().all(|b| !b.is_goal()));
        }
    }

    #[test]
    fn outcome_as_json() {
        let outcome = Outcome::NoSolution {
            visited: 1,
            generated: 0,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"outcome":"no_solution","visited":1,"generated":0}"#);
        assert_eq!(serde_json::from_str::<Outcome>(&json).unwrap(), outcome);

        let outcome = Outcome::Solved(Solution {
            moves: vec![Move::new(1, crate::direction::Direction::Right)],
            visited: 3,
            generated: 4,
        });
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"outcome":"solved","moves":[{"vehicle":1,"direction":"Right"}],"visited":3,"generated":4}"#
        );
        assert_eq!(serde_json::from_str::<Outcome>(&json).unwrap(), outcome);
    }
}
