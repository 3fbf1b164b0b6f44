//! Find shortest solutions to Rush Hour puzzles.
//!
//! A puzzle is a 6×6 board of vehicles that can only slide along their own axis. The target
//! vehicle (identifier `1`) has to reach the exit at the right end of row 2.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod board;
pub mod cell;
mod collection;
mod direction;
pub mod move_;
mod position;
pub mod solver;
mod util;
mod vehicle;

pub use crate::board::{Board, EXIT_ROW, SIZE};
pub use crate::collection::*;
pub use crate::direction::*;
pub use crate::move_::Move;
pub use crate::position::*;
pub use crate::solver::{solve, Outcome, Solution, Strategy};
pub use crate::util::*;
pub use crate::vehicle::*;
