use ansi_term::Colour::{Green, Red, Yellow};

use crate::board::Board;
use crate::util::RushHourError;

/// A named board that ships with the solver.
#[derive(Debug, Clone, Copy)]
pub struct Puzzle {
    pub name: &'static str,
    pub description: &'static str,
    layout: &'static str,
}

/// All built-in puzzles. The first one is the default.
pub const PUZZLES: &[Puzzle] = &[
    Puzzle {
        name: "reference",
        description: "eight vehicles, 25 moves",
        layout: "
            222..3
            ..4..3
            114..3
            5.4.66
            5...7.
            888.7.
        ",
    },
    Puzzle {
        name: "simple",
        description: "two blockers in the exit row",
        layout: "
            ......
            ..2...
            1123..
            ...3..
            ......
            ......
        ",
    },
    Puzzle {
        name: "solved",
        description: "the target is already at the exit",
        layout: "
            ......
            ......
            ....11
            ......
            ......
            ......
        ",
    },
    Puzzle {
        name: "blocked",
        description: "no vehicle can move at all",
        layout: "
            ..2333
            442555
            116777
            886999
            aaabbb
            cccddd
        ",
    },
];

impl Puzzle {
    /// Look up a built-in puzzle.
    pub fn by_name(name: &str) -> Result<&'static Puzzle, RushHourError> {
        PUZZLES
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| RushHourError::UnknownPuzzle(name.to_owned()))
    }

    pub fn board(&self) -> Result<Board, RushHourError> {
        Board::parse(self.layout)
    }
}

/// Print a table of all built-in puzzles.
pub fn print_catalogue() {
    println!(
        " {}        {}  {}",
        Yellow.bold().paint("Name"),
        Yellow.bold().paint("Vehicles"),
        Yellow.bold().paint("Description")
    );
    println!("{0}{0}{0}{0}", "----------------");

    for puzzle in PUZZLES {
        match puzzle.board() {
            Ok(board) => {
                let padded_name = format!("{:<12}", puzzle.name);
                println!(
                    " {}{:>8}  {}",
                    Green.bold().paint(padded_name),
                    board.vehicles().len(),
                    puzzle.description
                );
            }
            Err(e) => println!(" {:<12}{:>8}  {}", puzzle.name, "", Red.paint(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::test::REFERENCE;

    #[test]
    fn all_puzzles_parse() {
        for puzzle in PUZZLES {
            assert!(puzzle.board().is_ok(), "{} is invalid", puzzle.name);
        }
    }

    #[test]
    fn lookup() {
        let reference = Puzzle::by_name("reference").unwrap();
        assert_eq!(reference.board(), Board::new(REFERENCE));
        assert_eq!(
            Puzzle::by_name("nope").unwrap_err(),
            RushHourError::UnknownPuzzle("nope".into())
        );
    }
}
