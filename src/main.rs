use std::error::Error;
use std::process;

use ansi_term::Colour::Red;
use clap::{Arg, ArgMatches, Command};
use log::{error, LevelFilter};

use rush_hour::cell::{self, TARGET};
use rush_hour::{print_catalogue, solve, Board, Outcome, Puzzle, Strategy, SIZE};

/// Render a board, highlighting the target vehicle.
fn render(board: &Board) -> String {
    let mut result = String::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            let c = board.cell_at(row, col).unwrap_or_default();
            let chr = cell::to_char(c).to_string();
            if c == TARGET {
                result.push_str(&Red.bold().paint(chr).to_string());
            } else {
                result.push_str(&chr);
            }
            result.push(' ');
        }
        result.push('\n');
    }
    result
}

fn log_level(matches: &ArgMatches) -> LevelFilter {
    let verbose = matches.occurrences_of("verbose") as i64;
    let quiet = matches.occurrences_of("quiet") as i64;
    match 2 + verbose - quiet {
        i64::MIN..=0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Solve the selected puzzle and print the result. Returns whether a solution was found.
fn run(matches: &ArgMatches) -> Result<bool, Box<dyn Error>> {
    let name = matches.value_of("puzzle").unwrap_or("reference");
    let strategy: Strategy = matches.value_of("strategy").unwrap_or("bfs").parse()?;
    let json = matches.is_present("json");

    let board = Puzzle::by_name(name)?.board()?;
    if !json {
        println!("Initial board:\n{}", render(&board));
    }

    let outcome = solve(&board, strategy)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(outcome.is_solved());
    }

    match outcome {
        Outcome::Solved(ref solution) => {
            println!(
                "Found a solution with {} moves ({} boards visited):",
                solution.len(),
                solution.visited
            );
            println!("{}", solution.to_notation());

            if matches.is_present("replay") {
                let boards = solution.boards(&board)?;
                for (i, (mv, board)) in solution.moves.iter().zip(&boards[1..]).enumerate() {
                    println!("\nMove {}: {}\n{}", i + 1, mv, render(board));
                }
            }
        }
        Outcome::NoSolution { visited, .. } => {
            println!("No solution ({} boards visited).", visited);
        }
    }
    Ok(outcome.is_solved())
}

fn main() {
    let matches = Command::new("rush-hour")
        .author("Colin Benner <colin@yzhs.de>")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find a shortest solution to a Rush Hour puzzle")
        .arg(
            Arg::new("puzzle")
                .help("Name of the built-in puzzle to solve")
                .short('p')
                .long("puzzle")
                .value_name("NAME")
                .takes_value(true)
                .default_value("reference"),
        )
        .arg(
            Arg::new("strategy")
                .help("Search strategy")
                .short('s')
                .long("strategy")
                .takes_value(true)
                .possible_values(["bfs", "ida"])
                .default_value("bfs"),
        )
        .arg(
            Arg::new("replay")
                .help("Print the board after every move")
                .short('r')
                .long("replay"),
        )
        .arg(
            Arg::new("json")
                .help("Print the result as JSON")
                .long("json"),
        )
        .arg(
            Arg::new("list")
                .help("List the built-in puzzles")
                .short('l')
                .long("list"),
        )
        .arg(
            Arg::new("verbose")
                .help("Print more log messages")
                .short('v')
                .multiple_occurrences(true),
        )
        .arg(
            Arg::new("quiet")
                .help("Print fewer log messages")
                .short('q')
                .multiple_occurrences(true),
        )
        .get_matches();

    colog::default_builder().filter(None, log_level(&matches)).init();

    if matches.is_present("list") {
        print_catalogue();
        return;
    }

    match run(&matches) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    }
}
