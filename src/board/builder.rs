use std::collections::HashMap;

use crate::board::{Board, EXIT_ROW, SIZE};
use crate::cell::{self, VehicleId, EMPTY, MAX_VEHICLE_ID, TARGET};
use crate::direction::Orientation;
use crate::util::RushHourError;

/// Vehicles longer than this cannot be handled by the move generator.
const MAX_VEHICLE_LENGTH: usize = 3;

fn is_empty_or_comment(s: &str) -> bool {
    s.is_empty() || s.starts_with(';')
}

impl Board {
    /// Parse the text representation of a board: six lines of six cells each, `.` marking an
    /// empty cell and `1`–`9`, `a`–`z` marking vehicles. Leading and trailing whitespace on
    /// each line is ignored, as are empty lines and lines starting with `;`.
    pub fn parse(s: &str) -> Result<Board, RushHourError> {
        let lines: Vec<_> = s
            .lines()
            .map(str::trim)
            .filter(|x| !is_empty_or_comment(x))
            .collect();
        let columns = lines.iter().map(|x| x.chars().count()).max().unwrap_or(0);
        if lines.len() != SIZE || lines.iter().any(|x| x.chars().count() != SIZE) {
            return Err(RushHourError::WrongDimensions {
                rows: lines.len(),
                columns,
            });
        }

        let mut grid = [[EMPTY; SIZE]; SIZE];
        for (row, line) in lines.iter().enumerate() {
            for (col, chr) in line.chars().enumerate() {
                grid[row][col] = cell::from_char(chr)
                    .ok_or(RushHourError::InvalidCharacter { chr, row, col })?;
            }
        }

        Board::new(grid)
    }

    /// Make sure every vehicle has a printable identifier and is a straight, contiguous run of
    /// two or three cells, and that the target vehicle is a horizontal car in the exit row.
    pub(crate) fn validate(&self) -> Result<(), RushHourError> {
        if let Some(&id) = self.cells.iter().find(|&&c| c > MAX_VEHICLE_ID) {
            return Err(RushHourError::IdentifierOutOfRange(id));
        }

        for (id, count) in self.footprints() {
            match self.vehicle(id) {
                Some(v)
                    if v.length == count
                        && v.length <= MAX_VEHICLE_LENGTH
                        && v.cells().into_iter().all(|pos| self.holds(pos, id)) => {}
                _ => return Err(RushHourError::MalformedVehicle(id)),
            }
        }

        let target = self.vehicle(TARGET).ok_or(RushHourError::MissingTarget)?;
        if target.orientation != Orientation::Horizontal
            || target.length != 2
            || target.start.row as usize != EXIT_ROW
        {
            return Err(RushHourError::TargetNotInExitRow);
        }
        Ok(())
    }

    /// Count the cells covered by each vehicle identifier.
    pub(crate) fn footprints(&self) -> HashMap<VehicleId, usize> {
        let mut counts = HashMap::new();
        for &c in self.cells.iter().filter(|&&c| c != EMPTY) {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reference() {
        let s = "
            ; the reference puzzle
            222..3
            ..4..3
            114..3
            5.4.66
            5...7.
            888.7.
        ";
        let board = Board::parse(s).unwrap();
        assert_eq!(board.cell_at(3, 5), Ok(6));
        assert_eq!(Board::parse(&board.to_string()), Ok(board));
    }

    #[test]
    fn letters_above_nine() {
        let board = Board::parse(
            "aa....\n\
             ......\n\
             11...b\n\
             .....b\n\
             ......\n\
             ......",
        )
        .unwrap();
        assert_eq!(board.cell_at(0, 1), Ok(10));
        assert_eq!(board.cell_at(3, 5), Ok(11));
    }

    #[test]
    fn wrong_dimensions() {
        let res = Board::parse("......\n......\n11....");
        assert_eq!(
            res,
            Err(RushHourError::WrongDimensions {
                rows: 3,
                columns: 6
            })
        );
        let res = Board::parse("......\n......\n11.....\n......\n......\n......");
        assert_eq!(
            res,
            Err(RushHourError::WrongDimensions {
                rows: 6,
                columns: 7
            })
        );
    }

    #[test]
    fn invalid_character() {
        let res = Board::parse("......\n......\n11..#.\n......\n......\n......");
        assert_eq!(
            res,
            Err(RushHourError::InvalidCharacter {
                chr: '#',
                row: 2,
                col: 4
            })
        );
    }

    #[test]
    fn malformed_vehicles() {
        let l_shape = "22....\n\
                       2.....\n\
                       11....\n\
                       ......\n\
                       ......\n\
                       ......";
        assert_eq!(Board::parse(l_shape), Err(RushHourError::MalformedVehicle(2)));

        let single = "......\n\
                      ...3..\n\
                      11....\n\
                      ......\n\
                      ......\n\
                      ......";
        assert_eq!(Board::parse(single), Err(RushHourError::MalformedVehicle(3)));

        let gap = "4.4...\n\
                   ......\n\
                   11....\n\
                   ......\n\
                   ......\n\
                   ......";
        assert_eq!(Board::parse(gap), Err(RushHourError::MalformedVehicle(4)));

        let too_long = "......\n\
                        ......\n\
                        11....\n\
                        5555..\n\
                        ......\n\
                        ......";
        assert_eq!(Board::parse(too_long), Err(RushHourError::MalformedVehicle(5)));
    }

    #[test]
    fn identifier_without_character() {
        let mut grid = [[EMPTY; SIZE]; SIZE];
        grid[0][0] = 40;
        grid[0][1] = 40;
        grid[EXIT_ROW][0] = TARGET;
        grid[EXIT_ROW][1] = TARGET;
        assert_eq!(
            Board::new(grid),
            Err(RushHourError::IdentifierOutOfRange(40))
        );

        // The largest identifier still prints as a letter and parses back.
        grid[0][0] = MAX_VEHICLE_ID;
        grid[0][1] = MAX_VEHICLE_ID;
        let board = Board::new(grid).unwrap();
        assert_eq!(board.cell_at(0, 0), Ok(MAX_VEHICLE_ID));
        assert!(board.to_string().starts_with("zz...."));
        assert_eq!(Board::parse(&board.to_string()), Ok(board));
    }

    #[test]
    fn target_placement() {
        let missing = "......\n\
                       ......\n\
                       22....\n\
                       ......\n\
                       ......\n\
                       ......";
        assert_eq!(Board::parse(missing), Err(RushHourError::MissingTarget));

        let wrong_row = "......\n\
                         11....\n\
                         ......\n\
                         ......\n\
                         ......\n\
                         ......";
        assert_eq!(Board::parse(wrong_row), Err(RushHourError::TargetNotInExitRow));

        let vertical = "......\n\
                        1.....\n\
                        1.....\n\
                        ......\n\
                        ......\n\
                        ......";
        assert_eq!(Board::parse(vertical), Err(RushHourError::TargetNotInExitRow));

        let truck = "......\n\
                     ......\n\
                     111...\n\
                     ......\n\
                     ......\n\
                     ......";
        assert_eq!(Board::parse(truck), Err(RushHourError::TargetNotInExitRow));
    }
}
