use std::fmt;

/// Any of the directions a vehicle can slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Return the opposite direction. Sliding back this way undoes a move.
    pub fn reverse(self) -> Self {
        use self::Direction::*;
        match self {
            Left => Right,
            Right => Left,
            Up => Down,
            Down => Up,
        }
    }

    /// Does this direction point towards smaller row or column indices?
    pub fn is_backward(self) -> bool {
        match self {
            Direction::Left | Direction::Up => true,
            Direction::Right | Direction::Down => false,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        use self::Direction::*;
        match c.to_ascii_uppercase() {
            'L' => Some(Left),
            'R' => Some(Right),
            'U' => Some(Up),
            'D' => Some(Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{}", s)
    }
}

/// All directions
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

/// The axis a vehicle is fixed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The directions a vehicle with this orientation may slide in, backward one first.
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Orientation::Horizontal => [Direction::Left, Direction::Right],
            Orientation::Vertical => [Direction::Up, Direction::Down],
        }
    }
}
