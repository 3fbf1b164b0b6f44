#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RushHourError {
    #[error("OutOfBounds({row}, {col})")]
    OutOfBounds { row: isize, col: isize },

    #[error("InvariantViolation({vehicle})")]
    InvariantViolation { vehicle: u8 },

    #[error("UnknownVehicle({0})")]
    UnknownVehicle(u8),

    #[error("WrongDimensions({rows}x{columns})")]
    WrongDimensions { rows: usize, columns: usize },

    #[error("InvalidCharacter('{chr}' at {row}, {col})")]
    InvalidCharacter { chr: char, row: usize, col: usize },

    /// The identifier has no single-character representation.
    #[error("IdentifierOutOfRange({0})")]
    IdentifierOutOfRange(u8),

    #[error("MalformedVehicle({0})")]
    MalformedVehicle(u8),

    #[error("MissingTarget")]
    MissingTarget,

    #[error("TargetNotInExitRow")]
    TargetNotInExitRow,

    #[error("InvalidMove({0:?})")]
    InvalidMove(String),

    #[error("UnknownPuzzle({0})")]
    UnknownPuzzle(String),
}
