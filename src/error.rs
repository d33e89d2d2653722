use thiserror::Error;

/// Errors.
///    Error 1: Not all 12 edges exist exactly once
///    Error 2: Flip error: One edge has to be flipped
///    Error 3: Not all corners exist exactly once
///    Error 4: Twist error: One corner has to be twisted
///    Error 5: Parity error: Two corners or two edges have to be exchanged
///    Error 6: Invalid scramble string
///    Error 7: Invalid facelet string
///    Error 8: Invalid cubie representation
///    Error 9: Table file could not be written
///    Error 10: Search exhausted without a solution (logic error)
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid color value")]
    InvalidColor,
    #[error("Invalid edge value")]
    InvalidEdge,
    #[error("One edge has to be flipped")]
    FlipError,
    #[error("Invalid corner value")]
    InvalidCorner,
    #[error("One corner has to be twisted")]
    TwistError,
    #[error("Two corners or two edges have to be exchanged")]
    ParityError,
    #[error("Invalid scramble string")]
    InvalidScramble,
    #[error("Invalid facelet string")]
    InvalidFaceletString,
    #[error("Invalid facelet representation")]
    InvalidFaceletValue,
    #[error("Invalid cubie representation")]
    InvalidCubieValue,
    #[error("Table file error: {0}")]
    TableIo(#[from] std::io::Error),
    #[error("Search exhausted without finding a solution")]
    SearchExhausted,
}
