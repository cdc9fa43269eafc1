use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("grid needs at least one row and one column, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("rule tables cover neighbor counts 0 through 8, so 9 entries, got {0}")]
    InvalidRuleLength(usize),

    #[error("position ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("unrecognized rule string {0:?}, expected something like \"B3/S23\"")]
    InvalidRuleString(String),

    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("snapshot io: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding: {0}")]
    Serialization(#[from] serde_json::Error),
}
