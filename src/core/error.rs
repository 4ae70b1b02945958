use thiserror::Error;

/// Everything that can go wrong while loading or playing a level.
///
/// A blocked move is not an error; it is reported as `MoveOutcome::Blocked`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position ({column}, {row}) is outside the grid")]
    OutOfBounds { column: i32, row: i32 },

    #[error("no player on the grid")]
    NoPlayerFound,

    #[error("level {0} does not exist")]
    NoSuchLevel(u32),

    #[error("nothing to undo")]
    EmptyHistory,

    #[error("grid of {len} cells cannot have width {width}")]
    InvalidWidth { width: usize, len: usize },

    #[error("unknown cell symbol {symbol:?} at index {index}")]
    InvalidSymbol { symbol: char, index: usize },

    #[error("unknown action code {0:?}")]
    InvalidActionCode(char),

    #[error("move {index} did not play out as recorded")]
    ReplayMismatch { index: usize },

    #[error("level catalog is empty")]
    EmptyCatalog,

    #[error("level numbers must run from 1 without gaps")]
    NonContiguousLevels,

    #[error("level catalog could not be read: {0}")]
    InvalidCatalog(String),
}
