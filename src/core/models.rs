use serde::{Deserialize, Serialize};

use crate::core::grid::Grid;
use crate::core::history::HistoryLog;

/// One grid position. Symbols follow the common level format
/// (http://www.sokobano.de/wiki/index.php?title=Level_format).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    PlayerOnTarget,
    Target,
    CrateOnTarget,
    Crate,
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: i32,
    pub row: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A step that was actually executed. `push` is set when a crate moved with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub direction: Direction,
    pub push: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Moved,
    Pushed,
    Blocked,
}

/// The live state of one level: the grid being played and the actions that led to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    pub(crate) level: u32,
    pub(crate) grid: Grid,
    pub(crate) history: HistoryLog,
}
