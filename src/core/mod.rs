mod error;
mod grid;
mod history;
mod levels;
mod model_helpers;
mod models;
mod session;
mod update;

pub use error::GameError;
pub use grid::Grid;
pub use history::HistoryLog;
pub use levels::{LevelDescriptor, LevelStore};
pub use models::{Action, Cell, Direction, GridState, MoveOutcome, Position};
pub use session::Session;
