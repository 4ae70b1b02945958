use crate::core::{GridState, MoveOutcome};

pub struct GameRenderState<'a> {
    pub game: &'a GridState,
    pub solved: bool,
    pub has_next: bool,
    pub error: Option<String>,
    pub last_outcome: Option<MoveOutcome>,
}
