use serde::{Deserialize, Serialize};

use crate::core::error::GameError;
use crate::core::models::Action;

/// Actions executed since the level (re)started, oldest first.
///
/// Its length is the step counter shown to the player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    actions: Vec<Action>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn pop(&mut self) -> Option<Action> {
        self.actions.pop()
    }

    pub fn last(&self) -> Option<Action> {
        self.actions.last().copied()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn push_count(&self) -> usize {
        self.actions.iter().filter(|a| a.push).count()
    }

    /// The history in LURD notation, e.g. `"rrUld"`.
    pub fn to_lurd(&self) -> String {
        self.actions.iter().map(Action::code).collect()
    }

    pub fn parse_lurd(moves: &str) -> Result<Vec<Action>, GameError> {
        moves
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Action::from_code(c).ok_or(GameError::InvalidActionCode(c)))
            .collect()
    }
}
