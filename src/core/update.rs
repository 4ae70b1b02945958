use log::{debug, info};

use crate::core::Cell::{Crate, CrateOnTarget, Empty, Target};
use crate::core::{Action, Direction, GameError, Grid, GridState, HistoryLog, LevelStore, MoveOutcome};

impl GridState {
    /// Starts `level` from a fresh copy of its descriptor.
    pub fn new(store: &LevelStore, level: u32) -> Result<GridState, GameError> {
        let grid = store.get(level)?.to_grid()?;
        grid.player_position()?;
        info!("starting level {} ({}x{})", level, grid.width(), grid.height());
        Ok(GridState {
            level,
            grid,
            history: HistoryLog::new(),
        })
    }

    /// A state over an arbitrary grid, not backed by a catalog entry.
    pub fn from_grid(level: u32, grid: Grid) -> GridState {
        GridState {
            level,
            grid,
            history: HistoryLog::new(),
        }
    }

    /// Moves the player one cell, pushing a crate if one is in the way.
    pub fn step(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        let dir = direction.offset();
        let player = self.grid.player_position()?;
        let current = self.grid.cell_at(player)?;
        let next = player + dir;
        let dest = self.grid.neighbor(next);

        let outcome = if dest == Empty || dest == Target {
            self.grid.set_cell_at(next, dest.with_player())?;
            self.grid.set_cell_at(player, current.vacated())?;
            MoveOutcome::Moved
        } else if dest == Crate || dest == CrateOnTarget {
            let beyond_pos = player + dir * 2;
            let beyond = self.grid.neighbor(beyond_pos);
            if !beyond.is_walkable() {
                debug!("level {}: push {:?} blocked by {:?}", self.level, direction, beyond);
                return Ok(MoveOutcome::Blocked);
            }
            self.grid.set_cell_at(beyond_pos, beyond.with_crate())?;
            self.grid.set_cell_at(next, dest.with_player())?;
            self.grid.set_cell_at(player, current.vacated())?;
            MoveOutcome::Pushed
        } else {
            debug!("level {}: step {:?} blocked by {:?}", self.level, direction, dest);
            return Ok(MoveOutcome::Blocked);
        };

        let action = Action {
            direction,
            push: outcome == MoveOutcome::Pushed,
        };
        self.history.record(action);
        debug!("level {}: {} (step {})", self.level, action.code(), self.step_count());
        Ok(outcome)
    }

    /// Reverts the most recent action. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, GameError> {
        match self.try_undo() {
            Ok(action) => {
                debug!("level {}: undid {} (step {})", self.level, action.code(), self.step_count());
                Ok(true)
            }
            Err(GameError::EmptyHistory) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn try_undo(&mut self) -> Result<Action, GameError> {
        let action = self.history.last().ok_or(GameError::EmptyHistory)?;
        let forward = action.direction.offset();
        let player = self.grid.player_position()?;
        let current = self.grid.cell_at(player)?;
        let origin = player + action.direction.opposite().offset();
        let origin_cell = self.grid.cell_at(origin)?;

        // read everything before writing so a corrupt history leaves the grid alone
        let mut writes = vec![(origin, origin_cell.with_player())];
        if action.push {
            let crate_pos = player + forward;
            let crate_cell = self.grid.cell_at(crate_pos)?;
            writes.push((crate_pos, crate_cell.vacated()));
            writes.push((player, current.with_crate()));
        } else {
            writes.push((player, current.vacated()));
        }
        for (pos, value) in writes {
            self.grid.set_cell_at(pos, value)?;
        }

        self.history.pop();
        Ok(action)
    }

    /// Plays a LURD move string, checking every push flag against what happened.
    /// Stops at the first mismatch with the moves before it still applied.
    pub fn replay(&mut self, moves: &str) -> Result<usize, GameError> {
        let actions = HistoryLog::parse_lurd(moves)?;
        for (index, action) in actions.iter().enumerate() {
            let expected = if action.push {
                MoveOutcome::Pushed
            } else {
                MoveOutcome::Moved
            };
            let outcome = self.step(action.direction)?;
            if outcome != expected {
                if outcome != MoveOutcome::Blocked {
                    self.undo()?;
                }
                return Err(GameError::ReplayMismatch { index });
            }
        }
        Ok(actions.len())
    }
}
