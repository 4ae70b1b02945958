use log::{info, warn};

use crate::core::{GameError, GridState, LevelStore};

/// Owns the level catalog and the level currently being played.
///
/// Level changes build the new `GridState` first and only then replace the
/// old one, so a failed change leaves the running level as it was.
pub struct Session {
    store: LevelStore,
    state: GridState,
}

impl Session {
    pub fn new(store: LevelStore, level: u32) -> Result<Session, GameError> {
        let state = GridState::new(&store, level)?;
        Ok(Session { store, state })
    }

    pub fn store(&self) -> &LevelStore {
        &self.store
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GridState {
        &mut self.state
    }

    pub fn level(&self) -> u32 {
        self.state.level()
    }

    pub fn start_level(&mut self, level: u32) -> Result<(), GameError> {
        match GridState::new(&self.store, level) {
            Ok(state) => {
                self.state = state;
                Ok(())
            }
            Err(e) => {
                warn!("could not start level {}: {}", level, e);
                Err(e)
            }
        }
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        self.start_level(self.level())
    }

    pub fn next_level(&self) -> Option<u32> {
        let level = self.level();
        self.store.has_next(level).then(|| level + 1)
    }

    /// Goes to the next level, or back to the first one after the last.
    pub fn advance(&mut self) -> Result<u32, GameError> {
        let level = match self.next_level() {
            Some(next) => next,
            None => {
                info!("level {} was the last one, wrapping around", self.level());
                self.store.first_level()
            }
        };
        self.start_level(level)?;
        Ok(level)
    }
}
