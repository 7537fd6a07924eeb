//! Undo/redo over store states.

use crate::catalog::Catalog;
use crate::error::CartRejection;
use crate::store::{Action, StoreState};

/// Owns the current [`StoreState`] plus the states before and after it.
///
/// Only actions that change the state are recorded, so undo never steps
/// over a no-op.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<StoreState>,
    present: StoreState,
    future: Vec<StoreState>,
}

impl History {
    pub fn new(initial: StoreState) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: Vec::new(),
        }
    }

    /// The current state.
    pub fn current(&self) -> &StoreState {
        &self.present
    }

    /// Apply an action to the current state.
    ///
    /// A rejected action leaves the history as it was and returns the reason.
    /// Returns `Ok(false)` when the action applied but changed nothing.
    pub fn dispatch(&mut self, catalog: &Catalog, action: &Action) -> Result<bool, CartRejection> {
        let next = self.present.try_reduce(catalog, action)?;
        if next == self.present {
            return Ok(false);
        }
        self.past.push(std::mem::replace(&mut self.present, next));
        self.future.clear();
        Ok(true)
    }

    /// Step back one state. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                self.future.push(std::mem::replace(&mut self.present, previous));
                true
            }
            None => false,
        }
    }

    /// Step forward one undone state. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                self.past.push(std::mem::replace(&mut self.present, next));
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Consume the history, keeping only the current state.
    pub fn into_current(self) -> StoreState {
        self.present
    }
}
