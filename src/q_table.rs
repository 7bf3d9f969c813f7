//! Q-table implementation for tabular Q-learning.
//!
//! The table is a dense 1600x4 array of action-values, one row per grid
//! position and one column per [`Action`]. Unlike a sparse map keyed by state
//! text, the dense layout makes "fresh table" and "saved table" shapes
//! checkable, and every valid [`GridPos`] indexes it without allocation.

use crate::{
    error::{Error, Result},
    grid::{Action, GridPos, STATE_COUNT},
};

/// Hyperparameters for the one-step Q-learning update.
#[derive(Debug, Clone, Copy)]
pub struct LearningParams {
    /// Learning rate α: how much new information overrides old.
    pub alpha: f64,
    /// Discount factor γ: how strongly future reward is valued.
    pub gamma: f64,
}

/// Dense Q-value table over all grid states and actions.
///
/// Dimensions are fixed for the table's lifetime; a freshly created table is
/// all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    rows: Vec<[f64; Action::COUNT]>,
}

impl QTable {
    /// Create a zero-initialized 1600x4 table.
    pub fn new() -> Self {
        Self {
            rows: vec![[0.0; Action::COUNT]; STATE_COUNT],
        }
    }

    /// Rebuild a table from previously saved rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableShape`] if the row count is not 1600.
    pub fn from_rows(rows: Vec<[f64; Action::COUNT]>) -> Result<Self> {
        if rows.len() != STATE_COUNT {
            return Err(Error::TableShape {
                rows: rows.len(),
                expected: STATE_COUNT,
            });
        }
        Ok(Self { rows })
    }

    /// Borrow the raw rows, for persistence.
    pub fn rows(&self) -> &[[f64; Action::COUNT]] {
        &self.rows
    }

    /// Q-value for a state-action pair.
    pub fn get(&self, state: GridPos, action: Action) -> f64 {
        self.rows[state.index()][action.index()]
    }

    /// Overwrite the Q-value for a state-action pair.
    pub fn set(&mut self, state: GridPos, action: Action, value: f64) {
        self.rows[state.index()][action.index()] = value;
    }

    /// The full action-value row for a state.
    pub fn row(&self, state: GridPos) -> &[f64; Action::COUNT] {
        &self.rows[state.index()]
    }

    /// Maximum action-value in a state's row, used by the Bellman update.
    pub fn row_max(&self, state: GridPos) -> f64 {
        self.rows[state.index()]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// One-step Q-learning update (off-policy TD control).
    ///
    /// Q(s,a) ← (1-α)·Q(s,a) + α·(r + γ·max_a' Q(s',a'))
    pub fn q_learning_update(
        &mut self,
        state: GridPos,
        action: Action,
        reward: f64,
        next_state: GridPos,
        params: LearningParams,
    ) {
        let old_q = self.get(state, action);
        let max_next_q = self.row_max(next_state);
        let new_q = (1.0 - params.alpha) * old_q + params.alpha * (reward + params.gamma * max_next_q);
        self.set(state, action, new_q);
    }
}

impl Default for QTable {
    fn default() -> Self {
        Self::new()
    }
}
