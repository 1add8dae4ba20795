//! Q-table implementation for temporal difference learning

use crate::{
    grid::{Action, NUM_ACTIONS},
    identifiers::StateId,
    utils::{argmax_first, max_value},
};

/// Dense Q-table mapping (state id, action) pairs to Q-values
///
/// One row per state id, one column per action. All entries start at
/// zero and are never clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    /// Q-values indexed by state id, then action index
    q_values: Vec<[f64; NUM_ACTIONS]>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a zeroed Q-table for `num_states` states
    pub fn new(num_states: usize, learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            q_values: vec![[0.0; NUM_ACTIONS]; num_states],
            learning_rate,
            discount_factor,
        }
    }

    /// Q-values of every action in a state
    ///
    /// # Panics
    ///
    /// Panics if `state` is not a valid id for this table.
    pub fn row(&self, state: StateId) -> &[f64; NUM_ACTIONS] {
        self.check(state);
        &self.q_values[state.index()]
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: StateId, action: Action) -> f64 {
        self.row(state)[action.index()]
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: StateId, action: Action, value: f64) {
        self.check(state);
        self.q_values[state.index()][action.index()] = value;
    }

    /// Maximum Q-value over all actions in a state
    pub fn max_q(&self, state: StateId) -> f64 {
        max_value(self.row(state))
    }

    /// Greedy action; ties go to the lowest action index
    pub fn greedy_action(&self, state: StateId) -> Action {
        let index = argmax_first(self.row(state));
        Action::ALL[index]
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← (1 − α)·Q(s,a) + α·(r + γ·max_a' Q(s',a'))
    pub fn q_learning_update(
        &mut self,
        state: StateId,
        action: Action,
        reward: f64,
        next_state: StateId,
    ) {
        let max_next_q = self.max_q(next_state);
        let current_q = self.get(state, action);
        let td_target = reward + self.discount_factor * max_next_q;
        let new_q = (1.0 - self.learning_rate) * current_q + self.learning_rate * td_target;
        self.set(state, action, new_q);
    }

    /// Zero every entry
    pub fn reset(&mut self) {
        self.q_values.fill([0.0; NUM_ACTIONS]);
    }

    /// Number of state rows
    pub fn num_states(&self) -> usize {
        self.q_values.len()
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    fn check(&self, state: StateId) {
        assert!(
            state.index() < self.q_values.len(),
            "state id {state} out of range for Q-table with {} states",
            self.q_values.len()
        );
    }
}
