//! Q-learning agent
//!
//! Tabular policy over the grid world's state ids: ε-greedy action
//! selection and the off-policy TD update.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Result,
    config::AgentConfig,
    grid::{Action, NUM_ACTIONS},
    identifiers::StateId,
    q_learning::{policy::GreedyPolicy, q_table::QTable},
    utils::build_rng,
};

/// Q-learning agent (off-policy TD control)
///
/// Learns the optimal Q* function by always updating toward the maximum
/// next-state value, regardless of the action actually taken next.
///
/// ε is external state: the training loop sets it once per episode.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    epsilon: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create a Q-learning agent for `num_states` states
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - α parameter (0.0 to 1.0)
    /// * `discount_factor` - γ parameter (0.0 to 1.0)
    /// * `epsilon` - Initial exploration rate
    pub fn new(num_states: usize, learning_rate: f64, discount_factor: f64, epsilon: f64) -> Self {
        Self {
            q_table: QTable::new(num_states, learning_rate, discount_factor),
            epsilon,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    /// Create an agent from a validated configuration.
    pub fn from_config(num_states: usize, config: &AgentConfig) -> Result<Self> {
        config.validate()?;
        let agent = Self::new(
            num_states,
            config.learning_rate,
            config.discount_factor,
            config.epsilon,
        );
        Ok(match config.seed {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.set_rng_seed(seed);
        self
    }

    /// Reseed the exploration random source.
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
    }

    /// ε-greedy action selection
    ///
    /// Explores a uniformly random action with probability ε, otherwise
    /// exploits the greedy action.
    pub fn choose_action(&mut self, state: StateId) -> Action {
        if self.rng.random::<f64>() < self.epsilon {
            // Explore: random action
            Action::ALL[self.rng.random_range(0..NUM_ACTIONS)]
        } else {
            // Exploit: greedy action based on Q-values
            self.best_action(state)
        }
    }

    /// Greedy action for `state`; ties go to the lowest action index.
    pub fn best_action(&self, state: StateId) -> Action {
        self.q_table.greedy_action(state)
    }

    /// Apply one temporal-difference update for an observed transition.
    ///
    /// # Panics
    ///
    /// Panics if `state` or `next_state` is outside the table.
    pub fn update(&mut self, state: StateId, action: Action, reward: f64, next_state: StateId) {
        self.q_table
            .q_learning_update(state, action, reward, next_state);
    }

    /// Greedy action of every state, in state-id order.
    pub fn greedy_policy(&self) -> GreedyPolicy {
        GreedyPolicy::new(
            (0..self.q_table.num_states())
                .map(|i| self.best_action(StateId::new(i)))
                .collect(),
        )
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Set the exploration rate.
    ///
    /// # Panics
    ///
    /// Panics if `epsilon` is outside `[0, 1]`.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        assert!(
            (0.0..=1.0).contains(&epsilon),
            "epsilon must be in [0, 1], got {epsilon}"
        );
        self.epsilon = epsilon;
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn num_states(&self) -> usize {
        self.q_table.num_states()
    }

    /// Forget everything learned and restart the random source.
    pub fn reset(&mut self) {
        self.q_table.reset();
        self.rng = build_rng(self.rng_seed);
    }
}
