//! Configuration types for environments and agents.
//!
//! Every tunable constant of an experiment lives in one of these values.
//! They are built with `with_*` setters and checked by `validate` when a
//! world or agent is constructed.

use crate::{Error, Result, grid::Position};

/// Scalar rewards emitted by the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardModel {
    /// Reward when the agent stands on the goal
    pub goal_reward: f64,
    /// Reward for every other position
    pub step_cost: f64,
}

impl Default for RewardModel {
    fn default() -> Self {
        Self {
            goal_reward: 1.0,
            step_cost: -0.1,
        }
    }
}

/// Where `reset` places the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// Always the same free cell
    Fixed(Position),
    /// A uniformly drawn free cell other than the goal
    RandomFree,
}

impl Default for StartMode {
    fn default() -> Self {
        StartMode::Fixed(Position::new(0, 0))
    }
}

/// Configuration for creating a grid world.
///
/// # Examples
///
/// ```
/// use gridnav::config::{RewardModel, StartMode, WorldConfig};
/// use gridnav::grid::Position;
///
/// let config = WorldConfig::new(Position::new(8, 8))
///     .with_start(StartMode::Fixed(Position::new(0, 0)))
///     .with_rewards(RewardModel { goal_reward: 10.0, step_cost: -1.0 })
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub start: StartMode,
    pub goal: Position,
    pub rewards: RewardModel,
    /// Seed for the slip/start random source (None = non-deterministic)
    pub seed: Option<u64>,
}

impl WorldConfig {
    /// Create a configuration targeting `goal`, starting at (0, 0).
    pub fn new(goal: Position) -> Self {
        Self {
            start: StartMode::default(),
            goal,
            rewards: RewardModel::default(),
            seed: None,
        }
    }

    pub fn with_start(mut self, start: StartMode) -> Self {
        self.start = start;
        self
    }

    pub fn with_rewards(mut self, rewards: RewardModel) -> Self {
        self.rewards = rewards;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rewards.goal_reward.is_finite() || !self.rewards.step_cost.is_finite() {
            return Err(Error::invalid_config(format!(
                "rewards must be finite, got goal_reward={} step_cost={}",
                self.rewards.goal_reward, self.rewards.step_cost
            )));
        }
        Ok(())
    }
}

/// Configuration for creating a Q-learning agent.
///
/// Defaults are the reference hyperparameters: α = 0.1, γ = 0.95, ε = 0.1.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Learning rate α in (0, 1]
    pub learning_rate: f64,
    /// Discount factor γ in [0, 1)
    pub discount_factor: f64,
    /// Initial exploration rate ε in [0, 1]
    pub epsilon: f64,
    /// Random seed for exploration (None = non-deterministic)
    pub seed: Option<u64>,
}

impl AgentConfig {
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            learning_rate,
            discount_factor,
            ..Self::default()
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(Error::invalid_config(format!(
                "learning rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if !(0.0..1.0).contains(&self.discount_factor) {
            return Err(Error::invalid_config(format!(
                "discount factor must be in [0, 1), got {}",
                self.discount_factor
            )));
        }
        check_probability("epsilon", self.epsilon)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.95,
            epsilon: 0.1,
            seed: None,
        }
    }
}

pub(crate) fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_config(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}
