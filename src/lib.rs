//! Tabular Q-learning for grid-world navigation
//!
//! This crate provides:
//! - A stochastic grid world with walls, a goal and unreliable actuators
//! - A Q-learning agent with ε-greedy exploration
//! - A training pipeline with observers and a per-episode policy log
//! - Greedy evaluation and success-probability sweeps

pub mod config;
pub mod error;
pub mod grid;
pub mod identifiers;
pub mod output;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod utils;

pub use config::{AgentConfig, RewardModel, StartMode, WorldConfig};
pub use error::{Error, Result};
pub use grid::{Action, Cell, GridLayout, GridWorld, Position, StepOutcome};
pub use identifiers::StateId;
pub use q_learning::{ExplorationSchedule, GreedyPolicy, QLearningAgent, QTable};
