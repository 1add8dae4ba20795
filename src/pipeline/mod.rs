//! Training and evaluation pipeline
//!
//! This module provides composable pipelines for:
//! - Training an agent over episodes with an ε schedule
//! - Evaluating the learned greedy policy
//! - Comparing runs across success probabilities
//! - Recording observations during training

pub mod evaluation;
pub mod observers;
pub mod sweep;
pub mod training;

pub use evaluation::{Rollout, greedy_rollout};
// Re-export observer implementations (adapters)
pub use observers::{
    EpisodeLogObserver, PolicyLogObserver, ProgressObserver, StepObservation, policy_log_line,
};
pub use sweep::{REFERENCE_SUCCESS_PROBABILITIES, SuccessProbabilitySweep, SweepEntry};
pub use training::{EpisodeSummary, TrainingConfig, TrainingPipeline, TrainingResult};

// Re-export ports (trait definitions)
pub use crate::ports::Observer;
