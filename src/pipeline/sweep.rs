//! Comparison of training runs across actuator reliabilities
//!
//! Trains a fresh world/agent pair per success probability so runs do not
//! share learned values, then evaluates each greedy policy.

use tracing::info;

use super::{
    evaluation::{Rollout, greedy_rollout},
    training::{TrainingConfig, TrainingPipeline, TrainingResult},
};
use crate::{
    Result,
    config::{AgentConfig, WorldConfig},
    grid::{GridLayout, GridWorld},
    q_learning::QLearningAgent,
};

/// Success probabilities compared by the reference experiment
pub const REFERENCE_SUCCESS_PROBABILITIES: [f64; 3] = [0.3, 0.7, 0.9];

/// Result of one run in a sweep
#[derive(Debug, Clone)]
pub struct SweepEntry {
    pub success_probability: f64,
    pub training: TrainingResult,
    /// Greedy rollout after training, under the same success probability
    pub rollout: Rollout,
}

/// Train one agent per success probability on the same map
pub struct SuccessProbabilitySweep {
    layout: GridLayout,
    world: WorldConfig,
    agent: AgentConfig,
    training: TrainingConfig,
    probabilities: Vec<f64>,
}

impl SuccessProbabilitySweep {
    /// Create a sweep over [`REFERENCE_SUCCESS_PROBABILITIES`]
    ///
    /// `training.success_probability` is replaced per run.
    pub fn new(
        layout: GridLayout,
        world: WorldConfig,
        agent: AgentConfig,
        training: TrainingConfig,
    ) -> Self {
        Self {
            layout,
            world,
            agent,
            training,
            probabilities: REFERENCE_SUCCESS_PROBABILITIES.to_vec(),
        }
    }

    pub fn with_probabilities(mut self, probabilities: Vec<f64>) -> Self {
        self.probabilities = probabilities;
        self
    }

    /// Run every configured probability in order
    pub fn run(&self) -> Result<Vec<SweepEntry>> {
        self.probabilities
            .iter()
            .map(|&p| self.run_one(p))
            .collect()
    }

    fn run_one(&self, success_probability: f64) -> Result<SweepEntry> {
        let mut world = GridWorld::new(self.layout.clone(), self.world.clone())?;
        let mut agent = QLearningAgent::from_config(world.num_states(), &self.agent)?;
        let config = TrainingConfig {
            success_probability,
            ..self.training.clone()
        };
        let max_steps = config.max_steps;

        let training = TrainingPipeline::new(config).run(&mut world, &mut agent)?;
        let rollout = greedy_rollout(&mut world, &agent, success_probability, max_steps);

        info!(
            success_probability,
            goals_reached = training.goals_reached,
            mean_steps = training.mean_steps,
            rollout_steps = rollout.steps,
            rollout_reached_goal = rollout.reached_goal,
            "sweep run finished"
        );

        Ok(SweepEntry {
            success_probability,
            training,
            rollout,
        })
    }
}
