//! Training pipeline for the Q-learning agent

use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::observers::StepObservation;
use crate::{
    Error, Result,
    config::check_probability,
    grid::GridWorld,
    ports::Observer,
    q_learning::{ExplorationSchedule, GreedyPolicy, QLearningAgent},
};

/// Training configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    /// Number of training episodes
    pub episodes: usize,

    /// Step budget per episode
    pub max_steps: usize,

    /// Probability that a chosen action is executed
    pub success_probability: f64,

    /// Per-episode ε schedule
    pub exploration: ExplorationSchedule,

    /// Random seed; reseeds the world with `seed` and the agent with `seed + 1`
    pub seed: Option<u64>,
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(Error::invalid_config("max_steps must be positive"));
        }
        check_probability("success probability", self.success_probability)?;
        self.exploration.validate()
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            max_steps: 1000,
            success_probability: 0.95,
            exploration: ExplorationSchedule::default(),
            seed: None,
        }
    }
}

/// Outcome of a single training episode
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeSummary {
    /// Episode index (0-based)
    pub episode: usize,
    /// Steps taken, at most the step budget
    pub steps: usize,
    /// Sum of rewards received
    pub total_reward: f64,
    /// ε used throughout the episode
    pub epsilon: f64,
    /// Whether the episode ended on the goal
    pub reached_goal: bool,
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingResult {
    /// Total episodes run
    pub total_episodes: usize,

    /// Episodes that reached the goal
    pub goals_reached: usize,

    /// Fraction of episodes that reached the goal
    pub success_rate: f64,

    /// Mean steps per episode
    pub mean_steps: f64,

    /// Mean total reward per episode
    pub mean_reward: f64,

    /// ε after the final decay
    pub final_epsilon: f64,

    /// Greedy policy at the end of training
    pub final_policy: GreedyPolicy,

    /// Per-episode summaries in order
    pub history: Vec<EpisodeSummary>,
}

impl TrainingResult {
    /// Aggregate a finished run
    pub fn new(history: Vec<EpisodeSummary>, final_epsilon: f64, final_policy: GreedyPolicy) -> Self {
        let total_episodes = history.len();
        let goals_reached = history.iter().filter(|e| e.reached_goal).count();
        let mean = |sum: f64| {
            if total_episodes > 0 {
                sum / total_episodes as f64
            } else {
                0.0
            }
        };

        Self {
            total_episodes,
            goals_reached,
            success_rate: mean(goals_reached as f64),
            mean_steps: mean(history.iter().map(|e| e.steps as f64).sum()),
            mean_reward: mean(history.iter().map(|e| e.total_reward).sum()),
            final_epsilon,
            final_policy,
            history,
        }
    }

    /// Steps per episode, in episode order
    pub fn steps_per_episode(&self) -> Vec<usize> {
        self.history.iter().map(|e| e.steps).collect()
    }

    /// Total reward per episode, in episode order
    pub fn rewards_per_episode(&self) -> Vec<f64> {
        self.history.iter().map(|e| e.total_reward).collect()
    }
}

/// Training loop driving one agent through episodes of one world
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run every configured episode
    ///
    /// Each episode resets the world, sets the agent's ε from the
    /// schedule, and alternates action choice, environment step and value
    /// update until the goal is reached or the step budget runs out.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration, when the agent's table does not
    /// match the world's state count, or when an observer fails.
    pub fn run<R: Rng + SeedableRng>(
        &mut self,
        world: &mut GridWorld<R>,
        agent: &mut QLearningAgent,
    ) -> Result<TrainingResult> {
        self.config.validate()?;
        if agent.num_states() != world.num_states() {
            return Err(Error::invalid_config(format!(
                "agent has {} states but the world has {}",
                agent.num_states(),
                world.num_states()
            )));
        }

        if let Some(seed) = self.config.seed {
            world.set_rng_seed(seed);
            agent.set_rng_seed(seed.wrapping_add(1));
        }

        info!(
            episodes = self.config.episodes,
            max_steps = self.config.max_steps,
            success_probability = self.config.success_probability,
            states = world.num_states(),
            "starting training"
        );

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut history = Vec::with_capacity(self.config.episodes);
        let mut epsilon = self.config.exploration.epsilon_at(0);

        for episode in 0..self.config.episodes {
            agent.set_epsilon(epsilon);

            for observer in &mut self.observers {
                observer.on_episode_start(episode)?;
            }

            let summary = self.run_episode(episode, world, agent)?;
            epsilon = self.config.exploration.next(epsilon);

            debug!(
                episode,
                steps = summary.steps,
                total_reward = summary.total_reward,
                epsilon = summary.epsilon,
                reached_goal = summary.reached_goal,
                "episode finished"
            );

            if !self.observers.is_empty() {
                let policy = agent.greedy_policy();
                for observer in &mut self.observers {
                    observer.on_episode_end(&summary, &policy)?;
                }
            }

            history.push(summary);
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::new(history, epsilon, agent.greedy_policy());
        info!(
            episodes = result.total_episodes,
            goals_reached = result.goals_reached,
            mean_steps = result.mean_steps,
            "training finished"
        );
        Ok(result)
    }

    fn run_episode<R: Rng>(
        &mut self,
        episode: usize,
        world: &mut GridWorld<R>,
        agent: &mut QLearningAgent,
    ) -> Result<EpisodeSummary> {
        let mut state = world.reset();
        let mut total_reward = 0.0;
        let mut steps = 0;

        for step in 0..self.config.max_steps {
            let action = agent.choose_action(state);
            let (next_state, outcome) =
                world.step_with_outcome(action, self.config.success_probability);
            let reward = world.reward();
            agent.update(state, action, reward, next_state);

            total_reward += reward;
            steps += 1;

            if !self.observers.is_empty() {
                let observation = StepObservation {
                    episode,
                    step,
                    state,
                    action,
                    outcome,
                    reward,
                    next_state,
                };
                for observer in &mut self.observers {
                    observer.on_step(&observation)?;
                }
            }

            state = next_state;
            if world.is_goal() {
                break;
            }
        }

        Ok(EpisodeSummary {
            episode,
            steps,
            total_reward,
            epsilon: agent.epsilon(),
            reached_goal: world.is_goal(),
        })
    }
}
