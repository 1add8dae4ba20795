//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events,
//! allowing composable reporting without coupling the training loop to
//! specific output formats.

use crate::{
    Result,
    pipeline::{observers::StepObservation, training::EpisodeSummary},
    q_learning::GreedyPolicy,
};

/// Observer trait for monitoring training
///
/// Observers can be composed to collect different data during training:
/// - Progress bars for user feedback
/// - The per-episode policy log
/// - Structured log lines
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(...)` - For each step, after the value update
///    - `on_episode_end(summary, policy)` - After ε has been decayed
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use gridnav::{
///     pipeline::EpisodeSummary,
///     ports::Observer,
///     q_learning::GreedyPolicy,
/// };
///
/// struct GoalCounter {
///     goals: usize,
/// }
///
/// impl Observer for GoalCounter {
///     fn on_episode_end(
///         &mut self,
///         summary: &EpisodeSummary,
///         _policy: &GreedyPolicy,
///     ) -> gridnav::Result<()> {
///         if summary.reached_goal {
///             self.goals += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts.
    ///
    /// # Parameters
    ///
    /// * `total_episodes` - Number of episodes that will be run
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode starts, before the world is reset.
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each step of an episode.
    fn on_step(&mut self, _step: &StepObservation) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends.
    ///
    /// # Parameters
    ///
    /// * `summary` - Steps, return and ε of the finished episode
    /// * `policy` - Greedy policy after the episode's updates
    fn on_episode_end(&mut self, _summary: &EpisodeSummary, _policy: &GreedyPolicy) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// Use this to flush outputs or display summaries.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
