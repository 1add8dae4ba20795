//! Observer pattern for training pipelines
//!
//! Observers allow composable reporting during training without coupling
//! the training loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::training::EpisodeSummary;
use crate::{
    Error, Result,
    grid::{Action, StepOutcome},
    identifiers::StateId,
    ports::Observer,
    q_learning::GreedyPolicy,
};

/// Observation of a single step during an episode
#[derive(Debug, Clone, PartialEq)]
pub struct StepObservation {
    /// Episode number
    pub episode: usize,
    /// Step number within the episode
    pub step: usize,
    /// State the action was chosen in
    pub state: StateId,
    /// Action chosen
    pub action: Action,
    /// How the environment handled the action
    pub outcome: StepOutcome,
    /// Reward received after the step
    pub reward: f64,
    /// State after the step
    pub next_state: StateId,
}

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    goals: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            goals: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary, _policy: &GreedyPolicy) -> Result<()> {
        if summary.reached_goal {
            self.goals += 1;
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(summary.episode as u64 + 1);
            pb.set_message(format!("goals: {} ε: {:.4}", self.goals, summary.epsilon));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("goals: {}", self.goals));
        }
        Ok(())
    }
}

/// Policy log observer - Appends one greedy-policy line per episode
///
/// Each line reads `Episode -> <index> -> <policy>`, where the policy is
/// one action letter per state id in id order.
pub struct PolicyLogObserver {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl PolicyLogObserver {
    /// Create the log file, truncating any previous contents
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| Error::Io {
            operation: format!("create policy log {}", path.display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Format one policy log line (without the trailing newline)
pub fn policy_log_line(episode: usize, policy: &GreedyPolicy) -> String {
    format!("Episode -> {episode} -> {policy}")
}

impl Observer for PolicyLogObserver {
    fn on_episode_end(&mut self, summary: &EpisodeSummary, policy: &GreedyPolicy) -> Result<()> {
        writeln!(self.writer, "{}", policy_log_line(summary.episode, policy)).map_err(
            |source| Error::Io {
                operation: format!("write policy log {}", self.path.display()),
                source,
            },
        )
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush().map_err(|source| Error::Io {
            operation: format!("flush policy log {}", self.path.display()),
            source,
        })
    }
}

/// Episode log observer - Emits a structured log line every `interval` episodes
pub struct EpisodeLogObserver {
    interval: usize,
}

impl EpisodeLogObserver {
    /// Log every `interval`-th episode (an interval of 0 is treated as 1)
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
        }
    }
}

impl Default for EpisodeLogObserver {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Observer for EpisodeLogObserver {
    fn on_episode_end(&mut self, summary: &EpisodeSummary, _policy: &GreedyPolicy) -> Result<()> {
        if summary.episode % self.interval == 0 {
            info!(
                episode = summary.episode,
                steps = summary.steps,
                reward = %format!("{:.2}", summary.total_reward),
                epsilon = %format!("{:.4}", summary.epsilon),
                reached_goal = summary.reached_goal,
                "episode"
            );
        }
        Ok(())
    }
}
