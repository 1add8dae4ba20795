//! Geometric ε decay schedule

use crate::{Result, config::check_probability};

/// Per-episode exploration schedule.
///
/// Episode `k` explores with ε_k = max(initial · decay^k, min). The
/// schedule is a plain value: the training loop asks it for each
/// episode's ε and hands that to the agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorationSchedule {
    pub initial_epsilon: f64,
    /// Multiplicative factor applied after every episode
    pub decay: f64,
    /// Floor for ε
    pub min_epsilon: f64,
}

impl ExplorationSchedule {
    pub fn new(initial_epsilon: f64, decay: f64, min_epsilon: f64) -> Self {
        Self {
            initial_epsilon,
            decay,
            min_epsilon,
        }
    }

    /// Schedule that never explores.
    pub fn greedy() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Schedule holding ε fixed.
    pub fn constant(epsilon: f64) -> Self {
        Self::new(epsilon, 1.0, epsilon)
    }

    /// ε following `epsilon` after one episode.
    pub fn next(&self, epsilon: f64) -> f64 {
        (epsilon * self.decay).max(self.min_epsilon)
    }

    /// ε for episode `episode` (0-based).
    pub fn epsilon_at(&self, episode: usize) -> f64 {
        (0..episode).fold(self.initial_epsilon.max(self.min_epsilon), |eps, _| {
            self.next(eps)
        })
    }

    /// Iterator over ε for episodes 0, 1, 2, ...
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::successors(Some(self.initial_epsilon.max(self.min_epsilon)), |&eps| {
            Some(self.next(eps))
        })
    }

    pub fn validate(&self) -> Result<()> {
        check_probability("initial epsilon", self.initial_epsilon)?;
        check_probability("epsilon decay", self.decay)?;
        check_probability("minimum epsilon", self.min_epsilon)
    }
}

impl Default for ExplorationSchedule {
    fn default() -> Self {
        Self::new(0.1, 0.9, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometric_decay() {
        let schedule = ExplorationSchedule::default();
        assert_eq!(schedule.epsilon_at(0), 0.1);
        assert!((schedule.epsilon_at(1) - 0.09).abs() < 1e-12);
        assert!((schedule.epsilon_at(3) - 0.1 * 0.9_f64.powi(3)).abs() < 1e-12);
    }

    #[test]
    fn test_decay_respects_floor() {
        let schedule = ExplorationSchedule::new(0.5, 0.5, 0.2);
        let values: Vec<f64> = schedule.iter().take(4).collect();
        assert_eq!(values, vec![0.5, 0.25, 0.2, 0.2]);
        assert_eq!(schedule.epsilon_at(10), 0.2);
    }

    #[test]
    fn test_iter_matches_epsilon_at() {
        let schedule = ExplorationSchedule::new(0.3, 0.95, 0.01);
        for (k, eps) in schedule.iter().take(50).enumerate() {
            assert_eq!(eps, schedule.epsilon_at(k));
        }
    }

    #[test]
    fn test_greedy_and_constant() {
        assert_eq!(ExplorationSchedule::greedy().epsilon_at(5), 0.0);
        assert_eq!(ExplorationSchedule::constant(0.2).epsilon_at(5), 0.2);
    }

    #[test]
    fn test_validate() {
        assert!(ExplorationSchedule::default().validate().is_ok());
        assert!(ExplorationSchedule::new(1.2, 0.9, 0.0).validate().is_err());
        assert!(ExplorationSchedule::new(0.1, -0.5, 0.0).validate().is_err());
    }
}
