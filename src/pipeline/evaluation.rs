//! Greedy policy evaluation

use rand::Rng;

use crate::{
    grid::{GridWorld, Position},
    q_learning::QLearningAgent,
};

/// Trace of one greedy episode
#[derive(Debug, Clone, PartialEq)]
pub struct Rollout {
    /// Whether the goal was reached within the step budget
    pub reached_goal: bool,
    /// Steps taken
    pub steps: usize,
    /// Sum of rewards received
    pub total_reward: f64,
    /// Positions visited, starting with the start cell
    pub path: Vec<Position>,
}

/// Follow the agent's greedy policy from a reset without learning.
///
/// Stops on the goal or after `max_steps` steps. The agent is only read,
/// so its value table and ε are untouched.
pub fn greedy_rollout<R: Rng>(
    world: &mut GridWorld<R>,
    agent: &QLearningAgent,
    success_probability: f64,
    max_steps: usize,
) -> Rollout {
    let mut state = world.reset();
    let mut path = vec![world.position()];
    let mut total_reward = 0.0;
    let mut steps = 0;

    while steps < max_steps && !world.is_goal() {
        state = world.step(agent.best_action(state), success_probability);
        total_reward += world.reward();
        steps += 1;
        path.push(world.position());
    }

    Rollout {
        reached_goal: world.is_goal(),
        steps,
        total_reward,
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::WorldConfig,
        grid::{Action, GridLayout},
    };

    #[test]
    fn test_rollout_follows_greedy_actions() {
        let layout = GridLayout::from_rows(&["..."]).unwrap();
        let mut world = GridWorld::new(layout, WorldConfig::new(Position::new(0, 2))).unwrap();
        let mut agent = QLearningAgent::new(3, 0.5, 0.9, 0.0);
        for i in 0..2 {
            let state = crate::identifiers::StateId::new(i);
            agent.update(state, Action::East, 1.0, state);
        }

        let rollout = greedy_rollout(&mut world, &agent, 1.0, 10);
        assert!(rollout.reached_goal);
        assert_eq!(rollout.steps, 2);
        assert_eq!(
            rollout.path,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
        assert!((rollout.total_reward - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_rollout_stops_at_budget() {
        let layout = GridLayout::from_rows(&["...", "..."]).unwrap();
        let mut world = GridWorld::new(layout, WorldConfig::new(Position::new(1, 2))).unwrap();
        // Zero table: always North, which is blocked at row 0
        let agent = QLearningAgent::new(6, 0.1, 0.95, 0.0);

        let rollout = greedy_rollout(&mut world, &agent, 1.0, 25);
        assert!(!rollout.reached_goal);
        assert_eq!(rollout.steps, 25);
        assert_eq!(rollout.path.len(), 26);
        assert!(rollout.path.iter().all(|&p| p == Position::new(0, 0)));
    }
}
