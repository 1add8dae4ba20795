//! End-to-end training runs on the reference map.

mod common;

use std::fs;

use common::reference_world;
use gridnav::{
    AgentConfig, ExplorationSchedule, QLearningAgent, WorldConfig,
    grid::reference::{REFERENCE_GOAL, REFERENCE_NUM_STATES, REFERENCE_START},
    pipeline::{
        PolicyLogObserver, SuccessProbabilitySweep, TrainingConfig, TrainingPipeline,
        greedy_rollout,
    },
};

/// Deterministic run: no exploration, reliable actuators.
fn greedy_config(episodes: usize) -> TrainingConfig {
    TrainingConfig {
        episodes,
        max_steps: 1000,
        success_probability: 1.0,
        exploration: ExplorationSchedule::greedy(),
        seed: Some(0),
    }
}

fn reference_agent() -> QLearningAgent {
    QLearningAgent::new(REFERENCE_NUM_STATES, 0.1, 0.95, 0.0)
}

#[test]
fn first_greedy_episode_reaches_goal_within_budget() {
    let mut world = reference_world(0);
    let mut agent = reference_agent();

    let result = TrainingPipeline::new(greedy_config(1))
        .run(&mut world, &mut agent)
        .unwrap();

    let episode = &result.history[0];
    assert!(episode.reached_goal);
    assert!(episode.steps < 1000);
    assert_eq!(world.position(), REFERENCE_GOAL);
}

#[test]
fn greedy_policy_converges_to_shortest_path() {
    let mut world = reference_world(0);
    let mut agent = reference_agent();

    let result = TrainingPipeline::new(greedy_config(1000))
        .run(&mut world, &mut agent)
        .unwrap();
    assert_eq!(result.goals_reached, 1000);

    let rollout = greedy_rollout(&mut world, &agent, 1.0, 1000);
    assert!(rollout.reached_goal);
    // Shortest route from (0,0) to (8,8) around the walls
    assert_eq!(rollout.steps, 16);
    assert_eq!(rollout.path.first(), Some(&REFERENCE_START));
    assert_eq!(rollout.path.last(), Some(&REFERENCE_GOAL));
}

#[test]
fn training_is_reproducible_with_seed() {
    let config = TrainingConfig {
        episodes: 30,
        seed: Some(99),
        ..TrainingConfig::default()
    };

    let run = || {
        let mut world = reference_world(1);
        let mut agent = QLearningAgent::new(REFERENCE_NUM_STATES, 0.1, 0.95, 0.1);
        TrainingPipeline::new(config.clone())
            .run(&mut world, &mut agent)
            .unwrap()
    };

    let (a, b) = (run(), run());
    assert_eq!(a.steps_per_episode(), b.steps_per_episode());
    assert_eq!(a.final_policy, b.final_policy);
}

#[test]
fn policy_log_has_one_line_per_episode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("optimal_policy.txt");
    let episodes = 5;

    let mut world = reference_world(4);
    let mut agent = reference_agent();
    let result = TrainingPipeline::new(greedy_config(episodes))
        .with_observer(Box::new(PolicyLogObserver::new(&path).unwrap()))
        .run(&mut world, &mut agent)
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), episodes);

    for (i, line) in lines.iter().enumerate() {
        let prefix = format!("Episode -> {i} -> ");
        let policy = line.strip_prefix(&prefix).unwrap();
        assert_eq!(policy.len(), REFERENCE_NUM_STATES);
        assert!(policy.chars().all(|c| matches!(c, 'N' | 'S' | 'E' | 'W')));
    }
    assert_eq!(
        lines[episodes - 1],
        format!("Episode -> {} -> {}", episodes - 1, result.final_policy)
    );
}

#[test]
fn sweep_trains_one_agent_per_probability() {
    let training = TrainingConfig {
        episodes: 25,
        max_steps: 300,
        seed: Some(12),
        ..TrainingConfig::default()
    };
    let entries = SuccessProbabilitySweep::new(
        common::reference(),
        WorldConfig::new(REFERENCE_GOAL),
        AgentConfig::default(),
        training,
    )
    .with_probabilities(vec![0.3, 0.9])
    .run()
    .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].success_probability, 0.3);
    assert_eq!(entries[1].success_probability, 0.9);
    for entry in &entries {
        assert_eq!(entry.training.history.len(), 25);
        assert!(entry.training.history.iter().all(|e| e.steps <= 300));
        assert!(entry.rollout.steps <= 300);
    }
}
