//! Reference grid-navigation experiment
//!
//! Trains a Q-learning agent on the 12x15 reference map, writes the
//! per-episode greedy policy to `optimal_policy.txt`, prints the learned
//! policy, and compares training across actuator success probabilities.
//!
//! Logging verbosity follows `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use gridnav::{
    AgentConfig, QLearningAgent, WorldConfig,
    grid::{
        GridWorld,
        reference::{REFERENCE_GOAL, REFERENCE_START, reference_layout},
    },
    output::{
        format_number, format_path, print_kv, print_section, print_subsection, print_sweep_table,
    },
    pipeline::{
        EpisodeLogObserver, PolicyLogObserver, ProgressObserver, SuccessProbabilitySweep,
        TrainingConfig, TrainingPipeline, greedy_rollout,
    },
};
use tracing_subscriber::EnvFilter;

const POLICY_LOG_PATH: &str = "optimal_policy.txt";
const LOG_INTERVAL: usize = 1000;
const SWEEP_EPISODES: usize = 2000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let layout = reference_layout().context("failed to build reference map")?;
    let world_config = WorldConfig::new(REFERENCE_GOAL);
    let agent_config = AgentConfig::default();
    let training = TrainingConfig::default();

    print_section("Grid navigation with Q-learning");
    print_kv("Map", &format!("{}x{}", layout.rows(), layout.cols()));
    print_kv("States", &layout.num_states().to_string());
    print_kv("Start", &REFERENCE_START.to_string());
    print_kv("Goal", &REFERENCE_GOAL.to_string());
    print_kv("Episodes", &format_number(training.episodes));
    print_kv("Success prob.", &format!("{:.2}", training.success_probability));

    let mut world = GridWorld::new(layout.clone(), world_config.clone())
        .context("failed to create grid world")?;
    let mut agent = QLearningAgent::from_config(world.num_states(), &agent_config)
        .context("invalid agent configuration")?;
    let policy_log = PolicyLogObserver::new(POLICY_LOG_PATH)
        .with_context(|| format!("failed to open {POLICY_LOG_PATH}"))?;

    let mut pipeline = TrainingPipeline::new(training.clone())
        .with_observer(Box::new(ProgressObserver::new()))
        .with_observer(Box::new(EpisodeLogObserver::new(LOG_INTERVAL)))
        .with_observer(Box::new(policy_log));
    let result = pipeline
        .run(&mut world, &mut agent)
        .context("training failed")?;

    print_subsection("Training summary");
    print_kv(
        "Goals reached",
        &format!(
            "{} ({:.1}%)",
            format_number(result.goals_reached),
            result.success_rate * 100.0
        ),
    );
    print_kv("Mean steps", &format!("{:.1}", result.mean_steps));
    print_kv("Mean reward", &format!("{:.3}", result.mean_reward));
    print_kv("Final ε", &format!("{:.3e}", result.final_epsilon));
    print_kv("Policy log", POLICY_LOG_PATH);

    let rollout = greedy_rollout(&mut world, &agent, 1.0, training.max_steps);
    print_subsection("Greedy rollout (reliable actuators)");
    if rollout.reached_goal {
        print_kv("Steps", &rollout.steps.to_string());
    } else {
        print_kv("Steps", &format!("{} (goal not reached)", rollout.steps));
    }
    println!("  {}", format_path(&rollout.path));

    print_subsection("Learned policy");
    println!("{}", result.final_policy.render(world.layout(), world.goal()));

    print_section("Success probability comparison");
    let sweep_training = TrainingConfig {
        episodes: SWEEP_EPISODES,
        ..training
    };
    let entries = SuccessProbabilitySweep::new(layout, world_config, agent_config, sweep_training)
        .run()
        .context("success probability sweep failed")?;
    print_sweep_table(&entries);

    Ok(())
}
