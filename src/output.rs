//! Output formatting for terminal summaries

use crate::{grid::Position, pipeline::SweepEntry};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a path as `(r, c) -> (r, c) -> ...`
pub fn format_path(path: &[Position]) -> String {
    path.iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Print one row per sweep entry
pub fn print_sweep_table(entries: &[SweepEntry]) {
    println!(
        "  {:>6} {:>10} {:>12} {:>12} {:>10}",
        "p", "goals", "mean steps", "mean reward", "greedy"
    );
    for entry in entries {
        let greedy = if entry.rollout.reached_goal {
            format!("{} steps", entry.rollout.steps)
        } else {
            "no goal".to_string()
        };
        println!(
            "  {:>6.2} {:>10} {:>12.1} {:>12.3} {:>10}",
            entry.success_probability,
            format_number(entry.training.goals_reached),
            entry.training.mean_steps,
            entry.training.mean_reward,
            greedy
        );
    }
}
