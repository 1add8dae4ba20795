//! Tabular Q-learning
//!
//! This module implements the learning side of the grid-world system:
//! a dense Q-table, the ε-greedy agent built on it, the per-episode ε
//! schedule, and greedy policy snapshots.
//!
//! Q-learning is off-policy TD control: every update bootstraps from the
//! best next-state value, whichever action is taken next.
//!
//! ## Usage Example
//!
//! ```
//! use gridnav::{
//!     grid::Action,
//!     identifiers::StateId,
//!     q_learning::QLearningAgent,
//! };
//!
//! let mut agent = QLearningAgent::new(
//!     146,  // num_states
//!     0.1,  // learning_rate
//!     0.95, // discount_factor
//!     0.0,  // epsilon (greedy)
//! );
//!
//! assert_eq!(agent.choose_action(StateId::new(0)), Action::North);
//! agent.update(StateId::new(0), Action::North, -0.1, StateId::new(0));
//! assert_eq!(agent.best_action(StateId::new(0)), Action::South);
//! ```

pub mod agent;
pub mod exploration;
pub mod policy;
pub mod q_table;

// Public re-exports
pub use agent::QLearningAgent;
pub use exploration::ExplorationSchedule;
pub use policy::GreedyPolicy;
pub use q_table::QTable;
