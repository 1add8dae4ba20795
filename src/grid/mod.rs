//! Grid-world environment
//!
//! This module provides:
//! - The closed four-member action set
//! - Grid layouts with state ids derived from the wall layout
//! - The stochastic `GridWorld` environment
//! - The reference 12x15 map

pub mod action;
pub mod layout;
pub mod reference;
pub mod world;

pub use action::{Action, NUM_ACTIONS};
pub use layout::{Cell, GridLayout, Position};
pub use world::{GridWorld, StepOutcome};
