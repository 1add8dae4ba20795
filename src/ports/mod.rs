//! Ports (trait boundaries) for external collaborators.
//!
//! The training loop reports progress through these traits, keeping the
//! environment and agent free of any output concerns.

pub mod observer;

pub use observer::Observer;
