//! Stochastic grid-world environment

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    action::Action,
    layout::{GridLayout, Position},
};
use crate::{
    Error, Result,
    config::{RewardModel, StartMode, WorldConfig},
    identifiers::StateId,
    utils::build_rng,
};

/// Why a step left the agent where it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The action was executed and the agent moved one cell
    Moved,
    /// The action was executed but the target was a wall or off the grid
    Blocked,
    /// The actuator failed and the action was not executed
    Slipped,
}

impl StepOutcome {
    /// Whether the agent's position changed.
    pub fn moved(self) -> bool {
        self == StepOutcome::Moved
    }
}

/// Grid world with stochastic action execution.
///
/// Owns the layout, the goal, and the agent's position. The position is
/// always an in-bounds free cell; it changes only through `reset` and
/// successful moves in `step`.
///
/// The random source deciding slips (and random starts) is injected, so a
/// seeded or hand-written generator makes every transition reproducible.
#[derive(Debug, Clone)]
pub struct GridWorld<R: Rng = StdRng> {
    layout: GridLayout,
    goal: Position,
    rewards: RewardModel,
    start: StartMode,
    /// Free non-goal cells, populated for `StartMode::RandomFree`
    start_candidates: Vec<Position>,
    position: Position,
    state: StateId,
    rng: R,
}

impl GridWorld<StdRng> {
    /// Create a world using the crate's default random source.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, or the goal or fixed start
    /// is out of bounds or on a wall.
    pub fn new(layout: GridLayout, config: WorldConfig) -> Result<Self> {
        let rng = build_rng(config.seed);
        Self::with_rng(layout, config, rng)
    }
}

impl<R: Rng> GridWorld<R> {
    /// Create a world drawing randomness from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the generator's state.
    pub fn with_rng(layout: GridLayout, config: WorldConfig, rng: R) -> Result<Self> {
        config.validate()?;
        layout.require_free(config.goal, "goal")?;

        let (position, start_candidates) = match config.start {
            StartMode::Fixed(start) => {
                layout.require_free(start, "start")?;
                (start, Vec::new())
            }
            StartMode::RandomFree => {
                let candidates: Vec<Position> = layout
                    .free_positions()
                    .filter(|&p| p != config.goal)
                    .collect();
                let first = candidates.first().copied().ok_or_else(|| {
                    Error::invalid_config("random start needs a free cell besides the goal")
                })?;
                (first, candidates)
            }
        };

        let state = layout
            .state_id(position)
            .ok_or_else(|| Error::invalid_config(format!("start {position} has no state id")))?;

        Ok(Self {
            layout,
            goal: config.goal,
            rewards: config.rewards,
            start: config.start,
            start_candidates,
            position,
            state,
            rng,
        })
    }

    /// Move the agent to its start cell and return the start state.
    pub fn reset(&mut self) -> StateId {
        let start = match self.start {
            StartMode::Fixed(start) => start,
            StartMode::RandomFree => {
                let i = self.rng.random_range(0..self.start_candidates.len());
                self.start_candidates[i]
            }
        };
        self.move_to(start);
        self.state
    }

    /// Attempt `action`; return the resulting state id.
    ///
    /// With probability `success_probability` the action is executed,
    /// otherwise the agent slips and stays put. An executed move into a
    /// wall or off the grid also leaves the agent in place.
    ///
    /// # Panics
    ///
    /// Panics if `success_probability` is outside `[0, 1]`.
    pub fn step(&mut self, action: Action, success_probability: f64) -> StateId {
        self.step_with_outcome(action, success_probability).0
    }

    /// Like [`GridWorld::step`], also reporting why the agent ended where it did.
    pub fn step_with_outcome(
        &mut self,
        action: Action,
        success_probability: f64,
    ) -> (StateId, StepOutcome) {
        assert!(
            (0.0..=1.0).contains(&success_probability),
            "success probability must be in [0, 1], got {success_probability}"
        );

        // u is uniform in [0, 1): probability 0 never executes, 1 always does
        let outcome = if self.rng.random::<f64>() < success_probability {
            match self.layout.neighbor(self.position, action) {
                Some(next) => {
                    self.move_to(next);
                    StepOutcome::Moved
                }
                None => StepOutcome::Blocked,
            }
        } else {
            StepOutcome::Slipped
        };

        (self.state, outcome)
    }

    /// Reward for the current position.
    pub fn reward(&self) -> f64 {
        if self.is_goal() {
            self.rewards.goal_reward
        } else {
            self.rewards.step_cost
        }
    }

    pub fn is_goal(&self) -> bool {
        self.position == self.goal
    }

    /// State id of the current position.
    pub fn state_id(&self) -> StateId {
        self.state
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn num_states(&self) -> usize {
        self.layout.num_states()
    }

    fn move_to(&mut self, position: Position) {
        // Callers only pass free cells, which always carry an id
        if let Some(state) = self.layout.state_id(position) {
            self.position = position;
            self.state = state;
        }
    }
}

impl<R: Rng + SeedableRng> GridWorld<R> {
    /// Replace the random source with one seeded from `seed`.
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor(goal: Position) -> GridWorld {
        let layout = GridLayout::from_rows(&["....", ".#..", "...."]).unwrap();
        GridWorld::new(layout, WorldConfig::new(goal).with_seed(3)).unwrap()
    }

    #[test]
    fn test_reset_returns_start_state() {
        let mut world = corridor(Position::new(2, 3));
        assert_eq!(world.reset(), StateId::new(0));
        assert_eq!(world.position(), Position::new(0, 0));
        // Idempotent
        assert_eq!(world.reset(), StateId::new(0));
    }

    #[test]
    fn test_certain_step_moves_and_updates_state() {
        let mut world = corridor(Position::new(2, 3));
        world.reset();
        let (state, outcome) = world.step_with_outcome(Action::East, 1.0);
        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(world.position(), Position::new(0, 1));
        assert_eq!(state, StateId::new(1));
    }

    #[test]
    fn test_wall_blocks_move() {
        let mut world = corridor(Position::new(2, 3));
        world.reset();
        world.step(Action::East, 1.0);
        let (state, outcome) = world.step_with_outcome(Action::South, 1.0);
        assert_eq!(outcome, StepOutcome::Blocked);
        assert_eq!(world.position(), Position::new(0, 1));
        assert_eq!(state, StateId::new(1));
    }

    #[test]
    fn test_zero_probability_always_slips() {
        let mut world = corridor(Position::new(2, 3));
        world.reset();
        for action in Action::ALL {
            let (state, outcome) = world.step_with_outcome(action, 0.0);
            assert_eq!(outcome, StepOutcome::Slipped);
            assert_eq!(state, StateId::new(0));
        }
    }

    #[test]
    fn test_reward_and_goal() {
        let mut world = corridor(Position::new(0, 1));
        world.reset();
        assert!(!world.is_goal());
        assert_eq!(world.reward(), -0.1);
        world.step(Action::East, 1.0);
        assert!(world.is_goal());
        assert_eq!(world.reward(), 1.0);
    }

    #[test]
    #[should_panic(expected = "success probability")]
    fn test_rejects_invalid_probability() {
        let mut world = corridor(Position::new(2, 3));
        world.step(Action::East, 1.5);
    }

    #[test]
    fn test_construction_rejects_goal_on_wall() {
        let layout = GridLayout::from_rows(&["..", ".#"]).unwrap();
        let err = GridWorld::new(layout, WorldConfig::new(Position::new(1, 1))).unwrap_err();
        assert!(matches!(err, Error::PositionOnWall { ref role, .. } if role == "goal"));
    }

    #[test]
    fn test_construction_rejects_start_outside_grid() {
        let layout = GridLayout::from_rows(&["..", ".."]).unwrap();
        let config = WorldConfig::new(Position::new(1, 1))
            .with_start(StartMode::Fixed(Position::new(0, 5)));
        let err = GridWorld::new(layout, config).unwrap_err();
        assert!(matches!(err, Error::PositionOutOfBounds { ref role, .. } if role == "start"));
    }

    #[test]
    fn test_random_start_never_lands_on_goal_or_wall() {
        let layout = GridLayout::from_rows(&["..#", "#..", "..."]).unwrap();
        let goal = Position::new(2, 2);
        let config = WorldConfig::new(goal)
            .with_start(StartMode::RandomFree)
            .with_seed(11);
        let mut world = GridWorld::new(layout, config).unwrap();
        for _ in 0..200 {
            world.reset();
            assert_ne!(world.position(), goal);
            assert!(world.layout().is_free(world.position()));
        }
    }

    #[test]
    fn test_random_start_requires_non_goal_cell() {
        let layout = GridLayout::from_rows(&[".#"]).unwrap();
        let config = WorldConfig::new(Position::new(0, 0)).with_start(StartMode::RandomFree);
        assert!(GridWorld::new(layout, config).is_err());
    }
}
