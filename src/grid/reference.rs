//! Reference map used by the bundled experiment

use super::layout::{GridLayout, Position};
use crate::Result;

/// Start cell of the reference experiment.
pub const REFERENCE_START: Position = Position::new(0, 0);

/// Goal cell of the reference experiment.
pub const REFERENCE_GOAL: Position = Position::new(8, 8);

/// Number of free cells in the reference map.
pub const REFERENCE_NUM_STATES: usize = 146;

/// 12x15 reference map (`.` free, `#` wall).
#[rustfmt::skip]
pub const REFERENCE_MAP: [&str; 12] = [
    "...............",
    "...............",
    "..###.###......",
    "..#.....#...##.",
    "..#........###.",
    "...............",
    "........##.....",
    "..###....###..#",
    "..#............",
    "..#...#..####..",
    "...............",
    "....###.......#",
];

/// Parse the reference map.
pub fn reference_layout() -> Result<GridLayout> {
    GridLayout::from_rows(&REFERENCE_MAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::StateId;

    #[test]
    fn test_reference_dimensions() {
        let layout = reference_layout().unwrap();
        assert_eq!(layout.rows(), 12);
        assert_eq!(layout.cols(), 15);
        assert_eq!(layout.num_states(), REFERENCE_NUM_STATES);
    }

    #[test]
    fn test_reference_start_and_goal_are_free() {
        let layout = reference_layout().unwrap();
        assert_eq!(layout.state_id(REFERENCE_START), Some(StateId::new(0)));
        assert_eq!(layout.state_id(REFERENCE_GOAL), Some(StateId::new(104)));
    }

    #[test]
    fn test_reference_ids_match_legacy_numbering() {
        let layout = reference_layout().unwrap();
        assert_eq!(layout.state_id(Position::new(2, 5)), Some(StateId::new(32)));
        assert_eq!(layout.state_id(Position::new(3, 14)), Some(StateId::new(49)));
        assert_eq!(layout.state_id(Position::new(7, 13)), Some(StateId::new(96)));
        assert_eq!(layout.state_id(Position::new(11, 13)), Some(StateId::new(145)));
        assert_eq!(layout.state_id(Position::new(11, 14)), None);
    }
}
