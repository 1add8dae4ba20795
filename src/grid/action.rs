//! Movement actions available to the agent

use std::fmt;

/// Number of actions in the closed action set.
pub const NUM_ACTIONS: usize = 4;

/// A compass move on the grid.
///
/// The discriminant is the action index used for value-table columns and
/// for tie-breaking: on equal estimates the lowest index wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Decreases the row.
    North = 0,
    /// Increases the row.
    South = 1,
    /// Increases the column.
    East = 2,
    /// Decreases the column.
    West = 3,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; NUM_ACTIONS] =
        [Action::North, Action::South, Action::East, Action::West];

    /// Index of this action (0..4).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Action for a table column index, if in range.
    pub fn from_index(index: usize) -> Option<Action> {
        Self::ALL.get(index).copied()
    }

    /// Row and column displacement of this move.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::North => (-1, 0),
            Action::South => (1, 0),
            Action::East => (0, 1),
            Action::West => (0, -1),
        }
    }

    /// Single-letter label used in policy strings.
    pub const fn to_char(self) -> char {
        match self {
            Action::North => 'N',
            Action::South => 'S',
            Action::East => 'E',
            Action::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Action> {
        match c {
            'N' | 'n' => Some(Action::North),
            'S' | 's' => Some(Action::South),
            'E' | 'e' => Some(Action::East),
            'W' | 'w' => Some(Action::West),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
