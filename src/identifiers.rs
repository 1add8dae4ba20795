//! Domain identifier types for grid-world states.

use std::fmt;

/// Identifier of a free grid cell.
///
/// State ids are dense: a layout with `N` free cells numbers them `0..N`
/// in row-major order, and the id doubles as the row index into the
/// agent's value table. Wall cells never receive an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

impl StateId {
    /// Create a new state identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridnav::identifiers::StateId;
    ///
    /// let state = StateId::new(32);
    /// assert_eq!(state.index(), 32);
    /// ```
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the identifier as a table row index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

impl From<StateId> for usize {
    fn from(state: StateId) -> Self {
        state.0
    }
}
