//! Greedy policy snapshots

use std::fmt;

use crate::{
    grid::{Action, GridLayout, Position},
    identifiers::StateId,
};

/// Greedy action for every state, in state-id order.
///
/// Displays as one letter per state (`N`, `S`, `E`, `W`), the encoding
/// used by the per-episode policy log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyPolicy {
    actions: Vec<Action>,
}

impl GreedyPolicy {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Parse a policy string such as `"NSEW"`.
    pub fn parse(encoded: &str) -> Option<Self> {
        encoded
            .chars()
            .map(Action::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    pub fn action(&self, state: StateId) -> Action {
        self.actions[state.index()]
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Draw the policy over `layout`: the action letter on free cells,
    /// `#` on walls and `G` on the goal.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridnav::grid::{Action, GridLayout, Position};
    /// use gridnav::q_learning::GreedyPolicy;
    ///
    /// let layout = GridLayout::from_rows(&["..", "#."])?;
    /// let policy = GreedyPolicy::new(vec![Action::East, Action::South, Action::North]);
    /// assert_eq!(policy.render(&layout, Position::new(1, 1)), "ES\n#G");
    /// # Ok::<(), gridnav::Error>(())
    /// ```
    pub fn render(&self, layout: &GridLayout, goal: Position) -> String {
        let mut out = String::with_capacity(layout.rows() * (layout.cols() + 1));
        for row in 0..layout.rows() {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..layout.cols() {
                let position = Position::new(row, col);
                let c = match layout.state_id(position) {
                    _ if position == goal => 'G',
                    Some(state) => self
                        .actions
                        .get(state.index())
                        .map_or('?', |a| a.to_char()),
                    None => '#',
                };
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for GreedyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            write!(f, "{}", action.to_char())?;
        }
        Ok(())
    }
}
