//! Grid topology with wall layout and derived state ids

use std::fmt;

use super::action::Action;
use crate::{Error, Result, identifiers::StateId};

/// A cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Free,
    Wall,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Wall => '#',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Free),
            '#' | 'W' | 'w' => Some(Cell::Wall),
            _ => None,
        }
    }

    /// Numeric code used by legacy map tables: `1` free, `-1` wall.
    pub fn from_code(code: i64) -> Option<Cell> {
        match code {
            1 => Some(Cell::Free),
            -1 => Some(Cell::Wall),
            _ => None,
        }
    }
}

/// A (row, column) location on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position one step away in the direction of `action`, or `None`
    /// when that would underflow row or column zero.
    pub fn offset(self, action: Action) -> Option<Position> {
        let (dr, dc) = action.delta();
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Immutable grid layout.
///
/// Holds the wall layout as the single source of truth; state ids are
/// derived from it at construction by numbering free cells in row-major
/// order. A cell is a wall iff it has no state id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    state_ids: Vec<Option<StateId>>,
    /// Inverse of `state_ids`: position of each state id
    positions: Vec<Position>,
}

impl GridLayout {
    /// Build a layout from row-major cells.
    ///
    /// # Errors
    ///
    /// Fails if the grid is empty, `cells.len() != rows * cols`, or no
    /// cell is free.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyLayout);
        }
        if cells.len() != rows * cols {
            return Err(Error::invalid_config(format!(
                "{} cells cannot fill a {rows}x{cols} grid",
                cells.len()
            )));
        }

        let mut state_ids = Vec::with_capacity(cells.len());
        let mut positions = Vec::new();
        for (i, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Free => {
                    state_ids.push(Some(StateId::new(positions.len())));
                    positions.push(Position::new(i / cols, i % cols));
                }
                Cell::Wall => state_ids.push(None),
            }
        }

        if positions.is_empty() {
            return Err(Error::NoFreeCells);
        }

        Ok(Self {
            rows,
            cols,
            cells,
            state_ids,
            positions,
        })
    }

    /// Parse a layout from text rows (`.` free, `#` wall).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridnav::grid::GridLayout;
    ///
    /// let layout = GridLayout::from_rows(&["..", ".#"])?;
    /// assert_eq!(layout.num_states(), 3);
    /// # Ok::<(), gridnav::Error>(())
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        Self::from_grid(&grid, |character, row, col| {
            Cell::from_char(character).ok_or(Error::InvalidCellCharacter {
                character,
                row,
                col,
            })
        })
    }

    /// Parse a layout from numeric rows (`1` free, `-1` wall).
    pub fn from_codes<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let grid: Vec<Vec<i64>> = rows.iter().map(|r| r.as_ref().to_vec()).collect();
        Self::from_grid(&grid, |code, row, col| {
            Cell::from_code(code).ok_or(Error::InvalidCellCode { code, row, col })
        })
    }

    fn from_grid<T: Copy>(
        grid: &[Vec<T>],
        parse: impl Fn(T, usize, usize) -> Result<Cell>,
    ) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyLayout);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in grid.iter().enumerate() {
            if line.len() != cols {
                return Err(Error::RaggedLayout {
                    row,
                    expected: cols,
                    got: line.len(),
                });
            }
            for (col, &value) in line.iter().enumerate() {
                cells.push(parse(value, row, col)?);
            }
        }

        Self::from_cells(rows, cols, cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of free cells, i.e. number of states.
    pub fn num_states(&self) -> usize {
        self.positions.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// Cell at `position`, or `None` outside the grid.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.contains(position)
            .then(|| self.cells[position.row * self.cols + position.col])
    }

    /// Whether `position` is a wall. Positions outside the grid are not walls.
    pub fn is_wall(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Wall)
    }

    pub fn is_free(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Free)
    }

    /// State id of a free cell; `None` for walls and out-of-grid positions.
    pub fn state_id(&self, position: Position) -> Option<StateId> {
        if !self.contains(position) {
            return None;
        }
        self.state_ids[position.row * self.cols + position.col]
    }

    /// Position of a state id.
    ///
    /// # Panics
    ///
    /// Panics if `state` is not a valid id for this layout.
    pub fn position_of(&self, state: StateId) -> Position {
        assert!(
            state.index() < self.num_states(),
            "state id {state} out of range for layout with {} states",
            self.num_states()
        );
        self.positions[state.index()]
    }

    /// Destination of moving from `from` by `action`, or `None` when the
    /// move leaves the grid or enters a wall.
    pub fn neighbor(&self, from: Position, action: Action) -> Option<Position> {
        from.offset(action).filter(|&to| self.is_free(to))
    }

    /// Free positions in state-id order.
    pub fn free_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// Ensure `position` is an in-bounds free cell.
    pub(crate) fn require_free(&self, position: Position, role: &str) -> Result<()> {
        if !self.contains(position) {
            return Err(Error::PositionOutOfBounds {
                role: role.to_string(),
                position,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.is_wall(position) {
            return Err(Error::PositionOnWall {
                role: role.to_string(),
                position,
            });
        }
        Ok(())
    }

    /// Check a legacy state table against the derived state ids.
    ///
    /// Older maps ship a wall table and a separate id table; the two can
    /// disagree. The table must have this layout's shape, carry `-1` on
    /// every wall, and carry the derived id on every free cell.
    ///
    /// # Errors
    ///
    /// Reports the shape mismatch or the first disagreeing cell.
    pub fn check_state_map<R: AsRef<[i64]>>(&self, state_map: &[R]) -> Result<()> {
        let got_cols = state_map.first().map_or(0, |r| r.as_ref().len());
        if state_map.len() != self.rows || state_map.iter().any(|r| r.as_ref().len() != self.cols)
        {
            return Err(Error::StateMapShape {
                rows: self.rows,
                cols: self.cols,
                got_rows: state_map.len(),
                got_cols,
            });
        }

        for (row, line) in state_map.iter().enumerate() {
            for (col, &got) in line.as_ref().iter().enumerate() {
                let position = Position::new(row, col);
                let expected = self
                    .state_id(position)
                    .map_or(-1, |state| state.index() as i64);
                if got != expected {
                    return Err(Error::StateMapMismatch {
                        position,
                        expected,
                        got,
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in line {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
