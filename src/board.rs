//! The 7×7 marble grid. Knows nothing about players or rules.

use crate::common::{BoardError, Marble, Position};
use crate::config::{BOARD_SIZE, INITIAL_LAYOUT};
use core::fmt;

type Grid = [[Marble; BOARD_SIZE]; BOARD_SIZE];

/// Marble counts on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MarbleCount {
    pub white: usize,
    pub black: usize,
    pub neutral: usize,
}

impl MarbleCount {
    /// Count for one marble kind; empty cells are not counted.
    pub fn of(&self, marble: Marble) -> usize {
        match marble {
            Marble::White => self.white,
            Marble::Black => self.black,
            Marble::Neutral => self.neutral,
            Marble::Empty => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.white + self.black + self.neutral
    }
}

impl From<MarbleCount> for (usize, usize, usize) {
    fn from(c: MarbleCount) -> Self {
        (c.white, c.black, c.neutral)
    }
}

/// A fixed-size grid of cells. Copying is cheap, so snapshots are plain copies.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Board in the canonical starting layout.
    pub fn new() -> Self {
        Self::from_rows(INITIAL_LAYOUT)
    }

    /// Board with every cell empty.
    pub fn empty() -> Self {
        Self::from_rows([[Marble::Empty; BOARD_SIZE]; BOARD_SIZE])
    }

    pub fn from_rows(cells: Grid) -> Self {
        Board { cells }
    }

    /// Marble at `pos`, or `OutOfBounds` when either coordinate is off the grid.
    pub fn get(&self, pos: Position) -> Result<Marble, BoardError> {
        let (r, c) = Self::check_bounds(pos)?;
        Ok(self.cells[r][c])
    }

    /// Overwrite the cell at `pos`.
    pub fn set(&mut self, pos: Position, marble: Marble) -> Result<(), BoardError> {
        let (r, c) = Self::check_bounds(pos)?;
        self.cells[r][c] = marble;
        Ok(())
    }

    /// Row-major view of the grid.
    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Marble)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &m)| (Position::new(r as i32, c as i32), m))
        })
    }

    pub fn count(&self) -> MarbleCount {
        let mut counts = MarbleCount::default();
        for (_, marble) in self.cells() {
            match marble {
                Marble::White => counts.white += 1,
                Marble::Black => counts.black += 1,
                Marble::Neutral => counts.neutral += 1,
                Marble::Empty => {}
            }
        }
        counts
    }

    #[inline]
    fn check_bounds(pos: Position) -> Result<(usize, usize), BoardError> {
        pos.index().ok_or(BoardError::OutOfBounds {
            row: pos.row,
            col: pos.col,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for m in row {
                write!(f, "{}", m.letter())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// Grid with column indices above and below, row indices on both sides.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_column_header(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", r)?;
            for m in row {
                let ch = if m.is_empty() { '.' } else { m.letter() };
                write!(f, " {}", ch)?;
            }
            writeln!(f, "  {}", r)?;
        }
        write_column_header(f)
    }
}

fn write_column_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "  ")?;
    for c in 0..BOARD_SIZE {
        write!(f, " {}", c)?;
    }
    writeln!(f)
}
