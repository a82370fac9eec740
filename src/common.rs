//! Common types for Kuba: marbles, positions, directions and error enums.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;

/// Contents of a single board cell. Player colors reuse the same type so a
/// player's color and the marbles it owns compare directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Marble {
    #[default]
    Empty,
    Neutral,
    White,
    Black,
}

impl Marble {
    /// Only white and black can be assigned to a player.
    pub fn is_player_color(self) -> bool {
        matches!(self, Marble::White | Marble::Black)
    }

    pub fn is_empty(self) -> bool {
        self == Marble::Empty
    }

    /// Single-letter token: `W`, `B`, `R` (neutral) or `X` (empty).
    pub fn letter(self) -> char {
        match self {
            Marble::Empty => 'X',
            Marble::Neutral => 'R',
            Marble::White => 'W',
            Marble::Black => 'B',
        }
    }
}

impl TryFrom<char> for Marble {
    type Error = ParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch.to_ascii_uppercase() {
            'X' | '.' => Ok(Marble::Empty),
            'R' => Ok(Marble::Neutral),
            'W' => Ok(Marble::White),
            'B' => Ok(Marble::Black),
            other => Err(ParseError::InvalidMarble(other)),
        }
    }
}

impl FromStr for Marble {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Marble::try_from(ch),
            (None, _) => Err(ParseError::Empty),
            (Some(ch), Some(_)) => Err(ParseError::InvalidMarble(ch)),
        }
    }
}

impl fmt::Display for Marble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the four orthogonal push directions. Forward points towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Right,
        Direction::Left,
        Direction::Back,
    ];

    /// Unit `(row, col)` offset of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Forward => (-1, 0),
            Direction::Back => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::Forward => 'F',
            Direction::Back => 'B',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = ParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch.to_ascii_uppercase() {
            'F' => Ok(Direction::Forward),
            'B' => Ok(Direction::Back),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(ParseError::InvalidDirection(other)),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Only the first letter counts, so `f` and `forward` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next() {
            Some(ch) => Direction::try_from(ch),
            None => Err(ParseError::Empty),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A `(row, column)` coordinate. Signed so that a step past either edge is
/// still representable and can be recognised as off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `direction`. Saturates at the
    /// `i32` limits, which are off the board either way.
    pub fn step(self, direction: Direction) -> Position {
        let (dr, dc) = direction.offset();
        Position::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// Both coordinates lie in `0..BOARD_SIZE`.
    pub fn is_on_board(self) -> bool {
        self.index().is_some()
    }

    /// Array indices for an on-board position.
    pub fn index(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl FromStr for Position {
    type Err = ParseError;

    /// Parses `"row col"`, whitespace or comma separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty());
        let row = parts.next().ok_or(ParseError::Empty)?;
        let col = parts.next().ok_or(ParseError::InvalidPosition)?;
        if parts.next().is_some() {
            return Err(ParseError::InvalidPosition);
        }
        let row = row.parse().map_err(|_| ParseError::InvalidPosition)?;
        let col = col.parse().map_err(|_| ParseError::InvalidPosition)?;
        Ok(Position::new(row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column lies outside `0..BOARD_SIZE`.
    OutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is off the board", row, col)
            }
        }
    }
}

/// Reasons a game session cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A player name was empty.
    EmptyName,
    /// A player was given something other than white or black.
    InvalidColor(Marble),
    /// Both players were given the same color.
    DuplicateColor(Marble),
    /// Both players were given the same name.
    DuplicateName(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyName => write!(f, "Player name must not be empty"),
            ConfigError::InvalidColor(m) => write!(f, "Player color not valid: {}", m),
            ConfigError::DuplicateColor(m) => write!(f, "Player colors must be unique: {}", m),
            ConfigError::DuplicateName(n) => write!(f, "Player names must be unique: {}", n),
        }
    }
}

/// Why a move was rejected, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// A winner has already been decided.
    GameOver,
    /// The name does not belong to either registered player.
    UnknownPlayer,
    /// The other player is due to move.
    NotYourTurn,
    /// The marble position is off the board.
    OffBoard,
    /// The cell does not hold one of the mover's marbles.
    NotYourMarble,
    /// The cell behind the marble is occupied.
    BlockedFromBehind,
    /// The push would recreate the board from before the opponent's last move.
    Repetition,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveError::GameOver => "The game is already over",
            MoveError::UnknownPlayer => "No such player in this game",
            MoveError::NotYourTurn => "It is not this player's turn",
            MoveError::OffBoard => "That position is off the board",
            MoveError::NotYourMarble => "That cell does not hold one of your marbles",
            MoveError::BlockedFromBehind => "The cell behind that marble is occupied",
            MoveError::Repetition => "That move would undo your opponent's last move",
        };
        f.write_str(msg)
    }
}

/// Errors from parsing textual marble, direction and position tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    InvalidMarble(char),
    InvalidDirection(char),
    InvalidPosition,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "No input given"),
            ParseError::InvalidMarble(c) => write!(f, "Not a marble color: {}", c),
            ParseError::InvalidDirection(c) => {
                write!(f, "Not a direction: {} (use F, B, L or R)", c)
            }
            ParseError::InvalidPosition => write!(f, "Expected a row and a column, e.g. 6 5"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
