//! Game session: players, turn order, captures and the move pipeline.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{
    board::{Board, MarbleCount},
    common::{BoardError, ConfigError, Direction, Marble, MoveError, Position},
    config::BOARD_SIZE,
    player::Player,
    rules::{self, Push, WinReason},
};

/// Current status of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: String, reason: WinReason },
}

/// Effects of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Neutral marbles captured by this move (0 or 1).
    pub captured: u32,
    /// Marble pushed off the board, of any color.
    pub pushed_off: Option<Marble>,
    /// Set when this move decided the game.
    pub win: Option<WinReason>,
}

/// Serializable view of a session, for display or reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board: [[Marble; BOARD_SIZE]; BOARD_SIZE],
    pub counts: MarbleCount,
    pub players: Vec<Player>,
    pub current_turn: Option<String>,
    pub winner: Option<String>,
}

/// A move that passed every check, not yet applied.
struct PlannedMove {
    mover: usize,
    after: Board,
    push: Push,
}

/// Core game logic for a single two-player session.
///
/// Moves either commit fully or leave every piece of state untouched.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: [Player; 2],
    board: Board,
    /// Board as it was before the most recently committed move.
    last_board: Board,
    /// Index of the player due to move; `None` until the first move.
    current: Option<usize>,
    winner: Option<(usize, WinReason)>,
}

impl GameEngine {
    /// Start a session from the canonical layout.
    pub fn new(player_one: (&str, Marble), player_two: (&str, Marble)) -> Result<Self, ConfigError> {
        Self::with_board(player_one, player_two, Board::new())
    }

    /// Start a session from an arbitrary position, e.g. a puzzle or a test
    /// fixture. Player validation is the same as [`GameEngine::new`].
    pub fn with_board(
        player_one: (&str, Marble),
        player_two: (&str, Marble),
        board: Board,
    ) -> Result<Self, ConfigError> {
        let one = Player::new(player_one.0, player_one.1)?;
        let two = Player::new(player_two.0, player_two.1)?;
        if one.color() == two.color() {
            return Err(ConfigError::DuplicateColor(one.color()));
        }
        if one.name() == two.name() {
            return Err(ConfigError::DuplicateName(String::from(one.name())));
        }
        Ok(Self {
            players: [one, two],
            board,
            last_board: board,
            current: None,
            winner: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// White, black and neutral marbles on the board.
    pub fn marble_count(&self) -> MarbleCount {
        self.board.count()
    }

    /// Neutral marbles captured by `name`, or 0 for an unknown name.
    pub fn captured(&self, name: &str) -> u32 {
        self.player(name).map_or(0, Player::captured)
    }

    /// Player due to move, `None` before the first move.
    pub fn current_turn(&self) -> Option<&str> {
        self.current.map(|i| self.players[i].name())
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|(i, _)| self.players[i].name())
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            None => GameStatus::InProgress,
            Some((i, reason)) => GameStatus::Won {
                winner: String::from(self.players[i].name()),
                reason,
            },
        }
    }

    /// Marble at `pos`; off-board positions are an error, not a crash.
    pub fn marble(&self, pos: Position) -> Result<Marble, BoardError> {
        self.board.get(pos)
    }

    /// Whether the marble at `pos` has room to move in some direction.
    pub fn has_legal_move(&self, pos: Position) -> bool {
        rules::has_legal_move(&self.board, pos)
    }

    /// Apply a move, returning `true` if it was accepted.
    pub fn make_move(&mut self, player: &str, pos: Position, direction: Direction) -> bool {
        self.try_move(player, pos, direction).is_ok()
    }

    /// Apply a move, reporting why it was rejected.
    pub fn try_move(
        &mut self,
        player: &str,
        pos: Position,
        direction: Direction,
    ) -> Result<MoveOutcome, MoveError> {
        let plan = match self.plan_move(player, pos, direction) {
            Ok(plan) => plan,
            Err(e) => {
                log::debug!("{} {} {}: rejected: {}", player, pos, direction, e);
                return Err(e);
            }
        };
        Ok(self.commit(plan))
    }

    /// Every move `player` could make right now, repetition included.
    /// Empty when the game is over or it is the other player's turn.
    pub fn legal_moves(&self, player: &str) -> Vec<(Position, Direction)> {
        let mut moves = Vec::new();
        let Some(me) = self.player(player) else {
            return moves;
        };
        let color = me.color();
        for (pos, marble) in self.board.cells() {
            if marble != color {
                continue;
            }
            for direction in Direction::ALL {
                if self.plan_move(player, pos, direction).is_ok() {
                    moves.push((pos, direction));
                }
            }
        }
        moves
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.board.rows(),
            counts: self.marble_count(),
            players: self.players.to_vec(),
            current_turn: self.current_turn().map(String::from),
            winner: self.winner().map(String::from),
        }
    }

    /// Run every check and simulate the push on a copy of the board.
    fn plan_move(
        &self,
        player: &str,
        pos: Position,
        direction: Direction,
    ) -> Result<PlannedMove, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        let mover = self
            .players
            .iter()
            .position(|p| p.name() == player)
            .ok_or(MoveError::UnknownPlayer)?;
        if self.current.is_some_and(|i| i != mover) {
            return Err(MoveError::NotYourTurn);
        }
        let marble = self.board.get(pos).map_err(|_| MoveError::OffBoard)?;
        if marble != self.players[mover].color() {
            return Err(MoveError::NotYourMarble);
        }
        // off the board behind the marble counts as empty
        let behind = self.board.get(pos.step(direction.opposite()));
        if behind.is_ok_and(|m| !m.is_empty()) {
            return Err(MoveError::BlockedFromBehind);
        }

        let mut after = self.board;
        let push = rules::push(&mut after, pos, direction).map_err(|_| MoveError::OffBoard)?;
        if after == self.last_board {
            return Err(MoveError::Repetition);
        }
        Ok(PlannedMove { mover, after, push })
    }

    fn commit(&mut self, plan: PlannedMove) -> MoveOutcome {
        let PlannedMove { mover, after, push } = plan;
        let opponent = 1 - mover;

        self.last_board = self.board;
        self.board = after;
        self.players[mover].add_captures(push.captured());

        let mover_color = self.players[mover].color();
        let decided = rules::evaluate_winner(
            &self.board,
            mover_color,
            self.players[mover].captured(),
            self.players[opponent].color(),
        );
        if let Some((color, reason)) = decided {
            let winner = if color == mover_color { mover } else { opponent };
            log::info!("{} wins: {}", self.players[winner].name(), reason);
            self.winner = Some((winner, reason));
        }

        self.current = Some(opponent);
        log::debug!(
            "{} moved, captured {}, pushed off {:?}",
            self.players[mover].name(),
            push.captured(),
            push.fell_off
        );

        MoveOutcome {
            captured: push.captured(),
            pushed_off: push.fell_off,
            win: decided.map(|(_, reason)| reason),
        }
    }
}

impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.marble_count();
        let [one, two] = &self.players;
        writeln!(f, "Current Turn: {}", self.current_turn().unwrap_or("-"))?;
        writeln!(
            f,
            "Counts      : W={} B={} R={}",
            counts.white, counts.black, counts.neutral
        )?;
        writeln!(
            f,
            "Captured    : {}={} {}={}",
            one.name(),
            one.captured(),
            two.name(),
            two.captured()
        )?;
        if let Some(winner) = self.winner() {
            writeln!(f, "Winner      : {}", winner)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.board)
    }
}
