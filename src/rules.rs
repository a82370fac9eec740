//! Push mechanics, the legal-move existence check and win evaluation.
//!
//! These functions work on a bare [`Board`] and the two player colors; turn
//! order, ownership and repetition are the session's concern.

use core::fmt;

use crate::board::Board;
use crate::common::{BoardError, Direction, Marble, Position};
use crate::config::CAPTURES_TO_WIN;

/// How a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum WinReason {
    /// The winner pushed enough neutral marbles off the board.
    Captures,
    /// The loser has no marbles left on the board.
    Eliminated,
    /// None of the loser's marbles can move.
    Blocked,
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            WinReason::Captures => "captured enough neutral marbles",
            WinReason::Eliminated => "pushed off every opposing marble",
            WinReason::Blocked => "left the opponent without a legal move",
        };
        f.write_str(msg)
    }
}

/// What happened to the far end of a pushed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Push {
    /// Marble that left the board, if the run reached the edge.
    pub fell_off: Option<Marble>,
}

impl Push {
    /// Neutral marbles captured by this push.
    pub fn captured(&self) -> u32 {
        u32::from(self.fell_off == Some(Marble::Neutral))
    }
}

/// Shift the contiguous run starting at `origin` one cell in `direction`.
///
/// The run extends from `origin` until the first empty cell or the edge.
/// Marbles are moved starting from the far end; one that would land off the
/// board is removed instead. Only the far end can ever fall off.
pub fn push(board: &mut Board, origin: Position, direction: Direction) -> Result<Push, BoardError> {
    let mut run = alloc::vec![origin];
    let mut next = origin.step(direction);
    while let Ok(marble) = board.get(next) {
        if marble.is_empty() {
            break;
        }
        run.push(next);
        next = next.step(direction);
    }

    let mut result = Push::default();
    for &pos in run.iter().rev() {
        let marble = board.get(pos)?;
        let dest = pos.step(direction);
        if dest.is_on_board() {
            board.set(dest, marble)?;
        } else {
            result.fell_off = Some(marble);
        }
        board.set(pos, Marble::Empty)?;
    }
    Ok(result)
}

/// A marble can move if at least one neighbouring cell is empty or off the
/// board. Turn, ownership and repetition are not considered.
pub fn has_legal_move(board: &Board, pos: Position) -> bool {
    Direction::ALL
        .iter()
        .any(|&d| board.get(pos.step(d)).map_or(true, Marble::is_empty))
}

/// For each of `colors`, whether any marble of that color has a legal move.
/// A color with no marbles on the board has none.
pub fn colors_with_moves(board: &Board, colors: [Marble; 2]) -> [bool; 2] {
    let mut movable = [false; 2];
    for (pos, marble) in board.cells() {
        let Some(i) = colors.iter().position(|&c| c == marble) else {
            continue;
        };
        if !movable[i] && has_legal_move(board, pos) {
            movable[i] = true;
            if movable.iter().all(|&m| m) {
                break;
            }
        }
    }
    movable
}

/// Decide whether the move just committed by `mover` ends the game.
///
/// Checked in order: the mover reaching [`CAPTURES_TO_WIN`], the opponent
/// having no marbles left, then exactly one color being unable to move, in
/// which case the other color wins. Returns the winning color.
pub fn evaluate_winner(
    board: &Board,
    mover: Marble,
    mover_captured: u32,
    opponent: Marble,
) -> Option<(Marble, WinReason)> {
    if mover_captured >= CAPTURES_TO_WIN {
        return Some((mover, WinReason::Captures));
    }
    if board.count().of(opponent) == 0 {
        return Some((mover, WinReason::Eliminated));
    }
    let colors = [mover, opponent];
    match colors_with_moves(board, colors) {
        [true, false] => Some((mover, WinReason::Blocked)),
        [false, true] => Some((opponent, WinReason::Blocked)),
        [true, true] | [false, false] => None,
    }
}
