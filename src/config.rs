use crate::common::Marble::{self, Black as B, Empty as X, Neutral as R, White as W};

pub const BOARD_SIZE: usize = 7;
pub const MARBLES_PER_PLAYER: usize = 8;
pub const NEUTRAL_MARBLES: usize = 13;

/// Neutral marbles a player must push off the board to win outright.
pub const CAPTURES_TO_WIN: u32 = 7;

/// Total marbles in play at the start of a game.
pub const TOTAL_MARBLES: usize = 2 * MARBLES_PER_PLAYER + NEUTRAL_MARBLES;

/// Canonical starting layout: each color holds two opposite corner blocks,
/// neutral marbles form the centre diamond.
pub const INITIAL_LAYOUT: [[Marble; BOARD_SIZE]; BOARD_SIZE] = [
    [W, W, X, X, X, B, B],
    [W, W, X, R, X, B, B],
    [X, X, R, R, R, X, X],
    [X, R, R, R, R, R, X],
    [X, X, R, R, R, X, X],
    [B, B, X, R, X, W, W],
    [B, B, X, X, X, W, W],
];
