#![cfg(feature = "std")]

//! Interactive text interface. Reads a marble position and a direction per
//! turn, prints the session between moves and reports rejected moves.

use std::io::{BufRead, Write};

use crate::{Direction, GameEngine, Position};

fn print_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Enter the marble to move as <row> <column>, e.g. 6 5.")?;
    writeln!(out, "Then a direction: F=forward (up), B=back (down), L=left, R=right.")?;
    writeln!(out, "The cell behind the marble must be empty or off the board.")?;
    writeln!(out, "Commands: 'moves' lists your legal moves, 'quit' ends the game.")?;
    Ok(())
}

fn print_moves<W: Write>(out: &mut W, game: &GameEngine, player: &str) -> std::io::Result<()> {
    let moves = game.legal_moves(player);
    if moves.is_empty() {
        return writeln!(out, "No legal moves for {}.", player);
    }
    write!(out, "Legal moves for {}:", player)?;
    for (pos, dir) in moves {
        write!(out, " {}{}", pos, dir)?;
    }
    writeln!(out)
}

/// Play a full game on `game`, reading moves from `input`.
///
/// The player due to move is prompted each turn; before the first move the
/// first registered player starts. Returns the winner's name, or `None` when
/// input ends or the player quits.
pub fn run_cli<R: BufRead, W: Write>(
    game: &mut GameEngine,
    input: R,
    out: &mut W,
) -> anyhow::Result<Option<String>> {
    let mut lines = input.lines();
    print_help(out)?;

    loop {
        writeln!(out)?;
        writeln!(out, "{}", game)?;
        if let Some(winner) = game.winner() {
            writeln!(out, "{} won!", winner)?;
            return Ok(Some(winner.to_string()));
        }

        let mover = game
            .current_turn()
            .unwrap_or(game.players()[0].name())
            .to_string();

        write!(out, "{} - marble to move (row column): ", mover)?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        if line.eq_ignore_ascii_case("help") {
            print_help(out)?;
            continue;
        }
        if line.eq_ignore_ascii_case("moves") {
            print_moves(out, game, &mover)?;
            continue;
        }
        let pos: Position = match line.parse() {
            Ok(pos) => pos,
            Err(e) => {
                writeln!(out, "✗ Error: {}", e)?;
                continue;
            }
        };

        write!(out, "Direction (F, B, L, R): ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let direction: Direction = match line?.parse() {
            Ok(d) => d,
            Err(e) => {
                writeln!(out, "✗ Error: {}", e)?;
                continue;
            }
        };

        match game.try_move(&mover, pos, direction) {
            Ok(outcome) => {
                if outcome.captured > 0 {
                    writeln!(out, "✓ {} captured a neutral marble!", mover)?;
                } else if let Some(marble) = outcome.pushed_off {
                    writeln!(out, "✓ A {} marble was pushed off the board.", marble)?;
                }
            }
            Err(e) => writeln!(out, "✗ Invalid move: {}", e)?,
        }
    }
}
