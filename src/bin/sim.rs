//! Seeded self-play of uniformly random legal moves. Prints one JSON summary
//! line per game; useful for smoke testing the rules over long games.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use kuba::{init_logging, GameEngine, GameStatus, Marble};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Play random Kuba games and report the results")]
#[cfg(feature = "std")]
struct Args {
    /// Seed of the first game; game `i` uses `seed + i`.
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u64,
    /// Stop a game without a winner after this many moves.
    #[arg(long, default_value_t = 1000)]
    max_plies: usize,
}

#[cfg(feature = "std")]
fn play(seed: u64, max_plies: usize) -> anyhow::Result<serde_json::Value> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = GameEngine::new(("white", Marble::White), ("black", Marble::Black))?;
    let mut plies = 0;
    let mut stalled = false;

    while game.winner().is_none() && plies < max_plies {
        let mover = game
            .current_turn()
            .unwrap_or(game.players()[0].name())
            .to_string();
        let moves = game.legal_moves(&mover);
        if moves.is_empty() {
            stalled = true;
            break;
        }
        let (pos, dir) = moves[rng.random_range(0..moves.len())];
        if !game.make_move(&mover, pos, dir) {
            anyhow::bail!("legal move {} {} by {} was rejected", pos, dir, mover);
        }
        plies += 1;
    }

    let reason = match game.status() {
        GameStatus::Won { reason, .. } => Some(reason),
        GameStatus::InProgress => None,
    };
    Ok(json!({
        "seed": seed,
        "plies": plies,
        "stalled": stalled,
        "winner": game.winner(),
        "reason": reason,
        "final": game.snapshot(),
    }))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    for i in 0..args.games {
        let summary = play(args.seed.wrapping_add(i), args.max_plies)?;
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}
