#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use kuba::{init_logging, run_cli, GameEngine, Marble};

#[derive(Parser)]
#[command(author, version, about = "Play Kuba in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Name of the first player, who moves first.
    #[arg(long, default_value = "One")]
    player_one: String,
    /// Color of the first player (W or B).
    #[arg(long, default_value = "W")]
    color_one: Marble,
    /// Name of the second player.
    #[arg(long, default_value = "Two")]
    player_two: String,
    /// Color of the second player (W or B).
    #[arg(long, default_value = "B")]
    color_two: Marble,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut game = GameEngine::new(
        (cli.player_one.as_str(), cli.color_one),
        (cli.player_two.as_str(), cli.color_two),
    )?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    if run_cli(&mut game, stdin.lock(), &mut stdout)?.is_none() {
        println!("Game abandoned.");
    }
    Ok(())
}
