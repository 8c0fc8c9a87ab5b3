//! Fair RPS
//!
//! Provably fair generalized rock-paper-scissors on the command line.
//! Invoke with an odd number (>= 3) of distinct move names.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fair_rps::cli::{self, Cli};
use fair_rps::{Game, MoveSet, VERSION};

fn main() -> anyhow::Result<()> {
    // Diagnostics only; protocol output stays on stdout. Default to
    // warn so logs never mix into the commitment transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let moves = match MoveSet::new(args.moves) {
        Ok(moves) => moves,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("moves must be an odd number (at least 3) of distinct tokens");
            eprintln!("example: fair-rps rock paper scissors lizard spock");
            std::process::exit(2);
        }
    };

    info!(version = VERSION, n = moves.len(), "starting session");

    let mut game = Game::new(moves);
    cli::run(&mut game)
}
