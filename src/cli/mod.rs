//! Terminal Front End
//!
//! Argument parsing, rule-table rendering, and the interactive loop.
//! Everything user-visible funnels through here; the game modules never
//! print.

pub mod repl;
pub mod table;

use clap::Parser;

pub use repl::{parse_selection, render_menu, render_turn, run, Selection};
pub use table::render_rule_table;

/// Command-line arguments.
///
/// Move-set semantics (odd count, at least 3, all distinct) are
/// enforced by `MoveSet::new` after parsing so the user gets one
/// consistent usage message for every invalid shape.
#[derive(Debug, Parser)]
#[command(
    name = "fair-rps",
    about = "Provably fair generalized rock-paper-scissors",
    version
)]
pub struct Cli {
    /// Moves for this session: an odd number (>= 3) of distinct tokens.
    ///
    /// Each move beats the half of the list that follows it in circular
    /// order, e.g. `fair-rps rock scissors paper` for the classic game.
    #[arg(required = true, num_args = 1..)]
    pub moves: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_collects_positional_moves() {
        let cli = Cli::parse_from(["fair-rps", "rock", "paper", "scissors"]);
        assert_eq!(cli.moves, ["rock", "paper", "scissors"]);
    }

    #[test]
    fn test_cli_requires_at_least_one_move() {
        assert!(Cli::try_parse_from(["fair-rps"]).is_err());
    }
}
