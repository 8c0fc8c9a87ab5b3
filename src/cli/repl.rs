//! Interactive Session Loop
//!
//! Line-oriented dispatch: print the rule table and a numbered menu
//! once, then block on stdin one line at a time. "0" exits, a number in
//! [1, N] plays that move, anything else is reported and the loop
//! continues. Protocol output goes to stdout via `println!`; the
//! tracing layer is for diagnostics only.

use std::io::BufRead;

use rand::RngCore;
use tracing::debug;

use crate::cli::table::render_rule_table;
use crate::game::session::{Game, TurnReport};

/// Parsed menu input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// "0": terminate the session.
    Exit,
    /// A move, as a 0-based index into the move set.
    Move(usize),
    /// Non-numeric or out of [0, N].
    Invalid,
}

/// Parse one input line against a menu of `n` moves.
///
/// Leading/trailing whitespace is ignored; everything else is strict
/// decimal. Negative numbers fail the unsigned parse and land in
/// `Invalid` with the rest.
pub fn parse_selection(line: &str, n: usize) -> Selection {
    match line.trim().parse::<usize>() {
        Ok(0) => Selection::Exit,
        Ok(k) if k <= n => Selection::Move(k - 1),
        _ => Selection::Invalid,
    }
}

/// Render one turn in reveal order.
///
/// The commitment line precedes the computer's move, and the key comes
/// last, after everything it lets the user check.
pub fn render_turn(report: &TurnReport) -> String {
    format!(
        "Your move: {}\nHMAC: {}\nComputer move: {}\n{}\nHMAC key: {}\n",
        report.user_move,
        report.commitment,
        report.computer_move,
        report.outcome.phrase(),
        report.key,
    )
}

/// Render the numbered move menu shown at startup.
pub fn render_menu(game: &Game<impl RngCore>) -> String {
    let mut out = String::from("Enter your move:\n");
    for (i, m) in game.moves().iter().enumerate() {
        out.push_str(&format!("{} - {}\n", i + 1, m));
    }
    out.push_str("0 - Exit\n");
    out
}

/// Run the interactive loop until "0" or end of input.
pub fn run<R: RngCore>(game: &mut Game<R>) -> anyhow::Result<()> {
    let n = game.moves().len();

    print!("{}", render_rule_table(game.moves(), game.rules()));
    print!("{}", render_menu(game));

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_selection(&line, n) {
            Selection::Exit => {
                debug!("exit requested");
                return Ok(());
            }
            Selection::Move(index) => {
                let token = game.moves().as_slice()[index].clone();
                let report = game.play(&token)?;
                print!("{}", render_turn(&report));
            }
            Selection::Invalid => {
                println!("Invalid input. Please enter a number between 0 and {n}.");
            }
        }
    }

    debug!("end of input");
    Ok(())
}
