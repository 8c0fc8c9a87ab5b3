//! Rule Table Rendering
//!
//! Renders the (N+1) x (N+1) help matrix: "Draw" on the diagonal,
//! "Win" where the row move beats the column move, "Lose" otherwise.
//! Pure string formatting, no I/O.

use crate::game::moves::MoveSet;
use crate::game::rules::{Outcome, RuleTable};

/// Render the rule matrix as a bordered ASCII table.
///
/// Rows are the user's move, columns the computer's; a cell reads as
/// the result from the row's perspective.
pub fn render_rule_table(moves: &MoveSet, rules: &RuleTable) -> String {
    let n = moves.len();

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(n + 1);
    let mut header = Vec::with_capacity(n + 1);
    header.push(String::new());
    header.extend(moves.iter().map(str::to_string));
    grid.push(header);

    for r in 0..n {
        let mut row = Vec::with_capacity(n + 1);
        row.push(moves.as_slice()[r].clone());
        for c in 0..n {
            let cell = match rules.outcome(r, c) {
                Outcome::Draw => "Draw",
                Outcome::Win => "Win",
                Outcome::Lose => "Lose",
            };
            row.push(cell.to_string());
        }
        grid.push(row);
    }

    let mut widths = vec![0usize; n + 1];
    for row in &grid {
        for (c, cell) in row.iter().enumerate() {
            widths[c] = widths[c].max(cell.len());
        }
    }

    let mut border = String::from("+");
    for w in &widths {
        border.push_str(&"-".repeat(w + 2));
        border.push('+');
    }

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for (i, row) in grid.iter().enumerate() {
        out.push('|');
        for (c, cell) in row.iter().enumerate() {
            out.push_str(&format!(" {:<width$} |", cell, width = widths[c]));
        }
        out.push('\n');
        // Separator under the header row
        if i == 0 {
            out.push_str(&border);
            out.push('\n');
        }
    }
    out.push_str(&border);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_cells(rendered: &str) -> Vec<Vec<String>> {
        rendered
            .lines()
            .filter(|l| l.starts_with('|'))
            .map(|l| {
                l.trim_matches('|')
                    .split('|')
                    .map(|c| c.trim().to_string())
                    .collect()
            })
            .collect()
    }

    fn three_move_table() -> String {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let rules = RuleTable::generate(&moves);
        render_rule_table(&moves, &rules)
    }

    #[test]
    fn test_grid_shape_and_header() {
        let cells = table_cells(&three_move_table());

        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|row| row.len() == 4));
        assert_eq!(cells[0], ["", "rock", "paper", "scissors"]);
        assert_eq!(cells[1][0], "rock");
        assert_eq!(cells[3][0], "scissors");
    }

    #[test]
    fn test_diagonal_draws() {
        let cells = table_cells(&three_move_table());

        for i in 0..3 {
            assert_eq!(cells[i + 1][i + 1], "Draw");
        }
    }

    #[test]
    fn test_cells_follow_cyclic_relation() {
        let cells = table_cells(&three_move_table());

        // Each move beats its successor in listing order.
        assert_eq!(cells[1][2], "Win"); // rock vs paper
        assert_eq!(cells[1][3], "Lose"); // rock vs scissors
        assert_eq!(cells[2][3], "Win"); // paper vs scissors
        assert_eq!(cells[3][1], "Win"); // scissors vs rock
    }

    #[test]
    fn test_antisymmetry_across_diagonal() {
        let cells = table_cells(&three_move_table());

        for r in 1..4 {
            for c in 1..4 {
                if r == c {
                    continue;
                }
                let mirrored = match cells[r][c].as_str() {
                    "Win" => "Lose",
                    "Lose" => "Win",
                    other => panic!("unexpected cell {other}"),
                };
                assert_eq!(cells[c][r], mirrored);
            }
        }
    }

    #[test]
    fn test_wide_tokens_pad_columns() {
        let moves = MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap();
        let rules = RuleTable::generate(&moves);
        let rendered = render_rule_table(&moves, &rules);

        // Every line is the same width as the border.
        let width = rendered.lines().next().unwrap().len();
        assert!(rendered.lines().all(|l| l.len() == width));
    }
}
