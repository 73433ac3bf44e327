#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    board::Board,
    common::{Cell, GameResult},
    config::GRID_SIZE,
    scores::Scoreboard,
    session::Session,
};

/// Text grid for `board`. Empty cells show their 1-based number, winning
/// cells are bracketed.
pub fn render_board(board: &Board, highlight: Option<[usize; 3]>) -> String {
    let mut out = String::new();
    let cells = board.cells();
    for r in 0..GRID_SIZE {
        if r > 0 {
            out.push_str("---+---+---\n");
        }
        for c in 0..GRID_SIZE {
            let i = r * GRID_SIZE + c;
            let mark = match cells[i] {
                Cell::Empty => char::from_digit(i as u32 + 1, 10).unwrap_or('?'),
                Cell::X => 'X',
                Cell::O => 'O',
            };
            let lit = highlight.is_some_and(|line| line.contains(&i));
            if lit {
                let _ = write!(out, "[{}]", mark);
            } else {
                let _ = write!(out, " {} ", mark);
            }
            if c + 1 < GRID_SIZE {
                out.push('|');
            }
        }
        out.push('\n');
    }
    out
}

pub fn render_scores(scores: &Scoreboard) -> String {
    let mut out = format!(
        "X: {}  O: {}  Draws: {}",
        scores.x_wins, scores.o_wins, scores.draws
    );
    if !scores.recent.is_empty() {
        out.push_str("  Recent:");
        for result in scores.recent.iter() {
            let tag = match result {
                GameResult::Win(p) => p.to_string(),
                GameResult::Draw => "D".to_string(),
                GameResult::InProgress => continue,
            };
            out.push(' ');
            out.push_str(&tag);
        }
    }
    out
}

/// Board, status line and score tally of a session.
pub fn print_session(session: &Session) {
    println!();
    print!("{}", render_board(session.engine().board(), session.winning_line()));
    println!("{}", session.status_line());
    println!("{}", render_scores(session.scores()));
}
