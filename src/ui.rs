#![cfg(feature = "std")]

use std::string::String;
use std::fmt::Write;

use crate::{
    bitboard::ShotMask,
    board::{column_label, Board},
    game::{SeaBattle, Side},
    graph::Graph,
    path::Path,
};

/// Opponent field as seen by the shooter: `X` hit, `*` miss, `-` untried.
pub fn render_target(shots: &ShotMask, hits: &ShotMask) -> String {
    let size = shots.size();
    let mut out = String::new();
    out.push_str("   ");
    for x in 0..size {
        let _ = write!(out, " {}", column_label(x));
    }
    out.push('\n');
    for y in 0..size {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..size {
            let ch = if hits.get(x, y).unwrap_or(false) {
                'X'
            } else if shots.get(x, y).unwrap_or(false) {
                '*'
            } else {
                '-'
            };
            let _ = write!(out, " {}", ch);
        }
        if y + 1 < size {
            out.push('\n');
        }
    }
    out
}

/// Print the human's own field next to what they know of the computer's.
pub fn print_player_view(game: &SeaBattle) {
    let own: &Board = game.board(Side::Human);
    println!("Your fleet ({} of {} sunk):", own.dead_ships(), own.ships().len());
    println!("{}", own);
    println!();
    println!("Enemy waters:");
    println!(
        "{}",
        render_target(game.shots(Side::Human), game.hits(Side::Human))
    );
    println!();
}

/// `a -> b -> c (distance)` using each vertex's `Display`.
pub fn render_path<V: std::fmt::Display>(graph: &Graph<V, u32>, path: &Path<u32>) -> String {
    let names: Vec<String> = path
        .vertices
        .iter()
        .filter_map(|&v| graph.vertex(v))
        .map(|v| v.to_string())
        .collect();
    format!("{} ({})", names.join(" -> "), path.distance)
}
