#![cfg(feature = "std")]

//! Text coordinates such as `c7`: a column letter followed by a 1-based row.

use std::string::String;

use crate::board::column_label;
use crate::common::BoardError;
use crate::ship::Position;

/// Parse `input` into a cell of a `grid_size` field.
pub fn parse_coord(input: &str, grid_size: usize) -> Result<Position, BoardError> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or(BoardError::InvalidCoordinate)?
        .to_ascii_lowercase();
    if !col_ch.is_ascii_lowercase() {
        return Err(BoardError::InvalidCoordinate);
    }
    let x = (col_ch as u8 - b'a') as usize;
    let digits = chars.as_str();
    if !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(BoardError::InvalidCoordinate);
    }
    let row: usize = digits
        .parse()
        .map_err(|_| BoardError::InvalidCoordinate)?;
    if row == 0 {
        return Err(BoardError::InvalidCoordinate);
    }
    let pos = Position::new(x, row - 1);
    if !pos.in_bounds(grid_size) {
        return Err(BoardError::InvalidCoordinate);
    }
    Ok(pos)
}

/// Inverse of [`parse_coord`].
pub fn format_coord(pos: Position) -> String {
    format!("{}{}", column_label(pos.x), pos.y + 1)
}
