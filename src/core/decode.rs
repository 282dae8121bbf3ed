use serde::Deserialize;

use crate::core::{Cell, GameState, Vec2};

/// A grid row as it arrives on the wire: either `"W.PW"` or `["W", ".", "P", "W"]`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum WireRow {
    Text(String),
    Cells(Vec<String>),
}

/// The part of an encoded layout the engine reads; width and height are ignored.
#[derive(Deserialize, Debug)]
struct PlayableLayout {
    grid: Vec<WireRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    Json(String),
    Code { x: usize, y: usize },
    NoPlayer,
}

fn decode_code(code: &str) -> Option<Cell> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Cell::from_code(c),
        _ => None,
    }
}

impl WireRow {
    /// Decodes every cell, or returns the column of the first unknown code.
    fn decode(&self) -> Result<Vec<Cell>, usize> {
        let decoded: Vec<Option<Cell>> = match self {
            WireRow::Text(text) => text.chars().map(Cell::from_code).collect(),
            WireRow::Cells(cells) => cells.iter().map(|code| decode_code(code)).collect(),
        };
        decoded
            .iter()
            .enumerate()
            .map(|(x, c)| c.ok_or(x))
            .collect()
    }
}

pub fn decode_layout(encoded: &str) -> Result<GameState, DecodeError> {
    let layout: PlayableLayout =
        serde_json::from_str(encoded).map_err(|e| DecodeError::Json(e.to_string()))?;
    decode_rows(&layout.grid)
}

pub fn decode_rows(rows: &[WireRow]) -> Result<GameState, DecodeError> {
    let mut grid = Vec::with_capacity(rows.len());
    for (y, row) in rows.iter().enumerate() {
        let cells = row.decode().map_err(|x| DecodeError::Code { x, y })?;
        grid.push(cells);
    }

    let mut player = None;
    let mut total_targets = 0;
    let mut boxes_on_target = 0;
    for (y, row) in grid.iter().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            match c {
                // last player cell wins if a layout carries more than one
                Cell::Player => player = Some(Vec2 { x: x as i32, y: y as i32 }),
                Cell::BoxOnTarget => boxes_on_target += 1,
                _ => {}
            }
            if c.is_goal() {
                total_targets += 1;
            }
        }
    }

    let player = player.ok_or(DecodeError::NoPlayer)?;
    Ok(GameState {
        grid,
        player,
        moves: 0,
        boxes_on_target,
        total_targets,
    })
}
