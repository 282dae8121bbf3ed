use std::borrow::Cow;

use serde_json::{Map, Value};
use tracing::debug;

use crate::layout::{DimensionKind, EncodedLayout, ValidatedLayout, ValidationError};

pub fn validate_layout_str(raw: &str) -> Result<ValidatedLayout, ValidationError> {
    let parsed: Value =
        serde_json::from_str(raw).map_err(|e| ValidationError::MalformedInput(e.to_string()))?;
    validate_layout(&parsed)
}

/// Checks a proposed layout in a fixed order and stops at the first failure.
/// A JSON string is treated as text holding the encoded layout.
pub fn validate_layout(raw: &Value) -> Result<ValidatedLayout, ValidationError> {
    let parsed = match raw {
        Value::String(text) => Cow::Owned(
            serde_json::from_str::<Value>(text)
                .map_err(|e| ValidationError::MalformedInput(e.to_string()))?,
        ),
        other => Cow::Borrowed(other),
    };

    let Some(fields) = parsed.as_object() else {
        return Err(ValidationError::InvalidStructure("layout is not an object".into()));
    };
    let width = positive_dimension(fields, "width")?;
    let height = positive_dimension(fields, "height")?;
    let Some(rows) = fields.get("grid").and_then(Value::as_array) else {
        return Err(ValidationError::InvalidStructure("grid must be an array".into()));
    };

    if rows.len() != height {
        return Err(ValidationError::DimensionMismatch {
            kind: DimensionKind::Height,
            row: None,
            expected: height,
            found: rows.len(),
        });
    }

    let grid: Vec<Vec<String>> = rows.iter().map(row_tokens).collect();
    if let Some((y, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(ValidationError::DimensionMismatch {
            kind: DimensionKind::Width,
            row: Some(y),
            expected: width,
            found: row.len(),
        });
    }

    check_boundary(&grid, width, height)?;
    let (players, boxes, targets) = count_contents(&grid)?;

    if players != 1 {
        return Err(ValidationError::InvalidPlayerCount(players));
    }
    if boxes == 0 {
        return Err(ValidationError::NoBoxes);
    }
    if targets == 0 {
        return Err(ValidationError::NoTargets);
    }

    debug!(width, height, boxes, targets, "layout accepted");
    Ok(ValidatedLayout(EncodedLayout {
        width: width as u32,
        height: height as u32,
        grid: grid.into_iter().map(|row| row.concat()).collect(),
    }))
}

/// Missing, zero, null, or non-integer dimensions are all structural failures.
/// Integral floats such as `5.0` count as integers.
fn positive_dimension(fields: &Map<String, Value>, name: &str) -> Result<usize, ValidationError> {
    match fields.get(name).and_then(Value::as_f64) {
        Some(value) if value >= 1.0 && value.fract() == 0.0 => Ok(value as usize),
        _ => Err(ValidationError::InvalidStructure(format!(
            "{name} must be a positive integer"
        ))),
    }
}

/// Splits a row into cell tokens. Rows that are neither strings nor arrays
/// have no cells, so they fail the width check.
fn row_tokens(row: &Value) -> Vec<String> {
    match row {
        Value::String(text) => text.chars().map(String::from).collect(),
        Value::Array(cells) => cells
            .iter()
            .map(|cell| match cell {
                Value::String(code) => code.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn check_boundary(grid: &[Vec<String>], width: usize, height: usize) -> Result<(), ValidationError> {
    let top_and_bottom = (0..width).flat_map(|x| [(x, 0), (x, height - 1)]);
    let left_and_right = (0..height).flat_map(|y| [(0, y), (width - 1, y)]);

    for (x, y) in top_and_bottom.chain(left_and_right) {
        let cell = &grid[y][x];
        if cell != "W" {
            return Err(ValidationError::BoundaryViolation { x, y, found: cell.clone() });
        }
    }
    Ok(())
}

fn count_contents(grid: &[Vec<String>]) -> Result<(usize, usize, usize), ValidationError> {
    let (mut players, mut boxes, mut targets) = (0, 0, 0);
    for (y, row) in grid.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            match cell.as_str() {
                "P" => players += 1,
                "B" => boxes += 1,
                "T" => targets += 1,
                "W" | "." => {}
                _ => {
                    return Err(ValidationError::InvalidCharacter {
                        character: cell.clone(),
                        x,
                        y,
                    });
                }
            }
        }
    }
    Ok((players, boxes, targets))
}
