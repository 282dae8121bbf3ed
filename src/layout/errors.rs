use thiserror::Error;

use crate::layout::DimensionKind;

/// Reasons a proposed layout is refused. The first failing check wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Layout must be a valid JSON object: {0}")]
    MalformedInput(String),

    #[error("Layout must include width, height, and grid array ({0})")]
    InvalidStructure(String),

    #[error("{}", dimension_detail(.kind, .row, .expected, .found))]
    DimensionMismatch {
        kind: DimensionKind,
        row: Option<usize>,
        expected: usize,
        found: usize,
    },

    #[error("Border cell ({x}, {y}) must be a wall (W), found '{found}'")]
    BoundaryViolation { x: usize, y: usize, found: String },

    #[error("Invalid character '{character}' at position ({x}, {y})")]
    InvalidCharacter { character: String, x: usize, y: usize },

    #[error("Map must have exactly one player (P), found {0}")]
    InvalidPlayerCount(usize),

    #[error("Map must have at least one box (B)")]
    NoBoxes,

    #[error("Map must have at least one target (T)")]
    NoTargets,
}

fn dimension_detail(
    kind: &DimensionKind,
    row: &Option<usize>,
    expected: &usize,
    found: &usize,
) -> String {
    match (kind, row) {
        (DimensionKind::Height, _) => format!(
            "Grid height doesn't match specified height: expected {expected} rows, found {found}"
        ),
        (DimensionKind::Width, Some(row)) => format!(
            "Grid width doesn't match specified width: row {row} has {found} cells, expected {expected}"
        ),
        (DimensionKind::Width, None) => format!(
            "Grid width doesn't match specified width: expected {expected}, found {found}"
        ),
    }
}

impl ValidationError {
    /// Short category shown to authoring clients above the detail line.
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MalformedInput(_) => "Invalid layout format",
            ValidationError::InvalidStructure(_) => "Invalid layout structure",
            ValidationError::DimensionMismatch { .. } => "Invalid grid dimensions",
            ValidationError::BoundaryViolation { .. }
            | ValidationError::InvalidCharacter { .. }
            | ValidationError::InvalidPlayerCount(_)
            | ValidationError::NoBoxes
            | ValidationError::NoTargets => "Invalid map layout",
        }
    }
}
