mod bounds;
mod consts;
mod decode;
mod engine;
mod model_helpers;
mod models;
mod update;

pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use decode::{DecodeError, WireRow, decode_layout, decode_rows};
pub use engine::{EnginePhase, MoveOutcome, PuzzleEngine};
pub use models::{Cell, Direction, GameChangeType, GameState, GameUpdate, MoveRejection, UserAction, Vec2};
pub use update::step;
