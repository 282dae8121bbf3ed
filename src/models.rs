use crate::core::{GameState, MoveOutcome};

pub struct GameRenderState {
    pub title: String,
    pub game: GameState,
    pub won: bool,
    pub last_outcome: Option<MoveOutcome>,
    pub message: Option<String>,
}
