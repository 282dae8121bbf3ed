use tracing::{debug, trace, warn};

use crate::core::decode::decode_layout;
use crate::core::{Direction, GameChangeType, GameState, GameUpdate, MoveRejection, UserAction, step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    Uninitialized,
    Active,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted(GameChangeType),
    Rejected(MoveRejection),
}

/// Per-session puzzle state machine. Holds the last loaded layout so that
/// `reset` can rebuild the board from scratch.
#[derive(Debug, Default)]
pub struct PuzzleEngine {
    source: Option<String>,
    state: GameState,
}

impl PuzzleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an encoded layout. Malformed input leaves an empty, inert board.
    pub fn initialize(&mut self, encoded_layout: &str) {
        self.source = Some(encoded_layout.to_owned());
        self.state = match decode_layout(encoded_layout) {
            Ok(state) => {
                debug!(
                    width = state.width(),
                    height = state.height(),
                    total_targets = state.total_targets,
                    "level initialized"
                );
                state
            }
            Err(err) => {
                warn!(error = ?err, "could not decode layout, board left empty");
                GameState::default()
            }
        };
    }

    pub fn reset(&mut self) {
        if let Some(source) = self.source.take() {
            self.initialize(&source);
        }
    }

    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        match step(&self.state, UserAction::Move(direction)) {
            GameUpdate::NextState(next, change) => {
                trace!(?direction, ?change, moves = next.moves, "move accepted");
                self.state = next;
                if self.state.is_complete() {
                    debug!(moves = self.state.moves, "all targets covered");
                }
                MoveOutcome::Accepted(change)
            }
            GameUpdate::NoChange(reason) => {
                trace!(?direction, ?reason, "move rejected");
                MoveOutcome::Rejected(reason)
            }
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn phase(&self) -> EnginePhase {
        if self.source.is_none() {
            EnginePhase::Uninitialized
        } else if self.state.is_complete() {
            EnginePhase::Complete
        } else {
            EnginePhase::Active
        }
    }
}
