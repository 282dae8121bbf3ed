use tracing::{info, warn};

use crate::core::{Direction, MoveOutcome, PuzzleEngine};
use crate::store::{MapRepository, Score, Session, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    Move(Direction),
    Reset,
}

/// Emitted the first time a session observes the puzzle as solved.
#[derive(Debug)]
pub struct CompletionEvent {
    pub steps: u32,
    /// `None` when there was no map or user to record the score against.
    pub submission: Option<Result<Score, StoreError>>,
}

/// Host side of a play session: drives the engine and hands the final move
/// count to storage once.
#[derive(Debug)]
pub struct PlaySession {
    engine: PuzzleEngine,
    map_id: Option<u32>,
    score_submitted: bool,
    completion_seen: bool,
}

impl PlaySession {
    pub fn new(encoded_layout: &str, map_id: Option<u32>) -> Self {
        let mut engine = PuzzleEngine::new();
        engine.initialize(encoded_layout);
        Self {
            engine,
            map_id,
            score_submitted: false,
            completion_seen: false,
        }
    }

    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    pub fn map_id(&self) -> Option<u32> {
        self.map_id
    }

    pub fn score_submitted(&self) -> bool {
        self.score_submitted
    }

    /// Applies one input. Moves are ignored once the puzzle has been solved.
    pub fn apply<R: MapRepository>(
        &mut self,
        action: PlayAction,
        repo: &mut R,
        session: &Session,
    ) -> (Option<MoveOutcome>, Option<CompletionEvent>) {
        let outcome = match action {
            PlayAction::Reset => {
                self.engine.reset();
                self.completion_seen = false;
                None
            }
            PlayAction::Move(_) if self.completion_seen => None,
            PlayAction::Move(direction) => Some(self.engine.move_player(direction)),
        };

        (outcome, self.observe_completion(repo, session))
    }

    fn observe_completion<R: MapRepository>(
        &mut self,
        repo: &mut R,
        session: &Session,
    ) -> Option<CompletionEvent> {
        if self.completion_seen || !self.engine.is_complete() {
            return None;
        }
        self.completion_seen = true;

        let steps = self.engine.game_state().moves;
        info!(steps, map_id = ?self.map_id, "level complete");

        let submission = match self.map_id {
            Some(map_id) if !self.score_submitted && session.require_user().is_ok() => {
                let result = repo.submit_score(session, map_id, steps);
                match &result {
                    Ok(score) => {
                        self.score_submitted = true;
                        info!(map_id, best = score.steps, "score submitted");
                    }
                    Err(err) => warn!(map_id, error = %err, "score submission failed"),
                }
                Some(result)
            }
            _ => None,
        };

        Some(CompletionEvent { steps, submission })
    }
}
