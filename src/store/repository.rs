use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::LEADERBOARD_SIZE;
use crate::layout::validate_layout;
use crate::store::{MapDetail, MapRecord, MapSummary, NewMap, Role, Score, Session, StoreError, User};

/// Map, leaderboard and score operations the game needs from storage.
pub trait MapRepository {
    fn list_maps(&self) -> Vec<MapSummary>;

    fn get_map(&self, id: u32) -> Result<MapDetail, StoreError>;

    fn create_map(&mut self, session: &Session, request: NewMap) -> Result<MapRecord, StoreError>;

    /// Removes the map's scores before the map itself.
    fn delete_map(&mut self, session: &Session, id: u32) -> Result<(), StoreError>;

    /// Keeps the lower of the stored and submitted step counts.
    fn submit_score(&mut self, session: &Session, map_id: u32, steps: u32) -> Result<Score, StoreError>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryMapStore {
    users: Vec<User>,
    maps: Vec<MapRecord>,
    scores: Vec<Score>,
    last_user_id: u32,
    last_map_id: u32,
    last_score_id: u32,
}

fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl InMemoryMapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing user when the name is already taken.
    pub fn register_user(&mut self, username: &str, role: Role) -> User {
        if let Some(user) = self.users.iter().find(|u| u.username == username) {
            return user.clone();
        }
        self.last_user_id += 1;
        let user = User {
            id: self.last_user_id,
            username: username.to_owned(),
            role,
        };
        info!(user_id = user.id, username, ?role, "user registered");
        self.users.push(user.clone());
        user
    }

    /// Registers on first use. Asking for admin rights on an existing
    /// non-admin account is refused rather than silently downgraded.
    pub fn sign_in(&mut self, username: &str, role: Role) -> Result<User, StoreError> {
        match self.find_user(username) {
            Some(user) if role == Role::Admin && user.role != Role::Admin => {
                Err(StoreError::RoleMismatch {
                    username: username.to_owned(),
                    registered: user.role,
                })
            }
            Some(user) => Ok(user.clone()),
            None => Ok(self.register_user(username, role)),
        }
    }

    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    fn map(&self, id: u32) -> Result<&MapRecord, StoreError> {
        self.maps
            .iter()
            .find(|m| m.id == id)
            .ok_or(StoreError::MapNotFound(id))
    }
}

impl MapRepository for InMemoryMapStore {
    fn list_maps(&self) -> Vec<MapSummary> {
        self.maps.iter().map(MapSummary::from).collect()
    }

    fn get_map(&self, id: u32) -> Result<MapDetail, StoreError> {
        let map = self.map(id)?.clone();
        let mut scores: Vec<Score> = self
            .scores
            .iter()
            .filter(|s| s.map_id == id)
            .cloned()
            .collect();
        scores.sort_by_key(|s| (s.steps, s.id));
        scores.truncate(LEADERBOARD_SIZE);
        Ok(MapDetail { map, scores })
    }

    fn create_map(&mut self, session: &Session, request: NewMap) -> Result<MapRecord, StoreError> {
        let creator = session.require_admin()?.clone();

        let layout = match request.layout {
            Some(layout) if !request.name.is_empty() => layout,
            layout => {
                return Err(StoreError::MissingFields {
                    name: request.name.is_empty(),
                    layout: layout.is_none(),
                });
            }
        };
        let validated = validate_layout(&layout)?;

        self.last_map_id += 1;
        let record = MapRecord {
            id: self.last_map_id,
            name: request.name,
            description: request.description.unwrap_or_default(),
            layout: validated.encode(),
            created_at: now_secs(),
            creator_id: creator.id,
            created_by: creator.username,
        };
        info!(map_id = record.id, name = %record.name, "map created");
        self.maps.push(record.clone());
        Ok(record)
    }

    fn delete_map(&mut self, session: &Session, id: u32) -> Result<(), StoreError> {
        session.require_admin()?;
        self.map(id)?;

        let before = self.scores.len();
        self.scores.retain(|s| s.map_id != id);
        self.maps.retain(|m| m.id != id);
        info!(map_id = id, scores_removed = before - self.scores.len(), "map deleted");
        Ok(())
    }

    fn submit_score(&mut self, session: &Session, map_id: u32, steps: u32) -> Result<Score, StoreError> {
        let user = session.require_user()?.clone();
        if steps == 0 {
            return Err(StoreError::InvalidSteps(steps));
        }
        self.map(map_id)?;

        if let Some(existing) = self
            .scores
            .iter_mut()
            .find(|s| s.user_id == user.id && s.map_id == map_id)
        {
            if steps < existing.steps {
                debug!(map_id, user_id = user.id, old = existing.steps, new = steps, "score improved");
                existing.steps = steps;
            }
            return Ok(existing.clone());
        }

        self.last_score_id += 1;
        let score = Score {
            id: self.last_score_id,
            user_id: user.id,
            username: user.username,
            map_id,
            steps,
            created_at: now_secs(),
        };
        debug!(map_id, user_id = score.user_id, steps, "score recorded");
        self.scores.push(score.clone());
        Ok(score)
    }
}
