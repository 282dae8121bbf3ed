use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MapRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Encoded layout as produced by the validator.
    pub layout: String,
    pub created_at: u64,
    pub creator_id: u32,
    pub created_by: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub id: u32,
    pub user_id: u32,
    pub username: String,
    pub map_id: u32,
    pub steps: u32,
    pub created_at: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSummary {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub created_by: String,
}

/// A map together with its leaderboard, best score first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDetail {
    pub map: MapRecord,
    pub scores: Vec<Score>,
}

/// A map creation request. `layout` may be the encoded text or the structured object.
#[derive(Debug, Clone, Default)]
pub struct NewMap {
    pub name: String,
    pub description: Option<String>,
    pub layout: Option<Value>,
}

impl From<&MapRecord> for MapSummary {
    fn from(record: &MapRecord) -> Self {
        MapSummary {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            created_by: record.created_by.clone(),
        }
    }
}
