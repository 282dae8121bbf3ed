use serde::{Deserialize, Serialize};

/// Canonical storage encoding of a level: one string per row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EncodedLayout {
    pub width: u32,
    pub height: u32,
    pub grid: Vec<String>,
}

/// A layout that passed validation. Only the validator constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLayout(pub(crate) EncodedLayout);

impl ValidatedLayout {
    pub fn layout(&self) -> &EncodedLayout {
        &self.0
    }

    /// The opaque string handed to storage.
    pub fn encode(&self) -> String {
        serde_json::to_string(&self.0).expect("layout serialization never fails")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    Height,
    Width,
}
