use thiserror::Error;

use crate::layout::ValidationError;
use crate::store::Role;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{}: {}", .0.title(), .0)]
    Validation(#[from] ValidationError),

    #[error("Missing required fields: {}", missing_fields(.name, .layout))]
    MissingFields { name: bool, layout: bool },

    #[error("Map not found: {0}")]
    MapNotFound(u32),

    #[error("Invalid steps value: {0}")]
    InvalidSteps(u32),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Admin access required")]
    Forbidden,

    #[error("User '{username}' is already registered as {registered:?}")]
    RoleMismatch { username: String, registered: Role },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Incompatible store version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },
}

fn missing_fields(name: &bool, layout: &bool) -> String {
    let mut missing = Vec::new();
    if *name {
        missing.push("name");
    }
    if *layout {
        missing.push("layout");
    }
    missing.join(", ")
}
