use serde::{Deserialize, Serialize};

use crate::store::StoreError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anonymous,
    Player,
    Admin,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub role: Role,
}

/// Who is making a request. Passed explicitly to every store call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn require_user(&self) -> Result<&User, StoreError> {
        match &self.user {
            Some(user) if user.role != Role::Anonymous => Ok(user),
            _ => Err(StoreError::Unauthenticated),
        }
    }

    pub fn require_admin(&self) -> Result<&User, StoreError> {
        let user = self.require_user()?;
        if user.role == Role::Admin {
            Ok(user)
        } else {
            Err(StoreError::Forbidden)
        }
    }
}
