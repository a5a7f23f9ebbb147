//! Credential Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Password credential for a user
///
/// One row per user, created in the same transaction as the user itself.
#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: UserId,
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    /// Create a new credential
    pub fn new(user_id: UserId, password: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id,
            password,
            created_at: now,
            updated_at: now,
        }
    }
}
