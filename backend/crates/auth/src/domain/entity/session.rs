//! Session Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{session_id::SessionId, user_id::UserId};

/// Server-side record of an issued refresh token
///
/// Holds a keyed hash of the refresh token, never the token itself.
/// Rotation rewrites `token_hash` in place, so exactly one refresh token
/// is live per session at any moment; revocation deletes the row.
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: SessionId,
    pub user_id: UserId,
    /// HMAC-SHA256 of the refresh token under the server hash key,
    /// base64url encoded
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session for a freshly issued refresh token
    pub fn new(user_id: UserId, token_hash: String) -> Self {
        Self {
            session_id: SessionId::new(),
            user_id,
            token_hash,
            created_at: Utc::now(),
        }
    }
}
