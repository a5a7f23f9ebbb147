//! Logout Use Case
//!
//! Revokes the session backing a refresh token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenIssuer;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Revoke the session for this refresh token
    ///
    /// Idempotent: a token that matches no session (already logged out,
    /// already rotated, or plain garbage) deletes zero rows and that is
    /// fine. The cookie is cleared client-side either way.
    pub async fn execute(&self, refresh_token: &str) -> AuthResult<()> {
        let issuer = TokenIssuer::new(self.config.clone());
        let hash = issuer.hash_refresh_token(refresh_token);

        let deleted = self.session_repo.delete_by_hash(&hash).await?;

        tracing::info!(deleted = deleted, "User logged out");
        Ok(())
    }
}
