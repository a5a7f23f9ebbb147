//! Refresh Use Case
//!
//! Exchanges a live refresh token for a fresh access/refresh pair,
//! rotating the server-side session in the same step.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::tokens::{TokenIssuer, TokenPair};
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Refresh output
pub struct RefreshOutput {
    pub tokens: TokenPair,
}

/// Refresh use case
pub struct RefreshUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> RefreshUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Rotate a refresh token
    ///
    /// Each refresh token is single-use. The rotation is a conditional
    /// update keyed on the presented token's hash, so a replayed token
    /// (or two racing refreshes with the same token) matches zero rows
    /// and fails closed with `InvalidSession`.
    pub async fn execute(&self, refresh_token: &str) -> AuthResult<RefreshOutput> {
        let issuer = TokenIssuer::new(self.config.clone());

        let user_id = issuer.verify_refresh(refresh_token)?;

        let tokens = issuer.issue_pair(&user_id)?;

        let old_hash = issuer.hash_refresh_token(refresh_token);
        let new_hash = issuer.hash_refresh_token(&tokens.refresh_token);

        let rotated = self
            .session_repo
            .rotate(&user_id, &old_hash, &new_hash)
            .await?;

        if rotated == 0 {
            // Already rotated or revoked; the presented token is dead
            return Err(AuthError::InvalidSession);
        }

        tracing::info!(user_id = %user_id, "Session rotated");

        Ok(RefreshOutput { tokens })
    }
}
