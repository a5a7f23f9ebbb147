//! Authenticate Use Case
//!
//! Resolves an access token into the requesting user. This is the single
//! place where a bearer of a token becomes a `CurrentUser`; the role is
//! read from the database on every call, never from the token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenIssuer;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, role::Role, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// The authenticated principal attached to a request
///
/// A projection of the user row, taken at request time. Handlers read
/// this from request extensions instead of re-verifying tokens.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_name: String,
    pub email: Email,
    pub role: Role,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Verify an access token and load its user
    ///
    /// A token whose signature checks out but whose user row is gone
    /// fails with `UserGone`: deleting an account invalidates its
    /// outstanding tokens immediately.
    pub async fn execute(&self, access_token: &str) -> AuthResult<CurrentUser> {
        let issuer = TokenIssuer::new(self.config.clone());
        let user_id = issuer.verify_access(access_token)?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserGone)?;

        Ok(CurrentUser {
            user_id: user.user_id,
            user_name: user.user_name,
            email: user.email,
            role: user.role,
        })
    }
}
