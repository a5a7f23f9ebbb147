//! Register Use Case
//!
//! Creates a user account and signs the new user in immediately.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::tokens::{TokenIssuer, TokenPair};
use crate::domain::entity::{credential::Credential, session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    role::Role,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Maximum display name length
const USER_NAME_MAX_LENGTH: usize = 100;

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    pub user: User,
    pub tokens: TokenPair,
}

/// Register use case
pub struct RegisterUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> RegisterUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let user_name = input.user_name.trim().to_string();
        if user_name.is_empty() {
            return Err(AuthError::Validation("Name cannot be empty".to_string()));
        }
        if user_name.len() > USER_NAME_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "Name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        let email =
            Email::new(input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let raw_password =
            RawPassword::new(input.password).map_err(|e| AuthError::Validation(e.to_string()))?;
        let password = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // TODO: every new account is an admin so a fresh install can
        // manage the catalog without seeding. Switch this to Role::User
        // once a bootstrap admin account is provisioned in migrations.
        let user = User::new(
            user_name,
            email,
            normalize_optional(input.phone),
            normalize_optional(input.address),
            Role::Admin,
        );
        let credential = Credential::new(user.user_id, password);

        self.user_repo.create(&user, &credential).await?;

        // New accounts are signed in immediately
        let issuer = TokenIssuer::new(self.config.clone());
        let tokens = issuer.issue_pair(&user.user_id)?;

        let session = Session::new(user.user_id, issuer.hash_refresh_token(&tokens.refresh_token));
        self.session_repo.create(&session).await?;

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User registered"
        );

        Ok(RegisterOutput { user, tokens })
    }
}

/// Trim an optional field, mapping whitespace-only input to absent
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
