//! Login Use Case
//!
//! Authenticates a user by email and password and opens a new session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::tokens::{TokenIssuer, TokenPair};
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub tokens: TokenPair,
}

/// Login use case
pub struct LoginUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, C, S> LoginUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        credential_repo: Arc<C>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            session_repo,
            config,
        }
    }

    /// Authenticate and open a session
    ///
    /// Unknown email and wrong password both come back as
    /// `InvalidCredentials`; the response never says which one it was.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // An address that fails validation cannot belong to any account
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let credential = self
            .credential_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // No policy check here: stored passwords may predate the current rules
        let raw_password = RawPassword::for_verification(input.password);

        if !credential.password.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let issuer = TokenIssuer::new(self.config.clone());
        let tokens = issuer.issue_pair(&user.user_id)?;

        let session = Session::new(user.user_id, issuer.hash_refresh_token(&tokens.refresh_token));
        self.session_repo.create(&session).await?;

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput { user, tokens })
    }
}
