//! Unit tests for auth flows
//!
//! Use cases run against an in-memory repository; nothing here talks to
//! a real database.

use std::sync::{Arc, Mutex};

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenIssuer;
use crate::application::{
    AuthenticateUseCase, LoginInput, LoginUseCase, LogoutUseCase, RefreshUseCase, RegisterInput,
    RegisterOutput, RegisterUseCase,
};
use crate::domain::entity::{credential::Credential, session::Session, user::User};
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, role::Role, user_id::UserId};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemAuthRepository {
    users: Arc<Mutex<Vec<User>>>,
    credentials: Arc<Mutex<Vec<Credential>>>,
    sessions: Arc<Mutex<Vec<Session>>>,
}

impl MemAuthRepository {
    fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    fn has_session_hash(&self, hash: &str) -> bool {
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.token_hash == hash)
    }

    fn remove_user(&self, user_id: &UserId) {
        self.users.lock().unwrap().retain(|u| u.user_id != *user_id);
    }
}

impl UserRepository for MemAuthRepository {
    async fn create(&self, user: &User, credential: &Credential) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.push(user.clone());
        self.credentials.lock().unwrap().push(credential.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == *user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == *email))
    }
}

impl CredentialRepository for MemAuthRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user_id == *user_id)
            .cloned())
    }
}

impl SessionRepository for MemAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn rotate(&self, user_id: &UserId, old_hash: &str, new_hash: &str) -> AuthResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let mut rotated = 0;
        for session in sessions.iter_mut() {
            if session.user_id == *user_id && session.token_hash == old_hash {
                session.token_hash = new_hash.to_string();
                rotated += 1;
            }
        }
        Ok(rotated)
    }

    async fn delete_by_hash(&self, token_hash: &str) -> AuthResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.token_hash != token_hash);
        Ok((before - sessions.len()) as u64)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn setup() -> (Arc<MemAuthRepository>, Arc<AuthConfig>) {
    (
        Arc::new(MemAuthRepository::default()),
        Arc::new(AuthConfig::development()),
    )
}

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        user_name: "Alice".to_string(),
        email: email.to_string(),
        password: "CorrectHorse1!".to_string(),
        phone: None,
        address: None,
    }
}

async fn register_alice(
    repo: &Arc<MemAuthRepository>,
    config: &Arc<AuthConfig>,
) -> RegisterOutput {
    RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
        .execute(register_input("alice@example.com"))
        .await
        .unwrap()
}

// ============================================================================
// Registration
// ============================================================================

mod registration_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_creates_user_and_opens_session() {
        let (repo, config) = setup();

        let output = register_alice(&repo, &config).await;

        assert_eq!(output.user.email.as_str(), "alice@example.com");
        assert_eq!(repo.session_count(), 1);

        // Stored session hash matches the issued refresh token
        let issuer = TokenIssuer::new(config.clone());
        let expected_hash = issuer.hash_refresh_token(&output.tokens.refresh_token);
        assert!(repo.has_session_hash(&expected_hash));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let (repo, config) = setup();
        register_alice(&repo, &config).await;

        // Same address, different case: still a duplicate
        let result = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(register_input("ALICE@Example.com"))
            .await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
        assert_eq!(repo.session_count(), 1);
    }

    #[tokio::test]
    async fn test_register_assigns_admin_role() {
        let (repo, config) = setup();
        let output = register_alice(&repo, &config).await;

        assert_eq!(output.user.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_register_validation() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone());

        let mut input = register_input("alice@example.com");
        input.user_name = "   ".to_string();
        assert!(matches!(
            use_case.execute(input).await,
            Err(AuthError::Validation(_))
        ));

        let mut input = register_input("not-an-email");
        input.user_name = "Alice".to_string();
        assert!(matches!(
            use_case.execute(input).await,
            Err(AuthError::Validation(_))
        ));

        // Too short
        let mut input = register_input("alice@example.com");
        input.password = "Ab1!".to_string();
        assert!(matches!(
            use_case.execute(input).await,
            Err(AuthError::Validation(_))
        ));

        // Missing a digit
        let mut input = register_input("alice@example.com");
        input.password = "NoDigitsHere!".to_string();
        assert!(matches!(
            use_case.execute(input).await,
            Err(AuthError::Validation(_))
        ));

        // Nothing was persisted along the way
        assert!(repo.users.lock().unwrap().is_empty());
    }
}

// ============================================================================
// Login
// ============================================================================

mod login_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_succeeds_with_correct_password() {
        let (repo, config) = setup();
        let registered = register_alice(&repo, &config).await;

        let output = LoginUseCase::new(
            repo.clone(),
            repo.clone(),
            repo.clone(),
            config.clone(),
        )
        .execute(LoginInput {
            email: "alice@example.com".to_string(),
            password: "CorrectHorse1!".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(output.user.user_id, registered.user.user_id);
        // Registration session plus the new login session
        assert_eq!(repo.session_count(), 2);
    }

    #[tokio::test]
    async fn test_login_accepts_unnormalized_email() {
        let (repo, config) = setup();
        register_alice(&repo, &config).await;

        let result = LoginUseCase::new(repo.clone(), repo.clone(), repo.clone(), config.clone())
            .execute(LoginInput {
                email: "  ALICE@EXAMPLE.COM ".to_string(),
                password: "CorrectHorse1!".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_login_failure_is_uniform() {
        let (repo, config) = setup();
        register_alice(&repo, &config).await;
        let use_case = LoginUseCase::new(repo.clone(), repo.clone(), repo.clone(), config.clone());

        let unknown_email = use_case
            .execute(LoginInput {
                email: "bob@example.com".to_string(),
                password: "CorrectHorse1!".to_string(),
            })
            .await
            .unwrap_err();

        let wrong_password = use_case
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "WrongHorse1!".to_string(),
            })
            .await
            .unwrap_err();

        // Same variant, same message: no account-existence oracle
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
        assert_eq!(unknown_email.to_string(), "Invalid email or password");

        assert_eq!(repo.session_count(), 1);
    }
}

// ============================================================================
// Refresh / Logout
// ============================================================================

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_refresh_rotates_session() {
        let (repo, config) = setup();
        let registered = register_alice(&repo, &config).await;
        let issuer = TokenIssuer::new(config.clone());

        let output = RefreshUseCase::new(repo.clone(), config.clone())
            .execute(&registered.tokens.refresh_token)
            .await
            .unwrap();

        // Old hash replaced in place, not added alongside
        let old_hash = issuer.hash_refresh_token(&registered.tokens.refresh_token);
        let new_hash = issuer.hash_refresh_token(&output.tokens.refresh_token);
        assert!(!repo.has_session_hash(&old_hash));
        assert!(repo.has_session_hash(&new_hash));
        assert_eq!(repo.session_count(), 1);

        // The new pair is usable
        assert!(issuer.verify_access(&output.tokens.access_token).is_ok());
        assert!(issuer.verify_refresh(&output.tokens.refresh_token).is_ok());
    }

    #[tokio::test]
    async fn test_refresh_replay_fails_closed() {
        let (repo, config) = setup();
        let registered = register_alice(&repo, &config).await;
        let use_case = RefreshUseCase::new(repo.clone(), config.clone());

        use_case
            .execute(&registered.tokens.refresh_token)
            .await
            .unwrap();

        // Replaying the consumed token must not mint anything
        let replay = use_case.execute(&registered.tokens.refresh_token).await;
        assert!(matches!(replay, Err(AuthError::InvalidSession)));
        assert_eq!(repo.session_count(), 1);
    }

    #[tokio::test]
    async fn test_refresh_with_garbage_token() {
        let (repo, config) = setup();
        register_alice(&repo, &config).await;

        let result = RefreshUseCase::new(repo.clone(), config.clone())
            .execute("not-a-jwt")
            .await;

        assert!(matches!(result, Err(AuthError::InvalidSession)));
    }

    #[tokio::test]
    async fn test_refresh_after_logout() {
        let (repo, config) = setup();
        let registered = register_alice(&repo, &config).await;

        LogoutUseCase::new(repo.clone(), config.clone())
            .execute(&registered.tokens.refresh_token)
            .await
            .unwrap();

        let result = RefreshUseCase::new(repo.clone(), config.clone())
            .execute(&registered.tokens.refresh_token)
            .await;

        assert!(matches!(result, Err(AuthError::InvalidSession)));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let (repo, config) = setup();
        let registered = register_alice(&repo, &config).await;
        let use_case = LogoutUseCase::new(repo.clone(), config.clone());

        use_case
            .execute(&registered.tokens.refresh_token)
            .await
            .unwrap();
        assert_eq!(repo.session_count(), 0);

        // Second logout with the same token still succeeds
        assert!(
            use_case
                .execute(&registered.tokens.refresh_token)
                .await
                .is_ok()
        );
    }
}

// ============================================================================
// Authenticate (gate core)
// ============================================================================

mod gate_tests {
    use super::*;

    #[tokio::test]
    async fn test_authenticate_resolves_current_user() {
        let (repo, config) = setup();
        let registered = register_alice(&repo, &config).await;

        let current = AuthenticateUseCase::new(repo.clone(), config.clone())
            .execute(&registered.tokens.access_token)
            .await
            .unwrap();

        assert_eq!(current.user_id, registered.user.user_id);
        assert_eq!(current.email.as_str(), "alice@example.com");
        assert_eq!(current.user_name, "Alice");
        assert_eq!(current.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_authenticate_when_user_deleted() {
        let (repo, config) = setup();
        let registered = register_alice(&repo, &config).await;

        repo.remove_user(&registered.user.user_id);

        let result = AuthenticateUseCase::new(repo.clone(), config.clone())
            .execute(&registered.tokens.access_token)
            .await;

        assert!(matches!(result, Err(AuthError::UserGone)));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_refresh_token() {
        let (repo, config) = setup();
        let registered = register_alice(&repo, &config).await;

        // A refresh token is signed with the other secret
        let result = AuthenticateUseCase::new(repo.clone(), config.clone())
            .execute(&registered.tokens.refresh_token)
            .await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
