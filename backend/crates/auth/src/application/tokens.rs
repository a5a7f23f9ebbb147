//! Token Issuer
//!
//! Issues and verifies the two JWT families used by the session
//! lifecycle. Access and refresh tokens are signed with independent
//! secrets, so one presented in place of the other always fails
//! signature verification.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// JWT claims carried by both token families
///
/// Deliberately small: role and profile data are looked up fresh on
/// every request, so a role change takes effect without waiting for
/// token expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User UUID
    pub sub: String,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

/// A freshly signed access/refresh pair
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Signs and verifies session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    config: Arc<AuthConfig>,
}

impl TokenIssuer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a new access/refresh pair for a user
    pub fn issue_pair(&self, user_id: &UserId) -> AuthResult<TokenPair> {
        let now = chrono::Utc::now();

        let access_exp = now
            + chrono::Duration::from_std(self.config.access_token_ttl)
                .map_err(|e| AuthError::Internal(format!("Invalid access token TTL: {e}")))?;
        let refresh_exp = now
            + chrono::Duration::from_std(self.config.refresh_token_ttl)
                .map_err(|e| AuthError::Internal(format!("Invalid refresh token TTL: {e}")))?;

        let access_claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: access_exp.timestamp(),
        };

        let refresh_claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: refresh_exp.timestamp(),
        };

        let access_token = encode(
            &Header::default(),
            &access_claims,
            &EncodingKey::from_secret(self.config.access_token_secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(format!("JWT encode failed: {e}")))?;

        let refresh_token = encode(
            &Header::default(),
            &refresh_claims,
            &EncodingKey::from_secret(self.config.refresh_token_secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(format!("JWT encode failed: {e}")))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verify an access token and extract the user id
    ///
    /// An expired token is reported distinctly so clients know a refresh
    /// is worth attempting; every other defect is just invalid.
    pub fn verify_access(&self, token: &str) -> AuthResult<UserId> {
        let claims = Self::verify(token, &self.config.access_token_secret).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        Self::parse_subject(&claims).ok_or(AuthError::InvalidToken)
    }

    /// Verify a refresh token and extract the user id
    ///
    /// All failure modes collapse into `InvalidSession`; the refresh
    /// endpoint never explains which check a token failed.
    pub fn verify_refresh(&self, token: &str) -> AuthResult<UserId> {
        let claims = Self::verify(token, &self.config.refresh_token_secret)
            .map_err(|_| AuthError::InvalidSession)?;

        Self::parse_subject(&claims).ok_or(AuthError::InvalidSession)
    }

    /// Keyed hash of a refresh token for server-side storage
    ///
    /// Deterministic, so the stored value doubles as the lookup key. The
    /// key lives only on the server; a leaked sessions table alone does
    /// not let anyone forge a matching token.
    pub fn hash_refresh_token(&self, token: &str) -> String {
        let digest = platform::crypto::hmac_sha256(&self.config.session_hash_key, token.as_bytes());
        platform::crypto::to_base64url(&digest)
    }

    fn verify(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No clock slack: expired means expired
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?;

        Ok(token_data.claims)
    }

    fn parse_subject(claims: &Claims) -> Option<UserId> {
        claims
            .sub
            .parse::<uuid::Uuid>()
            .ok()
            .map(UserId::from_uuid)
    }
}
