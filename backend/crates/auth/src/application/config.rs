//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup
//! from the environment and passed down explicitly; nothing below the
//! composition root reads environment variables.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signing secret for access tokens
    pub access_token_secret: String,
    /// Signing secret for refresh tokens (independent of access secret)
    pub refresh_token_secret: String,
    /// Access token lifetime (15 minutes)
    pub access_token_ttl: Duration,
    /// Refresh token lifetime (7 days)
    pub refresh_token_ttl: Duration,
    /// Key for the HMAC applied to refresh tokens before storage (32 bytes)
    pub session_hash_key: [u8; 32],
    /// Access token cookie name
    pub access_cookie_name: String,
    /// Refresh token cookie name
    pub refresh_cookie_name: String,
    /// Path restriction for the refresh cookie
    pub refresh_cookie_path: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: String::new(),
            refresh_token_secret: String::new(),
            access_token_ttl: Duration::from_secs(15 * 60), // 15 minutes
            refresh_token_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            session_hash_key: [0u8; 32],
            access_cookie_name: "accessToken".to_string(),
            refresh_cookie_name: "refreshToken".to_string(),
            refresh_cookie_path: "/api/auth/refresh".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with random secrets (for development)
    pub fn with_random_secrets() -> Self {
        use base64::Engine;
        use rand::RngCore;

        let mut rng = rand::rng();

        let mut hash_key = [0u8; 32];
        rng.fill_bytes(&mut hash_key);

        let mut secret_bytes = [0u8; 32];
        rng.fill_bytes(&mut secret_bytes);
        let access = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(secret_bytes);

        rng.fill_bytes(&mut secret_bytes);
        let refresh = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(secret_bytes);

        Self {
            access_token_secret: access,
            refresh_token_secret: refresh,
            session_hash_key: hash_key,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, random secrets)
    ///
    /// Random secrets mean every restart invalidates all tokens, which
    /// is the behavior you want when no secrets are configured.
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secrets()
        }
    }

    /// Access token lifetime in whole seconds
    pub fn access_token_ttl_secs(&self) -> u64 {
        self.access_token_ttl.as_secs()
    }

    /// Refresh token lifetime in whole seconds
    pub fn refresh_token_ttl_secs(&self) -> u64 {
        self.refresh_token_ttl.as_secs()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
