//! HTTP Handlers

use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse};
use axum::{Extension, Json};
use std::sync::Arc;

use kernel::response::{Success, success, success_empty};
use platform::cookie::CookieConfig;

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenPair;
use crate::application::{
    CurrentUser, LoginInput, LoginUseCase, LogoutUseCase, RefreshUseCase, RegisterInput,
    RegisterUseCase,
};
use crate::domain::repository::{CredentialRepository, SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        user_name: req.name,
        email: req.email,
        password: req.password,
        phone: req.phone,
        address: req.address,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        session_cookies(&state.config, &output.tokens),
        Json(success(AuthResponse {
            user: UserResponse::from(&output.user),
        })),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::OK,
        session_cookies(&state.config, &output.tokens),
        Json(success(AuthResponse {
            user: UserResponse::from(&output.user),
        })),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(&headers, &state.config.refresh_cookie_name);

    if let Some(token) = token {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        // Cookies are cleared regardless; a failed revoke must not block logout
        let _ = use_case.execute(&token).await;
    }

    Ok((
        StatusCode::OK,
        clear_session_cookies(&state.config),
        Json(success_empty()),
    ))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/auth/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    // 欠落も不正も区別せず InvalidSession に落とす
    let token = platform::cookie::extract_cookie(&headers, &state.config.refresh_cookie_name)
        .ok_or(AuthError::InvalidSession)?;

    let use_case = RefreshUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(&token).await?;

    Ok((
        StatusCode::OK,
        session_cookies(&state.config, &output.tokens),
        Json(success_empty()),
    ))
}

// ============================================================================
// Me
// ============================================================================

/// GET /api/auth/me
pub async fn me(Extension(current_user): Extension<CurrentUser>) -> Json<Success<AuthResponse>> {
    Json(success(AuthResponse {
        user: UserResponse::from(&current_user),
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn access_cookie(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.access_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.access_token_ttl_secs() as i64),
    }
}

fn refresh_cookie(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.refresh_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        // Scoped so browsers only ever send it to the refresh endpoint
        path: config.refresh_cookie_path.clone(),
        max_age_secs: Some(config.refresh_token_ttl_secs() as i64),
    }
}

/// Set-Cookie pair for a freshly issued token pair
fn session_cookies(
    config: &AuthConfig,
    tokens: &TokenPair,
) -> AppendHeaders<[(HeaderName, String); 2]> {
    AppendHeaders([
        (
            header::SET_COOKIE,
            access_cookie(config).build_set_cookie(&tokens.access_token),
        ),
        (
            header::SET_COOKIE,
            refresh_cookie(config).build_set_cookie(&tokens.refresh_token),
        ),
    ])
}

/// Set-Cookie pair that expires both token cookies
fn clear_session_cookies(config: &AuthConfig) -> AppendHeaders<[(HeaderName, String); 2]> {
    AppendHeaders([
        (
            header::SET_COOKIE,
            access_cookie(config).build_delete_cookie(),
        ),
        (
            header::SET_COOKIE,
            refresh_cookie(config).build_delete_cookie(),
        ),
    ])
}
