//! Auth Middleware
//!
//! Request gates for protected routes: one resolves the access token
//! into a `CurrentUser`, the other enforces role requirements on top.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::authenticate::{AuthenticateUseCase, CurrentUser};
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::role::Role;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a signed-in user
///
/// Token lookup order is cookie first, then `Authorization: Bearer`.
/// On success the resolved `CurrentUser` is attached to the request
/// extensions; handlers never see the raw token.
pub async fn require_auth<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_access_token(req.headers(), &state.config.access_cookie_name)
        .ok_or_else(|| AuthError::MissingCredentials.into_response())?;

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let current_user = use_case
        .execute(&token)
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}

/// Middleware that requires the admin role
///
/// Must be layered inside [`require_auth`]; authorization is only
/// meaningful once authentication has succeeded.
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, Response> {
    let Some(current_user) = req.extensions().get::<CurrentUser>() else {
        // 認証ゲートを通っていない。構成ミスでも権限は与えない
        return Err(AuthError::MissingCredentials.into_response());
    };

    if !role_permitted(current_user.role, &[Role::Admin]) {
        return Err(AuthError::Forbidden.into_response());
    }

    Ok(next.run(req).await)
}

/// Whether a role is in the allowed set
///
/// Kept pure so route policies are testable without HTTP machinery.
pub fn role_permitted(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

fn extract_access_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(token) = platform::cookie::extract_cookie(headers, cookie_name) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_role_permitted() {
        assert!(role_permitted(Role::Admin, &[Role::Admin]));
        assert!(!role_permitted(Role::User, &[Role::Admin]));
        assert!(role_permitted(Role::User, &[Role::User, Role::Admin]));
        assert!(!role_permitted(Role::Admin, &[]));
    }

    #[test]
    fn test_cookie_wins_over_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("accessToken=from-cookie"),
        );
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );

        assert_eq!(
            extract_access_token(&headers, "accessToken").as_deref(),
            Some("from-cookie")
        );
    }

    #[test]
    fn test_bearer_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );

        assert_eq!(
            extract_access_token(&headers, "accessToken").as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_no_credentials() {
        let headers = HeaderMap::new();
        assert_eq!(extract_access_token(&headers, "accessToken"), None);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcg=="),
        );
        assert_eq!(extract_access_token(&headers, "accessToken"), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(extract_access_token(&headers, "accessToken"), None);
    }
}
