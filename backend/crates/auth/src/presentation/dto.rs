//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::CurrentUser;
use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// User Projection
// ============================================================================

/// Sanitized user for responses; never carries hash material
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            name: user.user_name.clone(),
            email: user.email.as_str().to_string(),
            role: user.role.code().to_string(),
            phone: user.phone.clone(),
            address: user.address.clone(),
        }
    }
}

impl From<&CurrentUser> for UserResponse {
    fn from(current: &CurrentUser) -> Self {
        Self {
            id: current.user_id.to_string(),
            name: current.user_name.clone(),
            email: current.email.as_str().to_string(),
            role: current.role.code().to_string(),
            phone: None,
            address: None,
        }
    }
}

/// Response body wrapping the user projection
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
}
