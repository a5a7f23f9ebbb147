//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, role::Role, user_id::UserId};

/// User entity
///
/// Profile and contact data. The password hash lives in the `Credential`
/// entity so profile reads never touch hash material.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub user_name: String,
    /// Login identifier (unique, stored lowercased)
    pub email: Email,
    /// Optional contact phone
    pub phone: Option<String>,
    /// Optional default shipping address
    pub address: Option<String>,
    /// Role consulted by the authorization gate
    pub role: Role,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        user_name: String,
        email: Email,
        phone: Option<String>,
        address: Option<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            email,
            phone,
            address,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}
