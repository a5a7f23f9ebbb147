use serde::{Deserialize, Serialize};
use std::fmt;

/// User role as stored in the `users.user_role` column.
///
/// The set is closed on purpose: authorization decisions match on this
/// enum, so an unknown value in the database cannot silently widen
/// anyone's permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum Role {
    #[default]
    User = 0,
    Admin = 1,
}

impl Role {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Map a stored id back to a role.
    ///
    /// An id this code never wrote degrades to the least-privileged role
    /// instead of panicking; the row is still readable and nobody gains
    /// access they were not granted.
    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => Role::User,
            1 => Role::Admin,
            _ => {
                tracing::warn!(role_id = id, "Unknown role id in database, treating as user");
                Role::User
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids_round_trip() {
        assert_eq!(Role::from_id(Role::User.id()), Role::User);
        assert_eq!(Role::from_id(Role::Admin.id()), Role::Admin);
    }

    #[test]
    fn test_unknown_id_degrades_to_user() {
        assert_eq!(Role::from_id(42), Role::User);
        assert_eq!(Role::from_id(-1), Role::User);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_is_admin() {
        assert!(!Role::User.is_admin());
        assert!(Role::Admin.is_admin());
    }

    #[test]
    fn test_default_is_user() {
        assert_eq!(Role::default(), Role::User);
    }
}
