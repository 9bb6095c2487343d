//! User entity. Identity is the phone number; the password is stored only
//! as a bcrypt hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user of the blog site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Phone number used as the login identity
    pub phone: String,

    /// Bcrypt hash of the password
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly hashed password
    pub fn new(phone: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone: phone.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("13800138000", "$2b$12$hash");
        assert_eq!(user.phone, "13800138000");
        assert_eq!(user.password_hash, "$2b$12$hash");
    }

    #[test]
    fn test_user_ids_unique() {
        let a = User::new("13800138000", "h");
        let b = User::new("13800138000", "h");
        assert_ne!(a.id, b.id);
    }
}
