//! Authenticated session entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A server-side session, stored in the cache under `session:<id>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session identifier carried by the cookie
    pub id: String,

    /// Owning user
    pub user_id: Uuid,

    /// Phone number of the owning user
    pub phone: String,

    /// Timestamp when the session was established
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for a user with a fresh random identifier
    pub fn new(user_id: Uuid, phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            user_id,
            phone: phone.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_unique() {
        let user_id = Uuid::new_v4();
        let a = Session::new(user_id, "13800138000");
        let b = Session::new(user_id, "13800138000");
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 32);
    }

    #[test]
    fn test_session_round_trip() {
        let session = Session::new(Uuid::new_v4(), "13800138000");
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
    }
}
