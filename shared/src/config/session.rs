//! Session configuration module

use serde::{Deserialize, Serialize};

/// Session lifetime configuration
///
/// The server-side session entry always uses `max_age_seconds`; the
/// "remember me" flag only decides whether the cookie persists across
/// browser restarts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Name of the session cookie
    pub cookie_name: String,

    /// Server-side session lifetime in seconds (default 14 days)
    #[serde(default = "default_max_age")]
    pub max_age_seconds: u64,

    /// Mark the cookie as Secure (HTTPS only)
    #[serde(default)]
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("sessionid"),
            max_age_seconds: default_max_age(),
            secure: false,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let cookie_name =
            std::env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "sessionid".to_string());
        let max_age_seconds = std::env::var("SESSION_MAX_AGE_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_age);
        let secure = std::env::var("SESSION_COOKIE_SECURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            cookie_name,
            max_age_seconds,
            secure,
        }
    }
}

/// 14 days, matching the framework default the site relied on
fn default_max_age() -> u64 {
    14 * 24 * 60 * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_config() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "sessionid");
        assert_eq!(config.max_age_seconds, 1_209_600);
        assert!(!config.secure);
    }
}
