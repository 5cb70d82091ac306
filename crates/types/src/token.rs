//! Bearer token representation and expiry logic.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A bearer token obtained from the client-credentials exchange.
///
/// Expiry is informational only: nothing in this crate refreshes a token.
/// Callers that hold tokens across calls can use [`is_expired`] to decide
/// when to acquire a new one.
///
/// [`is_expired`]: GraphToken::is_expired
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphToken {
    pub access_token: String,
    /// Absolute expiry instant (unix seconds); `None` when the token
    /// endpoint did not report a lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
}

impl GraphToken {
    /// Create a token with no known expiry.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Set the expiry to `expires_in_secs` seconds from now.
    #[must_use]
    pub fn with_expiry(mut self, expires_in_secs: u64) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs();
        self.expires_at = Some(now + expires_in_secs);
        self
    }

    /// Return `true` if the token's reported lifetime has elapsed.
    ///
    /// A token without an expiry is never considered expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        let Some(expires_at) = self.expires_at else {
            return false;
        };
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs();
        now >= expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    #[test]
    fn test_no_expiry_never_expired() {
        let t = GraphToken::new("tok");
        assert_eq!(t.expires_at, None);
        assert!(!t.is_expired());
    }

    #[test]
    fn test_with_expiry_is_in_the_future() {
        let before = now_secs();
        let t = GraphToken::new("tok").with_expiry(3599);
        assert!(t.expires_at.unwrap() > before);
        assert!(!t.is_expired());
    }

    #[test]
    fn test_elapsed_lifetime_is_expired() {
        let t = GraphToken {
            access_token: "old".into(),
            expires_at: Some(now_secs().saturating_sub(100)),
        };
        assert!(t.is_expired());
    }

    #[test]
    fn test_serde_skips_absent_expiry() {
        let json = serde_json::to_string(&GraphToken::new("tok")).unwrap();
        assert!(!json.contains("expires_at"));
    }
}
