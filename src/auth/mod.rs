//! Bearer-token acquisition and caching.
//!
//! KIS issues OAuth-style client-credential tokens valid for roughly a day.
//! The SDK caches one token per installation in a single JSON record
//! (`{ "token": ..., "expires_at": <ISO-8601> }`), reuses it until expiry,
//! and refreshes under a single-flight mutex so concurrent callers racing
//! past an expired token trigger only one authorization round-trip.
//!
//! A corrupt or unreadable cache record is never fatal — it degrades to a
//! cache miss with a logged warning.

pub mod manager;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use manager::TokenManager;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};

/// A persisted bearer token with its absolute expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedToken {
    /// Opaque bearer credential.
    pub token: String,
    /// Absolute expiry; the token is usable iff `now < expires_at`.
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Request body for `POST /oauth2/tokenP`.
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub grant_type: &'static str,
    pub appkey: &'a str,
    pub appsecret: &'a str,
}

/// Response body from `POST /oauth2/tokenP`. Only `access_token` is used.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn token_valid_strictly_before_expiry() {
        let now = Utc::now();
        let token = CachedToken {
            token: "abc".to_string(),
            expires_at: now,
        };
        assert!(!token.is_valid(now));
        assert!(token.is_valid(now - Duration::seconds(1)));
        assert!(!token.is_valid(now + Duration::seconds(1)));
    }

    #[test]
    fn cached_token_round_trips_with_iso_expiry() {
        let token = CachedToken {
            token: "tok-1".to_string(),
            expires_at: "2026-01-02T03:04:05Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"token\""));
        assert!(json.contains("2026-01-02T03:04:05"));
        let back: CachedToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
