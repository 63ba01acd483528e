//! SDK configuration — credentials, account mode, token cache settings.
//!
//! Constructed once at process start and passed into the client; nothing
//! else in the SDK reads the process environment.

use std::path::PathBuf;

use chrono::Duration;

use crate::error::ConfigError;
use crate::routing::{AccountMode, DomainKind};

/// Default cached-token lifetime.
///
/// KIS documents roughly a 24 h token validity; 23 h leaves a safety margin
/// against clock drift. Override with [`KisConfig::token_ttl`] if the
/// provider's actual window turns out to differ.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 23;

/// Default token cache file, relative to the working directory.
pub const DEFAULT_TOKEN_PATH: &str = "token.json";

/// Static configuration for a [`KisClient`](crate::client::KisClient).
#[derive(Debug, Clone)]
pub struct KisConfig {
    /// Application key issued by KIS.
    pub app_key: String,
    /// Application secret issued by KIS.
    pub app_secret: String,
    /// Real vs paper trading environment.
    pub account_mode: AccountMode,
    /// Where the cached bearer token is persisted.
    pub token_path: PathBuf,
    /// Lifetime assigned to freshly issued tokens.
    pub token_ttl: Duration,
    /// Production host override (tests point this at a mock server).
    pub real_domain: Option<String>,
    /// Paper trading host override.
    pub virtual_domain: Option<String>,
}

impl KisConfig {
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            account_mode: AccountMode::Real,
            token_path: PathBuf::from(DEFAULT_TOKEN_PATH),
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            real_domain: None,
            virtual_domain: None,
        }
    }

    /// Read credentials and account mode from the environment.
    ///
    /// `KIS_APP_KEY` and `KIS_APP_SECRET` are required; `KIS_ACCOUNT_TYPE`
    /// defaults to `REAL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_key =
            std::env::var("KIS_APP_KEY").map_err(|_| ConfigError::MissingVar("KIS_APP_KEY"))?;
        let app_secret = std::env::var("KIS_APP_SECRET")
            .map_err(|_| ConfigError::MissingVar("KIS_APP_SECRET"))?;
        let mode = std::env::var("KIS_ACCOUNT_TYPE").ok();

        let mut config = Self::new(app_key, app_secret);
        config.account_mode = AccountMode::from_env_value(mode.as_deref());
        Ok(config)
    }

    /// Base URL for a resolved host, honoring overrides.
    pub fn domain_url(&self, kind: DomainKind) -> &str {
        let override_url = match kind {
            DomainKind::Real => self.real_domain.as_deref(),
            DomainKind::Virtual => self.virtual_domain.as_deref(),
        };
        override_url.unwrap_or_else(|| kind.url())
    }

    /// Host for order-mutating and account calls in the active mode.
    pub fn trading_url(&self) -> &str {
        match self.account_mode {
            AccountMode::Real => self.domain_url(DomainKind::Real),
            AccountMode::Virtual => self.domain_url(DomainKind::Virtual),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_override_wins() {
        let mut config = KisConfig::new("key", "secret");
        assert_eq!(
            config.domain_url(DomainKind::Real),
            crate::network::REAL_DOMAIN
        );
        config.real_domain = Some("http://127.0.0.1:9999".to_string());
        assert_eq!(config.domain_url(DomainKind::Real), "http://127.0.0.1:9999");
    }

    #[test]
    fn trading_url_follows_mode() {
        let mut config = KisConfig::new("key", "secret");
        assert_eq!(config.trading_url(), crate::network::REAL_DOMAIN);
        config.account_mode = AccountMode::Virtual;
        assert_eq!(config.trading_url(), crate::network::VIRTUAL_DOMAIN);
    }
}
