//! Token manager — cache-first access with single-flight refresh.

use std::sync::Arc;

use async_lock::Mutex;
use chrono::Utc;

use crate::auth::{CachedToken, TokenRequest, TokenResponse, TokenStore};
use crate::config::KisConfig;
use crate::error::{AuthError, KisError};
use crate::network::TOKEN_PATH;
use crate::routing::DomainKind;

/// Provides a valid bearer token, minimizing authorization round-trips.
pub struct TokenManager {
    client: reqwest::Client,
    config: Arc<KisConfig>,
    store: Box<dyn TokenStore>,
    /// Single-flight guard: callers racing past an expired token queue
    /// here, and all but the first observe the winner's write on re-check.
    refresh: Mutex<()>,
}

impl TokenManager {
    pub fn new(client: reqwest::Client, config: Arc<KisConfig>, store: Box<dyn TokenStore>) -> Self {
        Self {
            client,
            config,
            store,
            refresh: Mutex::new(()),
        }
    }

    /// Return a valid bearer token, refreshing from the provider only when
    /// the cached record is absent or expired.
    pub async fn access_token(&self) -> Result<String, KisError> {
        if let Some(cached) = self.store.load() {
            if cached.is_valid(Utc::now()) {
                return Ok(cached.token);
            }
        }

        let _guard = self.refresh.lock().await;

        // A queued waiter re-checks: the winner already persisted a fresh
        // token, so only one authorization call goes out per expiry.
        if let Some(cached) = self.store.load() {
            if cached.is_valid(Utc::now()) {
                return Ok(cached.token);
            }
        }

        self.refresh().await
    }

    async fn refresh(&self) -> Result<String, KisError> {
        // Tokens are always issued by the production host, in both modes.
        let url = format!("{}{}", self.config.domain_url(DomainKind::Real), TOKEN_PATH);
        let body = TokenRequest {
            grant_type: "client_credentials",
            appkey: &self.config.app_key,
            appsecret: &self.config.app_secret,
        };

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(crate::error::HttpError::from)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: TokenResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        let cached = CachedToken {
            token: parsed.access_token,
            expires_at: Utc::now() + self.config.token_ttl,
        };
        if let Err(e) = self.store.save(&cached) {
            // A failed write only costs the next call a refresh.
            tracing::warn!(error = %e, "Failed to persist token cache");
        }
        tracing::debug!(expires_at = %cached.expires_at, "Issued new access token");

        Ok(cached.token)
    }
}
