//! High-level client — `KisClient` with nested sub-client accessors.
//!
//! Each API family has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use std::sync::Arc;

use crate::auth::{FileTokenStore, TokenManager, TokenStore};
use crate::config::KisConfig;
use crate::domain::account::client::Account;
use crate::domain::order::client::Orders;
use crate::domain::overseas::client::Overseas;
use crate::domain::quotations::client::Quotations;
use crate::domain::ranking::client::Ranking;
use crate::error::KisError;
use crate::http::KisHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::overseas::client::Overseas as OverseasClient;
pub use crate::domain::quotations::client::Quotations as QuotationsClient;
pub use crate::domain::ranking::client::Ranking as RankingClient;

/// The primary entry point for the KIS SDK.
///
/// Provides nested sub-client accessors for each API family:
/// `client.quotations()`, `client.orders()`, etc.
#[derive(Clone)]
pub struct KisClient {
    pub(crate) config: Arc<KisConfig>,
    pub(crate) http: KisHttp,
    pub(crate) tokens: Arc<TokenManager>,
}

impl KisClient {
    pub fn builder() -> KisClientBuilder {
        KisClientBuilder::default()
    }

    /// Build a client from `KIS_APP_KEY` / `KIS_APP_SECRET` /
    /// `KIS_ACCOUNT_TYPE`.
    pub fn from_env() -> Result<Self, KisError> {
        Self::builder().build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn quotations(&self) -> Quotations<'_> {
        Quotations { client: self }
    }

    pub fn overseas(&self) -> Overseas<'_> {
        Overseas { client: self }
    }

    pub fn ranking(&self) -> Ranking<'_> {
        Ranking { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    /// The active configuration.
    pub fn config(&self) -> &KisConfig {
        &self.config
    }

    /// A valid bearer token, refreshed if the cached one expired.
    /// Exposed for callers composing requests outside the SDK.
    pub async fn access_token(&self) -> Result<String, KisError> {
        self.tokens.access_token().await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct KisClientBuilder {
    config: Option<KisConfig>,
    store: Option<Box<dyn TokenStore>>,
}

impl KisClientBuilder {
    /// Use an explicit configuration instead of the environment.
    pub fn config(mut self, config: KisConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Substitute the token store (tests use
    /// [`MemoryTokenStore`](crate::auth::MemoryTokenStore)).
    pub fn token_store(mut self, store: Box<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<KisClient, KisError> {
        let config = match self.config {
            Some(config) => config,
            None => KisConfig::from_env()?,
        };
        let config = Arc::new(config);

        let store = self
            .store
            .unwrap_or_else(|| Box::new(FileTokenStore::new(&config.token_path)));

        let client = KisHttp::build_client()?;
        let tokens = Arc::new(TokenManager::new(client.clone(), config.clone(), store));
        let http = KisHttp::new(client, config.clone(), tokens.clone());

        Ok(KisClient {
            config,
            http,
            tokens,
        })
    }
}
