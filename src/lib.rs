//! # KIS SDK
//!
//! A Rust SDK for the Korea Investment & Securities (KIS) Open Trading API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — configuration, account-mode routing tables, error types
//! 2. **Auth** — bearer-token acquisition with a persistent, single-flight
//!    token cache
//! 3. **HTTP API** — `KisHttp` with KIS header assembly and per-request
//!    retry policies
//! 4. **High-Level Client** — `KisClient` with nested sub-clients per API
//!    family
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kis_sdk::prelude::*;
//!
//! let client = KisClient::from_env()?;
//!
//! let price = client.quotations().price("005930").await?;
//! println!("Samsung Electronics: {}", price.stck_prpr);
//!
//! let leaders = client.ranking().market_cap("NAS", "0", "").await?;
//! ```
//!
//! Credentials come from `KIS_APP_KEY` / `KIS_APP_SECRET`;
//! `KIS_ACCOUNT_TYPE=VIRTUAL` selects the paper trading environment.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// SDK configuration: credentials, account mode, token cache settings.
pub mod config;

/// Account-mode routing: operation name → host + transaction id.
pub mod routing;

/// Unified SDK error types.
pub mod error;

/// KIS host and path constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Bearer-token acquisition and caching.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP gateway with retry policies.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `KisClient` — the primary entry point.
pub mod client;

/// API-family modules (vertical slices): wire types and sub-clients.
pub mod domain;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Core
    pub use crate::config::KisConfig;
    pub use crate::error::{AuthError, ConfigError, HttpError, KisError};
    pub use crate::network::{REAL_DOMAIN, VIRTUAL_DOMAIN};
    pub use crate::routing::{AccountMode, DomainKind, Route};

    // Auth
    pub use crate::auth::{CachedToken, FileTokenStore, MemoryTokenStore, TokenStore};

    // HTTP
    pub use crate::http::{RetryConfig, RetryPolicy};

    // Client + sub-clients
    pub use crate::client::{
        AccountClient, KisClient, KisClientBuilder, OrdersClient, OverseasClient,
        QuotationsClient, RankingClient,
    };

    // Domain types
    pub use crate::domain::account::BalanceResponse;
    pub use crate::domain::order::{
        DomesticOrderRequest, OrderOutput, OverseasMarket, OverseasOrderRequest, Side,
    };
    pub use crate::domain::overseas::{BrokerNewsQuery, NewsQuery, PeriodRightsQuery};
    pub use crate::domain::quotations::PriceOutput;
    pub use crate::domain::KisEnvelope;
}
