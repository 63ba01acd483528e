//! Low-level HTTP gateway — `KisHttp`.
//!
//! Every KIS endpoint is the same mechanical call: attach the bearer token,
//! the app key/secret pair, and the operation's `tr_id` header, issue a
//! GET/POST against the resolved host, and hand back the parsed JSON body.
//! Domain sub-clients own paths and parameters; this layer owns headers,
//! status handling, and retries.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::TokenManager;
use crate::config::KisConfig;
use crate::error::{HttpError, KisError};
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network::HASHKEY_PATH;

const CONTENT_TYPE: &str = "application/json";

/// Per-request timeout applied to auth and proxied calls alike. KIS itself
/// imposes none, and an unbounded call would hang the caller.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct HashkeyResponse {
    #[serde(rename = "HASH")]
    hash: String,
}

/// Low-level gateway for the KIS REST API.
#[derive(Clone)]
pub struct KisHttp {
    client: reqwest::Client,
    config: Arc<KisConfig>,
    tokens: Arc<TokenManager>,
}

impl KisHttp {
    pub(crate) fn new(
        client: reqwest::Client,
        config: Arc<KisConfig>,
        tokens: Arc<TokenManager>,
    ) -> Self {
        Self {
            client,
            config,
            tokens,
        }
    }

    /// Build the shared `reqwest` client used by the gateway and the token
    /// manager.
    pub(crate) fn build_client() -> Result<reqwest::Client, KisError> {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| KisError::Http(HttpError::Reqwest(e)))
    }

    /// GET `{base}{path}` with standard KIS headers and a flat query set.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        tr_id: &str,
        query: &[(&str, &str)],
        retry: RetryPolicy,
    ) -> Result<T, KisError> {
        let url = format!("{}{}", base, path);
        match retry {
            RetryPolicy::None => self.do_get(&url, tr_id, query).await,
            RetryPolicy::Idempotent => {
                let config = RetryConfig::default();
                let mut last_error = None;

                for attempt in 0..=config.max_retries {
                    match self.do_get::<T>(&url, tr_id, query).await {
                        Ok(resp) => return Ok(resp),
                        Err(e) if retryable(&e, &config) => {
                            last_error = Some(e);
                            if attempt < config.max_retries {
                                let delay = config.delay_for_attempt(attempt);
                                tracing::debug!(
                                    attempt = attempt + 1,
                                    max = config.max_retries,
                                    delay_ms = delay.as_millis() as u64,
                                    "Retrying request to {}",
                                    url
                                );
                                futures_timer::Delay::new(delay).await;
                            }
                        }
                        Err(e) => return Err(e),
                    }
                }

                Err(HttpError::MaxRetriesExceeded {
                    attempts: config.max_retries + 1,
                    last_error: last_error
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "unknown".to_string()),
                }
                .into())
            }
        }
    }

    /// POST `{base}{path}` with standard KIS headers and a JSON body.
    /// Order endpoints additionally require a `hashkey` header derived from
    /// the body; never retried.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        base: &str,
        path: &str,
        tr_id: &str,
        body: &B,
        with_hashkey: bool,
    ) -> Result<T, KisError> {
        let url = format!("{}{}", base, path);
        let token = self.tokens.access_token().await?;

        let mut req = self
            .client
            .post(&url)
            .header("content-type", CONTENT_TYPE)
            .header("authorization", format!("Bearer {}", token))
            .header("appkey", &self.config.app_key)
            .header("appsecret", &self.config.app_secret)
            .header("tr_id", tr_id)
            .json(body);

        if with_hashkey {
            let hash = self.hashkey(base, body).await?;
            req = req.header("hashkey", hash);
        }

        let resp = req.send().await.map_err(HttpError::from)?;
        parse_response(resp).await
    }

    /// Exchange an order body for its server-side hash.
    pub(crate) async fn hashkey<B: Serialize>(
        &self,
        base: &str,
        body: &B,
    ) -> Result<String, KisError> {
        let url = format!("{}{}", base, HASHKEY_PATH);
        let token = self.tokens.access_token().await?;

        let resp = self
            .client
            .post(&url)
            .header("content-type", CONTENT_TYPE)
            .header("authorization", format!("Bearer {}", token))
            .header("appkey", &self.config.app_key)
            .header("appsecret", &self.config.app_secret)
            .json(body)
            .send()
            .await
            .map_err(HttpError::from)?;

        let parsed: HashkeyResponse = parse_response(resp).await?;
        Ok(parsed.hash)
    }

    async fn do_get<T: DeserializeOwned>(
        &self,
        url: &str,
        tr_id: &str,
        query: &[(&str, &str)],
    ) -> Result<T, KisError> {
        let token = self.tokens.access_token().await?;

        let resp = self
            .client
            .get(url)
            .header("content-type", CONTENT_TYPE)
            .header("authorization", format!("Bearer {}", token))
            .header("appkey", &self.config.app_key)
            .header("appsecret", &self.config.app_secret)
            .header("tr_id", tr_id)
            .query(query)
            .send()
            .await
            .map_err(HttpError::from)?;

        parse_response(resp).await
    }
}

async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, KisError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await.map_err(HttpError::from)?);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(HttpError::Upstream {
        status: status.as_u16(),
        body,
    }
    .into())
}

fn retryable(error: &KisError, config: &RetryConfig) -> bool {
    match error {
        KisError::Http(HttpError::Upstream { status, .. }) => {
            config.retryable_statuses.contains(status)
        }
        // Connect and timeout failures are transient; request-construction
        // failures are deterministic and excluded.
        KisError::Http(HttpError::Reqwest(e)) => e.is_connect() || e.is_timeout(),
        // Auth failures are not transient: retrying with the same
        // credentials cannot succeed.
        _ => false,
    }
}
