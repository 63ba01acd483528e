//! HTTP gateway for KIS endpoints, with per-request retry policies.

pub mod client;
pub mod retry;

pub use client::KisHttp;
pub use retry::{RetryConfig, RetryPolicy};
