//! Account inquiries — balance and order history.

pub mod client;

pub use client::Account;

use serde::Deserialize;

/// Balance response (`inquire-balance`). KIS splits the payload:
/// `output1` holds per-holding rows, `output2` the account summary.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub rt_cd: String,
    pub msg_cd: String,
    pub msg1: String,
    /// Holdings, one row per position.
    #[serde(default)]
    pub output1: Vec<serde_json::Value>,
    /// Account-level summary rows.
    #[serde(default)]
    pub output2: Vec<serde_json::Value>,
    /// Continuation keys for paged accounts.
    #[serde(default)]
    pub ctx_area_fk100: Option<String>,
    #[serde(default)]
    pub ctx_area_nk100: Option<String>,
}
