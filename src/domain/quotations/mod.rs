//! Domestic (KRX) quotations — types and sub-client.
//!
//! Quotation reads are served from the production host in both account
//! modes; their transaction ids are mode-invariant.

pub mod client;

pub use client::Quotations;

use serde::{Deserialize, Serialize};

/// Current-price payload for a domestic stock
/// (`FHKST01010100`, `output` of `inquire-price`).
///
/// KIS returns every numeric field as a string; the SDK passes them through
/// unconverted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceOutput {
    /// Current price.
    pub stck_prpr: String,
    /// Change from the previous close.
    pub prdy_vrss: String,
    /// Change direction sign.
    pub prdy_vrss_sign: String,
    /// Change rate (%).
    pub prdy_ctrt: String,
    /// Accumulated volume.
    pub acml_vol: String,
    /// Accumulated trade value.
    pub acml_tr_pbmn: String,
    /// Stock name (Korean).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hts_kor_isnm: Option<String>,
    /// Upper limit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stck_mxpr: Option<String>,
    /// Lower limit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stck_llam: Option<String>,
    /// Opening price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stck_oprc: Option<String>,
    /// Previous day's closing price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stck_prdy_clpr: Option<String>,
}
