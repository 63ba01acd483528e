//! Overseas quotations — types and sub-client.
//!
//! Overseas market data rides the trading host for the active account mode;
//! the transaction ids themselves are mode-invariant.

pub mod client;

pub use client::Overseas;

/// Query for the consolidated overseas news-title feed (`HHPSTH60100C1`).
/// Every field is optional; empty strings mean "no filter".
#[derive(Debug, Clone, Default)]
pub struct NewsQuery {
    /// News category.
    pub info_gb: String,
    /// Classification code.
    pub class_cd: String,
    /// Nation code.
    pub nation_cd: String,
    /// Exchange code.
    pub exchange_cd: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Date filter (`YYYYMMDD`).
    pub date: String,
    /// Time filter (`HHMMSS`).
    pub time: String,
    /// Continuation cursor.
    pub cts: String,
}

/// Query for broker news titles (`FHKST01011801`).
#[derive(Debug, Clone, Default)]
pub struct BrokerNewsQuery {
    pub provider_code: String,
    pub screen_div_code: String,
    pub market_cls_code: String,
    pub symbol: String,
    pub title_text: String,
    pub date: String,
    pub hour: String,
    pub rank_sort_cls_code: String,
    pub serial_no: String,
}

/// Query for the overseas period-rights lookup (`CTRGT011R`).
#[derive(Debug, Clone)]
pub struct PeriodRightsQuery {
    /// Rights type code (`%%` for all).
    pub rights_type_code: String,
    /// Inquiry division code.
    pub inquiry_division_code: String,
    /// Inquiry window start (`YYYYMMDD`).
    pub start_date: String,
    /// Inquiry window end (`YYYYMMDD`).
    pub end_date: String,
    /// Product number (ticker), optional.
    pub product_no: String,
    /// Product type code, optional.
    pub product_type_code: String,
    /// Continuation keys, empty on the first call.
    pub ctx_area_nk50: String,
    pub ctx_area_fk50: String,
}
