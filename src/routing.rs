//! Account-mode routing — maps a logical operation name to the KIS host and
//! transaction id (`tr_id`) for the active account mode.
//!
//! Pure lookup over static tables: no state, no I/O, no failure path.
//! An unknown operation resolves to an absent `tr_id` — callers that need
//! one must guard against `None` themselves.

use crate::network::{REAL_DOMAIN, VIRTUAL_DOMAIN};

/// Real (live) vs virtual (paper trading) account environment.
///
/// Sourced once from `KIS_ACCOUNT_TYPE` at config construction and immutable
/// for the process lifetime. Unrecognized values fall back to `Real`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMode {
    Real,
    Virtual,
}

impl AccountMode {
    /// Parse the `KIS_ACCOUNT_TYPE` value. Anything other than
    /// `VIRTUAL` (case-insensitive) is treated as `Real`.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("VIRTUAL") => Self::Virtual,
            _ => Self::Real,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::Virtual => "VIRTUAL",
        }
    }
}

impl std::fmt::Display for AccountMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which KIS host a request should hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    /// Production host. Quotation endpoints always land here — KIS serves
    /// identical market data from a single host.
    Real,
    /// Paper trading host.
    Virtual,
}

impl DomainKind {
    /// Default URL for this host. `KisConfig` may override per-host URLs
    /// (used by tests pointing at a mock server).
    pub fn url(&self) -> &'static str {
        match self {
            Self::Real => REAL_DOMAIN,
            Self::Virtual => VIRTUAL_DOMAIN,
        }
    }

    fn for_mode(mode: AccountMode) -> Self {
        match mode {
            AccountMode::Real => Self::Real,
            AccountMode::Virtual => Self::Virtual,
        }
    }
}

/// Resolved routing target for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub domain: DomainKind,
    /// `None` when the operation has no registered transaction id.
    pub tr_id: Option<&'static str>,
}

/// Quotation reads served from the production host regardless of mode.
const QUOTATION_OPS: [&str; 4] = ["price", "stock_info", "stock_history", "stock_ask"];

/// Resolve `(mode, operation)` to a host and transaction id.
///
/// Domain policy:
/// - balance-style account queries → mode-specific host;
/// - quotation reads → production host always;
/// - order-mutating operations → mode-specific host.
pub fn resolve(mode: AccountMode, operation: &str) -> Route {
    let domain = if QUOTATION_OPS.contains(&operation) {
        DomainKind::Real
    } else {
        DomainKind::for_mode(mode)
    };
    Route {
        domain,
        tr_id: tr_id(mode, operation),
    }
}

/// Transaction id lookup. The two tables differ only in the leading
/// `T`/`V` of account and trading codes — quotation codes are shared.
pub fn tr_id(mode: AccountMode, operation: &str) -> Option<&'static str> {
    let id = match (mode, operation) {
        // Domestic account + trading
        (AccountMode::Real, "balance") => "TTTC8434R",
        (AccountMode::Virtual, "balance") => "VTTC8434R",
        (AccountMode::Real, "buy") => "TTTC0802U",
        (AccountMode::Virtual, "buy") => "VTTC0802U",
        (AccountMode::Real, "sell") => "TTTC0801U",
        (AccountMode::Virtual, "sell") => "VTTC0801U",
        (AccountMode::Real, "order_list") => "TTTC8001R",
        (AccountMode::Virtual, "order_list") => "VTTC8001R",
        (AccountMode::Real, "order_detail") => "TTTC8036R",
        (AccountMode::Virtual, "order_detail") => "VTTC8036R",

        // Domestic quotations (mode-invariant)
        (_, "price") => "FHKST01010100",
        (_, "stock_info") => "FHKST01010400",
        (_, "stock_history") => "FHKST03010200",
        (_, "stock_ask") => "FHKST01010200",

        // Overseas orders, per market
        (AccountMode::Real, "us_buy") => "TTTT1002U",
        (AccountMode::Virtual, "us_buy") => "VTTT1002U",
        (AccountMode::Real, "us_sell") => "TTTT1006U",
        (AccountMode::Virtual, "us_sell") => "VTTT1001U",
        (AccountMode::Real, "jp_buy") => "TTTS0308U",
        (AccountMode::Virtual, "jp_buy") => "VTTS0308U",
        (AccountMode::Real, "jp_sell") => "TTTS0307U",
        (AccountMode::Virtual, "jp_sell") => "VTTS0307U",
        (AccountMode::Real, "sh_buy") => "TTTS0202U",
        (AccountMode::Virtual, "sh_buy") => "VTTS0202U",
        (AccountMode::Real, "sh_sell") => "TTTS1005U",
        (AccountMode::Virtual, "sh_sell") => "VTTS1005U",
        (AccountMode::Real, "hk_buy") => "TTTS1002U",
        (AccountMode::Virtual, "hk_buy") => "VTTS1002U",
        (AccountMode::Real, "hk_sell") => "TTTS1001U",
        (AccountMode::Virtual, "hk_sell") => "VTTS1001U",
        (AccountMode::Real, "sz_buy") => "TTTS0305U",
        (AccountMode::Virtual, "sz_buy") => "VTTS0305U",
        (AccountMode::Real, "sz_sell") => "TTTS0304U",
        (AccountMode::Virtual, "sz_sell") => "VTTS0304U",
        (AccountMode::Real, "vn_buy") => "TTTS0311U",
        (AccountMode::Virtual, "vn_buy") => "VTTS0311U",
        (AccountMode::Real, "vn_sell") => "TTTS0310U",
        (AccountMode::Virtual, "vn_sell") => "VTTS0310U",

        _ => return None,
    };
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{REAL_DOMAIN, VIRTUAL_DOMAIN};

    #[test]
    fn balance_routes_to_mode_specific_host() {
        let real = resolve(AccountMode::Real, "balance");
        assert_eq!(real.domain.url(), REAL_DOMAIN);
        assert_eq!(real.tr_id, Some("TTTC8434R"));

        let virt = resolve(AccountMode::Virtual, "balance");
        assert_eq!(virt.domain.url(), VIRTUAL_DOMAIN);
        assert_eq!(virt.tr_id, Some("VTTC8434R"));
    }

    #[test]
    fn quotations_always_use_production_host() {
        for op in ["price", "stock_info", "stock_history", "stock_ask"] {
            let route = resolve(AccountMode::Virtual, op);
            assert_eq!(route.domain, DomainKind::Real, "op {op}");
        }
        let route = resolve(AccountMode::Virtual, "price");
        assert_eq!(route.tr_id, Some("FHKST01010100"));
    }

    #[test]
    fn quotation_tr_ids_are_shared_across_modes() {
        for op in ["price", "stock_info", "stock_history", "stock_ask"] {
            assert_eq!(
                tr_id(AccountMode::Real, op),
                tr_id(AccountMode::Virtual, op),
                "op {op}"
            );
        }
    }

    #[test]
    fn trading_tr_ids_differ_across_modes() {
        for op in [
            "buy", "sell", "balance", "order_list", "order_detail", "us_buy", "us_sell", "jp_buy",
            "jp_sell", "sh_buy", "sh_sell", "hk_buy", "hk_sell", "sz_buy", "sz_sell", "vn_buy",
            "vn_sell",
        ] {
            let real = tr_id(AccountMode::Real, op).unwrap();
            let virt = tr_id(AccountMode::Virtual, op).unwrap();
            assert_ne!(real, virt, "op {op}");
        }
    }

    #[test]
    fn unknown_operation_resolves_without_tr_id() {
        let route = resolve(AccountMode::Real, "does-not-exist");
        assert_eq!(route.tr_id, None);
        assert_eq!(route.domain, DomainKind::Real);
    }

    #[test]
    fn resolution_is_pure() {
        for _ in 0..3 {
            assert_eq!(
                resolve(AccountMode::Virtual, "buy"),
                resolve(AccountMode::Virtual, "buy")
            );
        }
    }

    #[test]
    fn mode_parsing_defaults_to_real() {
        assert_eq!(AccountMode::from_env_value(None), AccountMode::Real);
        assert_eq!(AccountMode::from_env_value(Some("REAL")), AccountMode::Real);
        assert_eq!(
            AccountMode::from_env_value(Some("virtual")),
            AccountMode::Virtual
        );
        assert_eq!(AccountMode::from_env_value(Some("paper")), AccountMode::Real);
    }
}
