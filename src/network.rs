//! KIS Open API host constants.

/// Production (real trading) REST host.
pub const REAL_DOMAIN: &str = "https://openapi.koreainvestment.com:9443";

/// Paper trading (모의투자) REST host.
pub const VIRTUAL_DOMAIN: &str = "https://openapivts.koreainvestment.com:29443";

/// Token issuance path (POST, client credentials).
pub const TOKEN_PATH: &str = "/oauth2/tokenP";

/// Hashkey issuance path (POST, order bodies).
pub const HASHKEY_PATH: &str = "/uapi/hashkey";
