//! Ranking sub-client — overseas market-analysis leaderboards.
//!
//! All endpoints live under `/uapi/overseas-stock/v1/ranking/` and return a
//! two-part `output1`/`output2` body that the SDK passes through raw.
//! Common parameters: `EXCD` exchange name, `VOL_RANG` volume condition,
//! `KEYB` continuation cursor.

use crate::client::KisClient;
use crate::domain::require;
use crate::error::KisError;
use crate::http::RetryPolicy;

const RANKING_BASE: &str = "/uapi/overseas-stock/v1/ranking";

/// Sub-client for overseas ranking inquiries.
pub struct Ranking<'a> {
    pub(crate) client: &'a KisClient,
}

impl<'a> Ranking<'a> {
    /// Volume surge vs N minutes ago (`minutes_code` `0`..`9`).
    pub async fn volume_surge(
        &self,
        exchange: &str,
        minutes_code: &str,
        volume_range: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NYS")?;
        require("minutes_code", minutes_code, "0")?;
        require("volume_range", volume_range, "0")?;
        self.rank(
            "volume-surge",
            "HHDFS76270000",
            &[
                ("EXCD", exchange),
                ("MIXN", minutes_code),
                ("VOL_RANG", volume_range),
                ("KEYB", cursor),
                ("AUTH", ""),
            ],
        )
        .await
    }

    /// Buy conclusion strength over N days.
    pub async fn volume_power(
        &self,
        exchange: &str,
        days_code: &str,
        volume_range: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NYS")?;
        require("days_code", days_code, "0")?;
        require("volume_range", volume_range, "0")?;
        self.rank(
            "volume-power",
            "HHDFS76280000",
            &[
                ("EXCD", exchange),
                ("NDAY", days_code),
                ("VOL_RANG", volume_range),
                ("AUTH", ""),
                ("KEYB", cursor),
            ],
        )
        .await
    }

    /// Gainers or losers over N days (`direction` `1` up / `0` down).
    pub async fn updown_rate(
        &self,
        exchange: &str,
        days_code: &str,
        direction: &str,
        volume_range: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NYS")?;
        require("days_code", days_code, "0")?;
        require("direction", direction, "1")?;
        require("volume_range", volume_range, "0")?;
        self.rank(
            "updown-rate",
            "HHDFS76290000",
            &[
                ("EXCD", exchange),
                ("NDAY", days_code),
                ("GUBN", direction),
                ("VOL_RANG", volume_range),
                ("AUTH", ""),
                ("KEYB", cursor),
            ],
        )
        .await
    }

    /// Volume leaders, optionally bounded to a price band.
    pub async fn trade_volume(
        &self,
        exchange: &str,
        days_code: &str,
        volume_range: &str,
        price_low: &str,
        price_high: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NYS")?;
        require("days_code", days_code, "0")?;
        require("volume_range", volume_range, "0")?;
        self.rank(
            "trade-vol",
            "HHDFS76310010",
            &[
                ("EXCD", exchange),
                ("NDAY", days_code),
                ("VOL_RANG", volume_range),
                ("KEYB", cursor),
                ("AUTH", ""),
                ("PRC1", price_low),
                ("PRC2", price_high),
            ],
        )
        .await
    }

    /// Turnover-rate leaders.
    pub async fn trade_turnover(
        &self,
        exchange: &str,
        days_code: &str,
        volume_range: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NYS")?;
        require("days_code", days_code, "0")?;
        require("volume_range", volume_range, "0")?;
        self.rank(
            "trade-turnover",
            "HHDFS76340000",
            &[
                ("EXCD", exchange),
                ("NDAY", days_code),
                ("VOL_RANG", volume_range),
                ("KEYB", cursor),
                ("AUTH", ""),
            ],
        )
        .await
    }

    /// Trade-value leaders, optionally bounded to a price band.
    pub async fn trade_value(
        &self,
        exchange: &str,
        days_code: &str,
        volume_range: &str,
        price_low: &str,
        price_high: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NYS")?;
        require("days_code", days_code, "0")?;
        require("volume_range", volume_range, "0")?;
        self.rank(
            "trade-pbmn",
            "HHDFS76320010",
            &[
                ("EXCD", exchange),
                ("NDAY", days_code),
                ("VOL_RANG", volume_range),
                ("AUTH", ""),
                ("KEYB", cursor),
                ("PRC1", price_low),
                ("PRC2", price_high),
            ],
        )
        .await
    }

    /// Trade-growth leaders.
    pub async fn trade_growth(
        &self,
        exchange: &str,
        days_code: &str,
        volume_range: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NYS")?;
        require("days_code", days_code, "0")?;
        require("volume_range", volume_range, "0")?;
        self.rank(
            "trade-growth",
            "HHDFS76330000",
            &[
                ("EXCD", exchange),
                ("NDAY", days_code),
                ("VOL_RANG", volume_range),
                ("AUTH", ""),
                ("KEYB", cursor),
            ],
        )
        .await
    }

    /// Sudden price moves vs N minutes ago (`direction` `1` surge / `0` drop).
    pub async fn price_fluctuation(
        &self,
        exchange: &str,
        direction: &str,
        minutes_code: &str,
        volume_range: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NYS")?;
        require("direction", direction, "1")?;
        require("minutes_code", minutes_code, "0")?;
        require("volume_range", volume_range, "0")?;
        self.rank(
            "price-fluct",
            "HHDFS76260000",
            &[
                ("EXCD", exchange),
                ("GUBN", direction),
                ("MIXN", minutes_code),
                ("VOL_RANG", volume_range),
                ("KEYB", cursor),
                ("AUTH", ""),
            ],
        )
        .await
    }

    /// New highs/lows (`direction` `1` high / `0` low, `match_kind`
    /// `1` breakout / `0` touch).
    pub async fn new_high_low(
        &self,
        exchange: &str,
        minutes_code: &str,
        volume_range: &str,
        direction: &str,
        match_kind: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NYS")?;
        require("minutes_code", minutes_code, "0")?;
        require("volume_range", volume_range, "0")?;
        require("direction", direction, "1")?;
        require("match_kind", match_kind, "1")?;
        self.rank(
            "new-highlow",
            "HHDFS76300000",
            &[
                ("EXCD", exchange),
                ("MIXN", minutes_code),
                ("VOL_RANG", volume_range),
                ("GUBN", direction),
                ("GUBN2", match_kind),
                ("KEYB", cursor),
                ("AUTH", ""),
            ],
        )
        .await
    }

    /// Market-cap leaders.
    pub async fn market_cap(
        &self,
        exchange: &str,
        volume_range: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NYS")?;
        require("volume_range", volume_range, "0")?;
        self.rank(
            "market-cap",
            "HHDFS76350100",
            &[
                ("EXCD", exchange),
                ("VOL_RANG", volume_range),
                ("KEYB", cursor),
                ("AUTH", ""),
            ],
        )
        .await
    }

    async fn rank(
        &self,
        endpoint: &str,
        tr_id: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, KisError> {
        let base = self.client.config().trading_url();
        let path = format!("{}/{}", RANKING_BASE, endpoint);
        self.client
            .http
            .get(base, &path, tr_id, query, RetryPolicy::Idempotent)
            .await
    }
}
