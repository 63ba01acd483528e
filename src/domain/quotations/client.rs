//! Quotations sub-client — domestic price, asking price, daily prices.

use crate::client::KisClient;
use crate::domain::quotations::PriceOutput;
use crate::domain::{require, route_for, KisEnvelope};
use crate::error::KisError;
use crate::http::RetryPolicy;

const PRICE_PATH: &str = "/uapi/domestic-stock/v1/quotations/inquire-price";
const ASK_PATH: &str = "/uapi/domestic-stock/v1/quotations/inquire-asking-price-exp-ccn";
const DAILY_PRICE_PATH: &str = "/uapi/domestic-stock/v1/quotations/inquire-daily-price";
const DAILY_CHART_PATH: &str = "/uapi/domestic-stock/v1/quotations/inquire-daily-itemchartprice";

/// KRX market division code used by all domestic quotation calls.
const MARKET_DIV_STOCK: &str = "J";

/// Sub-client for domestic stock quotations.
pub struct Quotations<'a> {
    pub(crate) client: &'a KisClient,
}

impl<'a> Quotations<'a> {
    /// Current price for a domestic stock (`symbol` like `"005930"`).
    pub async fn price(&self, symbol: &str) -> Result<PriceOutput, KisError> {
        require("symbol", symbol, "005930")?;
        let (base, tr_id) = route_for(self.client.config(), "price")?;

        let envelope: KisEnvelope<PriceOutput> = self
            .client
            .http
            .get(
                base,
                PRICE_PATH,
                tr_id,
                &[
                    ("fid_cond_mrkt_div_code", MARKET_DIV_STOCK),
                    ("fid_input_iscd", symbol),
                ],
                RetryPolicy::Idempotent,
            )
            .await?;
        envelope.into_output()
    }

    /// Order book (asking prices and expected conclusion) for a stock.
    pub async fn asking_price(&self, symbol: &str) -> Result<serde_json::Value, KisError> {
        require("symbol", symbol, "005930")?;
        let (base, tr_id) = route_for(self.client.config(), "stock_ask")?;

        self.client
            .http
            .get(
                base,
                ASK_PATH,
                tr_id,
                &[
                    ("fid_cond_mrkt_div_code", MARKET_DIV_STOCK),
                    ("fid_input_iscd", symbol),
                ],
                RetryPolicy::Idempotent,
            )
            .await
    }

    /// Daily/weekly/monthly prices (`period` is `D`, `W` or `M`;
    /// `adjusted` controls adjusted-price reporting).
    pub async fn daily_price(
        &self,
        symbol: &str,
        period: &str,
        adjusted: bool,
    ) -> Result<serde_json::Value, KisError> {
        require("symbol", symbol, "005930")?;
        require("period", period, "D")?;
        let (base, tr_id) = route_for(self.client.config(), "stock_info")?;

        self.client
            .http
            .get(
                base,
                DAILY_PRICE_PATH,
                tr_id,
                &[
                    ("fid_cond_mrkt_div_code", MARKET_DIV_STOCK),
                    ("fid_input_iscd", symbol),
                    ("fid_period_div_code", period),
                    ("fid_org_adj_prc", if adjusted { "0" } else { "1" }),
                ],
                RetryPolicy::Idempotent,
            )
            .await
    }

    /// Daily candle history over a date range (`YYYYMMDD` bounds).
    pub async fn daily_chart(
        &self,
        symbol: &str,
        start_date: &str,
        end_date: &str,
        period: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("symbol", symbol, "005930")?;
        require("start_date", start_date, "20240101")?;
        require("end_date", end_date, "20240131")?;
        require("period", period, "D")?;
        let (base, tr_id) = route_for(self.client.config(), "stock_history")?;

        self.client
            .http
            .get(
                base,
                DAILY_CHART_PATH,
                tr_id,
                &[
                    ("fid_cond_mrkt_div_code", MARKET_DIV_STOCK),
                    ("fid_input_iscd", symbol),
                    ("fid_input_date_1", start_date),
                    ("fid_input_date_2", end_date),
                    ("fid_period_div_code", period),
                    ("fid_org_adj_prc", "0"),
                ],
                RetryPolicy::Idempotent,
            )
            .await
    }
}
