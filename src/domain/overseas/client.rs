//! Overseas quotations sub-client.
//!
//! One method per endpoint, each a mechanical mapping: validate required
//! parameters, attach the endpoint's transaction id, GET, return the raw
//! JSON envelope.

use crate::client::KisClient;
use crate::domain::overseas::{BrokerNewsQuery, NewsQuery, PeriodRightsQuery};
use crate::domain::require;
use crate::error::KisError;
use crate::http::RetryPolicy;

const PRICE_PATH: &str = "/uapi/overseas-price/v1/quotations/price";
const PRICE_DETAIL_PATH: &str = "/uapi/overseas-price/v1/quotations/price-detail";
const DAILY_PRICE_PATH: &str = "/uapi/overseas-price/v1/quotations/dailyprice";
const ASKING_PRICE_PATH: &str = "/uapi/overseas-price/v1/quotations/inquire-asking-price";
const CCNL_PATH: &str = "/uapi/overseas-price/v1/quotations/inquire-ccnl";
const DAILY_CHART_PATH: &str = "/uapi/overseas-price/v1/quotations/inquire-daily-chartprice";
const TIME_ITEM_CHART_PATH: &str =
    "/uapi/overseas-price/v1/quotations/inquire-time-itemchartprice";
const TIME_INDEX_CHART_PATH: &str =
    "/uapi/overseas-price/v1/quotations/inquire-time-indexchartprice";
const SEARCH_PATH: &str = "/uapi/overseas-price/v1/quotations/inquire-search";
const SEARCH_INFO_PATH: &str = "/uapi/overseas-price/v1/quotations/search-info";
const INDUSTRY_THEME_PATH: &str = "/uapi/overseas-price/v1/quotations/industry-theme";
const INDUSTRY_PRICE_PATH: &str = "/uapi/overseas-price/v1/quotations/industry-price";
const PERIOD_RIGHTS_PATH: &str = "/uapi/overseas-price/v1/quotations/period-rights";
const NEWS_TITLE_PATH: &str = "/uapi/overseas-price/v1/quotations/news-title";
const BRKNEWS_TITLE_PATH: &str = "/uapi/overseas-price/v1/quotations/brknews-title";

const TR_PRICE: &str = "HHDFS00000300";
const TR_PRICE_DETAIL: &str = "HHDFS76200200";
const TR_DAILY_PRICE: &str = "HHDFS76240000";
const TR_ASKING_PRICE: &str = "HHDFS76200100";
const TR_CCNL: &str = "HHDFS76200300";
const TR_DAILY_CHART: &str = "FHKST03030100";
const TR_TIME_ITEM_CHART: &str = "HHDFS76950200";
const TR_TIME_INDEX_CHART: &str = "FHKST03030200";
const TR_SEARCH: &str = "HHDFS76410000";
const TR_SEARCH_INFO: &str = "CTPF1702R";
const TR_INDUSTRY_THEME: &str = "HHDFS76370000";
const TR_INDUSTRY_PRICE: &str = "HHDFS76370100";
const TR_PERIOD_RIGHTS: &str = "CTRGT011R";
const TR_NEWS_TITLE: &str = "HHPSTH60100C1";
const TR_BRKNEWS_TITLE: &str = "FHKST01011801";

/// Sub-client for overseas stock quotations.
pub struct Overseas<'a> {
    pub(crate) client: &'a KisClient,
}

impl<'a> Overseas<'a> {
    /// Last conclusion price (`exchange` like `"NAS"`, `symbol` like `"AAPL"`).
    pub async fn price(&self, exchange: &str, symbol: &str) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NAS")?;
        require("symbol", symbol, "AAPL")?;
        self.get(
            PRICE_PATH,
            TR_PRICE,
            &[("AUTH", ""), ("EXCD", exchange), ("SYMB", symbol)],
        )
        .await
    }

    /// Current price with extended detail fields.
    pub async fn price_detail(
        &self,
        exchange: &str,
        symbol: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NAS")?;
        require("symbol", symbol, "AAPL")?;
        self.get(
            PRICE_DETAIL_PATH,
            TR_PRICE_DETAIL,
            &[("AUTH", ""), ("EXCD", exchange), ("SYMB", symbol)],
        )
        .await
    }

    /// Period prices. `period` is `0` daily / `1` weekly / `2` monthly,
    /// `end_date` is a `YYYYMMDD` upper bound (empty for today) and
    /// `adjusted` selects adjusted prices.
    pub async fn daily_price(
        &self,
        exchange: &str,
        symbol: &str,
        period: &str,
        end_date: &str,
        adjusted: bool,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NAS")?;
        require("symbol", symbol, "AAPL")?;
        require("period", period, "0")?;
        self.get(
            DAILY_PRICE_PATH,
            TR_DAILY_PRICE,
            &[
                ("AUTH", ""),
                ("EXCD", exchange),
                ("SYMB", symbol),
                ("GUBN", period),
                ("BYMD", end_date),
                ("MODP", if adjusted { "1" } else { "0" }),
            ],
        )
        .await
    }

    /// Current order book (first ask/bid).
    pub async fn asking_price(
        &self,
        exchange: &str,
        symbol: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NAS")?;
        require("symbol", symbol, "AAPL")?;
        self.get(
            ASKING_PRICE_PATH,
            TR_ASKING_PRICE,
            &[("AUTH", ""), ("EXCD", exchange), ("SYMB", symbol)],
        )
        .await
    }

    /// Conclusion strength by tick. `today_only` limits to the current
    /// session; `cursor` continues a previous page.
    pub async fn conclusions(
        &self,
        exchange: &str,
        symbol: &str,
        today_only: bool,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NAS")?;
        require("symbol", symbol, "AAPL")?;
        self.get(
            CCNL_PATH,
            TR_CCNL,
            &[
                ("EXCD", exchange),
                ("TDAY", if today_only { "1" } else { "0" }),
                ("SYMB", symbol),
                ("AUTH", ""),
                ("KEYB", cursor),
            ],
        )
        .await
    }

    /// Daily candles over a date range. `market_div` is `N` for overseas
    /// indexes, `X` for exchange rates.
    pub async fn daily_chart(
        &self,
        market_div: &str,
        symbol: &str,
        start_date: &str,
        end_date: &str,
        period: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("market_div", market_div, "N")?;
        require("symbol", symbol, ".DJI")?;
        require("start_date", start_date, "20240101")?;
        require("end_date", end_date, "20240131")?;
        require("period", period, "D")?;
        self.get(
            DAILY_CHART_PATH,
            TR_DAILY_CHART,
            &[
                ("FID_COND_MRKT_DIV_CODE", market_div),
                ("FID_INPUT_ISCD", symbol),
                ("FID_INPUT_DATE_1", start_date),
                ("FID_INPUT_DATE_2", end_date),
                ("FID_PERIOD_DIV_CODE", period),
            ],
        )
        .await
    }

    /// Minute candles for a stock. `minutes` is the bar width, `include_prev`
    /// pulls the previous session too, `records` caps the row count.
    pub async fn time_item_chart(
        &self,
        exchange: &str,
        symbol: &str,
        minutes: &str,
        include_prev: bool,
        records: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NAS")?;
        require("symbol", symbol, "AAPL")?;
        require("minutes", minutes, "1")?;
        self.get(
            TIME_ITEM_CHART_PATH,
            TR_TIME_ITEM_CHART,
            &[
                ("AUTH", ""),
                ("EXCD", exchange),
                ("SYMB", symbol),
                ("NMIN", minutes),
                ("PINC", if include_prev { "1" } else { "0" }),
                ("NEXT", ""),
                ("NREC", records),
                ("FILL", ""),
                ("KEYB", cursor),
            ],
        )
        .await
    }

    /// Minute candles for an overseas index.
    pub async fn time_index_chart(
        &self,
        market_div: &str,
        symbol: &str,
        hour_cls: &str,
        include_past: bool,
    ) -> Result<serde_json::Value, KisError> {
        require("market_div", market_div, "N")?;
        require("symbol", symbol, ".DJI")?;
        require("hour_cls", hour_cls, "0")?;
        self.get(
            TIME_INDEX_CHART_PATH,
            TR_TIME_INDEX_CHART,
            &[
                ("FID_COND_MRKT_DIV_CODE", market_div),
                ("FID_INPUT_ISCD", symbol),
                ("FID_HOUR_CLS_CODE", hour_cls),
                ("FID_PW_DATA_INCU_YN", if include_past { "Y" } else { "N" }),
            ],
        )
        .await
    }

    /// Condition search. `filters` carries the optional `CO_*` range
    /// parameters verbatim (e.g. `("CO_YN_PRICECUR", "1")`).
    pub async fn search(
        &self,
        exchange: &str,
        filters: &[(&str, &str)],
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NAS")?;
        let mut params: Vec<(&str, &str)> = vec![("AUTH", ""), ("EXCD", exchange)];
        params.extend_from_slice(filters);
        params.push(("KEYB", cursor));
        self.get(SEARCH_PATH, TR_SEARCH, &params).await
    }

    /// Product master info (`product_type_code` like `"512"` for Nasdaq).
    pub async fn search_info(
        &self,
        product_no: &str,
        product_type_code: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("product_no", product_no, "AAPL")?;
        require("product_type_code", product_type_code, "512")?;
        self.get(
            SEARCH_INFO_PATH,
            TR_SEARCH_INFO,
            &[("PDNO", product_no), ("PRDT_TYPE_CD", product_type_code)],
        )
        .await
    }

    /// Stocks grouped under an industry/theme code.
    pub async fn industry_theme(
        &self,
        exchange: &str,
        industry_code: &str,
        volume_range: &str,
        cursor: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NAS")?;
        require("industry_code", industry_code, "010")?;
        require("volume_range", volume_range, "0")?;
        self.get(
            INDUSTRY_THEME_PATH,
            TR_INDUSTRY_THEME,
            &[
                ("EXCD", exchange),
                ("ICOD", industry_code),
                ("VOL_RANG", volume_range),
                ("AUTH", ""),
                ("KEYB", cursor),
            ],
        )
        .await
    }

    /// Industry price overview for an exchange.
    pub async fn industry_price(&self, exchange: &str) -> Result<serde_json::Value, KisError> {
        require("exchange", exchange, "NAS")?;
        self.get(
            INDUSTRY_PRICE_PATH,
            TR_INDUSTRY_PRICE,
            &[("EXCD", exchange), ("AUTH", "")],
        )
        .await
    }

    /// Corporate rights (dividends, splits, mergers) over a period.
    pub async fn period_rights(
        &self,
        query: &PeriodRightsQuery,
    ) -> Result<serde_json::Value, KisError> {
        require("rights_type_code", &query.rights_type_code, "%%")?;
        require("inquiry_division_code", &query.inquiry_division_code, "02")?;
        require("start_date", &query.start_date, "20240101")?;
        require("end_date", &query.end_date, "20240131")?;
        self.get(
            PERIOD_RIGHTS_PATH,
            TR_PERIOD_RIGHTS,
            &[
                ("RGHT_TYPE_CD", query.rights_type_code.as_str()),
                ("INQR_DVSN_CD", query.inquiry_division_code.as_str()),
                ("INQR_STRT_DT", query.start_date.as_str()),
                ("INQR_END_DT", query.end_date.as_str()),
                ("PDNO", query.product_no.as_str()),
                ("PRDT_TYPE_CD", query.product_type_code.as_str()),
                ("CTX_AREA_NK50", query.ctx_area_nk50.as_str()),
                ("CTX_AREA_FK50", query.ctx_area_fk50.as_str()),
            ],
        )
        .await
    }

    /// Consolidated overseas news titles.
    pub async fn news_title(&self, query: &NewsQuery) -> Result<serde_json::Value, KisError> {
        self.get(
            NEWS_TITLE_PATH,
            TR_NEWS_TITLE,
            &[
                ("INFO_GB", query.info_gb.as_str()),
                ("CLASS_CD", query.class_cd.as_str()),
                ("NATION_CD", query.nation_cd.as_str()),
                ("EXCHANGE_CD", query.exchange_cd.as_str()),
                ("SYMB", query.symbol.as_str()),
                ("DATA_DT", query.date.as_str()),
                ("DATA_TM", query.time.as_str()),
                ("CTS", query.cts.as_str()),
            ],
        )
        .await
    }

    /// Broker flash-news titles.
    pub async fn broker_news_title(
        &self,
        query: &BrokerNewsQuery,
    ) -> Result<serde_json::Value, KisError> {
        self.get(
            BRKNEWS_TITLE_PATH,
            TR_BRKNEWS_TITLE,
            &[
                ("FID_NEWS_OFER_ENTP_CODE", query.provider_code.as_str()),
                ("FID_COND_SCR_DIV_CODE", query.screen_div_code.as_str()),
                ("FID_COND_MRKT_CLS_CODE", query.market_cls_code.as_str()),
                ("FID_INPUT_ISCD", query.symbol.as_str()),
                ("FID_TITL_CNTT", query.title_text.as_str()),
                ("FID_INPUT_DATE_1", query.date.as_str()),
                ("FID_INPUT_HOUR_1", query.hour.as_str()),
                ("FID_RANK_SORT_CLS_CODE", query.rank_sort_cls_code.as_str()),
                ("FID_INPUT_SRNO", query.serial_no.as_str()),
            ],
        )
        .await
    }

    async fn get(
        &self,
        path: &str,
        tr_id: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, KisError> {
        let base = self.client.config().trading_url();
        self.client
            .http
            .get(base, path, tr_id, query, RetryPolicy::Idempotent)
            .await
    }
}
