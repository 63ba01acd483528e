//! Account sub-client — balance and daily order history.
//!
//! Balance is the one inquiry that routes to the mode-specific host: real
//! and paper accounts live on different hosts with different tr_ids.

use crate::client::KisClient;
use crate::domain::account::BalanceResponse;
use crate::domain::{require, route_for};
use crate::error::KisError;
use crate::http::RetryPolicy;

const BALANCE_PATH: &str = "/uapi/domestic-stock/v1/trading/inquire-balance";
const DAILY_ORDERS_PATH: &str = "/uapi/domestic-stock/v1/trading/inquire-daily-ccld";

/// Sub-client for account inquiries.
pub struct Account<'a> {
    pub(crate) client: &'a KisClient,
}

impl<'a> Account<'a> {
    /// Current holdings and account summary.
    ///
    /// `cano` is the 8-digit account number, `product_code` its 2-digit
    /// product suffix (usually `"01"`).
    pub async fn balance(
        &self,
        cano: &str,
        product_code: &str,
    ) -> Result<BalanceResponse, KisError> {
        require("cano", cano, "50012345")?;
        require("product_code", product_code, "01")?;
        let (base, tr_id) = route_for(self.client.config(), "balance")?;

        self.client
            .http
            .get(
                base,
                BALANCE_PATH,
                tr_id,
                &[
                    ("CANO", cano),
                    ("ACNT_PRDT_CD", product_code),
                    ("AFHR_FLPR_YN", "N"),
                    ("OFL_YN", ""),
                    ("INQR_DVSN", "02"),
                    ("UNPR_DVSN", "01"),
                    ("FUND_STTL_ICLD_YN", "N"),
                    ("FNCG_AMT_AUTO_RDPT_YN", "N"),
                    ("PRCS_DVSN", "00"),
                    ("CTX_AREA_FK100", ""),
                    ("CTX_AREA_NK100", ""),
                ],
                RetryPolicy::Idempotent,
            )
            .await
    }

    /// Orders and conclusions over a date range (`YYYYMMDD` bounds).
    pub async fn daily_orders(
        &self,
        cano: &str,
        product_code: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<serde_json::Value, KisError> {
        require("cano", cano, "50012345")?;
        require("product_code", product_code, "01")?;
        require("start_date", start_date, "20240101")?;
        require("end_date", end_date, "20240131")?;
        let (base, tr_id) = route_for(self.client.config(), "order_list")?;

        self.client
            .http
            .get(
                base,
                DAILY_ORDERS_PATH,
                tr_id,
                &[
                    ("CANO", cano),
                    ("ACNT_PRDT_CD", product_code),
                    ("INQR_STRT_DT", start_date),
                    ("INQR_END_DT", end_date),
                    ("SLL_BUY_DVSN_CD", "00"),
                    ("INQR_DVSN", "00"),
                    ("PDNO", ""),
                    ("CCLD_DVSN", "00"),
                    ("ORD_GNO_BRNO", ""),
                    ("ODNO", ""),
                    ("INQR_DVSN_3", "00"),
                    ("INQR_DVSN_1", ""),
                    ("CTX_AREA_FK100", ""),
                    ("CTX_AREA_NK100", ""),
                ],
                RetryPolicy::Idempotent,
            )
            .await
    }
}
