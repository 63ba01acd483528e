//! Order placement — types and sub-client.

pub mod client;

pub use client::Orders;

use serde::{Deserialize, Serialize};

/// Order side. Maps to the buy/sell transaction-id pair of each venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

/// Overseas venue for order routing. Each venue has its own buy/sell
/// transaction-id pair in the routing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverseasMarket {
    /// United States (NASD/NYSE/AMEX exchanges).
    Us,
    /// Tokyo.
    Japan,
    /// Shanghai.
    Shanghai,
    /// Hong Kong.
    HongKong,
    /// Shenzhen.
    Shenzhen,
    /// Vietnam (Hanoi/Ho Chi Minh).
    Vietnam,
}

impl OverseasMarket {
    /// Logical operation name for routing-table lookup.
    pub fn operation(&self, side: Side) -> &'static str {
        match (self, side) {
            (Self::Us, Side::Buy) => "us_buy",
            (Self::Us, Side::Sell) => "us_sell",
            (Self::Japan, Side::Buy) => "jp_buy",
            (Self::Japan, Side::Sell) => "jp_sell",
            (Self::Shanghai, Side::Buy) => "sh_buy",
            (Self::Shanghai, Side::Sell) => "sh_sell",
            (Self::HongKong, Side::Buy) => "hk_buy",
            (Self::HongKong, Side::Sell) => "hk_sell",
            (Self::Shenzhen, Side::Buy) => "sz_buy",
            (Self::Shenzhen, Side::Sell) => "sz_sell",
            (Self::Vietnam, Side::Buy) => "vn_buy",
            (Self::Vietnam, Side::Sell) => "vn_sell",
        }
    }
}

/// Body for a domestic cash order (`order-cash`).
#[derive(Debug, Clone, Serialize)]
pub struct DomesticOrderRequest {
    #[serde(rename = "CANO")]
    pub cano: String,
    #[serde(rename = "ACNT_PRDT_CD")]
    pub product_code: String,
    #[serde(rename = "PDNO")]
    pub symbol: String,
    /// `"00"` limit, `"01"` market.
    #[serde(rename = "ORD_DVSN")]
    pub order_division: String,
    #[serde(rename = "ORD_QTY")]
    pub quantity: String,
    /// `"0"` for market orders.
    #[serde(rename = "ORD_UNPR")]
    pub price: String,
}

/// Body for an overseas order (`trading/order`).
#[derive(Debug, Clone, Serialize)]
pub struct OverseasOrderRequest {
    #[serde(rename = "CANO")]
    pub cano: String,
    #[serde(rename = "ACNT_PRDT_CD")]
    pub product_code: String,
    /// Exchange code (`NASD`, `NYSE`, `AMEX`, `SEHK`, ...).
    #[serde(rename = "OVRS_EXCG_CD")]
    pub exchange: String,
    #[serde(rename = "PDNO")]
    pub symbol: String,
    #[serde(rename = "ORD_QTY")]
    pub quantity: String,
    #[serde(rename = "OVRS_ORD_UNPR")]
    pub price: String,
    #[serde(rename = "ORD_SVR_DVSN_CD")]
    pub server_division: String,
    #[serde(rename = "ORD_DVSN")]
    pub order_division: String,
}

/// Order acknowledgement (`output` of both order endpoints).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderOutput {
    /// Forwarding branch number.
    #[serde(rename = "KRX_FWDG_ORD_ORGNO", default)]
    pub branch_no: Option<String>,
    /// Order number.
    #[serde(rename = "ODNO")]
    pub order_no: String,
    /// Order timestamp (`HHMMSS`).
    #[serde(rename = "ORD_TMD", default)]
    pub order_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overseas_operation_names_cover_all_venues() {
        let venues = [
            OverseasMarket::Us,
            OverseasMarket::Japan,
            OverseasMarket::Shanghai,
            OverseasMarket::HongKong,
            OverseasMarket::Shenzhen,
            OverseasMarket::Vietnam,
        ];
        for venue in venues {
            let buy = venue.operation(Side::Buy);
            let sell = venue.operation(Side::Sell);
            assert!(buy.ends_with("_buy"));
            assert!(sell.ends_with("_sell"));
        }
    }

    #[test]
    fn domestic_order_serializes_with_kis_field_names() {
        let order = DomesticOrderRequest {
            cano: "50012345".to_string(),
            product_code: "01".to_string(),
            symbol: "005930".to_string(),
            order_division: "00".to_string(),
            quantity: "10".to_string(),
            price: "71000".to_string(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["CANO"], "50012345");
        assert_eq!(json["ORD_UNPR"], "71000");
    }
}
