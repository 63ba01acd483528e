//! Orders sub-client — domestic cash orders and overseas orders.
//!
//! Order POSTs carry a `hashkey` header derived from the body via
//! `/uapi/hashkey`, and are never retried.

use crate::client::KisClient;
use crate::domain::order::{
    DomesticOrderRequest, OrderOutput, OverseasMarket, OverseasOrderRequest, Side,
};
use crate::domain::{require, route_for, KisEnvelope};
use crate::error::KisError;

const DOMESTIC_ORDER_PATH: &str = "/uapi/domestic-stock/v1/trading/order-cash";
const OVERSEAS_ORDER_PATH: &str = "/uapi/overseas-stock/v1/trading/order";

/// Sub-client for order placement.
pub struct Orders<'a> {
    pub(crate) client: &'a KisClient,
}

impl<'a> Orders<'a> {
    /// Place a domestic cash order.
    pub async fn domestic(
        &self,
        side: Side,
        order: &DomesticOrderRequest,
    ) -> Result<OrderOutput, KisError> {
        require("cano", &order.cano, "50012345")?;
        require("symbol", &order.symbol, "005930")?;
        require("quantity", &order.quantity, "10")?;

        let operation = match side {
            Side::Buy => "buy",
            Side::Sell => "sell",
        };
        let (base, tr_id) = route_for(self.client.config(), operation)?;

        let envelope: KisEnvelope<OrderOutput> = self
            .client
            .http
            .post(base, DOMESTIC_ORDER_PATH, tr_id, order, true)
            .await?;
        envelope.into_output()
    }

    /// Place an overseas order on the given venue.
    pub async fn overseas(
        &self,
        market: OverseasMarket,
        side: Side,
        order: &OverseasOrderRequest,
    ) -> Result<OrderOutput, KisError> {
        require("cano", &order.cano, "50012345")?;
        require("exchange", &order.exchange, "NASD")?;
        require("symbol", &order.symbol, "AAPL")?;
        require("quantity", &order.quantity, "10")?;

        let (base, tr_id) = route_for(self.client.config(), market.operation(side))?;

        let envelope: KisEnvelope<OrderOutput> = self
            .client
            .http
            .post(base, OVERSEAS_ORDER_PATH, tr_id, order, true)
            .await?;
        envelope.into_output()
    }
}
