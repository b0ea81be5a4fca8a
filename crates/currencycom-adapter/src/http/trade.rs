/*
[INPUT]:  Order and position requests with API credentials
[OUTPUT]: Order acknowledgements, position lists and modification states
[POS]:    HTTP layer - signed trading endpoints
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{CurrencyComClient, Result};
use crate::types::{
    CancelOrder, CancelOrderRequest, CloseTradingPositionRequest, CreateOrderRequest, NewOrder,
    OpenOrdersRequest, PositionHistoryRequest, QueryOrder, SignedRequest, TradingOrderUpdate,
    TradingPositionClose, TradingPositionHistory, TradingPositionList, TradingPositionUpdate,
    UpdateTradingOrderRequest, UpdateTradingPositionRequest,
};
use reqwest::Method;

impl CurrencyComClient {
    /// Open orders, optionally for one symbol
    ///
    /// GET /api/v2/openOrders
    pub async fn open_orders(&self, request: Option<&OpenOrdersRequest>) -> Result<Vec<QueryOrder>> {
        let params = request.map(OpenOrdersRequest::to_params).transpose()?;
        self.send_signed(Method::GET, "openOrders", params.unwrap_or_default()).await
    }

    /// Place a new order
    ///
    /// POST /api/v2/order
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<NewOrder> {
        let params = request.to_params()?;
        tracing::debug!(
            symbol = %request.symbol,
            side = %request.side,
            order_type = %request.order_type,
            quantity = %request.quantity,
            "creating order"
        );
        self.send_signed(Method::POST, "order", params).await
    }

    /// Cancel an active order
    ///
    /// DELETE /api/v2/order
    pub async fn cancel_order(&self, request: &CancelOrderRequest) -> Result<CancelOrder> {
        let params = request.to_params()?;
        self.send_signed(Method::DELETE, "order", params).await
    }

    /// Change price, stop loss or take profit of a pending leverage order
    ///
    /// POST /api/v2/updateTradingOrder
    pub async fn update_trading_order(
        &self,
        request: &UpdateTradingOrderRequest,
    ) -> Result<TradingOrderUpdate> {
        let params = request.to_params()?;
        self.send_signed(Method::POST, "updateTradingOrder", params).await
    }

    /// Open leverage positions
    ///
    /// GET /api/v2/tradingPositions
    pub async fn trading_positions(
        &self,
        request: Option<&SignedRequest>,
    ) -> Result<TradingPositionList> {
        let params = request.map(SignedRequest::to_params).transpose()?;
        self.send_signed(Method::GET, "tradingPositions", params.unwrap_or_default()).await
    }

    /// Closed and modified leverage positions
    ///
    /// GET /api/v2/tradingPositionsHistory
    pub async fn trading_positions_history(
        &self,
        request: Option<&PositionHistoryRequest>,
    ) -> Result<TradingPositionHistory> {
        let params = request.map(PositionHistoryRequest::to_params).transpose()?;
        self.send_signed(Method::GET, "tradingPositionsHistory", params.unwrap_or_default()).await
    }

    /// Change stop loss or take profit of an open position
    ///
    /// POST /api/v2/updateTradingPosition
    pub async fn update_trading_position(
        &self,
        request: &UpdateTradingPositionRequest,
    ) -> Result<TradingPositionUpdate> {
        let params = request.to_params()?;
        self.send_signed(Method::POST, "updateTradingPosition", params).await
    }

    /// Close an open position
    ///
    /// POST /api/v2/closeTradingPosition
    pub async fn close_trading_position(
        &self,
        request: &CloseTradingPositionRequest,
    ) -> Result<TradingPositionClose> {
        let params = request.to_params()?;
        self.send_signed(Method::POST, "closeTradingPosition", params).await
    }
}
