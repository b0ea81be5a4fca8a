/*
[INPUT]:  Caller-provided request fields
[OUTPUT]: Validated parameter sets ready for signing
[POS]:    Data layer - typed requests and their query mapping
[UPDATE]: When endpoints gain parameters or validation rules change
*/

use rust_decimal::Decimal;

use super::enums::{KlineInterval, KlineType, NewOrderRespType, OrderSide, OrderType};
use crate::http::{CurrencyComError, ParameterSet, Result};

/// Largest `recvWindow` the exchange accepts, in milliseconds
pub const MAX_RECV_WINDOW: u64 = 60_000;

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CurrencyComError::invalid(format!("{field} is required")));
    }
    Ok(())
}

fn insert_recv_window(params: &mut ParameterSet, recv_window: Option<u64>) -> Result<()> {
    if let Some(window) = recv_window {
        if !(1..=MAX_RECV_WINDOW).contains(&window) {
            return Err(CurrencyComError::invalid(format!(
                "recvWindow must be between 1 and {MAX_RECV_WINDOW}, got {window}"
            )));
        }
        params.insert("recvWindow", window.to_string());
    }
    Ok(())
}

fn symbol_params(symbol: &str) -> Result<ParameterSet> {
    require("symbol", symbol)?;
    let mut params = ParameterSet::new();
    params.insert("symbol", symbol);
    Ok(params)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggTradesRequest {
    pub symbol: String,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub limit: Option<u32>,
}

impl AggTradesRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = symbol_params(&self.symbol)?;
        params.insert_opt("startTime", self.start_time);
        params.insert_opt("endTime", self.end_time);
        params.insert_opt("limit", self.limit);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthRequest {
    pub symbol: String,
    pub limit: Option<u32>,
}

impl DepthRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = symbol_params(&self.symbol)?;
        params.insert_opt("limit", self.limit);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KlinesRequest {
    pub symbol: String,
    pub interval: KlineInterval,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub limit: Option<u32>,
    pub kline_type: Option<KlineType>,
}

impl KlinesRequest {
    pub fn new(symbol: impl Into<String>, interval: KlineInterval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = symbol_params(&self.symbol)?;
        params.insert("interval", self.interval.as_ref());
        params.insert_opt("startTime", self.start_time);
        params.insert_opt("endTime", self.end_time);
        params.insert_opt("limit", self.limit);
        params.insert_opt("type", self.kline_type);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BySymbolRequest {
    pub symbol: String,
}

impl BySymbolRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        symbol_params(&self.symbol)
    }
}

/// Signed call with no endpoint-specific parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignedRequest {
    pub recv_window: Option<u64>,
}

impl SignedRequest {
    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = ParameterSet::new();
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountRequest {
    pub show_zero_balance: bool,
    pub recv_window: Option<u64>,
}

impl AccountRequest {
    /// `showZeroBalance` is always sent, `false` included
    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = ParameterSet::new();
        params.insert("showZeroBalance", self.show_zero_balance.to_string());
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockchainAddressRequest {
    pub coin: String,
    pub recv_window: Option<u64>,
}

impl BlockchainAddressRequest {
    pub fn new(coin: impl Into<String>) -> Self {
        Self {
            coin: coin.into(),
            recv_window: None,
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        require("coin", &self.coin)?;
        let mut params = ParameterSet::new();
        params.insert("coin", self.coin.as_str());
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

/// Time-ranged query shared by deposits, withdrawals, ledger and transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionsRequest {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub limit: Option<u32>,
    pub recv_window: Option<u64>,
}

impl TransactionsRequest {
    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = ParameterSet::new();
        params.insert_opt("startTime", self.start_time);
        params.insert_opt("endTime", self.end_time);
        params.insert_opt("limit", self.limit);
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeverageSettingsRequest {
    pub symbol: String,
    pub recv_window: Option<u64>,
}

impl LeverageSettingsRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            recv_window: None,
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = symbol_params(&self.symbol)?;
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllMyTradesRequest {
    pub symbol: String,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub limit: Option<u32>,
    pub recv_window: Option<u64>,
}

impl AllMyTradesRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = symbol_params(&self.symbol)?;
        params.insert_opt("startTime", self.start_time);
        params.insert_opt("endTime", self.end_time);
        params.insert_opt("limit", self.limit);
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenOrdersRequest {
    pub symbol: Option<String>,
    pub recv_window: Option<u64>,
}

impl OpenOrdersRequest {
    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = ParameterSet::new();
        params.insert_opt_str("symbol", self.symbol.as_deref());
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionHistoryRequest {
    pub symbol: Option<String>,
    pub limit: Option<u32>,
    pub recv_window: Option<u64>,
}

impl PositionHistoryRequest {
    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = ParameterSet::new();
        params.insert_opt_str("symbol", self.symbol.as_deref());
        params.insert_opt("limit", self.limit);
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

/// New order.
///
/// Start from [`CreateOrderRequest::market`] or [`CreateOrderRequest::limit`]
/// and set the optional fields directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub account_id: Option<String>,
    pub expire_timestamp: Option<i64>,
    pub guaranteed_stop_loss: bool,
    pub leverage: Option<u32>,
    pub new_order_resp_type: Option<NewOrderRespType>,
    pub stop_loss: Option<Decimal>,
    pub take_profit: Option<Decimal>,
    pub recv_window: Option<u64>,
}

impl CreateOrderRequest {
    pub fn new(
        symbol: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            quantity,
            price: None,
            account_id: None,
            expire_timestamp: None,
            guaranteed_stop_loss: false,
            leverage: None,
            new_order_resp_type: None,
            stop_loss: None,
            take_profit: None,
            recv_window: None,
        }
    }

    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: Decimal) -> Self {
        Self::new(symbol, side, OrderType::Market, quantity)
    }

    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            price: Some(price),
            ..Self::new(symbol, side, OrderType::Limit, quantity)
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = symbol_params(&self.symbol)?;

        if !self.side.is_known() {
            return Err(CurrencyComError::invalid("side is required"));
        }
        if !self.order_type.is_known() {
            return Err(CurrencyComError::invalid("type is required"));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(CurrencyComError::invalid(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        if self
            .new_order_resp_type
            .is_some_and(|resp_type| !resp_type.is_known())
        {
            return Err(CurrencyComError::invalid("newOrderRespType is not a known value"));
        }

        params.insert("side", self.side.as_ref());
        params.insert("type", self.order_type.as_ref());
        params.insert("quantity", self.quantity.to_string());
        params.insert_opt("price", self.price);
        params.insert_opt_str("accountId", self.account_id.as_deref());
        params.insert_opt("expireTimestamp", self.expire_timestamp);
        params.insert_flag("guaranteedStopLoss", self.guaranteed_stop_loss);
        params.insert_opt("leverage", self.leverage);
        params.insert_opt("newOrderRespType", self.new_order_resp_type);
        params.insert_opt("stopLoss", self.stop_loss);
        params.insert_opt("takeProfit", self.take_profit);
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelOrderRequest {
    pub symbol: String,
    pub order_id: String,
    pub recv_window: Option<u64>,
}

impl CancelOrderRequest {
    pub fn new(symbol: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: order_id.into(),
            recv_window: None,
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        let mut params = symbol_params(&self.symbol)?;
        require("orderId", &self.order_id)?;
        params.insert("orderId", self.order_id.as_str());
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTradingOrderRequest {
    pub order_id: String,
    pub new_price: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
    pub take_profit: Option<Decimal>,
    pub expire_timestamp: Option<i64>,
    pub guaranteed_stop_loss: bool,
    pub recv_window: Option<u64>,
}

impl UpdateTradingOrderRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        require("orderId", &self.order_id)?;
        let mut params = ParameterSet::new();
        params.insert("orderId", self.order_id.as_str());
        params.insert_opt("newPrice", self.new_price);
        params.insert_opt("stopLoss", self.stop_loss);
        params.insert_opt("takeProfit", self.take_profit);
        params.insert_opt("expireTimestamp", self.expire_timestamp);
        params.insert_flag("guaranteedStopLoss", self.guaranteed_stop_loss);
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTradingPositionRequest {
    pub position_id: String,
    pub stop_loss: Option<Decimal>,
    pub take_profit: Option<Decimal>,
    pub guaranteed_stop_loss: bool,
    pub recv_window: Option<u64>,
}

impl UpdateTradingPositionRequest {
    pub fn new(position_id: impl Into<String>) -> Self {
        Self {
            position_id: position_id.into(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        require("positionId", &self.position_id)?;
        let mut params = ParameterSet::new();
        params.insert("positionId", self.position_id.as_str());
        params.insert_opt("stopLoss", self.stop_loss);
        params.insert_opt("takeProfit", self.take_profit);
        params.insert_flag("guaranteedStopLoss", self.guaranteed_stop_loss);
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloseTradingPositionRequest {
    pub position_id: String,
    pub recv_window: Option<u64>,
}

impl CloseTradingPositionRequest {
    pub fn new(position_id: impl Into<String>) -> Self {
        Self {
            position_id: position_id.into(),
            recv_window: None,
        }
    }

    pub fn to_params(&self) -> Result<ParameterSet> {
        require("positionId", &self.position_id)?;
        let mut params = ParameterSet::new();
        params.insert("positionId", self.position_id.as_str());
        insert_recv_window(&mut params, self.recv_window)?;
        Ok(params)
    }
}
