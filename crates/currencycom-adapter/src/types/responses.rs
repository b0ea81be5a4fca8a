/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{DtoState, OrderSide, OrderStatus, OrderType, TimeInForce};
use super::models::{
    AccountBalance, DepthLevel, ExchangeFilter, PositionExecutionReport, Position, RateLimit,
    RequestDto, SymbolInfo,
};
use super::serde_helpers::{decimal, null_as_default};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerTime {
    #[serde(deserialize_with = "null_as_default")]
    pub server_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderBook {
    #[serde(deserialize_with = "null_as_default")]
    pub last_update_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub bids: Vec<DepthLevel>,
    #[serde(deserialize_with = "null_as_default")]
    pub asks: Vec<DepthLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExchangeInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub server_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rate_limits: Vec<RateLimit>,
    #[serde(deserialize_with = "null_as_default")]
    pub exchange_filters: Vec<ExchangeFilter>,
    #[serde(deserialize_with = "null_as_default")]
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub affiliate_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub can_trade: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_deposit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_withdraw: bool,
    #[serde(with = "decimal")]
    pub maker_commission: Decimal,
    #[serde(with = "decimal")]
    pub taker_commission: Decimal,
    #[serde(with = "decimal")]
    pub buyer_commission: Decimal,
    #[serde(with = "decimal")]
    pub seller_commission: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub update_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub balances: Vec<AccountBalance>,
}

impl AccountInfo {
    /// Balance entry for `asset`, if the account holds one
    pub fn balance(&self, asset: &str) -> Option<&AccountBalance> {
        self.balances.iter().find(|balance| balance.asset == asset)
    }
}

/// Current leverage and the values allowed for a symbol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeverageSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub value: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<i32>,
}

/// Result of placing an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub side: OrderSide,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub order_type: OrderType,
    #[serde(deserialize_with = "null_as_default")]
    pub status: OrderStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub time_in_force: TimeInForce,
    #[serde(with = "decimal")]
    pub price: Decimal,
    #[serde(with = "decimal")]
    pub orig_qty: Decimal,
    #[serde(with = "decimal")]
    pub executed_qty: Decimal,
    #[serde(with = "decimal")]
    pub margin: Decimal,
    #[serde(with = "decimal")]
    pub stop_loss: Decimal,
    #[serde(with = "decimal")]
    pub take_profit: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub guaranteed_stop_loss: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub expire_timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub transact_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub reject_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CancelOrder {
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub side: OrderSide,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub order_type: OrderType,
    #[serde(deserialize_with = "null_as_default")]
    pub status: OrderStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub time_in_force: TimeInForce,
    #[serde(with = "decimal")]
    pub price: Decimal,
    #[serde(with = "decimal")]
    pub orig_qty: Decimal,
    #[serde(with = "decimal")]
    pub executed_qty: Decimal,
}

/// Acknowledgement of an asynchronous order or position modification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModificationResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub request_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub state: DtoState,
}

pub type TradingOrderUpdate = ModificationResponse;
pub type TradingPositionUpdate = ModificationResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingPositionList {
    #[serde(deserialize_with = "null_as_default")]
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingPositionHistory {
    #[serde(deserialize_with = "null_as_default")]
    pub history: Vec<PositionExecutionReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingPositionClose {
    #[serde(deserialize_with = "null_as_default")]
    pub request: Vec<RequestDto>,
}
