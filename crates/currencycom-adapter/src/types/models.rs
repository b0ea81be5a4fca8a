/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for exchange resources
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use super::enums::{
    AssetType, CurrencyType, DtoState, DtoType, ExchangeStatus, ExecutionType, MarketMode,
    MarketType, OrderSide, OrderStatus, OrderType, PositionState, PositionType, RejectReason,
    ReportSource, ReportStatus, TimeInForce,
};
use super::serde_helpers::{self, decimal, decimal_map, null_as_default};

/// Compressed aggregate trade
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggTrade {
    #[serde(rename = "a", deserialize_with = "null_as_default")]
    pub aggregate_id: i64,
    #[serde(rename = "T", deserialize_with = "null_as_default")]
    pub timestamp: i64,
    #[serde(rename = "m", deserialize_with = "null_as_default")]
    pub is_buyer_maker: bool,
    #[serde(rename = "p", with = "decimal")]
    pub price: Decimal,
    #[serde(rename = "q", with = "decimal")]
    pub quantity: Decimal,
}

/// One order book level: price, quantity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel(
    #[serde(with = "decimal")] pub Decimal,
    #[serde(with = "decimal")] pub Decimal,
);

impl DepthLevel {
    pub fn price(&self) -> Decimal {
        self.0
    }

    pub fn quantity(&self) -> Decimal {
        self.1
    }
}

/// One candle.
///
/// On the wire a candle is a positional array
/// `[openTime, open, high, low, close, volume]` with the prices as strings
/// and the volume as a number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kline {
    pub open_time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl<'de> Deserialize<'de> for Kline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (open_time, open, high, low, close, volume) =
            <(Number, String, String, String, String, Number)>::deserialize(deserializer)?;

        let open_time = open_time
            .as_i64()
            .or_else(|| open_time.as_f64().map(|ms| ms as i64))
            .ok_or_else(|| D::Error::custom(format!("invalid kline open time: {open_time}")))?;
        let price = |raw: String| serde_helpers::decimal_from_value::<D::Error>(&Value::String(raw));

        Ok(Self {
            open_time,
            open: price(open)?,
            high: price(high)?,
            low: price(low)?,
            close: price(close)?,
            volume: serde_helpers::decimal_from_number(&volume)?,
        })
    }
}

impl Serialize for Kline {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let volume = Number::from_str(&self.volume.to_string()).map_err(S::Error::custom)?;
        (
            self.open_time,
            self.open.to_string(),
            self.high.to_string(),
            self.low.to_string(),
            self.close.to_string(),
            volume,
        )
            .serialize(serializer)
    }
}

/// 24 hour rolling window statistics for one symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ticker24hr {
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(with = "decimal")]
    pub price_change: Decimal,
    #[serde(with = "decimal")]
    pub price_change_percent: Decimal,
    #[serde(with = "decimal")]
    pub weighted_avg_price: Decimal,
    #[serde(with = "decimal")]
    pub prev_close_price: Decimal,
    #[serde(with = "decimal")]
    pub last_price: Decimal,
    #[serde(with = "decimal")]
    pub last_qty: Decimal,
    #[serde(with = "decimal")]
    pub bid_price: Decimal,
    #[serde(with = "decimal")]
    pub ask_price: Decimal,
    #[serde(with = "decimal")]
    pub open_price: Decimal,
    #[serde(with = "decimal")]
    pub high_price: Decimal,
    #[serde(with = "decimal")]
    pub low_price: Decimal,
    #[serde(with = "decimal")]
    pub volume: Decimal,
    #[serde(with = "decimal")]
    pub quote_volume: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub open_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub close_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateLimit {
    #[serde(deserialize_with = "null_as_default")]
    pub rate_limit_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub interval: String,
    #[serde(deserialize_with = "null_as_default")]
    pub interval_num: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub limit: i32,
}

/// Symbol trading rule; fields beyond `filterType` depend on the filter kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SymbolFilter {
    #[serde(deserialize_with = "null_as_default")]
    pub filter_type: String,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeFilter {
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SymbolInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ExchangeStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub base_asset: String,
    #[serde(deserialize_with = "null_as_default")]
    pub base_asset_precision: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub quote_asset: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quote_asset_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quote_precision: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub asset_type: AssetType,
    #[serde(deserialize_with = "null_as_default")]
    pub market_type: MarketType,
    #[serde(deserialize_with = "null_as_default")]
    pub market_modes: Vec<MarketMode>,
    #[serde(deserialize_with = "null_as_default")]
    pub order_types: Vec<OrderType>,
    #[serde(deserialize_with = "null_as_default")]
    pub filters: Vec<SymbolFilter>,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sector: String,
    #[serde(deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trading_hours: String,
    #[serde(with = "decimal")]
    pub tick_size: Decimal,
    #[serde(with = "decimal")]
    pub tick_value: Decimal,
    #[serde(with = "decimal")]
    pub exchange_fee: Decimal,
    #[serde(with = "decimal")]
    pub trading_fee: Decimal,
    #[serde(with = "decimal")]
    pub maker_fee: Decimal,
    #[serde(with = "decimal")]
    pub taker_fee: Decimal,
    #[serde(with = "decimal")]
    pub long_rate: Decimal,
    #[serde(with = "decimal")]
    pub short_rate: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub swap_charge_interval: i64,
    #[serde(rename = "maxSLGap", with = "decimal")]
    pub max_sl_gap: Decimal,
    #[serde(rename = "maxTPGap", with = "decimal")]
    pub max_tp_gap: Decimal,
    #[serde(rename = "minSLGap", with = "decimal")]
    pub min_sl_gap: Decimal,
    #[serde(rename = "minTPGap", with = "decimal")]
    pub min_tp_gap: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountBalance {
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub asset: String,
    #[serde(deserialize_with = "null_as_default")]
    pub collateral_currency: bool,
    #[serde(rename = "default", deserialize_with = "null_as_default")]
    pub is_default: bool,
    #[serde(with = "decimal")]
    pub free: Decimal,
    #[serde(with = "decimal")]
    pub locked: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_symbol: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub currency_type: CurrencyType,
    #[serde(deserialize_with = "null_as_default")]
    pub precision: i32,
    #[serde(with = "decimal")]
    pub commission_fixed: Decimal,
    #[serde(with = "decimal")]
    pub commission_min: Decimal,
    #[serde(with = "decimal")]
    pub commission_percent: Decimal,
    #[serde(with = "decimal")]
    pub min_deposit: Decimal,
    #[serde(with = "decimal")]
    pub min_withdrawal: Decimal,
    #[serde(with = "decimal")]
    pub max_withdrawal: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DepositAddress {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_legacy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub destination_tag: String,
}

/// Deposit, withdrawal or ledger entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(with = "decimal")]
    pub amount: Decimal,
    #[serde(with = "decimal")]
    pub balance: Decimal,
    #[serde(with = "decimal")]
    pub commission: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub blockchain_transaction_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub transaction_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MyTrade {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(with = "decimal")]
    pub price: Decimal,
    #[serde(with = "decimal")]
    pub qty: Decimal,
    #[serde(with = "decimal")]
    pub quote_qty: Decimal,
    #[serde(with = "decimal")]
    pub commission: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub commission_asset: String,
    #[serde(deserialize_with = "null_as_default")]
    pub buyer: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_buyer: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub maker: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_maker: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
}

/// Open order as returned by `openOrders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryOrder {
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: String,
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
    pub iceberg_qty: Decimal,
    #[serde(with = "decimal")]
    pub margin: Decimal,
    #[serde(with = "decimal")]
    pub stop_loss: Decimal,
    #[serde(with = "decimal")]
    pub take_profit: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub guaranteed_stop_loss: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub leverage: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub working: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub expire_timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub update_time: i64,
}

/// Open leveraged position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Position {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instrument_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: PositionState,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub position_type: PositionType,
    #[serde(with = "decimal")]
    pub open_price: Decimal,
    #[serde(with = "decimal")]
    pub open_quantity: Decimal,
    #[serde(with = "decimal")]
    pub close_price: Decimal,
    #[serde(with = "decimal")]
    pub close_quantity: Decimal,
    #[serde(with = "decimal")]
    pub cost: Decimal,
    #[serde(with = "decimal")]
    pub margin: Decimal,
    #[serde(with = "decimal")]
    pub fee: Decimal,
    #[serde(with = "decimal")]
    pub dividend: Decimal,
    #[serde(with = "decimal")]
    pub swap: Decimal,
    #[serde(with = "decimal")]
    pub swap_converted: Decimal,
    #[serde(with = "decimal")]
    pub rpl: Decimal,
    #[serde(with = "decimal")]
    pub rpl_converted: Decimal,
    #[serde(with = "decimal")]
    pub upl: Decimal,
    #[serde(with = "decimal")]
    pub upl_converted: Decimal,
    #[serde(with = "decimal")]
    pub stop_loss: Decimal,
    #[serde(with = "decimal")]
    pub take_profit: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub guaranteed_stop_loss: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub open_timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub close_timestamp: i64,
}

/// One event in a position's history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PositionExecutionReport {
    #[serde(deserialize_with = "null_as_default")]
    pub position_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub account_currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instrument_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub execution_type: ExecutionType,
    #[serde(deserialize_with = "null_as_default")]
    pub source: ReportSource,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ReportStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub reject_reason: RejectReason,
    #[serde(with = "decimal")]
    pub price: Decimal,
    #[serde(with = "decimal")]
    pub quantity: Decimal,
    #[serde(with = "decimal")]
    pub fee: Decimal,
    #[serde(with = "decimal_map")]
    pub fee_details: BTreeMap<String, Decimal>,
    #[serde(with = "decimal")]
    pub fx_rate: Decimal,
    #[serde(with = "decimal")]
    pub rpl: Decimal,
    #[serde(with = "decimal")]
    pub rpl_converted: Decimal,
    #[serde(with = "decimal")]
    pub swap: Decimal,
    #[serde(with = "decimal")]
    pub swap_converted: Decimal,
    #[serde(with = "decimal")]
    pub stop_loss: Decimal,
    #[serde(with = "decimal")]
    pub take_profit: Decimal,
    #[serde(rename = "gSL", deserialize_with = "null_as_default")]
    pub guaranteed_stop_loss: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub exec_timestamp: i64,
}

/// Asynchronous trading request tracked by the exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestDto {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instrument_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rq_type: DtoType,
    #[serde(deserialize_with = "null_as_default")]
    pub rq_body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: DtoState,
    #[serde(deserialize_with = "null_as_default")]
    pub reject_reason: RejectReason,
    #[serde(deserialize_with = "null_as_default")]
    pub created_timestamp: i64,
}
