/*
[INPUT]:  Exchange vocabulary (order sides, statuses, reject reasons, ...)
[OUTPUT]: Closed Rust enums with serde and string conversions
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the exchange adds new enumerated values
*/

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

// Every wire enum carries an `Other` variant so that values the exchange adds
// later still decode. `Other` is never valid inside a request.

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    LimitMaker,
    Market,
    Stop,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    PendingCancel,
    Canceled,
    Rejected,
    Expired,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    Gtc,
    Ioc,
    Fok,
    #[default]
    #[serde(other)]
    Other,
}

/// Shape of the `order` response the exchange should return
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NewOrderRespType {
    Ack,
    Result,
    Full,
    #[default]
    #[serde(other)]
    Other,
}

/// Why the exchange refused a request
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    AccountNotFound,
    ClosedMarket,
    CloseOnly,
    EngineBusy,
    HedgingModeGsl,
    InstrumentNotAvailable,
    InstrumentNotFound,
    InvalidOrder,
    InvalidOrderQty,
    InvalidPrice,
    LongOnly,
    OffMarket,
    OrderNotFound,
    OriginalGslUpdate,
    PositionNotFound,
    RcInstrumentClientMop,
    RcInstrumentGlobalMop,
    RcNotEnoughMargin,
    RcNotFound,
    RcNoRates,
    RcSettlement,
    RcUnknown,
    RequiredGsl,
    RiskCheck,
    Throttling,
    Unknown,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DtoType {
    OrderCancel,
    OrderModify,
    OrderNew,
    PositionModify,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DtoState {
    Cancelled,
    Pending,
    Processed,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyType {
    Crypto,
    ExchangeToken,
    Fiat,
    Ico,
    Token,
    TokenisedSecurity,
    UtilityTokens,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Bond,
    Commodity,
    Credit,
    Cryptocurrency,
    Currency,
    Equity,
    Ico,
    Index,
    InterestRate,
    OtherAsset,
    RealEstate,
    UtilityTokens,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketMode {
    ClosedForCorporateAction,
    CloseOnly,
    Holiday,
    LongOnly,
    Regular,
    Unknown,
    ViewAndRequest,
    ViewOnly,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketType {
    Leverage,
    Spot,
    #[default]
    #[serde(other)]
    Other,
}

/// Trading session state of a symbol
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ExchangeStatus {
    AuctionMatch,
    Break,
    EndOfDay,
    Halt,
    PostTrading,
    PreTrading,
    Trading,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionState {
    Active,
    Inactive,
    Invalid,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionType {
    Hedge,
    Net,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionType {
    Gtc,
    Ioc,
    #[default]
    #[serde(other)]
    Other,
}

/// Who initiated a position change
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportSource {
    CloseOut,
    Dealer,
    Sl,
    System,
    Tp,
    User,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Closed,
    Dividend,
    Modified,
    ModifyReject,
    Opened,
    Swap,
    #[default]
    #[serde(other)]
    Other,
}

/// Candle width accepted by `klines`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
pub enum KlineInterval {
    #[default]
    #[serde(rename = "1m")]
    #[strum(serialize = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    #[strum(serialize = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    #[strum(serialize = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    #[strum(serialize = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    #[strum(serialize = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    #[strum(serialize = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    #[strum(serialize = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    #[strum(serialize = "1w")]
    OneWeek,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum KlineType {
    #[default]
    Classic,
    HeikinAshi,
}

impl OrderSide {
    pub fn is_known(self) -> bool {
        self != Self::Other
    }
}

impl OrderType {
    pub fn is_known(self) -> bool {
        self != Self::Other
    }
}

impl NewOrderRespType {
    pub fn is_known(self) -> bool {
        self != Self::Other
    }
}
