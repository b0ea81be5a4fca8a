/*
[INPUT]:  Symbol identifiers and query parameters
[OUTPUT]: Market data (server time, trades, depth, symbols, klines, tickers)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{CurrencyComClient, ParameterSet, Result};
use crate::types::{
    AggTrade, AggTradesRequest, BySymbolRequest, DepthRequest, ExchangeInfo, Kline,
    KlinesRequest, OrderBook, ServerTime, Ticker24hr,
};
use reqwest::Method;

impl CurrencyComClient {
    /// Exchange server time
    ///
    /// GET /api/v2/time
    pub async fn server_time(&self) -> Result<ServerTime> {
        self.send_public(Method::GET, "time", ParameterSet::new()).await
    }

    /// Compressed aggregate trades
    ///
    /// GET /api/v2/aggTrades?symbol={symbol}
    pub async fn agg_trades(&self, request: &AggTradesRequest) -> Result<Vec<AggTrade>> {
        let params = request.to_params()?;
        self.send_public(Method::GET, "aggTrades", params).await
    }

    /// Order book depth
    ///
    /// GET /api/v2/depth?symbol={symbol}
    pub async fn order_book(&self, request: &DepthRequest) -> Result<OrderBook> {
        let params = request.to_params()?;
        self.send_public(Method::GET, "depth", params).await
    }

    /// Trading rules and symbol information
    ///
    /// GET /api/v2/exchangeInfo
    pub async fn exchange_info(&self) -> Result<ExchangeInfo> {
        self.send_public(Method::GET, "exchangeInfo", ParameterSet::new()).await
    }

    /// Candlesticks for a symbol
    ///
    /// GET /api/v2/klines?symbol={symbol}&interval={interval}
    pub async fn klines(&self, request: &KlinesRequest) -> Result<Vec<Kline>> {
        let params = request.to_params()?;
        self.send_public(Method::GET, "klines", params).await
    }

    /// 24 hour price change statistics
    ///
    /// GET /api/v2/ticker/24hr?symbol={symbol}
    pub async fn ticker_24hr(&self, request: &BySymbolRequest) -> Result<Ticker24hr> {
        let params = request.to_params()?;
        self.send_public(Method::GET, "ticker/24hr", params).await
    }
}
