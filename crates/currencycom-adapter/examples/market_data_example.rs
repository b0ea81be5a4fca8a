/*
[INPUT]:  Symbol identifier (e.g., "BTC/USD")
[OUTPUT]: Market data (server time, ticker, depth, candles)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use currencycom_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no credentials required)
///
/// Run with `RUST_LOG=currencycom_adapter=debug` to see the request log.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== currency.com Market Data Example ===\n");

    let client = CurrencyComClient::new(ClientConfig::from_env()?)?;
    println!("✓ HTTP client created for {}\n", client.endpoint());

    let symbol = "BTC/USD";

    let time = client.server_time().await?;
    println!("Server time: {}", time.server_time);

    let ticker = client.ticker_24hr(&BySymbolRequest::new(symbol)).await?;
    println!(
        "{symbol}: last {} ({}% over 24h), volume {}",
        ticker.last_price, ticker.price_change_percent, ticker.volume
    );

    let depth = DepthRequest {
        limit: Some(5),
        ..DepthRequest::new(symbol)
    };
    let book = client.order_book(&depth).await?;
    for level in &book.bids {
        println!("  bid {} x {}", level.price(), level.quantity());
    }
    for level in &book.asks {
        println!("  ask {} x {}", level.price(), level.quantity());
    }

    let candles = KlinesRequest {
        limit: Some(3),
        ..KlinesRequest::new(symbol, KlineInterval::OneHour)
    };
    for kline in client.klines(&candles).await? {
        println!(
            "  {} o={} h={} l={} c={} v={}",
            kline.open_time, kline.open, kline.high, kline.low, kline.close, kline.volume
        );
    }

    println!("\n✓ Market data example complete");
    Ok(())
}
