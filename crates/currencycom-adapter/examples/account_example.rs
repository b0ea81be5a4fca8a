/*
[INPUT]:  CURRENCYCOM_API_KEY / CURRENCYCOM_API_SECRET environment variables
[OUTPUT]: Account balances, open orders and open positions
[POS]:    Examples - signed account queries
[UPDATE]: When account or trading endpoints change
*/

use currencycom_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Signed account queries
///
/// Requires `CURRENCYCOM_API_KEY` and `CURRENCYCOM_API_SECRET`; the
/// endpoint can be overridden with `CURRENCYCOM_ENDPOINT`.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== currency.com Account Example ===\n");

    let client = match CurrencyComClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {e}");
            eprintln!("Set CURRENCYCOM_API_KEY and CURRENCYCOM_API_SECRET first");
            return Err(e);
        }
    };
    println!("✓ Signed client created for {}\n", client.endpoint());

    let account = AccountRequest {
        show_zero_balance: false,
        recv_window: Some(5_000),
    };
    let info = client.account_info(Some(&account)).await?;
    println!("Can trade: {}", info.can_trade);
    for balance in &info.balances {
        println!(
            "  {:<8} free {} locked {}",
            balance.asset, balance.free, balance.locked
        );
    }

    let orders = client.open_orders(None).await?;
    println!("\nOpen orders: {}", orders.len());
    for order in &orders {
        println!(
            "  {} {} {} {} @ {}",
            order.order_id, order.symbol, order.side, order.orig_qty, order.price
        );
    }

    let positions = client.trading_positions(None).await?;
    println!("\nOpen positions: {}", positions.positions.len());
    for position in &positions.positions {
        println!(
            "  {} {} qty {} upl {}",
            position.id, position.symbol, position.open_quantity, position.upl
        );
    }

    println!("\n✓ Account example complete");
    Ok(())
}
