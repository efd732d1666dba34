use latoken::exchanges::latoken::{build_connector, DepthQuery, OrdersQuery};
use latoken::{AccountInfo, ExchangeConfig, MarketDataSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // LATOKEN_API_KEY / LATOKEN_SECRET_KEY enable the account calls below
    let config = ExchangeConfig::from_env("LATOKEN").unwrap_or_else(|e| {
        println!("No credentials loaded ({}), using public endpoints only", e);
        ExchangeConfig::read_only()
    });
    let has_credentials = config.has_credentials();

    let connector = build_connector(config)?;

    println!("Fetching markets...");
    match connector.markets().await {
        Ok(markets) => match markets.as_array() {
            Some(list) => {
                println!("Found {} markets", list.len());
                for market in list.iter().take(5) {
                    println!("Market: {}", market);
                }
            }
            None => println!("Markets: {}", markets),
        },
        Err(e) => println!("Error fetching markets: {}", e),
    }

    let market = std::env::args().nth(1).unwrap_or_else(|| "ETH_BTC".to_string());

    match connector.ticker(&market).await {
        Ok(ticker) => println!("Ticker {}: {}", market, ticker),
        Err(e) => println!("Error fetching ticker: {}", e),
    }

    match connector
        .order_book(&DepthQuery::new(market.clone()).with_limit(5))
        .await
    {
        Ok(depth) => println!("Depth {}: {}", market, depth),
        Err(e) => println!("Error fetching depth: {}", e),
    }

    if has_credentials {
        match connector.get_balances().await {
            Ok(balances) => println!("Balances: {}", balances),
            Err(e) => println!("Error fetching balances: {}", e),
        }

        match connector.get_orders(&OrdersQuery::new(market.clone())).await {
            Ok(orders) => println!("Active orders: {}", orders),
            Err(e) => println!("Error fetching orders: {}", e),
        }
    }

    Ok(())
}
