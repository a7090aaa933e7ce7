//! Demo 2: Account Overview
//!
//! Showcases: Signed requests, decimal balances, open order listing
//!
//! Requires UPBIT_ACCESS_KEY and UPBIT_SECRET_KEY.
//!
//! Run: cargo run --bin account_overview

use colored::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use upbit_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "  Upbit SDK Demo - Signed Requests".cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let tools = match UpbitTools::from_env() {
        Ok(tools) => tools,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("  Set UPBIT_ACCESS_KEY and UPBIT_SECRET_KEY to run this demo.");
            return Ok(());
        }
    };

    let accounts = tools.get_accounts().await?.accounts;
    println!("{} {} balances\n", "✓".green(), accounts.len());

    println!(
        "  {:<8} {:>20} {:>20} {:>18}",
        "ASSET".bold(),
        "AVAILABLE".bold(),
        "LOCKED".bold(),
        "AVG BUY".bold()
    );

    let mut krw_cost = Decimal::ZERO;
    for account in &accounts {
        let total = account.total_decimal().unwrap_or_default();
        let avg = account.avg_buy_price_decimal().unwrap_or_default();
        if account.currency != account.unit_currency {
            krw_cost += total * avg;
        }

        println!(
            "  {:<8} {:>20} {:>20} {:>18}",
            account.currency.yellow(),
            account.balance,
            account.locked,
            account.avg_buy_price
        );
    }
    println!();
    println!("  {} {} KRW", "Cost basis:".bold(), krw_cost.round_dp(0));
    println!();

    for account in accounts.iter().filter(|a| a.currency != a.unit_currency) {
        let market = account.market();
        let open = tools
            .get_open_orders(GetOpenOrdersRequest {
                market: market.clone(),
                ..Default::default()
            })
            .await?
            .orders;

        if open.is_empty() {
            continue;
        }

        println!("  {} {} open orders", market.cyan(), open.len());
        for order in open {
            let side = match order.order_side() {
                Some(OrderSide::Bid) => "BUY ".green(),
                Some(OrderSide::Ask) => "SELL".red(),
                None => order.side.normal(),
            };
            println!(
                "    {} {:>14} @ {:>14}  {}",
                side,
                order.remaining_volume.as_deref().unwrap_or("-"),
                order.price.as_deref().unwrap_or("market"),
                order.uuid.dimmed()
            );
        }
    }

    println!("{}", "═".repeat(65).cyan());

    Ok(())
}
