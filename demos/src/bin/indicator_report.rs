//! Demo 1: Indicator Report
//!
//! Showcases: Public candle fetch, every indicator over the same candles
//!
//! Run: cargo run --bin indicator_report -- KRW-BTC

use colored::*;
use tracing_subscriber::EnvFilter;
use upbit_sdk::prelude::*;

const LOOKBACK: u32 = 120;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let market = std::env::args().nth(1).unwrap_or_else(|| "KRW-BTC".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  INDICATOR REPORT: {}", market).cyan().bold());
    println!("{}", "  Upbit SDK Demo - Daily Candles".cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let tools = UpbitTools::new(UpbitRestClient::public()?);
    let candles = tools.fetch_day_candles(&market, Some(LOOKBACK)).await?;

    let (Some(first), Some(last)) = (candles.first(), candles.last()) else {
        println!("{} No candles returned for {}", "✗".red(), market);
        return Ok(());
    };

    println!(
        "{} {} candles from {} to {}\n",
        "✓".green(),
        candles.len(),
        first.opened_at().map(|t| t.date().to_string()).unwrap_or_default(),
        last.opened_at().map(|t| t.date().to_string()).unwrap_or_default(),
    );

    let close = last.trade_price;
    println!("  {} {:.2}", "Close:".yellow(), close);
    println!();

    // Moving averages
    for period in [5, 20, 60] {
        let sma = upbit_indicators::sma(&candles, period);
        let ema = upbit_indicators::ema(&candles, period);
        if let (Some(sma), Some(ema)) = (sma.last(), ema.last()) {
            let trend = if close > *sma { "above".green() } else { "below".red() };
            println!(
                "  {:<8} SMA {:>16.2}  EMA {:>16.2}  close {}",
                format!("MA({})", period).bold(),
                sma,
                ema,
                trend
            );
        }
    }
    println!();

    // MACD
    let (short, long, signal) = upbit_indicators::DEFAULT_MACD_PERIODS;
    let macd = upbit_indicators::macd(&candles, short, long, signal);
    if let Some((line, signal_value, histogram)) = macd.last() {
        let momentum = if histogram >= 0.0 {
            "bullish".green()
        } else {
            "bearish".red()
        };
        println!(
            "  {:<8} line {:>14.2}  signal {:>14.2}  hist {:>12.2}  {}",
            "MACD".bold(),
            line,
            signal_value,
            histogram,
            momentum
        );
    }

    // Bollinger Bands
    let bands = upbit_indicators::bollinger_bands(&candles, 20, 2.0);
    if let (Some(upper), Some(middle), Some(lower)) =
        (bands.upper.last(), bands.middle.last(), bands.lower.last())
    {
        println!(
            "  {:<8} upper {:>13.2}  mid {:>17.2}  lower {:>11.2}",
            "BB(20)".bold(),
            upper,
            middle,
            lower
        );
    }

    // RSI
    let rsi = upbit_indicators::rsi(&candles, upbit_indicators::DEFAULT_RSI_PERIOD);
    if let Some(value) = rsi.last() {
        let zone = match *value {
            v if v >= 70.0 => "overbought".red(),
            v if v <= 30.0 => "oversold".green(),
            _ => "neutral".normal(),
        };
        println!("  {:<8} {:>6.2}  {}", "RSI(14)".bold(), value, zone);
    }

    // OBV
    let obv = upbit_indicators::obv(&candles);
    if let (Some(now), Some(before)) = (obv.last(), obv.iter().rev().nth(5)) {
        let flow = if now > before {
            "accumulating".green()
        } else {
            "distributing".red()
        };
        println!("  {:<8} {:>16.4}  5-day {}", "OBV".bold(), now, flow);
    }

    println!();
    println!("{}", "═".repeat(60).cyan());

    Ok(())
}
