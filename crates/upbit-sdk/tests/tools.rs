//! Tool calls against a local mock exchange

use mockito::{Matcher, Server};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use upbit_sdk::prelude::*;

const BEARER: &str = r"^Bearer [A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$";

fn init_tracing() {
    // Every test calls this; only the first registration wins
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn tools(server: &Server) -> UpbitTools {
    init_tracing();
    let creds = Credentials::new("test-access", "test-secret").unwrap();
    UpbitTools::with_config(
        ClientConfig::new()
            .with_base_url(server.url())
            .with_credentials(creds),
    )
    .unwrap()
}

/// Day candles newest first, closes 1..=n oldest to newest, volume 5 each
fn day_candles(n: usize) -> String {
    let candles: Vec<Value> = (1..=n)
        .rev()
        .map(|i| {
            json!({
                "market": "KRW-BTC",
                "candle_date_time_utc": format!("2024-01-{:02}T00:00:00", i),
                "opening_price": i as f64,
                "high_price": i as f64,
                "low_price": i as f64,
                "trade_price": i as f64,
                "candle_acc_trade_volume": 5.0
            })
        })
        .collect();
    Value::Array(candles).to_string()
}

async fn mock_candles(server: &mut Server, count: &str, n: usize) -> mockito::Mock {
    server
        .mock("GET", "/candles/days")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("market".into(), "KRW-BTC".into()),
            Matcher::UrlEncoded("count".into(), count.into()),
        ]))
        .with_status(200)
        .with_body(day_candles(n))
        .create_async()
        .await
}

#[tokio::test]
async fn moving_average_uses_oldest_first_candles() {
    let mut server = Server::new_async().await;
    let mock = mock_candles(&mut server, "5", 5).await;

    let result = tools(&server)
        .get_moving_average(GetMovingAverageRequest {
            market: "KRW-BTC".to_string(),
            period: 3,
            count: Some(5),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.sma, vec![2.0, 3.0, 4.0]);
    assert_eq!(result.ema, vec![2.0, 3.0, 4.0]);
}

#[tokio::test]
async fn count_defaults_to_maximum() {
    let mut server = Server::new_async().await;
    let mock = mock_candles(&mut server, "200", 20).await;

    let result = tools(&server)
        .get_rsi(GetRsiRequest::new("KRW-BTC", 14))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.rsi, vec![100.0; 6]);
}

#[tokio::test]
async fn count_is_capped() {
    let mut server = Server::new_async().await;
    let mock = mock_candles(&mut server, "200", 3).await;

    let result = tools(&server)
        .get_obv(GetObvRequest {
            market: "KRW-BTC".to_string(),
            count: Some(1000),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.obv, vec![5.0, 10.0, 15.0]);
}

#[tokio::test]
async fn call_by_name_returns_named_series() {
    let mut server = Server::new_async().await;
    let _mock = mock_candles(&mut server, "10", 10).await;

    let value = tools(&server)
        .call(
            "get_bollinger_bands",
            json!({"market": "KRW-BTC", "period": 4, "std_dev": 2.0, "count": 10}),
        )
        .await
        .unwrap();

    assert_eq!(value["sma"].as_array().unwrap().len(), 7);
    assert_eq!(value["upper_band"].as_array().unwrap().len(), 7);
    assert_eq!(value["lower_band"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn call_macd_by_name() {
    let mut server = Server::new_async().await;
    let _mock = mock_candles(&mut server, "40", 40).await;

    let value = tools(&server)
        .call(
            "get_macd",
            json!({"market": "KRW-BTC", "short_period": 3, "long_period": 6, "signal_period": 4, "count": 40}),
        )
        .await
        .unwrap();

    // 40 - 6 + 1 = 35 MACD points, 35 - 4 + 1 = 32 signal points
    assert_eq!(value["macd_line"].as_array().unwrap().len(), 32);
    assert_eq!(value["signal_line"].as_array().unwrap().len(), 32);
    assert_eq!(value["histogram"].as_array().unwrap().len(), 32);
}

#[tokio::test]
async fn failed_fetch_yields_error_not_result() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/candles/days")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let err = tools(&server)
        .get_rsi(GetRsiRequest::new("KRW-BTC", 14))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, ToolError::Rest(RestError::Status { .. })));
}

#[tokio::test]
async fn limit_buy_sends_cancel_maker() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/orders")
        .match_header("authorization", Matcher::Regex(BEARER.to_string()))
        .match_body(Matcher::Json(json!({
            "market": "KRW-BTC",
            "side": "bid",
            "ord_type": "limit",
            "price": "100000000",
            "volume": "0.1",
            "smp_type": "cancel_maker"
        })))
        .with_status(201)
        .with_body(
            r#"{"uuid":"f1a2","side":"bid","ord_type":"limit","price":"100000000","state":"wait","market":"KRW-BTC","volume":"0.1","remaining_volume":"0.1","executed_volume":"0","trades_count":0}"#,
        )
        .create_async()
        .await;

    let order = tools(&server)
        .place_buy_order_by_limit(PlaceBuyOrderByLimitRequest {
            market: "KRW-BTC".to_string(),
            price: "100000000".to_string(),
            volume: "0.1".to_string(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(order.uuid, "f1a2");
}

#[tokio::test]
async fn market_sell_by_name() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/orders")
        .match_body(Matcher::Json(json!({
            "market": "KRW-ETH",
            "side": "ask",
            "ord_type": "market",
            "volume": "2",
            "smp_type": "cancel_maker"
        })))
        .with_status(201)
        .with_body(
            r#"{"uuid":"e9","side":"ask","ord_type":"market","price":null,"state":"wait","market":"KRW-ETH","volume":"2","remaining_volume":"2","executed_volume":"0","trades_count":0}"#,
        )
        .create_async()
        .await;

    let value = tools(&server)
        .call(
            "place_sell_order_by_market",
            json!({"market": "KRW-ETH", "volume": "2"}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(value["uuid"], "e9");
}

#[tokio::test]
async fn cancel_order_reports_outcome() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/order")
        .match_query(Matcher::UrlEncoded("uuid".into(), "abc".into()))
        .with_status(200)
        .with_body(
            r#"{"uuid":"abc","side":"bid","ord_type":"limit","price":"1","state":"wait","market":"KRW-BTC","volume":"1","remaining_volume":"1","executed_volume":"0","trades_count":0}"#,
        )
        .create_async()
        .await;

    let value = tools(&server)
        .call("cancel_order", json!({"uuid": "abc"}))
        .await
        .unwrap();

    assert_eq!(value, json!({"canceled": true}));
}

#[tokio::test]
async fn closed_order_history_omits_unset_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/orders/closed")
        .match_query(Matcher::Regex("^market=KRW-BTC&state=done$".to_string()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let result = tools(&server)
        .get_closed_order_history(GetClosedOrderHistoryRequest {
            market: "KRW-BTC".to_string(),
            state: "done".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.orders.is_empty());
}

#[tokio::test]
async fn get_accounts_ignores_arguments() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/accounts")
        .with_status(200)
        .with_body(
            r#"[{"currency":"BTC","balance":"0.5","locked":"0","avg_buy_price":"90000000","avg_buy_price_modified":false,"unit_currency":"KRW"}]"#,
        )
        .create_async()
        .await;

    let value = tools(&server).call("get_accounts", Value::Null).await.unwrap();
    assert_eq!(value["accounts"][0]["currency"], "BTC");
}

#[tokio::test]
async fn unknown_tool_and_bad_arguments() {
    let server = Server::new_async().await;
    let tools = tools(&server);

    let err = tools.call("get_weather", json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(_)));

    let err = tools
        .call("get_rsi", json!({"market": "KRW-BTC"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { tool: "get_rsi", .. }));
}
