//! Integration tests for `AlphaVantageClient` and `PriceBoard` using wiremock HTTP mocks.

use chrono::{DateTime, TimeDelta, Utc};
use tickerpulse_quotes::{
    AlphaVantageClient, Banner, FailureKind, PriceBoard, QuoteError, DEFAULT_FRESHNESS,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> AlphaVantageClient {
    AlphaVantageClient::with_base_url(
        "test-key",
        5,
        "tickerpulse-test/0.1",
        &format!("{}/query", server.uri()),
    )
    .expect("client construction should not fail")
}

fn global_quote(symbol: &str, price: &str, change: &str, pct: &str) -> serde_json::Value {
    serde_json::json!({
        "Global Quote": {
            "01. symbol": symbol,
            "02. open": "186.0000",
            "05. price": price,
            "07. latest trading day": "2024-03-01",
            "08. previous close": "188.3000",
            "09. change": change,
            "10. change percent": pct
        }
    })
}

fn t0() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-03-01T14:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn get_global_quote_returns_parsed_quote() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "GLOBAL_QUOTE"))
        .and(query_param("symbol", "IBM"))
        .and(query_param("apikey", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(global_quote(
                "IBM", "187.2300", "-1.0700", "-0.5683%",
            )),
        )
        .mount(&server)
        .await;

    let quote = test_client(&server)
        .get_global_quote("IBM")
        .await
        .expect("should parse quote");

    assert!((quote.price - 187.23).abs() < 1e-9);
    assert!((quote.change + 1.07).abs() < 1e-9);
    assert!((quote.change_percent + 0.5683).abs() < 1e-9);
}

#[tokio::test]
async fn rate_limit_note_returns_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute and 500 calls per day."
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_global_quote("IBM")
        .await
        .unwrap_err();
    assert!(err.is_rate_limited(), "expected RateLimited, got {err:?}");
}

#[tokio::test]
async fn empty_global_quote_returns_missing_quote() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "Global Quote": {} })),
        )
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_global_quote("ZZZZ")
        .await
        .unwrap_err();
    assert!(matches!(err, QuoteError::MissingQuote { ref ticker } if ticker == "ZZZZ"));
}

#[tokio::test]
async fn server_error_returns_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_global_quote("IBM")
        .await
        .unwrap_err();
    assert!(matches!(err, QuoteError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_returns_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_global_quote("IBM")
        .await
        .unwrap_err();
    assert!(matches!(err, QuoteError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn board_issues_one_request_within_freshness_window() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("symbol", "IBM"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(global_quote("IBM", "187.23", "1.00", "0.53%")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let board = PriceBoard::new(test_client(&server), DEFAULT_FRESHNESS);
    let request = vec!["IBM".to_owned()];

    let first = board.refresh_prices_at(&request, t0()).await;
    let second = board
        .refresh_prices_at(&request, t0() + TimeDelta::minutes(2))
        .await;

    assert_eq!(first, second);
    assert_eq!(second[0].price, Some(187.23));
    server.verify().await;
}

#[tokio::test]
async fn board_refetches_after_freshness_window() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("symbol", "IBM"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(global_quote("IBM", "187.23", "1.00", "0.53%")),
        )
        .expect(2)
        .mount(&server)
        .await;

    let board = PriceBoard::new(test_client(&server), DEFAULT_FRESHNESS);
    let request = vec!["IBM".to_owned()];

    board.refresh_prices_at(&request, t0()).await;
    board
        .refresh_prices_at(&request, t0() + TimeDelta::minutes(6))
        .await;

    server.verify().await;
}

#[tokio::test]
async fn board_mixes_successes_and_failures_in_one_batch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("symbol", "IBM"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(global_quote("IBM", "187.23", "1.00", "0.53%")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("symbol", "GME"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Note": "API call frequency exceeded"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("symbol", "AMC"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let board = PriceBoard::new(test_client(&server), DEFAULT_FRESHNESS);
    let request: Vec<String> = ["IBM", "GME", "AMC"].iter().map(|s| (*s).to_owned()).collect();
    let quotes = board.refresh_prices_at(&request, t0()).await;

    assert_eq!(quotes.len(), 3);
    assert_eq!(quotes[0].price, Some(187.23));
    assert_eq!(quotes[1].error.as_ref().unwrap().kind, FailureKind::RateLimited);
    assert_eq!(quotes[2].error.as_ref().unwrap().kind, FailureKind::Transport);
    assert!(quotes[1..].iter().all(|q| q.fetched_at == t0() && q.price.is_none()));

    let banner = Banner::for_selection(&request, &quotes).to_string();
    assert!(banner.contains("GME API Limit"), "{banner}");
    assert!(banner.contains("AMC Error"), "{banner}");
}
