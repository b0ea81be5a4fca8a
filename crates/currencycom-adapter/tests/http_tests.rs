/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{
    TEST_API_KEY, TEST_SECRET, ValidQuerySignatureMatcher, public_client, setup_mock_server,
    signed_client,
};
use currencycom_adapter::{
    API_KEY_HEADER, AccountRequest, BySymbolRequest, ClientConfig, CreateOrderRequest,
    CurrencyComClient, CurrencyComError, DEFAULT_ENDPOINT, DepthRequest, OrderSide,
    PositionHistoryRequest, SignedRequest,
};
use reqwest::Method;
use rust_decimal::Decimal;
use tokio_test::assert_ok;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(CurrencyComClient::new(ClientConfig::default()));
    assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    assert!(client.credentials().is_none());
}

#[test]
fn test_prepared_request_is_inspectable() {
    let client = CurrencyComClient::new(ClientConfig::default()).expect("client init");
    let request = assert_ok!(client.prepare(
        Method::GET,
        "depth",
        assert_ok!(DepthRequest::new("BTC/USD").to_params()),
        false,
    ));

    assert_eq!(
        request.url.as_str(),
        format!("{DEFAULT_ENDPOINT}/api/v2/depth?symbol=BTC%2FUSD")
    );
    assert!(!request.is_signed());
}

#[test]
fn test_error_retryable() {
    let throttled = CurrencyComError::RemoteRejected {
        status: 429,
        status_text: "Too Many Requests".to_string(),
        body: r#"{"code":"THROTTLING"}"#.to_string(),
    };
    assert!(throttled.is_retryable());
    assert!(!CurrencyComError::MissingCredentials.is_retryable());
}

#[tokio::test]
async fn test_signed_request_carries_valid_signature() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tradingPositionsHistory"))
        .and(header(API_KEY_HEADER, TEST_API_KEY))
        .and(ValidQuerySignatureMatcher::new(TEST_SECRET))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "history": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = PositionHistoryRequest {
        symbol: Some("BTC/USD LEVERAGE+1".to_string()),
        limit: Some(0),
        recv_window: Some(60_000),
    };
    let history = assert_ok!(
        signed_client(&server)
            .trading_positions_history(Some(&request))
            .await
    );
    assert!(history.history.is_empty());
}

#[tokio::test]
async fn test_signed_post_carries_valid_signature() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/order"))
        .and(header_exists(API_KEY_HEADER))
        .and(query_param("price", "47000.125"))
        .and(ValidQuerySignatureMatcher::new(TEST_SECRET))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "orderId": "o1", "status": "NEW" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateOrderRequest::limit(
        "ETH/USD",
        OrderSide::Sell,
        Decimal::new(5, 1),
        Decimal::new(47_000_125, 3),
    );
    let order = assert_ok!(signed_client(&server).create_order(&request).await);
    assert_eq!(order.order_id, "o1");
}

#[tokio::test]
async fn test_wrong_secret_does_not_match() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(ValidQuerySignatureMatcher::new("another-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = signed_client(&server)
        .trading_positions(Some(&SignedRequest::default()))
        .await
        .unwrap_err();

    // unmatched requests get wiremock's default 404
    assert!(matches!(err, CurrencyComError::RemoteRejected { status: 404, .. }));
}

#[tokio::test]
async fn test_public_request_has_no_auth_envelope() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/ticker/24hr"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "symbol": "BTC/USD", "lastPrice": "1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    assert_ok!(client.ticker_24hr(&BySymbolRequest::new("BTC/USD")).await);

    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 1);
    let request = &received[0];
    assert!(request.headers.get(API_KEY_HEADER).is_none());
    let keys: Vec<String> = request
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect();
    assert_eq!(keys, vec!["symbol"]);
}

#[tokio::test]
async fn test_server_error_is_remote_rejected() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/account"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = signed_client(&server)
        .account_info(Some(&AccountRequest::default()))
        .await
        .unwrap_err();

    match &err {
        CurrencyComError::RemoteRejected {
            status,
            status_text,
            body,
        } => {
            assert_eq!(*status, 503);
            assert_eq!(status_text, "Service Unavailable");
            assert_eq!(body, "maintenance");
        }
        other => panic!("Expected RemoteRejected, got {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_unexpected_shape_is_malformed() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/time"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = public_client(&server).server_time().await.unwrap_err();

    match err {
        CurrencyComError::MalformedResponse { body, .. } => {
            assert_eq!(body, "<html>oops</html>");
        }
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_public_client_cannot_sign() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = public_client(&server).currencies(None).await.unwrap_err();
    assert!(matches!(err, CurrencyComError::MissingCredentials));
}

#[tokio::test]
async fn test_transport_failure() {
    // nothing listens on port 1
    let client = CurrencyComClient::new(ClientConfig::default().with_endpoint("http://127.0.0.1:1"))
        .expect("client init");
    let err = client.server_time().await.unwrap_err();

    assert!(matches!(err, CurrencyComError::Transport(_)));
    assert!(err.is_retryable());
}
