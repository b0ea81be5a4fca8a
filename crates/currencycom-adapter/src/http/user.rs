/*
[INPUT]:  Query parameters and API credentials
[OUTPUT]: Account data (balances, currencies, funding history, trades)
[POS]:    HTTP layer - signed account endpoints
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use crate::http::{CurrencyComClient, Result};
use crate::types::{
    AccountInfo, AccountRequest, AllMyTradesRequest, BlockchainAddressRequest, CurrencyInfo,
    DepositAddress, LeverageSettings, LeverageSettingsRequest, MyTrade, SignedRequest, Transaction,
    TransactionsRequest,
};
use reqwest::Method;

impl CurrencyComClient {
    /// Account information and balances
    ///
    /// GET /api/v2/account
    pub async fn account_info(&self, request: Option<&AccountRequest>) -> Result<AccountInfo> {
        let params = request.map(AccountRequest::to_params).transpose()?;
        self.send_signed(Method::GET, "account", params.unwrap_or_default()).await
    }

    /// Currencies available on the exchange
    ///
    /// GET /api/v2/currencies
    pub async fn currencies(&self, request: Option<&SignedRequest>) -> Result<Vec<CurrencyInfo>> {
        let params = request.map(SignedRequest::to_params).transpose()?;
        self.send_signed(Method::GET, "currencies", params.unwrap_or_default()).await
    }

    /// Deposit address for a coin
    ///
    /// GET /api/v2/depositAddress?coin={coin}
    pub async fn deposit_address(
        &self,
        request: &BlockchainAddressRequest,
    ) -> Result<DepositAddress> {
        let params = request.to_params()?;
        self.send_signed(Method::GET, "depositAddress", params).await
    }

    /// GET /api/v2/deposits
    pub async fn deposits(&self, request: Option<&TransactionsRequest>) -> Result<Vec<Transaction>> {
        self.transaction_history("deposits", request).await
    }

    /// GET /api/v2/withdrawals
    pub async fn withdrawals(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> Result<Vec<Transaction>> {
        self.transaction_history("withdrawals", request).await
    }

    /// Balance changes other than deposits and withdrawals
    ///
    /// GET /api/v2/ledger
    pub async fn ledger(&self, request: Option<&TransactionsRequest>) -> Result<Vec<Transaction>> {
        self.transaction_history("ledger", request).await
    }

    /// GET /api/v2/transactions
    pub async fn transactions(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> Result<Vec<Transaction>> {
        self.transaction_history("transactions", request).await
    }

    /// Leverage currently applied to a symbol and the allowed values
    ///
    /// GET /api/v2/leverageSettings?symbol={symbol}
    pub async fn leverage_settings(
        &self,
        request: &LeverageSettingsRequest,
    ) -> Result<LeverageSettings> {
        let params = request.to_params()?;
        self.send_signed(Method::GET, "leverageSettings", params).await
    }

    /// Trades executed on the account for a symbol
    ///
    /// GET /api/v2/myTrades?symbol={symbol}
    pub async fn my_trades(&self, request: &AllMyTradesRequest) -> Result<Vec<MyTrade>> {
        let params = request.to_params()?;
        self.send_signed(Method::GET, "myTrades", params).await
    }

    async fn transaction_history(
        &self,
        method_name: &str,
        request: Option<&TransactionsRequest>,
    ) -> Result<Vec<Transaction>> {
        let params = request.map(TransactionsRequest::to_params).transpose()?;
        self.send_signed(Method::GET, method_name, params.unwrap_or_default()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::auth::{ApiCredentials, FixedClock};
    use crate::http::{API_KEY_HEADER, ClientConfig, CurrencyComClient, CurrencyComError};
    use crate::types::{
        AccountRequest, AllMyTradesRequest, BlockchainAddressRequest, CurrencyType,
        LeverageSettingsRequest, TransactionsRequest,
    };
    use rstest::rstest;
    use wiremock::matchers::{header, header_exists, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn signed_client(server: &MockServer) -> CurrencyComClient {
        CurrencyComClient::with_credentials(
            ClientConfig::default().with_endpoint(server.uri()),
            ApiCredentials::new("test-key", "test-secret"),
        )
        .expect("client init")
        .with_clock(Arc::new(FixedClock::new(1_700_000_000_000)))
    }

    #[tokio::test]
    async fn test_account_info_without_request() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/v2/account"))
            .and(header(API_KEY_HEADER, "test-key"))
            .and(query_param("timestamp", "1700000000000"))
            .and(query_param(
                "signature",
                "dccf2651b1d8329665bfddb0798eccd4650d986a9cfe5547b2f5822131e7620b",
            ))
            .and(query_param_is_missing("showZeroBalance"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"canTrade":true,"balances":[{"asset":"USD","free":"10.5","locked":"0"}]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let info = signed_client(&server)
            .account_info(None)
            .await
            .expect("account_info failed");

        assert!(info.can_trade);
        assert_eq!(info.balances[0].free.to_string(), "10.5");
    }

    #[tokio::test]
    async fn test_account_info_sends_show_zero_balance() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/v2/account"))
            .and(query_param("showZeroBalance", "false"))
            .and(query_param("recvWindow", "5000"))
            .and(query_param(
                "signature",
                "3f71805bf5ae64b6da8ba14f81cf8223753edfaef84d674278b6f7125d181d9c",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let request = AccountRequest {
            show_zero_balance: false,
            recv_window: Some(5000),
        };
        signed_client(&server)
            .account_info(Some(&request))
            .await
            .expect("account_info failed");
    }

    #[tokio::test]
    async fn test_currencies() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/v2/currencies"))
            .and(header_exists(API_KEY_HEADER))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"name":"Bitcoin","displaySymbol":"BTC","type":"CRYPTO","precision":8,"minDeposit":0.0001}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let currencies = signed_client(&server)
            .currencies(None)
            .await
            .expect("currencies failed");

        assert_eq!(currencies[0].currency_type, CurrencyType::Crypto);
        assert_eq!(currencies[0].precision, 8);
        assert_eq!(currencies[0].min_deposit.to_string(), "0.0001");
    }

    #[tokio::test]
    async fn test_deposit_address() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/v2/depositAddress"))
            .and(query_param("coin", "BTC"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"address":"bc1qxyz","destinationTag":""}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let address = signed_client(&server)
            .deposit_address(&BlockchainAddressRequest::new("BTC"))
            .await
            .expect("deposit_address failed");

        assert_eq!(address.address, "bc1qxyz");
        assert!(address.address_legacy.is_empty());
    }

    #[rstest]
    #[case("deposits")]
    #[case("withdrawals")]
    #[case("ledger")]
    #[case("transactions")]
    #[tokio::test]
    async fn test_transaction_history_endpoints(#[case] method_name: &str) {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path(format!("/api/v2/{method_name}")))
            .and(query_param("limit", "10"))
            .and(query_param("startTime", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id":1,"amount":"25.00","currency":"USD","type":"deposit","timestamp":1700000000000}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_client(&server);
        let request = TransactionsRequest {
            start_time: Some(0),
            limit: Some(10),
            ..Default::default()
        };
        let history = match method_name {
            "deposits" => client.deposits(Some(&request)).await,
            "withdrawals" => client.withdrawals(Some(&request)).await,
            "ledger" => client.ledger(Some(&request)).await,
            _ => client.transactions(Some(&request)).await,
        }
        .expect("history failed");

        assert_eq!(history[0].amount.to_string(), "25.00");
        assert_eq!(history[0].transaction_type, "deposit");
    }

    #[tokio::test]
    async fn test_leverage_settings() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/v2/leverageSettings"))
            .and(query_param("symbol", "BTC/USD_LEVERAGE"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"value":10,"values":[1,2,5,10]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let settings = signed_client(&server)
            .leverage_settings(&LeverageSettingsRequest::new("BTC/USD_LEVERAGE"))
            .await
            .expect("leverage_settings failed");

        assert_eq!(settings.value, 10);
        assert_eq!(settings.values, vec![1, 2, 5, 10]);
    }

    #[tokio::test]
    async fn test_my_trades() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/v2/myTrades"))
            .and(query_param("symbol", "BTC/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id":"t1","orderId":"o1","symbol":"BTC/USD","price":"47000","qty":"0.01","isBuyer":true,"time":1700000000000}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let trades = signed_client(&server)
            .my_trades(&AllMyTradesRequest::new("BTC/USD"))
            .await
            .expect("my_trades failed");

        assert_eq!(trades[0].order_id, "o1");
        assert!(trades[0].is_buyer);
    }

    #[tokio::test]
    async fn test_signed_endpoint_requires_credentials() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = CurrencyComClient::new(ClientConfig::default().with_endpoint(server.uri()))
            .expect("client init");
        let err = client.account_info(None).await.unwrap_err();

        assert!(matches!(err, CurrencyComError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_invalid_recv_window_sends_nothing() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let request = TransactionsRequest {
            recv_window: Some(60_001),
            ..Default::default()
        };
        let err = signed_client(&server)
            .deposits(Some(&request))
            .await
            .unwrap_err();

        assert!(matches!(err, CurrencyComError::InvalidParameters(_)));
    }
}
