//! Gateway behavior: header assembly, routing, validation, error mapping.

use chrono::{Duration, Utc};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kis_sdk::prelude::*;

fn client_for(server: &MockServer, mode: AccountMode) -> KisClient {
    let mut config = KisConfig::new("test-app-key", "test-app-secret");
    config.account_mode = mode;
    config.real_domain = Some(server.uri());
    config.virtual_domain = Some(server.uri());

    let cached = CachedToken {
        token: "test-bearer".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
    };
    KisClient::builder()
        .config(config)
        .token_store(Box::new(MemoryTokenStore::with_token(cached)))
        .build()
        .unwrap()
}

#[tokio::test]
async fn domestic_price_sends_kis_headers_and_returns_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uapi/domestic-stock/v1/quotations/inquire-price"))
        .and(header("authorization", "Bearer test-bearer"))
        .and(header("appkey", "test-app-key"))
        .and(header("appsecret", "test-app-secret"))
        .and(header("tr_id", "FHKST01010100"))
        .and(query_param("fid_cond_mrkt_div_code", "J"))
        .and(query_param("fid_input_iscd", "005930"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rt_cd": "0",
            "msg_cd": "MCA00000",
            "msg1": "ok",
            "output": {
                "stck_prpr": "71900",
                "prdy_vrss": "-100",
                "prdy_vrss_sign": "5",
                "prdy_ctrt": "-0.14",
                "acml_vol": "9114891",
                "acml_tr_pbmn": "655827013700",
                "hts_kor_isnm": "삼성전자"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, AccountMode::Real);
    let output = client.quotations().price("005930").await.unwrap();
    assert_eq!(output.stck_prpr, "71900");
    assert_eq!(output.acml_vol, "9114891");
}

#[tokio::test]
async fn quotations_use_production_host_in_virtual_mode() {
    // Production host answers; the virtual host points nowhere reachable.
    let production = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uapi/domestic-stock/v1/quotations/inquire-price"))
        .and(header("tr_id", "FHKST01010100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rt_cd": "0",
            "msg_cd": "MCA00000",
            "msg1": "ok",
            "output": {
                "stck_prpr": "71900",
                "prdy_vrss": "0",
                "prdy_vrss_sign": "3",
                "prdy_ctrt": "0.00",
                "acml_vol": "1",
                "acml_tr_pbmn": "1"
            }
        })))
        .expect(1)
        .mount(&production)
        .await;

    let mut config = KisConfig::new("test-app-key", "test-app-secret");
    config.account_mode = AccountMode::Virtual;
    config.real_domain = Some(production.uri());
    config.virtual_domain = Some("http://127.0.0.1:9".to_string());

    let cached = CachedToken {
        token: "test-bearer".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
    };
    let client = KisClient::builder()
        .config(config)
        .token_store(Box::new(MemoryTokenStore::with_token(cached)))
        .build()
        .unwrap();

    assert!(client.quotations().price("005930").await.is_ok());
}

#[tokio::test]
async fn overseas_quotations_use_virtual_host_in_virtual_mode() {
    // The paper-trading host answers; the production host points nowhere
    // reachable. Overseas market data rides the mode-specific host.
    let paper = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uapi/overseas-price/v1/quotations/price"))
        .and(header("tr_id", "HHDFS00000300"))
        .and(query_param("EXCD", "NAS"))
        .and(query_param("SYMB", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rt_cd": "0",
            "msg_cd": "MCA00000",
            "msg1": "ok",
            "output": {"last": "190.1"}
        })))
        .expect(1)
        .mount(&paper)
        .await;

    let mut config = KisConfig::new("test-app-key", "test-app-secret");
    config.account_mode = AccountMode::Virtual;
    config.real_domain = Some("http://127.0.0.1:9".to_string());
    config.virtual_domain = Some(paper.uri());

    let cached = CachedToken {
        token: "test-bearer".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
    };
    let client = KisClient::builder()
        .config(config)
        .token_store(Box::new(MemoryTokenStore::with_token(cached)))
        .build()
        .unwrap();

    let body = client.overseas().price("NAS", "AAPL").await.unwrap();
    assert_eq!(body["output"]["last"], "190.1");
}

#[tokio::test]
async fn balance_uses_virtual_tr_id_in_virtual_mode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uapi/domestic-stock/v1/trading/inquire-balance"))
        .and(header("tr_id", "VTTC8434R"))
        .and(query_param("CANO", "50012345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rt_cd": "0",
            "msg_cd": "KIOK0510",
            "msg1": "ok",
            "output1": [{"pdno": "005930", "hldg_qty": "10"}],
            "output2": [{"tot_evlu_amt": "719000"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, AccountMode::Virtual);
    let balance = client.account().balance("50012345", "01").await.unwrap();
    assert_eq!(balance.output1.len(), 1);
    assert_eq!(balance.output2.len(), 1);
}

#[tokio::test]
async fn domestic_buy_posts_hashkey_and_mode_tr_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/uapi/hashkey"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "HASH": "a1b2c3d4" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/uapi/domestic-stock/v1/trading/order-cash"))
        .and(header("tr_id", "VTTC0802U"))
        .and(header("hashkey", "a1b2c3d4"))
        .and(header("authorization", "Bearer test-bearer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rt_cd": "0",
            "msg_cd": "APBK0013",
            "msg1": "ok",
            "output": {
                "KRX_FWDG_ORD_ORGNO": "06010",
                "ODNO": "0000117057",
                "ORD_TMD": "121052"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, AccountMode::Virtual);
    let order = DomesticOrderRequest {
        cano: "50012345".to_string(),
        product_code: "01".to_string(),
        symbol: "005930".to_string(),
        order_division: "00".to_string(),
        quantity: "10".to_string(),
        price: "71000".to_string(),
    };
    let ack = client.orders().domestic(Side::Buy, &order).await.unwrap();
    assert_eq!(ack.order_no, "0000117057");
}

#[tokio::test]
async fn overseas_ranking_passes_query_parameters_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uapi/overseas-stock/v1/ranking/market-cap"))
        .and(header("tr_id", "HHDFS76350100"))
        .and(query_param("EXCD", "NAS"))
        .and(query_param("VOL_RANG", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rt_cd": "0",
            "msg1": "ok",
            "output1": {"zdiv": "4"},
            "output2": [{"symb": "AAPL"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, AccountMode::Real);
    let body = client.ranking().market_cap("NAS", "0", "").await.unwrap();
    assert_eq!(body["output2"][0]["symb"], "AAPL");
}

#[tokio::test]
async fn missing_required_parameter_fails_before_any_call() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and fail differently.
    let client = client_for(&server, AccountMode::Real);

    let err = client.quotations().price("").await.unwrap_err();
    assert!(matches!(err, KisError::Validation(_)));

    let err = client.overseas().price("", "AAPL").await.unwrap_err();
    assert!(err.to_string().contains("exchange is required"));
}

#[tokio::test]
async fn non_retryable_upstream_status_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uapi/overseas-price/v1/quotations/price"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string(r#"{"msg1":"forbidden tr_id"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, AccountMode::Real);
    let err = client.overseas().price("NAS", "AAPL").await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("403"), "{msg}");
    assert!(msg.contains("forbidden tr_id"), "{msg}");
}

#[tokio::test]
async fn retryable_statuses_are_retried_until_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uapi/overseas-price/v1/quotations/price"))
        .respond_with(ResponseTemplate::new(503))
        // Initial attempt plus three retries under the idempotent policy.
        .expect(4)
        .mount(&server)
        .await;

    let client = client_for(&server, AccountMode::Real);
    let err = client.overseas().price("NAS", "AAPL").await.unwrap_err();
    assert!(matches!(
        err,
        KisError::Http(kis_sdk::error::HttpError::MaxRetriesExceeded { attempts: 4, .. })
    ));
}
