use chrono::{TimeZone, Utc};
use jito_searcher::http::TransportError;
use jito_searcher::searcher::{ClientOptions, SearcherClient, SearcherError};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SearcherClient {
    SearcherClient::with_options(
        &server.uri(),
        ClientOptions {
            tip_floor_url: server.uri(),
            ..Default::default()
        },
    )
    .unwrap()
}

async fn mount_rpc_result(server: &MockServer, endpoint: &str, rpc_method: &str, result: Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_partial_json(json!({"method": rpc_method})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jsonrpc": "2.0", "id": 1, "result": result})))
        .mount(server)
        .await;
}

async fn mount_tip_floor(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/bundles/tip_floor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn sample_tip_floor() -> Value {
    json!([{
        "time": "2025-03-12T15:38:27Z",
        "landed_tips_25th_percentile": "0.000001",
        "landed_tips_50th_percentile": "0.000001",
        "landed_tips_75th_percentile": "0.000001",
        "landed_tips_95th_percentile": "0.000001",
        "landed_tips_99th_percentile": "0.000001",
        "ema_landed_tips_50th_percentile": "0.000001"
    }])
}

#[tokio::test]
async fn trailing_slash_on_base_url_is_collapsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/bundles"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getTipAccounts",
            "params": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": ["acct"]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SearcherClient::new(&format!("{}/", mock_server.uri())).unwrap();
    assert_eq!(client.get_tip_accounts().await.unwrap(), vec!["acct".to_string()]);
}

#[tokio::test]
async fn bundle_statuses_are_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/bundles"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBundleStatuses",
            "params": [["b1"]]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "context": {"slot": 100},
                "value": [{
                    "bundle_id": "b1",
                    "transactions": ["t1"],
                    "slot": 99,
                    "confirmation_status": "confirmed",
                    "err": {}
                }]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server)
        .get_bundle_statuses(&["b1".to_string()])
        .await
        .unwrap();

    assert_eq!(response.context_slot, 100);
    assert_eq!(response.statuses.len(), 1);
    let status = &response.statuses[0];
    assert_eq!(status.bundle_id, "b1");
    assert_eq!(status.transactions, vec!["t1".to_string()]);
    assert_eq!(status.slot, 99);
    assert_eq!(status.confirmation_status, "confirmed");
    assert!(status.err.is_empty());
}

#[tokio::test]
async fn bundle_statuses_keep_upstream_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/bundles"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBundleStatuses",
            "params": [["id1", "id2"]]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "context": {"slot": 250},
                "value": [
                    {
                        "bundle_id": "id2",
                        "transactions": ["t3"],
                        "slot": 248,
                        "confirmation_status": "finalized",
                        "err": {"Ok": null}
                    },
                    {
                        "bundle_id": "id1",
                        "transactions": ["t1", "t2"],
                        "slot": 249,
                        "confirmation_status": "processed",
                        "err": null
                    }
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server)
        .get_bundle_statuses(&["id1".to_string(), "id2".to_string()])
        .await
        .unwrap();

    assert_eq!(response.context_slot, 250);
    let ids: Vec<&str> = response.statuses.iter().map(|status| status.bundle_id.as_str()).collect();
    assert_eq!(ids, ["id2", "id1"]);
    assert_eq!(response.statuses[0].slot, 248);
    assert_eq!(response.statuses[0].err.get("Ok"), Some(&Value::Null));
    assert_eq!(response.statuses[1].transactions, vec!["t1".to_string(), "t2".to_string()]);
    assert!(response.statuses[1].err.is_empty());
}

#[tokio::test]
async fn response_without_result_is_protocol_error_for_every_rpc() {
    let mock_server = MockServer::start().await;
    let error_body = json!({"jsonrpc": "2.0", "id": 1, "error": {"code": -32602, "message": "bad"}});

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(error_body.clone()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcomes = [
        ("getBundleStatuses", client.get_bundle_statuses(&["b1".to_string()]).await.map(|_| ())),
        ("getTipAccounts", client.get_tip_accounts().await.map(|_| ())),
        ("sendBundle", client.send_bundle(&["tx".to_string()]).await.map(|_| ())),
        ("sendTransaction", client.send_transaction("tx").await.map(|_| ())),
    ];

    for (rpc_method, outcome) in outcomes {
        let err = outcome.unwrap_err();
        match &err {
            SearcherError::Protocol { method, response } => {
                assert_eq!(method, rpc_method);
                assert_eq!(response, &error_body);
            },
            other => panic!("expected protocol error for {rpc_method}, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains(rpc_method), "{message}");
        assert!(message.contains("\"message\":\"bad\""), "{message}");
    }
}

#[tokio::test]
async fn tip_floors_are_converted_to_lamports() {
    let mock_server = MockServer::start().await;
    mount_tip_floor(&mock_server, sample_tip_floor()).await;

    let floors = client_for(&mock_server).get_tip_floors().await.unwrap();

    assert_eq!(floors.time, Utc.with_ymd_and_hms(2025, 3, 12, 15, 38, 27).unwrap());
    assert_eq!(floors.landed_tips_lamports_25th_percentile, 1000);
    assert_eq!(floors.landed_tips_lamports_50th_percentile, 1000);
    assert_eq!(floors.landed_tips_lamports_75th_percentile, 1000);
    assert_eq!(floors.landed_tips_lamports_95th_percentile, 1000);
    assert_eq!(floors.landed_tips_lamports_99th_percentile, 1000);
    assert_eq!(floors.ema_landed_tips_lamports_50th_percentile, 1000);
}

#[tokio::test]
async fn tip_floors_accept_numeric_amounts_and_truncate() {
    let mock_server = MockServer::start().await;
    mount_tip_floor(
        &mock_server,
        json!([{
            "time": "2025-03-12T15:38:27Z",
            "landed_tips_25th_percentile": 1e-6,
            "landed_tips_50th_percentile": 0.0000123456789,
            "landed_tips_75th_percentile": 0.5,
            "landed_tips_95th_percentile": 1,
            "landed_tips_99th_percentile": "2.0000000019",
            "ema_landed_tips_50th_percentile": 0
        }]),
    )
    .await;

    let floors = client_for(&mock_server).get_tip_floors().await.unwrap();

    assert_eq!(floors.landed_tips_lamports_25th_percentile, 1000);
    assert_eq!(floors.landed_tips_lamports_50th_percentile, 12345);
    assert_eq!(floors.landed_tips_lamports_75th_percentile, 500_000_000);
    assert_eq!(floors.landed_tips_lamports_95th_percentile, 1_000_000_000);
    assert_eq!(floors.landed_tips_lamports_99th_percentile, 2_000_000_001);
    assert_eq!(floors.ema_landed_tips_lamports_50th_percentile, 0);
}

#[tokio::test]
async fn only_the_first_tip_floor_record_is_used() {
    let mock_server = MockServer::start().await;
    let mut body = sample_tip_floor();
    body.as_array_mut().unwrap().push(json!({"time": "not a time"}));
    mount_tip_floor(&mock_server, body).await;

    let floors = client_for(&mock_server).get_tip_floors().await.unwrap();
    assert_eq!(floors.landed_tips_lamports_50th_percentile, 1000);
}

#[tokio::test]
async fn empty_tip_floor_list_is_no_data() {
    let mock_server = MockServer::start().await;
    mount_tip_floor(&mock_server, json!([])).await;

    let result = client_for(&mock_server).get_tip_floors().await;
    assert!(matches!(result, Err(SearcherError::NoData)));
}

#[tokio::test]
async fn fractional_seconds_in_tip_floor_time_are_rejected() {
    let mock_server = MockServer::start().await;
    let mut body = sample_tip_floor();
    body[0]["time"] = json!("2025-03-12T15:38:27.123Z");
    mount_tip_floor(&mock_server, body).await;

    let result = client_for(&mock_server).get_tip_floors().await;
    assert!(matches!(result, Err(SearcherError::Parse { ref field, .. }) if field == "time"));
}

#[tokio::test]
async fn unparseable_tip_amount_names_the_field() {
    let mock_server = MockServer::start().await;
    let mut body = sample_tip_floor();
    body[0]["landed_tips_95th_percentile"] = json!("lots");
    mount_tip_floor(&mock_server, body).await;

    let result = client_for(&mock_server).get_tip_floors().await;
    assert!(matches!(
        result,
        Err(SearcherError::Parse { ref field, .. }) if field == "landed_tips_95th_percentile"
    ));
}

#[tokio::test]
async fn send_bundle_returns_bundle_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/bundles"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "sendBundle",
            "params": [["tx1", "tx2"]]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "abc123"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bundle_id = client_for(&mock_server)
        .send_bundle(&["tx1".to_string(), "tx2".to_string()])
        .await
        .unwrap();
    assert_eq!(bundle_id, "abc123");
}

#[tokio::test]
async fn tip_accounts_are_stable_across_calls() {
    let mock_server = MockServer::start().await;
    let accounts = json!(["96gYZGLnJYVFmbjzopPSU6QiEV5fGqZNyN9nmNhvrZU5", "HFqU5x63VTqvQss8hp11i4wVV8bD44PvwucfZ2bU7gRe"]);
    mount_rpc_result(&mock_server, "/api/v1/bundles", "getTipAccounts", accounts).await;

    let client = client_for(&mock_server);
    let first = client.get_tip_accounts().await.unwrap();
    let second = client.get_tip_accounts().await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn send_transaction_uses_transactions_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/transactions"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "sendTransaction",
            "params": ["tx"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "sig"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let signature = client_for(&mock_server).send_transaction("tx").await.unwrap();
    assert_eq!(signature, "sig");
}

#[tokio::test]
async fn server_error_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).send_bundle(&["tx".to_string()]).await;
    match result {
        Err(SearcherError::Transport(TransportError::ServerError { status, body })) => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "unavailable");
        },
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn retries_are_opt_in() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = SearcherClient::with_options(
        &mock_server.uri(),
        ClientOptions {
            max_retries: 2,
            ..Default::default()
        },
    )
    .unwrap();

    assert!(client.get_tip_accounts().await.is_err());
}
