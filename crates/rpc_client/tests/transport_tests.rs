//! Transport-level behavior of the RPC client: fault normalization,
//! parameter round-trips, timeout bounds and configuration idempotence.

use chia_config::{ClientConfig, Service, SslConfig};
use chia_rpc_client::{RpcClient, RpcError};
use reqwest::{Client, Url};
use serde_json::{json, Map, Value};
use std::io::Write;
use std::time::{Duration, Instant};

fn client_for(server_url: &str, timeout: Duration) -> RpcClient {
    let base = Url::parse(&format!("{server_url}/")).expect("server url");
    let http = Client::builder().timeout(timeout).build().expect("client");
    RpcClient::with_client(http, base)
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object literal"),
    }
}

#[tokio::test]
async fn params_reach_the_endpoint_as_sent() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/create_signed_transaction")
        .match_body(mockito::Matcher::Json(json!({
            "additions": [{"amount": 1000, "puzzle_hash": "0xpp"}],
            "fee": 50,
            "coin_announcements": null,
            "nested": {"a": [1, 2, 3], "b": true},
        })))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create();

    let client = client_for(&server.url(), Duration::from_secs(5));
    let params = object(json!({
        "additions": [{"amount": 1000, "puzzle_hash": "0xpp"}],
        "fee": 50,
        "coin_announcements": null,
        "nested": {"a": [1, 2, 3], "b": true},
    }));
    client
        .call("create_signed_transaction", params)
        .await
        .expect("round trip");
}

#[tokio::test]
async fn success_payload_is_the_exact_remote_json() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/get_blockchain_state")
        .with_status(200)
        .with_body(
            r#"{"success": true, "blockchain_state": {"peak": {"height": 7}, "difficulty": 9984}}"#,
        )
        .create();

    let client = client_for(&server.url(), Duration::from_secs(5));
    let payload = client
        .call_empty("get_blockchain_state")
        .await
        .expect("payload");
    assert_eq!(
        Value::Object(payload),
        json!({
            "success": true,
            "blockchain_state": {"peak": {"height": 7}, "difficulty": 9984},
        })
    );
}

#[tokio::test]
async fn remote_rejection_maps_to_the_remote_kind() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/send_transaction")
        .with_status(200)
        .with_body(r#"{"success": false, "error": "insufficient funds"}"#)
        .create();

    let client = client_for(&server.url(), Duration::from_secs(5));
    let err = client.call_empty("send_transaction").await.unwrap_err();
    match err {
        RpcError::Remote { message, payload } => {
            assert_eq!(message, "insufficient funds");
            let payload = payload.expect("payload");
            assert_eq!(payload.get("success"), Some(&json!(false)));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_the_decode_kind() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/get_blockchain_state")
        .with_status(200)
        .with_body("<html>502 Bad Gateway</html>")
        .create();

    let client = client_for(&server.url(), Duration::from_secs(5));
    let err = client.call_empty("get_blockchain_state").await.unwrap_err();
    assert!(matches!(err, RpcError::Decode { .. }));
}

#[tokio::test]
async fn refused_connection_maps_to_the_transport_kind() {
    // Bind then drop to get a port with nothing listening on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let client = client_for(&format!("http://127.0.0.1:{port}"), Duration::from_secs(2));
    let err = client.call_empty("get_connections").await.unwrap_err();
    assert!(matches!(err, RpcError::Transport(_)));
}

#[tokio::test]
async fn unresponsive_endpoint_times_out_within_the_configured_bound() {
    // Accept connections but never answer them.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let server = tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            if let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        }
    });

    let timeout = Duration::from_millis(250);
    let client = client_for(&format!("http://{addr}"), timeout);

    let started = Instant::now();
    let err = client.call_empty("get_blockchain_state").await.unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, RpcError::Transport(_)));
    assert!(
        elapsed >= timeout && elapsed < timeout + Duration::from_secs(2),
        "timed out after {elapsed:?} with a {timeout:?} limit"
    );
    server.abort();
}

#[tokio::test]
async fn identical_configs_give_identical_results() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/get_network_info")
        .with_status(200)
        .with_body(r#"{"success": true, "network_name": "mainnet", "network_prefix": "xch"}"#)
        .create();

    let config = ClientConfig::for_service(Service::FullNode)
        .without_ssl()
        .with_timeout(Duration::from_secs(5));

    // Two clients built from the same config, pointed at the same mock.
    let first = client_for(&server.url(), config.timeout);
    let second = client_for(&server.url(), config.timeout);

    let a = first.call_empty("get_network_info").await.expect("first");
    let b = second.call_empty("get_network_info").await.expect("second");
    assert_eq!(a, b);
}

#[test]
fn missing_certificate_files_fail_construction() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ClientConfig::for_service(Service::Wallet).with_ssl(SslConfig::new(
        dir.path().join("absent.crt"),
        dir.path().join("absent.key"),
    ));

    let err = RpcClient::new(config).unwrap_err();
    assert!(matches!(err, RpcError::Config { .. }));
}

#[test]
fn garbage_certificate_material_fails_construction() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cert_path = dir.path().join("client.crt");
    let key_path = dir.path().join("client.key");
    let mut cert = std::fs::File::create(&cert_path).expect("cert file");
    cert.write_all(b"not a certificate").expect("write");
    let mut key = std::fs::File::create(&key_path).expect("key file");
    key.write_all(b"not a key").expect("write");

    let config = ClientConfig::for_service(Service::Wallet)
        .with_ssl(SslConfig::new(cert_path, key_path));

    let err = RpcClient::new(config).unwrap_err();
    assert!(matches!(err, RpcError::Config { .. }));
}
