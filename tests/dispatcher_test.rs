//! Dispatcher tests against a mock Quail server.
//!
//! Cover the header contract, credential precedence, envelope decoding and
//! the asymmetric error handling of the JSON and form-upload paths.

use mockito::{Matcher, Server};
use quail_client::config::ClientConfig;
use quail_client::sdk::{ChainCredentials, Dispatcher, EnvCredentials, StoreCredentials};
use quail_client::Error;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_for(server: &Server) -> ClientConfig {
    ClientConfig::new().with_apibase(server.url())
}

fn store_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_success_returns_data_unchanged() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lists/5")
        .match_header("content-type", "application/json")
        .match_body("")
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"id": 5, "title": "x"}}"#)
        .expect(1)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server)).unwrap();
    let data = dispatcher
        .send::<Value>("/lists/5", Method::GET, None)
        .await
        .unwrap();

    assert_eq!(data, json!({"id": 5, "title": "x"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_data_is_null() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/apikeys/3")
        .with_body(r#"{"message": "deleted"}"#)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server)).unwrap();
    let data = dispatcher
        .send::<Value>("/apikeys/3", Method::DELETE, None)
        .await
        .unwrap();

    assert_eq!(data, Value::Null);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_truthy_code_is_api_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lists/5")
        .with_body(r#"{"code": 404, "msg": "not found", "data": null}"#)
        .expect(1)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server)).unwrap();
    let err = dispatcher
        .send::<Value>("/lists/5", Method::GET, None)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("404 | not found | GET {}/lists/5", server.url())
    );
    match err {
        Error::Api {
            code,
            message,
            method,
            url,
        } => {
            assert_eq!(code, "404");
            assert_eq!(message, "not found");
            assert_eq!(method, "GET");
            assert_eq!(url, format!("{}/lists/5", server.url()));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_error_without_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/apikeys/9")
        .with_body(r#"{"code": 500}"#)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server)).unwrap();
    let err = dispatcher
        .send::<Value>("/apikeys/9", Method::DELETE, None)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("500 | undefined | DELETE {}/apikeys/9", server.url())
    );
}

#[tokio::test]
async fn test_http_status_is_ignored() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/me")
        .with_status(500)
        .with_body(r#"{"data": {"id": 1}}"#)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server)).unwrap();
    let data = dispatcher
        .send::<Value>("/users/me", Method::GET, None)
        .await
        .unwrap();
    assert_eq!(data, json!({"id": 1}));
}

#[tokio::test]
async fn test_non_json_body_is_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/me")
        .with_body("<html>bad gateway</html>")
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server)).unwrap();
    let err = dispatcher
        .send::<Value>("/users/me", Method::GET, None)
        .await
        .unwrap_err();

    match err {
        Error::Http(e) => assert!(e.is_decode()),
        other => panic!("Expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_body_is_serialized_as_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/apikeys")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "ci"})))
        .with_body(r#"{"data": {"id": 9}}"#)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server)).unwrap();
    let data = dispatcher
        .send("/apikeys", Method::POST, Some(&json!({"name": "ci"})))
        .await
        .unwrap();

    assert_eq!(data, json!({"id": 9}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_headers_without_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/explore/trending/posts")
        .match_header("authorization", Matcher::Missing)
        .match_header("x-quail-key", Matcher::Missing)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server)).unwrap();
    dispatcher
        .send::<Value>("/explore/trending/posts", Method::GET, None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_key_without_bearer() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/me")
        .match_header("authorization", Matcher::Missing)
        .match_header("x-quail-key", "K1")
        .with_body(r#"{"data": {}}"#)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server).with_apikey("K1")).unwrap();
    dispatcher
        .send::<Value>("/users/me", Method::GET, None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_ambient_token_and_api_key() {
    let var = "QUAIL_TEST_DISPATCH_AMBIENT";
    std::env::set_var(var, "T1");
    let dir = tempfile::tempdir().unwrap();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer T1")
        .match_header("x-quail-key", "K1")
        .with_body(r#"{"data": {"id": 1}}"#)
        .create_async()
        .await;

    let credentials = ChainCredentials::new()
        .with(StoreCredentials::new(dir.path().join("storage.json")))
        .with(EnvCredentials::new(var));
    let dispatcher =
        Dispatcher::with_credentials(config_for(&server).with_apikey("K1"), credentials).unwrap();
    dispatcher
        .send::<Value>("/users/me", Method::GET, None)
        .await
        .unwrap();

    mock.assert_async().await;
    std::env::remove_var(var);
}

#[tokio::test]
async fn test_stored_token_beats_ambient() {
    let var = "QUAIL_TEST_DISPATCH_STORED";
    std::env::set_var(var, "ambient");
    let store = store_with(r#"{"auth": "{\"token\": \"stored\"}"}"#);

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer stored")
        .with_body(r#"{"data": {}}"#)
        .create_async()
        .await;

    let credentials = ChainCredentials::new()
        .with(StoreCredentials::new(store.path()))
        .with(EnvCredentials::new(var));
    let dispatcher = Dispatcher::with_credentials(config_for(&server), credentials).unwrap();
    dispatcher
        .send::<Value>("/users/me", Method::GET, None)
        .await
        .unwrap();

    mock.assert_async().await;
    std::env::remove_var(var);
}

#[tokio::test]
async fn test_static_token_beats_all_providers() {
    let var = "QUAIL_TEST_DISPATCH_STATIC";
    std::env::set_var(var, "ambient");
    let store = store_with(r#"{"auth": "{\"access_token\": \"stored\"}"}"#);

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer static")
        .with_body(r#"{"data": {}}"#)
        .create_async()
        .await;

    let credentials = ChainCredentials::new()
        .with(StoreCredentials::new(store.path()))
        .with(EnvCredentials::new(var));
    let config = config_for(&server).with_access_token("static");
    let dispatcher = Dispatcher::with_credentials(config, credentials).unwrap();
    dispatcher
        .send::<Value>("/users/me", Method::GET, None)
        .await
        .unwrap();

    mock.assert_async().await;
    std::env::remove_var(var);
}

#[tokio::test]
async fn test_token_resolved_on_every_call() {
    let store = store_with(r#"{"auth": "{\"token\": \"first\"}"}"#);

    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer first")
        .with_body(r#"{"data": 1}"#)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer second")
        .with_body(r#"{"data": 2}"#)
        .expect(1)
        .create_async()
        .await;

    let dispatcher =
        Dispatcher::with_credentials(config_for(&server), StoreCredentials::new(store.path()))
            .unwrap();
    assert_eq!(
        dispatcher.send::<Value>("/users/me", Method::GET, None).await.unwrap(),
        json!(1)
    );

    std::fs::write(store.path(), r#"{"auth": "{\"token\": \"second\"}"}"#).unwrap();
    assert_eq!(
        dispatcher.send::<Value>("/users/me", Method::GET, None).await.unwrap(),
        json!(2)
    );

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/explore/trending/lists")
        .with_body(r#"{"data": ["a"]}"#)
        .expect(4)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server)).unwrap();
    let calls = (0..4).map(|_| {
        let d = dispatcher.clone();
        async move {
            d.send::<Value>("/explore/trending/lists", Method::GET, None)
                .await
        }
    });

    let results = futures::future::join_all(calls).await;
    assert!(results.iter().all(|r| matches!(r, Ok(v) if v == &json!(["a"]))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_path_rejected_without_request() {
    let dispatcher = Dispatcher::new(ClientConfig::default()).unwrap();
    let err = dispatcher
        .send::<Value>("", Method::GET, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPath(_)));
}

#[tokio::test]
async fn test_send_form_returns_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/attachments")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_header("authorization", "Bearer T9")
        .match_header("x-quail-key", "K1")
        .with_body(r#"{"data": {"url": "https://cdn.quail.ink/a.png"}}"#)
        .expect(1)
        .create_async()
        .await;

    let config = config_for(&server)
        .with_apikey("K1")
        .with_access_token("T9");
    let dispatcher = Dispatcher::new(config).unwrap();
    let form = Form::new().part("file", Part::bytes(b"png".to_vec()).file_name("a.png"));
    let data = dispatcher.send_form("/attachments", form).await.unwrap();

    assert_eq!(data, json!({"url": "https://cdn.quail.ink/a.png"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_form_does_not_raise_on_code() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/attachments")
        .with_body(r#"{"code": 413, "message": "file too large"}"#)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server)).unwrap();
    let form = Form::new().text("note", "x");
    let data = dispatcher.send_form("/attachments", form).await.unwrap();

    assert_eq!(data, json!({"code": 413, "message": "file too large"}));
}

#[tokio::test]
async fn test_debug_mode_does_not_change_result() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("PUT", "/lists/1/pinned")
        .with_body(r#"{"data": {"ids": [2, 1]}}"#)
        .create_async()
        .await;

    let dispatcher = Dispatcher::new(config_for(&server).with_debug(true)).unwrap();
    let data = dispatcher
        .send("/lists/1/pinned", Method::PUT, Some(&json!({"ids": [2, 1]})))
        .await
        .unwrap();
    assert_eq!(data, json!({"ids": [2, 1]}));
}
