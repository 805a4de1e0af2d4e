//! Integration tests for AptlyClient.
//!
//! Uses wiremock for the Aptly API. Covers request shapes, both auth modes,
//! and the "already exists" handling on repo creation.

use std::net::TcpListener;

use bytes::Bytes;
use kodegen_aptly_publish::error::AptlyOperation;
use kodegen_aptly_publish::{AptlyClient, AptlyError, PublishCredentials, Secret};
use kodegen_aptly_publish::config::AptlySettings;
use reqwest::StatusCode;
use url::Url;
use wiremock::matchers::{
    basic_auth, body_json, body_string_contains, header, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base: &str, credentials: PublishCredentials) -> AptlyClient {
    let settings = AptlySettings {
        url: Url::parse(&format!("{base}/api")).expect("valid base url"),
        credentials,
    };
    AptlyClient::new(&settings).expect("failed to create client")
}

fn client_with(mock_server: &MockServer, credentials: PublishCredentials) -> AptlyClient {
    client_for(&mock_server.uri(), credentials)
}

fn basic_credentials() -> PublishCredentials {
    PublishCredentials::Basic {
        username: "deploy".to_string(),
        password: Secret::new("s3cret"),
    }
}

fn basic_client(mock_server: &MockServer) -> AptlyClient {
    client_with(mock_server, basic_credentials())
}

/// Address of a local port with nothing listening on it
fn closed_port_uri() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn test_create_repo_sends_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/repos"))
        .and(basic_auth("deploy", "s3cret"))
        .and(body_json(serde_json::json!({ "Name": "pkger" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "Name": "pkger",
            "Comment": "",
            "DefaultDistribution": "",
            "DefaultComponent": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server);
    client
        .ensure_repo_exists("pkger")
        .await
        .expect("repo created");
}

#[tokio::test]
async fn test_create_repo_already_exists_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/repos"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!([{
            "error": "local repo with name pkger already exists",
            "meta": "Operation aborted"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server);
    client
        .ensure_repo_exists("pkger")
        .await
        .expect("400 is treated as already existing");
}

#[tokio::test]
async fn test_create_repo_other_errors_propagate() {
    for status in [401u16, 404, 409, 500] {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/repos"))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .mount(&mock_server)
            .await;

        let client = basic_client(&mock_server);
        let err = client
            .ensure_repo_exists("pkger")
            .await
            .expect_err("non-400 errors propagate");

        match err {
            AptlyError::Status {
                operation,
                status: got,
                body,
            } => {
                assert_eq!(operation, AptlyOperation::CreateRepo);
                assert_eq!(got.as_u16(), status);
                assert_eq!(body, "nope");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_create_repo_network_failure_propagates() {
    let client = client_for(&closed_port_uri(), basic_credentials());

    let err = client
        .ensure_repo_exists("pkger")
        .await
        .expect_err("connection refused");
    assert!(matches!(
        err,
        AptlyError::Transport {
            operation: AptlyOperation::CreateRepo,
            ..
        }
    ));
}

#[tokio::test]
async fn test_upload_file_multipart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/files/incoming"))
        .and(header("authorization", "Bearer abc"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"app_1.0_amd64.deb\""))
        .and(body_string_contains("debian-binary"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!(["incoming/app_1.0_amd64.deb"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with(
        &mock_server,
        PublishCredentials::Token {
            token: Secret::new("Bearer abc"),
        },
    );
    client
        .upload_file(
            "incoming",
            Bytes::from_static(b"!<arch>\ndebian-binary"),
            "app_1.0_amd64.deb",
        )
        .await
        .expect("upload succeeds");
}

#[tokio::test]
async fn test_upload_file_400_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/files/incoming"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server);
    let err = client
        .upload_file("incoming", Bytes::from_static(b"x"), "x.deb")
        .await
        .expect_err("only repo creation swallows 400");
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert!(!err.is_already_exists());
}

#[tokio::test]
async fn test_register_file_force_replace() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/repos/kodegen/file/incoming/app_1.0_amd64.deb"))
        .and(query_param("forceReplace", "1"))
        .and(basic_auth("deploy", "s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "FailedFiles": [],
            "Report": { "Warnings": [], "Added": ["app_1.0_amd64 added"], "Removed": [] }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server);
    client
        .register_file("kodegen", "incoming", "app_1.0_amd64.deb")
        .await
        .expect("register succeeds");
}

#[tokio::test]
async fn test_republish_distribution() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/publish/:./jammy"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Distribution": "jammy",
            "Prefix": "."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with(
        &mock_server,
        PublishCredentials::Token {
            token: Secret::new("Bearer abc"),
        },
    );
    client.republish("jammy").await.expect("republish succeeds");
}

#[tokio::test]
async fn test_republish_failure_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/publish/:./jammy"))
        .respond_with(ResponseTemplate::new(500).set_body_string("unable to update"))
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server);
    let err = client.republish("jammy").await.expect_err("500 propagates");
    assert!(err.to_string().contains("update published repo"));
    assert!(err.to_string().contains("unable to update"));
}

#[test]
fn test_invalid_token_header_rejected() {
    let settings = AptlySettings {
        url: Url::parse("https://aptly.example.com/api").expect("valid url"),
        credentials: PublishCredentials::Token {
            token: Secret::new("line\nbreak"),
        },
    };
    assert!(matches!(
        AptlyClient::new(&settings),
        Err(AptlyError::Client { .. })
    ));
}
