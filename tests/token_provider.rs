mod common;

use std::sync::Arc;

use bookmark_service_client::auth::{AadClientFactory, TokenClientProvider};
use bookmark_service_client::bookmarks::BookmarkClient;
use bookmark_service_client::{LogLevel, ServiceError};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn acquires_token_for_application_scope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contoso-tenant/oauth2/v2.0/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("scope=api%3A%2F%2Fbookmarks-api%2F.default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "access_token": "aad-token",
            "expires_in": 3599
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let settings = common::settings(&mock_server.uri(), &mock_server.uri(), &mock_server.uri());
    let provider = TokenClientProvider::new(Arc::new(AadClientFactory::new(settings.identity)));

    let first = provider.acquire("bookmarks-api").await.unwrap();
    let second = provider.acquire("bookmarks-api").await.unwrap();

    assert_eq!(first.application_id(), "bookmarks-api");
    assert!(first.expires_at().is_some());
    assert!(second.expires_at().is_some());
}

#[tokio::test]
async fn rejected_token_request_is_remote_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contoso-tenant/oauth2/v2.0/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "AADSTS7000215: Invalid client secret provided."
        })))
        .mount(&mock_server)
        .await;

    let settings = common::settings(&mock_server.uri(), &mock_server.uri(), &mock_server.uri());
    let provider = TokenClientProvider::new(Arc::new(AadClientFactory::new(settings.identity)));

    match provider.acquire("bookmarks-api").await.unwrap_err() {
        ServiceError::RemoteData { status, payload } => {
            assert_eq!(status, 400);
            assert_eq!(payload["error"], "invalid_client");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn empty_access_token_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contoso-tenant/oauth2/v2.0/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": " ", "expires_in": 60})),
        )
        .mount(&mock_server)
        .await;

    let settings = common::settings(&mock_server.uri(), &mock_server.uri(), &mock_server.uri());
    let provider = TokenClientProvider::new(Arc::new(AadClientFactory::new(settings.identity)));

    let err = provider.acquire("bookmarks-api").await.unwrap_err();
    assert!(matches!(err, ServiceError::Generic(msg) if msg == "Access token was empty"));
}

#[tokio::test]
async fn connect_uses_acquired_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contoso-tenant/oauth2/v2.0/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "aad-token", "expires_in": 3599})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/GetBookmarks"))
        .and(query_param("code", "list-code"))
        .and(header("Authorization", "Bearer aad-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "1", "url": "https://a.test"}])),
        )
        .mount(&mock_server)
        .await;

    let settings = common::settings(&mock_server.uri(), &mock_server.uri(), &mock_server.uri());
    let provider =
        TokenClientProvider::new(Arc::new(AadClientFactory::new(settings.identity.clone())));
    let (reporter, listener) = common::reporter();

    let client = BookmarkClient::connect(&provider, &settings, reporter).await.unwrap();

    assert_eq!(client.list().await.len(), 1);
    assert_eq!(client.list().await.len(), 1);
    assert!(listener.entries().is_empty());
}

#[tokio::test]
async fn connect_failure_is_reported_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contoso-tenant/oauth2/v2.0/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&mock_server)
        .await;

    let settings = common::settings(&mock_server.uri(), &mock_server.uri(), &mock_server.uri());
    let provider =
        TokenClientProvider::new(Arc::new(AadClientFactory::new(settings.identity.clone())));
    let (reporter, listener) = common::reporter();

    let result = BookmarkClient::connect(&provider, &settings, reporter).await;

    assert!(matches!(result, Err(ServiceError::RemoteData { status: 401, .. })));
    let entries = listener.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Error);
}
