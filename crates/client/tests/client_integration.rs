//! End-to-end behavior of the authenticated client against a mock backend,
//! with the token-refresh lifecycle exercised through real HTTP exchanges.

use std::sync::Arc;
use std::time::Duration;

use immob_client::models::{Page, Property};
use immob_client::session::keys;
use immob_client::{ApiClient, ApiError, AuthService, CredentialStore, MemoryStore};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, store: &MemoryStore) -> Arc<ApiClient> {
    Arc::new(
        ApiClient::builder()
            .base_url(server.uri())
            .store(Arc::new(store.clone()))
            .build()
            .unwrap(),
    )
}

async fn seed_tokens(store: &MemoryStore, access: &str, refresh: &str) {
    store.set(keys::ACCESS_TOKEN, access).await.unwrap();
    store.set(keys::REFRESH_TOKEN, refresh).await.unwrap();
}

fn property_page() -> serde_json::Value {
    json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [{
            "id": "b9f6c6de-8f1a-4c2e-b8a4-1f4f2a6d9e01",
            "title": "Appartement centre-ville",
            "status": "for_rent",
            "price": "350000.00",
            "area": "85.00",
        }],
    })
}

#[tokio::test]
async fn valid_token_request_succeeds_without_refresh() {
    let server = MockServer::start().await;
    let store = MemoryStore::new();
    seed_tokens(&store, "t1", "r1").await;

    Mock::given(method("GET"))
        .and(path("/api/properties/properties/"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(property_page()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let page: Page<Property> =
        client(&server, &store).get("/api/properties/properties/", None).await.unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].title, "Appartement centre-ville");
}

#[tokio::test]
async fn expired_token_is_refreshed_and_request_replayed_once() {
    let server = MockServer::start().await;
    let store = MemoryStore::new();
    seed_tokens(&store, "t1", "r1").await;

    Mock::given(method("GET"))
        .and(path("/api/properties/properties/"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Token is expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .and(body_json(json!({"refresh": "r1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "t2"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/properties/properties/"))
        .and(header("authorization", "Bearer t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(property_page()))
        .expect(1)
        .mount(&server)
        .await;

    let page: Page<Property> =
        client(&server, &store).get("/api/properties/properties/", None).await.unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(store.access_token().await.unwrap().as_deref(), Some("t2"));
    // the refresh token was not rotated, so the original one survives
    assert_eq!(store.refresh_token().await.unwrap().as_deref(), Some("r1"));
}

#[tokio::test]
async fn rotated_refresh_token_is_persisted() {
    let server = MockServer::start().await;
    let store = MemoryStore::new();
    seed_tokens(&store, "t1", "r1").await;

    Mock::given(method("GET"))
        .and(path("/api/users/profile/"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": "t2", "refresh": "r2"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users/profile/"))
        .and(header("authorization", "Bearer t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "email": "a@b.com", "username": "ab",
        })))
        .mount(&server)
        .await;

    let auth = AuthService::new(client(&server, &store));
    auth.profile().await.unwrap();

    assert_eq!(store.access_token().await.unwrap().as_deref(), Some("t2"));
    assert_eq!(store.refresh_token().await.unwrap().as_deref(), Some("r2"));
}

#[tokio::test]
async fn second_unauthorized_response_is_returned_without_another_refresh() {
    let server = MockServer::start().await;
    let store = MemoryStore::new();
    seed_tokens(&store, "t1", "r1").await;

    Mock::given(method("GET"))
        .and(path("/api/properties/properties/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "still expired"})))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "t2"})))
        .expect(1)
        .mount(&server)
        .await;

    let result: Result<Page<Property>, _> =
        client(&server, &store).get("/api/properties/properties/", None).await;

    match result {
        Err(ApiError::Auth(msg)) => assert_eq!(msg, "still expired"),
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_refresh_clears_the_whole_session() {
    let server = MockServer::start().await;
    let store = MemoryStore::new();
    seed_tokens(&store, "t1", "r1").await;
    store.set(keys::USER, r#"{"id":1,"email":"a@b.com","username":"ab"}"#).await.unwrap();

    Mock::given(method("GET"))
        .and(path("/api/properties/properties/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Token is blacklisted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result: Result<Page<Property>, _> =
        client(&server, &store).get("/api/properties/properties/", None).await;

    match result {
        Err(ApiError::Auth(msg)) => assert!(msg.contains("Token is blacklisted")),
        other => panic!("expected auth error, got {other:?}"),
    }
    for key in keys::ALL {
        assert!(store.get(key).await.unwrap().is_none(), "{key} should be cleared");
    }
}

#[tokio::test]
async fn unauthorized_without_refresh_token_propagates_directly() {
    let server = MockServer::start().await;
    let store = MemoryStore::new();

    Mock::given(method("GET"))
        .and(path("/api/users/profile/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Authentication credentials were not provided."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result: Result<serde_json::Value, _> =
        client(&server, &store).get("/api/users/profile/", None).await;

    assert!(matches!(result, Err(ApiError::Auth(_))));
}

#[tokio::test]
async fn login_persists_the_token_pair_and_user() {
    let server = MockServer::start().await;
    let store = MemoryStore::new();

    Mock::given(method("POST"))
        .and(path("/api/users/login/"))
        .and(body_json(json!({"username_or_email": "jdoe", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "t1",
            "refresh": "r1",
            "user": {"id": 9, "email": "jdoe@immob.cm", "username": "jdoe"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthService::new(client(&server, &store));
    let response = auth.login("jdoe", "secret").await.unwrap();

    assert_eq!(response.user.id, 9);
    assert_eq!(store.access_token().await.unwrap().as_deref(), Some("t1"));
    assert_eq!(store.refresh_token().await.unwrap().as_deref(), Some("r1"));

    let session = store.session().await.unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.username.as_str()), Some("jdoe"));
}

#[tokio::test]
async fn logout_clears_the_session_even_when_the_server_fails() {
    let server = MockServer::start().await;
    let store = MemoryStore::new();
    seed_tokens(&store, "t1", "r1").await;

    Mock::given(method("POST"))
        .and(path("/api/users/logout/"))
        .and(body_json(json!({"refresh_token": "r1"})))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthService::new(client(&server, &store));
    auth.logout().await.unwrap();

    for key in keys::ALL {
        assert!(store.get(key).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn validation_errors_carry_the_field_body() {
    let server = MockServer::start().await;
    let store = MemoryStore::new();

    Mock::given(method("POST"))
        .and(path("/api/users/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"email": ["Cet email est déjà utilisé."]})),
        )
        .mount(&server)
        .await;

    let result: Result<serde_json::Value, _> = client(&server, &store)
        .post("/api/users/", &json!({"email": "a@b.com"}))
        .await;

    match result {
        Err(ApiError::Validation { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body["email"][0], "Cet email est déjà utilisé.");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn hung_response_surfaces_as_a_timeout() {
    let server = MockServer::start().await;
    let store = MemoryStore::new();
    seed_tokens(&store, "t1", "r1").await;

    Mock::given(method("GET"))
        .and(path("/api/properties/properties/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(property_page())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let api = ApiClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(200))
        .store(Arc::new(store.clone()))
        .build()
        .unwrap();

    let result: Result<Page<Property>, _> = api.get("/api/properties/properties/", None).await;

    match result {
        Err(ApiError::Timeout(limit)) => assert_eq!(limit, Duration::from_millis(200)),
        other => panic!("expected timeout, got {other:?}"),
    }
    // a hung connection is a transport failure; the session is untouched
    assert_eq!(store.access_token().await.unwrap().as_deref(), Some("t1"));
    assert_eq!(store.refresh_token().await.unwrap().as_deref(), Some("r1"));
}

#[tokio::test]
async fn network_failure_does_not_trigger_a_refresh() {
    // a bare (non-pooled) server actually closes its listener on drop
    let server = MockServer::builder().start().await;
    let store = MemoryStore::new();
    seed_tokens(&store, "t1", "r1").await;
    let api = client(&server, &store);

    // shut the server down so the connection is refused
    drop(server);

    let result: Result<serde_json::Value, _> =
        api.get("/api/properties/properties/", None).await;

    assert!(matches!(result, Err(ApiError::Network(_))));
    // the session survives transport failures untouched
    assert_eq!(store.access_token().await.unwrap().as_deref(), Some("t1"));
    assert_eq!(store.refresh_token().await.unwrap().as_deref(), Some("r1"));
}
