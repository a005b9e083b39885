//! Tests for the cache-aware data-access client, against a mock gateway.

use juntas_gateway::client::{ApiClient, ClientError, Resource};
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn queries_are_gated_until_a_token_is_installed() {
    let gateway = MockServer::start().await;
    let client = ApiClient::new(gateway.uri()).unwrap();

    let err = client.query(Resource::Juntas, "/juntas").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));
    assert!(gateway.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn repeated_queries_are_served_from_cache() {
    let gateway = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/juntas"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "j1"}])))
        .expect(1)
        .mount(&gateway)
        .await;

    let client = ApiClient::new(gateway.uri()).unwrap();
    client.set_token("tok").await;

    let first = client.query(Resource::Juntas, "juntas").await.unwrap();
    let second = client.query(Resource::Juntas, "/juntas").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(gateway.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn mutation_invalidates_only_its_resource_tag() {
    let gateway = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/juntas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&gateway)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&gateway)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/juntas"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "j2"})))
        .mount(&gateway)
        .await;

    let client = ApiClient::new(gateway.uri()).unwrap();
    client.set_token("tok").await;

    client.query(Resource::Juntas, "/juntas").await.unwrap();
    client.query(Resource::Users, "/users").await.unwrap();
    assert!(client.cached("/juntas").is_some());
    assert!(client.cached("/users").is_some());

    client
        .mutate(
            Resource::Juntas,
            Method::POST,
            "/juntas",
            &json!({"name": "Junta Sur"}),
        )
        .await
        .unwrap();

    assert!(client.cached("/juntas").is_none());
    assert!(client.cached("/users").is_some());
}

#[tokio::test]
async fn error_envelope_message_is_surfaced() {
    let gateway = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/multas"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Multa not found"})))
        .mount(&gateway)
        .await;

    let client = ApiClient::new(gateway.uri()).unwrap();
    client.set_token("tok").await;

    let err = client.query(Resource::Multas, "/multas").await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Multa not found");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn stale_entries_are_refetched() {
    let gateway = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/acciones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&gateway)
        .await;

    let client = ApiClient::new(gateway.uri()).unwrap().with_max_age(0);
    client.set_token("tok").await;

    client.query(Resource::Acciones, "/acciones").await.unwrap();
    client.query(Resource::Acciones, "/acciones").await.unwrap();
    assert_eq!(gateway.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn clearing_the_token_drops_the_cache() {
    let gateway = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/prestamos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&gateway)
        .await;

    let client = ApiClient::new(gateway.uri()).unwrap();
    client.set_token("tok").await;
    client.query(Resource::Prestamos, "/prestamos").await.unwrap();
    assert!(client.cached("/prestamos").is_some());

    client.clear_token().await;
    assert!(client.cached("/prestamos").is_none());
    assert!(matches!(
        client.query(Resource::Prestamos, "/prestamos").await,
        Err(ClientError::Unauthenticated)
    ));
}
