use eventflow_sync::{SecondaryConfig, SecondaryStore};
use eventflow_types::{User, UserRole};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: format!("User {id}"),
        email: format!("{id}@demo.com"),
        password: "123".to_string(),
        role: UserRole::Viewer,
        active: false,
    }
}

fn store_for(server: &MockServer) -> SecondaryStore {
    SecondaryStore::new(SecondaryConfig {
        api_base_url: server.uri(),
    })
}

#[test]
fn config_default_targets_local_api() {
    assert_eq!(
        SecondaryConfig::default().api_base_url,
        "http://localhost:3001/api"
    );
}

#[tokio::test]
async fn get_collection_parses_array_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user("1"), user("2")])))
        .mount(&server)
        .await;

    let users: Vec<User> = store_for(&server).get_collection("users").await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn get_collection_rejects_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    assert!(store_for(&server).get_collection::<User>("users").await.is_err());
}

#[tokio::test]
async fn get_collection_rejects_non_array_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "nope"})))
        .mount(&server)
        .await;

    assert!(store_for(&server).get_collection::<User>("users").await.is_err());
}

#[tokio::test]
async fn put_collection_sends_full_array() {
    let users = vec![user("1"), user("2")];
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/users"))
        .and(body_json(json!(&users)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    store_for(&server).put_collection("users", &users).await.unwrap();
}

#[tokio::test]
async fn put_record_targets_per_record_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/events/42"))
        .and(body_json(json!({"description": "moved"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    store_for(&server)
        .put_record("events", "42", &json!({"description": "moved"}))
        .await
        .unwrap();
}

#[tokio::test]
async fn put_record_rejects_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/users/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(
        store_for(&server)
            .put_record("users", "42", &json!({"active": false}))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn base_url_trailing_slash_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = SecondaryStore::new(SecondaryConfig {
        api_base_url: format!("{}/", server.uri()),
    });
    let users: Vec<User> = store.get_collection("users").await.unwrap();
    assert!(users.is_empty());
}
