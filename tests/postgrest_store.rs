use cementcycle_seeder::model::MarketCondition;
use cementcycle_seeder::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn unreachable_store() -> PostgrestStore {
    // bind then release a port so nothing is listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let url = format!("http://127.0.0.1:{}", port);
    PostgrestStore::new(StoreOptions::new(&url, "fake-key")).unwrap()
}

fn store_for(server: &MockServer) -> PostgrestStore {
    PostgrestStore::new(StoreOptions::new(&server.uri(), "fake-key")).unwrap()
}

#[tokio::test]
async fn test_upsert_sends_merge_duplicates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .and(query_param("on_conflict", "id"))
        .and(header("apikey", "fake-key"))
        .and(header("Authorization", "Bearer fake-key"))
        .and(header("Prefer", "resolution=merge-duplicates"))
        .and(body_json(json!({ "id": "u001", "data": { "name": "Rajesh Kumar" } })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    let result = store
        .upsert("users", "u001", json!({ "name": "Rajesh Kumar" }))
        .await;

    assert!(result.is_ok(), "upsert failed: {:?}", result.err());
}

#[tokio::test]
async fn test_append_posts_data_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/price_history"))
        .and(header("Prefer", "return=minimal"))
        .and(body_json(json!({ "data": { "material": "fly_ash" } })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    store
        .append("price_history", json!({ "material": "fly_ash" }))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_and_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/matches"))
        .and(query_param("select", "data"))
        .and(query_param("id", "eq.m001"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "data": { "id": "m001", "total_value": 1280000 } }])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/matches"))
        .and(query_param("select", "id"))
        .and(header("Prefer", "count=exact"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "0-0/1")
                .set_body_json(json!([{ "id": "m001" }])),
        )
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);

    let m001 = store.get("matches", "m001").await.unwrap().unwrap();
    assert_eq!(m001["total_value"], json!(1280000));
    assert_eq!(store.count("matches").await.unwrap(), 1);
}

#[tokio::test]
async fn test_rejected_write_aborts_the_run() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/waste_listings"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/cement_requirements"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "42501",
            "message": "permission denied for table cement_requirements"
        })))
        .mount(&mock_server)
        .await;

    // nothing after the failing step may reach the server
    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut seeder = Seeder::new(
        store_for(&mock_server),
        RunContext::new(SeederConfig::default()),
        FixedSampler {
            multiplier: 1.0,
            condition: MarketCondition::Stable,
        },
    );

    let err = seeder.initialize_all_data().await.unwrap_err();
    match err {
        Error::Write { collection, message } => {
            assert_eq!(collection, "cement_requirements");
            assert!(message.contains("403"), "{}", message);
        }
        other => panic!("expected write error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_count_reads_total_past_row_limit() {
    let mock_server = MockServer::start().await;

    // the server caps the body at max-rows but reports the exact total
    Mock::given(method("GET"))
        .and(path("/rest/v1/price_history"))
        .and(header("Prefer", "count=exact"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Range", "0-0/1200")
                .set_body_json(json!([{ "id": "1" }])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "*/0")
                .set_body_json(json!([])),
        )
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server);
    assert_eq!(store.count("price_history").await.unwrap(), 1200);
    assert_eq!(store.count("users").await.unwrap(), 0);
}

#[tokio::test]
async fn test_count_without_content_range_is_a_store_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let err = store_for(&mock_server).count("users").await.unwrap_err();
    assert!(matches!(err, Error::Store(_)), "{:?}", err);
}

#[tokio::test]
async fn test_failed_read_is_not_reported_as_write() {
    let store = unreachable_store();

    let err = store.get("users", "u001").await.unwrap_err();
    assert!(!err.is_write(), "{:?}", err);
    let err = store.count("users").await.unwrap_err();
    assert!(!err.is_write(), "{:?}", err);

    let err = store.upsert("users", "u001", json!({})).await.unwrap_err();
    assert!(err.is_write(), "{:?}", err);
}
