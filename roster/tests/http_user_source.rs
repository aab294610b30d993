//! Tests for the reqwest user source against a mock HTTP server.
//!
//! These tests verify the request shape, decoding, and error mapping without
//! touching the public collection endpoint.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use user_roster::domain::ports::{UserSource, UserSourceError};
use user_roster::domain::{UserDatasource, UserId};
use user_roster::outbound::jsonplaceholder::HttpUserSource;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERS_JSON: &str = r#"[
    {
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    },
    {
        "id": 2,
        "name": "Ervin Howell",
        "username": "Antonette",
        "email": "Shanna@melissa.tv",
        "address": {
            "street": "Victor Plains",
            "suite": "Suite 879",
            "city": "Wisokyburgh",
            "zipcode": "90566-7771",
            "geo": { "lat": "-43.9509", "lng": "-34.4618" }
        },
        "phone": "010-692-6593 x09125",
        "website": "anastasia.net",
        "company": {
            "name": "Deckow-Crist",
            "catchPhrase": "Proactive didactic contingency",
            "bs": "synergize scalable supply-chains"
        }
    }
]"#;

fn users_endpoint(server: &MockServer) -> Url {
    Url::parse(&format!("{}/users", server.uri())).expect("mock server url")
}

async fn mount_users(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("accept", "application/json"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetches_users_with_single_get() {
    let server = MockServer::start().await;
    mount_users(
        &server,
        ResponseTemplate::new(200).set_body_raw(USERS_JSON, "application/json"),
    )
    .await;
    let source = HttpUserSource::new(users_endpoint(&server)).expect("client");

    let users = source.fetch_users().await.expect("fetch should succeed");

    let names: Vec<&str> = users.iter().map(|user| user.name.as_str()).collect();
    assert_eq!(names, vec!["Leanne Graham", "Ervin Howell"]);
    assert_eq!(users[1].company.catch_phrase, "Proactive didactic contingency");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none(), "no query parameters");
}

#[tokio::test]
async fn maps_server_errors_to_status() {
    let server = MockServer::start().await;
    mount_users(
        &server,
        ResponseTemplate::new(500).set_body_string("upstream exploded"),
    )
    .await;
    let source = HttpUserSource::new(users_endpoint(&server)).expect("client");

    let error = source.fetch_users().await.expect_err("500 should fail");

    assert_eq!(error, UserSourceError::status(500_u16, "upstream exploded"));
}

#[tokio::test]
async fn maps_invalid_json_to_decode() {
    let server = MockServer::start().await;
    mount_users(
        &server,
        ResponseTemplate::new(200).set_body_raw("{\"not\": \"a list\"}", "application/json"),
    )
    .await;
    let source = HttpUserSource::new(users_endpoint(&server)).expect("client");

    let error = source.fetch_users().await.expect_err("object body should fail");

    assert!(matches!(error, UserSourceError::Decode { .. }), "{error:?}");
}

#[tokio::test]
async fn maps_slow_responses_to_timeout_when_configured() {
    let server = MockServer::start().await;
    mount_users(
        &server,
        ResponseTemplate::new(200)
            .set_body_raw(USERS_JSON, "application/json")
            .set_delay(Duration::from_secs(2)),
    )
    .await;
    let source = HttpUserSource::with_timeout(
        users_endpoint(&server),
        Some(Duration::from_millis(100)),
    )
    .expect("client");

    let error = source.fetch_users().await.expect_err("request should time out");

    assert!(matches!(error, UserSourceError::Timeout { .. }), "{error:?}");
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_transport() {
    // Reserve a free port, then close it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/users")).expect("endpoint url");
    let source = HttpUserSource::new(endpoint).expect("client");

    let error = source.fetch_users().await.expect_err("closed port should fail");

    assert!(matches!(error, UserSourceError::Transport { .. }), "{error:?}");
}

#[tokio::test]
async fn datasource_over_http_filters_deleted_users() {
    let server = MockServer::start().await;
    mount_users(
        &server,
        ResponseTemplate::new(200).set_body_raw(USERS_JSON, "application/json"),
    )
    .await;
    let source = HttpUserSource::new(users_endpoint(&server)).expect("client");
    let datasource = UserDatasource::new(Arc::new(source));
    datasource.delete_user(UserId::new(2));

    datasource.load().await;

    let snapshot = datasource.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].username, "Bret");
}

#[tokio::test]
async fn datasource_over_http_publishes_empty_list_on_failure() {
    let server = MockServer::start().await;
    mount_users(&server, ResponseTemplate::new(404)).await;
    let datasource = UserDatasource::new(Arc::new(
        HttpUserSource::new(users_endpoint(&server)).expect("client"),
    ));

    datasource.load().await;

    assert!(datasource.snapshot().is_empty());
}
