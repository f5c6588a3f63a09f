//! API client tests against a real HTTP server using wiremock.
//!
//! These exercise the reqwest adapter end to end: URL construction,
//! query parameters, JSON bodies, and error mapping.

use std::sync::Arc;

use nudge::adapters::ReqwestHttpClient;
use nudge::api::ApiClient;
use nudge::error::ApiError;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), Arc::new(ReqwestHttpClient::new()))
}

#[tokio::test]
async fn test_health_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "api_key_configured": true,
            "database_accessible": true,
            "stale_threshold_hours": 48
        })))
        .mount(&server)
        .await;

    let report = client_for(&server).health().await.unwrap();
    assert!(report.api_key_configured);
    assert!(report.database_accessible);
    assert_eq!(report.stale_threshold_hours, 48);
}

#[tokio::test]
async fn test_health_against_unreachable_server_is_transport_error() {
    // Nothing listens on this port
    let client = ApiClient::new("http://127.0.0.1:59999", Arc::new(ReqwestHttpClient::new()));
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_fetch_lists_sends_clamped_threshold_to_both_endpoints() {
    for (input, expected) in [(0i64, "0"), (48, "48"), (720, "720"), (999, "720"), (-1, "0")] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/conversations"))
            .and(query_param("threshold", expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/need-to-reply"))
            .and(query_param("threshold", expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let (awaiting, need) = client_for(&server).fetch_lists(input).await.unwrap();
        assert!(awaiting.is_empty());
        assert!(need.is_empty());
        // Drop verifies the .expect(1) counters
    }
}

#[tokio::test]
async fn test_fetch_lists_parses_conversations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/conversations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "chat_id": 1,
            "contact": "+15551234567",
            "contact_name": "Alex",
            "last_message": "see you then",
            "hours_ago": 100.5,
            "is_group": false,
            "context_count": 12
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/need-to-reply"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "chat_id": 2,
            "contact": "chat83921",
            "last_message": "dinner friday?",
            "hours_ago": 30.0,
            "is_group": true,
            "context_count": 4
        }])))
        .mount(&server)
        .await;

    let (awaiting, need) = client_for(&server).fetch_lists(48).await.unwrap();

    assert_eq!(awaiting.len(), 1);
    assert_eq!(awaiting[0].display_name(), "Alex");
    assert_eq!(awaiting[0].hours_ago, 100.5);

    assert_eq!(need.len(), 1);
    assert_eq!(need[0].display_name(), "chat83921");
    assert!(need[0].is_group);
    assert_eq!(need[0].context_count, 4);
}

#[tokio::test]
async fn test_fetch_lists_error_detail_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/conversations"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "iMessage database not accessible"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/need-to-reply"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_lists(48).await.unwrap_err();
    match err {
        ApiError::Server { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "iMessage database not accessible");
        }
        other => panic!("expected Server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_lists_need_to_reply_failure_is_a_parse_error() {
    // The need-to-reply status is not checked before parsing, so a server
    // error from that endpoint comes back as a malformed-response error.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/conversations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/need-to-reply"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"detail": "database locked"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_lists(48).await.unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[tokio::test]
async fn test_generate_draft_posts_target() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-draft"))
        .and(body_json(serde_json::json!({
            "chat_id": 7,
            "contact": "+15551234567"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "draft": "Hey! Sorry for the slow reply.",
            "context_messages": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .generate_draft(7, "+15551234567")
        .await
        .unwrap();
    assert_eq!(resp.draft, "Hey! Sorry for the slow reply.");
    assert_eq!(resp.context_messages, 5);
}

#[tokio::test]
async fn test_generate_draft_error_status_maps_to_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-draft"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"detail": "Conversation not found"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).generate_draft(99, "+1555").await.unwrap_err();
    assert_eq!(err.to_string(), "Conversation not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_send_message_in_band_failure_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "error": "rate limited"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message("+15551234567", "hello")
        .await
        .unwrap_err();
    match err {
        ApiError::Rejected(message) => assert_eq!(message, "rate limited"),
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_send_message_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-message"))
        .and(body_json(serde_json::json!({
            "recipient": "+15551234567",
            "message": "on my way"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .send_message("+15551234567", "on my way")
        .await
        .unwrap();
    assert!(resp.success);
}
