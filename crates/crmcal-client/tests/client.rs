//! Integration tests for `CalendarClient` using wiremock HTTP mocks.

use chrono::NaiveDate;
use crmcal_client::{CalendarClient, ClientError};
use crmcal_core::{DateRange, EventType};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn march() -> DateRange {
    DateRange::month_of(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
}

fn test_client(base_url: &str, token: Option<&str>) -> CalendarClient {
    CalendarClient::new(base_url, token, 5).expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_events_returns_parsed_events() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "data": [
            {
                "id": "evt-1",
                "date": "2025-03-14T10:00:00",
                "type": "meeting",
                "title": "Brand sync",
                "brand": { "id": "b-1", "name": "Northwind" }
            },
            {
                "id": "evt-2",
                "date": "2025-03-18T12:00:00",
                "type": "payment_due",
                "title": "Installment",
                "metadata": { "amount": "2250.00" },
                "deal": { "id": "d-1" }
            }
        ],
        "meta": { "request_id": "req-1", "timestamp": "2025-03-01T00:00:00Z" }
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/calendar/events"))
        .and(query_param("start", "2025-03-01"))
        .and(query_param("end", "2025-03-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let events = client.fetch_events(march()).await.expect("should parse events");

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type, EventType::Meeting);
    assert_eq!(events[1].link().as_deref(), Some("/deals/d-1"));
}

#[tokio::test]
async fn fetch_events_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/calendar/events"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": true, "data": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some("secret-token"));
    let events = client.fetch_events(march()).await.expect("authorized fetch");
    assert!(events.is_empty());
}

#[tokio::test]
async fn fetch_events_surfaces_unsuccessful_envelope() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": false,
        "error": { "code": "validation_error", "message": "start must not be after end" }
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = client.fetch_events(march()).await.unwrap_err();
    assert!(
        matches!(err, ClientError::Api(ref msg) if msg.contains("validation_error")),
        "expected Api error, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_events_reports_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = client.fetch_events(march()).await.unwrap_err();
    assert!(
        matches!(err, ClientError::UnexpectedStatus { status: 502, .. }),
        "expected UnexpectedStatus(502), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_events_rejects_malformed_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("{\"success\": true, \"data\": 7}"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = client.fetch_events(march()).await.unwrap_err();
    assert!(
        matches!(err, ClientError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_events_or_empty_swallows_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let events = client.fetch_events_or_empty(march()).await;
    assert!(events.is_empty());
}
