//! Message service tests with a mock gateway.

use std::sync::Arc;

use serde_json::json;

use crate::domain::MessageRequest;
use crate::services::message::service::MessageService;

use super::mocks::{MockGateway, MockOutcome};

fn service_with(gateway: MockGateway) -> MessageService<MockGateway> {
    MessageService::new(Arc::new(gateway))
}

#[tokio::test]
async fn test_successful_send_yields_ok_envelope() {
    let gateway = MockGateway::with_outcome(MockOutcome::Success(json!({"id": "wamid.X"})));
    let service = service_with(gateway.clone());

    let report = service
        .send_message(MessageRequest::text("+593995767887", "hola"))
        .await;

    assert_eq!(report.status, 200);
    assert_eq!(report.message, "OK");
    assert_eq!(report.data, Some(json!({"id": "wamid.X"})));
    assert!(report.error.is_none());
    assert_eq!(gateway.call_count(), 1);
}

#[tokio::test]
async fn test_provider_rejection_echoes_status_and_detail() {
    let gateway = MockGateway::with_outcome(MockOutcome::Provider {
        status: 401,
        detail: json!("invalid token"),
    });
    let service = service_with(gateway);

    let report = service
        .send_message(MessageRequest::text("+593995767887", "hola"))
        .await;

    assert_eq!(report.status, 401);
    assert_eq!(report.message, "ERROR");
    assert!(report.data.is_none());
    assert_eq!(report.error, Some(json!("invalid token")));
}

#[tokio::test]
async fn test_transport_failure_degrades_to_500() {
    let gateway =
        MockGateway::with_outcome(MockOutcome::Transport("connection refused".to_string()));
    let service = service_with(gateway);

    let report = service
        .send_message(MessageRequest::text("+593995767887", "hola"))
        .await;

    assert_eq!(report.status, 500);
    assert_eq!(report.message, "ERROR");
    assert_eq!(report.error, Some(json!("connection refused")));
}

#[tokio::test]
async fn test_unclassifiable_request_never_reaches_the_gateway() {
    let gateway = MockGateway::succeeding();
    let service = service_with(gateway.clone());

    let request = MessageRequest {
        to: "+593995767887".to_string(),
        body: None,
        template_name: None,
        template_language: None,
        template_values: Vec::new(),
    };
    let report = service.send_message(request).await;

    assert_eq!(report.status, 400);
    assert_eq!(report.message, "ERROR");
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_template_scenario_round_trip() {
    let gateway = MockGateway::succeeding();
    let service = service_with(gateway.clone());

    let request =
        MessageRequest::template("+593995767887", "hello_world", "es_MX", Vec::new());
    let report = service.send_message(request).await;

    assert!(report.is_ok());
    assert_eq!(report.message, "OK");
    assert_eq!(gateway.call_count(), 1);
}
