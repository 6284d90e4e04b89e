//! Mock gateway tests.

use ct_core::domain::OutboundMessage;
use ct_core::errors::DispatchError;
use ct_core::services::message::WhatsAppGatewayTrait;
use serde_json::json;

use crate::whatsapp::mock::{MockFailure, MockWhatsAppGateway};

fn text_message() -> OutboundMessage {
    OutboundMessage::Text {
        to: "+593995767887".to_string(),
        body: "Test message".to_string(),
    }
}

#[tokio::test]
async fn test_mock_delivery_success() {
    let gateway = MockWhatsAppGateway::new();
    let body = gateway.deliver(&text_message()).await.unwrap();

    assert_eq!(body["messaging_product"], "whatsapp");
    let message_id = body["messages"][0]["id"].as_str().unwrap();
    assert!(message_id.starts_with("wamid.mock_"));
    assert_eq!(gateway.delivery_count(), 1);
}

#[tokio::test]
async fn test_mock_rejects_invalid_recipient() {
    let gateway = MockWhatsAppGateway::new();
    let message = OutboundMessage::Text {
        to: "595767887".to_string(),
        body: "Test message".to_string(),
    };

    match gateway.deliver(&message).await {
        Err(DispatchError::Provider { status, detail }) => {
            assert_eq!(status, 400);
            assert!(detail["message"]
                .as_str()
                .unwrap()
                .contains("invalid recipient"));
        }
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_mock_simulated_provider_failure() {
    let gateway = MockWhatsAppGateway::failing_with(MockFailure::Provider {
        status: 401,
        detail: json!("invalid token"),
    });

    match gateway.deliver(&text_message()).await {
        Err(DispatchError::Provider { status, detail }) => {
            assert_eq!(status, 401);
            assert_eq!(detail, json!("invalid token"));
        }
        other => panic!("expected provider error, got {:?}", other),
    }
    assert_eq!(gateway.delivery_count(), 1);
}

#[tokio::test]
async fn test_mock_simulated_transport_failure() {
    let gateway = MockWhatsAppGateway::failing_with(MockFailure::Transport {
        reason: "connection refused".to_string(),
    });

    match gateway.deliver(&text_message()).await {
        Err(DispatchError::Transport { reason }) => {
            assert_eq!(reason, "connection refused");
        }
        other => panic!("expected transport failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_mock_counter_is_shared_across_clones() {
    let gateway = MockWhatsAppGateway::new();
    let clone = gateway.clone();

    for _ in 0..3 {
        clone.deliver(&text_message()).await.unwrap();
    }
    assert_eq!(gateway.delivery_count(), 3);
}

#[test]
fn test_provider_name() {
    let gateway = MockWhatsAppGateway::new();
    assert_eq!(gateway.provider_name(), "Mock");
}
