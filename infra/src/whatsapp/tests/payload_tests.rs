//! Payload builder tests.

use ct_core::domain::OutboundMessage;
use serde_json::{json, Value};

use crate::whatsapp::payload::build_payload;

fn to_json(message: &OutboundMessage) -> Value {
    serde_json::to_value(build_payload(message)).unwrap()
}

#[test]
fn test_text_payload_shape() {
    let message = OutboundMessage::Text {
        to: "+593995767887".to_string(),
        body: "Hola, ¿cómo estás?".to_string(),
    };

    let payload = to_json(&message);
    assert_eq!(
        payload,
        json!({
            "messaging_product": "whatsapp",
            "recipient_type": "individual",
            "to": "+593995767887",
            "type": "text",
            "text": {
                "preview_url": false,
                "body": "Hola, ¿cómo estás?",
            },
        })
    );
}

#[test]
fn test_template_payload_shape() {
    let message = OutboundMessage::Template {
        to: "+593995767887".to_string(),
        name: "hello_world".to_string(),
        language: "es_MX".to_string(),
        values: vec![("Location name".to_string(), "Juan".to_string())],
    };

    let payload = to_json(&message);
    assert_eq!(payload["type"], "template");
    assert_eq!(payload["template"]["name"], "hello_world");
    assert_eq!(payload["template"]["language"]["code"], "es_MX");
    assert_eq!(
        payload["template"]["components"][0],
        json!({
            "type": "body",
            "parameters": [{"type": "text", "text": "Juan"}],
        })
    );
}

#[test]
fn test_template_parameters_follow_binding_order() {
    let message = OutboundMessage::Template {
        to: "+593995767887".to_string(),
        name: "visit_reminder".to_string(),
        language: "es_MX".to_string(),
        values: vec![
            ("Location name".to_string(), "Juan".to_string()),
            ("Address".to_string(), "Mexico".to_string()),
        ],
    };

    // The projection is deterministic: parameters come out in the order the
    // bindings were supplied, every time.
    for _ in 0..3 {
        let payload = to_json(&message);
        let parameters = payload["template"]["components"][0]["parameters"]
            .as_array()
            .unwrap();
        let texts: Vec<&str> = parameters
            .iter()
            .map(|p| p["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["Juan", "Mexico"]);
    }
}

#[test]
fn test_template_without_values_has_no_components() {
    let message = OutboundMessage::Template {
        to: "+593995767887".to_string(),
        name: "hello_world".to_string(),
        language: "es_MX".to_string(),
        values: vec![],
    };

    let payload = to_json(&message);
    assert!(payload["template"].get("components").is_none());
}

#[test]
fn test_text_payload_has_no_template_field() {
    let message = OutboundMessage::Text {
        to: "+593995767887".to_string(),
        body: "hola".to_string(),
    };

    let payload = to_json(&message);
    assert!(payload.get("template").is_none());
}
