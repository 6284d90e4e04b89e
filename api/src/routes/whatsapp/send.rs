use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::dto::whatsapp::SendWhatsAppRequest;
use crate::handlers::error::{report_to_response, validation_failure_response};

use ct_core::services::message::{
    is_valid_phone_number, mask_phone, MessageService, WhatsAppGatewayTrait,
};

/// Application state that holds shared services
pub struct AppState<W: WhatsAppGatewayTrait> {
    pub message_service: Arc<MessageService<W>>,
}

/// Handler for POST /enviarWhatsApp
///
/// Relays a text or template message to the configured WhatsApp provider.
///
/// # Request Body
///
/// ```json
/// {
///     "destinatario": "+593995767887",
///     "mensaje": "Hola, ¿cómo estás?"
/// }
/// ```
///
/// or, for a template send:
///
/// ```json
/// {
///     "destinatario": "+593995767887",
///     "template_name": "hello_world",
///     "template_language": "es_MX",
///     "template_values": { "Location name": "Juan", "Address": "Mexico" }
/// }
/// ```
///
/// # Response
///
/// `{message, data?, error?}` — 200 with the provider response on success,
/// 400 with a field-error map on validation failure, the provider's status
/// on provider rejection, 500 on transport or internal failure.
pub async fn send_whatsapp<W>(
    state: web::Data<AppState<W>>,
    request: web::Json<SendWhatsAppRequest>,
) -> HttpResponse
where
    W: WhatsAppGatewayTrait + 'static,
{
    let request = request.into_inner();
    let masked_to = mask_phone(&request.destinatario);

    log::info!("Processing send request for destinatario: {}", masked_to);

    let field_errors = validate_request(&request);
    if !field_errors.is_empty() {
        // Short-circuit: nothing past this point runs for a bad request.
        log::warn!(
            "Validation failed for send request to {}: {:?}",
            masked_to,
            field_errors
        );
        return validation_failure_response(field_errors);
    }

    let report = state
        .message_service
        .send_message(request.into_message_request())
        .await;

    if report.is_ok() {
        log::info!("Message relayed successfully to {}", masked_to);
    } else {
        log::warn!(
            "Send request to {} failed with status {}",
            masked_to,
            report.status
        );
    }

    report_to_response(report)
}

/// Field-level checks plus the cross-field shape rule.
///
/// Returns an empty map when the request is acceptable. The shape rule is
/// `mensaje` XOR (`template_name` and `template_language`); a request with
/// both shapes populated is accepted and resolved in favor of the template
/// by the classifier.
fn validate_request(request: &SendWhatsAppRequest) -> HashMap<String, Vec<String>> {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();

    if let Err(validation_errors) = request.validate() {
        for (field, errors) in validation_errors.field_errors() {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            field_errors.insert(field.to_string(), messages);
        }
    }

    if !is_valid_phone_number(&request.destinatario) {
        field_errors
            .entry("destinatario".to_string())
            .or_default()
            .push("must be a phone number in international format, e.g. +593995767887".to_string());
    }

    let has_body = non_blank(request.mensaje.as_deref());
    let has_template = non_blank(request.template_name.as_deref());

    if !has_body && !has_template {
        let message = "either mensaje or template_name is required".to_string();
        field_errors
            .entry("mensaje".to_string())
            .or_default()
            .push(message.clone());
        field_errors
            .entry("template_name".to_string())
            .or_default()
            .push(message);
    }

    if has_template && !non_blank(request.template_language.as_deref()) {
        field_errors
            .entry("template_language".to_string())
            .or_default()
            .push("required when template_name is present".to_string());
    }

    field_errors
}

fn non_blank(field: Option<&str>) -> bool {
    field.map(str::trim).is_some_and(|s| !s.is_empty())
}
