//! HTTP response normalization.
//!
//! Every outcome of the pipeline — success, validation rejection, provider
//! error, transport failure, unexpected fault — leaves this module as a
//! `{message, data?, error?}` body with the matching HTTP status. Raw
//! faults never reach the caller unshaped.

use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::Value;

use ct_core::domain::value_objects::SendReport;

use crate::dto::whatsapp::SendWhatsAppResponse;

/// Echo a send report as the HTTP response.
///
/// The report's status is used verbatim when it is a representable HTTP
/// code; anything else degrades to 500 so a malformed provider status can
/// never produce an invalid response.
pub fn report_to_response(report: SendReport) -> HttpResponse {
    let status =
        StatusCode::from_u16(report.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(SendWhatsAppResponse::from(report))
}

/// 400 response carrying per-field validation errors.
pub fn validation_failure_response(field_errors: HashMap<String, Vec<String>>) -> HttpResponse {
    HttpResponse::BadRequest().json(SendWhatsAppResponse {
        message: "ERROR".to_string(),
        data: None,
        error: Some(serde_json::json!(field_errors)),
    })
}

/// Catch-all for faults that were not normalized upstream.
pub fn internal_error_response(description: impl Into<String>) -> HttpResponse {
    HttpResponse::InternalServerError().json(SendWhatsAppResponse {
        message: "ERROR".to_string(),
        data: None,
        error: Some(Value::String(description.into())),
    })
}
