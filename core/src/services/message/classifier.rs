//! Message shape classification.

use crate::domain::{MessageRequest, OutboundMessage};
use crate::errors::{DomainError, DomainResult};

/// Classify a validated request into its outbound shape.
///
/// A non-empty `template_name` selects the template shape even when a text
/// body is also present; callers that want a text send must omit the
/// template fields. Fails only when neither shape is satisfiable, which the
/// HTTP-level cross-field rule should already have ruled out — the distinct
/// error keeps that assumption observable instead of silently defaulting.
pub fn classify(request: &MessageRequest) -> DomainResult<OutboundMessage> {
    if let Some(name) = non_empty(request.template_name.as_deref()) {
        let language = non_empty(request.template_language.as_deref()).ok_or_else(|| {
            DomainError::MessageShape {
                message: format!("template '{}' given without a template_language", name),
            }
        })?;
        return Ok(OutboundMessage::Template {
            to: request.to.clone(),
            name: name.to_string(),
            language: language.to_string(),
            values: request.template_values.clone(),
        });
    }

    match non_empty(request.body.as_deref()) {
        Some(body) => Ok(OutboundMessage::Text {
            to: request.to.clone(),
            body: body.to_string(),
        }),
        None => Err(DomainError::MessageShape {
            message: "neither a text body nor a template was provided".to_string(),
        }),
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}
