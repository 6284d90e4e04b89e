//! Origin authorization middleware.
//!
//! Callers must present the configured shared secret in the
//! `X-Origin-Token` header before a message-send request is processed.
//! The check is an opaque predicate over the request headers: when no
//! secret is configured the middleware passes everything through, which
//! keeps local development and the mock provider friction-free.
//!
//! An unauthorized caller receives the same 400 envelope shape as any
//! other validation failure.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    env,
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use crate::dto::whatsapp::SendWhatsAppResponse;

/// Header carrying the shared origin secret.
pub const ORIGIN_TOKEN_HEADER: &str = "x-origin-token";

/// Origin authorization middleware factory
pub struct OriginAuth {
    shared_secret: Option<String>,
}

impl OriginAuth {
    /// Creates the middleware from the `ORIGIN_SHARED_SECRET` environment
    /// variable. An unset or empty value disables the check.
    pub fn new() -> Self {
        Self {
            shared_secret: env::var("ORIGIN_SHARED_SECRET")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }

    /// Creates the middleware with an explicit secret, for tests.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            shared_secret: Some(secret.into()),
        }
    }
}

impl Default for OriginAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for OriginAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = OriginAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OriginAuthService {
            service: Rc::new(service),
            shared_secret: self.shared_secret.clone(),
        }))
    }
}

/// Origin authorization middleware service
pub struct OriginAuthService<S> {
    service: Rc<S>,
    shared_secret: Option<String>,
}

impl<S, B> Service<ServiceRequest> for OriginAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(secret) = &self.shared_secret {
            let presented = req
                .headers()
                .get(ORIGIN_TOKEN_HEADER)
                .and_then(|v| v.to_str().ok());

            if presented != Some(secret.as_str()) {
                log::warn!(
                    "Unauthorized origin blocked: {} {}",
                    req.method(),
                    req.path()
                );
                return Box::pin(async move { Err(unauthorized_origin_error()) });
            }
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move { service.call(req).await })
    }
}

/// 400 response in the standard envelope shape for unauthorized callers.
fn unauthorized_origin_error() -> Error {
    let response = HttpResponse::BadRequest().json(SendWhatsAppResponse {
        message: "ERROR".to_string(),
        data: None,
        error: Some(serde_json::json!({
            "origin": ["unauthorized origin"],
        })),
    });
    InternalError::from_response("unauthorized origin", response).into()
}
