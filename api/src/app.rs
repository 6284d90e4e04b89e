//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use actix_web::{error::InternalError, middleware::Logger, web, App, HttpResponse};

use crate::dto::whatsapp::SendWhatsAppResponse;
use crate::middleware::{cors::create_cors, origin::OriginAuth};
use crate::routes::whatsapp::{send_whatsapp, AppState};

use ct_core::services::message::WhatsAppGatewayTrait;

/// Create and configure the application with all dependencies
pub fn create_app<W>(
    app_state: web::Data<AppState<W>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    W: WhatsAppGatewayTrait + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Malformed JSON bodies get the standard envelope, not the
        // framework's default error page
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Message relay endpoint, guarded by the origin check
        .service(
            web::resource("/enviarWhatsApp")
                .wrap(OriginAuth::new())
                .route(web::post().to(send_whatsapp::<W>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Degrade body deserialization faults to the standard 400 envelope.
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(SendWhatsAppResponse {
        message: "ERROR".to_string(),
        data: None,
        error: Some(serde_json::json!({ "body": [detail] })),
    });
    InternalError::from_response(err, response).into()
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "contacta-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
