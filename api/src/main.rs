use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use ct_api::app::create_app;
use ct_api::config::ServerConfig;
use ct_api::routes::whatsapp::AppState;
use ct_core::services::message::{MessageService, WhatsAppGatewayTrait};
use ct_infra::whatsapp::create_whatsapp_gateway;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Contacta WhatsApp relay");

    let config = ServerConfig::from_env();
    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Select the provider once at startup; credentials are read here and
    // injected into the gateway, never inside request handling.
    let gateway: Box<dyn WhatsAppGatewayTrait> =
        create_whatsapp_gateway(&config.whatsapp_provider);
    info!("Using WhatsApp provider: {}", gateway.provider_name());

    let message_service = Arc::new(MessageService::new(Arc::new(gateway)));
    let app_state = web::Data::new(AppState { message_service });

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
