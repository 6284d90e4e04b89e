//! Server configuration loaded from environment variables.

use std::env;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind, default "127.0.0.1"
    pub host: String,
    /// Port to bind, default 8080
    pub port: u16,
    /// WhatsApp provider selector: "cloud" or "mock"
    pub whatsapp_provider: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            whatsapp_provider: env::var("WHATSAPP_PROVIDER")
                .unwrap_or_else(|_| "mock".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        std::env::remove_var("SERVER_HOST");
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("WHATSAPP_PROVIDER");

        let config = ServerConfig::from_env();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.whatsapp_provider, "mock");
    }
}
