//! Runtime configuration, read once from the environment at startup.
//!
//! Every value has a compiled-in default matching the production deployment,
//! so the server starts with no environment at all; the PayU credentials are
//! the exception and stay empty until provided (`/api/payu/auth` then reports
//! a configuration error instead of calling out with bogus credentials).

use common::payu::{PayUConfig, PayUEnvironment};
use std::env;

/// Default upstream for the payment relay endpoints.
const DEFAULT_GATEWAY_URL: &str = "https://wspieram.greenpeace.pl";

/// Bind address of the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        Self { host, port }
    }
}

/// Payment gateway the relay endpoints forward to. The base URL selects the
/// deployment target; the per-method upstream paths live in the relay's
/// operation table.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let base_url =
            env::var("PAYMENT_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Reads the PayU merchant credentials and environment selection.
pub fn payu_from_env() -> PayUConfig {
    PayUConfig {
        client_id: env::var("PAYU_CLIENT_ID").unwrap_or_default(),
        client_secret: env::var("PAYU_CLIENT_SECRET").unwrap_or_default(),
        environment: PayUEnvironment::parse(
            &env::var("PAYU_ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string()),
        ),
        base_url: env::var("PAYU_BASE_URL").ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_base_url_has_no_trailing_slash() {
        let config = GatewayConfig {
            base_url: "http://127.0.0.1:9000/".trim_end_matches('/').to_string(),
        };
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn default_gateway_points_at_production() {
        assert_eq!(DEFAULT_GATEWAY_URL, "https://wspieram.greenpeace.pl");
    }
}
