use anyhow::{Context, Result};
use std::env;

use crate::errors::ErrorResponder;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub errors: ErrorConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub instance_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ErrorConfig {
    /// Hide the details of internal errors from clients
    pub redact_internal_details: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("API_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .context("API_PORT must be a valid port number")?,
                instance_id: env::var("INSTANCE_ID")
                    .or_else(|_| env::var("HOSTNAME"))
                    .unwrap_or_else(|_| "unknown".to_string()),
            },
            errors: ErrorConfig {
                redact_internal_details: env::var("ERRORS_REDACT_INTERNAL_DETAILS")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()
                    .context("ERRORS_REDACT_INTERNAL_DETAILS must be true or false")?,
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn error_responder(&self) -> ErrorResponder {
        ErrorResponder::new(self.errors.redact_internal_details)
    }
}
