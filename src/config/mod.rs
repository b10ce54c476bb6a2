// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for Pipeline Probe application
//!
//! Loads configuration from environment variables.


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .unwrap_or_else(|_| defaults::SERVER_ADDR.to_string());

        let config = Config { server_addr };

        // Report a malformed address early; binding in main is the hard failure
        if let Err(e) = config.validate() {
            tracing::error!("Invalid server configuration: {}", e);
        }

        config
    }

    /// Validates the listen address
    pub fn validate(&self) -> Result<(), String> {
        // Validate address format (must contain port)
        let Some((host, port)) = self.server_addr.rsplit_once(':') else {
            return Err(format!(
                "Invalid address format '{}': expected 'host:port'",
                self.server_addr
            ));
        };

        if host.trim().is_empty() {
            return Err(format!(
                "Host cannot be empty in address '{}'",
                self.server_addr
            ));
        }

        if port.trim().is_empty() || port.parse::<u16>().is_err() {
            return Err(format!(
                "Invalid port in address '{}'",
                self.server_addr
            ));
        }

        Ok(())
    }
}
