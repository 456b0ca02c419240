//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use std::fmt;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `API_KEY` (required): shared secret clients send in the `x-api-key` header
/// - `PORT` (optional): HTTP server port, defaults to 3000
#[derive(Clone, Deserialize)]
pub struct Config {
    pub api_key: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Default port if PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `API_KEY` is missing, so the product routes can never run unguarded
    /// - `PORT` cannot be parsed as a port number
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: api_key -> API_KEY
        envy::from_env::<Config>()
    }
}

// The secret must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}
