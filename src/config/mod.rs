//! Configuration module for the GreenSteps service.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Username accepted for the admin role
    pub admin_username: String,
    /// Password accepted for the admin role
    pub admin_password: String,
    /// Whether the store starts with the starter lessons, projects and resources
    pub seed_content: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            admin_username: "adim123".to_string(),
            admin_password: "admin".to_string(),
            seed_content: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let bind_addr = match lookup("GREENSTEPS_BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| {
                AppError::Config(format!("Invalid GREENSTEPS_BIND_ADDR format: {}", raw))
            })?,
            None => defaults.bind_addr,
        };

        let seed_content = match lookup("GREENSTEPS_SEED_CONTENT") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!("Invalid GREENSTEPS_SEED_CONTENT value: {}", raw))
            })?,
            None => defaults.seed_content,
        };

        Ok(Self {
            bind_addr,
            log_level: lookup("GREENSTEPS_LOG_LEVEL").unwrap_or(defaults.log_level),
            admin_username: lookup("GREENSTEPS_ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: lookup("GREENSTEPS_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            seed_content,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
