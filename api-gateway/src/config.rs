//! Gateway configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5003;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Text,
    Json,
}

/// API gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// JSON file backing `GET /products`
    pub products_file: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            products_file: None,
            log_format: LogFormat::Text,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        // Platform PORT first, COURIER_PORT overrides it
        for key in ["PORT", "COURIER_PORT"] {
            if let Some(port) = lookup(key) {
                cfg.port = port
                    .trim()
                    .parse()
                    .with_context(|| format!("{} is not a valid port: {:?}", key, port))?;
            }
        }

        if let Some(host) = lookup("COURIER_HOST") {
            cfg.host = host;
        }

        cfg.products_file = lookup("COURIER_PRODUCTS_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        if let Some(format) = lookup("COURIER_LOG_FORMAT") {
            cfg.log_format = match format.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" | "" => LogFormat::Text,
                other => anyhow::bail!("COURIER_LOG_FORMAT must be text or json, got {:?}", other),
            };
        }

        Ok(cfg)
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = GatewayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.port, 5003);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.products_file, None);
        assert_eq!(cfg.log_format, LogFormat::Text);
        assert_eq!(cfg.socket_addr().unwrap().port(), 5003);
    }

    #[test]
    fn test_courier_port_overrides_platform_port() {
        let cfg = GatewayConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
        assert_eq!(cfg.port, 8080);

        let cfg =
            GatewayConfig::from_lookup(lookup(&[("PORT", "8080"), ("COURIER_PORT", "9000")]))
                .unwrap();
        assert_eq!(cfg.port, 9000);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = GatewayConfig::from_lookup(lookup(&[("COURIER_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("COURIER_PORT"));
    }

    #[test]
    fn test_products_file_and_log_format() {
        let cfg = GatewayConfig::from_lookup(lookup(&[
            ("COURIER_HOST", "0.0.0.0"),
            ("COURIER_PRODUCTS_FILE", "/srv/products.json"),
            ("COURIER_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(cfg.products_file, Some(PathBuf::from("/srv/products.json")));
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert!(cfg.socket_addr().unwrap().ip().is_unspecified());

        assert!(GatewayConfig::from_lookup(lookup(&[("COURIER_LOG_FORMAT", "xml")])).is_err());
    }
}
