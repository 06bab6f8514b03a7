//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the cart server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CartConfig {
    /// Listener configuration (address, port).
    pub listener: ListenerConfig,

    /// Cart page template settings.
    pub view: ViewConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request hardening.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Address to listen on.
    pub address: String,

    /// TCP port to listen on.
    pub port: u16,
}

impl ListenerConfig {
    /// Combined `<address>:<port>` string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Cart page template settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Path to the cart page template.
    pub template_path: String,

    /// Reload the template when the file changes.
    pub watch: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            template_path: "templates/home.tmpl".to_string(),
            watch: true,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add `X-Content-Type-Options` and `X-Frame-Options` to responses.
    pub enable_headers: bool,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 16 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_address() {
        let config = CartConfig::default();
        assert_eq!(config.listener.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CartConfig = toml::from_str(
            r#"
            [listener]
            port = 9000

            [view]
            watch = false
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address(), "127.0.0.1:9000");
        assert!(!config.view.watch);
        assert_eq!(config.view.template_path, "templates/home.tmpl");
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
