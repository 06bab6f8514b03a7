//! Startup orchestration.
//!
//! Fail fast: a configuration or template problem stops the process
//! before the listener is bound.

use notify::RecommendedWatcher;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{read_config, validate_config, CartConfig, ConfigError};
use crate::view::{TemplateView, TemplateWatcher, ViewError};

/// Faults that terminate the process.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("template load failure: {0}")]
    Template(#[from] ViewError),

    #[error("template watcher failed: {0}")]
    Watcher(#[from] notify::Error),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub address: Option<String>,
    pub port: Option<u16>,
}

/// Read the optional config file, apply overrides, then validate.
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<CartConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => CartConfig::default(),
    };

    if let Some(address) = overrides.address {
        config.listener.address = address;
    }
    if let Some(port) = overrides.port {
        config.listener.port = port;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load the page template and, if configured, start watching it.
///
/// The returned watcher must stay alive for reloads to keep happening.
pub fn load_view(
    config: &CartConfig,
) -> Result<(Arc<TemplateView>, Option<RecommendedWatcher>), StartupError> {
    let view = Arc::new(TemplateView::load(&config.view.template_path)?);

    let watcher = match TemplateWatcher::new(view.clone()) {
        Some(w) if config.view.watch => Some(w.run()?),
        _ => None,
    };

    Ok((view, watcher))
}
