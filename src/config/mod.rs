//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → command-line overrides (--address, --port)
//!     → validation.rs (semantic checks)
//!     → CartConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; only the page template hot-reloads
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError};
pub use schema::{
    CartConfig, ListenerConfig, ObservabilityConfig, SecurityConfig, TimeoutConfig, ViewConfig,
};
pub use validation::{validate_config, ValidationError};
