//! Sender configuration: layered TOML files plus environment overrides.
//!
//! Sources are merged lowest to highest priority:
//! 1. `default.toml` - base configuration, required
//! 2. `{environment}.toml` - per-environment overlay (development, test,
//!    production), optional
//! 3. `local.toml` - local overrides kept out of version control, optional
//! 4. `PUSH_*` environment variables

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

// Re-export public types
pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{FcmSettings, Settings};
