//! Errors raised while loading and validating sender configuration.

use thiserror::Error;

/// Failure modes of the configuration layer: layered file loading by
/// `ConfigLoader`, field checks in `Settings::validate`, and environment
/// selection via `PUSH_APP_ENV`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file the loader requires does not exist (`default.toml` in layered
    /// mode, or the file named by `PUSH_CONFIG_FILE`)
    #[error("configuration file not found: {path}")]
    MissingFile {
        /// Path of the missing file
        path: String,
    },

    /// The merged sources could not be deserialized into `Settings`
    #[error("failed to read configuration: {0}")]
    Deserialize(String),

    /// A settings field failed validation
    #[error("invalid setting {field}: {message}")]
    Validation {
        /// Dotted key of the offending field, e.g. `fcm.project_id`
        field: String,
        /// What was wrong with the value
        message: String,
    },

    /// `PUSH_APP_ENV` named an environment this sender does not know
    #[error("unknown environment '{value}', expected development, test or production")]
    UnknownEnvironment {
        /// The rejected value
        value: String,
    },

    /// `PUSH_CONFIG_DIR` and `PUSH_CONFIG_FILE` were both set
    #[error("PUSH_CONFIG_DIR and PUSH_CONFIG_FILE are mutually exclusive, set only one")]
    ExclusiveSources,

    /// Error bubbled up from the config crate's builder
    #[error(transparent)]
    Backend(#[from] config::ConfigError),
}

impl ConfigError {
    /// Validation failure for a single settings field
    pub fn validation<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        ConfigError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// A required configuration file is absent
    pub fn missing_file<P: Into<String>>(path: P) -> Self {
        ConfigError::MissingFile { path: path.into() }
    }
}
