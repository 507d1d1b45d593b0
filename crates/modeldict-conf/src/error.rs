//! Settings errors

use thiserror::Error;

/// Errors raised while loading or validating settings
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Settings file could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Settings file is not valid TOML or does not match the schema
	#[error("Parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A setting has an unusable value
	#[error("Invalid value for '{key}': {message}")]
	Invalid { key: String, message: String },
}

impl ConfigError {
	pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
		Self::Invalid {
			key: key.into(),
			message: message.into(),
		}
	}
}

/// Result type alias for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;
