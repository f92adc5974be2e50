//! Error types for resolver configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a [`crate::ResolverConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// An ignored-namespace prefix is empty or whitespace.
	#[error("invalid ignored namespace prefix: {0:?}")]
	InvalidNamespace(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
