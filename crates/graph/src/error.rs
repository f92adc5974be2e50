//! Error types for building and loading type graphs.

use std::path::PathBuf;

use metamark_annotations::TypeName;
use thiserror::Error;

/// Errors that can occur when building or loading a [`crate::TypeGraph`].
#[derive(Debug, Error)]
pub enum GraphError {
	/// Error parsing a TOML manifest.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a manifest file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The same annotation type was declared twice.
	#[error("duplicate annotation type: {0}")]
	DuplicateType(TypeName),

	/// The same declaration site was described twice.
	#[error("duplicate declaration: {0}")]
	DuplicateDeclaration(TypeName),

	/// A type or declaration name is empty or whitespace.
	#[error("invalid type name: {0:?}")]
	InvalidTypeName(String),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
