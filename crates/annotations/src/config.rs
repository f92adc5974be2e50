//! Resolver configuration.
//!
//! Configuration is written in TOML:
//!
//! ```toml
//! # Prefixes whose annotation types are never traversed or reported.
//! ignored_namespaces = ["java.", "kotlin.annotation."]
//! ```
//!
//! A missing `ignored_namespaces` key falls back to [`DEFAULT_IGNORED_NAMESPACE`] alone.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::name::{DEFAULT_IGNORED_NAMESPACE, IgnoredNamespaces};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
	#[serde(default = "default_ignored_namespaces")]
	pub ignored_namespaces: Vec<String>,
}

fn default_ignored_namespaces() -> Vec<String> {
	vec![DEFAULT_IGNORED_NAMESPACE.to_string()]
}

impl Default for ResolverConfig {
	fn default() -> Self {
		Self {
			ignored_namespaces: default_ignored_namespaces(),
		}
	}
}

impl ResolverConfig {
	/// Parse a TOML string into a [`ResolverConfig`].
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Read and parse a TOML configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}

	/// Builds the ignored-namespace predicate.
	pub fn ignored(&self) -> Result<IgnoredNamespaces> {
		self.validate()?;
		Ok(IgnoredNamespaces::new(self.ignored_namespaces.iter().map(String::as_str)))
	}

	fn validate(&self) -> Result<()> {
		match self.ignored_namespaces.iter().find(|prefix| prefix.trim().is_empty()) {
			Some(prefix) => Err(ConfigError::InvalidNamespace(prefix.clone())),
			None => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn test_empty_input_uses_default() {
		let config = ResolverConfig::from_toml_str("").unwrap();
		assert_eq!(config, ResolverConfig::default());
		assert_eq!(config.ignored().unwrap(), IgnoredNamespaces::default());
	}

	#[test]
	fn test_custom_namespaces() {
		let config = ResolverConfig::from_toml_str(r#"ignored_namespaces = ["java.", "kotlin.annotation."]"#).unwrap();
		let ignored = config.ignored().unwrap();
		assert!(ignored.contains("kotlin.annotation.Target"));
		assert!(ignored.contains("java.lang.Deprecated"));
		assert!(!ignored.contains("kotlin.Deprecated"));
	}

	#[test]
	fn test_empty_list_disables_prefixes() {
		let config = ResolverConfig::from_toml_str("ignored_namespaces = []").unwrap();
		assert!(!config.ignored().unwrap().contains("java.lang.Deprecated"));
	}

	#[test]
	fn test_blank_prefix_rejected() {
		let err = ResolverConfig::from_toml_str(r#"ignored_namespaces = ["java.", "  "]"#).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidNamespace(ref p) if p == "  "));
	}

	#[test]
	fn test_unknown_field_rejected() {
		let err = ResolverConfig::from_toml_str("ignored = [\"java.\"]").unwrap_err();
		assert!(matches!(err, ConfigError::Toml(_)));
	}

	#[test]
	fn test_load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, r#"ignored_namespaces = ["jakarta."]"#).unwrap();
		let config = ResolverConfig::load(file.path()).unwrap();
		assert_eq!(config.ignored_namespaces, vec!["jakarta.".to_string()]);
	}

	#[test]
	fn test_load_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = ResolverConfig::load(dir.path().join("absent.toml")).unwrap_err();
		assert!(matches!(err, ConfigError::Io { .. }));
	}
}
