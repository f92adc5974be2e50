//! Annotation type names and the ignored namespace.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Prefix of the platform's built-in annotation facility.
pub const DEFAULT_IGNORED_NAMESPACE: &str = "java.";

/// Fully qualified name of an annotation type.
///
/// Cheap to clone. Equality, ordering, and hashing follow the underlying string, so a
/// `TypeName` can be looked up by `&str` in any map or set keyed by it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeName(Arc<str>);

impl TypeName {
	pub fn new(name: impl Into<Arc<str>>) -> Self {
		Self(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Last dotted segment, e.g. `Component` for `org.springframework.stereotype.Component`.
	pub fn simple_name(&self) -> &str {
		self.0.rsplit_once('.').map_or(&*self.0, |(_, simple)| simple)
	}
}

impl fmt::Debug for TypeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&*self.0, f)
	}
}

impl fmt::Display for TypeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for TypeName {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for TypeName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for TypeName {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for TypeName {
	fn from(name: String) -> Self {
		Self::new(name)
	}
}

impl PartialEq<str> for TypeName {
	fn eq(&self, other: &str) -> bool {
		&*self.0 == other
	}
}

impl PartialEq<&str> for TypeName {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}

/// Set of name prefixes whose types are never traversed, cached, or reported.
///
/// Blank names always count as ignored: they cannot denote a real annotation type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredNamespaces {
	prefixes: Vec<Box<str>>,
}

impl Default for IgnoredNamespaces {
	fn default() -> Self {
		Self::new([DEFAULT_IGNORED_NAMESPACE])
	}
}

impl IgnoredNamespaces {
	pub fn new<I, S>(prefixes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		Self {
			prefixes: prefixes.into_iter().map(Into::into).collect(),
		}
	}

	/// No prefixes; only blank names are ignored.
	pub fn none() -> Self {
		Self { prefixes: Vec::new() }
	}

	pub fn prefixes(&self) -> impl Iterator<Item = &str> {
		self.prefixes.iter().map(|p| &**p)
	}

	pub fn contains(&self, name: &str) -> bool {
		name.trim().is_empty() || self.prefixes.iter().any(|p| name.starts_with(&**p))
	}
}
