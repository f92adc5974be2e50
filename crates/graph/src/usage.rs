//! Annotation usages and the declaration sites that carry them.

use metamark_annotations::TypeName;

/// An annotation as written at a declaration site, by fully qualified name.
///
/// Resolution is up to the graph: a usage naming a type the graph has never seen stays
/// unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationUsage {
	name: Box<str>,
}

impl AnnotationUsage {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self { name: name.into() }
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl From<&str> for AnnotationUsage {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

/// A declaration (type, method, field) and the annotations applied to it, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
	name: TypeName,
	annotations: Vec<AnnotationUsage>,
}

impl Declaration {
	pub fn new(name: TypeName, annotations: Vec<AnnotationUsage>) -> Self {
		Self { name, annotations }
	}

	pub fn name(&self) -> &TypeName {
		&self.name
	}

	pub fn annotations(&self) -> &[AnnotationUsage] {
		&self.annotations
	}
}
