//! Snapshot type graph and its builder.

use std::path::Path;

use metamark_annotations::{TypeGraphProvider, TypeName};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::manifest::Manifest;
use crate::usage::{AnnotationUsage, Declaration};

/// Immutable annotation type graph.
///
/// A type is *known* when it is declared or referenced as a meta-annotation of a declared type.
/// Known-but-undeclared types resolve normally and report no meta-annotations.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
	types: FxHashMap<TypeName, Vec<TypeName>>,
	known: FxHashSet<TypeName>,
	declarations: FxHashMap<TypeName, Declaration>,
}

impl TypeGraph {
	pub fn builder() -> TypeGraphBuilder {
		TypeGraphBuilder::new()
	}

	/// Parse a TOML manifest into a [`TypeGraph`].
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(Manifest::parse(input)?.into_builder()?.build())
	}

	/// Read and parse a TOML manifest file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| GraphError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}

	pub fn is_declared(&self, name: &str) -> bool {
		self.types.contains_key(name)
	}

	pub fn is_known(&self, name: &str) -> bool {
		self.known.contains(name)
	}

	/// Number of declared annotation types.
	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	pub fn declaration(&self, name: &str) -> Option<&Declaration> {
		self.declarations.get(name)
	}

	pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
		self.declarations.values()
	}

	fn log_undeclared(&self) {
		let undeclared: Vec<_> = self.known.iter().filter(|name| !self.types.contains_key(*name)).collect();
		if !undeclared.is_empty() {
			let samples: Vec<_> = undeclared.iter().take(5).collect();
			debug!(count = undeclared.len(), ?samples, "Meta-annotations without declarations");
		}
	}
}

impl TypeGraphProvider for TypeGraph {
	type Usage = AnnotationUsage;

	fn resolve(&self, usage: &AnnotationUsage) -> Option<TypeName> {
		self.known.get(usage.name()).cloned()
	}

	fn meta_annotations(&self, ty: &TypeName) -> Vec<TypeName> {
		self.types.get(ty).cloned().unwrap_or_default()
	}
}

/// Incremental constructor for [`TypeGraph`].
#[derive(Debug, Default)]
pub struct TypeGraphBuilder {
	graph: TypeGraph,
}

impl TypeGraphBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares an annotation type with its meta-annotations in declaration order.
	pub fn declare<'a, I>(&mut self, name: &str, metas: I) -> Result<&mut Self>
	where
		I: IntoIterator<Item = &'a str>,
	{
		let name = parse_name(name)?;
		let metas = metas.into_iter().map(parse_name).collect::<Result<Vec<_>>>()?;
		if self.graph.types.contains_key(&name) {
			return Err(GraphError::DuplicateType(name));
		}
		self.graph.known.extend(metas.iter().cloned());
		self.graph.known.insert(name.clone());
		self.graph.types.insert(name, metas);
		Ok(self)
	}

	/// Describes a declaration site and the annotations applied to it, in source order.
	pub fn declaration<'a, I>(&mut self, name: &str, annotations: I) -> Result<&mut Self>
	where
		I: IntoIterator<Item = &'a str>,
	{
		let name = parse_name(name)?;
		let annotations = annotations
			.into_iter()
			.map(|annotation| parse_name(annotation).map(|ty| AnnotationUsage::new(ty.as_str())))
			.collect::<Result<Vec<_>>>()?;
		if self.graph.declarations.contains_key(&name) {
			return Err(GraphError::DuplicateDeclaration(name));
		}
		self.graph.declarations.insert(name.clone(), Declaration::new(name, annotations));
		Ok(self)
	}

	pub fn build(self) -> TypeGraph {
		self.graph.log_undeclared();
		self.graph
	}
}

fn parse_name(name: &str) -> Result<TypeName> {
	let trimmed = name.trim();
	if trimmed.is_empty() {
		return Err(GraphError::InvalidTypeName(name.to_string()));
	}
	Ok(TypeName::from(trimmed))
}

#[cfg(test)]
mod tests;
