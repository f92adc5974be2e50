//! Query surface over cached meta-annotation closures.
//!
//! None of the queries fail. Unresolved usages, usages of ignored-namespace types, and blank
//! targets all degrade to "no match" so analysis under-reports instead of aborting.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::cache::{CacheStats, ClosureCache};
use crate::closure::{ClosureRecord, compute_closure};
use crate::config::ResolverConfig;
use crate::error::Result;
use crate::name::{IgnoredNamespaces, TypeName};
use crate::provider::TypeGraphProvider;

/// Answers meta-annotation questions about annotation usages.
///
/// Caches one closure per annotation type for its whole lifetime and never invalidates
/// them. Scope an instance to one analysis session over a fixed program snapshot and share it
/// (`&self` is enough) between the threads of that session.
pub struct AnnotationResolver<P> {
	provider: P,
	ignored: IgnoredNamespaces,
	cache: ClosureCache,
}

impl<P> AnnotationResolver<P>
where
	P: TypeGraphProvider,
{
	/// Creates a resolver that ignores the default `java.` namespace.
	pub fn new(provider: P) -> Self {
		Self::with_namespaces(provider, IgnoredNamespaces::default())
	}

	pub fn with_namespaces(provider: P, ignored: IgnoredNamespaces) -> Self {
		Self {
			provider,
			ignored,
			cache: ClosureCache::new(),
		}
	}

	pub fn from_config(provider: P, config: &ResolverConfig) -> Result<Self> {
		Ok(Self::with_namespaces(provider, config.ignored()?))
	}

	pub fn provider(&self) -> &P {
		&self.provider
	}

	pub fn ignored(&self) -> &IgnoredNamespaces {
		&self.ignored
	}

	pub fn cache_stats(&self) -> CacheStats {
		self.cache.stats()
	}

	/// Checks whether any annotation applied at a declaration site is `target` or carries it
	/// through meta-annotations.
	///
	/// `site` yields the annotations applied to the declaration, in declared order.
	pub fn is_annotated_with<'u, I>(&self, site: I, target: &str) -> bool
	where
		I: IntoIterator<Item = &'u P::Usage>,
		P::Usage: 'u,
	{
		site.into_iter().any(|usage| self.inherits(usage, target, false))
	}

	/// Checks whether `usage` denotes `target`.
	///
	/// Matches when `target` is in the closure of the usage's type, or, unless
	/// `exclude_concrete_type` is set, when the usage's type is `target` itself.
	pub fn inherits(&self, usage: &P::Usage, target: &str, exclude_concrete_type: bool) -> bool {
		if target.trim().is_empty() {
			return false;
		}
		let Some(id) = self.resolve(usage) else {
			return false;
		};
		if !exclude_concrete_type && id == target {
			return true;
		}
		self.closure(&id).contains(target)
	}

	/// Lists every type `usage` carries through meta-annotations, in discovery order.
	///
	/// The usage's own type is never part of a closure, so `exclude_concrete_type` does not
	/// change the result; it is accepted for symmetry with [`Self::inherits`].
	pub fn hierarchy(&self, usage: &P::Usage, _exclude_concrete_type: bool) -> Vec<TypeName> {
		match self.resolve(usage) {
			Some(id) => self.closure(&id).to_vec(),
			None => Vec::new(),
		}
	}

	/// Returns the closure of an annotation type, or `None` for ignored-namespace types.
	pub fn closure_of(&self, ty: &TypeName) -> Option<Arc<ClosureRecord>> {
		(!self.ignored.contains(ty.as_str())).then(|| self.closure(ty))
	}

	/// Resolves a usage, treating ignored-namespace types as unresolved.
	fn resolve(&self, usage: &P::Usage) -> Option<TypeName> {
		let Some(id) = self.provider.resolve(usage) else {
			trace!("Skipping unresolved annotation usage");
			return None;
		};
		if self.ignored.contains(id.as_str()) {
			trace!(ty = %id, "Skipping annotation usage in ignored namespace");
			return None;
		}
		Some(id)
	}

	fn closure(&self, id: &TypeName) -> Arc<ClosureRecord> {
		self.cache.get_or_compute(id, |root| {
			let record = compute_closure(&self.provider, &self.ignored, root);
			debug!(root = %root, members = record.len(), "Computed meta-annotation closure");
			record
		})
	}
}

impl<P> std::fmt::Debug for AnnotationResolver<P> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AnnotationResolver")
			.field("ignored", &self.ignored)
			.field("cache", &self.cache)
			.finish_non_exhaustive()
	}
}
