//! Semantic-binding seam consumed by the closure machinery.

use std::sync::Arc;

use crate::name::TypeName;

/// Read-only view of a program's annotation type graph.
///
/// Implementations answer for one fixed program snapshot and must tolerate concurrent calls
/// from several threads for different (or identical) types. They are never mutated through
/// this trait.
pub trait TypeGraphProvider: Send + Sync {
	/// A concrete annotation occurrence in the caller's syntax tree.
	type Usage: ?Sized;

	/// Resolves a usage to its declared annotation type.
	///
	/// Returns `None` when binding information is missing or broken. Must be deterministic for
	/// a fixed snapshot.
	fn resolve(&self, usage: &Self::Usage) -> Option<TypeName>;

	/// Annotations declared directly on `ty`, in source declaration order.
	///
	/// Empty when `ty` has none or its declaration is unavailable.
	fn meta_annotations(&self, ty: &TypeName) -> Vec<TypeName>;
}

impl<P> TypeGraphProvider for &P
where
	P: TypeGraphProvider + ?Sized,
{
	type Usage = P::Usage;

	fn resolve(&self, usage: &Self::Usage) -> Option<TypeName> {
		(**self).resolve(usage)
	}

	fn meta_annotations(&self, ty: &TypeName) -> Vec<TypeName> {
		(**self).meta_annotations(ty)
	}
}

impl<P> TypeGraphProvider for Arc<P>
where
	P: TypeGraphProvider + ?Sized,
{
	type Usage = P::Usage;

	fn resolve(&self, usage: &Self::Usage) -> Option<TypeName> {
		(**self).resolve(usage)
	}

	fn meta_annotations(&self, ty: &TypeName) -> Vec<TypeName> {
		(**self).meta_annotations(ty)
	}
}
