//! Transitive meta-annotation closure.
//!
//! # Role
//!
//! Computes, for one annotation type, every type it carries through meta-annotations.
//!
//! # Ordering
//!
//! Depth-first pre-order over declaration order: a type's position is fixed when it is first
//! discovered, and a branch is exhausted before its next sibling is visited. Hierarchy
//! listings expose this order, so it is part of the contract.
//!
//! # Invariants
//!
//! - The root never appears in its own closure (see `invariants::test_closure_excludes_root`).
//! - Ignored-namespace types are neither recorded nor descended into.
//! - Each type is expanded at most once per traversal, which bounds cyclic graphs.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::name::{IgnoredNamespaces, TypeName};
use crate::provider::TypeGraphProvider;

type OrderedTypes = IndexSet<TypeName, FxBuildHasher>;

/// Closure of one annotation type: everything reachable through meta-annotations, in
/// first-discovery order, excluding the root itself.
///
/// Records compare and hash by root name only, so two records for the same type are
/// interchangeable regardless of which call produced them.
#[derive(Clone)]
pub struct ClosureRecord {
	root: TypeName,
	members: OrderedTypes,
}

impl ClosureRecord {
	pub fn root(&self) -> &TypeName {
		&self.root
	}

	/// Members in discovery order.
	pub fn members(&self) -> impl ExactSizeIterator<Item = &TypeName> + '_ {
		self.members.iter()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.members.contains(name)
	}

	/// Position of `name` in discovery order.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.members.get_index_of(name)
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	pub fn to_vec(&self) -> Vec<TypeName> {
		self.members.iter().cloned().collect()
	}
}

impl PartialEq for ClosureRecord {
	fn eq(&self, other: &Self) -> bool {
		self.root == other.root
	}
}

impl Eq for ClosureRecord {}

impl Hash for ClosureRecord {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.root.hash(state);
	}
}

impl fmt::Debug for ClosureRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClosureRecord").field("root", &self.root).field("members", &self.members).finish()
	}
}

/// Computes the closure of `root` against `provider`.
///
/// Traversal is iterative with an explicit stack of sibling iterators, so arbitrarily deep
/// meta-annotation chains cannot exhaust the call stack. The discovered set is shared across
/// the whole walk; a type already discovered is neither re-added nor re-expanded.
///
/// `root` itself is expected to lie outside `ignored`; callers filter before asking.
pub fn compute_closure<P>(provider: &P, ignored: &IgnoredNamespaces, root: &TypeName) -> ClosureRecord
where
	P: TypeGraphProvider + ?Sized,
{
	let mut discovered = OrderedTypes::default();
	let mut stack = vec![provider.meta_annotations(root).into_iter()];

	while let Some(siblings) = stack.last_mut() {
		let Some(meta) = siblings.next() else {
			stack.pop();
			continue;
		};

		if ignored.contains(meta.as_str()) {
			continue;
		}

		if !discovered.insert(meta.clone()) {
			continue;
		}

		stack.push(provider.meta_annotations(&meta).into_iter());
	}

	// A cycle can lead back to the root.
	discovered.shift_remove(root.as_str());

	ClosureRecord {
		root: root.clone(),
		members: discovered,
	}
}
