#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Meta-annotation relationships between annotation types.
//!
//! # Purpose
//!
//! Given a concrete annotation usage, decide whether it transitively denotes some target
//! annotation type through a chain of meta-annotations. A custom `@MyService` annotated with
//! `@Service` (itself annotated with `@Component`) is recognised as a `@Component` without the
//! caller enumerating every alias.
//!
//! # Mental Model
//!
//! 1. **Binding:** A [`TypeGraphProvider`] resolves usages to [`TypeName`]s and reports the
//!    meta-annotations declared directly on a type, in declaration order.
//! 2. **Closure:** [`compute_closure`] walks those edges depth-first and produces a
//!    [`ClosureRecord`]: every reachable type in first-discovery order, minus the root.
//! 3. **Memoisation:** [`ClosureCache`] stores one record per type for the lifetime of the
//!    resolver and collapses concurrent first access into a single traversal.
//! 4. **Queries:** [`AnnotationResolver`] answers `is_annotated_with`, `inherits`, and
//!    `hierarchy` from cached records.
//!
//! # Lifetime
//!
//! Records are never invalidated. A resolver is scoped to one analysis session over a fixed
//! program snapshot; when sources change, drop it and build a new one.
//!
//! # Invariants
//!
//! - A closure never contains its own root, even through cycles.
//!   - Enforced in: [`crate::closure::compute_closure`].
//!   - Tested by: [`crate::invariants::test_closure_excludes_root`]
//!   - Failure symptom: `inherits(use, own_type, true)` reports a type as its own meta-annotation.
//!
//! - No ignored-namespace type is traversed, cached, or reported.
//!   - Enforced in: [`crate::closure::compute_closure`], [`crate::resolver::AnnotationResolver`].
//!   - Tested by: [`crate::invariants::test_ignored_namespace_pruned`]
//!   - Failure symptom: hierarchies list `java.lang.annotation.*` entries.
//!
//! - At most one traversal per type, even under concurrent first access.
//!   - Enforced in: [`crate::cache::ClosureCache::get_or_compute`].
//!   - Tested by: [`crate::invariants::test_single_computation_under_contention`]
//!   - Failure symptom: duplicate provider lookups and divergent records across threads.

pub mod cache;
pub mod closure;
pub mod config;
pub mod error;
pub mod name;
pub mod provider;
pub mod resolver;

#[cfg(any(test, doc))]
pub(crate) mod invariants;

#[cfg(any(test, doc))]
pub(crate) mod test_fixtures;

pub use cache::{CacheStats, ClosureCache};
pub use closure::{ClosureRecord, compute_closure};
pub use config::ResolverConfig;
pub use error::{ConfigError, Result};
pub use name::{DEFAULT_IGNORED_NAMESPACE, IgnoredNamespaces, TypeName};
pub use provider::TypeGraphProvider;
pub use resolver::AnnotationResolver;
