#![allow(dead_code)]

use std::sync::{Arc, Barrier};
use std::time::Duration;

use crate::cache::ClosureCache;
use crate::closure::compute_closure;
use crate::name::{IgnoredNamespaces, TypeName};
use crate::resolver::AnnotationResolver;
use crate::test_fixtures::FixtureGraph;

/// Invariant: a closure MUST NOT contain its own root.
///
/// Holds for direct self-loops and for cycles that route back through other types.
pub(crate) fn inv_closure_excludes_root() {
	let graph = FixtureGraph::new()
		.with("a.Self", &["a.Self"])
		.with("a.A", &["a.B"])
		.with("a.B", &["a.C"])
		.with("a.C", &["a.A", "a.D"]);
	let ignored = IgnoredNamespaces::default();

	for root in ["a.Self", "a.A", "a.B", "a.C"] {
		let record = compute_closure(&graph, &ignored, &TypeName::from(root));
		assert!(!record.contains(root), "{root} must not appear in its own closure: {record:?}");
	}

	let resolver = AnnotationResolver::new(graph);
	assert!(!resolver.inherits("a.A", "a.A", true));
	assert!(resolver.inherits("a.A", "a.A", false));
}

#[cfg_attr(test, test)]
pub(crate) fn test_closure_excludes_root() {
	inv_closure_excludes_root()
}

/// Invariant: ignored-namespace types MUST NOT be traversed, cached, or reported.
pub(crate) fn inv_ignored_namespace_pruned() {
	let graph = FixtureGraph::new()
		.with("a.A", &["java.lang.annotation.Retention", "a.B"])
		.with("java.lang.annotation.Retention", &["a.OnlyViaJava"])
		.with("a.B", &[]);
	let resolver = AnnotationResolver::new(graph);

	assert_eq!(resolver.hierarchy("a.A", false), vec![TypeName::from("a.B")]);
	assert!(!resolver.inherits("a.A", "java.lang.annotation.Retention", false));
	assert!(!resolver.inherits("a.A", "a.OnlyViaJava", false));
	assert!(resolver.hierarchy("java.lang.annotation.Retention", false).is_empty());

	assert_eq!(resolver.provider().lookups_of("java.lang.annotation.Retention"), 0);
	assert_eq!(resolver.cache_stats().entries, 1);
}

#[cfg_attr(test, test)]
pub(crate) fn test_ignored_namespace_pruned() {
	inv_ignored_namespace_pruned()
}

/// Invariant: concurrent first access for one type MUST run exactly one traversal.
///
/// Every caller observes the same record.
pub(crate) fn inv_single_computation_under_contention() {
	const THREADS: usize = 8;

	let graph = FixtureGraph::new()
		.with("a.A", &["a.B", "a.C"])
		.with("a.B", &["a.D"])
		.with_lookup_delay(Duration::from_millis(10));
	let cache = ClosureCache::new();
	let ignored = IgnoredNamespaces::default();
	let barrier = Barrier::new(THREADS);
	let id = TypeName::from("a.A");

	let records: Vec<_> = std::thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|_| {
				s.spawn(|| {
					barrier.wait();
					cache.get_or_compute(&id, |root| compute_closure(&graph, &ignored, root))
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().expect("worker panicked")).collect()
	});

	assert_eq!(graph.lookups_of("a.A"), 1, "root expanded more than once");
	assert_eq!(graph.total_lookups(), 4);
	assert_eq!(cache.stats().computations, 1);
	for record in &records {
		assert!(Arc::ptr_eq(record, &records[0]));
		assert_eq!(record.to_vec(), records[0].to_vec());
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_single_computation_under_contention() {
	inv_single_computation_under_contention()
}

/// Invariant: repeated lookups MUST return the identical record.
pub(crate) fn inv_lookup_idempotent() {
	let graph = FixtureGraph::new().with("a.A", &["a.B", "a.C"]).with("a.C", &["a.A"]);
	let resolver = AnnotationResolver::new(graph);
	let id = TypeName::from("a.A");

	let first = resolver.closure_of(&id).expect("a.A is not ignored");
	for _ in 0..4 {
		let again = resolver.closure_of(&id).expect("a.A is not ignored");
		assert_eq!(again.root(), first.root());
		assert_eq!(again.to_vec(), first.to_vec());
	}
	assert_eq!(resolver.cache_stats().computations, 1);
}

#[cfg_attr(test, test)]
pub(crate) fn test_lookup_idempotent() {
	inv_lookup_idempotent()
}
