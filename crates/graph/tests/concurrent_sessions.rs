mod common;

use std::sync::{Arc, Barrier};

use common::{COMPONENT, CONFIGURATION, SERVICE, SPRING_BOOT_APPLICATION, spring_graph};
use metamark_annotations::AnnotationResolver;
use metamark_graph::AnnotationUsage;

#[test]
fn worker_threads_share_one_resolver() {
	const WORKERS: usize = 8;

	let resolver = AnnotationResolver::new(Arc::new(spring_graph()));
	let barrier = Barrier::new(WORKERS);
	let usages = [SPRING_BOOT_APPLICATION, SERVICE, "test.CustomComponent1"].map(AnnotationUsage::from);

	std::thread::scope(|s| {
		for _ in 0..WORKERS {
			s.spawn(|| {
				barrier.wait();
				for usage in &usages {
					assert!(resolver.inherits(usage, COMPONENT, true));
				}
				assert!(resolver.inherits(&usages[0], CONFIGURATION, true));
				assert!(!resolver.inherits(&usages[1], CONFIGURATION, false));
			});
		}
	});

	let stats = resolver.cache_stats();
	assert_eq!(stats.entries, usages.len());
	assert_eq!(stats.computations, usages.len());
}

#[test]
fn sessions_do_not_share_caches() {
	let graph = Arc::new(spring_graph());
	let first = AnnotationResolver::new(Arc::clone(&graph));
	let second = AnnotationResolver::new(Arc::clone(&graph));
	let usage = AnnotationUsage::from(SERVICE);

	assert!(first.inherits(&usage, COMPONENT, true));
	assert_eq!(first.cache_stats().entries, 1);
	assert_eq!(second.cache_stats().entries, 0);

	assert!(second.inherits(&usage, COMPONENT, true));
	assert_eq!(second.cache_stats().computations, 1);
}
