#![allow(dead_code)]

use std::time::Duration;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::name::TypeName;
use crate::provider::TypeGraphProvider;

/// Hand-built type graph that counts meta-annotation lookups per type.
#[derive(Default)]
pub(crate) struct FixtureGraph {
	edges: FxHashMap<TypeName, Vec<TypeName>>,
	lookups: Mutex<FxHashMap<TypeName, usize>>,
	lookup_delay: Option<Duration>,
}

impl FixtureGraph {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Declares `name` with the given meta-annotations, in order.
	pub(crate) fn with(mut self, name: &str, metas: &[&str]) -> Self {
		self.edges.insert(TypeName::from(name), metas.iter().map(|m| TypeName::from(*m)).collect());
		self
	}

	/// Slows every lookup down so concurrent callers overlap.
	pub(crate) fn with_lookup_delay(mut self, delay: Duration) -> Self {
		self.lookup_delay = Some(delay);
		self
	}

	pub(crate) fn lookups_of(&self, name: &str) -> usize {
		self.lookups.lock().get(name).copied().unwrap_or(0)
	}

	pub(crate) fn total_lookups(&self) -> usize {
		self.lookups.lock().values().sum()
	}
}

impl TypeGraphProvider for FixtureGraph {
	type Usage = str;

	fn resolve(&self, usage: &str) -> Option<TypeName> {
		let known = self.edges.contains_key(usage) || self.edges.values().flatten().any(|m| m == usage);
		known.then(|| TypeName::from(usage))
	}

	fn meta_annotations(&self, ty: &TypeName) -> Vec<TypeName> {
		*self.lookups.lock().entry(ty.clone()).or_default() += 1;
		if let Some(delay) = self.lookup_delay {
			std::thread::sleep(delay);
		}
		self.edges.get(ty).cloned().unwrap_or_default()
	}
}

pub(crate) fn names(items: &[&str]) -> Vec<TypeName> {
	items.iter().map(|s| TypeName::from(*s)).collect()
}

/// Spring Boot's stereotype chain, trimmed to what the hierarchy tests need.
pub(crate) fn spring_graph() -> FixtureGraph {
	const TARGET: &str = "java.lang.annotation.Target";
	const RETENTION: &str = "java.lang.annotation.Retention";
	const DOCUMENTED: &str = "java.lang.annotation.Documented";
	const INHERITED: &str = "java.lang.annotation.Inherited";

	FixtureGraph::new()
		.with(
			"org.springframework.boot.autoconfigure.SpringBootApplication",
			&[
				TARGET,
				RETENTION,
				DOCUMENTED,
				INHERITED,
				"org.springframework.boot.SpringBootConfiguration",
				"org.springframework.boot.autoconfigure.EnableAutoConfiguration",
				"org.springframework.context.annotation.ComponentScan",
			],
		)
		.with(
			"org.springframework.boot.SpringBootConfiguration",
			&[TARGET, RETENTION, DOCUMENTED, "org.springframework.context.annotation.Configuration", "org.springframework.stereotype.Indexed"],
		)
		.with(
			"org.springframework.context.annotation.Configuration",
			&[TARGET, RETENTION, DOCUMENTED, "org.springframework.stereotype.Component"],
		)
		.with("org.springframework.stereotype.Component", &[TARGET, RETENTION, DOCUMENTED, "org.springframework.stereotype.Indexed"])
		.with("org.springframework.stereotype.Indexed", &[TARGET, RETENTION, DOCUMENTED])
		.with("org.springframework.stereotype.Service", &[TARGET, RETENTION, DOCUMENTED, "org.springframework.stereotype.Component"])
		.with(
			"org.springframework.boot.autoconfigure.EnableAutoConfiguration",
			&[
				TARGET,
				RETENTION,
				DOCUMENTED,
				INHERITED,
				"org.springframework.boot.autoconfigure.AutoConfigurationPackage",
				"org.springframework.context.annotation.Import",
			],
		)
		.with(
			"org.springframework.boot.autoconfigure.AutoConfigurationPackage",
			&[TARGET, RETENTION, DOCUMENTED, INHERITED, "org.springframework.context.annotation.Import"],
		)
		.with("org.springframework.context.annotation.Import", &[TARGET, RETENTION, DOCUMENTED])
		.with(
			"org.springframework.context.annotation.ComponentScan",
			&[RETENTION, TARGET, DOCUMENTED, "java.lang.annotation.Repeatable"],
		)
		.with(TARGET, &[DOCUMENTED, RETENTION, TARGET])
		.with(DOCUMENTED, &[DOCUMENTED, RETENTION, TARGET])
}
