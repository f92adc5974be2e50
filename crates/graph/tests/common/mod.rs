#![allow(dead_code)]

use std::path::PathBuf;

use metamark_annotations::TypeName;
use metamark_graph::TypeGraph;

pub const SPRING_BOOT_APPLICATION: &str = "org.springframework.boot.autoconfigure.SpringBootApplication";
pub const CONFIGURATION: &str = "org.springframework.context.annotation.Configuration";
pub const COMPONENT: &str = "org.springframework.stereotype.Component";
pub const INDEXED: &str = "org.springframework.stereotype.Indexed";
pub const SERVICE: &str = "org.springframework.stereotype.Service";

pub fn fixture_path(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

pub fn names(items: &[&str]) -> Vec<TypeName> {
	items.iter().map(|s| TypeName::from(*s)).collect()
}

/// Loads the Spring stereotype manifest with logging enabled.
pub fn spring_graph() -> TypeGraph {
	let _ = tracing_subscriber::fmt::try_init();
	TypeGraph::load(fixture_path("spring.toml")).expect("spring fixture should load")
}
