use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

const NONE: [&str; 0] = [];

#[test]
fn test_builder_keeps_meta_order() {
	let mut builder = TypeGraph::builder();
	builder.declare("a.A", ["a.C", "a.B", "java.lang.annotation.Documented"]).unwrap();
	let graph = builder.build();
	assert_eq!(
		graph.meta_annotations(&TypeName::from("a.A")),
		["a.C", "a.B", "java.lang.annotation.Documented"].map(TypeName::from)
	);
}

#[test]
fn test_referenced_meta_is_known_but_empty() {
	let mut builder = TypeGraph::builder();
	builder.declare("a.A", ["a.B"]).unwrap();
	let graph = builder.build();

	assert!(graph.is_declared("a.A"));
	assert!(!graph.is_declared("a.B"));
	assert!(graph.is_known("a.B"));
	assert_eq!(graph.resolve(&AnnotationUsage::from("a.B")), Some(TypeName::from("a.B")));
	assert!(graph.meta_annotations(&TypeName::from("a.B")).is_empty());
}

#[test]
fn test_unknown_usage_is_unresolved() {
	let graph = TypeGraph::builder().build();
	assert!(graph.is_empty());
	assert_eq!(graph.resolve(&AnnotationUsage::from("a.Missing")), None);
}

#[test]
fn test_duplicate_type_rejected() {
	let mut builder = TypeGraph::builder();
	builder.declare("a.A", NONE).unwrap();
	let err = builder.declare("a.A", ["a.B"]).unwrap_err();
	assert!(matches!(err, GraphError::DuplicateType(ref name) if name == "a.A"));
}

#[test]
fn test_duplicate_declaration_rejected() {
	let mut builder = TypeGraph::builder();
	builder.declaration("app.Main", ["a.A"]).unwrap();
	let err = builder.declaration("app.Main", NONE).unwrap_err();
	assert!(matches!(err, GraphError::DuplicateDeclaration(_)));
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_blank_names_rejected(#[case] name: &str) {
	let mut builder = TypeGraph::builder();
	assert!(matches!(builder.declare(name, NONE), Err(GraphError::InvalidTypeName(_))));
	assert!(matches!(builder.declare("a.A", [name]), Err(GraphError::InvalidTypeName(_))));
	assert!(matches!(builder.declaration(name, ["a.A"]), Err(GraphError::InvalidTypeName(_))));
	assert!(matches!(builder.declaration("app.Main", ["a.A", name]), Err(GraphError::InvalidTypeName(_))));
	assert!(builder.build().declaration("app.Main").is_none());
}

#[test]
fn test_names_are_trimmed() {
	let mut builder = TypeGraph::builder();
	builder.declare(" a.A ", [" a.B"]).unwrap();
	builder.declaration("app.Main", [" a.A "]).unwrap();
	let graph = builder.build();
	assert!(graph.is_declared("a.A"));
	assert_eq!(graph.meta_annotations(&TypeName::from("a.A")), ["a.B"].map(TypeName::from));

	let usage = &graph.declaration("app.Main").unwrap().annotations()[0];
	assert_eq!(usage, &AnnotationUsage::from("a.A"));
	assert_eq!(graph.resolve(usage), Some(TypeName::from("a.A")));
}

#[test]
fn test_from_toml_str() {
	let graph = TypeGraph::from_toml_str(
		r#"
		[types."a.Service"]
		meta = ["java.lang.annotation.Documented", "a.Component"]

		[types."a.Component"]

		[declarations."app.Billing"]
		annotations = ["a.Service", "a.Unknown"]
		"#,
	)
	.unwrap();

	assert_eq!(graph.len(), 2);
	assert!(graph.meta_annotations(&TypeName::from("a.Component")).is_empty());
	let decl = graph.declaration("app.Billing").unwrap();
	assert_eq!(decl.name(), &TypeName::from("app.Billing"));
	assert_eq!(decl.annotations(), &[AnnotationUsage::from("a.Service"), AnnotationUsage::from("a.Unknown")]);
	assert_eq!(graph.declarations().count(), 1);
}

#[test]
fn test_toml_unknown_field_rejected() {
	let err = TypeGraph::from_toml_str("[types.\"a.A\"]\nmetas = []\n").unwrap_err();
	assert!(matches!(err, GraphError::Toml(_)));
}

#[test]
fn test_toml_blank_name_rejected() {
	let err = TypeGraph::from_toml_str("[types.\"a.A\"]\nmeta = [\"\"]\n").unwrap_err();
	assert!(matches!(err, GraphError::InvalidTypeName(_)));
}

#[test]
fn test_toml_blank_site_annotation_rejected() {
	let err = TypeGraph::from_toml_str("[declarations.\"app.Main\"]\nannotations = [\"\", \"  \"]\n").unwrap_err();
	assert!(matches!(err, GraphError::InvalidTypeName(_)));
}

#[test]
fn test_load_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[types.\"a.A\"]\nmeta = [\"a.B\"]").unwrap();
	let graph = TypeGraph::load(file.path()).unwrap();
	assert_eq!(graph.meta_annotations(&TypeName::from("a.A")), ["a.B"].map(TypeName::from));
}

#[test]
fn test_load_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	assert!(matches!(TypeGraph::load(dir.path().join("absent.toml")), Err(GraphError::Io { .. })));
}
