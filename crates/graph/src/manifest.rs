//! TOML manifest schema.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;
use crate::graph::TypeGraphBuilder;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Manifest {
	#[serde(default)]
	types: BTreeMap<String, TypeEntry>,
	#[serde(default)]
	declarations: BTreeMap<String, DeclarationEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TypeEntry {
	#[serde(default)]
	meta: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeclarationEntry {
	#[serde(default)]
	annotations: Vec<String>,
}

impl Manifest {
	pub(crate) fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	pub(crate) fn into_builder(self) -> Result<TypeGraphBuilder> {
		let mut builder = TypeGraphBuilder::new();
		for (name, entry) in self.types {
			builder.declare(&name, entry.meta.iter().map(String::as_str))?;
		}
		for (name, entry) in self.declarations {
			builder.declaration(&name, entry.annotations.iter().map(String::as_str))?;
		}
		Ok(builder)
	}
}
