//! In-memory annotation type graph.
//!
//! [`TypeGraph`] is a [`TypeGraphProvider`] over a materialised snapshot of annotation type
//! declarations. Build one programmatically with [`TypeGraphBuilder`] or load it from a TOML
//! manifest:
//!
//! ```toml
//! [types."org.springframework.stereotype.Service"]
//! meta = ["java.lang.annotation.Documented", "org.springframework.stereotype.Component"]
//!
//! [types."org.springframework.stereotype.Component"]
//! meta = ["org.springframework.stereotype.Indexed"]
//!
//! [declarations."com.example.BillingService"]
//! annotations = ["org.springframework.stereotype.Service"]
//! ```
//!
//! `meta` lists keep declaration order, which fixes the order of hierarchy listings.
//! `declarations` describe declaration sites and the annotations applied to them.
//!
//! [`TypeGraphProvider`]: metamark_annotations::TypeGraphProvider

pub mod error;
pub mod graph;
mod manifest;
pub mod usage;

pub use error::{GraphError, Result};
pub use graph::{TypeGraph, TypeGraphBuilder};
pub use usage::{AnnotationUsage, Declaration};
