//! # Propmap
//!
//! Synthesizes a *property model* of a C++ class from the list of methods
//! exposed by its API. Given the parsed signature of every member function,
//! propmap groups the functions by the logical property they collectively
//! access, classifies the role each function plays (basic getter, indexed
//! setter, boolean toggle, enumerated setter, ...), and emits one
//! [`Property`](core::Property) record per discovered attribute.
//!
//! The C++ header parser is an external collaborator: propmap consumes
//! already-parsed class descriptions, serialized as JSON, and performs no
//! I/O of its own during synthesis.
//!
//! ## Quick start
//!
//! ```rust
//! use propmap::analysis::build_properties;
//! use propmap::core::types::{BaseType, TypeCode};
//! use propmap::core::ParsedClass;
//!
//! let class: ParsedClass = serde_json::from_str(
//!     r#"{
//!         "name": "Sphere",
//!         "methods": [
//!             {"name": "SetRadius", "return_type": {"base": "Void"},
//!              "args": [{"type_code": {"base": "Double"}}]},
//!             {"name": "GetRadius", "return_type": {"base": "Double"}}
//!         ]
//!     }"#,
//! ).unwrap();
//!
//! let model = build_properties(&class);
//! assert_eq!(model.properties.len(), 1);
//! assert_eq!(model.properties[0].name, "Radius");
//! assert_eq!(model.properties[0].type_code, TypeCode::plain(BaseType::Double));
//! ```
//!
//! Inference is best-effort: a method either contributes to a property or
//! is silently dropped as unrecognizable. There are no recoverable error
//! conditions during synthesis.

pub mod analysis;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod observability;
pub mod output;

pub use analysis::{build_all, build_properties, role_name};
pub use core::{ClassProperties, MethodRole, Property, RoleSet};
pub use error::PropmapError;
