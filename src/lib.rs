// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, nested configuration from flat parameter store entries.
//!
//! Parameter stores hold configuration as path-keyed strings such as
//! `/payments/stripe/blockListId = foo`. This crate resolves such a flat list
//! against a declared shape (a [`Spec`](domain::Spec)) and produces a nested
//! [`Record`](domain::Record), or a single error listing every required
//! parameter that was missing.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: parameters, specs, parsers, the resolver and the registry
//! - **Ports**: the `ParameterSource` trait through which parameters are fetched
//! - **Adapters**: in-memory and YAML file sources
//! - **Service**: the loader that fetches from a source and resolves
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML parameter file adapter (default)
//!
//! # Quick Start
//!
//! ```rust
//! use paramcfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let spec = Spec::new()
//!     .field("email", field::str())
//!     .field("age", field::int())
//!     .field("isExcellent", field::bool())
//!     .field("retries", field::integer(FieldOptions::with_default(3)));
//!
//! let params = vec![
//!     Param::new("/service/trevoror/email", "winning@life.com"),
//!     Param::new("/service/trevoror/age", "22"),
//!     Param::new("/service/trevoror/isExcellent", "true"),
//! ];
//!
//! let record = resolve(&spec, "/service/trevoror", &params)?;
//! assert_eq!(record.get_i64("retries"), Some(3));
//!
//! let err = resolve(&spec, "/missing-fields", &[]).unwrap_err();
//! assert_eq!(
//!     err.missing_paths().unwrap(),
//!     ["/missing-fields/email", "/missing-fields/age", "/missing-fields/isExcellent"]
//! );
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::field;
    pub use crate::domain::{
        resolve, ConfigError, ConfigValue, FieldDescriptor, FieldOptions, Param, ParamConfig,
        ParamPath, ParamReader, Record, Result, Spec, SpecNode, SpecRegistry,
    };
    pub use crate::ports::ParameterSource;
    pub use crate::service::ParameterLoader;

    pub use crate::adapters::MemorySource;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
