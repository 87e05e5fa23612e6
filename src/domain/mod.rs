// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the resolver and the types it works on.
//!
//! This module contains the parameter and spec types, the primitive parsers,
//! the resolver itself and the type-keyed registry. It performs no I/O; the
//! parameters it resolves are supplied by the caller or by a
//! [`ParameterSource`](crate::ports::ParameterSource).

pub mod config_value;
pub mod de;
pub mod errors;
pub mod field;
pub mod index;
pub mod param;
pub mod registry;
pub mod resolver;
pub mod spec;

// Re-export commonly used types
pub use config_value::{ConfigValue, Record};
pub use errors::{ConfigError, Result};
pub use field::{FieldDescriptor, FieldKind, FieldOptions, Presence};
pub use index::ParameterIndex;
pub use param::{Param, ParamPath};
pub use registry::{ParamConfig, ParamReader, RegistryBuilder, SpecRegistry};
pub use resolver::resolve;
pub use spec::{Spec, SpecNode};
