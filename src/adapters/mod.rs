// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parameter source implementations.
//!
//! This module contains concrete implementations of the `ParameterSource`
//! trait defined in the ports layer.

pub mod memory;
#[cfg(feature = "yaml")]
pub mod yaml_file;

pub use memory::MemorySource;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
