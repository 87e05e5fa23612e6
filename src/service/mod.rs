// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer tying parameter sources to the resolver.

pub mod loader;

// Re-export commonly used types
pub use loader::ParameterLoader;
