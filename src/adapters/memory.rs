// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory parameter source adapter.
//!
//! This module provides an adapter over a parameter list that is already in
//! memory, for example one fetched by a store client the caller owns, or one
//! built by hand in tests.

use crate::domain::{Param, ParamPath, Result};
use crate::ports::ParameterSource;

/// Parameter source adapter over an in-memory list.
///
/// Parameters keep their insertion order.
///
/// # Examples
///
/// ```rust
/// use paramcfg::adapters::MemorySource;
/// use paramcfg::ports::ParameterSource;
///
/// let source = MemorySource::from_pairs([
///     ("/service/email", "winning@life.com"),
///     ("/other/key", "ignored"),
/// ]);
///
/// let params = source.parameters_by_prefix("/service").unwrap();
/// assert_eq!(params.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    params: Vec<Param>,
}

impl MemorySource {
    /// Creates a source over `params`.
    pub fn new(params: Vec<Param>) -> Self {
        Self { params }
    }

    /// Creates a source from name/value pairs.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(n, v)| Param::new(n, v)).collect())
    }

    /// Appends a parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Param::new(name, value));
        self
    }

    /// All parameters held by this source.
    pub fn params(&self) -> &[Param] {
        &self.params
    }
}

impl From<Vec<Param>> for MemorySource {
    fn from(params: Vec<Param>) -> Self {
        Self::new(params)
    }
}

impl ParameterSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn parameters_by_path(&self, path: &ParamPath) -> Result<Vec<Param>> {
        let params: Vec<Param> = self
            .params
            .iter()
            .filter(|p| path.contains(p.name()))
            .cloned()
            .collect();
        tracing::debug!(
            "Memory source matched {} of {} parameters under '{}'",
            params.len(),
            self.params.len(),
            path
        );
        Ok(params)
    }
}
