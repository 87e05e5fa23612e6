// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup table over a flat parameter list.

use crate::domain::param::Param;
use std::collections::HashMap;

/// Parameters keyed by full path, built once per resolve call.
///
/// When the same name appears more than once the later entry wins.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::{Param, ParameterIndex};
///
/// let params = vec![Param::new("/svc/a", "1"), Param::new("/svc/b", "2")];
/// let index = ParameterIndex::build(&params);
///
/// assert_eq!(index.get("/svc/a").map(Param::value), Some("1"));
/// assert!(index.get("/svc/c").is_none());
/// ```
#[derive(Debug)]
pub struct ParameterIndex<'a> {
    by_path: HashMap<&'a str, &'a Param>,
}

impl<'a> ParameterIndex<'a> {
    /// Builds the index in a single pass over `params`.
    pub fn build(params: &'a [Param]) -> Self {
        let mut by_path = HashMap::with_capacity(params.len());
        for param in params {
            if by_path.insert(param.name(), param).is_some() {
                tracing::warn!("Duplicate parameter '{}', keeping the last value", param.name());
            }
        }
        tracing::trace!("Indexed {} parameters", by_path.len());
        Self { by_path }
    }

    /// Looks up a parameter by full path.
    pub fn get(&self, path: &str) -> Option<&'a Param> {
        self.by_path.get(path).copied()
    }

    /// Number of distinct paths.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}
