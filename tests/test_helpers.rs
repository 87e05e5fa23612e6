// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations for testing.
//!
//! This module provides a mock parameter source that records how it was
//! queried and can be told to fail.

use paramcfg::domain::{ConfigError, Param, ParamPath, Result};
use paramcfg::ports::ParameterSource;
use std::sync::Mutex;

/// A mock parameter source for testing.
#[derive(Debug)]
pub struct MockParameterSource {
    name: String,
    params: Vec<Param>,
    should_fail: bool,
    queried: Mutex<Vec<String>>,
}

impl MockParameterSource {
    /// Creates a new mock source with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            should_fail: false,
            queried: Mutex::new(Vec::new()),
        }
    }

    /// Adds a parameter to the mock source.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Param::new(name, value));
        self
    }

    /// Sets whether fetching should fail.
    pub fn with_failure(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }

    /// Paths this source was asked for, in order.
    pub fn queried_paths(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

impl ParameterSource for MockParameterSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters_by_path(&self, path: &ParamPath) -> Result<Vec<Param>> {
        self.queried.lock().unwrap().push(path.to_string());
        if self.should_fail {
            return Err(ConfigError::SourceError {
                source_name: self.name.clone(),
                message: "Mock fetch failure".to_string(),
                source: None,
            });
        }
        Ok(self
            .params
            .iter()
            .filter(|p| path.contains(p.name()))
            .cloned()
            .collect())
    }
}

/// Creates a mock source holding the trevoror service parameters plus noise.
pub fn create_service_source() -> MockParameterSource {
    MockParameterSource::new("test")
        .with_param("/service/trevoror/email", "winning@life.com")
        .with_param("/service/trevoror/age", "22")
        .with_param("/service/trevoror/isExcellent", "true")
        .with_param("/service/other/email", "someone@else.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_basic() {
        let source = MockParameterSource::new("test").with_param("/svc/key", "value");
        assert_eq!(source.name(), "test");

        let params = source.parameters_by_prefix("/svc").unwrap();
        assert_eq!(params, vec![Param::new("/svc/key", "value")]);
    }

    #[test]
    fn test_mock_source_records_queries() {
        let source = create_service_source();
        source.parameters_by_prefix("/service/trevoror").unwrap();
        source.parameters_by_prefix("/service").unwrap();
        assert_eq!(
            source.queried_paths(),
            vec!["/service/trevoror/", "/service/"]
        );
    }

    #[test]
    fn test_mock_source_failure() {
        let source = MockParameterSource::new("test").with_failure(true);
        let result = source.parameters_by_prefix("/svc");
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_create_service_source() {
        let source = create_service_source();
        let params = source.parameters_by_prefix("/service/trevoror").unwrap();
        assert_eq!(params.len(), 3);
    }
}
