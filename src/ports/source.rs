// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter source trait definition.
//!
//! This module defines the `ParameterSource` trait, the port through which a
//! parameter store is read. Pagination, retries and transport belong to the
//! implementation; the resolver only ever sees the completed list.

use crate::domain::{Param, ParamPath, Result};

/// A trait for parameter stores.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded contexts.
///
/// # Examples
///
/// ```rust
/// use paramcfg::ports::ParameterSource;
/// use paramcfg::domain::{Param, ParamPath, Result};
///
/// struct MySource;
///
/// impl ParameterSource for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     fn parameters_by_path(&self, path: &ParamPath) -> Result<Vec<Param>> {
///         Ok(vec![Param::new(path.join("email").into_string(), "a@b.c")])
///     }
/// }
///
/// let source = MySource;
/// let params = source.parameters_by_path(&ParamPath::prefix("/svc")).unwrap();
/// assert_eq!(params[0].name(), "/svc/email");
/// ```
pub trait ParameterSource: Send + Sync {
    /// Returns the name of this source.
    ///
    /// This name is used for logging and error messages. It should be a short,
    /// descriptive identifier like "memory" or "yaml-file".
    fn name(&self) -> &str;

    /// Returns every parameter whose name lies under `path`, at any depth.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Param>)` - The complete list, possibly empty
    /// * `Err(ConfigError)` - The store could not be read
    fn parameters_by_path(&self, path: &ParamPath) -> Result<Vec<Param>>;

    /// Reloads the parameters from the underlying store.
    ///
    /// Sources that cannot reload keep the default no-op.
    fn reload(&mut self) -> Result<()> {
        Ok(())
    }

    /// Convenience wrapper around [`parameters_by_path`](Self::parameters_by_path)
    /// that normalizes a string prefix first.
    fn parameters_by_prefix(&self, prefix: &str) -> Result<Vec<Param>> {
        self.parameters_by_path(&ParamPath::prefix(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test implementation of ParameterSource for testing purposes
    struct TestSource {
        params: Vec<Param>,
    }

    impl ParameterSource for TestSource {
        fn name(&self) -> &str {
            "test-source"
        }

        fn parameters_by_path(&self, path: &ParamPath) -> Result<Vec<Param>> {
            Ok(self
                .params
                .iter()
                .filter(|p| path.contains(p.name()))
                .cloned()
                .collect())
        }
    }

    fn source() -> TestSource {
        TestSource {
            params: vec![
                Param::new("/svc/a", "1"),
                Param::new("/svc/g/b", "2"),
                Param::new("/other/c", "3"),
            ],
        }
    }

    #[test]
    fn test_parameter_source_name() {
        assert_eq!(source().name(), "test-source");
    }

    #[test]
    fn test_parameters_by_prefix_normalizes() {
        let params = source().parameters_by_prefix("/svc").unwrap();
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_default_reload() {
        let mut source = source();
        assert!(source.reload().is_ok());
    }

    #[test]
    fn test_parameter_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn ParameterSource>>();
    }
}
