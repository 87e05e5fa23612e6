// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter loader.
//!
//! This module ties a [`ParameterSource`] to the resolver: it fetches the
//! parameters under a reader's prefix and resolves the reader's spec against
//! them. It reads from exactly one source.

use crate::domain::{ParamReader, Record, Result, Spec, SpecRegistry};
use crate::ports::ParameterSource;
use serde::de::DeserializeOwned;

/// Loads configuration from a single parameter source.
///
/// # Examples
///
/// ```rust
/// use paramcfg::adapters::MemorySource;
/// use paramcfg::domain::{field, Spec};
/// use paramcfg::service::ParameterLoader;
///
/// # fn main() -> paramcfg::domain::Result<()> {
/// let loader = ParameterLoader::new(MemorySource::from_pairs([
///     ("/payments/stripe/blockListId", "foo"),
/// ]));
///
/// let spec = Spec::new().field("stripe", Spec::new().field("blockListId", field::str()));
/// let record = loader.load_spec(&spec, "/payments")?;
/// assert_eq!(
///     record.get_record("stripe").and_then(|r| r.get_str("blockListId")),
///     Some("foo")
/// );
/// # Ok(())
/// # }
/// ```
pub struct ParameterLoader {
    source: Box<dyn ParameterSource>,
}

impl ParameterLoader {
    /// Creates a loader over `source`.
    pub fn new(source: impl ParameterSource + 'static) -> Self {
        Self::from_boxed(Box::new(source))
    }

    /// Creates a loader over an already boxed source.
    pub fn from_boxed(source: Box<dyn ParameterSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetches the parameters under the reader's prefix and resolves them.
    pub fn load(&self, reader: &ParamReader) -> Result<Record> {
        let params = self.source.parameters_by_path(reader.prefix())?;
        tracing::debug!(
            "Fetched {} parameters under '{}' from '{}'",
            params.len(),
            reader.prefix(),
            self.source.name()
        );
        reader.read(&params)
    }

    /// Loads `spec` under `prefix`.
    pub fn load_spec(&self, spec: &Spec, prefix: &str) -> Result<Record> {
        self.load(&ParamReader::new(spec.clone(), prefix))
    }

    /// Loads through `reader` and deserializes the result into `T`.
    pub fn load_as<T: DeserializeOwned>(&self, reader: &ParamReader) -> Result<T> {
        self.load(reader)?.deserialize_into()
    }

    /// Loads the spec registered for `T` and deserializes the result into `T`.
    pub fn load_registered<T: DeserializeOwned + 'static>(
        &self,
        registry: &SpecRegistry,
    ) -> Result<T> {
        self.load_as(registry.reader::<T>()?)
    }

    /// Reloads the underlying source.
    pub fn reload(&mut self) -> Result<()> {
        self.source.reload().inspect_err(|e| {
            tracing::warn!("Failed to reload source '{}': {}", self.source.name(), e)
        })
    }
}
