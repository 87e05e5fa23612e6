// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type-keyed registry of parameter readers.
//!
//! The registry lets a configuration type be declared once, member by member,
//! and later read by type. Members are registered against a type with
//! [`RegistryBuilder::param`]; [`RegistryBuilder::store`] then snapshots the
//! members registered so far, together with a root prefix, into a
//! [`ParamReader`]. Building the registry freezes it; a frozen registry can be
//! installed once as the process-wide instance.
//!
//! A reader only ever calls [`resolve`](crate::domain::resolve) with the spec
//! and prefix it captured, so anything declared here can equally be written as
//! a literal [`Spec`].
//!
//! # Examples
//!
//! ```
//! use paramcfg::domain::{field, Param, SpecRegistry};
//!
//! struct Service;
//!
//! let mut builder = SpecRegistry::builder();
//! builder
//!     .param::<Service>("email", field::str())
//!     .param::<Service>("age", field::int())
//!     .store::<Service>(Some("/service"));
//! let registry = builder.build();
//!
//! let params = vec![
//!     Param::new("/service/email", "winning@life.com"),
//!     Param::new("/service/age", "22"),
//! ];
//! let record = registry.read::<Service>(&params).unwrap();
//! assert_eq!(record.get_i64("age"), Some(22));
//! assert_eq!(registry.prefix::<Service>().unwrap().as_str(), "/service/");
//! ```

use crate::domain::config_value::Record;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::param::{Param, ParamPath};
use crate::domain::resolver::resolve;
use crate::domain::spec::{Spec, SpecNode};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

static GLOBAL: OnceCell<SpecRegistry> = OnceCell::new();

/// A configuration type that declares its own spec and prefix.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::{field, ParamConfig, Spec, SpecRegistry};
///
/// struct Payments;
///
/// impl ParamConfig for Payments {
///     const PREFIX: &'static str = "/payments";
///
///     fn spec() -> Spec {
///         Spec::new().field("stripe", Spec::new().field("blockListId", field::str()))
///     }
/// }
///
/// let mut builder = SpecRegistry::builder();
/// builder.declare::<Payments>();
/// let registry = builder.build();
/// assert!(registry.reader::<Payments>().is_ok());
/// ```
pub trait ParamConfig: 'static {
    /// Root prefix under which the type's parameters live.
    const PREFIX: &'static str;

    /// The shape of the type's parameters.
    fn spec() -> Spec;
}

/// A spec bound to a root prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamReader {
    spec: Arc<Spec>,
    prefix: ParamPath,
}

impl ParamReader {
    /// Binds `spec` to `prefix`. The prefix is normalized.
    pub fn new(spec: Spec, prefix: &str) -> Self {
        Self {
            spec: Arc::new(spec),
            prefix: ParamPath::prefix(prefix),
        }
    }

    /// The captured spec.
    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    /// The captured prefix, ending with `/`.
    pub fn prefix(&self) -> &ParamPath {
        &self.prefix
    }

    /// Resolves the captured spec against `params`.
    pub fn read(&self, params: &[Param]) -> Result<Record> {
        resolve(&self.spec, self.prefix.as_str(), params)
    }

    /// Resolves and deserializes into `T`.
    pub fn read_as<T: DeserializeOwned>(&self, params: &[Param]) -> Result<T> {
        self.read(params)?.deserialize_into()
    }
}

#[derive(Debug)]
struct Entry {
    type_name: &'static str,
    reader: ParamReader,
}

/// Collects member declarations before the registry is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    members: HashMap<TypeId, Spec>,
    entries: HashMap<TypeId, Entry>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a member of `T`. Registering the same member again replaces it.
    pub fn param<T: 'static>(
        &mut self,
        member: impl Into<String>,
        node: impl Into<SpecNode>,
    ) -> &mut Self {
        self.members
            .entry(TypeId::of::<T>())
            .or_default()
            .insert(member, node);
        self
    }

    /// Associates `prefix` with `T` and snapshots its current members.
    ///
    /// Members registered for `T` afterwards are not seen by the reader unless
    /// `store` is called again. `None` stores under the root prefix `/`.
    pub fn store<T: 'static>(&mut self, prefix: Option<&str>) -> &mut Self {
        let id = TypeId::of::<T>();
        let spec = self.members.get(&id).cloned().unwrap_or_default();
        let reader = ParamReader::new(spec, prefix.unwrap_or_default());
        tracing::debug!(
            "Stored {} members of {} under '{}'",
            reader.spec().len(),
            type_name::<T>(),
            reader.prefix()
        );
        self.entries.insert(
            id,
            Entry {
                type_name: type_name::<T>(),
                reader,
            },
        );
        self
    }

    /// Registers every member of a [`ParamConfig`] type and stores it under its prefix.
    pub fn declare<T: ParamConfig>(&mut self) -> &mut Self {
        for (name, node) in T::spec().iter() {
            self.param::<T>(name, node.clone());
        }
        self.store::<T>(Some(T::PREFIX))
    }

    /// Freezes the registry. Members that were never stored are dropped.
    pub fn build(self) -> SpecRegistry {
        SpecRegistry {
            entries: self.entries,
        }
    }
}

/// A frozen, read-only set of readers keyed by type.
#[derive(Debug, Default)]
pub struct SpecRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl SpecRegistry {
    /// Starts a new registry declaration.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Returns the reader stored for `T`.
    pub fn reader<T: 'static>(&self) -> Result<&ParamReader> {
        self.entries
            .get(&TypeId::of::<T>())
            .map(|entry| &entry.reader)
            .ok_or(ConfigError::UnregisteredType {
                type_name: type_name::<T>(),
            })
    }

    /// Returns the prefix stored for `T`.
    pub fn prefix<T: 'static>(&self) -> Option<&ParamPath> {
        self.reader::<T>().ok().map(ParamReader::prefix)
    }

    /// Resolves the spec stored for `T` against `params`.
    pub fn read<T: 'static>(&self, params: &[Param]) -> Result<Record> {
        self.reader::<T>()?.read(params)
    }

    /// Resolves the spec stored for `T` and deserializes the result into `T`.
    pub fn read_as<T: DeserializeOwned + 'static>(&self, params: &[Param]) -> Result<T> {
        self.reader::<T>()?.read_as(params)
    }

    /// Names of the registered types.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no type is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Installs this registry as the process-wide instance.
    ///
    /// Fails if a registry was already installed.
    pub fn install(self) -> Result<&'static SpecRegistry> {
        GLOBAL
            .try_insert(self)
            .map_err(|_| ConfigError::RegistryAlreadyInstalled)
    }

    /// Returns the process-wide registry, if one was installed.
    pub fn global() -> Option<&'static SpecRegistry> {
        GLOBAL.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::{self, FieldOptions};

    struct Service;
    struct Other;

    fn p(name: &str, value: &str) -> Param {
        Param::new(name, value)
    }

    #[test]
    fn test_store_snapshots_members() {
        let mut builder = RegistryBuilder::new();
        builder
            .param::<Service>("email", field::str())
            .store::<Service>(Some("/svc"))
            .param::<Service>("age", field::int());
        let registry = builder.build();

        let reader = registry.reader::<Service>().unwrap();
        assert_eq!(reader.spec().len(), 1);
        assert!(reader.spec().get("age").is_none());
    }

    #[test]
    fn test_store_again_picks_up_new_members() {
        let mut builder = RegistryBuilder::new();
        builder
            .param::<Service>("email", field::str())
            .store::<Service>(Some("/svc"))
            .param::<Service>("age", field::int())
            .store::<Service>(Some("/svc"));
        let registry = builder.build();
        assert_eq!(registry.reader::<Service>().unwrap().spec().len(), 2);
    }

    #[test]
    fn test_store_default_prefix_is_root() {
        let mut builder = RegistryBuilder::new();
        builder
            .param::<Service>("email", field::str())
            .store::<Service>(None);
        let registry = builder.build();

        assert_eq!(registry.prefix::<Service>().unwrap().as_str(), "/");
        let record = registry.read::<Service>(&[p("/email", "a@b.c")]).unwrap();
        assert_eq!(record.get_str("email"), Some("a@b.c"));
    }

    #[test]
    fn test_types_are_isolated() {
        let mut builder = RegistryBuilder::new();
        builder
            .param::<Service>("email", field::str())
            .param::<Other>("port", field::integer(FieldOptions::with_default(1)))
            .store::<Service>(Some("/svc"))
            .store::<Other>(Some("/other"));
        let registry = builder.build();

        assert_eq!(registry.len(), 2);
        let other = registry.read::<Other>(&[]).unwrap();
        assert_eq!(other.get_i64("port"), Some(1));
        assert!(other.get("email").is_none());
    }

    #[test]
    fn test_unregistered_type() {
        let registry = RegistryBuilder::new().build();
        let err = registry.reader::<Service>().unwrap_err();
        assert!(matches!(err, ConfigError::UnregisteredType { .. }));
        assert!(registry.prefix::<Service>().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_members_without_store_are_dropped() {
        let mut builder = RegistryBuilder::new();
        builder.param::<Service>("email", field::str());
        let registry = builder.build();
        assert!(registry.reader::<Service>().is_err());
    }

    #[test]
    fn test_reader_matches_literal_resolve() {
        let spec = Spec::new()
            .field("email", field::str())
            .field("flags", Spec::new().field("beta", field::bool()));
        let params = vec![p("/svc/email", "x"), p("/svc/flags/beta", "no")];

        let mut builder = RegistryBuilder::new();
        for (name, node) in spec.iter() {
            builder.param::<Service>(name, node.clone());
        }
        builder.store::<Service>(Some("/svc/"));
        let registry = builder.build();

        assert_eq!(
            registry.read::<Service>(&params).unwrap(),
            resolve(&spec, "/svc", &params).unwrap()
        );
    }

    #[test]
    fn test_type_names() {
        let mut builder = RegistryBuilder::new();
        builder.store::<Service>(None);
        let registry = builder.build();
        assert_eq!(registry.type_names().len(), 1);
        assert!(registry.type_names()[0].ends_with("Service"));
    }
}
