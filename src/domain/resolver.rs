// SPDX-License-Identifier: MIT OR Apache-2.0

//! The hierarchical parameter resolver.
//!
//! [`resolve`] walks a [`Spec`] depth first, in declaration order, against an
//! index of the supplied parameters. Each group extends the path prefix by its
//! name, each leaf is looked up at `prefix + name`. The walk always runs to the
//! end so that every missing required leaf is reported in one
//! [`ConfigError::MissingFields`]; a partially built record is never returned.
//!
//! When no required leaf is missing but some raw value failed to convert, the
//! first conversion error in declaration order is returned.

use crate::domain::config_value::{ConfigValue, Record};
use crate::domain::errors::{ConfigError, Result};
use crate::domain::field::{FieldDescriptor, Presence};
use crate::domain::index::ParameterIndex;
use crate::domain::param::{Param, ParamPath, SEPARATOR};
use crate::domain::spec::{Spec, SpecNode};

/// Resolves `spec` under `root_prefix` against `params`.
///
/// `root_prefix` is normalized to end with exactly one `/`. Parameters that do
/// not correspond to a declared leaf are ignored.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::{field, resolve, Param, Spec};
///
/// let spec = Spec::new()
///     .field("email", field::str())
///     .field("age", field::int())
///     .field("isExcellent", field::bool());
///
/// let params = vec![
///     Param::new("/service/trevoror/email", "winning@life.com"),
///     Param::new("/service/trevoror/age", "22"),
///     Param::new("/service/trevoror/isExcellent", "true"),
/// ];
///
/// let record = resolve(&spec, "/service/trevoror", &params).unwrap();
/// assert_eq!(record.get_str("email"), Some("winning@life.com"));
/// assert_eq!(record.get_i64("age"), Some(22));
/// assert_eq!(record.get_bool("isExcellent"), Some(true));
/// ```
pub fn resolve(spec: &Spec, root_prefix: &str, params: &[Param]) -> Result<Record> {
    let index = ParameterIndex::build(params);
    let mut ctx = ResolveContext::new(ParamPath::prefix(root_prefix));
    let record = ctx.resolve_group(spec, &index);
    ctx.finish(record)
}

/// Outcome of resolving a single leaf.
enum Slot {
    Value(ConfigValue),
    Absent,
    Unset,
}

/// State threaded through one resolve call.
struct ResolveContext {
    prefix: String,
    missing: Vec<String>,
    conversion_errors: Vec<ConfigError>,
}

impl ResolveContext {
    fn new(root: ParamPath) -> Self {
        Self {
            prefix: root.into_string(),
            missing: Vec::new(),
            conversion_errors: Vec::new(),
        }
    }

    fn resolve_group(&mut self, spec: &Spec, index: &ParameterIndex<'_>) -> Record {
        let mut record = Record::with_capacity(spec.len());
        for (name, node) in spec.iter() {
            match node {
                SpecNode::Group(group) => {
                    let mark = self.prefix.len();
                    self.prefix.push_str(name);
                    self.prefix.push(SEPARATOR);
                    let nested = self.resolve_group(group, index);
                    self.prefix.truncate(mark);
                    record.insert(name, Some(ConfigValue::Record(nested)));
                }
                SpecNode::Field(field) => {
                    let path = format!("{}{}", self.prefix, name);
                    match self.resolve_field(path, field, index) {
                        Slot::Value(value) => record.insert(name, Some(value)),
                        Slot::Absent => record.insert(name, None),
                        Slot::Unset => {}
                    }
                }
            }
        }
        record
    }

    fn resolve_field(
        &mut self,
        path: String,
        field: &FieldDescriptor,
        index: &ParameterIndex<'_>,
    ) -> Slot {
        if let Some(param) = index.get(&path) {
            return match field.parse(&path, param.value()) {
                Ok(value) => {
                    tracing::trace!("Resolved '{}' as {}", path, field.kind().name());
                    Slot::Value(value)
                }
                Err(e) => {
                    tracing::debug!("Invalid value for '{}': {}", path, e);
                    self.conversion_errors.push(e);
                    Slot::Unset
                }
            };
        }

        match field.presence() {
            Presence::Defaulted => {
                tracing::trace!("Using default for '{}'", path);
                field.default_value().cloned().map_or(Slot::Absent, Slot::Value)
            }
            Presence::Optional => {
                tracing::trace!("Optional '{}' not set", path);
                Slot::Absent
            }
            Presence::Required => {
                self.missing.push(path);
                Slot::Unset
            }
        }
    }

    fn finish(self, record: Record) -> Result<Record> {
        if !self.missing.is_empty() {
            tracing::debug!(
                "Resolution failed with {} missing parameters: {}",
                self.missing.len(),
                self.missing.join(", ")
            );
            return Err(ConfigError::MissingFields {
                paths: self.missing,
            });
        }
        if let Some(first) = self.conversion_errors.into_iter().next() {
            return Err(first);
        }
        tracing::debug!("Resolved {} fields", record.len());
        Ok(record)
    }
}
