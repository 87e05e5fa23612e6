// SPDX-License-Identifier: MIT OR Apache-2.0

//! The spec tree: the declared shape of a configuration.
//!
//! A [`Spec`] is a group, an ordered mapping of field names to [`SpecNode`]s.
//! Leaves are [`FieldDescriptor`]s, inner nodes are nested groups that only
//! contribute a path segment.

use crate::domain::field::FieldDescriptor;
use crate::domain::param::ParamPath;

/// A node of the spec tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecNode {
    /// A leaf resolved from a single parameter.
    Field(FieldDescriptor),
    /// A nested group of fields.
    Group(Spec),
}

impl From<FieldDescriptor> for SpecNode {
    fn from(field: FieldDescriptor) -> Self {
        SpecNode::Field(field)
    }
}

impl From<Spec> for SpecNode {
    fn from(spec: Spec) -> Self {
        SpecNode::Group(spec)
    }
}

/// A group of named spec nodes, kept in declaration order.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::field;
/// use paramcfg::domain::Spec;
///
/// let spec = Spec::new()
///     .field("stripe", Spec::new().field("blockListId", field::str()))
///     .field("truelayer", Spec::new().field("clientId", field::str()));
///
/// assert_eq!(
///     spec.leaf_paths("/payments"),
///     vec!["/payments/stripe/blockListId", "/payments/truelayer/clientId"]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spec {
    fields: Vec<(String, SpecNode)>,
}

impl Spec {
    /// Creates an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field or nested group, consuming and returning the spec.
    ///
    /// Declaring a name twice replaces the earlier node in place.
    pub fn field(mut self, name: impl Into<String>, node: impl Into<SpecNode>) -> Self {
        self.insert(name, node);
        self
    }

    /// Adds a field or nested group in place.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<SpecNode>) {
        let name = name.into();
        let node = node.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = node,
            None => self.fields.push((name, node)),
        }
    }

    /// Looks up a direct child by name.
    pub fn get(&self, name: &str) -> Option<&SpecNode> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, node)| node)
    }

    /// Iterates over direct children in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecNode)> {
        self.fields.iter().map(|(n, node)| (n.as_str(), node))
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the spec declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Lists the full path of every leaf under `root_prefix`, depth first in
    /// declaration order.
    pub fn leaf_paths(&self, root_prefix: &str) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths(&ParamPath::prefix(root_prefix), &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &ParamPath, paths: &mut Vec<String>) {
        for (name, node) in &self.fields {
            match node {
                SpecNode::Field(_) => paths.push(prefix.join(name).into_string()),
                SpecNode::Group(group) => group.collect_paths(&prefix.child(name), paths),
            }
        }
    }
}
