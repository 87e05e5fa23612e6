// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter entries and parameter paths.
//!
//! A [`Param`] is one name/value entry read from a parameter store. A
//! [`ParamPath`] is a newtype over a forward-slash-delimited path that knows how
//! to normalize itself into a prefix and how to extend itself with a segment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The path separator used by parameter stores.
pub const SEPARATOR: char = '/';

/// A single entry from a parameter store.
///
/// Only the name and the raw value matter; any other metadata a store attaches
/// (version, timestamps, ARN, type) is dropped during deserialization. Both the
/// lowercase field names and the store's capitalized `Name`/`Value` are accepted.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::Param;
///
/// let param = Param::new("/service/email", "winning@life.com");
/// assert_eq!(param.name(), "/service/email");
/// assert_eq!(param.value(), "winning@life.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    #[serde(alias = "Name")]
    name: String,
    #[serde(alias = "Value")]
    value: String,
}

impl Param {
    /// Creates a new parameter entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the full path of this parameter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw value of this parameter.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Splits the parameter into its name and value.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Param {
    fn from((name, value): (N, V)) -> Self {
        Param::new(name, value)
    }
}

/// A type-safe wrapper for parameter paths.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::ParamPath;
///
/// let prefix = ParamPath::prefix("/service/trevoror");
/// assert_eq!(prefix.as_str(), "/service/trevoror/");
///
/// let leaf = prefix.join("email");
/// assert_eq!(leaf.as_str(), "/service/trevoror/email");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamPath(String);

impl ParamPath {
    /// Creates a path from a string without normalizing it.
    pub fn new(path: String) -> Self {
        ParamPath(path)
    }

    /// Creates a prefix path ending with exactly one separator.
    ///
    /// Trailing separators are collapsed, so `/svc`, `/svc/` and `/svc//` all
    /// yield `/svc/`. An empty string yields the root prefix `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramcfg::domain::ParamPath;
    ///
    /// assert_eq!(ParamPath::prefix("/svc").as_str(), "/svc/");
    /// assert_eq!(ParamPath::prefix("/svc//").as_str(), "/svc/");
    /// assert_eq!(ParamPath::prefix("").as_str(), "/");
    /// ```
    pub fn prefix(path: &str) -> Self {
        let mut prefix = path.trim_end_matches(SEPARATOR).to_string();
        prefix.push(SEPARATOR);
        ParamPath(prefix)
    }

    /// The root prefix `/`.
    pub fn root() -> Self {
        ParamPath(SEPARATOR.to_string())
    }

    /// Appends a leaf segment to this prefix, producing a full leaf path.
    ///
    /// `self` is expected to be a prefix (see [`ParamPath::prefix`]).
    pub fn join(&self, segment: &str) -> ParamPath {
        ParamPath(format!("{}{}", self.0, segment))
    }

    /// Appends a group segment to this prefix, producing a nested prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramcfg::domain::ParamPath;
    ///
    /// let nested = ParamPath::prefix("/payments").child("stripe");
    /// assert_eq!(nested.as_str(), "/payments/stripe/");
    /// ```
    pub fn child(&self, segment: &str) -> ParamPath {
        ParamPath(format!("{}{}{}", self.0, segment, SEPARATOR))
    }

    /// Returns true if `path` lies under this prefix.
    pub fn contains(&self, path: &str) -> bool {
        path.starts_with(self.0.as_str())
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the path into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for ParamPath {
    fn default() -> Self {
        Self::root()
    }
}

impl From<&str> for ParamPath {
    fn from(s: &str) -> Self {
        ParamPath(s.to_string())
    }
}

impl From<String> for ParamPath {
    fn from(s: String) -> Self {
        ParamPath(s)
    }
}

impl From<ParamPath> for String {
    fn from(path: ParamPath) -> Self {
        path.0
    }
}

impl AsRef<str> for ParamPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
