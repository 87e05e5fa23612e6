// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field descriptors and the primitive parsers behind them.
//!
//! A [`FieldDescriptor`] declares how one leaf of a spec tree is resolved: which
//! primitive parser turns its raw string into a [`ConfigValue`], whether the leaf
//! may be absent, and what to use when it is.

use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};

/// Parses a raw string as a string. This is the identity.
pub fn parse_string(raw: &str) -> String {
    raw.to_string()
}

/// Parses the leading integer of a raw string.
///
/// Leading whitespace is skipped, an optional `+` or `-` sign is accepted, and
/// the run of ASCII digits that follows is the value; anything after it is
/// ignored. Input with no leading digits, or a value outside the `i64` range,
/// is an error carrying `key`.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::field::parse_integer;
///
/// assert_eq!(parse_integer("/svc/age", "22").unwrap(), 22);
/// assert_eq!(parse_integer("/svc/age", "  -7 years").unwrap(), -7);
/// assert!(parse_integer("/svc/age", "twenty").is_err());
/// ```
pub fn parse_integer(key: &str, raw: &str) -> Result<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    trimmed[..sign_len + digits_len]
        .parse::<i64>()
        .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
}

/// Parses a raw string as a boolean.
///
/// `FALSE`, `NO` and `0` (in any case) are `false`. Every other string,
/// including the empty string, is `true`.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::field::parse_boolean;
///
/// assert!(!parse_boolean("No"));
/// assert!(!parse_boolean("0"));
/// assert!(parse_boolean("yes"));
/// assert!(parse_boolean(""));
/// ```
pub fn parse_boolean(raw: &str) -> bool {
    !["FALSE", "NO", "0"]
        .iter()
        .any(|falsy| raw.eq_ignore_ascii_case(falsy))
}

/// The primitive type a leaf parses into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Raw value kept as-is.
    String,
    /// Leading integer, see [`parse_integer`].
    Integer,
    /// Truthy unless falsy, see [`parse_boolean`].
    Boolean,
}

impl FieldKind {
    /// Parses `raw` into a value of this kind. `key` names the parameter in errors.
    pub fn parse(self, key: &str, raw: &str) -> Result<ConfigValue> {
        Ok(match self {
            FieldKind::String => ConfigValue::String(parse_string(raw)),
            FieldKind::Integer => ConfigValue::Integer(parse_integer(key, raw)?),
            FieldKind::Boolean => ConfigValue::Boolean(parse_boolean(raw)),
        })
    }

    /// The name of the kind, used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        }
    }
}

/// Options accepted by the field factories.
///
/// `T` is the Rust type of the field, so a default always matches its parser.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::field::{self, FieldOptions};
///
/// let port = field::integer(FieldOptions::with_default(8080));
/// assert!(port.default_value().is_some());
///
/// let nickname = field::string(FieldOptions::optional());
/// assert!(nickname.is_optional());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldOptions<T> {
    /// Whether a missing parameter resolves to nothing instead of an error.
    pub optional: bool,
    /// Value used when the parameter is missing. Takes precedence over `optional`.
    pub default: Option<T>,
}

impl<T> FieldOptions<T> {
    /// A required field: no default and not optional.
    pub fn required() -> Self {
        Self {
            optional: false,
            default: None,
        }
    }

    /// An optional field with no default.
    pub fn optional() -> Self {
        Self {
            optional: true,
            default: None,
        }
    }

    /// A field that falls back to `value` when missing.
    pub fn with_default(value: T) -> Self {
        Self {
            optional: false,
            default: Some(value),
        }
    }
}

impl<T> Default for FieldOptions<T> {
    fn default() -> Self {
        Self::required()
    }
}

/// How a missing parameter is handled for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// Reported as missing.
    Required,
    /// Resolves to nothing.
    Optional,
    /// Resolves to the field's default.
    Defaulted,
}

/// The declared contract for one leaf.
///
/// Constructing a descriptor never fails; it is plain data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    kind: FieldKind,
    optional: bool,
    default: Option<ConfigValue>,
}

impl FieldDescriptor {
    fn from_options<T: Into<ConfigValue>>(kind: FieldKind, options: FieldOptions<T>) -> Self {
        Self {
            kind,
            optional: options.optional,
            default: options.default.map(Into::into),
        }
    }

    /// The primitive kind of this field.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether this field was declared optional.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The default value, if any.
    pub fn default_value(&self) -> Option<&ConfigValue> {
        self.default.as_ref()
    }

    /// How a missing parameter is handled. A default wins over the optional flag.
    pub fn presence(&self) -> Presence {
        match (&self.default, self.optional) {
            (Some(_), _) => Presence::Defaulted,
            (None, true) => Presence::Optional,
            (None, false) => Presence::Required,
        }
    }

    /// Marks the field optional.
    pub fn into_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Parses a raw value with this field's parser.
    pub fn parse(&self, key: &str, raw: &str) -> Result<ConfigValue> {
        self.kind.parse(key, raw)
    }
}

/// Declares a string leaf.
pub fn string(options: FieldOptions<String>) -> FieldDescriptor {
    FieldDescriptor::from_options(FieldKind::String, options)
}

/// Declares an integer leaf.
pub fn integer(options: FieldOptions<i64>) -> FieldDescriptor {
    FieldDescriptor::from_options(FieldKind::Integer, options)
}

/// Declares a boolean leaf.
pub fn boolean(options: FieldOptions<bool>) -> FieldDescriptor {
    FieldDescriptor::from_options(FieldKind::Boolean, options)
}

/// Shorthand for a required string leaf.
pub fn str() -> FieldDescriptor {
    string(FieldOptions::required())
}

/// Shorthand for a required integer leaf.
pub fn int() -> FieldDescriptor {
    integer(FieldOptions::required())
}

/// Shorthand for a required boolean leaf.
pub fn bool() -> FieldDescriptor {
    boolean(FieldOptions::required())
}
