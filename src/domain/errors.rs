// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the parameter resolver.
//!
//! This module defines the error types that can occur when resolving a spec tree
//! against a parameter list, reading parameters from a source, or mapping a
//! resolved record onto a caller type. All errors use `thiserror`.

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// The main error type for parameter resolution.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use paramcfg::domain::errors::ConfigError;
///
/// let error = ConfigError::MissingFields {
///     paths: vec!["/service/email".to_string(), "/service/age".to_string()],
/// };
/// assert_eq!(
///     error.to_string(),
///     "Missing required parameters: /service/email, /service/age"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// One or more required leaves had no matching parameter.
    ///
    /// The paths are listed in declaration order, depth first.
    #[error("Missing required parameters: {}", .paths.join(", "))]
    MissingFields {
        /// Full parameter paths of every missing required leaf
        paths: Vec<String>,
    },

    /// A raw parameter value could not be converted to the declared type.
    #[error(
        "Failed to convert parameter value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The full parameter path being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred in a parameter source.
    #[error("Parameter source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a parameter document.
    #[error("Failed to parse parameters: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A resolved record could not be mapped onto the requested type.
    #[error("Failed to deserialize resolved configuration: {message}")]
    DeserializeError {
        /// The error message
        message: String,
    },

    /// No reader was registered for the requested type.
    #[error("No parameter reader registered for type {type_name}")]
    UnregisteredType {
        /// The Rust type name that was looked up
        type_name: &'static str,
    },

    /// The process-wide registry was already installed.
    #[error("A process-wide spec registry is already installed")]
    RegistryAlreadyInstalled,

    /// An I/O error occurred while reading parameters.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Returns the missing parameter paths if this is a `MissingFields` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramcfg::domain::errors::ConfigError;
    ///
    /// let error = ConfigError::MissingFields { paths: vec!["/a".to_string()] };
    /// assert_eq!(error.missing_paths(), Some(&["/a".to_string()][..]));
    /// ```
    pub fn missing_paths(&self) -> Option<&[String]> {
        match self {
            ConfigError::MissingFields { paths } => Some(paths),
            _ => None,
        }
    }
}

impl serde::de::Error for ConfigError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ConfigError::DeserializeError {
            message: msg.to_string(),
        }
    }
}

/// A specialized Result type for parameter operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
