// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file parameter source adapter.
//!
//! This module provides an adapter that reads parameters from a local YAML (or
//! JSON) file. Two layouts are understood:
//!
//! - a parameter store dump, `{Parameters: [{Name, Value, ...}, ...]}`, where
//!   every entry becomes one parameter and the other store fields are ignored;
//! - any other mapping, flattened into `/`-delimited paths, so that
//!   `service: {email: x}` becomes `/service/email = x`.

use crate::domain::{ConfigError, Param, ParamPath, Result};
use crate::ports::ParameterSource;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML parameter files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Top-level key of a parameter store dump.
const DUMP_KEY: &str = "Parameters";

#[derive(Deserialize)]
struct ParameterDump {
    #[serde(rename = "Parameters")]
    parameters: Vec<Param>,
}

/// YAML parser producing a flat parameter list.
///
/// # Examples
///
/// ```rust
/// use paramcfg::adapters::YamlParser;
///
/// let parser = YamlParser::new();
/// let params = parser.parse("service:\n  email: a@b.c\n  age: 22").unwrap();
/// assert_eq!(params[0].name(), "/service/email");
/// assert_eq!(params[1].value(), "22");
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Parses `content` into parameters, in document order.
    pub fn parse(&self, content: &str) -> Result<Vec<Param>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        if value.get(DUMP_KEY).is_some_and(serde_yaml::Value::is_sequence) {
            let dump: ParameterDump =
                serde_yaml::from_value(value).map_err(|e| ConfigError::ParseError {
                    message: format!("Invalid parameter dump: {}", e),
                    source: Some(Box::new(e)),
                })?;
            return Ok(dump.parameters);
        }

        let mut params = Vec::new();
        Self::flatten_yaml(&value, "", &mut params);
        Ok(params)
    }

    /// Flattens a YAML value into parameters with `/`-delimited names.
    fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, params: &mut Vec<Param>) {
        match value {
            serde_yaml::Value::Mapping(map) => {
                for (key, val) in map {
                    match key.as_str() {
                        Some(key_str) => {
                            let new_prefix =
                                format!("{}/{}", prefix, key_str.trim_start_matches('/'));
                            Self::flatten_yaml(val, &new_prefix, params);
                        }
                        None => tracing::warn!("Skipping non-string key under '{}'", prefix),
                    }
                }
            }
            serde_yaml::Value::String(s) => params.push(Param::new(prefix, s.as_str())),
            serde_yaml::Value::Number(n) => params.push(Param::new(prefix, n.to_string())),
            serde_yaml::Value::Bool(b) => params.push(Param::new(prefix, b.to_string())),
            serde_yaml::Value::Null => params.push(Param::new(prefix, "")),
            serde_yaml::Value::Sequence(_) => {
                tracing::warn!("Skipping sequence at '{}': lists are not parameters", prefix)
            }
            serde_yaml::Value::Tagged(tagged) => {
                tracing::warn!("Skipping tagged value {} at '{}'", tagged.tag, prefix)
            }
        }
    }
}

/// Parameter source adapter for YAML files.
///
/// # Examples
///
/// ```rust,no_run
/// use paramcfg::adapters::YamlFileAdapter;
///
/// // Load from a specific file
/// let adapter = YamlFileAdapter::from_file("/path/to/params.yaml").unwrap();
///
/// // Load from default OS location
/// let adapter = YamlFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Path to the YAML file
    file_path: PathBuf,
    /// Parsed parameters
    params: Vec<Param>,
    /// YAML parser
    parser: YamlParser,
}

impl YamlFileAdapter {
    /// Creates a new YAML file adapter from a specific file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        // Canonicalize path to prevent directory traversal attacks
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| Self::source_error("Invalid or inaccessible path", &file_path, e))?;

        let parser = YamlParser::new();
        let params = parser.parse(&Self::read_file(&canonical_path)?)?;
        tracing::debug!(
            "Loaded {} parameters from {}",
            params.len(),
            canonical_path.display()
        );

        Ok(Self {
            file_path: canonical_path,
            params,
            parser,
        })
    }

    /// Creates a new YAML file adapter from `params.yaml` in the default
    /// OS-appropriate configuration directory.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "params.yaml")
    }

    /// Creates a new YAML file adapter with a custom file name in the default location.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use paramcfg::adapters::YamlFileAdapter;
    ///
    /// let adapter = YamlFileAdapter::with_filename("myapp", "com.example", "dev.yaml").unwrap();
    /// ```
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path to the parameter file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Reads the file, refusing anything larger than the size cap.
    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .map_err(|e| Self::source_error("Failed to read file metadata", path, e))?;

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!(
                    "Parameter file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                source: None,
            });
        }

        fs::read_to_string(path)
            .map_err(|e| Self::source_error("Failed to read parameter file", path, e))
    }

    fn source_error(message: &str, path: &Path, err: std::io::Error) -> ConfigError {
        ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!(
                "{}: {}",
                message,
                path.file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("<unknown>")
            ),
            source: Some(Box::new(err)),
        }
    }
}

impl ParameterSource for YamlFileAdapter {
    fn name(&self) -> &str {
        "yaml-file"
    }

    fn parameters_by_path(&self, path: &ParamPath) -> Result<Vec<Param>> {
        Ok(self
            .params
            .iter()
            .filter(|p| path.contains(p.name()))
            .cloned()
            .collect())
    }

    fn reload(&mut self) -> Result<()> {
        self.params = self.parser.parse(&Self::read_file(&self.file_path)?)?;
        Ok(())
    }
}
