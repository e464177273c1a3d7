//! Config source loading.
//!
//! A source is a JSON or YAML file whose top-level `sites` key holds a list of
//! entries. Entries are returned as generic values; typing them is left to the
//! dispatcher so that one bad entry cannot reject its whole file.

use std::path::Path;

use serde_json::Value;

use crate::config::{JSON_EXTENSIONS, SITES_KEY, YAML_EXTENSIONS};
use crate::error_handling::ConfigLoadError;

/// Document format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Picks the format from the extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoadError::UnsupportedFormat` for any other extension,
    /// including none.
    pub fn from_path(path: &Path) -> Result<Self, ConfigLoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if JSON_EXTENSIONS.contains(&extension.as_str()) {
            Ok(SourceFormat::Json)
        } else if YAML_EXTENSIONS.contains(&extension.as_str()) {
            Ok(SourceFormat::Yaml)
        } else {
            Err(ConfigLoadError::UnsupportedFormat(path.display().to_string()))
        }
    }
}

/// Reads `path` and returns its site entries in document order.
///
/// The extension is checked before the file is opened.
///
/// # Errors
///
/// Returns `ConfigLoadError` if the extension is unsupported, the file cannot
/// be read, the document does not parse, or `sites` is absent or not a list.
pub async fn load_source(path: &Path) -> Result<Vec<Value>, ConfigLoadError> {
    let format = SourceFormat::from_path(path)?;
    let contents = tokio::fs::read_to_string(path).await?;
    parse_document(&contents, format)
}

/// Parses document text and extracts the `sites` list.
pub fn parse_document(contents: &str, format: SourceFormat) -> Result<Vec<Value>, ConfigLoadError> {
    let document: Value = match format {
        SourceFormat::Json => serde_json::from_str(contents)?,
        SourceFormat::Yaml => parse_yaml(contents)?,
    };

    let Value::Object(mut root) = document else {
        return Err(ConfigLoadError::MissingSites);
    };
    match root.remove(SITES_KEY) {
        Some(Value::Array(sites)) => Ok(sites),
        Some(_) => Err(ConfigLoadError::SitesNotSequence),
        None => Err(ConfigLoadError::MissingSites),
    }
}

/// Parses YAML with `<<` merge keys applied, then converts to a JSON value.
fn parse_yaml(contents: &str) -> Result<Value, ConfigLoadError> {
    let mut document: serde_yaml::Value = serde_yaml::from_str(contents)?;
    document.apply_merge()?;
    serde_json::to_value(document).map_err(ConfigLoadError::YamlValue)
}
