//! Validation of the GitHub tool entry in `.mcp.json`
//!
//! The document must contain `tools.github` with the fixed `type`, `tokenEnv`
//! and `baseUrl` values plus non-empty `owner` and `repo` identifiers. Missing
//! intermediate objects are treated as empty, so a document without a
//! `tools` key reports every required field as missing rather than failing
//! to parse.

use serde_json::{Map, Value};
use std::path::Path;

mod errors;
mod types;

pub use errors::ConfigError;
pub use types::{GithubToolConfig, REQUIRED_GITHUB_FIELDS};

/// Fail with [`ConfigError::NotFound`] unless the configuration file exists
pub fn ensure_exists(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ConfigError::NotFound(path.to_path_buf()))
    }
}

/// Read `path` and return the `tools.github` object it contains
pub fn load_tool_record(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    ensure_exists(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", content.len(), path.display());

    let document: Value =
        serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(github_tool_record(&document))
}

/// Extract `tools.github`, treating any absent or non-object level as empty
pub fn github_tool_record(document: &Value) -> Map<String, Value> {
    document
        .get("tools")
        .and_then(|tools| tools.get("github"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Check a loaded `tools.github` record against the expected shape
pub fn validate_tool_record(record: &Map<String, Value>) -> Result<GithubToolConfig, ConfigError> {
    let missing: Vec<String> = REQUIRED_GITHUB_FIELDS
        .iter()
        .filter(|(field, _)| !record.contains_key(*field))
        .map(|(field, _)| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::MissingFields(missing));
    }

    let mismatched: Vec<(String, String)> = REQUIRED_GITHUB_FIELDS
        .iter()
        .filter_map(|(field, expected)| match record.get(*field) {
            Some(Value::String(actual)) if actual == expected => None,
            actual => Some((field.to_string(), render_value(actual))),
        })
        .collect();
    if !mismatched.is_empty() {
        return Err(ConfigError::InvalidValues(mismatched));
    }

    let owner = non_empty_string(record, "owner");
    let repo = non_empty_string(record, "repo");
    let (Some(owner), Some(repo)) = (owner, repo) else {
        return Err(ConfigError::MissingIdentifiers);
    };

    log::debug!("GitHub MCP tool targets {}/{}", owner, repo);

    let [(_, tool_type), (_, token_env), (_, base_url)] = REQUIRED_GITHUB_FIELDS;
    Ok(GithubToolConfig {
        tool_type: tool_type.to_string(),
        token_env: token_env.to_string(),
        base_url: base_url.to_string(),
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

fn non_empty_string<'a>(record: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Render an actual field value for a mismatch report: strings quoted, the rest as JSON
fn render_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => format!("'{}'", s),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}
