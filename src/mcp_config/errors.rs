use std::path::PathBuf;

/// Errors that can occur while validating the MCP configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(".mcp.json not found at: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Missing GitHub MCP fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Invalid GitHub MCP field values: {}", format_mismatches(.0))]
    InvalidValues(Vec<(String, String)>),
    #[error("GitHub MCP config requires non-empty 'owner' and 'repo'.")]
    MissingIdentifiers,
}

fn format_mismatches(mismatches: &[(String, String)]) -> String {
    mismatches
        .iter()
        .map(|(field, actual)| format!("{}={}", field, actual))
        .collect::<Vec<_>>()
        .join(", ")
}
