use std::path::PathBuf;

/// Name of the MCP configuration file checked by the smoke test
pub const MCP_FILE_NAME: &str = ".mcp.json";

/// Environment variable holding the GitHub credential
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Default GitHub REST API base URL
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Runtime settings for the smoke test
#[derive(Clone, Debug)]
pub struct SmokeConfig {
    /// Path to the MCP configuration file
    pub mcp_file: PathBuf,
    /// Base URL of the GitHub API the token is checked against
    pub api_base_url: String,
    /// User-Agent sent with the API request (GitHub rejects requests without one)
    pub user_agent: String,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        let root_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            mcp_file: root_dir.join(MCP_FILE_NAME),
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            user_agent: format!("mcp-smoke/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SmokeConfig {
    /// Settings pointing at a specific MCP file, keeping the other defaults
    pub fn with_mcp_file(mcp_file: impl Into<PathBuf>) -> Self {
        Self {
            mcp_file: mcp_file.into(),
            ..Self::default()
        }
    }
}
