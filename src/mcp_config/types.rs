/// Fields the GitHub tool entry must carry, with the exact value each must hold
pub const REQUIRED_GITHUB_FIELDS: [(&str, &str); 3] = [
    ("type", "github"),
    ("tokenEnv", "GITHUB_TOKEN"),
    ("baseUrl", "https://api.github.com"),
];

/// Validated `tools.github` entry of `.mcp.json`
#[derive(Debug, Clone, PartialEq)]
pub struct GithubToolConfig {
    pub tool_type: String,
    pub token_env: String,
    pub base_url: String,
    pub owner: String,
    pub repo: String,
}
