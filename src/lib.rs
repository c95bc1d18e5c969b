pub mod config;
pub mod github_token;
pub mod mcp_config;
pub mod smoke;

pub use config::SmokeConfig;
pub use github_token::{GithubUserApi, HttpGithubApi, TokenError, UserResponse};
pub use mcp_config::{ConfigError, GithubToolConfig};
pub use smoke::{SmokeError, SmokeReport, SmokeTest};
