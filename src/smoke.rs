use std::io::Write;

use crate::config::SmokeConfig;
use crate::github_token::{self, GithubUserApi, TokenError};
use crate::mcp_config::{self, ConfigError, GithubToolConfig};

/// First failure of a smoke test run
#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Outcome of a run in which both checks passed
#[derive(Debug, Clone, PartialEq)]
pub struct SmokeReport {
    pub tool: GithubToolConfig,
    pub login: String,
}

/// The MCP config check followed by the token check
pub struct SmokeTest<'a> {
    config: &'a SmokeConfig,
}

impl<'a> SmokeTest<'a> {
    pub fn new(config: &'a SmokeConfig) -> Self {
        Self { config }
    }

    /// Run both checks in order, writing progress and success lines to `out`
    ///
    /// Stops at the first failure. `connect` builds the API client and is
    /// only called once the config check has passed; the token is not
    /// looked at before then either.
    pub async fn run<A, F>(
        &self,
        connect: F,
        token: Option<String>,
        out: &mut dyn Write,
    ) -> Result<SmokeReport, SmokeError>
    where
        A: GithubUserApi,
        F: FnOnce(&SmokeConfig) -> Result<A, TokenError>,
    {
        let tool = self.check_mcp_config(out)?;
        let api = connect(self.config)?;
        let login = self.check_github_token(&api, token, out).await?;
        writeln!(out, "✅ GitHub MCP smoke test passed.")?;

        Ok(SmokeReport { tool, login })
    }

    fn check_mcp_config(&self, out: &mut dyn Write) -> Result<GithubToolConfig, SmokeError> {
        let path = self.config.mcp_file.as_path();
        mcp_config::ensure_exists(path)?;

        writeln!(out, "Checking .mcp.json GitHub tool configuration...")?;
        log::info!("Validating {}", path.display());

        let record = mcp_config::load_tool_record(path)?;
        let tool = mcp_config::validate_tool_record(&record)?;

        writeln!(out, "✅ GitHub MCP config shape looks valid.")?;
        Ok(tool)
    }

    async fn check_github_token<A: GithubUserApi>(
        &self,
        api: &A,
        token: Option<String>,
        out: &mut dyn Write,
    ) -> Result<String, SmokeError> {
        let token = github_token::require_token(token)?;

        writeln!(out, "Checking GitHub token against API...")?;
        let login = github_token::verify_token(api, &token).await?;

        writeln!(out, "✅ GitHub token is valid for user: {}", login)?;
        Ok(login)
    }
}
