use crate::config::TOKEN_ENV;

/// Errors that can occur while verifying the GitHub token
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("{env} is not set.\n   Export it and retry: export {env}=...", env = TOKEN_ENV)]
    MissingToken,
    #[error("GitHub API request failed with HTTP {status}.")]
    RequestFailed { status: u16 },
    #[error("{env} is invalid (Bad credentials).", env = TOKEN_ENV)]
    BadCredentials,
    #[error("GitHub API auth failed: {message}")]
    AuthFailed { message: String },
    #[error("GitHub API request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid GitHub API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
