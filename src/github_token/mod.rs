//! Verification of the `GITHUB_TOKEN` credential against `GET /user`

use reqwest::Client;
use url::Url;

use crate::config::{SmokeConfig, TOKEN_ENV};

mod errors;
mod response;

pub use errors::TokenError;
pub use response::{interpret_user_response, UserResponse, BAD_CREDENTIALS_MESSAGE};

/// Media type requested from the GitHub REST API
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Transport for the authenticated-user lookup
#[async_trait::async_trait]
pub trait GithubUserApi: Send + Sync {
    /// Fetch `/user` with the given bearer token, returning status and body as-is
    async fn fetch_user(&self, token: &str) -> Result<UserResponse, TokenError>;
}

#[async_trait::async_trait]
impl<T: GithubUserApi + ?Sized> GithubUserApi for &T {
    async fn fetch_user(&self, token: &str) -> Result<UserResponse, TokenError> {
        (**self).fetch_user(token).await
    }
}

/// reqwest-backed [`GithubUserApi`]
pub struct HttpGithubApi {
    http_client: Client,
    user_url: Url,
}

impl std::fmt::Debug for HttpGithubApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGithubApi")
            .field("http_client", &"<http_client>")
            .field("user_url", &self.user_url.as_str())
            .finish()
    }
}

impl HttpGithubApi {
    /// Build a client for the API configured in `config`
    ///
    /// No request timeout is set; reqwest's defaults apply.
    pub fn new(config: &SmokeConfig) -> Result<Self, TokenError> {
        let http_client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http_client,
            user_url: user_url(&config.api_base_url)?,
        })
    }

    pub fn user_url(&self) -> &Url {
        &self.user_url
    }
}

#[async_trait::async_trait]
impl GithubUserApi for HttpGithubApi {
    async fn fetch_user(&self, token: &str) -> Result<UserResponse, TokenError> {
        log::debug!("GET {}", self.user_url);

        let response = self
            .http_client
            .get(self.user_url.clone())
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(UserResponse { status, body })
    }
}

/// Resolve `{base}/user`, keeping any path prefix on the base URL
pub fn user_url(api_base_url: &str) -> Result<Url, TokenError> {
    let base = Url::parse(&format!("{}/", api_base_url.trim_end_matches('/')))?;
    Ok(base.join("user")?)
}

/// Accept the raw `GITHUB_TOKEN` value, rejecting unset or empty tokens
pub fn require_token(value: Option<String>) -> Result<String, TokenError> {
    match value {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(TokenError::MissingToken),
    }
}

/// Read `GITHUB_TOKEN` from the process environment
pub fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV).ok()
}

/// Call `/user` with `token` and return the authenticated login
pub async fn verify_token<A>(api: &A, token: &str) -> Result<String, TokenError>
where
    A: GithubUserApi + ?Sized,
{
    let response = api.fetch_user(token).await?;
    if response.is_success() {
        log::debug!("GitHub API answered HTTP {}", response.status);
    } else {
        log::info!("GitHub API answered HTTP {}", response.status);
    }

    let login = interpret_user_response(&response)?;
    log::info!("GitHub token authenticated as {}", login);
    Ok(login)
}
