
use mcp_smoke::github_token::{verify_token, GithubUserApi};
use mcp_smoke::{HttpGithubApi, SmokeConfig, SmokeTest, TokenError};
use test_utils::{serve_once, McpFile, VALID_MCP_JSON};

fn config_for(base_url: &str) -> SmokeConfig {
    SmokeConfig {
        api_base_url: base_url.to_string(),
        ..SmokeConfig::default()
    }
}

#[tokio::test]
async fn test_fetch_user_sends_github_headers() {
    let (base_url, server) = serve_once(200, r#"{"login": "alice"}"#).await;
    let api = HttpGithubApi::new(&config_for(&base_url)).unwrap();

    let response = api.fetch_user("ghp_test").await.unwrap();
    let request = server.await.unwrap().to_lowercase();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"login": "alice"}"#);
    assert!(request.starts_with("get /user http/1.1\r\n"), "request: {}", request);
    assert!(request.contains("authorization: bearer ghp_test\r\n"));
    assert!(request.contains("accept: application/vnd.github+json\r\n"));
    assert!(request.contains("user-agent: mcp-smoke/"));
}

#[tokio::test]
async fn test_error_status_is_returned_not_raised() {
    let (base_url, server) = serve_once(401, r#"{"message": "Bad credentials"}"#).await;
    let api = HttpGithubApi::new(&config_for(&base_url)).unwrap();

    let response = api.fetch_user("ghp_revoked").await.unwrap();
    server.await.unwrap();

    assert_eq!(response.status, 401);
    assert_eq!(response.body, r#"{"message": "Bad credentials"}"#);
}

#[tokio::test]
async fn test_unreachable_api_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let api = HttpGithubApi::new(&config_for(&base_url)).unwrap();

    let err = verify_token(&api, "ghp_test").await.unwrap_err();

    assert!(matches!(err, TokenError::Http(_)));
    assert!(err.to_string().starts_with("GitHub API request failed: "));
}

#[tokio::test]
async fn test_bad_credentials_over_http() {
    let (base_url, server) = serve_once(401, r#"{"message": "Bad credentials"}"#).await;
    let api = HttpGithubApi::new(&config_for(&base_url)).unwrap();

    let err = verify_token(&api, "ghp_revoked").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, TokenError::BadCredentials));
}

#[tokio::test]
async fn test_not_found_over_http_surfaces_message() {
    let (base_url, server) = serve_once(404, r#"{"message": "Not Found"}"#).await;
    let api = HttpGithubApi::new(&config_for(&base_url)).unwrap();

    let err = verify_token(&api, "ghp_test").await.unwrap_err();
    server.await.unwrap();

    assert_eq!(err.to_string(), "GitHub API auth failed: Not Found");
}

#[tokio::test]
async fn test_end_to_end_against_local_api() {
    let mcp_file = McpFile::with_contents(VALID_MCP_JSON);
    let (base_url, server) = serve_once(200, r#"{"login": "alice"}"#).await;
    let config = SmokeConfig {
        api_base_url: base_url,
        ..mcp_file.config()
    };
    let mut out: Vec<u8> = Vec::new();

    let report = SmokeTest::new(&config)
        .run(HttpGithubApi::new, Some("ghp_test".to_string()), &mut out)
        .await
        .expect("Smoke test should pass");
    server.await.unwrap();

    let out = String::from_utf8(out).unwrap();
    let config_line = out.find("✅ GitHub MCP config shape looks valid.").unwrap();
    let token_line = out.find("✅ GitHub token is valid for user: alice").unwrap();
    assert!(config_line < token_line);
    assert_eq!(report.login, "alice");
}
