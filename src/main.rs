use mcp_smoke::{github_token, HttpGithubApi, SmokeConfig, SmokeTest};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    pretty_env_logger::init();

    if let Err(e) = run().await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = SmokeConfig::default();
    log::debug!("Using MCP file {}", config.mcp_file.display());

    let mut stdout = std::io::stdout().lock();

    let report = SmokeTest::new(&config)
        .run(HttpGithubApi::new, github_token::token_from_env(), &mut stdout)
        .await?;

    log::info!(
        "Smoke test passed for {}/{} as {}",
        report.tool.owner,
        report.tool.repo,
        report.login
    );
    Ok(())
}
