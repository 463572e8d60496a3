//! Dog API MCP server: stdio entry point.

use anyhow::Context as _;
use clap::Parser;
use dogmcp_api::adapter::DogApiAdapter;
use dogmcp_api::client::DogApiClient;
use dogmcp_api::config::{DEFAULT_BASE_URL, DogApiConfig};
use dogmcp_server::server::DogApiServer;
use rmcp::ServiceExt as _;
use rmcp::transport::stdio;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "dogmcp-server",
    version,
    about = "MCP server exposing The Dog API as tools and resources over stdio"
)]
struct Cli {
    /// Base URL of the upstream Dog API.
    #[arg(long, env = "DOG_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// API key sent as `x-api-key`. Optional; some upstream features are
    /// rate-limited without one.
    #[arg(long, env = "DOG_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Per-request timeout for upstream calls, in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the MCP protocol; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(base_url = %cli.base_url, "starting Dog API MCP server");
    if cli.api_key.is_none() {
        warn!("DOG_API_KEY not set; some features may be limited");
        warn!("get a free API key at https://thedogapi.com");
    }

    let mut config = DogApiConfig::new(cli.base_url, cli.api_key);
    config.timeout = Duration::from_secs(cli.timeout_secs);

    let client = DogApiClient::new(config).context("build upstream client")?;
    let service = DogApiServer::new(DogApiAdapter::new(client))
        .serve(stdio())
        .await
        .context("start MCP server on stdio")?;

    tokio::select! {
        quit = service.waiting() => {
            quit.context("server terminated")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, shutting down");
        }
    }

    info!("Dog API MCP server stopped");
    Ok(())
}
