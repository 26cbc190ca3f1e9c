use clap::Parser;
use coolify_mcp::config::CoolifyConfig;
use coolify_mcp::constants::api::DEFAULT_BASE_URL;
use coolify_mcp::services::logger::{LogLevel, Logger};

#[derive(Parser)]
#[command(
    name = "coolify-mcp",
    version,
    about = "MCP server exposing the Coolify REST API over stdio"
)]
struct Cli {
    /// Coolify instance URL
    #[arg(long, env = "COOLIFY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// API token with access to the instance
    #[arg(long, env = "COOLIFY_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// error, warn, info or debug
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: LogLevel,
}

async fn run(cli: Cli) -> Result<(), String> {
    let access_token = cli
        .access_token
        .ok_or_else(|| "COOLIFY_ACCESS_TOKEN environment variable is required".to_string())?;
    let config = CoolifyConfig::new(cli.base_url, access_token).map_err(|err| err.to_string())?;
    let logger = Logger::with_level("coolify", cli.log_level);
    coolify_mcp::mcp::server::run_stdio(config, logger)
        .await
        .map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("coolify-mcp: {}", err);
        std::process::exit(1);
    }
}
