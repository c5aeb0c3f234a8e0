use anyhow::Result;
use clap::Parser;
use dirlist::core::config::{Args, ServerConfig};
use dirlist::core::telemetry::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_filter);

    let config = ServerConfig::try_from(args)?;
    dirlist::server::run(config).await
}
