use anyhow::Result;
use fig_bridge::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
