use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use todo_server::{config::Config, logging, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    logging::init(config.log_format);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "listening");

    todo_server::run(listener, AppState::default()).await?;
    info!("shutdown complete");
    Ok(())
}
