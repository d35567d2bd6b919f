use clap::Parser;
use fruit_compute::application::engine::ComputeEngine;
use fruit_compute::domain::ports::PriceStoreRef;
use fruit_compute::infrastructure::in_memory::InMemoryPriceStore;
use fruit_compute::infrastructure::registry::ENGINE_SERVICE;
use fruit_compute::interfaces::server;
use miette::{IntoDiagnostic, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address the engine listens on
    #[arg(long, default_value = "127.0.0.1:1099")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let store: PriceStoreRef = Arc::new(InMemoryPriceStore::new());
    let engine = Arc::new(ComputeEngine::new(store));

    let listener = TcpListener::bind(cli.listen).await.into_diagnostic()?;
    let addr = listener.local_addr().into_diagnostic()?;

    // Discovery lives with the callers: bridges seed their own
    // ServiceRegistry with this address under ENGINE_SERVICE. The engine
    // only announces its endpoint.
    info!(%addr, service = ENGINE_SERVICE, "engine listening");

    server::serve(listener, engine).await.into_diagnostic()?;
    Ok(())
}
