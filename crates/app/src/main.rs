//! Imageer console binary.

use clap::Parser;
use imageer_application::context::ExecutionContext;
use imageer_application::ports::KeyValueStorage;
use imageer_console::{Cli, Console};
use imageer_infrastructure::{ConsoleConfig, MemoryStorage, runtime, to_json_stable};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.apply(ConsoleConfig::load()?);
    runtime::init_config(config.clone())?;

    let storage: Arc<dyn KeyValueStorage> = match runtime::open_storage(&config) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::warn!(error = %e, "preferences will not be persisted");
            Arc::new(MemoryStorage::new())
        }
    };
    runtime::init_storage(storage)?;

    let context = if cli.interactive {
        ExecutionContext::Interactive
    } else {
        ExecutionContext::ServerRender
    };
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        ?context,
        "starting imageer console"
    );

    let console = Console::from_runtime(config, cli.cookie.clone(), context)?;
    let output = console.execute(cli.command).await?;
    print!("{}", to_json_stable(&output)?);

    Ok(())
}
