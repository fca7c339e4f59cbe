//! FreeStuff API smoke check entry point.

mod app;
mod config;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the JSON result.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting freestuff check");

    let config = config::Config::from_env()?;
    tracing::info!(
        category = %config.category,
        timeout_secs = config.timeout.as_secs(),
        "configuration loaded"
    );

    let rt = tokio::runtime::Runtime::new()?;
    let games = rt.block_on(app::run(&config))?;

    println!("{}", serde_json::to_string_pretty(&games)?);
    Ok(())
}
