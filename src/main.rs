use global::Global;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod aggregator;
mod config;
mod global;
mod http;
mod models;
mod providers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(&config.level),
        )
        .init();

    tracing::info!("starting sendai info api");

    let global = Global::init(config)?;

    http::run(global).await?;

    tracing::info!("shut down cleanly");

    Ok(())
}
