use anyhow::Result;
use ataxxer_engine::EngineConfig;
use ataxxer_proto::Driver;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig::default();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        strategy = %config.strategy,
        budget_ms = config.time_budget.as_millis() as u64,
        "ataxxer starting"
    );

    Driver::new(config).run_stdio()?;
    Ok(())
}
