use anyhow::Context;
use rxbench_core::compare::compare;
use rxbench_core::engine::default_engines;
use rxbench_core::report;
use rxbench_core::scenario::Scenario;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    // Default to warn so a skipped engine is visible without RUST_LOG set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_writer(std::io::stderr).with_env_filter(filter).try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let scenario = Scenario::default();
    let engines = default_engines();
    let results = compare(&engines, &scenario).context("engine comparison failed")?;
    report::print_report(&results);
    Ok(())
}
