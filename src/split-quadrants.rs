use quadrant_tools::RunConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let summary = quadrant_tools::run(&RunConfig::default())?;

    tracing::info!("{} images processed", summary.processed.len());
    println!(
        "✅ All images processed. Output folder: {}",
        summary.run_folder.display()
    );

    Ok(())
}
