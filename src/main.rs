use clap::Parser;
use counterdash::cli::Cli;
use counterdash::logging::init_tracing;
use counterdash::ui::runtime::run;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = match cli.load_store() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!(path = %store.path().display(), "Configuration loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    run(store, runtime.handle().clone())?;

    // Anything still in flight belongs to a view that no longer exists.
    runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}
