use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use todobot::config::{Backend, Config};
use todobot::gateway::{ConsoleGateway, SharedNotifier};
use todobot::scheduler;
use todobot::store::{FileStore, RemoteStore, SharedStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let config = Config::parse();

    let store: SharedStore = match config.backend {
        Backend::File => {
            tracing::info!(path = %config.data_file.display(), "using file store");
            Arc::new(FileStore::new(config.data_file.clone()))
        }
        Backend::Remote => {
            tracing::info!(url = %config.store_url, "using remote store");
            Arc::new(RemoteStore::new(pocketbase_client::Client::new(
                &config.store_url,
            )))
        }
    };

    let gateway = Arc::new(ConsoleGateway::new(&config.user_id));
    let notifier: SharedNotifier = gateway.clone();

    let sweeps = scheduler::spawn_sweeps(
        store.clone(),
        notifier,
        Duration::from_secs(config.sweep_interval_secs),
    );
    tracing::info!(
        interval_secs = config.sweep_interval_secs,
        "sweeps scheduled"
    );

    gateway.run(store).await?;

    for handle in sweeps {
        handle.abort();
    }
    Ok(())
}
