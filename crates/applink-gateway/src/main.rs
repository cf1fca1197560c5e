use std::sync::Arc;

use applink_directory::{Directory, DirectoryService};
use applink_gateway::cli::{StorageBackendArg, CLI};
use applink_gateway::{App, AppState};
use applink_store::{InMemoryLinkStore, JsonFileDeletionLog, JsonFileLinkStore};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        data_dir = %config.data_dir.display(),
        storage_backend = %config.storage,
        "starting app-link gateway"
    );

    let directory: Arc<dyn Directory> = match config.storage {
        StorageBackendArg::JsonFile => Arc::new(DirectoryService::new(JsonFileLinkStore::new(
            &config.data_dir,
        ))),
        StorageBackendArg::InMemory => Arc::new(DirectoryService::new(InMemoryLinkStore::new())),
    };
    let deletion_log = JsonFileDeletionLog::new(&config.data_dir);
    let state = AppState::new(directory, deletion_log);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state)).await?;
    Ok(())
}
