/// Workflow association store bootstrap
///
/// Opens the configured database and creates the workflow, parameter and
/// association tables if they are missing. Run once per deployment before
/// the identity server starts dispatching events.

use workflow_assoc::{config::Config, open_stores};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    // Defaults to sqlite://workflow_assoc.db unless overridden by env
    let config = Config::default();

    let stores = open_stores(&config).await?;
    stores.database.pool().close().await;

    tracing::info!("Workflow database ready at {}", config.database.url);
    Ok(())
}
