use std::path::Path;

use tracing::{error, info, warn};

use realestate_graph::driver::neo4j::Neo4jDriver;
use realestate_graph::driver::GraphDriver;
use realestate_graph::pipeline::error_chain;
use realestate_graph::{IngestConfig, Ingestor};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // ── Tracing ───────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("realestate_graph=info".parse()?),
        )
        .init();

    // ── Config ────────────────────────────────────────────────────────────────
    let config = IngestConfig::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;

    info!(
        uri      = %config.neo4j_uri,
        database = %config.neo4j_database,
        input    = %config.input_path,
        "configuration loaded"
    );

    // ── Graph ─────────────────────────────────────────────────────────────────
    let driver = Neo4jDriver::connect(&config).await.map_err(|e| {
        error!("Failed to connect to Neo4j: {}", e);
        e
    })?;

    let outcome = match driver.ping().await {
        Ok(()) => {
            Ingestor::new(&driver)
                .run_file(Path::new(&config.input_path))
                .await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = driver.close().await {
        warn!("Failed to close Neo4j driver: {}", e);
    }

    // ── Report ────────────────────────────────────────────────────────────────
    let report = outcome.map_err(|e| {
        error!("Ingestion aborted: {}", error_chain(&e));
        e
    })?;

    info!(
        total      = report.total,
        loaded     = report.loaded,
        failed     = report.failed(),
        properties = report.properties_created,
        elapsed_ms = (report.finished_at - report.started_at).num_milliseconds(),
        "ingestion finished"
    );
    Ok(())
}
