mod config;
mod infrastructure;

use std::sync::Arc;

use discos_config::{DiscosPaths, TomlConfigBackend};
use discos_graphql::build_schema;
use discos_storage::{CatalogConfig, InMemoryCatalog};
use tokio::net::TcpListener;
use tracing::info;

pub use config::ServerConfig;
pub use infrastructure::http::{router, GRAPHQL_PATH};
pub use infrastructure::telemetry::init_tracing;

/// Loads configuration, seeds the catalog and serves `/graphql` until the process ends.
pub async fn run() -> anyhow::Result<()> {
  // --- Configuration ---
  // Missing sections are written back with their defaults on first start.
  let paths = DiscosPaths::resolve()?;
  info!(config_file = %paths.config_file().display(), "using configuration");
  let backend = TomlConfigBackend::new(paths);
  let server = ServerConfig::load_from(&backend)?;
  let catalog = CatalogConfig::load_from(&backend)?;

  // --- Wiring ---
  // The store lives for the whole process; nothing is persisted back.
  let store = InMemoryCatalog::new_from_config(&catalog)?;
  let schema = build_schema(Arc::new(store));
  let app = router(schema, server.graphiql);

  let listener = TcpListener::bind(server.bind_address()).await?;
  info!(graphiql = server.graphiql, "server running on {}", listener.local_addr()?);

  axum::serve(listener, app).await?;

  Ok(())
}
