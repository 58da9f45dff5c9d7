use discos_config::{ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};

const SECTION: &str = "server";

/// Sección `[server]` de discos.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  /// Serve the GraphiQL console on `GET /graphql`.
  pub graphiql: bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig { host: "0.0.0.0".to_string(), port: 5000, graphiql: true }
  }
}

impl ServerConfig {
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}
