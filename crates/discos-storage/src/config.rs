use discos_config::{ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SECTION: &str = "catalog";

/// Sección `[catalog]` de discos.toml.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CatalogConfig {
  /// Directorio con `artists.json` y `records.json`. Sin él se usa la semilla incluida.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub seed_dir: Option<PathBuf>,
}

impl CatalogConfig {
  /// Carga la sección (o los valores por defecto) y la vuelve a escribir
  /// para que el usuario tenga un fichero que editar.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use discos_config::{DiscosPaths, TomlConfigBackend};
  use tempfile::tempdir;

  #[test]
  fn load_writes_back_defaults_then_reads_edits() {
    let tmp = tempdir().unwrap();
    let paths = DiscosPaths::under(tmp.path().to_path_buf());
    std::fs::create_dir_all(&paths.config_dir).unwrap();
    let backend = TomlConfigBackend::new(paths.clone());

    let cfg = CatalogConfig::load_from(&backend).unwrap();
    assert_eq!(cfg, CatalogConfig::default());
    assert!(paths.config_file().exists());

    let edited = CatalogConfig { seed_dir: Some(tmp.path().join("seed")) };
    edited.save_to(&backend).unwrap();

    assert_eq!(CatalogConfig::load_from(&backend).unwrap(), edited);
  }
}
