use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable).
pub const BASE_DIR_ENV: &str = "DISCOS_BASE_DIR";

const CONFIG_FILE: &str = "discos.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Dónde vive `discos.toml`.
///
/// El servicio no guarda datos ni caché en disco, así que sólo hace falta
/// el directorio de configuración.
#[derive(Debug, Clone)]
pub struct DiscosPaths {
  pub config_dir: PathBuf,
}

impl DiscosPaths {
  /// Resuelve el directorio a partir de `DISCOS_BASE_DIR` o del directorio
  /// de configuración del sistema, y lo crea si falta.
  pub fn resolve() -> Result<Self, ConfigError> {
    Self::resolve_with(std::env::var_os(BASE_DIR_ENV).map(PathBuf::from))
  }

  /// Igual que `resolve`, con el directorio base ya leído.
  pub fn resolve_with(base_override: Option<PathBuf>) -> Result<Self, ConfigError> {
    let paths = match base_override {
      Some(base) => Self::under(base),
      None => {
        let dirs = ProjectDirs::from("com", "discos", "discos").ok_or(ConfigError::Directories)?;
        Self { config_dir: dirs.config_dir().to_path_buf() }
      }
    };

    std::fs::create_dir_all(&paths.config_dir)?;
    Ok(paths)
  }

  /// `<base>/config`, sin tocar el disco.
  pub fn under(base: PathBuf) -> Self {
    Self { config_dir: base.join("config") }
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn base_override_puts_config_under_base() {
    let tmp = tempdir().unwrap();

    let paths = DiscosPaths::resolve_with(Some(tmp.path().to_path_buf())).unwrap();

    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert_eq!(paths.config_file(), tmp.path().join("config").join("discos.toml"));
    assert!(paths.config_dir.is_dir());
  }

  #[test]
  fn under_does_not_create_anything() {
    let tmp = tempdir().unwrap();

    let paths = DiscosPaths::under(tmp.path().join("nested"));

    assert!(!paths.config_dir.exists());
  }
}
