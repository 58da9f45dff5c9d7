use std::fs;
use std::path::{Path, PathBuf};

use discos_core::domain::{Artist, Record};
use serde::de::DeserializeOwned;
use thiserror::Error;

const BUNDLED_ARTISTS: &str = include_str!("../seed/artists.json");
const BUNDLED_RECORDS: &str = include_str!("../seed/records.json");

pub const ARTISTS_FILE: &str = "artists.json";
pub const RECORDS_FILE: &str = "records.json";

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("cannot read seed file {path:?}: {source}")]
  Io { path: PathBuf, source: std::io::Error },
  #[error("invalid seed data in {origin}: {source}")]
  Json { origin: String, source: serde_json::Error },
  #[error("{collection} seed entry at index {position} has id {found}, expected {expected}")]
  IdOutOfSequence { collection: &'static str, position: usize, found: i32, expected: i32 },
}

/// Contenido inicial del catálogo.
///
/// Se carga al arrancar y se pierde al terminar el proceso: las inserciones
/// posteriores nunca se escriben de vuelta. Los ids de cada colección deben
/// ser `1..=n` en orden, porque la siguiente inserción recibe `n + 1`.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
  pub artists: Vec<Artist>,
  pub records: Vec<Record>,
}

impl SeedData {
  /// Semilla incluida en el binario.
  pub fn bundled() -> Result<Self, SeedError> {
    Self {
      artists: parse(BUNDLED_ARTISTS, "bundled artists.json")?,
      records: parse(BUNDLED_RECORDS, "bundled records.json")?,
    }
    .checked()
  }

  /// Lee `artists.json` y `records.json` de un directorio.
  pub fn from_dir(dir: &Path) -> Result<Self, SeedError> {
    Self { artists: read(&dir.join(ARTISTS_FILE))?, records: read(&dir.join(RECORDS_FILE))? }.checked()
  }

  fn checked(self) -> Result<Self, SeedError> {
    check_sequence("artists", self.artists.iter().map(|a| a.id.get()))?;
    check_sequence("records", self.records.iter().map(|r| r.id.get()))?;
    Ok(self)
  }
}

fn check_sequence(collection: &'static str, ids: impl Iterator<Item = i32>) -> Result<(), SeedError> {
  for (position, found) in ids.enumerate() {
    let expected = position as i32 + 1;
    if found != expected {
      return Err(SeedError::IdOutOfSequence { collection, position, found, expected });
    }
  }
  Ok(())
}

fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SeedError> {
  let content = fs::read_to_string(path).map_err(|source| SeedError::Io { path: path.to_path_buf(), source })?;
  parse(&content, &path.display().to_string())
}

fn parse<T: DeserializeOwned>(content: &str, origin: &str) -> Result<Vec<T>, SeedError> {
  serde_json::from_str(content).map_err(|source| SeedError::Json { origin: origin.to_string(), source })
}

#[cfg(test)]
mod tests {
  use super::*;
  use discos_core::domain::ArtistId;
  use tempfile::tempdir;

  #[test]
  fn bundled_seed_is_consistent() {
    let seed = SeedData::bundled().unwrap();

    assert!(!seed.artists.is_empty());
    assert!(!seed.records.is_empty());
    for record in &seed.records {
      assert!(seed.artists.iter().any(|a| a.id == record.artist_id), "orphan record {}", record.id);
    }
  }

  #[test]
  fn from_dir_reads_both_files() {
    let tmp = tempdir().unwrap();
    fs::write(
      tmp.path().join(ARTISTS_FILE),
      r#"[{"id": 1, "firstname": "A", "lastname": "B", "name": "AB", "biography": ""}]"#,
    )
    .unwrap();
    fs::write(tmp.path().join(RECORDS_FILE), "[]").unwrap();

    let seed = SeedData::from_dir(tmp.path()).unwrap();

    assert_eq!(seed.artists.len(), 1);
    assert_eq!(seed.artists[0].id, ArtistId::new(1));
    assert!(seed.records.is_empty());
  }

  #[test]
  fn from_dir_rejects_ids_that_would_collide() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join(ARTISTS_FILE), "[]").unwrap();
    let record = |id: i32| {
      format!(
        r#"{{"id": {id}, "artistId": 1, "name": "X", "field": "Jazz", "recorded": 1960, "label": "L",
             "pressing": "P", "rating": "R", "discs": 1, "media": "LP", "bought": "2020", "cost": 1.0}}"#
      )
    };
    fs::write(tmp.path().join(RECORDS_FILE), format!("[{}, {}]", record(1), record(3))).unwrap();

    let err = SeedData::from_dir(tmp.path()).unwrap_err();

    assert!(matches!(err, SeedError::IdOutOfSequence { collection: "records", position: 1, found: 3, expected: 2 }));
  }

  #[test]
  fn from_dir_reports_missing_file() {
    let tmp = tempdir().unwrap();

    let err = SeedData::from_dir(tmp.path()).unwrap_err();

    assert!(matches!(err, SeedError::Io { path, .. } if path.ends_with(ARTISTS_FILE)));
  }
}
