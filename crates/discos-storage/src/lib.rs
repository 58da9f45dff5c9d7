pub mod config;
pub mod seed;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use discos_core::domain::{Artist, ArtistId, NewArtist, NewRecord, Record, RecordId};
use discos_core::errors::CoreError;
use discos_core::ports::CatalogRepository;
use tracing::info;

pub use config::CatalogConfig;
pub use seed::{SeedData, SeedError};

/// Catálogo en memoria del proceso.
///
/// Cada colección va detrás de su propio `RwLock`. El `id` de una inserción
/// se calcula como `len + 1` con el guard de escritura tomado, así que dos
/// inserciones concurrentes nunca ven la misma longitud.
///
/// No hay índices: las búsquedas y las relaciones son recorridos lineales.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
  artists: RwLock<Vec<Artist>>,
  records: RwLock<Vec<Record>>,
}

impl InMemoryCatalog {
  /// Catálogo vacío.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_seed(seed: SeedData) -> Self {
    info!(artists = seed.artists.len(), records = seed.records.len(), "catalog seeded");
    Self { artists: RwLock::new(seed.artists), records: RwLock::new(seed.records) }
  }

  /// Usa `seed_dir` si está configurado; si no, la semilla incluida.
  pub fn new_from_config(cfg: &CatalogConfig) -> Result<Self, SeedError> {
    let seed = match &cfg.seed_dir {
      Some(dir) => {
        info!(seed_dir = %dir.display(), "loading catalog seed");
        SeedData::from_dir(dir)?
      }
      None => SeedData::bundled()?,
    };
    Ok(Self::with_seed(seed))
  }

  fn read_artists(&self) -> Result<RwLockReadGuard<'_, Vec<Artist>>, CoreError> {
    self.artists.read().map_err(|_| poisoned("artists"))
  }

  fn write_artists(&self) -> Result<RwLockWriteGuard<'_, Vec<Artist>>, CoreError> {
    self.artists.write().map_err(|_| poisoned("artists"))
  }

  fn read_records(&self) -> Result<RwLockReadGuard<'_, Vec<Record>>, CoreError> {
    self.records.read().map_err(|_| poisoned("records"))
  }

  fn write_records(&self) -> Result<RwLockWriteGuard<'_, Vec<Record>>, CoreError> {
    self.records.write().map_err(|_| poisoned("records"))
  }
}

fn poisoned(collection: &str) -> CoreError {
  CoreError::Repository(format!("{collection} lock poisoned"))
}

/// `len + 1` como entero de GraphQL.
fn next_id(len: usize, collection: &str) -> Result<i32, CoreError> {
  len
    .checked_add(1)
    .and_then(|n| i32::try_from(n).ok())
    .ok_or_else(|| CoreError::Repository(format!("{collection} id space exhausted")))
}

impl CatalogRepository for InMemoryCatalog {
  fn insert_artist(&self, artist: NewArtist) -> Result<Artist, CoreError> {
    let mut artists = self.write_artists()?;
    let artist = artist.into_artist(ArtistId::new(next_id(artists.len(), "artists")?));
    artists.push(artist.clone());
    Ok(artist)
  }

  fn insert_record(&self, record: NewRecord) -> Result<Record, CoreError> {
    let mut records = self.write_records()?;
    let record = record.into_record(RecordId::new(next_id(records.len(), "records")?));
    records.push(record.clone());
    Ok(record)
  }

  fn find_artist(&self, id: ArtistId) -> Result<Option<Artist>, CoreError> {
    Ok(self.read_artists()?.iter().find(|a| a.id == id).cloned())
  }

  fn find_record(&self, id: RecordId) -> Result<Option<Record>, CoreError> {
    Ok(self.read_records()?.iter().find(|r| r.id == id).cloned())
  }

  fn list_artists(&self) -> Result<Vec<Artist>, CoreError> {
    Ok(self.read_artists()?.clone())
  }

  fn list_records(&self) -> Result<Vec<Record>, CoreError> {
    Ok(self.read_records()?.clone())
  }

  fn records_by_artist(&self, id: ArtistId) -> Result<Vec<Record>, CoreError> {
    Ok(self.read_records()?.iter().filter(|r| r.artist_id == id).cloned().collect())
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;
  use std::sync::Arc;
  use std::thread;

  use super::*;

  fn new_record(artist_id: i32) -> NewRecord {
    NewRecord {
      artist_id: ArtistId::new(artist_id),
      name: "A Love Supreme".to_string(),
      field: "Jazz".to_string(),
      recorded: 1964,
      label: "Impulse!".to_string(),
      pressing: "Original".to_string(),
      rating: "5/5".to_string(),
      discs: 1,
      media: "LP".to_string(),
      bought: "2022-05-01".to_string(),
      cost: 60.0,
      review: Some("Essential".to_string()),
    }
  }

  #[test]
  fn insert_after_seed_continues_from_length() {
    let catalog = InMemoryCatalog::with_seed(SeedData::bundled().unwrap());
    let before = catalog.list_records().unwrap().len();

    let record = catalog.insert_record(new_record(2)).unwrap();

    assert_eq!(record.id.get() as usize, before + 1);
    assert_eq!(catalog.list_records().unwrap().last(), Some(&record));
    assert!(catalog.records_by_artist(ArtistId::new(2)).unwrap().contains(&record));
  }

  #[test]
  fn lookups_on_empty_catalog_miss() {
    let catalog = InMemoryCatalog::new();

    assert_eq!(catalog.find_artist(ArtistId::new(1)).unwrap(), None);
    assert_eq!(catalog.find_record(RecordId::new(1)).unwrap(), None);
    assert!(catalog.records_by_artist(ArtistId::new(1)).unwrap().is_empty());
  }

  #[test]
  fn concurrent_inserts_get_distinct_contiguous_ids() {
    let catalog = Arc::new(InMemoryCatalog::new());

    let handles: Vec<_> = (0..8)
      .map(|_| {
        let catalog = Arc::clone(&catalog);
        thread::spawn(move || {
          (0..25)
            .map(|n| {
              let artist = NewArtist {
                firstname: format!("First{n}"),
                lastname: "Last".to_string(),
                name: format!("First{n} Last"),
                biography: String::new(),
              };
              catalog.insert_artist(artist).unwrap().id.get()
            })
            .collect::<Vec<_>>()
        })
      })
      .collect();

    let ids: BTreeSet<i32> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();

    assert_eq!(ids.len(), 200);
    assert_eq!(ids.iter().copied().collect::<Vec<_>>(), (1..=200).collect::<Vec<_>>());
  }

  #[test]
  fn new_from_config_without_seed_dir_uses_bundled_seed() {
    let catalog = InMemoryCatalog::new_from_config(&CatalogConfig::default()).unwrap();

    assert_eq!(catalog.list_artists().unwrap().len(), SeedData::bundled().unwrap().artists.len());
  }
}
