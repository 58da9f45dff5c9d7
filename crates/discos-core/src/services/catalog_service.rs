use tracing::{debug, info};

use crate::domain::{Artist, ArtistId, NewArtist, NewRecord, Record, RecordId};
use crate::errors::CoreError;
use crate::ports::CatalogRepository;

/// Lógica de las consultas y mutaciones del catálogo.
///
/// No conoce GraphQL: recibe argumentos ya validados por el esquema y
/// devuelve entidades de dominio. Una búsqueda fallida es `Ok(None)`.
pub struct CatalogService<R>
where
  R: CatalogRepository,
{
  repo: R,
}

impl<R> CatalogService<R>
where
  R: CatalogRepository,
{
  pub fn new(repo: R) -> Self {
    Self { repo }
  }

  // -------- QUERY (read) --------

  /// Primer disco con ese `id`. Sin `id` no hay nada que buscar.
  pub fn record(&self, id: Option<i32>) -> Result<Option<Record>, CoreError> {
    let Some(id) = id else {
      return Ok(None);
    };

    let found = self.repo.find_record(RecordId::new(id))?;
    if found.is_none() {
      debug!(record_id = id, "record lookup miss");
    }
    Ok(found)
  }

  pub fn records(&self) -> Result<Vec<Record>, CoreError> {
    self.repo.list_records()
  }

  pub fn artist(&self, id: Option<i32>) -> Result<Option<Artist>, CoreError> {
    let Some(id) = id else {
      return Ok(None);
    };

    let found = self.repo.find_artist(ArtistId::new(id))?;
    if found.is_none() {
      debug!(artist_id = id, "artist lookup miss");
    }
    Ok(found)
  }

  pub fn artists(&self) -> Result<Vec<Artist>, CoreError> {
    self.repo.list_artists()
  }

  /// Discos del artista, recalculados en cada lectura.
  pub fn records_of(&self, artist_id: ArtistId) -> Result<Vec<Record>, CoreError> {
    self.repo.records_by_artist(artist_id)
  }

  /// Artista propietario del disco, si existe.
  pub fn artist_of(&self, record: &Record) -> Result<Option<Artist>, CoreError> {
    self.repo.find_artist(record.artist_id)
  }

  // -------- COMMAND (write) --------

  pub fn add_record(&self, record: NewRecord) -> Result<Record, CoreError> {
    let created = self.repo.insert_record(record)?;
    info!(record_id = %created.id, artist_id = %created.artist_id, "record added");
    Ok(created)
  }

  pub fn add_artist(&self, artist: NewArtist) -> Result<Artist, CoreError> {
    let created = self.repo.insert_artist(artist)?;
    info!(artist_id = %created.id, "artist added");
    Ok(created)
  }
}
