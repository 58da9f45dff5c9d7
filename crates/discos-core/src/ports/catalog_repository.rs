use std::sync::Arc;

use crate::domain::{Artist, ArtistId, NewArtist, NewRecord, Record, RecordId};
use crate::errors::CoreError;

/// Puerto de acceso a las dos colecciones del catálogo.
///
/// Las implementaciones son responsables de sintetizar el `id` de cada
/// inserción (`len + 1`) de forma atómica respecto a la propia inserción.
/// Los listados devuelven las entidades en orden de inserción.
pub trait CatalogRepository: Send + Sync {
  // --- Comandos (escritura) ---
  fn insert_artist(&self, artist: NewArtist) -> Result<Artist, CoreError>;
  fn insert_record(&self, record: NewRecord) -> Result<Record, CoreError>;

  // --- Consultas por ID ---
  fn find_artist(&self, id: ArtistId) -> Result<Option<Artist>, CoreError>;
  fn find_record(&self, id: RecordId) -> Result<Option<Record>, CoreError>;

  // --- Consultas de listado ---
  fn list_artists(&self) -> Result<Vec<Artist>, CoreError>;
  fn list_records(&self) -> Result<Vec<Record>, CoreError>;

  /// Discos cuyo `artist_id` coincide, calculado en el momento de la lectura.
  fn records_by_artist(&self, id: ArtistId) -> Result<Vec<Record>, CoreError>;
}

impl<T: CatalogRepository + ?Sized> CatalogRepository for Arc<T> {
  fn insert_artist(&self, artist: NewArtist) -> Result<Artist, CoreError> {
    (**self).insert_artist(artist)
  }

  fn insert_record(&self, record: NewRecord) -> Result<Record, CoreError> {
    (**self).insert_record(record)
  }

  fn find_artist(&self, id: ArtistId) -> Result<Option<Artist>, CoreError> {
    (**self).find_artist(id)
  }

  fn find_record(&self, id: RecordId) -> Result<Option<Record>, CoreError> {
    (**self).find_record(id)
  }

  fn list_artists(&self) -> Result<Vec<Artist>, CoreError> {
    (**self).list_artists()
  }

  fn list_records(&self) -> Result<Vec<Record>, CoreError> {
    (**self).list_records()
  }

  fn records_by_artist(&self, id: ArtistId) -> Result<Vec<Record>, CoreError> {
    (**self).records_by_artist(id)
  }
}
