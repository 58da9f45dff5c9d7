use serde::{Deserialize, Serialize};

use crate::domain::ids::{ArtistId, RecordId};

/// Representa un disco de la colección.
///
/// Semánticamente es un objeto físico comprado (prensaje, soporte, coste),
/// no la obra abstracta. El artista se referencia por `artist_id` y la
/// relación no se valida: un `artist_id` inexistente simplemente no resuelve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
  /// Identificador único del disco.
  pub id: RecordId,

  /// Artista propietario (clave foránea no verificada).
  pub artist_id: ArtistId,

  /// Título del disco.
  pub name: String,

  /// Género o campo musical ("Jazz", "Soul"...).
  pub field: String,

  /// Año de grabación.
  pub recorded: i32,

  /// Sello discográfico.
  pub label: String,

  /// Descripción del prensaje (p. ej. `"1st US pressing"`).
  pub pressing: String,

  /// Valoración libre, tal como la escribe el coleccionista.
  pub rating: String,

  /// Número de discos del lanzamiento.
  pub discs: i32,

  /// Soporte: `"LP"`, `"CD"`, `"Cassette"`...
  pub media: String,

  /// Fecha de compra.
  ///
  /// Se guarda como `String` porque la fuente no impone un formato.
  pub bought: String,

  /// Precio pagado.
  pub cost: f64,

  /// Reseña opcional.
  #[serde(default)]
  pub review: Option<String>,
}

/// Argumentos de `addRecord`: un `Record` sin `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
  pub artist_id: ArtistId,
  pub name: String,
  pub field: String,
  pub recorded: i32,
  pub label: String,
  pub pressing: String,
  pub rating: String,
  pub discs: i32,
  pub media: String,
  pub bought: String,
  pub cost: f64,
  pub review: Option<String>,
}

impl NewRecord {
  pub fn into_record(self, id: RecordId) -> Record {
    Record {
      id,
      artist_id: self.artist_id,
      name: self.name,
      field: self.field,
      recorded: self.recorded,
      label: self.label,
      pressing: self.pressing,
      rating: self.rating,
      discs: self.discs,
      media: self.media,
      bought: self.bought,
      cost: self.cost,
      review: self.review,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_json_uses_camel_case_and_optional_review() {
    let json = r#"{
      "id": 3,
      "artistId": 1,
      "name": "Blue Train",
      "field": "Jazz",
      "recorded": 1957,
      "label": "Blue Note",
      "pressing": "Reissue",
      "rating": "5/5",
      "discs": 1,
      "media": "LP",
      "bought": "2019-03-02",
      "cost": 24.5
    }"#;

    let record: Record = serde_json::from_str(json).unwrap();

    assert_eq!(record.id, RecordId::new(3));
    assert_eq!(record.artist_id, ArtistId::new(1));
    assert_eq!(record.review, None);
    assert_eq!(record.cost, 24.5);
  }
}
