use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Representa a un artista dentro del catálogo.
///
/// Un artista no guarda sus discos: la relación se recorre al revés,
/// buscando los `Record` cuyo `artist_id` coincide con este `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  /// Identificador único del artista. Inmutable una vez asignado.
  pub id: ArtistId,

  /// Nombre de pila.
  pub firstname: String,

  /// Apellido.
  pub lastname: String,

  /// Nombre artístico, tal como se muestra.
  pub name: String,

  /// Texto biográfico libre.
  pub biography: String,
}

/// Datos de un artista todavía sin identificador.
///
/// Es lo que recibe la mutación `addArtist`; el almacén asigna el `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
  pub firstname: String,
  pub lastname: String,
  pub name: String,
  pub biography: String,
}

impl NewArtist {
  /// Materializa el artista con el `id` ya sintetizado.
  pub fn into_artist(self, id: ArtistId) -> Artist {
    Artist { id, firstname: self.firstname, lastname: self.lastname, name: self.name, biography: self.biography }
  }
}
