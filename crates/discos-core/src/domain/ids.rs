use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de un artista.
///
/// Es un entero positivo asignado de forma secuencial por el almacén
/// (`len + 1` al insertar). No lo emite ninguna secuencia duradera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(i32);

impl ArtistId {
  /// Construye un `ArtistId` a partir de un entero existente.
  pub fn new(value: i32) -> Self {
    ArtistId(value)
  }

  /// Devuelve el entero interno.
  pub fn get(&self) -> i32 {
    self.0
  }
}

impl From<i32> for ArtistId {
  fn from(value: i32) -> Self {
    ArtistId(value)
  }
}

impl From<ArtistId> for i32 {
  fn from(id: ArtistId) -> Self {
    id.0
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador de un disco (`Record`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i32);

impl RecordId {
  pub fn new(value: i32) -> Self {
    RecordId(value)
  }

  pub fn get(&self) -> i32 {
    self.0
  }
}

impl From<i32> for RecordId {
  fn from(value: i32) -> Self {
    RecordId(value)
  }
}

impl From<RecordId> for i32 {
  fn from(id: RecordId) -> Self {
    id.0
  }
}

impl fmt::Display for RecordId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
