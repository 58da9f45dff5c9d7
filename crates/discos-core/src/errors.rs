// crates/discos-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Discos.
///
/// Las capas superiores (GraphQL, HTTP) lo convierten en un error de campo
/// o en un mensaje de log. Una búsqueda sin resultado NO es un error: se
/// representa con `Option::None`.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("repository error: {0}")]
  Repository(String),
}
