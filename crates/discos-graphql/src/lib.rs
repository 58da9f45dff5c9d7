//! Esquema GraphQL del catálogo.
//!
//! Los tipos de este crate sólo describen la forma de los datos; toda la
//! lógica de consulta e inserción vive en [`CatalogService`]. El servicio
//! viaja en los datos de contexto del esquema, nunca como estado global.

mod mutation;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use discos_core::ports::CatalogRepository;
use discos_core::services::CatalogService;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{ArtistObject, RecordObject};

/// Servicio compartido por todas las peticiones.
pub type Catalog = Arc<CatalogService<Arc<dyn CatalogRepository>>>;

pub type DiscosSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Construye el esquema ejecutable sobre un repositorio concreto.
pub fn build_schema(repo: Arc<dyn CatalogRepository>) -> DiscosSchema {
  let catalog: Catalog = Arc::new(CatalogService::new(repo));
  Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(catalog).finish()
}
