use async_graphql::{Context, Object, Result};
use discos_core::domain::{Artist, Record};

use crate::Catalog;

/// Lista GraphQL `[T]`: tanto la lista como cada elemento son anulables.
pub(crate) type NullableList<T> = Option<Vec<Option<T>>>;

pub(crate) fn nullable_list<T, U>(items: Vec<T>, wrap: impl Fn(T) -> U) -> NullableList<U> {
  Some(items.into_iter().map(|item| Some(wrap(item))).collect())
}

/// Vista GraphQL de un `Artist`. Los campos escalares se leen tal cual;
/// `records` se calcula en cada consulta.
pub struct ArtistObject(pub Artist);

/// This represents an artist of a record
#[Object(name = "Artist")]
impl ArtistObject {
  async fn id(&self) -> i32 {
    self.0.id.get()
  }

  async fn firstname(&self) -> &str {
    &self.0.firstname
  }

  async fn lastname(&self) -> &str {
    &self.0.lastname
  }

  async fn name(&self) -> &str {
    &self.0.name
  }

  async fn biography(&self) -> &str {
    &self.0.biography
  }

  async fn records(&self, ctx: &Context<'_>) -> Result<NullableList<RecordObject>> {
    let catalog = ctx.data::<Catalog>()?;
    Ok(nullable_list(catalog.records_of(self.0.id)?, RecordObject))
  }
}

/// Vista GraphQL de un `Record`.
pub struct RecordObject(pub Record);

/// This represents a record written by an artist
#[Object(name = "Record")]
impl RecordObject {
  async fn id(&self) -> i32 {
    self.0.id.get()
  }

  async fn artist_id(&self) -> i32 {
    self.0.artist_id.get()
  }

  async fn name(&self) -> &str {
    &self.0.name
  }

  async fn field(&self) -> &str {
    &self.0.field
  }

  async fn recorded(&self) -> i32 {
    self.0.recorded
  }

  async fn label(&self) -> &str {
    &self.0.label
  }

  async fn pressing(&self) -> &str {
    &self.0.pressing
  }

  async fn rating(&self) -> &str {
    &self.0.rating
  }

  async fn discs(&self) -> i32 {
    self.0.discs
  }

  async fn media(&self) -> &str {
    &self.0.media
  }

  async fn bought(&self) -> &str {
    &self.0.bought
  }

  async fn cost(&self) -> f64 {
    self.0.cost
  }

  async fn review(&self) -> Option<&str> {
    self.0.review.as_deref()
  }

  /// Null when `artistId` names no known artist.
  async fn artist(&self, ctx: &Context<'_>) -> Result<Option<ArtistObject>> {
    let catalog = ctx.data::<Catalog>()?;
    Ok(catalog.artist_of(&self.0)?.map(ArtistObject))
  }
}
