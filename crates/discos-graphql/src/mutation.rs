use async_graphql::{Context, Object, Result};
use discos_core::domain::{ArtistId, NewArtist, NewRecord};

use crate::Catalog;
use crate::types::{ArtistObject, RecordObject};

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
  /// Add a record
  #[allow(clippy::too_many_arguments)]
  async fn add_record(
    &self,
    ctx: &Context<'_>,
    artist_id: i32,
    name: String,
    field: String,
    recorded: i32,
    label: String,
    pressing: String,
    rating: String,
    discs: i32,
    media: String,
    bought: String,
    cost: f64,
    review: Option<String>,
  ) -> Result<Option<RecordObject>> {
    let catalog = ctx.data::<Catalog>()?;
    let record = NewRecord {
      artist_id: ArtistId::new(artist_id),
      name,
      field,
      recorded,
      label,
      pressing,
      rating,
      discs,
      media,
      bought,
      cost,
      review,
    };
    Ok(Some(RecordObject(catalog.add_record(record)?)))
  }

  /// Add an artist
  async fn add_artist(
    &self,
    ctx: &Context<'_>,
    firstname: String,
    lastname: String,
    name: String,
    biography: String,
  ) -> Result<Option<ArtistObject>> {
    let catalog = ctx.data::<Catalog>()?;
    Ok(Some(ArtistObject(catalog.add_artist(NewArtist { firstname, lastname, name, biography })?)))
  }
}
