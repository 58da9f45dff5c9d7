use async_graphql::{Context, Object, Result};

use crate::Catalog;
use crate::types::{ArtistObject, NullableList, RecordObject, nullable_list};

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
  /// A Single Record
  async fn record(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<RecordObject>> {
    let catalog = ctx.data::<Catalog>()?;
    Ok(catalog.record(id)?.map(RecordObject))
  }

  /// List of All Records
  async fn records(&self, ctx: &Context<'_>) -> Result<NullableList<RecordObject>> {
    let catalog = ctx.data::<Catalog>()?;
    Ok(nullable_list(catalog.records()?, RecordObject))
  }

  /// A Single Artist
  async fn artist(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<ArtistObject>> {
    let catalog = ctx.data::<Catalog>()?;
    Ok(catalog.artist(id)?.map(ArtistObject))
  }

  /// List of All artists
  async fn artists(&self, ctx: &Context<'_>) -> Result<NullableList<ArtistObject>> {
    let catalog = ctx.data::<Catalog>()?;
    Ok(nullable_list(catalog.artists()?, ArtistObject))
  }
}
