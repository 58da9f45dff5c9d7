use async_graphql::http::GraphiQLSource;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use discos_graphql::DiscosSchema;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Single `/graphql` route: `POST` executes, `GET` serves the console when enabled.
pub fn router(schema: DiscosSchema, graphiql: bool) -> Router {
  let route = if graphiql { get(graphiql_handler).post(graphql_handler) } else { post(graphql_handler) };

  Router::new().route(GRAPHQL_PATH, route).with_state(schema).layer(
    TraceLayer::new_for_http()
      .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
      .on_request(DefaultOnRequest::new().level(Level::INFO))
      .on_response(DefaultOnResponse::new().level(Level::INFO)),
  )
}

/// Parse, validate and execute one GraphQL document.
///
/// Validation failures come back inside `errors` with a 200 status; no resolver runs.
async fn graphql_handler(
  State(schema): State<DiscosSchema>,
  Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
  Json(schema.execute(request).await)
}

async fn graphiql_handler() -> impl IntoResponse {
  Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
