//! HTTP wiring for the GraphQL endpoint.
//!
//! One route: `POST /graphql` executes a request envelope, `GET /graphql`
//! serves the GraphiQL explorer. Everything protocol-level (parsing,
//! validation, error entries) is the execution engine's job.

use crate::schema::{GeneGraphSchema, build_schema};
use crate::store::RecordStore;
use anyhow::Context as _;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5051";
pub const GRAPHQL_PATH: &str = "/graphql";
pub const BIND_ADDR_ENV: &str = "GENEGRAPH_BIND_ADDR";

/// Bind address resolution: explicit argument, then environment, then
/// the built-in default.
pub fn resolve_bind_addr(explicit: Option<&str>) -> String {
    if let Some(addr) = explicit {
        return addr.to_string();
    }
    env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

pub fn router(schema: GeneGraphSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .with_state(schema)
}

async fn graphql_handler(
    State(schema): State<GeneGraphSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Seed the store, build the schema, and serve until the process exits.
pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let schema = build_schema(RecordStore::seeded());
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind to '{addr}'"))?;
    tracing::info!(%addr, path = GRAPHQL_PATH, "serving GraphQL API");
    axum::serve(listener, router(schema))
        .await
        .context("HTTP server terminated")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bind_addr_precedence() {
        assert_eq!(resolve_bind_addr(Some("0.0.0.0:8080")), "0.0.0.0:8080");
        // Without an explicit address or env override, the default wins.
        if env::var(BIND_ADDR_ENV).is_err() {
            assert_eq!(resolve_bind_addr(None), DEFAULT_BIND_ADDR);
        }
    }
}
