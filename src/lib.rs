//! A static book catalog served over a GraphQL endpoint.
//!
//! The catalog is built once at startup and shared read-only by every request. Clients select
//! exactly the fields they want with the `book(id)` and `list` queries.

// Dev-dependency of the integration tests, also linked into the unit-test build of this crate.
#[cfg(test)]
use reqwest as _;
use tokio::net::TcpListener;

pub mod config;
use config::ServerConfig;

pub mod dataset;
use dataset::Catalog;

pub mod errors;
use errors::ServeError;

pub mod http;
pub mod logging;
pub mod schema;

/// Builds the catalog and schema, binds the configured address and serves until the server
/// fails.
///
/// # Errors
///
/// Returns [`ServeError::Bind`] if the address cannot be bound and [`ServeError::Serve`] if the
/// server stops with an IO error.
#[inline]
pub async fn serve(config: ServerConfig) -> Result<(), ServeError> {
    let catalog = Catalog::populate();
    tracing::info!("catalog populated with {} books", catalog.len());
    let schema = schema::build_schema(catalog);

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: config.listen_addr,
            source,
        })?;
    let addr = listener.local_addr().map_err(|source| ServeError::Bind {
        addr: config.listen_addr,
        source,
    })?;
    tracing::info!("listening on http://{addr}{}", config.endpoint);

    axum::serve(listener, http::build_app(schema, &config))
        .await
        .map_err(|source| ServeError::Serve { addr, source })
}
