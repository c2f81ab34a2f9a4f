//! Serves the book catalog at `http://0.0.0.0:8088/graphql`.

// Used by the library only.
use async_graphql as _;
use async_graphql_axum as _;
use axum as _;
use serde_json as _;
use thiserror as _;
use tower_http as _;
use tracing_subscriber as _;
// Dev-dependency of the integration tests, also linked into this crate's test build.
#[cfg(test)]
use reqwest as _;

use bookshelf::{config::ServerConfig, logging};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match bookshelf::serve(ServerConfig::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
