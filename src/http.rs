//! The HTTP side: turning requests into query executions and building the router.

use crate::{config::ServerConfig, schema::BookSchema};
use async_graphql::{Request, Response, ServerError, Variables};
use async_graphql_axum::GraphQLResponse;
use axum::{
    Router,
    extract::{Query, State},
    routing::any,
};
use serde_json::{Error as JsonError, Value as JsonValue};
use tower_http::trace::TraceLayer;

/// The URL parameters understood by the endpoint.
#[derive(Debug, Default)]
pub struct QueryParams {
    /// The query document. Treated as empty when missing.
    pub query: Option<String>,
    /// Which operation of the document to run.
    pub operation_name: Option<String>,
    /// Variables for the operation, as JSON text.
    pub variables: Option<String>,
}

impl QueryParams {
    /// Collects the known parameters from decoded key-value pairs. When a key is repeated the
    /// first value is used; unknown keys are ignored.
    #[inline]
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "query" => &mut params.query,
                "operationName" => &mut params.operation_name,
                "variables" => &mut params.variables,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Converts the parameters into a request for the query engine.
    ///
    /// # Errors
    ///
    /// Returns an error if `variables` is present but not valid JSON.
    #[inline]
    pub fn into_request(self) -> Result<Request, JsonError> {
        let mut request = Request::new(self.query.unwrap_or_default());
        if let Some(name) = self.operation_name {
            request = request.operation_name(name);
        }
        if let Some(variables) = self.variables.filter(|text| !text.trim().is_empty()) {
            let variables: JsonValue = serde_json::from_str(&variables)?;
            request = request.variables(Variables::from_json(variables));
        }
        Ok(request)
    }
}

/// Runs the query carried by the URL parameters. Query-level errors are reported in the body, so
/// this always answers with a success status.
#[inline]
pub async fn graphql_handler(
    State(schema): State<BookSchema>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> GraphQLResponse {
    let response = match QueryParams::from_pairs(pairs).into_request() {
        Ok(request) => schema.execute(request).await,
        Err(err) => {
            tracing::debug!("rejected malformed variables: {err}");
            Response::from_errors(vec![ServerError::new(
                format!("invalid variables: {err}"),
                None,
            )])
        }
    };

    if response.errors.is_empty() {
        tracing::debug!("query resolved");
    } else {
        tracing::debug!(errors = response.errors.len(), "query resolved with errors");
    }

    response.into()
}

/// Builds the router serving `schema` at the configured endpoint, for any method.
#[inline]
#[must_use]
pub fn build_app(schema: BookSchema, config: &ServerConfig) -> Router {
    Router::new()
        .route(&config.endpoint, any(graphql_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
