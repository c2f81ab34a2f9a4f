//! Error types for starting and running the server.
//!
//! Errors in query documents are not represented here; the query engine reports them inside the
//! response body.

use std::{io::Error as IoError, net::SocketAddr};
use thiserror::Error;

/// Fatal errors that stop the server.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServeError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address that was requested.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
    /// The server stopped with an IO error after it started listening.
    #[error("server on {addr} failed: {source}")]
    Serve {
        /// The address the server was listening on.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
}
