//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// The port the server listens on by default.
pub const DEFAULT_PORT: u16 = 8088;

/// The path the query endpoint is mounted at by default.
pub const DEFAULT_ENDPOINT: &str = "/graphql";

/// Where and how the server is exposed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// The address to bind the listener to.
    pub listen_addr: SocketAddr,
    /// The path of the query endpoint. Must start with `/`.
    pub endpoint: String,
}

impl Default for ServerConfig {
    /// All interfaces on [`DEFAULT_PORT`], serving at [`DEFAULT_ENDPOINT`].
    #[inline]
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_everywhere() {
        let config = ServerConfig::default();

        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8088");
        assert_eq!(config.endpoint, "/graphql");
    }
}
