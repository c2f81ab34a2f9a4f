//! Log output setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// The filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "bookshelf=info,tower_http=info";

/// Installs a formatting subscriber for the process, filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already installed.
#[inline]
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    if tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_err()
    {
        tracing::debug!("a global subscriber was already installed");
    }
}
