//! # stac-client — proxy-aware fetching for STAC catalogs
//!
//! Utilities for a client consuming SpatioTemporal Asset Catalog (STAC)
//! data behind optional proxy endpoints:
//!
//! - [`ProxyMapping`] — source→target prefix rewriting for outbound URIs,
//!   configured as a `"<source>|<target>"` string. Two independent mappings
//!   exist: one for general catalog resources, one for tile assets.
//! - [`StacClient`] — GET-only fetcher that applies the general mapping
//!   before each request and otherwise leaves responses untouched.
//! - [`TileSourceBuilder`] — substitutes (tile-proxied) asset hrefs into a
//!   configured tile-server URL template.
//!
//! Configuration is read once from the environment via
//! [`StacClientConfig::from_env`] and passed in explicitly; there is no
//! ambient global state.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use stac_client::{StacClient, StacClientConfig};
//!
//! let config = StacClientConfig::from_env()?;
//! let client = StacClient::from_config(&config);
//! let catalog = client.fetch_json("https://example.com/catalog.json").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod proxy;
pub mod tiles;

pub use config::{ConfigError, StacClientConfig};
pub use error::FetchError;
pub use proxy::ProxyMapping;
pub use tiles::TileSourceBuilder;

/// Proxy-aware STAC resource fetcher.
///
/// Wraps a [`reqwest::Client`]; cheap to clone. Issues plain GET requests
/// with no headers or body, and never inspects status codes on the raw
/// fetch path.
#[derive(Debug, Clone)]
pub struct StacClient {
    http: reqwest::Client,
    stac_proxy: Option<ProxyMapping>,
}

impl StacClient {
    /// Create a client with a default HTTP client and an optional general
    /// proxy mapping.
    pub fn new(stac_proxy: Option<ProxyMapping>) -> Self {
        Self::with_http(reqwest::Client::new(), stac_proxy)
    }

    /// Create a client around a caller-supplied HTTP client. Timeouts and
    /// transport policy live on that client; this crate adds none.
    pub fn with_http(http: reqwest::Client, stac_proxy: Option<ProxyMapping>) -> Self {
        Self { http, stac_proxy }
    }

    /// Create a client from process configuration.
    pub fn from_config(config: &StacClientConfig) -> Self {
        Self::new(config.stac_proxy.clone())
    }

    /// Apply the general proxy mapping to a URI.
    ///
    /// Identity when no mapping is configured. Applied exactly once per
    /// outbound call; the tile mapping is separate (see
    /// [`TileSourceBuilder`]).
    pub fn proxied_uri(&self, uri: &str) -> String {
        proxy::apply(self.stac_proxy.as_ref(), uri)
    }

    /// GET a resource, rewriting the URI through the general proxy first.
    ///
    /// Returns the raw response without inspecting its status; transport
    /// failures surface as [`FetchError::Http`].
    pub async fn fetch_uri(&self, uri: &str) -> Result<reqwest::Response, FetchError> {
        let proxied = self.proxied_uri(uri);
        tracing::debug!(uri = %proxied, "fetching STAC resource");
        self.http
            .get(&proxied)
            .send()
            .await
            .map_err(|e| FetchError::Http {
                uri: proxied,
                source: e,
            })
    }

    /// GET a resource and deserialize its body as JSON.
    ///
    /// Unlike [`fetch_uri`](Self::fetch_uri), this enforces a 2xx status and
    /// returns [`FetchError::Status`] otherwise.
    pub async fn fetch_json(&self, uri: &str) -> Result<serde_json::Value, FetchError> {
        let resp = self.fetch_uri(uri).await?;
        let uri = resp.url().to_string();
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                uri,
                status: status.as_u16(),
                status_text: error::status_text(status),
            });
        }
        resp.json()
            .await
            .map_err(|e| FetchError::Deserialization { uri, source: e })
    }
}
