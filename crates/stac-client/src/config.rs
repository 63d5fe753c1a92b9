//! Process configuration for STAC clients.
//!
//! Read once at process start from environment variables and treated as
//! immutable afterwards. Components receive the parsed values at
//! construction time; nothing in this workspace consults the environment
//! after startup.

use std::str::FromStr;

use crate::proxy::ProxyMapping;

/// Environment variable holding the general STAC resource proxy mapping,
/// e.g. `https://thingtoproxy.com|http://proxy:111`.
pub const STAC_PROXY_URL_VAR: &str = "STAC_PROXY_URL";

/// Environment variable holding the tile-asset proxy mapping (same form).
pub const TILE_PROXY_URL_VAR: &str = "TILE_PROXY_URL";

/// Environment variable holding the tile-source URL template containing the
/// literal `{ASSET_HREF}` placeholder.
pub const TILE_SOURCE_TEMPLATE_VAR: &str = "TILE_SOURCE_TEMPLATE";

/// Configuration for proxy rewriting and tile-source construction.
#[derive(Debug, Clone, Default)]
pub struct StacClientConfig {
    /// Mapping applied to general STAC resource fetches. `None` disables
    /// rewriting.
    pub stac_proxy: Option<ProxyMapping>,
    /// Mapping applied to tile asset hrefs, after any general rewrite.
    pub tile_proxy: Option<ProxyMapping>,
    /// Tile-source URL template with a `{ASSET_HREF}` placeholder.
    pub tile_source_template: Option<String>,
}

impl StacClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `STAC_PROXY_URL` (optional, `"<source>|<target>"`)
    /// - `TILE_PROXY_URL` (optional, `"<source>|<target>"`)
    /// - `TILE_SOURCE_TEMPLATE` (optional)
    ///
    /// Unset or empty variables disable the corresponding feature.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidProxyMapping` if a set mapping string
    /// lacks its `|` delimiter.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            stac_proxy: env_mapping(STAC_PROXY_URL_VAR)?,
            tile_proxy: env_mapping(TILE_PROXY_URL_VAR)?,
            tile_source_template: env_nonempty(TILE_SOURCE_TEMPLATE_VAR),
        })
    }
}

fn env_mapping(var: &str) -> Result<Option<ProxyMapping>, ConfigError> {
    match env_nonempty(var) {
        Some(raw) => ProxyMapping::from_str(&raw).map(Some),
        None => Ok(None),
    }
}

fn env_nonempty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A proxy mapping string did not have the `"<source>|<target>"` form.
    #[error("invalid proxy mapping {0:?}: expected \"<source>|<target>\"")]
    InvalidProxyMapping(String),
}
