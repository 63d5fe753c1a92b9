//! Tile-source URL construction.
//!
//! Map frontends turn a raster asset href into a tile-server URL by
//! substituting the href into a configured template, e.g.
//! `https://tiles.example.com/{z}/{x}/{y}?url={ASSET_HREF}`. Tile traffic can
//! be proxied differently from other catalog resources, so the substitution
//! applies the tile-specific mapping first.

use crate::config::StacClientConfig;
use crate::proxy::{self, ProxyMapping};

/// Placeholder token in the template replaced by the (proxied) asset href.
pub const ASSET_HREF_TOKEN: &str = "{ASSET_HREF}";

/// Builds tile-source URLs from a configured template and optional
/// tile-asset proxy mapping.
#[derive(Debug, Clone)]
pub struct TileSourceBuilder {
    template: String,
    tile_proxy: Option<ProxyMapping>,
}

impl TileSourceBuilder {
    /// Build from an explicit template and mapping.
    pub fn new(template: impl Into<String>, tile_proxy: Option<ProxyMapping>) -> Self {
        Self {
            template: template.into(),
            tile_proxy,
        }
    }

    /// Build from process configuration; `None` when no tile-source template
    /// is configured.
    pub fn from_config(config: &StacClientConfig) -> Option<Self> {
        config
            .tile_source_template
            .as_ref()
            .map(|template| Self::new(template.clone(), config.tile_proxy.clone()))
    }

    /// The configured template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Tile-source URL for an asset href.
    ///
    /// Applies the tile proxy mapping to the href, then substitutes the
    /// result into the first `{ASSET_HREF}` occurrence in the template. The
    /// substituted value is not escaped or encoded. When the href is also a
    /// general catalog resource, the caller applies the general proxy rewrite
    /// before this one; the two mappings each consult only their own prefix.
    pub fn tile_source(&self, asset_href: &str) -> String {
        let proxied = proxy::apply(self.tile_proxy.as_ref(), asset_href);
        self.template.replacen(ASSET_HREF_TOKEN, &proxied, 1)
    }
}
