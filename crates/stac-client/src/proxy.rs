//! URI proxy rewriting.
//!
//! A deployment may route catalog or tile traffic through a proxy instead of
//! hitting upstream hosts directly. The mapping is configured as a single
//! `"<source>|<target>"` string; rewriting replaces the first occurrence of
//! the source prefix with the target prefix and nothing else. Two mappings
//! exist per process: one for general STAC resources, one for tile assets.
//! When both apply to an asset, the general mapping is consulted first and
//! the tile mapping second, each looking only at its own prefix.

use std::str::FromStr;

use crate::config::ConfigError;

/// Delimiter between the source and target halves of a mapping string.
const MAPPING_DELIMITER: char = '|';

/// A source→target prefix substitution applied to outbound URIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyMapping {
    source: String,
    target: String,
}

impl ProxyMapping {
    /// Build a mapping from its two halves.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The prefix this mapping replaces.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The prefix substituted in.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Replace the first occurrence of the source prefix with the target.
    ///
    /// Identity when the source does not occur in `uri`. A URI is rewritten
    /// at most once per outbound call; callers must not re-apply the same
    /// mapping to an already-rewritten URI.
    pub fn rewrite(&self, uri: &str) -> String {
        uri.replacen(&self.source, &self.target, 1)
    }
}

impl FromStr for ProxyMapping {
    type Err = ConfigError;

    /// Parse a `"<source>|<target>"` mapping string.
    ///
    /// A string without exactly one delimiter, or with an empty source half,
    /// is a caller misconfiguration and is rejected eagerly rather than
    /// surfacing later as a bad rewrite.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(MAPPING_DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(source), Some(target), None) if !source.is_empty() => {
                Ok(Self::new(source, target))
            }
            _ => Err(ConfigError::InvalidProxyMapping(s.to_string())),
        }
    }
}

/// Apply an optional mapping; `None` disables rewriting.
pub(crate) fn apply(mapping: Option<&ProxyMapping>, uri: &str) -> String {
    match mapping {
        Some(m) => m.rewrite(uri),
        None => uri.to_string(),
    }
}
