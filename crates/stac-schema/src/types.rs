//! STAC object types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of STAC document a schema describes.
///
/// The lowercase string form doubles as the path segment under which the
/// STAC spec repository stores the corresponding schema
/// (`{type}-spec/json-schema/{type}.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StacObjectType {
    Catalog,
    Collection,
    Item,
}

impl StacObjectType {
    /// Lowercase string form, e.g. `"item"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StacObjectType::Catalog => "catalog",
            StacObjectType::Collection => "collection",
            StacObjectType::Item => "item",
        }
    }
}

impl fmt::Display for StacObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StacObjectType {
    type Err = UnknownObjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "catalog" => Ok(StacObjectType::Catalog),
            "collection" => Ok(StacObjectType::Collection),
            "item" => Ok(StacObjectType::Item),
            other => Err(UnknownObjectType(other.to_string())),
        }
    }
}

/// A string that names no known STAC object type.
#[derive(Debug, thiserror::Error)]
#[error("unknown STAC object type: {0:?}")]
pub struct UnknownObjectType(pub String);
