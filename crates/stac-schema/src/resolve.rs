//! Schema reference resolution.
//!
//! The STAC spec repository has a fixed layout: each object type lives under
//! `{type}-spec/json-schema/`, and shared "common metadata" fragments live
//! under `item-spec/json-schema/` and are referenced by bare filename. The
//! three-way branch below mirrors that layout; it is deliberately not a
//! general URI-resolution algorithm.

/// Sub-path housing common-metadata fragment schemas.
const COMMON_METADATA_PATH: &str = "item-spec/json-schema";

/// Absolute URI to fetch for a reference found inside a schema document.
///
/// - A reference containing `"://"` is already absolute and returned
///   unchanged.
/// - A reference containing a path separator is a sibling resource relative
///   to the base URL (e.g. a collection schema referencing the catalog
///   schema).
/// - A bare name is a common-metadata fragment.
pub fn resolve_load_uri(base_url: &str, reference: &str) -> String {
    if reference.contains("://") {
        return reference.to_string();
    }

    if reference.contains('/') {
        return format!("{base_url}/{reference}");
    }

    format!("{base_url}/{COMMON_METADATA_PATH}/{reference}")
}
