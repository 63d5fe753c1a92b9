//! On-demand sub-schema retrieval for the validation engine.

use async_trait::async_trait;
use jsonschema::{AsyncRetrieve, Uri};
use serde_json::Value;
use stac_client::StacClient;

use crate::error::SchemaError;
use crate::patch::patch_schema;
use crate::resolve::resolve_load_uri;

/// Namespace of the JSON Schema meta-schemas. The meta-schema references
/// itself, so fetching it would recurse forever; references into this
/// namespace resolve to the empty schema instead.
pub(crate) const META_SCHEMA_NAMESPACE: &str = "http://json-schema.org/";

/// Fetch one schema document: proxied GET, 2xx check, JSON parse, patch.
///
/// Used for the root schema and for every referenced sub-schema; a non-2xx
/// status is fatal and carries the status's reason phrase.
pub(crate) async fn fetch_schema(client: &StacClient, uri: &str) -> Result<Value, SchemaError> {
    let resp = client.fetch_uri(uri).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(SchemaError::Load {
            uri: uri.to_string(),
            status: status.as_u16(),
            status_text: stac_client::error::status_text(status),
        });
    }

    let schema: Value = resp
        .json()
        .await
        .map_err(|e| stac_client::FetchError::Deserialization {
            uri: uri.to_string(),
            source: e,
        })?;

    Ok(patch_schema(schema, uri))
}

/// Resolves and fetches referenced sub-schemas on behalf of the validation
/// engine during a validator build.
///
/// Parameterized by the base URL of the enclosing build rather than closing
/// over shared state, so concurrent builds against different spec versions
/// cannot interfere. Holds no mutable state; retrieval is idempotent per
/// URI. The engine decides how often and in what order it calls in.
#[derive(Debug, Clone)]
pub(crate) struct StacSchemaRetriever {
    client: StacClient,
    base_url: String,
}

impl StacSchemaRetriever {
    pub(crate) fn new(client: StacClient, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Resolve a reference and fetch the schema it names.
    ///
    /// References under the JSON Schema meta-schema namespace short-circuit
    /// to the empty schema without touching the network.
    pub(crate) async fn load(&self, reference: &str) -> Result<Value, SchemaError> {
        let uri = resolve_load_uri(&self.base_url, reference);

        if uri.contains(META_SCHEMA_NAMESPACE) {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        tracing::debug!(%uri, "loading referenced STAC sub-schema");
        fetch_schema(&self.client, &uri).await
    }
}

#[async_trait]
impl AsyncRetrieve for StacSchemaRetriever {
    async fn retrieve(
        &self,
        uri: &Uri<String>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        self.load(uri.as_str()).await.map_err(Into::into)
    }
}
