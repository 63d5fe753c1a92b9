//! # stac-schema — versioned STAC JSON Schema validation
//!
//! Fetches the published JSON Schema for a STAC object type and spec
//! version, patches it for the validation engine, and compiles it into a
//! [`jsonschema::Validator`]. Referenced sub-schemas are resolved
//! recursively and on demand during the compile, with a guard that keeps the
//! self-referential JSON Schema meta-schema from triggering an infinite
//! fetch loop.
//!
//! Schema documents come from the STAC spec repository on GitHub raw
//! content, keyed by version tag — except `1.0.0-beta.1`, whose published
//! schemas are defective and are served from the `dev` branch instead. All
//! fetches go through [`stac_client::StacClient`], so a configured proxy
//! mapping applies to schema traffic like any other catalog resource.
//!
//! No caching: every call re-fetches and re-compiles. Callers that validate
//! many instances against one (type, version) pair should hold on to the
//! returned validator.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use stac_client::StacClient;
//! use stac_schema::{SchemaClient, StacObjectType};
//!
//! let schemas = SchemaClient::new(StacClient::new(None));
//! let validator = schemas
//!     .fetch_schema_validator(StacObjectType::Item, "1.0.0")
//!     .await?;
//! let item = serde_json::json!({"type": "Feature", "id": "20201211_223832_CS2"});
//! if !validator.is_valid(&item) {
//!     for error in validator.iter_errors(&item) {
//!         eprintln!("{}: {error}", error.instance_path);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod patch;
pub mod resolve;
mod retriever;
pub mod types;

pub use error::SchemaError;
pub use patch::patch_schema;
pub use resolve::resolve_load_uri;
pub use types::{StacObjectType, UnknownObjectType};

pub use jsonschema::Validator;

use stac_client::StacClient;

/// Default schema repository root: raw content of radiantearth/stac-spec.
pub const DEFAULT_SCHEMA_REPO_ROOT: &str =
    "https://raw.githubusercontent.com/radiantearth/stac-spec";

/// The tagged 1.0.0-beta.1 release ships schemas with known defects fixed
/// only on the development branch, so that version is served from `dev`.
const DEV_BRANCH_VERSION: &str = "1.0.0-beta.1";

/// Builds compiled schema validators for STAC objects.
#[derive(Debug, Clone)]
pub struct SchemaClient {
    client: StacClient,
    repo_root: String,
}

impl SchemaClient {
    /// Create a schema client against the canonical STAC spec repository.
    pub fn new(client: StacClient) -> Self {
        Self::with_repo_root(client, DEFAULT_SCHEMA_REPO_ROOT)
    }

    /// Create a schema client against an alternative repository root
    /// (mirrors, test servers). The root must not end with a slash.
    pub fn with_repo_root(client: StacClient, repo_root: impl Into<String>) -> Self {
        Self {
            client,
            repo_root: repo_root.into(),
        }
    }

    /// Schema base URL for a spec version: the `dev` branch for
    /// `1.0.0-beta.1`, the `v{version}` tag otherwise.
    pub fn base_url(&self, version: &str) -> String {
        if version == DEV_BRANCH_VERSION {
            format!("{}/dev", self.repo_root)
        } else {
            format!("{}/v{version}", self.repo_root)
        }
    }

    /// Fetch and compile the schema validator for one (object type, spec
    /// version) pair.
    ///
    /// Fetches are strictly sequential: the root schema first, then each
    /// referenced sub-schema as the engine's compile pass requests it. The
    /// returned validator reports pass/fail plus structured violation
    /// details via the engine's native API.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::Load`] — a root or referenced schema fetch returned
    ///   a non-2xx status; carries the status's reason phrase.
    /// - [`SchemaError::Fetch`] — transport-level failure, propagated
    ///   unmodified.
    /// - [`SchemaError::Compile`] — the engine rejected the schema set.
    pub async fn fetch_schema_validator(
        &self,
        object_type: StacObjectType,
        version: &str,
    ) -> Result<Validator, SchemaError> {
        let base_url = self.base_url(version);
        let schema_url = format!("{base_url}/{object_type}-spec/json-schema/{object_type}.json");

        tracing::debug!(uri = %schema_url, "loading root STAC schema");
        let root = retriever::fetch_schema(&self.client, &schema_url).await?;

        let retriever = retriever::StacSchemaRetriever::new(self.client.clone(), base_url);
        jsonschema::async_options()
            .with_retriever(retriever)
            .build(&root)
            .await
            .map_err(error::from_build_error)
    }
}
