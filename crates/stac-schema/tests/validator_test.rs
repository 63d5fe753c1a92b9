//! End-to-end validator builds against a wiremock STAC schema repository.
//!
//! The mock server mimics the layout of raw.githubusercontent.com for the
//! stac-spec repository: `/{ref}/{type}-spec/json-schema/{type}.json` plus
//! common-metadata fragments under `/{ref}/item-spec/json-schema/`.

use serde_json::json;
use stac_client::{ProxyMapping, StacClient};
use stac_schema::{SchemaClient, SchemaError, StacObjectType, DEFAULT_SCHEMA_REPO_ROOT};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Root item schema exercising all three reference shapes: a bare
/// common-metadata name, a sibling path, and an absolute meta-schema URI.
fn item_schema() -> serde_json::Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "id": "https://stale.example.com/item.json",
        "type": "object",
        "required": ["type", "id"],
        "properties": {
            "type": { "const": "Feature" },
            "id": { "$ref": "basics.json#/definitions/identifier" },
            "links": {
                "$ref": "../../catalog-spec/json-schema/catalog.json#/definitions/links"
            },
            "extra": { "$ref": "http://json-schema.org/draft-07/schema#" }
        }
    })
}

fn basics_schema() -> serde_json::Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "definitions": {
            "identifier": { "type": "string", "minLength": 1 }
        }
    })
}

fn catalog_schema() -> serde_json::Value {
    json!({
        "definitions": {
            "links": { "type": "array" }
        }
    })
}

async fn mount_schema(server: &MockServer, schema_path: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(schema_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_item_repo(server: &MockServer, git_ref: &str) {
    mount_schema(
        server,
        &format!("/{git_ref}/item-spec/json-schema/item.json"),
        item_schema(),
    )
    .await;
    mount_schema(
        server,
        &format!("/{git_ref}/item-spec/json-schema/basics.json"),
        basics_schema(),
    )
    .await;
    mount_schema(
        server,
        &format!("/{git_ref}/catalog-spec/json-schema/catalog.json"),
        catalog_schema(),
    )
    .await;
}

#[tokio::test]
async fn builds_validator_with_recursive_sub_schema_resolution() {
    let mock_server = MockServer::start().await;
    mount_item_repo(&mock_server, "v1.0.0").await;

    let schemas = SchemaClient::with_repo_root(StacClient::new(None), mock_server.uri());
    let validator = schemas
        .fetch_schema_validator(StacObjectType::Item, "1.0.0")
        .await
        .unwrap();

    assert!(validator.is_valid(&json!({
        "type": "Feature",
        "id": "20201211_223832_CS2",
        "links": []
    })));

    // Empty id violates the common-metadata minLength constraint.
    assert!(!validator.is_valid(&json!({ "type": "Feature", "id": "" })));

    // Wrong literal for "type".
    assert!(!validator.is_valid(&json!({ "type": "Catalog", "id": "x" })));

    // The meta-schema reference resolved to the empty schema, which accepts
    // anything, and never hit the network.
    assert!(validator.is_valid(&json!({
        "type": "Feature",
        "id": "x",
        "extra": {"anything": ["goes", 1, null]}
    })));
}

#[tokio::test]
async fn validator_reports_structured_violations() {
    let mock_server = MockServer::start().await;
    mount_item_repo(&mock_server, "v1.0.0").await;

    let schemas = SchemaClient::with_repo_root(StacClient::new(None), mock_server.uri());
    let validator = schemas
        .fetch_schema_validator(StacObjectType::Item, "1.0.0")
        .await
        .unwrap();

    let instance = json!({ "type": "Feature", "id": "ok", "links": "not-an-array" });
    let errors: Vec<_> = validator.iter_errors(&instance).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].instance_path.to_string(), "/links");
}

#[tokio::test]
async fn beta_one_version_is_fetched_from_dev_branch() {
    let mock_server = MockServer::start().await;
    mount_item_repo(&mock_server, "dev").await;

    let schemas = SchemaClient::with_repo_root(StacClient::new(None), mock_server.uri());
    let validator = schemas
        .fetch_schema_validator(StacObjectType::Item, "1.0.0-beta.1")
        .await
        .unwrap();
    assert!(validator.is_valid(&json!({ "type": "Feature", "id": "x" })));
}

#[tokio::test]
async fn catalog_schema_uses_its_own_spec_path() {
    let mock_server = MockServer::start().await;
    mount_schema(
        &mock_server,
        "/v1.0.0/catalog-spec/json-schema/catalog.json",
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "required": ["id"]
        }),
    )
    .await;

    let schemas = SchemaClient::with_repo_root(StacClient::new(None), mock_server.uri());
    let validator = schemas
        .fetch_schema_validator(StacObjectType::Catalog, "1.0.0")
        .await
        .unwrap();
    assert!(validator.is_valid(&json!({ "id": "root" })));
    assert!(!validator.is_valid(&json!({})));
}

#[tokio::test]
async fn schema_fetches_go_through_the_general_proxy() {
    let mock_server = MockServer::start().await;
    mount_item_repo(&mock_server, "v1.0.0").await;

    // Proxy the canonical repository host to the mock server; the schema
    // client keeps building canonical URLs and the rewrite reroutes every
    // fetch, sub-schemas included.
    let client = StacClient::new(Some(ProxyMapping::new(
        DEFAULT_SCHEMA_REPO_ROOT,
        mock_server.uri(),
    )));
    let schemas = SchemaClient::new(client);

    let validator = schemas
        .fetch_schema_validator(StacObjectType::Item, "1.0.0")
        .await
        .unwrap();
    assert!(validator.is_valid(&json!({ "type": "Feature", "id": "x" })));
}

#[tokio::test]
async fn root_schema_404_fails_with_load_error() {
    let mock_server = MockServer::start().await;
    // Nothing mounted: every path answers 404.

    let schemas = SchemaClient::with_repo_root(StacClient::new(None), mock_server.uri());
    let err = schemas
        .fetch_schema_validator(StacObjectType::Item, "1.0.0")
        .await
        .unwrap_err();

    match err {
        SchemaError::Load {
            status,
            status_text,
            uri,
        } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
            assert!(uri.ends_with("/v1.0.0/item-spec/json-schema/item.json"));
        }
        other => panic!("expected Load error, got: {other:?}"),
    }
}

#[tokio::test]
async fn referenced_schema_404_fails_the_build_with_status_text() {
    let mock_server = MockServer::start().await;
    // Root is served but its basics.json reference is not.
    mount_schema(
        &mock_server,
        "/v1.0.0/item-spec/json-schema/item.json",
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "id": { "$ref": "basics.json#/definitions/identifier" }
            }
        }),
    )
    .await;

    let schemas = SchemaClient::with_repo_root(StacClient::new(None), mock_server.uri());
    let err = schemas
        .fetch_schema_validator(StacObjectType::Item, "1.0.0")
        .await
        .unwrap_err();
    assert!(
        err.to_string().contains("Not Found"),
        "expected the sub-schema's status text to surface, got: {err}"
    );
}

#[tokio::test]
async fn root_schema_500_surfaces_server_error_text() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0.0/item-spec/json-schema/item.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let schemas = SchemaClient::with_repo_root(StacClient::new(None), mock_server.uri());
    let err = schemas
        .fetch_schema_validator(StacObjectType::Item, "1.0.0")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn transport_failure_propagates_unmodified() {
    // Nothing listens on this port.
    let schemas =
        SchemaClient::with_repo_root(StacClient::new(None), "http://127.0.0.1:1".to_string());
    let err = schemas
        .fetch_schema_validator(StacObjectType::Item, "1.0.0")
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Fetch(_)));
}
