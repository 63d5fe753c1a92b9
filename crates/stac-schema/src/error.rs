//! Schema loading and compilation error types.

use stac_client::FetchError;

/// Errors from building a STAC schema validator.
///
/// All variants are fatal to the enclosing build: no retry, no partial
/// result, no local recovery.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A root or referenced schema fetch returned a non-2xx status.
    #[error("loading error: {status_text} ({uri})")]
    Load {
        /// The schema URI that was requested.
        uri: String,
        status: u16,
        /// Reason phrase for the status, e.g. `Not Found`.
        status_text: String,
    },

    /// Transport-level or deserialization failure from the HTTP client,
    /// propagated unmodified.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The validation engine rejected the (patched) schema set.
    #[error("schema compile error: {reason}")]
    Compile { reason: String },
}

/// Map an engine build failure to a `SchemaError`.
///
/// Sub-schema loads run inside the engine's compile pass, so a failed
/// referenced fetch surfaces here wrapped in the engine's error. Walk the
/// source chain to recover it as the load failure it is; anything else is a
/// genuine compile error.
pub(crate) fn from_build_error(err: jsonschema::ValidationError<'_>) -> SchemaError {
    let mut source: Option<&(dyn std::error::Error + 'static)> = std::error::Error::source(&err);
    while let Some(inner) = source {
        if let Some(schema_err) = inner.downcast_ref::<SchemaError>() {
            if let SchemaError::Load {
                uri,
                status,
                status_text,
            } = schema_err
            {
                return SchemaError::Load {
                    uri: uri.clone(),
                    status: *status,
                    status_text: status_text.clone(),
                };
            }
        }
        source = inner.source();
    }

    SchemaError::Compile {
        reason: err.to_string(),
    }
}
