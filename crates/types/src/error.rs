//! Unified error type for the spgraph workspace.

use thiserror::Error;

/// Enumerates all error kinds a Graph operation can produce.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Client-side input validation failure; no request was issued.
    #[error("validation error: {0}")]
    Validation(String),

    /// The token endpoint rejected the credential exchange.
    #[error("authentication error: {0}")]
    Auth(String),

    /// A Graph endpoint returned a non-success status.
    #[error("graph api error: status={status}, message={message}")]
    Api { status: u16, message: String },

    /// HTTP transport error (connect, TLS, body read).
    #[error("http error: {0}")]
    Http(String),

    /// JSON deserialization error where JSON was expected.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Feature-gated From impls ──────────────────────────────────────────────────

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for GraphError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let err = GraphError::Validation("base path must begin with a slash".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: base path must begin with a slash"
        );
    }

    #[test]
    fn test_error_display_auth() {
        let err = GraphError::Auth("AADSTS7000215: invalid client secret".to_string());
        assert!(err.to_string().contains("AADSTS7000215"));
    }

    #[test]
    fn test_error_display_api() {
        let err = GraphError::Api {
            status: 404,
            message: "Requested site could not be found".to_string(),
        };
        let s = err.to_string();
        assert!(s.contains("404"));
        assert!(s.contains("Requested site could not be found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json {{{").unwrap_err();
        let err: GraphError = json_err.into();
        assert!(matches!(err, GraphError::Json(_)));
    }
}
