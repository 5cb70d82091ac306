//! Client-credentials token exchange against the identity host.

use secrecy::ExposeSecret as _;
use serde_json::Value;
use spgraph_types::{Credentials, GraphError, GraphToken, Result};

/// Fixed OAuth scope for app-only Graph access.
pub const SCOPE: &str = "https://graph.microsoft.com/.default";

/// Build the token endpoint URL for a tenant.
#[must_use]
pub fn token_url(login_base: &str, tenant_domain: &str) -> String {
    format!("{login_base}/{tenant_domain}/oauth2/v2.0/token")
}

/// Build the form-encoded body for the client-credentials grant.
#[must_use]
pub fn form_params(credentials: &Credentials) -> [(&'static str, String); 4] {
    [
        ("grant_type", "client_credentials".to_string()),
        ("client_id", credentials.client_id.clone()),
        (
            "client_secret",
            credentials.client_secret.expose_secret().to_string(),
        ),
        ("scope", SCOPE.to_string()),
    ]
}

/// Parse the token endpoint success body into a [`GraphToken`].
///
/// `expires_in` is an optional lifetime in seconds; when present the token's
/// expiry is the absolute instant `now + expires_in`.
///
/// # Errors
///
/// Returns [`GraphError::Auth`] if the body lacks an `access_token` field.
pub fn parse_token_response(json: &Value) -> Result<GraphToken> {
    let access_token = json
        .get("access_token")
        .and_then(Value::as_str)
        .ok_or_else(|| GraphError::Auth("missing access_token in response".into()))?;

    let mut token = GraphToken::new(access_token);
    if let Some(expires_in) = json.get("expires_in").and_then(Value::as_u64) {
        token = token.with_expiry(expires_in);
    }
    Ok(token)
}

/// Translate a non-success token endpoint body into [`GraphError::Auth`].
///
/// The provider reports the reason in `error_description`; bodies without it
/// (or that are not JSON at all) map to `"Unknown error"`.
#[must_use]
pub fn auth_error(body: &str) -> GraphError {
    let description = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error_description")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "Unknown error".to_string());
    GraphError::Auth(description)
}
