//! Site name to site id resolution.

use serde_json::Value;

/// Build the site lookup URL for a tenant-relative site name.
#[must_use]
pub fn site_url(graph_base: &str, tenant: &str, site: &str) -> String {
    format!("{graph_base}/sites/{tenant}.sharepoint.com:/sites/{site}")
}

/// Extract the site id from a site lookup success body.
///
/// The `id` field is optional in the payload; its absence is surfaced as
/// `None` rather than an empty string.
#[must_use]
pub fn parse_site_response(json: &Value) -> Option<String> {
    json.get("id").and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_site_url() {
        assert_eq!(
            site_url("https://graph.microsoft.com/v1.0", "acme", "marketing"),
            "https://graph.microsoft.com/v1.0/sites/acme.sharepoint.com:/sites/marketing"
        );
    }

    #[test]
    fn test_parse_site_response_with_id() {
        let body = json!({
            "id": "acme.sharepoint.com,4a6c,9f31",
            "displayName": "Marketing"
        });
        assert_eq!(
            parse_site_response(&body),
            Some("acme.sharepoint.com,4a6c,9f31".to_string())
        );
    }

    #[test]
    fn test_parse_site_response_without_id() {
        assert_eq!(parse_site_response(&json!({"displayName": "Marketing"})), None);
    }
}
