//! Drive enumeration for a resolved site.

use serde_json::Value;
use spgraph_types::Drive;

/// Build the drives collection URL for a site id.
#[must_use]
pub fn drives_url(graph_base: &str, site_id: &str) -> String {
    format!("{graph_base}/sites/{site_id}/drives")
}

/// Map a drives success body to `(id, name)` pairs.
///
/// An absent `value` array decodes as an empty list, not an error; elements
/// missing `id` or `name` decode those fields as empty strings.
#[must_use]
pub fn parse_drives_response(json: &Value) -> Vec<Drive> {
    let Some(items) = json.get("value").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .map(|d| Drive {
            id: field_str(d, "id"),
            name: field_str(d, "name"),
        })
        .collect()
}

pub(crate) fn field_str(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
