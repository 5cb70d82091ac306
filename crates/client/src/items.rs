//! Children listing and file content paths under a drive root.
//!
//! Graph addresses items relative to a drive root with a colon-wrapped path
//! segment: `/drives/{id}/root:/Reports:/children`. An absent base path
//! addresses the root itself and needs no segment.

use serde_json::Value;
use spgraph_types::{DriveEntry, EntryFilter, EntryKind, GraphError, Result};

use crate::drives::field_str;

/// Build the colon-wrapped segment for a folder path.
///
/// `None` yields the empty segment (the drive root).
///
/// # Errors
///
/// Returns [`GraphError::Validation`] when the base path does not begin
/// with `/`.
pub fn folder_segment(base_path: Option<&str>) -> Result<String> {
    match base_path {
        None => Ok(String::new()),
        Some(p) => {
            validate_base_path(p)?;
            Ok(format!(":{p}:"))
        }
    }
}

/// Build the colon-wrapped segment addressing a file within a folder.
///
/// # Errors
///
/// Returns [`GraphError::Validation`] when the base path does not begin
/// with `/`.
pub fn file_segment(base_path: Option<&str>, file_name: &str) -> Result<String> {
    if let Some(p) = base_path {
        validate_base_path(p)?;
    }
    let path = format!("{}/{file_name}", base_path.unwrap_or(""));
    Ok(format!(":{path}:"))
}

fn validate_base_path(base_path: &str) -> Result<()> {
    if base_path.starts_with('/') {
        Ok(())
    } else {
        Err(GraphError::Validation(
            "base path must always begin with a slash /".into(),
        ))
    }
}

/// Build the children listing URL for a drive and folder segment.
#[must_use]
pub fn children_url(graph_base: &str, drive_id: &str, segment: &str) -> String {
    format!("{graph_base}/drives/{drive_id}/root{segment}/children")
}

/// Build the content download URL for a drive and file segment.
#[must_use]
pub fn content_url(graph_base: &str, drive_id: &str, segment: &str) -> String {
    format!("{graph_base}/drives/{drive_id}/root{segment}/content")
}

/// Classify an item payload by facet presence.
#[must_use]
pub fn classify(item: &Value) -> EntryKind {
    if item.get("folder").is_some() {
        EntryKind::Folder
    } else if item.get("file").is_some() {
        EntryKind::File
    } else {
        EntryKind::Unknown
    }
}

/// Map a children success body to entries, applying the optional facet
/// filter.
///
/// An absent `value` array decodes as an empty list. With a filter, only
/// elements carrying the filter's facet key are kept; unfiltered listings
/// also include entries with neither facet, classified as
/// [`EntryKind::Unknown`].
#[must_use]
pub fn parse_children_response(json: &Value, filter: Option<EntryFilter>) -> Vec<DriveEntry> {
    let Some(items) = json.get("value").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| match filter {
            None => true,
            Some(f) => item.get(f.as_key()).is_some(),
        })
        .map(|item| DriveEntry {
            name: field_str(item, "name"),
            web_url: field_str(item, "webUrl"),
            kind: classify(item),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_children() -> Value {
        json!({
            "value": [
                {"name": "Reports", "webUrl": "https://acme.sharepoint.com/Reports", "folder": {"childCount": 3}},
                {"name": "q1.pdf", "webUrl": "https://acme.sharepoint.com/q1.pdf", "file": {"mimeType": "application/pdf"}},
                {"name": "Notebook", "webUrl": "https://acme.sharepoint.com/Notebook"}
            ]
        })
    }

    #[test]
    fn test_folder_segment_none_is_empty() {
        assert_eq!(folder_segment(None).unwrap(), "");
    }

    #[test]
    fn test_folder_segment_wraps_path() {
        assert_eq!(folder_segment(Some("/Reports/2024")).unwrap(), ":/Reports/2024:");
    }

    #[test]
    fn test_folder_segment_rejects_missing_slash() {
        let err = folder_segment(Some("Reports")).unwrap_err();
        assert!(matches!(err, GraphError::Validation(_)));
    }

    #[test]
    fn test_file_segment_without_base_path() {
        assert_eq!(file_segment(None, "q1.pdf").unwrap(), ":/q1.pdf:");
    }

    #[test]
    fn test_file_segment_with_base_path() {
        assert_eq!(
            file_segment(Some("/Reports"), "q1.pdf").unwrap(),
            ":/Reports/q1.pdf:"
        );
    }

    #[test]
    fn test_file_segment_rejects_missing_slash() {
        let err = file_segment(Some("Reports"), "q1.pdf").unwrap_err();
        assert!(matches!(err, GraphError::Validation(_)));
    }

    #[test]
    fn test_children_url_root() {
        assert_eq!(
            children_url("https://graph.microsoft.com/v1.0", "d1", ""),
            "https://graph.microsoft.com/v1.0/drives/d1/root/children"
        );
    }

    #[test]
    fn test_children_url_with_segment() {
        assert_eq!(
            children_url("https://graph.microsoft.com/v1.0", "d1", ":/Reports:"),
            "https://graph.microsoft.com/v1.0/drives/d1/root:/Reports:/children"
        );
    }

    #[test]
    fn test_content_url() {
        assert_eq!(
            content_url("https://graph.microsoft.com/v1.0", "d1", ":/Reports/q1.pdf:"),
            "https://graph.microsoft.com/v1.0/drives/d1/root:/Reports/q1.pdf:/content"
        );
    }

    #[test]
    fn test_classify_by_facet() {
        assert_eq!(classify(&json!({"folder": {}})), EntryKind::Folder);
        assert_eq!(classify(&json!({"file": {}})), EntryKind::File);
        assert_eq!(classify(&json!({"name": "Notebook"})), EntryKind::Unknown);
    }

    #[test]
    fn test_parse_children_unfiltered_includes_unknown() {
        let entries = parse_children_response(&sample_children(), None);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, EntryKind::Folder);
        assert_eq!(entries[1].kind, EntryKind::File);
        assert_eq!(entries[2].kind, EntryKind::Unknown);
    }

    #[test]
    fn test_parse_children_folder_filter() {
        let entries = parse_children_response(&sample_children(), Some(EntryFilter::Folder));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Reports");
        assert_eq!(entries[0].web_url, "https://acme.sharepoint.com/Reports");
        assert_eq!(entries[0].kind, EntryKind::Folder);
    }

    #[test]
    fn test_parse_children_file_filter() {
        let entries = parse_children_response(&sample_children(), Some(EntryFilter::File));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "q1.pdf");
    }

    #[test]
    fn test_parse_children_absent_value_is_empty() {
        assert!(parse_children_response(&json!({}), None).is_empty());
    }
}
