//! The shared-transport Graph client.

use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;
use spgraph_types::{Credentials, Drive, DriveEntry, EntryFilter, GraphError, GraphToken, Result};

use crate::{drives, items, sites, token};

/// Production Graph API base URL.
pub const GRAPH_BASE: &str = "https://graph.microsoft.com/v1.0";

/// Production identity host.
pub const LOGIN_BASE: &str = "https://login.microsoftonline.com";

/// Stateless client for the five document operations.
///
/// Holds the shared connection-pooling `reqwest::Client` and the two base
/// URLs, nothing else. `reqwest::Client` is reference-counted internally and
/// safe for concurrent request issuance, so one `GraphClient` constructed at
/// process start serves all callers for the life of the process. Bearer
/// tokens are supplied per call; no token, listing, or content is cached.
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    graph_base: String,
    login_base: String,
}

impl GraphClient {
    /// Create a client against the production Graph and identity hosts.
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_endpoints(http, GRAPH_BASE, LOGIN_BASE)
    }

    /// Create a client against explicit base URLs (used by tests to point
    /// at a mock server).
    pub fn with_endpoints(
        http: reqwest::Client,
        graph_base: impl Into<String>,
        login_base: impl Into<String>,
    ) -> Self {
        Self {
            http,
            graph_base: graph_base.into(),
            login_base: login_base.into(),
        }
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Exchange application credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Auth`] when the identity host rejects the
    /// exchange (carrying the provider's `error_description`, or
    /// `"Unknown error"` when absent), [`GraphError::Http`] on transport
    /// failure, or [`GraphError::Json`] on a malformed success body.
    pub async fn acquire_token(&self, credentials: &Credentials) -> Result<GraphToken> {
        let url = token::token_url(&self.login_base, &credentials.tenant_domain);
        tracing::debug!(
            tenant = %credentials.tenant_domain,
            client_id = %credentials.client_id,
            "acquiring graph token"
        );

        let resp = self
            .http
            .post(&url)
            .form(&token::form_params(credentials))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(token::auth_error(&body));
        }
        let json: Value = serde_json::from_str(&body)?;
        token::parse_token_response(&json)
    }

    /// Resolve a site name to its opaque site id.
    ///
    /// Returns `Ok(None)` when the payload carries no `id` field.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Api`] on a non-success status (carrying the
    /// provider's `error.message`), [`GraphError::Http`] on transport
    /// failure, or [`GraphError::Json`] on a malformed success body.
    pub async fn site_id(&self, tenant: &str, site: &str, token: &str) -> Result<Option<String>> {
        let url = sites::site_url(&self.graph_base, tenant, site);
        tracing::debug!(%tenant, %site, "resolving site id");

        let json = self.get_json(&url, token).await?;
        Ok(sites::parse_site_response(&json))
    }

    /// List the drives under a site.
    ///
    /// A response without a `value` array yields an empty list.
    ///
    /// # Errors
    ///
    /// As [`site_id`](Self::site_id).
    pub async fn drives(&self, site_id: &str, token: &str) -> Result<Vec<Drive>> {
        let url = drives::drives_url(&self.graph_base, site_id);
        tracing::debug!(%site_id, "listing drives");

        let json = self.get_json(&url, token).await?;
        Ok(drives::parse_drives_response(&json))
    }

    /// List the immediate children of a folder within a drive.
    ///
    /// `base_path` of `None` lists the drive root; otherwise it must begin
    /// with `/`. With a `filter`, only entries carrying that facet are
    /// returned; unfiltered listings include facet-less entries classified
    /// as [`EntryKind::Unknown`](spgraph_types::EntryKind::Unknown).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Validation`] for a base path without a leading
    /// slash (no request is issued); otherwise as
    /// [`site_id`](Self::site_id).
    pub async fn children(
        &self,
        drive_id: &str,
        token: &str,
        base_path: Option<&str>,
        filter: Option<EntryFilter>,
    ) -> Result<Vec<DriveEntry>> {
        let segment = items::folder_segment(base_path)?;
        let url = items::children_url(&self.graph_base, drive_id, &segment);
        tracing::debug!(
            %drive_id,
            base_path = base_path.unwrap_or("/"),
            filter = filter.map_or("none", EntryFilter::as_key),
            "listing children"
        );

        let json = self.get_json(&url, token).await?;
        Ok(items::parse_children_response(&json, filter))
    }

    /// Fetch the raw content of a file, fully buffered.
    ///
    /// Graph answers with a redirect to a pre-authorized download URL; the
    /// client's default redirect policy follows it transparently.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Validation`] for a base path without a leading
    /// slash (no request is issued), [`GraphError::Api`] on a non-success
    /// status, or [`GraphError::Http`] on transport failure.
    pub async fn file_content(
        &self,
        drive_id: &str,
        token: &str,
        file_name: &str,
        base_path: Option<&str>,
    ) -> Result<Bytes> {
        let segment = items::file_segment(base_path, file_name)?;
        let url = items::content_url(&self.graph_base, drive_id, &segment);
        tracing::debug!(
            %drive_id,
            %file_name,
            base_path = base_path.unwrap_or(""),
            "fetching file content"
        );

        let resp = self.get_authed(&url, token).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(api_error(status, &body));
        }
        Ok(resp.bytes().await?)
    }

    // ── Shared request plumbing ───────────────────────────────────────────

    fn get_authed(&self, url: &str, token: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {token}"))
    }

    /// Issue an authenticated GET and decode the success body as JSON.
    async fn get_json(&self, url: &str, token: &str) -> Result<Value> {
        let resp = self.get_authed(url, token).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Translate a non-success Graph response into [`GraphError::Api`].
///
/// The provider reports the reason at `error.message`; non-JSON bodies fall
/// back to their trimmed text, and empty bodies to `"unknown error"`.
fn api_error(status: StatusCode, body: &str) -> GraphError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "unknown error".to_string()
            } else {
                trimmed.to_string()
            }
        });
    GraphError::Api {
        status: status.as_u16(),
        message,
    }
}
