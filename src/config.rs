//! CLI configuration: credentials and tenant names.
//!
//! Values merge in precedence order: YAML file, then `SPGRAPH_*` environment
//! variables. Nothing is written back; the secret never leaves the process.

use figment::{
    Figment,
    providers::{Env, Format as _, Yaml},
};
use serde::{Deserialize, Serialize};
use spgraph_types::Credentials;
use std::path::Path;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "spgraph.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Tenant short name, the `{tenant}.sharepoint.com` host prefix.
    #[serde(default)]
    pub tenant: Option<String>,
    /// Tenant domain for the token exchange, e.g. `acme.onmicrosoft.com`.
    #[serde(default)]
    pub tenant_domain: Option<String>,
    /// Application (client) id.
    #[serde(default)]
    pub client_id: Option<String>,
    /// Client secret for the app registration.
    #[serde(default)]
    pub client_secret: Option<String>,
}

impl Config {
    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the YAML is invalid or extraction
    /// fails.
    #[allow(clippy::result_large_err)]
    pub fn from_yaml(yaml: &str) -> Result<Self, figment::Error> {
        Figment::new().merge(Yaml::string(yaml)).extract()
    }

    /// Load configuration from a file path (or [`DEFAULT_CONFIG_FILE`])
    /// merged with the environment. A missing file contributes no values.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the file cannot be parsed.
    #[allow(clippy::result_large_err)]
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("SPGRAPH_"))
            .extract()
    }

    /// Assemble token-exchange credentials, requiring the three fields.
    ///
    /// # Errors
    ///
    /// Names the first missing field.
    pub fn credentials(&self) -> anyhow::Result<Credentials> {
        let tenant_domain = require(self.tenant_domain.as_deref(), "tenant_domain")?;
        let client_id = require(self.client_id.as_deref(), "client_id")?;
        let client_secret = require(self.client_secret.as_deref(), "client_secret")?;
        Ok(Credentials::new(tenant_domain, client_id, client_secret))
    }

    /// The tenant short name, required by the site-addressed commands.
    ///
    /// # Errors
    ///
    /// Fails when `tenant` is not configured.
    pub fn tenant(&self) -> anyhow::Result<&str> {
        require(self.tenant.as_deref(), "tenant")
    }
}

fn require<'a>(value: Option<&'a str>, field: &str) -> anyhow::Result<&'a str> {
    value.ok_or_else(|| {
        anyhow::anyhow!(
            "missing '{field}': set it in {DEFAULT_CONFIG_FILE} or as SPGRAPH_{}",
            field.to_uppercase()
        )
    })
}
