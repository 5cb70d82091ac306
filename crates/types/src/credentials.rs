//! Client-credentials grant inputs.

use secrecy::SecretString;

/// Application credentials for the client-credentials token exchange.
///
/// Supplied by the caller and never persisted. The secret is held as a
/// [`SecretString`] so `Debug` output redacts it.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Tenant domain, e.g. `"contoso.onmicrosoft.com"` or a tenant GUID.
    pub tenant_domain: String,
    /// Application (client) id of the registered app.
    pub client_id: String,
    /// Client secret issued for the app registration.
    pub client_secret: SecretString,
}

impl Credentials {
    pub fn new(
        tenant_domain: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            tenant_domain: tenant_domain.into(),
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_debug_redacts_secret() {
        let c = Credentials::new("contoso.onmicrosoft.com", "app-id", "s3cr3t");
        let dbg = format!("{c:?}");
        assert!(!dbg.contains("s3cr3t"));
        assert!(dbg.contains("contoso.onmicrosoft.com"));
    }

    #[test]
    fn test_secret_still_accessible() {
        let c = Credentials::new("t", "id", "s3cr3t");
        assert_eq!(c.client_secret.expose_secret(), "s3cr3t");
    }
}
