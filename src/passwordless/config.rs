use crate::passwordless::error::{Error, Result};
use secrecy::SecretString;
use url::Url;

/// Root of the hosted API. Self-hosted deployments and tests override it per client.
pub const DEFAULT_API_URL: &str = "https://api.passwordless.dev/";

/// Immutable per-client settings: where to send requests and the secret that
/// authorizes them. Neither value is ever part of a request body.
#[derive(Debug, Clone)]
pub struct PasswordlessConfig {
    base_url: Url,
    api_secret: SecretString,
}

impl PasswordlessConfig {
    /// Use the hosted API at [`DEFAULT_API_URL`].
    /// # Errors
    /// Returns an error if [`DEFAULT_API_URL`] cannot be parsed.
    pub fn new(api_secret: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(DEFAULT_API_URL)?,
            api_secret: SecretString::from(api_secret.into()),
        })
    }

    /// Point the client at another deployment.
    /// # Errors
    /// Returns an error if `base_url` cannot be parsed or is not http(s).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn api_secret(&self) -> &SecretString {
        &self.api_secret
    }
}

/// Parse a base URL and make sure its path ends with `/`, so relative API paths
/// are appended instead of replacing the last segment.
/// # Errors
/// Returns an error if `raw` cannot be parsed or uses a scheme other than http(s).
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(Error::UnsupportedScheme(scheme.to_string())),
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
