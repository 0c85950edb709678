use crate::passwordless::{config::PasswordlessConfig, error::Result};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub api_secret: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String, api_secret: SecretString) -> Self {
        Self {
            api_url,
            api_secret,
        }
    }

    /// Client configuration for the selected deployment.
    /// # Errors
    /// Returns an error if `api_url` is not a valid http(s) URL.
    pub fn config(&self) -> Result<PasswordlessConfig> {
        PasswordlessConfig::new(self.api_secret.expose_secret())?.with_base_url(&self.api_url)
    }
}
