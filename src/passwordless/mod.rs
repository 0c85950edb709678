//! Client for the passwordless.dev REST API.
//!
//! Every call follows the same path: join the operation's path onto the configured
//! base URL, attach the `ApiSecret` header, send the JSON body, reject non-2xx
//! statuses with [`Error::HttpStatus`] and decode the body. A body that does not
//! match the expected shape is reported as [`Error::Decode`], so callers can tell a
//! rejected request from an unexpected answer.
//!
//! Calls are independent. Dropping a returned future aborts the request in flight;
//! nothing is retried or cached.

pub mod config;
pub mod error;
pub mod models;

use self::{
    config::PasswordlessConfig,
    error::{Error, Result},
    models::{
        DeleteCredentialRequest, RegisterTokenRequest, SignInTokenVerification,
        StoredCredential, VerifyTokenRequest,
    },
};
use reqwest::{
    header::{HeaderValue, ACCEPT},
    Client, Method,
};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, info_span, Instrument};
use url::Url;

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const API_SECRET_HEADER: &str = "ApiSecret";

const SIGNIN_VERIFY: &str = "signin/verify";
const REGISTER_TOKEN: &str = "register/token";
const CREDENTIALS_LIST: &str = "credentials/list";
const CREDENTIALS_DELETE: &str = "credentials/delete";

/// Join an API path onto the base URL.
/// # Errors
/// Returns an error if the joined URL cannot be parsed.
pub fn endpoint_url(base_url: &Url, path: &str) -> Result<Url> {
    let endpoint_url = base_url.join(path.trim_start_matches('/'))?;

    debug!("endpoint URL: {}", endpoint_url);

    Ok(endpoint_url)
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation { field });
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(url: &Url, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| {
        error!("Failed to decode response from {}: {}", url, source);

        Error::Decode {
            url: url.to_string(),
            source,
        }
    })
}

#[derive(Debug, Clone)]
pub struct PasswordlessClient {
    http: Client,
    config: PasswordlessConfig,
}

impl PasswordlessClient {
    /// Use a caller-owned HTTP client, e.g. one with custom timeouts or proxies.
    #[must_use]
    pub fn new(http: Client, config: PasswordlessConfig) -> Self {
        Self { http, config }
    }

    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: PasswordlessConfig) -> Result<Self> {
        let http = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self::new(http, config))
    }

    #[must_use]
    pub fn config(&self) -> &PasswordlessConfig {
        &self.config
    }

    /// Verify the token a browser obtained at the end of a sign-in ceremony.
    ///
    /// A token the service does not accept comes back as `Ok` with
    /// `success == false`.
    /// # Errors
    /// Returns an error if `token` is empty, the request fails, the service answers
    /// with a non-success status, or the body is not a verification result.
    pub async fn verify_sign_in_token(&self, token: &str) -> Result<SignInTokenVerification> {
        require("token", token)?;

        let url = endpoint_url(self.config.base_url(), SIGNIN_VERIFY)?;

        let span = info_span!(
            "passwordless.verify_sign_in_token",
            http.method = "POST",
            url = %url
        );
        let body = self
            .execute(Method::POST, &url, Some(&VerifyTokenRequest { token }))
            .instrument(span)
            .await?;

        let verification: SignInTokenVerification = decode(&url, &body)?;

        debug!(
            "sign-in token verified: success={}, username={:?}",
            verification.success, verification.username
        );

        Ok(verification)
    }

    /// Create a token that lets the browser register a credential for
    /// `request.username`. The token is returned exactly as the service sent it.
    /// # Errors
    /// Returns an error if the username is empty, the request fails, the service
    /// answers with a non-success status, or the body is not valid UTF-8.
    pub async fn create_register_token(&self, request: &RegisterTokenRequest) -> Result<String> {
        require("username", &request.username)?;

        let url = endpoint_url(self.config.base_url(), REGISTER_TOKEN)?;

        debug!("register token for username: {}", request.username);

        let span = info_span!(
            "passwordless.create_register_token",
            http.method = "POST",
            url = %url
        );
        self.execute(Method::POST, &url, Some(request))
            .instrument(span)
            .await
    }

    /// List the credentials registered to `username`, in the order the service
    /// returns them. A user without credentials yields an empty vector.
    /// # Errors
    /// Returns an error if `username` is empty, the request fails, the service
    /// answers with a non-success status, or the body is not a credential list.
    pub async fn list_credentials(&self, username: &str) -> Result<Vec<StoredCredential>> {
        require("username", username)?;

        let mut url = endpoint_url(self.config.base_url(), CREDENTIALS_LIST)?;
        url.query_pairs_mut().append_pair("username", username);

        let span = info_span!(
            "passwordless.list_credentials",
            http.method = "GET",
            url = %url
        );
        let body = self
            .execute(Method::GET, &url, None::<&()>)
            .instrument(span)
            .await?;

        let credentials: Vec<StoredCredential> = decode(&url, &body)?;

        debug!("{} credentials for username: {}", credentials.len(), username);

        Ok(credentials)
    }

    /// Delete a credential by the id the service issued for it. Whether deleting an
    /// unknown id succeeds is up to the service; a non-success status is returned
    /// as [`Error::HttpStatus`].
    /// # Errors
    /// Returns an error if `credential_id` is empty, the request fails or the
    /// service answers with a non-success status.
    pub async fn delete_credential(&self, credential_id: &str) -> Result<()> {
        require("credential id", credential_id)?;

        let url = endpoint_url(self.config.base_url(), CREDENTIALS_DELETE)?;

        let span = info_span!(
            "passwordless.delete_credential",
            http.method = "POST",
            url = %url
        );
        self.execute(
            Method::POST,
            &url,
            Some(&DeleteCredentialRequest { credential_id }),
        )
        .instrument(span)
        .await?;

        Ok(())
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
    ) -> Result<String> {
        let mut secret = HeaderValue::from_str(self.config.api_secret().expose_secret())
            .map_err(|_| Error::InvalidSecret)?;
        secret.set_sensitive(true);

        let mut request = self
            .http
            .request(method, url.clone())
            .header(ACCEPT, "application/json")
            .header(API_SECRET_HEADER, secret);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            error!("{} - {}", url, status);

            return Err(Error::HttpStatus {
                url: url.to_string(),
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        // success bodies are returned verbatim
        String::from_utf8(bytes.to_vec()).map_err(|source| {
            error!("Response from {} is not valid UTF-8: {}", url, source);

            Error::Utf8 {
                url: url.to_string(),
                source,
            }
        })
    }
}
