//! # passwordless
//!
//! Typed client for the [passwordless.dev](https://passwordless.dev) API. The remote
//! service performs the WebAuthn ceremonies and the cryptographic verification; this
//! crate only talks to it over HTTPS with the account's API secret.
//!
//! ```no_run
//! use passwordless::{PasswordlessClient, PasswordlessConfig, RegisterTokenRequest};
//!
//! # async fn run() -> Result<(), passwordless::Error> {
//! let config = PasswordlessConfig::new("my-api-secret")?;
//! let client = PasswordlessClient::from_config(config)?;
//!
//! let token = client
//!     .create_register_token(&RegisterTokenRequest::new("alice"))
//!     .await?;
//!
//! let verification = client.verify_sign_in_token("token-from-browser").await?;
//! if verification.success {
//!     println!("signed in: {:?}", verification.username);
//! }
//! # let _ = token;
//! # Ok(())
//! # }
//! ```
//!
//! The `passwordless` binary wraps the same operations for use from a shell; see
//! [`cli`].

pub mod cli;
pub mod passwordless;

pub use crate::passwordless::{
    config::{PasswordlessConfig, DEFAULT_API_URL},
    endpoint_url,
    error::{Error, Result},
    models::{
        AttestationConveyance, AuthenticatorAttachment, DeleteCredentialRequest,
        RegisterTokenRequest, SignInTokenVerification, StoredCredential, UserVerification,
        VerifyTokenRequest,
    },
    PasswordlessClient, APP_USER_AGENT,
};
