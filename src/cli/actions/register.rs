use crate::passwordless::{
    models::{AttestationConveyance, AuthenticatorAttachment, RegisterTokenRequest, UserVerification},
    PasswordlessClient,
};
use anyhow::{anyhow, Context, Result};
use std::io::Write;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub request: RegisterTokenRequest,
}

/// Map the `--attestation` value onto the API enum.
/// # Errors
/// Returns an error for values outside none|indirect|direct|enterprise.
pub fn attestation(value: &str) -> Result<AttestationConveyance> {
    match value {
        "none" => Ok(AttestationConveyance::None),
        "indirect" => Ok(AttestationConveyance::Indirect),
        "direct" => Ok(AttestationConveyance::Direct),
        "enterprise" => Ok(AttestationConveyance::Enterprise),
        other => Err(anyhow!("invalid attestation: {other}")),
    }
}

/// # Errors
/// Returns an error for values outside platform|cross-platform.
pub fn authenticator_attachment(value: &str) -> Result<AuthenticatorAttachment> {
    match value {
        "platform" => Ok(AuthenticatorAttachment::Platform),
        "cross-platform" => Ok(AuthenticatorAttachment::CrossPlatform),
        other => Err(anyhow!("invalid authenticator attachment: {other}")),
    }
}

/// # Errors
/// Returns an error for values outside required|preferred|discouraged.
pub fn user_verification(value: &str) -> Result<UserVerification> {
    match value {
        "required" => Ok(UserVerification::Required),
        "preferred" => Ok(UserVerification::Preferred),
        "discouraged" => Ok(UserVerification::Discouraged),
        other => Err(anyhow!("invalid user verification: {other}")),
    }
}

/// Create a registration token and print it as received.
/// # Errors
/// Returns an error if the API call fails.
pub async fn execute<W: Write>(client: &PasswordlessClient, args: Args, out: &mut W) -> Result<()> {
    let token = client
        .create_register_token(&args.request)
        .await
        .context("Could not create registration token")?;

    info!("registration token created for {}", args.request.username);

    writeln!(out, "{token}")?;

    Ok(())
}
