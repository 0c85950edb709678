use crate::passwordless::PasswordlessClient;
use anyhow::{anyhow, Context, Result};
use std::io::Write;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub token: String,
}

/// Verify a sign-in token and print the result as JSON.
/// # Errors
/// Returns an error if the API call fails or the token was not verified.
pub async fn execute<W: Write>(client: &PasswordlessClient, args: Args, out: &mut W) -> Result<()> {
    let verification = client
        .verify_sign_in_token(&args.token)
        .await
        .context("Could not verify sign-in token")?;

    writeln!(out, "{}", serde_json::to_string_pretty(&verification)?)?;

    if !verification.success {
        warn!("sign-in token was not verified");

        return Err(anyhow!("sign-in token was not verified"));
    }

    info!("sign-in token verified for {:?}", verification.username);

    Ok(())
}
