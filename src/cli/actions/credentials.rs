use crate::passwordless::PasswordlessClient;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

#[derive(Debug)]
pub struct ListArgs {
    pub username: String,
}

#[derive(Debug)]
pub struct DeleteArgs {
    pub credential_id: String,
}

/// Print the credentials of a user as a JSON array.
/// # Errors
/// Returns an error if the API call fails.
pub async fn list<W: Write>(client: &PasswordlessClient, args: ListArgs, out: &mut W) -> Result<()> {
    let credentials = client
        .list_credentials(&args.username)
        .await
        .with_context(|| format!("Could not list credentials for {}", args.username))?;

    info!("{} credentials found", credentials.len());

    writeln!(out, "{}", serde_json::to_string_pretty(&credentials)?)?;

    Ok(())
}

/// # Errors
/// Returns an error if the API call fails.
pub async fn delete(client: &PasswordlessClient, args: DeleteArgs) -> Result<()> {
    client
        .delete_credential(&args.credential_id)
        .await
        .with_context(|| format!("Could not delete credential {}", args.credential_id))?;

    info!("credential {} deleted", args.credential_id);

    Ok(())
}
