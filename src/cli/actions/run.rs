use crate::cli::{
    actions::{credentials, register, verify, Action},
    globals::GlobalArgs,
};
use crate::passwordless::PasswordlessClient;
use anyhow::{Context, Result};
use std::io::Write;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action, globals: &GlobalArgs) -> Result<()> {
    let config = globals.config().context("invalid --api-url")?;
    let client = PasswordlessClient::from_config(config)?;

    let mut out = std::io::stdout();

    match action {
        Action::VerifyToken(args) => verify::execute(&client, args, &mut out).await?,
        Action::RegisterToken(args) => register::execute(&client, args, &mut out).await?,
        Action::ListCredentials(args) => credentials::list(&client, args, &mut out).await?,
        Action::DeleteCredential(args) => credentials::delete(&client, args).await?,
    }

    out.flush()?;

    Ok(())
}
