use crate::cli::{
    actions::{credentials, register, verify, Action},
    globals::GlobalArgs,
};
use crate::passwordless::{config::DEFAULT_API_URL, models::RegisterTokenRequest};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;

/// # Errors
/// Returns an error if required arguments are missing or hold unexpected values.
pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let api_url = matches
        .get_one::<String>("api-url")
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let api_secret = matches
        .get_one::<String>("api-secret")
        .cloned()
        .context("missing required argument: --api-secret")?;

    let globals = GlobalArgs::new(api_url, SecretString::from(api_secret));

    // Closure to return a required string argument of a subcommand
    let required = |sub_m: &clap::ArgMatches, name: &str| -> Result<String> {
        sub_m
            .get_one::<String>(name)
            .cloned()
            .with_context(|| format!("missing required argument: {name}"))
    };

    let action = match matches.subcommand() {
        Some(("verify-token", sub_m)) => Action::VerifyToken(verify::Args {
            token: required(sub_m, "token")?,
        }),
        Some(("register-token", sub_m)) => {
            let mut request = RegisterTokenRequest::new(required(sub_m, "username")?)
                .with_resident_key(sub_m.get_flag("require-resident-key"));

            if let Some(display_name) = sub_m.get_one::<String>("display-name") {
                request = request.with_display_name(display_name.as_str());
            }
            if let Some(value) = sub_m.get_one::<String>("attestation") {
                request = request.with_attestation(register::attestation(value)?);
            }
            if let Some(value) = sub_m.get_one::<String>("authenticator-attachment") {
                request = request
                    .with_authenticator_attachment(register::authenticator_attachment(value)?);
            }
            if let Some(value) = sub_m.get_one::<String>("user-verification") {
                request = request.with_user_verification(register::user_verification(value)?);
            }

            Action::RegisterToken(register::Args { request })
        }
        Some(("list-credentials", sub_m)) => Action::ListCredentials(credentials::ListArgs {
            username: required(sub_m, "username")?,
        }),
        Some(("delete-credential", sub_m)) => Action::DeleteCredential(credentials::DeleteArgs {
            credential_id: required(sub_m, "credential-id")?,
        }),
        Some((name, _)) => return Err(anyhow!("unknown command: {name}")),
        None => return Err(anyhow!("missing command")),
    };

    Ok((action, globals))
}
