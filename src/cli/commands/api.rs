use crate::passwordless::config::DEFAULT_API_URL;
use clap::{Arg, Command};

pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Passwordless API base URL, override for self-hosted deployments")
                .env("PASSWORDLESS_API_URL")
                .default_value(DEFAULT_API_URL),
        )
        .arg(
            Arg::new("api-secret")
                .long("api-secret")
                .help("Passwordless API secret, sent as the ApiSecret header")
                .env("PASSWORDLESS_API_SECRET")
                .hide_env_values(true)
                .required(true),
        )
}
