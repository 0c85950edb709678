mod api;
mod logging;

use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        PossibleValuesParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

fn username_arg() -> Arg {
    Arg::new("username")
        .short('u')
        .long("username")
        .help("Username the credentials belong to")
        .required(true)
}

fn verify_token() -> Command {
    Command::new("verify-token")
        .about("Verify a sign-in token and print the result as JSON")
        .arg(
            Arg::new("token")
                .help("Token returned by the browser after signing in")
                .required(true),
        )
}

fn register_token() -> Command {
    Command::new("register-token")
        .about("Create a token that allows registering a credential for a username")
        .arg(username_arg().help("Username the new credential will be bound to"))
        .arg(
            Arg::new("display-name")
                .long("display-name")
                .help("Name shown by the authenticator")
                .default_value("Test"),
        )
        .arg(
            Arg::new("attestation")
                .long("attestation")
                .help("Attestation conveyance preference")
                .value_parser(PossibleValuesParser::new([
                    "none",
                    "indirect",
                    "direct",
                    "enterprise",
                ]))
                .default_value("none"),
        )
        .arg(
            Arg::new("authenticator-attachment")
                .long("authenticator-attachment")
                .help("Restrict registration to a platform or roaming authenticator")
                .value_parser(PossibleValuesParser::new(["platform", "cross-platform"])),
        )
        .arg(
            Arg::new("require-resident-key")
                .long("require-resident-key")
                .help("Require a discoverable (resident) credential")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("user-verification")
                .long("user-verification")
                .help("User verification requirement")
                .value_parser(PossibleValuesParser::new([
                    "required",
                    "preferred",
                    "discouraged",
                ]))
                .default_value("preferred"),
        )
}

fn list_credentials() -> Command {
    Command::new("list-credentials")
        .about("List the credentials registered to a username")
        .arg(username_arg())
}

fn delete_credential() -> Command {
    Command::new("delete-credential")
        .about("Delete a credential by id")
        .arg(
            Arg::new("credential-id")
                .long("credential-id")
                .help("Credential id, as returned by list-credentials")
                .required(true),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("passwordless")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(verify_token())
        .subcommand(register_token())
        .subcommand(list_credentials())
        .subcommand(delete_credential());

    let command = api::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET_ENV: &str = "PASSWORDLESS_API_SECRET";

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "passwordless");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_api_args() {
        temp_env::with_vars([(SECRET_ENV, None::<String>)], || {
            let command = new();
            let matches = command.get_matches_from(vec![
                "passwordless",
                "--api-url",
                "https://passwordless.example.com/",
                "--api-secret",
                "myapp:secret:abc",
                "list-credentials",
                "--username",
                "alice",
            ]);

            assert_eq!(
                matches.get_one::<String>("api-url").cloned(),
                Some("https://passwordless.example.com/".to_string())
            );
            assert_eq!(
                matches.get_one::<String>("api-secret").cloned(),
                Some("myapp:secret:abc".to_string())
            );
            let sub_m = matches.subcommand_matches("list-credentials");
            assert_eq!(
                sub_m.and_then(|m| m.get_one::<String>("username").cloned()),
                Some("alice".to_string())
            );
        });
    }

    #[test]
    fn test_api_url_defaults_to_hosted_api() {
        temp_env::with_vars(
            [
                ("PASSWORDLESS_API_URL", None::<&str>),
                (SECRET_ENV, Some("secret")),
            ],
            || {
                let matches = new().get_matches_from(vec!["passwordless", "verify-token", "tok"]);
                assert_eq!(
                    matches.get_one::<String>("api-url").cloned(),
                    Some(crate::DEFAULT_API_URL.to_string())
                );
            },
        );
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        temp_env::with_vars([(SECRET_ENV, None::<String>)], || {
            let result =
                new().try_get_matches_from(vec!["passwordless", "verify-token", "tok"]);
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(clap::error::ErrorKind::MissingRequiredArgument)
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("PASSWORDLESS_API_URL", Some("http://localhost:7001")),
                (SECRET_ENV, Some("env-secret")),
                ("PASSWORDLESS_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "passwordless",
                    "delete-credential",
                    "--credential-id",
                    "cred123",
                ]);
                assert_eq!(
                    matches.get_one::<String>("api-url").cloned(),
                    Some("http://localhost:7001".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>("api-secret").cloned(),
                    Some("env-secret".to_string())
                );
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_register_token_defaults() {
        temp_env::with_vars([(SECRET_ENV, Some("secret"))], || {
            let matches = new().get_matches_from(vec![
                "passwordless",
                "register-token",
                "--username",
                "alice",
            ]);
            let sub_m = matches.subcommand_matches("register-token");

            assert_eq!(
                sub_m.and_then(|m| m.get_one::<String>("display-name").cloned()),
                Some("Test".to_string())
            );
            assert_eq!(
                sub_m.and_then(|m| m.get_one::<String>("attestation").cloned()),
                Some("none".to_string())
            );
            assert_eq!(
                sub_m.and_then(|m| m.get_one::<String>("user-verification").cloned()),
                Some("preferred".to_string())
            );
            assert_eq!(
                sub_m.and_then(|m| m.get_one::<String>("authenticator-attachment").cloned()),
                None
            );
            assert_eq!(sub_m.map(|m| m.get_flag("require-resident-key")), Some(false));
        });
    }

    #[test]
    fn test_register_token_accepts_enterprise_attestation() {
        temp_env::with_vars([(SECRET_ENV, Some("secret"))], || {
            let matches = new().get_matches_from(vec![
                "passwordless",
                "register-token",
                "--username",
                "alice",
                "--attestation",
                "enterprise",
            ]);
            let sub_m = matches.subcommand_matches("register-token");
            assert_eq!(
                sub_m.and_then(|m| m.get_one::<String>("attestation").cloned()),
                Some("enterprise".to_string())
            );
        });
    }

    #[test]
    fn test_register_token_rejects_unknown_attestation() {
        temp_env::with_vars([(SECRET_ENV, Some("secret"))], || {
            let result = new().try_get_matches_from(vec![
                "passwordless",
                "register-token",
                "--username",
                "alice",
                "--attestation",
                "self",
            ]);
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(clap::error::ErrorKind::InvalidValue)
            );
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("PASSWORDLESS_LOG_LEVEL", Some(level)),
                    (SECRET_ENV, Some("secret")),
                ],
                || {
                    let matches =
                        new().get_matches_from(vec!["passwordless", "verify-token", "tok"]);
                    assert_eq!(
                        matches.get_one::<u8>("verbosity").copied(),
                        u8::try_from(index).ok()
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("PASSWORDLESS_LOG_LEVEL", None::<&str>),
                    (SECRET_ENV, Some("secret")),
                ],
                || {
                    let mut args = vec!["passwordless".to_string()];

                    // Add the appropriate number of "-v" flags based on the index
                    if index > 0 {
                        args.push(format!("-{}", "v".repeat(index)));
                    }
                    args.push("verify-token".to_string());
                    args.push("tok".to_string());

                    let matches = new().get_matches_from(args);

                    assert_eq!(
                        matches.get_one::<u8>("verbosity").copied(),
                        u8::try_from(index).ok()
                    );
                },
            );
        }
    }
}
