//! CLI configuration: thin wrapper around `portbounce_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--controller, --username, --token, ...) on top of the shared crate.

use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;

use portbounce_config::Defaults;
use portbounce_core::{AuthCredentials, ControllerConfig, TlsVerification};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use portbounce_config::{Config, Profile, config_path, load_config_or_default};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// The profile to run with.
///
/// An explicitly requested profile must exist. The implicit default may be
/// absent, in which case flags and `CCC_*` variables carry everything.
pub fn active_profile(global: &GlobalOpts, config: &Config) -> Result<(String, Profile), CliError> {
    let name = active_profile_name(global, config);
    match config.profiles.get(&name) {
        Some(profile) => Ok((name, profile.clone())),
        None if global.profile.is_some() => {
            let mut available: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
            available.sort_unstable();
            Err(CliError::ProfileNotFound {
                name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            })
        }
        None => Ok((name, Profile::default())),
    }
}

/// Output format: flag, then `defaults.output`, then table.
pub fn output_format(global: &GlobalOpts, defaults: &Defaults) -> OutputFormat {
    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}

/// Translate a `Profile` + global flags into a `ControllerConfig`.
///
/// CLI flag overrides take priority over `CCC_*` variables, which take
/// priority over profile values.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<ControllerConfig, CliError> {
    // 1. Controller URL
    let url = match global.controller.as_deref() {
        Some(raw) => portbounce_config::parse_controller_url(raw)?,
        None => portbounce_config::resolve_controller(profile, profile_name)?,
    };

    // 2. Credentials
    let auth = resolve_auth_with_flags(profile, profile_name, global)?;

    // 3. TLS verification
    let tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        portbounce_config::resolve_tls(profile)
    };

    // 4. Timeout
    let timeout = Duration::from_secs(
        global
            .timeout
            .or(profile.timeout)
            .unwrap_or(defaults.timeout),
    );

    // 5. Task polling
    let mut poll = portbounce_config::resolve_poll(profile, defaults);
    if let Some(secs) = global.poll_interval {
        poll.interval = Duration::from_secs(secs);
    }
    if let Some(max) = global.max_polls {
        if max == 0 {
            return Err(CliError::Validation {
                field: "--max-polls".into(),
                reason: "must be at least 1".into(),
            });
        }
        poll.max_attempts = Some(max);
    }

    Ok(ControllerConfig {
        url,
        auth,
        tls,
        timeout,
        poll,
    })
}

/// Flag credentials first, then the shared resolution chain.
fn resolve_auth_with_flags(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<AuthCredentials, CliError> {
    if let Some(ref token) = global.token {
        return Ok(AuthCredentials::Token(SecretString::from(token.clone())));
    }
    if global.username.is_none() && global.password.is_none() {
        return Ok(portbounce_config::resolve_auth(profile, profile_name)?);
    }

    let no_credentials = || CliError::NoCredentials {
        profile: profile_name.into(),
    };
    let username = global
        .username
        .clone()
        .or_else(|| portbounce_config::resolve_username(profile))
        .ok_or_else(no_credentials)?;
    let password = global
        .password
        .clone()
        .map(SecretString::from)
        .or_else(|| portbounce_config::resolve_password(profile, profile_name))
        .ok_or_else(no_credentials)?;

    Ok(AuthCredentials::Credentials { username, password })
}

/// Build the `ControllerConfig` for this invocation.
pub fn build_controller_config(
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<ControllerConfig, CliError> {
    let (name, profile) = active_profile(global, cfg)?;
    resolve_profile(&profile, &name, &cfg.defaults, global)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use secrecy::ExposeSecret;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["portbounce"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["task", "t-1"]);
        Cli::try_parse_from(argv)
            .unwrap_or_else(|e| panic!("{e}"))
            .global
    }

    fn lab_profile() -> Profile {
        Profile {
            controller: Some("https://dnac.lab.test".into()),
            token: Some("profile-token".into()),
            timeout: Some(12),
            ..Profile::default()
        }
    }

    #[test]
    fn flags_override_profile() {
        let g = global(&[
            "--controller",
            "https://10.1.1.1",
            "--token",
            "flag-token",
            "--timeout",
            "5",
            "--poll-interval",
            "3",
            "--max-polls",
            "20",
            "-k",
        ]);

        let cfg = resolve_profile(&lab_profile(), "lab", &Defaults::default(), &g)
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(cfg.url.as_str(), "https://10.1.1.1/");
        assert!(matches!(cfg.auth, AuthCredentials::Token(ref t) if t.expose_secret() == "flag-token"));
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.poll.interval, Duration::from_secs(3));
        assert_eq!(cfg.poll.max_attempts, Some(20));
        assert_eq!(cfg.tls, TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn profile_values_apply_without_flags() {
        let g = global(&["--controller", "https://dnac.lab.test"]);

        let cfg = resolve_profile(&lab_profile(), "lab", &Defaults::default(), &g)
            .unwrap_or_else(|e| panic!("{e}"));

        assert!(matches!(cfg.auth, AuthCredentials::Token(ref t) if t.expose_secret() == "profile-token"));
        assert_eq!(cfg.timeout, Duration::from_secs(12));
        assert_eq!(cfg.poll.interval, Duration::from_secs(1));
        assert_eq!(cfg.poll.max_attempts, None);
    }

    #[test]
    fn flag_credentials_build_basic_auth() {
        let g = global(&[
            "--controller",
            "https://dnac.lab.test",
            "-u",
            "admin",
            "--password",
            "pw",
        ]);

        let cfg = resolve_profile(&Profile::default(), "default", &Defaults::default(), &g)
            .unwrap_or_else(|e| panic!("{e}"));

        match cfg.auth {
            AuthCredentials::Credentials { username, password } => {
                assert_eq!(username, "admin");
                assert_eq!(password.expose_secret(), "pw");
            }
            AuthCredentials::Token(_) => panic!("expected basic credentials"),
        }
    }

    #[test]
    fn zero_max_polls_is_rejected() {
        let g = global(&["--controller", "https://dnac.lab.test", "--max-polls", "0"]);

        let err = resolve_profile(&lab_profile(), "lab", &Defaults::default(), &g).unwrap_err();

        assert!(matches!(err, CliError::Validation { .. }));
    }

    #[test]
    fn explicit_unknown_profile_lists_available() {
        let mut config = Config::default();
        config.profiles.insert("lab".into(), lab_profile());

        let err = active_profile(&global(&["-p", "prod"]), &config).unwrap_err();

        match err {
            CliError::ProfileNotFound { name, available } => {
                assert_eq!(name, "prod");
                assert_eq!(available, "lab");
            }
            other => panic!("expected ProfileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn implicit_missing_profile_is_empty() {
        let (name, profile) = active_profile(&global(&[]), &Config::default())
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(name, "default");
        assert!(profile.controller.is_none());
    }

    #[test]
    fn output_falls_back_to_defaults() {
        let defaults = Defaults {
            output: "yaml".into(),
            ..Defaults::default()
        };
        assert_eq!(output_format(&global(&[]), &defaults), OutputFormat::Yaml);
        assert_eq!(
            output_format(&global(&["-o", "json"]), &defaults),
            OutputFormat::Json
        );
    }
}
