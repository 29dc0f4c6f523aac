//! Login command.
//!
//! Authenticate an access key pair against AWS and print the resolved
//! identity. The secret key comes from `IAMGATE_SECRET_KEY`, piped stdin,
//! or a hidden prompt, in that order.

use std::io::{self, IsTerminal};

use dialoguer::{Input, Password};
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::types::{CredentialPair, EnrichedIdentity};
use crate::error::{FailureKind, Result};

const SECRET_ENV: &str = "IAMGATE_SECRET_KEY";

/// Authenticate and print the enriched identity.
pub fn execute(config: &Config, access_key: Option<String>, json: bool) -> Result<()> {
    let access_key = match access_key {
        Some(key) => key,
        None if io::stdin().is_terminal() => Input::<String>::new()
            .with_prompt("Access key ID")
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };
    let secret_key = read_secret()?;

    let credentials = CredentialPair::new(&access_key, secret_key.as_str());
    drop(secret_key);

    let user = match super::authenticate(config, &credentials) {
        Ok(user) => user,
        Err(failure) => {
            match failure.kind {
                FailureKind::InvalidRequest => output::hint("pass --access-key and set IAMGATE_SECRET_KEY"),
                FailureKind::AuthenticationFailed => output::hint("check the access key and secret key"),
                FailureKind::InternalError => output::hint("rerun with --verbose for details"),
            }
            return Err(failure.into());
        }
    };

    if json {
        output::data(&serde_json::to_string_pretty(&user)?);
    } else {
        print_identity(&user);
    }

    Ok(())
}

fn read_secret() -> Result<Zeroizing<String>> {
    if let Ok(secret) = std::env::var(SECRET_ENV) {
        return Ok(Zeroizing::new(secret));
    }

    if !io::stdin().is_terminal() {
        let mut input = Zeroizing::new(String::new());
        io::stdin().read_line(&mut input)?;
        return Ok(input);
    }

    Ok(Zeroizing::new(
        Password::new()
            .with_prompt("Secret access key")
            .allow_empty_password(true)
            .interact()?,
    ))
}

fn print_identity(user: &EnrichedIdentity) {
    output::success(&format!("authenticated as {}", user.username));
    output::rule();
    output::kv("account", &user.account);
    output::kv("arn", &user.arn);
    output::kv("user id", &user.user_id);
    match (&user.team, &user.team_full) {
        (Some(team), Some(full)) => output::kv("team", format!("{} ({})", output::keyword(team), full)),
        (None, Some(full)) => output::kv("team", format!("- ({})", full)),
        _ => output::kv("team", "-"),
    }
    output::kv("email", &user.email);
    output::kv("name", user.full_name.as_deref().unwrap_or("-"));
}
