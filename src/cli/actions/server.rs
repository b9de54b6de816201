use crate::brittlebank::new;
use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{bail, Result};
use secrecy::SecretString;
use tracing::warn;

// Fixed development-only fallback, mirrors what a developer would put in a
// local .env file. Cookies signed with it are forgeable.
const DEV_SECRET: &str = "dev-secret-change-me";

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            secret,
            production,
        } => {
            let session_secret = match secret {
                Some(secret) if !secret.is_empty() => SecretString::from(secret),
                _ if production => {
                    bail!("SESSION_SECRET is required in production")
                }
                _ => {
                    warn!("SESSION_SECRET missing. Using weak fallback. Do NOT use in production.");
                    SecretString::from(DEV_SECRET)
                }
            };

            let globals = GlobalArgs::new(session_secret, production);

            new(port, &globals).await?;
        }
    }

    Ok(())
}
