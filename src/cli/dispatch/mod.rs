use crate::cli::actions::Action;
use anyhow::Result;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(3000),
        secret: matches
            .get_one("secret")
            .map(|s: &String| s.to_string()),
        production: matches
            .get_one::<String>("env")
            .is_some_and(|env| env == "production"),
    })
}
