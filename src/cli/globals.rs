use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub session_secret: SecretString,
    pub production: bool,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(session_secret: SecretString, production: bool) -> Self {
        Self {
            session_secret,
            production,
        }
    }
}
