//! Authentication state: guest → user/admin on login, back to guest when the
//! session is destroyed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    User,
    Admin,
}

/// The authenticated principal for a session.
///
/// Invariant: `username` is `None` exactly when `role` is [`Role::Guest`];
/// use the constructors rather than building the struct by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: Option<String>,
    pub role: Role,
}

impl Default for Identity {
    fn default() -> Self {
        Self::guest()
    }
}

impl Identity {
    #[must_use]
    pub fn guest() -> Self {
        Self {
            username: None,
            role: Role::Guest,
        }
    }

    fn known(username: &str, role: Role) -> Self {
        Self {
            username: Some(username.to_string()),
            role,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("guest")
    }
}

// Demo allow-list. These credentials are published on purpose.
const ALLOW_LIST: &[(&str, &str, Role)] = &[
    ("admin", "adminpwd", Role::Admin),
    ("alice", "alicepwd", Role::User),
];

/// Literal credential comparison against the demo allow-list.
///
/// `None` means the caller must leave the current identity untouched.
#[must_use]
pub fn authenticate(username: &str, password: &str) -> Option<Identity> {
    ALLOW_LIST
        .iter()
        .find(|(name, pwd, _)| *name == username && *pwd == password)
        .map(|(name, _, role)| Identity::known(name, *role))
}
