//! Session bootstrap: runs on every request, before the route handlers.
//!
//! Guarantees the session carries a toggle record and an identity. The
//! signed toggle cookie seeds a brand-new session only; once the session has
//! its own record it is authoritative and a stale cookie is ignored.

use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::SignedCookieJar;
use serde::{de::DeserializeOwned, Serialize};
use tower_sessions::Session;
use tracing::{debug, error};

use crate::brittlebank::{
    auth::Identity,
    toggles::{self, Toggles},
};

/// Session key holding the [`Toggles`] record.
pub const TOGGLES_KEY: &str = "toggles";
/// Session key holding the [`Identity`] record.
pub const USER_KEY: &str = "user";

/// Middleware body for `axum::middleware::from_fn_with_state`.
///
/// Never fails the request: cookie corruption falls back to defaults and
/// session-store write errors are logged and swallowed.
pub async fn bootstrap(
    session: Session,
    jar: SignedCookieJar,
    request: Request,
    next: Next,
) -> Response {
    if load::<Toggles>(&session, TOGGLES_KEY).await.is_none() {
        let seeded = toggles::from_jar(&jar).unwrap_or_default();
        save(&session, TOGGLES_KEY, &seeded).await;
    }

    if load::<Identity>(&session, USER_KEY).await.is_none() {
        save(&session, USER_KEY, &Identity::guest()).await;
    }

    next.run(request).await
}

/// Current toggle record; defaults if the session somehow lacks one.
pub async fn toggles(session: &Session) -> Toggles {
    load(session, TOGGLES_KEY).await.unwrap_or_default()
}

/// Current identity; guest if the session somehow lacks one.
pub async fn identity(session: &Session) -> Identity {
    load(session, USER_KEY).await.unwrap_or_default()
}

pub async fn set_toggles(session: &Session, record: &Toggles) {
    save(session, TOGGLES_KEY, record).await;
}

pub async fn set_identity(session: &Session, identity: &Identity) {
    save(session, USER_KEY, identity).await;
}

async fn load<T: DeserializeOwned>(session: &Session, key: &str) -> Option<T> {
    match session.get::<T>(key).await {
        Ok(value) => value,
        Err(err) => {
            debug!(%err, key, "discarding unreadable session value");
            None
        }
    }
}

async fn save<T: Serialize>(session: &Session, key: &str, value: &T) {
    if let Err(err) = session.insert(key, value).await {
        error!(%err, key, "session write failed");
    }
}
