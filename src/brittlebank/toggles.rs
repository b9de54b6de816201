//! Per-session vulnerability toggles and their signed-cookie codec.
//!
//! The session copy is authoritative while the session lives; the signed
//! cookie is a 30-day snapshot used only to reseed a brand-new session.
//! Signing and verification are delegated to [`SignedCookieJar`], so a
//! tampered cookie simply fails to decode.

use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    SignedCookieJar,
};
use serde::{Deserialize, Serialize};
use time::Duration;

/// Name of the signed client-side toggle cookie.
pub const TOGGLES_COOKIE: &str = "toggles";

const MAX_AGE_DAYS: i64 = 30;

/// Which insecure code paths are active for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggles {
    pub xss: bool,
    pub bac: bool,
}

impl Default for Toggles {
    /// Vulnerable-by-default: both demos start enabled.
    fn default() -> Self {
        Self {
            xss: true,
            bac: true,
        }
    }
}

/// Checkbox semantics: a field is "on" when the browser submitted it at all,
/// whatever the value; unchecked boxes are simply absent from the form.
#[must_use]
pub fn checkbox_on(field: &Option<String>) -> bool {
    field.is_some()
}

/// Build the signed toggle cookie for `record`.
#[must_use]
pub fn cookie(record: &Toggles, secure: bool) -> Cookie<'static> {
    let payload = serde_json::json!({ "xss": record.xss, "bac": record.bac }).to_string();

    Cookie::build((TOGGLES_COOKIE, payload))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(Duration::days(MAX_AGE_DAYS))
        .build()
}

/// Decode the toggle record out of the signed jar.
///
/// Returns `None` on a missing cookie, a bad signature, or an unparseable
/// payload; corruption is never an error the caller has to handle.
#[must_use]
pub fn from_jar(jar: &SignedCookieJar) -> Option<Toggles> {
    jar.get(TOGGLES_COOKIE)
        .and_then(|cookie| parse(cookie.value()))
}

fn parse(value: &str) -> Option<Toggles> {
    serde_json::from_str(value).ok()
}
