//! Access decision for the protected admin account list.

use crate::brittlebank::{
    auth::{Identity, Role},
    toggles::Toggles,
};

/// Outcome of an admin-resource request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAccess {
    /// Served with no role check at all. This is the broken-access-control
    /// demo, not a bug to fix.
    Vulnerable,
    /// Served after a passing role check.
    Secure,
    /// Refused outright, no resource data.
    Denied,
}

/// Pure decision over the toggle record and identity.
///
/// The `bac` toggle is checked first and short-circuits the role check.
#[must_use]
pub fn admin_access(toggles: &Toggles, identity: &Identity) -> AdminAccess {
    if toggles.bac {
        return AdminAccess::Vulnerable;
    }

    if identity.role == Role::Admin {
        return AdminAccess::Secure;
    }

    AdminAccess::Denied
}
