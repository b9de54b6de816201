use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;

use crate::brittlebank::{
    access::{self, AdminAccess},
    session,
    store::AccountKind,
    views, AppState,
};

// axum handler for the fixed user account list, no gating
pub async fn user_accounts(State(state): State<AppState>, session: Session) -> Html<String> {
    let user = session::identity(&session).await;

    Html(views::accounts(
        &user,
        state.directory.accounts(AccountKind::User),
        "user",
    ))
}

/// `GET /admin/accounts`: gated by the access decision over the current
/// toggle record and identity.
pub async fn admin_accounts(State(state): State<AppState>, session: Session) -> Response {
    let user = session::identity(&session).await;
    let toggles = session::toggles(&session).await;

    match access::admin_access(&toggles, &user) {
        AdminAccess::Vulnerable => Html(views::accounts(
            &user,
            state.directory.accounts(AccountKind::Admin),
            "admin (vulnerable)",
        ))
        .into_response(),
        AdminAccess::Secure => Html(views::accounts(
            &user,
            state.directory.accounts(AccountKind::Admin),
            "admin (secure)",
        ))
        .into_response(),
        AdminAccess::Denied => (StatusCode::FORBIDDEN, Html(views::forbidden())).into_response(),
    }
}
