use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::brittlebank::{session, views, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub message: String,
}

// axum handler for the stored-XSS demo page
pub async fn list_messages(State(state): State<AppState>, session: Session) -> Html<String> {
    let user = session::identity(&session).await;
    let toggles = session::toggles(&session).await;
    let messages = state.directory.messages();

    Html(views::messages(&user, &toggles, &messages))
}

/// `POST /messages`: append the submitted text verbatim. Whether it comes
/// back escaped is decided at render time by the `xss` toggle.
pub async fn post_message(
    State(state): State<AppState>,
    session: Session,
    form: Option<Form<MessageForm>>,
) -> Redirect {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let user = session::identity(&session).await;

    state
        .directory
        .append_message(form.message, user.display_name().to_string());

    Redirect::to("/messages")
}
