use axum::{
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::brittlebank::{auth, session, views};

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// axum handler for the login form
pub async fn login_form(session: Session) -> Html<String> {
    let user = session::identity(&session).await;

    Html(views::login(&user, None))
}

/// `POST /login`: on a credential match the identity record transitions and
/// the browser is sent home; on a mismatch the form is re-rendered with an
/// inline error and the identity is left untouched.
pub async fn login(session: Session, form: Option<Form<LoginForm>>) -> Response {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    match auth::authenticate(&form.username, &form.password) {
        Some(identity) => {
            session::set_identity(&session, &identity).await;
            Redirect::to("/").into_response()
        }
        None => {
            let user = session::identity(&session).await;
            Html(views::login(&user, Some("Invalid credentials"))).into_response()
        }
    }
}
