use axum::{extract::State, response::Redirect, Form};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;
use tower_sessions::Session;

use crate::brittlebank::{
    session,
    toggles::{self, checkbox_on, Toggles},
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ToggleForm {
    pub xss: Option<String>,
    pub bac: Option<String>,
}

/// `POST /toggle`: full replace of the session toggle record.
///
/// Unchecked boxes are absent from the form, so a missing field means off.
/// The new record is written to the session and re-signed into the client
/// cookie so it can reseed a future session.
pub async fn update_toggles(
    State(state): State<AppState>,
    session: Session,
    jar: SignedCookieJar,
    form: Option<Form<ToggleForm>>,
) -> (SignedCookieJar, Redirect) {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let record = Toggles {
        xss: checkbox_on(&form.xss),
        bac: checkbox_on(&form.bac),
    };

    session::set_toggles(&session, &record).await;

    let jar = jar.add(toggles::cookie(&record, state.production));

    (jar, Redirect::to("/"))
}
