use axum::response::Html;
use tower_sessions::Session;

use crate::brittlebank::{session, views};

// axum handler for the home page
pub async fn home(session: Session) -> Html<String> {
    let user = session::identity(&session).await;
    let toggles = session::toggles(&session).await;

    Html(views::index(&user, &toggles))
}
