use axum::response::Redirect;
use tower_sessions::Session;
use tracing::error;

/// Serves both `POST /logout` and the convenience `GET /logout`.
///
/// Destroys the session outright. When the store refuses, the in-memory
/// session is cleared instead so the layer still drops the cookie, and the
/// redirect happens regardless; the next request bootstraps a fresh guest
/// session. Idempotent.
pub async fn logout(session: Session) -> Redirect {
    if let Err(err) = session.flush().await {
        error!(%err, "session destroy failed");
        session.clear().await;
    }

    Redirect::to("/")
}
