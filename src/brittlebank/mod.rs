use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use axum::{
    body::Body,
    extract::FromRef,
    http::{HeaderName, HeaderValue, Request},
    middleware,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::Key;
use secrecy::ExposeSecret;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer, set_header::SetRequestHeaderLayer, trace::TraceLayer,
};
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer, SessionStore};
use tracing::{debug_span, info, Span};
use ulid::Ulid;

pub mod access;
pub mod auth;
pub mod handlers;
pub mod session;
pub mod store;
pub mod toggles;
pub mod views;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub key: Key,
    pub production: bool,
    pub directory: Arc<store::Directory>,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

/// Derive the cookie signing key from the configured secret.
///
/// `Key::derive_from` wants at least 64 bytes of material, so short secrets
/// are stretched by repetition. Deterministic: the same secret always yields
/// the same key, which is what keeps signed cookies valid across restarts.
#[must_use]
pub fn signing_key(secret: &str) -> Key {
    let bytes = if secret.is_empty() {
        b"brittlebank".as_slice()
    } else {
        secret.as_bytes()
    };

    let mut material = bytes.to_vec();
    while material.len() < 64 {
        material.extend_from_slice(bytes);
    }

    Key::derive_from(&material)
}

/// Build the application router on top of an in-memory session store.
#[must_use]
pub fn router(state: AppState) -> Router {
    router_with_store(state, MemoryStore::default())
}

/// Build the router against an explicit session store.
///
/// The session layer carries the session-id cookie (httpOnly, lax, secure in
/// production); the bootstrap middleware behind it guarantees every request
/// sees a populated toggle record and identity.
pub fn router_with_store<Store>(state: AppState, session_store: Store) -> Router
where
    Store: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(session_store)
        .with_name("sid")
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(state.production)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(1)));

    Router::new()
        .route("/", get(handlers::home))
        .route("/toggle", post(handlers::update_toggles))
        .route("/login", get(handlers::login_form).post(handlers::login))
        .route("/logout", get(handlers::logout).post(handlers::logout))
        .route("/user/accounts", get(handlers::user_accounts))
        .route("/admin/accounts", get(handlers::admin_accounts))
        .route(
            "/messages",
            get(handlers::list_messages).post(handlers::post_message),
        )
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(session_layer)
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    session::bootstrap,
                )),
        )
        .with_state(state)
}

/// server
/// # Errors
/// Returns an error if the server fails to start
pub async fn new(port: u16, globals: &GlobalArgs) -> Result<()> {
    let state = AppState {
        key: signing_key(globals.session_secret.expose_secret()),
        production: globals.production,
        directory: Arc::new(store::Directory::demo()),
    };

    let app = router(state);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let request_id = headers
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, ?headers, request_id)
}
