mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use brittlebank::brittlebank::router_with_store;
use common::{body_string, Client};
use tower_sessions::{
    session::{Id, Record},
    session_store, MemoryStore, SessionStore,
};

#[tokio::test]
async fn admin_login_transitions_to_admin_role() {
    let mut client = Client::new();

    let res = client
        .post_form("/login", "username=admin&password=adminpwd")
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let body = body_string(client.get("/").await.into_body()).await;
    assert!(body.contains("Signed in as: admin (role: admin)"));
}

#[tokio::test]
async fn user_login_transitions_to_user_role() {
    let mut client = Client::new();

    client
        .post_form("/login", "username=alice&password=alicepwd")
        .await;

    let body = body_string(client.get("/").await.into_body()).await;
    assert!(body.contains("Signed in as: alice (role: user)"));
}

#[tokio::test]
async fn bad_credentials_leave_identity_untouched() {
    let mut client = Client::new();

    let res = client
        .post_form("/login", "username=admin&password=wrong")
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res.into_body()).await;
    assert!(body.contains("Invalid credentials"));

    let home = body_string(client.get("/").await.into_body()).await;
    assert!(home.contains("role: guest"));
}

#[tokio::test]
async fn failed_login_does_not_demote_an_admin() {
    let mut client = Client::new();

    client
        .post_form("/login", "username=admin&password=adminpwd")
        .await;
    client
        .post_form("/login", "username=mallory&password=nope")
        .await;

    let body = body_string(client.get("/").await.into_body()).await;
    assert!(body.contains("role: admin"));
}

#[tokio::test]
async fn logout_returns_to_guest() {
    let mut client = Client::new();

    client
        .post_form("/login", "username=admin&password=adminpwd")
        .await;

    let res = client.post_form("/logout", "").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let body = body_string(client.get("/").await.into_body()).await;
    assert!(body.contains("role: guest"));
}

#[tokio::test]
async fn get_logout_has_the_same_effect() {
    let mut client = Client::new();

    client
        .post_form("/login", "username=alice&password=alicepwd")
        .await;

    let res = client.get("/logout").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let body = body_string(client.get("/").await.into_body()).await;
    assert!(body.contains("role: guest"));
}

#[tokio::test]
async fn logout_is_idempotent() {
    let mut client = Client::new();

    client.get("/logout").await;
    let res = client.post_form("/logout", "").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let body = body_string(client.get("/").await.into_body()).await;
    assert!(body.contains("role: guest"));
}

/// Store whose delete always fails, to exercise the logout degradation path.
#[derive(Debug, Clone, Default)]
struct FailingDelete(MemoryStore);

#[async_trait]
impl SessionStore for FailingDelete {
    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.0.save(record).await
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        self.0.load(session_id).await
    }

    async fn delete(&self, _session_id: &Id) -> session_store::Result<()> {
        Err(session_store::Error::Backend(
            "simulated destroy failure".to_string(),
        ))
    }
}

#[tokio::test]
async fn logout_degrades_gracefully_when_destroy_fails() {
    let app = router_with_store(common::test_state(), FailingDelete::default());
    let mut client = Client::with_app(app);

    client
        .post_form("/login", "username=admin&password=adminpwd")
        .await;

    let res = client.post_form("/logout", "").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let body = body_string(client.get("/").await.into_body()).await;
    assert!(body.contains("role: guest"));
}
