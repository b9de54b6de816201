#![allow(dead_code)]

// Shared helpers for integration tests.
//
// `Client` plays the browser: it carries cookies between requests against a
// single router instance so session state behaves like a real visit.
use std::{collections::BTreeMap, sync::Arc};

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use axum_extra::extract::cookie::Key;
use brittlebank::brittlebank::{router, store::Directory, AppState};
use http_body_util::BodyExt as _;
use tower::ServiceExt as _;

pub fn test_state() -> AppState {
    AppState {
        key: Key::derive_from(&[42u8; 64]),
        production: false,
        directory: Arc::new(Directory::demo()),
    }
}

pub fn app() -> Router {
    router(test_state())
}

pub async fn body_string(body: Body) -> String {
    let bytes = body
        .collect()
        .await
        .expect("body collects successfully")
        .to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

pub struct Client {
    app: Router,
    cookies: BTreeMap<String, String>,
}

impl Client {
    pub fn new() -> Self {
        Self::with_app(app())
    }

    pub fn with_app(app: Router) -> Self {
        Self {
            app,
            cookies: BTreeMap::new(),
        }
    }

    pub async fn get(&mut self, path: &str) -> Response<Body> {
        self.request("GET", path, None).await
    }

    pub async fn post_form(&mut self, path: &str, form: &str) -> Response<Body> {
        self.request("POST", path, Some(form.to_string())).await
    }

    /// Raw cookie value as last set by the server, if any.
    pub fn cookie_value(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }

    /// Plant a cookie as if the browser already had it (e.g. a forged or
    /// stale value).
    pub fn set_cookie(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_string(), value.to_string());
    }

    /// Drop a cookie client-side, simulating expiry or a fresh browser.
    pub fn clear_cookie(&mut self, name: &str) {
        self.cookies.remove(name);
    }

    async fn request(&mut self, method: &str, path: &str, form: Option<String>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(path);

        if form.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        }

        if !self.cookies.is_empty() {
            let cookie_header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(header::COOKIE, cookie_header);
        }

        let req = builder
            .body(Body::from(form.unwrap_or_default()))
            .expect("request builds successfully");
        let res = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("service call succeeds");

        for set_cookie in res.headers().get_all(header::SET_COOKIE) {
            let raw = set_cookie
                .to_str()
                .expect("set-cookie header is valid utf-8");
            let pair = raw.split(';').next().unwrap_or_default();
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };

            if value.is_empty() || raw.contains("Max-Age=0") {
                self.cookies.remove(name);
            } else {
                self.cookies.insert(name.to_string(), value.to_string());
            }
        }

        res
    }
}
