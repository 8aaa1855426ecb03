//! Common test utilities: owner fixtures and an in-process web harness
#![allow(dead_code, clippy::expect_used)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use owners::{Config, OwnerDraft, OwnersModule};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower::ServiceExt;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Valid owner data with the given names
pub fn draft(first_name: &str, last_name: &str) -> OwnerDraft {
    OwnerDraft {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: "110 W. Liberty St.".to_string(),
        city: "Madison".to_string(),
        telephone: "6085551023".to_string(),
    }
}

/// Form fields for a valid owner submission
pub fn owner_fields(first_name: &str, last_name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("firstName", first_name.to_string()),
        ("lastName", last_name.to_string()),
        ("address", "638 Cardinal Ave.".to_string()),
        ("city", "Sun Prairie".to_string()),
        ("telephone", "6085551749".to_string()),
    ]
}

// ===== Web harness =====

/// Owner pages wired to a fresh in-memory SQLite database
pub struct TestApp {
    pub router: Router,
    pub module: Arc<OwnersModule>,
    pub db: Arc<DatabaseConnection>,
}

impl TestApp {
    /// Empty database
    pub async fn new() -> Self {
        Self::with_config(Config::default()).await
    }

    /// Database holding the ten sample owners, ids 1 through 10
    pub async fn seeded() -> Self {
        Self::with_config(Config {
            seed_demo_data: true,
            ..Config::default()
        })
        .await
    }

    pub async fn with_config(config: Config) -> Self {
        // A single long-lived connection keeps the in-memory database alive.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let db = Arc::new(Database::connect(options).await.expect("connect sqlite"));

        let module = Arc::new(OwnersModule::new());
        module.migrate(&db).await.expect("run migrations");
        module.init(config, db.clone()).await.expect("init module");
        let router = module.register_rest(Router::new()).expect("register routes");

        Self { router, module, db }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, jar: &mut CookieJar) -> Response<Body> {
        let request = jar.apply(Request::builder().method("GET").uri(uri));
        let response = self.send(request.body(Body::empty()).expect("request")).await;
        jar.update(&response);
        response
    }

    pub async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, String)],
        jar: &mut CookieJar,
    ) -> Response<Body> {
        let request = jar
            .apply(Request::builder().method("POST").uri(uri))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)))
            .expect("request");
        let response = self.send(request).await;
        jar.update(&response);
        response
    }
}

fn encode_form(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Minimal browser cookie store: remembers `Set-Cookie` values and sends
/// them back on the next request
#[derive(Debug, Default, Clone)]
pub struct CookieJar {
    cookies: BTreeMap<String, String>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    fn apply(&self, builder: axum::http::request::Builder) -> axum::http::request::Builder {
        if self.cookies.is_empty() {
            return builder;
        }
        let value = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        builder.header(header::COOKIE, value)
    }

    fn update(&mut self, response: &Response<Body>) {
        for raw in response.headers().get_all(header::SET_COOKIE) {
            let Ok(raw) = raw.to_str() else { continue };
            let mut parts = raw.split(';').map(str::trim);
            let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
                continue;
            };
            let expired = parts.any(|attr| attr.eq_ignore_ascii_case("max-age=0"));
            if expired || value.is_empty() {
                self.cookies.remove(name);
            } else {
                self.cookies.insert(name.to_string(), value.to_string());
            }
        }
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub fn assert_redirect(response: &Response<Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), Some(to));
}
