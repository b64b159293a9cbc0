/// Common test utilities for integration tests
///
/// Builds the real router over the in-memory store, so the full HTTP
/// surface (cookies included) can be exercised without a database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use tower::Service as _;

use ticklist_api::app::{build_router, AppState};
use ticklist_api::config::{ApiConfig, Config, DatabaseConfig, SessionConfig};
use ticklist_shared::store::memory::MemoryStore;

/// Test context containing the app and its backing store
pub struct TestContext {
    pub app: axum::Router,
    pub store: Arc<MemoryStore>,
}

impl TestContext {
    /// Creates a fresh app over an empty in-memory store
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 1,
            },
            session: SessionConfig {
                ttl_hours: 24,
                secure_cookies: false,
            },
        };

        let state = AppState::new(store.clone(), config);
        let app = build_router(state);

        TestContext { app, store }
    }

    /// Drives one request through the router
    pub async fn call(&self, request: Request<Body>) -> Response<axum::body::Body> {
        self.app.clone().call(request).await.unwrap()
    }

    /// GET `path`, optionally with a Cookie header
    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response<axum::body::Body> {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.call(builder.body(Body::empty()).unwrap()).await
    }

    /// POST a form-encoded body to `path`, optionally with a Cookie header
    pub async fn post_form(
        &self,
        path: &str,
        body: &str,
        cookie: Option<&str>,
    ) -> Response<axum::body::Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.call(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Registers an account and returns its session cookie pair
    /// (`session=<token>`)
    pub async fn register(&self, email: &str, password: &str) -> String {
        let body = format!("email={}&password={}", email, password);
        let response = self.post_form("/register", &body, None).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session_cookie_from(&response).expect("registration should set a session cookie")
    }
}

/// Extracts the `session=<token>` pair from a response's Set-Cookie headers
pub fn session_cookie_from(response: &Response<axum::body::Body>) -> Option<String> {
    cookie_pair_from(response, "session=")
}

/// Extracts the `flash=<code>` pair from a response's Set-Cookie headers
pub fn flash_cookie_from(response: &Response<axum::body::Body>) -> Option<String> {
    cookie_pair_from(response, "flash=")
}

fn cookie_pair_from(response: &Response<axum::body::Body>, prefix: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .find(|pair| pair.starts_with(prefix) && !pair.ends_with('='))
        .map(str::to_string)
}

/// The Location header of a redirect response
pub fn location(response: &Response<axum::body::Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should be a redirect")
        .to_str()
        .unwrap()
        .to_string()
}

/// Reads the response body as JSON
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
