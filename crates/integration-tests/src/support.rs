//! In-process test harness: a router plus a hand-rolled cookie jar.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use tower::ServiceExt;

use pulseira_core::MessageTemplate;
use pulseira_storefront::config::{CatalogConfig, StorefrontConfig, WhatsAppConfig};
use pulseira_storefront::state::AppState;

/// The recipient number every test config uses.
pub const TEST_WHATSAPP_NUMBER: &str = "5514999999999";

/// Build a config without touching the environment.
///
/// The catalog points at an unroutable local port so catalog fetches fail
/// fast; cart and checkout never need the catalog.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid IP"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        catalog: CatalogConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: SecretString::from("kQ9#zR2$wF7!mX4@pL8&"),
        },
        whatsapp: WhatsAppConfig {
            number: TEST_WHATSAPP_NUMBER.to_string(),
            template: MessageTemplate::default(),
        },
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// A response captured from the in-process router.
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics when the body is not valid JSON (test assertion context).
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

/// A client over the in-process router that carries the session cookie
/// between requests, like a browser would.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// Build a fresh app (fresh session store) and client.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(test_config());
        Self {
            app: pulseira_storefront::app(state),
            cookie: None,
        }
    }

    /// A second client against the same app: same session store, no cookie,
    /// i.e. a different shopper.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self
            .builder("GET", uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// Send a POST with a urlencoded form body.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        let request = self
            .builder("POST", uri)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(form.to_owned()))
            .expect("valid request");
        self.send(request).await
    }

    fn builder(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.clone());
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        // Adopt any newly issued session cookie
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let raw = set_cookie.to_str().expect("cookie is ASCII");
            let pair = raw.split(';').next().unwrap_or(raw);
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        let body = String::from_utf8(bytes.to_vec()).expect("body is UTF-8");

        TestResponse {
            status,
            location,
            body,
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
