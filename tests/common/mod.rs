#![allow(dead_code)]

use anyhow::Result;
use greatfood_client::{ClientConfig, GreatFoodClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TEST_TOKEN: &str = "gf_test_token_0123456789";
pub const CLIENT_ID: &str = "1337";
pub const CLIENT_SECRET: &str = "4j3g4gj304gj3";

/// A mock Great Food API plus a config pointing at it.
pub struct TestEnvironment {
    pub server: MockServer,
    pub config: ClientConfig,
}

impl TestEnvironment {
    /// Start a mock server that hands out [`TEST_TOKEN`].
    pub async fn new() -> Self {
        let env = Self::without_token_endpoint().await;
        env.mount_token_response(json!({
            "access_token": TEST_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        }))
        .await;
        env
    }

    /// Start a mock server with no token endpoint mounted.
    pub async fn without_token_endpoint() -> Self {
        let server = MockServer::start().await;
        let config = ClientConfig::new(
            server.uri(),
            CLIENT_ID.to_string(),
            CLIENT_SECRET.to_string(),
        );
        Self { server, config }
    }

    pub async fn mount_token_response(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/auth_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_menus(&self, menus: Value) {
        Mock::given(method("GET"))
            .and(path("/menus"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": menus })))
            .mount(&self.server)
            .await;
    }

    pub async fn client(&self) -> Result<GreatFoodClient> {
        Ok(GreatFoodClient::connect(self.config.clone()).await?)
    }

    pub async fn requests_to(&self, request_path: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path() == request_path)
            .collect()
    }
}

pub fn sample_menus() -> Value {
    json!([
        { "id": 1, "name": "Lunch" },
        { "id": 84, "name": "Takeaway" }
    ])
}

pub fn body_text(request: &Request) -> String {
    String::from_utf8_lossy(&request.body).into_owned()
}

pub fn content_type(request: &Request) -> String {
    request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}
