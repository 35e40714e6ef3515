mod common;

use std::time::Duration;

use greatfood_client::client::HttpTransport;
use greatfood_client::FoodApiError;
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn form_fields() -> Vec<(String, String)> {
    vec![("client_id".to_string(), "1337".to_string())]
}

fn caller_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("multipart/form-data"));
    headers.insert("x-request-id", HeaderValue::from_static("42"));
    headers
}

#[tokio::test]
async fn test_form_requests_keep_multipart_boundary() {
    common::init_test_logging();

    let server = MockServer::start().await;
    Mock::given(path("/form"))
        .and(header("x-request-id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(2)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(Duration::from_secs(5)).expect("transport");
    let url = format!("{}/form", server.uri());

    let posted = transport
        .post(&url, caller_headers(), &form_fields())
        .await
        .expect("POST should succeed");
    let put = transport
        .put(&url, caller_headers(), &form_fields())
        .await
        .expect("PUT should succeed");
    assert_eq!(posted.body, "ok");
    assert_eq!(put.status, 200);

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        let content_type = common::content_type(request);
        let boundary = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap_or_else(|| panic!("content-type was: {}", content_type));
        assert!(
            common::body_text(request).starts_with(&format!("--{}", boundary)),
            "body must be framed with the advertised boundary"
        );
    }
}

#[tokio::test]
async fn test_get_reports_status_and_body() {
    common::init_test_logging();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such menu"))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(Duration::from_secs(5)).expect("transport");
    let err = transport
        .get(&format!("{}/missing", server.uri()), HeaderMap::new())
        .await
        .expect_err("404 must be an error");

    match err {
        FoodApiError::Transport { message, status } => {
            assert_eq!(status, Some(404));
            assert_eq!(message, "no such menu");
        }
        other => panic!("Expected a transport error, got {:?}", other),
    }
}
