//! HTTP transport used by the Great Food client.
//!
//! A small wrapper around [`reqwest::Client`] that issues GET/POST/PUT
//! requests, merges per-call headers with instance-level ones (the bearer
//! token) and sends write payloads as `multipart/form-data`.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};

use crate::error::{FoodApiError, Result};

/// Raw response of a successful exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub body: String,
    pub status: u16,
}

pub struct HttpTransport {
    client: Client,
    /// Headers attached to every request issued by this instance.
    headers: HeaderMap,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(FoodApiError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            FoodApiError::Transport {
                message: format!("Failed to build HTTP client: {}", e),
                status: None,
            }
        })?;

        Ok(Self {
            client,
            headers: HeaderMap::new(),
        })
    }

    /// Attach `Authorization: Bearer <token>` to all future requests.
    ///
    /// An absent or empty token is rejected with [`FoodApiError::MissingToken`].
    pub fn set_authorization_bearer(&mut self, token: Option<&str>) -> Result<&mut Self> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => {
                tracing::error!("Attempted to set bearer authorization without an access token");
                return Err(FoodApiError::MissingToken);
            }
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
            FoodApiError::Auth {
                message: format!("Access token is not a valid header value: {}", e),
                status: None,
            }
        })?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);

        Ok(self)
    }

    pub fn has_authorization(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }

    pub async fn get(&self, url: &str, headers: HeaderMap) -> Result<TransportResponse> {
        tracing::debug!("GET {}", url);
        self.send(self.client.get(url), headers).await
    }

    pub async fn post(
        &self,
        url: &str,
        headers: HeaderMap,
        fields: &[(String, String)],
    ) -> Result<TransportResponse> {
        tracing::debug!("POST {} ({} form fields)", url, fields.len());
        let request = self.client.post(url).multipart(form(fields));
        self.send(request, form_headers(headers)).await
    }

    pub async fn put(
        &self,
        url: &str,
        headers: HeaderMap,
        fields: &[(String, String)],
    ) -> Result<TransportResponse> {
        tracing::debug!("PUT {} ({} form fields)", url, fields.len());
        let request = self.client.put(url).multipart(form(fields));
        self.send(request, form_headers(headers)).await
    }

    async fn send(&self, request: RequestBuilder, headers: HeaderMap) -> Result<TransportResponse> {
        let response = request
            .headers(self.merge_headers(headers))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error: {}", e);
                FoodApiError::from(e)
            })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("Request failed with status {}: {}", status, body);
            let message = if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected response status")
                    .to_string()
            } else {
                body
            };
            return Err(FoodApiError::Transport {
                message,
                status: Some(status.as_u16()),
            });
        }

        Ok(TransportResponse {
            body,
            status: status.as_u16(),
        })
    }

    fn merge_headers(&self, mut headers: HeaderMap) -> HeaderMap {
        for (name, value) in self.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }
}

/// The multipart content type carries the body's boundary, so a caller
/// supplied one must not replace it.
fn form_headers(mut headers: HeaderMap) -> HeaderMap {
    headers.remove(CONTENT_TYPE);
    headers
}

fn form(fields: &[(String, String)]) -> Form {
    fields.iter().fold(Form::new(), |form, (name, value)| {
        form.text(name.clone(), value.clone())
    })
}
