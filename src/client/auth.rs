//! Authentication handling for the Great Food API.
//!
//! The API uses the OAuth2 client-credentials grant: the client id and secret
//! are exchanged once for a bearer access token, which is then presented on
//! every authenticated request.

use reqwest::header::HeaderMap;

use crate::client::transport::HttpTransport;
use crate::client::types::AccessTokenResponse;
use crate::config::ClientConfig;
use crate::error::{FoodApiError, Result};

/// Exchange the configured client credentials for an access token.
///
/// Fails with [`FoodApiError::Auth`] when the token request fails, the body
/// is not JSON, or it carries no `access_token`. No retry.
pub async fn fetch_access_token(
    transport: &HttpTransport,
    config: &ClientConfig,
) -> Result<String> {
    let auth_url = config.url(&config.endpoints.auth_token);
    tracing::info!(
        "Requesting access token for client: {}",
        config.credentials.client_id
    );
    tracing::debug!("Making token request to: {}", auth_url);

    let response = transport
        .post(&auth_url, HeaderMap::new(), &config.credentials.form_fields())
        .await
        .map_err(|e| {
            tracing::error!("Token request failed: {}", e);
            e.into_auth(&format!("Failed to obtain access token from {}", config.base_url))
        })?;

    let token_response: AccessTokenResponse =
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::error!("Failed to parse token response: {}", e);
            FoodApiError::Auth {
                message: format!("Invalid token response from Great Food API: {}", e),
                status: Some(response.status),
            }
        })?;

    match token_response.access_token {
        Some(token) if !token.is_empty() => {
            tracing::info!(
                "Authentication successful for client: {}",
                config.credentials.client_id
            );
            tracing::debug!("Received token: {}", token_preview(&token));
            Ok(token)
        }
        _ => {
            tracing::error!("Token response did not contain an access_token");
            Err(FoodApiError::Auth {
                message: "Token response did not contain an access_token".to_string(),
                status: Some(response.status),
            })
        }
    }
}

/// First few characters of a token, safe to log.
pub fn token_preview(token: &str) -> String {
    let prefix: String = token.chars().take(10).collect();
    format!("{}...", prefix)
}
