//! Client configuration.
//!
//! Everything the client needs to reach the Great Food API lives in
//! [`ClientConfig`]: the base URL, OAuth client credentials, the endpoint
//! path templates and the request timeout. Build it in code with
//! [`ClientConfig::new`] or from the process environment with
//! [`ClientConfig::from_env`].

use std::env;
use std::time::Duration;

use crate::error::{FoodApiError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.greatfood/";
pub const DEFAULT_GRANT_TYPE: &str = "client_credentials";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const MENU_ID_PLACEHOLDER: &str = "{menuId}";
const PRODUCT_ID_PLACEHOLDER: &str = "{productId}";

/// OAuth client-credentials grant parameters.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub grant_type: String,
}

impl Credentials {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
            grant_type: DEFAULT_GRANT_TYPE.to_string(),
        }
    }

    /// Form fields sent to the token endpoint.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("client_id".to_string(), self.client_id.clone()),
            ("client_secret".to_string(), self.client_secret.clone()),
            ("grant_type".to_string(), self.grant_type.clone()),
        ]
    }
}

/// Path templates for each API operation, relative to the base URL.
///
/// `{menuId}` and `{productId}` are substituted at request time.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub auth_token: String,
    pub menus: String,
    pub menu_products: String,
    pub product: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_token: "auth_token".to_string(),
            menus: "menus".to_string(),
            menu_products: "menu/{menuId}/products".to_string(),
            product: "menu/{menuId}/product/{productId}".to_string(),
        }
    }
}

impl Endpoints {
    pub fn menu_products(&self, menu_id: i64) -> String {
        self.menu_products
            .replace(MENU_ID_PLACEHOLDER, &menu_id.to_string())
    }

    pub fn product(&self, menu_id: i64, product_id: i64) -> String {
        self.product
            .replace(MENU_ID_PLACEHOLDER, &menu_id.to_string())
            .replace(PRODUCT_ID_PLACEHOLDER, &product_id.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    pub timeout: Duration,
    /// Fixed product listing URL used instead of the per-menu endpoint.
    ///
    /// Only meant for pointing the client at a canned fixture; when unset the
    /// `menu_products` template is used with the resolved menu id.
    pub products_url: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: String, client_id: String, client_secret: String) -> Self {
        Self {
            base_url,
            credentials: Credentials::new(client_id, client_secret),
            endpoints: Endpoints::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            products_url: None,
        }
    }

    /// Read configuration from `GREATFOOD_*` environment variables.
    ///
    /// `GREATFOOD_CLIENT_ID` and `GREATFOOD_CLIENT_SECRET` are required; the
    /// base URL, grant type, timeout and products URL fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("GREATFOOD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let client_id = required_var("GREATFOOD_CLIENT_ID")?;
        let client_secret = required_var("GREATFOOD_CLIENT_SECRET")?;

        let grant_type =
            env::var("GREATFOOD_GRANT_TYPE").unwrap_or_else(|_| DEFAULT_GRANT_TYPE.to_string());

        let timeout = match env::var("GREATFOOD_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    FoodApiError::Config(format!(
                        "GREATFOOD_TIMEOUT_SECS must be a whole number of seconds, got {:?}: {}",
                        raw, e
                    ))
                })?;
                if secs == 0 {
                    return Err(FoodApiError::Config(
                        "GREATFOOD_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let products_url = env::var("GREATFOOD_PRODUCTS_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let mut config = Self::new(base_url, client_id, client_secret);
        config.credentials.grant_type = grant_type;
        config.timeout = timeout;
        config.products_url = products_url;
        Ok(config)
    }

    pub fn with_products_url(mut self, url: String) -> Self {
        self.products_url = Some(url);
        self
    }

    /// A zero timeout is rejected when the client is connected.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join the base URL and an endpoint path with a single `/`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(FoodApiError::Config(format!("{} is not set", name))),
    }
}
