use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::client::{
    auth::{self, token_preview},
    transport::HttpTransport,
    types::*,
};
use crate::config::ClientConfig;
use crate::error::{FoodApiError, Result};

pub struct GreatFoodClient {
    config: ClientConfig,
    transport: HttpTransport,
    access_token: String,
}

impl GreatFoodClient {
    /// Build a client and authenticate it.
    ///
    /// The access token is fetched here and kept for the lifetime of the
    /// client; a client only exists once a token has been obtained.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let mut transport = HttpTransport::new(config.timeout)?;
        let access_token = auth::fetch_access_token(&transport, &config).await?;
        transport.set_authorization_bearer(Some(&access_token))?;

        Ok(Self {
            config,
            transport,
            access_token,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.transport.has_authorization()
    }

    pub fn token_preview(&self) -> String {
        token_preview(&self.access_token)
    }

    // Menu operations
    pub async fn get_menu_products_by_menu_name(&self, menu_name: &str) -> Result<Vec<Product>> {
        if menu_name.is_empty() {
            tracing::debug!("Empty menu name, skipping lookup");
            return Ok(Vec::new());
        }

        let menu_id = self.get_menu_id_by_name(menu_name).await?;
        if menu_id.is_none() {
            tracing::info!("No menu named {:?}", menu_name);
        }

        self.get_products_by_menu_id(menu_id).await
    }

    pub async fn list_menus(&self) -> Result<Vec<Menu>> {
        let url = self.config.url(&self.config.endpoints.menus);

        let menus: Vec<Menu> = self
            .get_data(&url)
            .await
            .map_err(|e| e.into_api("Failed to get menus"))?;

        tracing::debug!("Successfully retrieved {} menus", menus.len());
        Ok(menus)
    }

    async fn get_menu_id_by_name(&self, menu_name: &str) -> Result<Option<i64>> {
        let menus = self.list_menus().await?;
        Ok(menus
            .into_iter()
            .find(|menu| menu.name == menu_name)
            .map(|menu| menu.id))
    }

    // Product operations
    pub async fn get_products_by_menu_id(&self, menu_id: Option<i64>) -> Result<Vec<Product>> {
        let Some(menu_id) = menu_id else {
            return Ok(Vec::new());
        };

        let url = match &self.config.products_url {
            Some(fixed) => {
                tracing::warn!(
                    "Using fixed products URL {} instead of the listing for menu {}",
                    fixed,
                    menu_id
                );
                fixed.clone()
            }
            None => self.config.url(&self.config.endpoints.menu_products(menu_id)),
        };

        let products: Vec<Product> = self
            .get_data(&url)
            .await
            .map_err(|e| e.into_api(&format!("Failed to get products for menu {}", menu_id)))?;

        tracing::debug!(
            "Successfully retrieved {} products for menu {}",
            products.len(),
            menu_id
        );
        Ok(products)
    }

    /// Update a product's fields. Any `id` key in `product` is not sent.
    pub async fn update_product_by_menu_id_and_product_id(
        &self,
        menu_id: i64,
        product_id: i64,
        product: &Map<String, Value>,
    ) -> Result<bool> {
        let url = self
            .config
            .url(&self.config.endpoints.product(menu_id, product_id));
        let fields = product_form_fields(product);

        self.transport
            .put(&url, HeaderMap::new(), &fields)
            .await
            .map_err(|e| {
                e.into_api(&format!(
                    "Failed to update product {} on menu {}",
                    product_id, menu_id
                ))
            })?;

        tracing::info!("Updated product {} on menu {}", product_id, menu_id);
        Ok(true)
    }

    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let response = self.transport.get(url, HeaderMap::new()).await?;

        let envelope: DataEnvelope<T> = serde_json::from_str(&response.body).map_err(|e| {
            tracing::error!("Failed to parse response from {}: {}", url, e);
            FoodApiError::Api {
                message: format!("Invalid response format from Great Food API: {}", e),
                status: Some(response.status),
            }
        })?;

        Ok(envelope.data)
    }
}
