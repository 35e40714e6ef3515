//! # Great Food Client Library
//!
//! A client for the Great Food ordering API. It authenticates with the OAuth2
//! client-credentials grant, resolves menus by name, lists their products and
//! updates individual products.
//!
//! ## Modules
//!
//! - [`client`] - The API client, its HTTP transport and data types
//! - [`config`] - Base URL, credentials, endpoint templates and timeouts
//! - [`error`] - The crate's error type
//!
//! ## Quick Start
//!
//! ```no_run
//! use greatfood_client::{ClientConfig, GreatFoodClient};
//! use serde_json::json;
//!
//! # async fn example() -> greatfood_client::Result<()> {
//! let config = ClientConfig::new(
//!     "https://api.greatfood/".to_string(),
//!     "1337".to_string(),
//!     "secret".to_string(),
//! );
//! let client = GreatFoodClient::connect(config).await?;
//!
//! let product = json!({ "id": 7, "name": "Chips" });
//! client
//!     .update_product_by_menu_id_and_product_id(84, 7, product.as_object().unwrap())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::GreatFoodClient;
pub use config::ClientConfig;
pub use error::{FoodApiError, Result};
