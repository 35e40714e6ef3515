//! # Great Food HTTP Client
//!
//! This module provides a thin client for the Great Food ordering API:
//! client-credentials authentication, menu lookup by name, product listing
//! and product updates.
//!
//! ## Modules
//!
//! - [`auth`] - Access token exchange for the client-credentials grant
//! - [`client`] - Main client implementation with the API operations
//! - [`transport`] - HTTP transport with bearer headers and form bodies
//! - [`types`] - Type definitions for API requests and responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use greatfood_client::{ClientConfig, GreatFoodClient};
//!
//! # async fn example() -> greatfood_client::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let client = GreatFoodClient::connect(config).await?;
//!
//! let products = client.get_menu_products_by_menu_name("Takeaway").await?;
//! println!("Found {} products", products.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod transport;
pub mod types;

pub use client::GreatFoodClient;
pub use transport::{HttpTransport, TransportResponse};
pub use types::*;
