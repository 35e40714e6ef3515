//! Type definitions for the Great Food API.
//!
//! ## Key Types
//!
//! - [`Menu`] - A named collection of products
//! - [`Product`] - A menu item; fields beyond `id` and `name` are kept as-is
//! - [`DataEnvelope`] - The `{"data": [...]}` wrapper used by list endpoints
//! - [`AccessTokenResponse`] - Body returned by the token endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token endpoint response for the client-credentials grant.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// Opaque bearer token. Absent when the server refused the grant.
    #[serde(default)]
    pub access_token: Option<String>,
}

/// List responses wrap their payload in a `data` field.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Any other fields the API returns for the product.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// All fields of the product as a JSON object, `id` included.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::from(self.id));
        fields.insert("name".to_string(), Value::from(self.name.clone()));
        for (key, value) in &self.extra {
            fields.insert(key.clone(), value.clone());
        }
        fields
    }
}

/// Flatten a product payload into form fields for an update request.
///
/// The `id` key is dropped since the target path already carries it.
/// Strings are sent verbatim, `null` as an empty string, and arrays or
/// objects as compact JSON.
pub fn product_form_fields(product: &Map<String, Value>) -> Vec<(String, String)> {
    product
        .iter()
        .filter(|(key, _)| key.as_str() != "id")
        .map(|(key, value)| (key.clone(), form_value(value)))
        .collect()
}

fn form_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
