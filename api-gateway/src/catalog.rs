//! Product catalog collaborator
//!
//! `GET /products` only relays whatever the catalog returns; product records
//! are opaque JSON to the gateway.

use async_trait::async_trait;
use courier_common::{CourierError, Result};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Source of product records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// List all products
    async fn list_products(&self) -> Result<Vec<Value>>;
}

/// Fixed, in-memory product list
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Value>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Value>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn list_products(&self) -> Result<Vec<Value>> {
        Ok(self.products.clone())
    }
}

/// Catalog backed by a JSON file, re-read on every call
///
/// The file holds either a bare array of products or an object with a
/// `products` array.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductCatalog for JsonFileCatalog {
    async fn list_products(&self) -> Result<Vec<Value>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CourierError::Catalog(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let document: Value = serde_json::from_str(&content).map_err(|e| {
            CourierError::Catalog(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        let products = match document {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("products") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(CourierError::Catalog(format!(
                        "{} has no products array",
                        self.path.display()
                    )))
                }
            },
            _ => {
                return Err(CourierError::Catalog(format!(
                    "{} must contain a JSON array or object",
                    self.path.display()
                )))
            }
        };

        debug!(count = products.len(), path = %self.path.display(), "Loaded products");
        Ok(products)
    }
}
