//! In-memory product catalog

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ErrorCondition;
use crate::models::product::{Product, ProductInput};

pub type Result<T> = std::result::Result<T, ErrorCondition>;

pub struct ProductCatalog {
    products: RwLock<BTreeMap<u64, Product>>,
    next_id: AtomicU64,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// All products ordered by id
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Result<Product> {
        self.products
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, input: ProductInput) -> Result<Product> {
        let mut products = self.products.write().await;
        ensure_unique_name(&products, &input.name, None)?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let product = Product::from_input(id, input);
        products.insert(id, product.clone());

        info!("Created product {} ({})", id, product.name);
        Ok(product)
    }

    /// Replace an existing product
    pub async fn update(&self, id: u64, input: ProductInput) -> Result<Product> {
        let mut products = self.products.write().await;
        if !products.contains_key(&id) {
            return Err(not_found(id));
        }
        ensure_unique_name(&products, &input.name, Some(id))?;

        let product = Product::from_input(id, input);
        products.insert(id, product.clone());

        debug!("Updated product {}", id);
        Ok(product)
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        match self.products.write().await.remove(&id) {
            Some(product) => {
                info!("Deleted product {} ({})", id, product.name);
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }
}

fn not_found(id: u64) -> ErrorCondition {
    ErrorCondition::not_found(format!("Product with id {} not found", id))
}

fn ensure_unique_name(
    products: &BTreeMap<u64, Product>,
    name: &str,
    except: Option<u64>,
) -> Result<()> {
    let taken = products
        .values()
        .any(|p| Some(p.id) != except && p.name.eq_ignore_ascii_case(name));

    if taken {
        return Err(ErrorCondition::validation_failure(format!(
            "Product with name '{}' already exists",
            name
        )));
    }

    Ok(())
}
