//! Catalog Use Case
//!
//! Product listing, lookup, and administrative creation.

use std::sync::Arc;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::ProductId;
use crate::error::{CommerceError, CommerceResult};

/// Maximum product name length
const PRODUCT_NAME_MAX_LENGTH: usize = 200;

/// Product creation input
pub struct CreateProductInput {
    pub product_name: String,
    pub description: Option<String>,
    pub unit_price_cents: i64,
    pub image_url: Option<String>,
}

/// Catalog use case
pub struct CatalogUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> CatalogUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    /// List every product, newest first
    pub async fn list(&self) -> CommerceResult<Vec<Product>> {
        self.product_repo.list().await
    }

    /// Fetch one product
    pub async fn get(&self, product_id: &ProductId) -> CommerceResult<Product> {
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or(CommerceError::ProductNotFound)
    }

    /// Add a product to the catalog
    pub async fn create(&self, input: CreateProductInput) -> CommerceResult<Product> {
        let product_name = input.product_name.trim().to_string();
        if product_name.is_empty() {
            return Err(CommerceError::Validation(
                "Product name cannot be empty".to_string(),
            ));
        }
        if product_name.len() > PRODUCT_NAME_MAX_LENGTH {
            return Err(CommerceError::Validation(format!(
                "Product name must be at most {} characters",
                PRODUCT_NAME_MAX_LENGTH
            )));
        }
        if input.unit_price_cents < 0 {
            return Err(CommerceError::Validation(
                "Price cannot be negative".to_string(),
            ));
        }

        let product = Product::new(
            product_name,
            normalize_optional(input.description),
            input.unit_price_cents,
            normalize_optional(input.image_url),
        );

        self.product_repo.create(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            product_name = %product.product_name,
            "Product created"
        );

        Ok(product)
    }
}

/// Trim an optional field, mapping whitespace-only input to absent
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
