//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use storefront::{
    pagination::Page,
    products::{NewProduct, Product},
};

use crate::{catalog::errors::CatalogServiceError, http::StorefrontClient, pager::PageSource};

const PRODUCTS_PATH: &str = "/api/products";

#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    client: StorefrontClient,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list_products(&self, page: u32) -> Result<Page<Product>, CatalogServiceError> {
        self.client
            .get_json(PRODUCTS_PATH, &[("page", page.to_string())])
            .await
            .map_err(Into::into)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, CatalogServiceError> {
        self.client
            .send_json(Method::POST, PRODUCTS_PATH, &product)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Product catalog operations.
pub trait CatalogService: Send + Sync {
    /// Fetches one page of products by zero-based index.
    async fn list_products(&self, page: u32) -> Result<Page<Product>, CatalogServiceError>;

    /// Adds a product to the catalog.
    async fn create_product(&self, product: NewProduct) -> Result<Product, CatalogServiceError>;
}

impl PageSource for dyn CatalogService {
    type Item = Product;
    type Error = CatalogServiceError;

    async fn fetch_page(&self, index: u32) -> Result<Page<Product>, CatalogServiceError> {
        self.list_products(index).await
    }
}
