//! Inventory service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use storefront::{inventory::InventoryRecord, pagination::Page};

use crate::{http::StorefrontClient, inventory::errors::InventoryServiceError, pager::PageSource};

const LIST_INVENTORY_PATH: &str = "/api/inventory";
const UPDATE_INVENTORY_PATH: &str = "/inventory";

#[derive(Debug, Clone)]
pub struct HttpInventoryService {
    client: StorefrontClient,
}

impl HttpInventoryService {
    #[must_use]
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InventoryService for HttpInventoryService {
    async fn list_inventory(
        &self,
        page: u32,
    ) -> Result<Page<InventoryRecord>, InventoryServiceError> {
        self.client
            .get_json(LIST_INVENTORY_PATH, &[("page", page.to_string())])
            .await
            .map_err(Into::into)
    }

    async fn update_inventory(
        &self,
        record: InventoryRecord,
    ) -> Result<InventoryRecord, InventoryServiceError> {
        self.client
            .send_json(Method::PUT, UPDATE_INVENTORY_PATH, &record)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Inventory operations.
pub trait InventoryService: Send + Sync {
    /// Fetches one page of inventory records by zero-based index.
    async fn list_inventory(&self, page: u32)
    -> Result<Page<InventoryRecord>, InventoryServiceError>;

    /// Replaces an inventory record, returning the stored version.
    async fn update_inventory(
        &self,
        record: InventoryRecord,
    ) -> Result<InventoryRecord, InventoryServiceError>;
}

impl PageSource for dyn InventoryService {
    type Item = InventoryRecord;
    type Error = InventoryServiceError;

    async fn fetch_page(&self, index: u32) -> Result<Page<InventoryRecord>, InventoryServiceError> {
        self.list_inventory(index).await
    }
}
