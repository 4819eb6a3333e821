//! Paginated browsing of server listings.

use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

use storefront::{
    cart::{Cart, CartProduct, CartStore, CartStoreError},
    inventory::InventoryRecord,
    pagination::Page,
    products::Product,
    storage::Storage,
};
use tracing::{debug, warn};

use crate::{catalog::CatalogService, inventory::InventoryService};

/// A listing that can be fetched one page at a time.
pub trait PageSource {
    /// Listed item.
    type Item;

    /// Fetch failure.
    type Error;

    /// Fetches the page at a zero-based index.
    async fn fetch_page(&self, index: u32) -> Result<Page<Self::Item>, Self::Error>;
}

/// Holds the current page of a listing and moves between pages.
///
/// Navigation that the current page does not allow is a no-op returning `false`.
pub struct PageBrowser<S: PageSource + ?Sized> {
    source: Arc<S>,
    page: Page<S::Item>,
}

/// Browser over the product catalog.
pub type ProductCatalog = PageBrowser<dyn CatalogService>;

/// Browser over inventory records.
pub type InventoryBrowser = PageBrowser<dyn InventoryService>;

impl<S: PageSource + ?Sized> PageBrowser<S> {
    /// Create a browser; nothing is fetched until [`Self::load`].
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            page: Page::default(),
        }
    }

    /// Current page.
    pub fn page(&self) -> &Page<S::Item> {
        &self.page
    }

    /// Fetch the page at `index` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns the source's error; the current page is kept.
    pub async fn load(&mut self, index: u32) -> Result<(), S::Error> {
        self.page = self.source.fetch_page(index).await?;

        debug!(
            page_number = self.page.page_number,
            total_pages = self.page.total_pages,
            "loaded page"
        );

        Ok(())
    }

    /// Fetch the page at `index` when it exists.
    ///
    /// # Errors
    ///
    /// Returns the source's error; the current page is kept.
    pub async fn go_to_page(&mut self, index: u32) -> Result<bool, S::Error> {
        self.navigate(self.page.go_to(index)).await
    }

    /// Fetch the following page.
    ///
    /// # Errors
    ///
    /// Returns the source's error; the current page is kept.
    pub async fn next_page(&mut self) -> Result<bool, S::Error> {
        self.navigate(self.page.next_page()).await
    }

    /// Fetch the preceding page.
    ///
    /// # Errors
    ///
    /// Returns the source's error; the current page is kept.
    pub async fn previous_page(&mut self) -> Result<bool, S::Error> {
        self.navigate(self.page.previous_page()).await
    }

    /// Fetch the first page.
    ///
    /// # Errors
    ///
    /// Returns the source's error; the current page is kept.
    pub async fn first_page(&mut self) -> Result<bool, S::Error> {
        self.navigate(self.page.first_page()).await
    }

    /// Fetch the last page.
    ///
    /// # Errors
    ///
    /// Returns the source's error; the current page is kept.
    pub async fn last_page(&mut self) -> Result<bool, S::Error> {
        self.navigate(self.page.last_page()).await
    }

    async fn navigate(&mut self, target: Option<u32>) -> Result<bool, S::Error> {
        match target {
            Some(index) => {
                self.load(index).await?;

                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl ProductCatalog {
    /// Add a product on the current page to the cart.
    ///
    /// Returns `Ok(None)` when the current page has no product with that code.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] if the cart cannot be persisted.
    pub fn add_to_cart<St: Storage>(
        &self,
        store: &CartStore<St>,
        product_code: &str,
    ) -> Result<Option<Cart>, CartStoreError> {
        let Some(product) = self.product(product_code) else {
            warn!(product_code, "product not on current catalog page");

            return Ok(None);
        };

        store
            .add_product_to_cart(&CartProduct::from(product))
            .map(Some)
    }

    /// Product on the current page with the given code.
    pub fn product(&self, product_code: &str) -> Option<&Product> {
        self.page
            .data
            .iter()
            .find(|product| product.product_code == product_code)
    }
}

impl InventoryBrowser {
    /// Inventory record on the current page with the given product code.
    pub fn record(&self, product_code: &str) -> Option<&InventoryRecord> {
        self.page
            .data
            .iter()
            .find(|record| record.product_code == product_code)
    }
}

impl<S> Debug for PageBrowser<S>
where
    S: PageSource + ?Sized,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageBrowser")
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}
