//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    catalog::{CatalogService, HttpCatalogService},
    config::ClientConfig,
    http::{HttpError, StorefrontClient},
    inventory::{HttpInventoryService, InventoryService},
    orders::{HttpOrdersService, OrdersService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build http client")]
    Client(#[source] HttpError),

    #[error("failed to load csrf token from {page}")]
    Csrf {
        page: String,

        #[source]
        source: HttpError,
    },
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub inventory: Arc<dyn InventoryService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context sharing one client between all services.
    #[must_use]
    pub fn new(client: StorefrontClient) -> Self {
        Self {
            catalog: Arc::new(HttpCatalogService::new(client.clone())),
            inventory: Arc::new(HttpInventoryService::new(client.clone())),
            orders: Arc::new(HttpOrdersService::new(client)),
        }
    }

    /// Build application context from connection settings.
    ///
    /// When `mutating` is set and no CSRF token is configured, the token is read from the
    /// configured page before any service is used.
    ///
    /// # Errors
    ///
    /// Returns an error when the client cannot be built or the CSRF page cannot be loaded.
    pub async fn from_config(config: &ClientConfig, mutating: bool) -> Result<Self, AppInitError> {
        let mut client =
            StorefrontClient::new(config.base_url.clone()).map_err(AppInitError::Client)?;

        if let Some(csrf) = config.csrf() {
            debug!(header = csrf.header_name(), "using configured csrf token");

            client = client.with_csrf(csrf);
        } else if mutating {
            let found = client
                .refresh_csrf(&config.csrf_page)
                .await
                .map_err(|source| AppInitError::Csrf {
                    page: config.csrf_page.clone(),
                    source,
                })?;

            if !found {
                warn!(page = %config.csrf_page, "no csrf token found in page metadata");
            }
        }

        Ok(Self::new(client))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
