//! Inventory service errors.

use storefront::inventory::InventoryUpdateOutcome;
use thiserror::Error;

use crate::http::HttpError;

/// Inventory service error variants.
#[derive(Debug, Error)]
pub enum InventoryServiceError {
    /// Inventory record was not found.
    #[error("inventory item not found")]
    NotFound,

    /// The server failed while handling the request.
    #[error("server error while handling inventory request")]
    ServerError,

    /// Any other request failure.
    #[error("inventory request failed")]
    Failed(#[source] HttpError),
}

impl InventoryServiceError {
    /// Outcome reported to the user for this failure.
    pub fn outcome(&self) -> InventoryUpdateOutcome {
        match self {
            Self::NotFound => InventoryUpdateOutcome::NotFound,
            Self::ServerError => InventoryUpdateOutcome::ServerError,
            Self::Failed(_) => InventoryUpdateOutcome::Failed,
        }
    }
}

impl From<HttpError> for InventoryServiceError {
    fn from(error: HttpError) -> Self {
        match error.status().map(|status| status.as_u16()) {
            Some(status) => match InventoryUpdateOutcome::from_status(status) {
                InventoryUpdateOutcome::NotFound => Self::NotFound,
                InventoryUpdateOutcome::ServerError => Self::ServerError,
                InventoryUpdateOutcome::Updated(_) | InventoryUpdateOutcome::Failed => {
                    Self::Failed(error)
                }
            },
            None => Self::Failed(error),
        }
    }
}
