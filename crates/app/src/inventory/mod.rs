//! Inventory

use storefront::inventory::{InventoryRecord, InventoryUpdateOutcome};
use tracing::{error, info};

pub mod errors;
pub mod service;

pub use errors::InventoryServiceError;
pub use service::*;

/// Apply an inventory update and report its outcome.
///
/// Failures are logged and classified, never retried.
pub async fn update_inventory(
    service: &dyn InventoryService,
    record: InventoryRecord,
) -> InventoryUpdateOutcome {
    let id = record.id;

    match service.update_inventory(record).await {
        Ok(updated) => {
            info!(
                id,
                product_code = %updated.product_code,
                available_quantity = updated.available_quantity,
                "inventory updated"
            );

            InventoryUpdateOutcome::Updated(updated)
        }
        Err(err) => {
            error!(id, error = %err, "failed to update inventory");

            err.outcome()
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use crate::http::HttpError;

    use super::*;

    fn record() -> InventoryRecord {
        InventoryRecord {
            id: 3,
            product_code: "P100".to_string(),
            available_quantity: 40,
            reserved_items: 2,
        }
    }

    fn failing_with(status: StatusCode) -> MockInventoryService {
        let mut service = MockInventoryService::new();

        service.expect_update_inventory().once().returning(move |_| {
            Err(InventoryServiceError::from(HttpError::Status {
                status,
                body: String::new(),
            }))
        });

        service
    }

    #[tokio::test]
    async fn successful_update_returns_stored_record() {
        let mut service = MockInventoryService::new();

        service
            .expect_update_inventory()
            .withf(|record| record.id == 3 && record.available_quantity == 50)
            .once()
            .returning(Ok);

        let outcome = update_inventory(&service, record().with_available_quantity(50)).await;

        assert_eq!(
            outcome,
            InventoryUpdateOutcome::Updated(record().with_available_quantity(50))
        );
        assert_eq!(outcome.message(), "Inventory updated successfully");
    }

    #[tokio::test]
    async fn failures_map_to_distinct_messages() {
        let cases = [
            (StatusCode::NOT_FOUND, "Inventory item not found"),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error while updating inventory",
            ),
            (StatusCode::BAD_REQUEST, "Failed to update inventory"),
            (StatusCode::SERVICE_UNAVAILABLE, "Failed to update inventory"),
        ];

        for (status, message) in cases {
            let outcome = update_inventory(&failing_with(status), record()).await;

            assert!(!outcome.is_success());
            assert_eq!(outcome.message(), message, "unexpected message for {status}");
        }
    }
}
