//! Inventory

use serde::{Deserialize, Serialize};

/// Stock record for one product, as listed by `GET /api/inventory` and sent to
/// `PUT /inventory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// Server identifier
    pub id: u64,

    /// Product code
    pub product_code: String,

    /// Units available for ordering
    #[serde(default)]
    pub available_quantity: u32,

    /// Units reserved by open orders
    #[serde(default)]
    pub reserved_items: u32,
}

impl InventoryRecord {
    /// Copy of this record with a new available quantity.
    #[must_use]
    pub fn with_available_quantity(mut self, available_quantity: u32) -> Self {
        self.available_quantity = available_quantity;
        self
    }
}

/// Result of an inventory update, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryUpdateOutcome {
    /// The server accepted the update and returned the stored record.
    Updated(InventoryRecord),

    /// The server does not know the record (HTTP 404).
    NotFound,

    /// The server failed while applying the update (HTTP 500).
    ServerError,

    /// Any other failure, including transport errors.
    Failed,
}

impl InventoryUpdateOutcome {
    /// Classify a failed update by its HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            500 => Self::ServerError,
            _ => Self::Failed,
        }
    }

    /// Whether the update was applied.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    /// Message shown to the user for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Updated(_) => "Inventory updated successfully",
            Self::NotFound => "Inventory item not found",
            Self::ServerError => "Server error while updating inventory",
            Self::Failed => "Failed to update inventory",
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn record() -> InventoryRecord {
        InventoryRecord {
            id: 3,
            product_code: "P100".to_string(),
            available_quantity: 10,
            reserved_items: 2,
        }
    }

    #[test]
    fn serializes_camel_case() -> TestResult {
        let json = serde_json::to_value(record())?;

        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "productCode": "P100",
                "availableQuantity": 10,
                "reservedItems": 2
            })
        );

        Ok(())
    }

    #[test]
    fn with_available_quantity_keeps_other_fields() {
        let updated = record().with_available_quantity(25);

        assert_eq!(updated.available_quantity, 25);
        assert_eq!(updated.reserved_items, 2);
        assert_eq!(updated.id, 3);
    }

    #[test]
    fn classifies_status_codes() {
        assert_eq!(InventoryUpdateOutcome::from_status(404), InventoryUpdateOutcome::NotFound);
        assert_eq!(InventoryUpdateOutcome::from_status(500), InventoryUpdateOutcome::ServerError);
        assert_eq!(InventoryUpdateOutcome::from_status(400), InventoryUpdateOutcome::Failed);
        assert_eq!(InventoryUpdateOutcome::from_status(503), InventoryUpdateOutcome::Failed);
    }

    #[test]
    fn outcomes_have_distinct_messages() {
        let messages = [
            InventoryUpdateOutcome::Updated(record()).message(),
            InventoryUpdateOutcome::NotFound.message(),
            InventoryUpdateOutcome::ServerError.message(),
            InventoryUpdateOutcome::Failed.message(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b, "outcome messages must differ");
            }
        }

        assert!(InventoryUpdateOutcome::Updated(record()).is_success());
        assert!(!InventoryUpdateOutcome::Failed.is_success());
    }
}
