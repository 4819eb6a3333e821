//! Catalog service errors.

use thiserror::Error;

use crate::http::HttpError;

/// Catalog service error variants.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// The product request failed.
    #[error("catalog request failed")]
    Http(#[from] HttpError),
}
