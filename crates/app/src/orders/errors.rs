//! Orders service errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::http::HttpError;

/// Orders service error variants.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// Order was not found.
    #[error("order not found")]
    NotFound,

    /// The order request failed.
    #[error("order request failed")]
    Http(#[source] HttpError),
}

impl From<HttpError> for OrdersServiceError {
    fn from(error: HttpError) -> Self {
        if error.status() == Some(StatusCode::NOT_FOUND) {
            return Self::NotFound;
        }

        Self::Http(error)
    }
}
