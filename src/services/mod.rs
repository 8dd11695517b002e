//! Service layer sitting between the routes and the domain.

use thiserror::Error;

pub mod asset_catalog;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod search;
pub mod server_author;

/// Errors returned by service functions.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// User input was rejected; the message is safe to show to the user.
    #[error("{0}")]
    Form(String),

    /// The metadata back end failed or returned an unusable response.
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("internal error")]
    Internal,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
