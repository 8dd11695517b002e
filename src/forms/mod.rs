//! Form definitions backing the UI routes.

use thiserror::Error;

use crate::forms::server_config::ConfigError;

pub mod search;
pub mod server_config;

/// Errors that can occur when processing form data.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid page size")]
    InvalidPageSize,
}
