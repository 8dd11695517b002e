//! Error conversion glue between the form and service layers.
//!
//! Forms must not depend on service error types, so the conversions live
//! here instead of next to either enum.

use crate::forms::FormError;
use crate::forms::server_config::ConfigError;
use crate::services::ServiceError;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<ConfigError> for ServiceError {
    fn from(val: ConfigError) -> Self {
        ServiceError::from(FormError::from(val))
    }
}
