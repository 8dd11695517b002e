//! Generation of OMAG server configuration documents.

use crate::domain::server_config::OmagServerConfig;
use crate::forms::server_config::{NewServerForm, build_config};
use crate::services::{ServiceError, ServiceResult};

/// Validates the new-server options and builds the configuration document.
pub fn generate_server_config(form: &NewServerForm) -> ServiceResult<OmagServerConfig> {
    let config = build_config(form).map_err(|err| {
        log::warn!("Rejected server configuration: {err}");
        ServiceError::from(err)
    })?;

    log::info!(
        "Generated configuration for OMAG server {}",
        config.local_server_name
    );
    Ok(config)
}
