//! Form backing the "new server" page and the config generation API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::server_config::{
    OMAG_SERVER_CONFIG_CLASS, OMAG_SERVER_CONFIG_VERSION, OmagServerConfig,
};

/// Required inputs of a basic server configuration, in validation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServerConfigField {
    ServerName,
    LocalUrlRoot,
    LocalServerType,
    OrganizationName,
    LocalUserId,
    LocalPassword,
}

impl ServerConfigField {
    /// Fields checked by [`build_config`], first to last.
    pub const REQUIRED: [ServerConfigField; 6] = [
        ServerConfigField::ServerName,
        ServerConfigField::LocalUrlRoot,
        ServerConfigField::LocalServerType,
        ServerConfigField::OrganizationName,
        ServerConfigField::LocalUserId,
        ServerConfigField::LocalPassword,
    ];

    /// Label used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            ServerConfigField::ServerName => "Server Name",
            ServerConfigField::LocalUrlRoot => "Local Server URL Root",
            ServerConfigField::LocalServerType => "Local Server Type",
            ServerConfigField::OrganizationName => "Organization Name",
            ServerConfigField::LocalUserId => "Local Server User ID",
            ServerConfigField::LocalPassword => "Local Server Password",
        }
    }

    /// Name of the form input carrying this field.
    pub const fn input_name(self) -> &'static str {
        match self {
            ServerConfigField::ServerName => "newServerName",
            ServerConfigField::LocalUrlRoot => "newServerLocalURLRoot",
            ServerConfigField::LocalServerType => "newServerLocalServerType",
            ServerConfigField::OrganizationName => "newServerOrganizationName",
            ServerConfigField::LocalUserId => "newServerLocalUserId",
            ServerConfigField::LocalPassword => "newServerLocalPassword",
        }
    }
}

/// Reasons a server configuration could not be built.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cannot create OMAG server configuration without {}", .0.label())]
    MissingField(ServerConfigField),
}

/// Options entered for a new OMAG server.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServerForm {
    #[serde(default)]
    pub new_server_name: String,
    #[serde(default, rename = "newServerLocalURLRoot")]
    pub new_server_local_url_root: String,
    #[serde(default)]
    pub new_server_local_server_type: String,
    #[serde(default)]
    pub new_server_organization_name: String,
    #[serde(default)]
    pub new_server_local_user_id: String,
    #[serde(default)]
    pub new_server_local_password: String,
    /// Optional cap on the number of elements returned per request.
    #[serde(default)]
    pub new_server_max_page_size: Option<u32>,
}

impl NewServerForm {
    /// Raw value entered for a required field.
    pub fn value(&self, field: ServerConfigField) -> &str {
        match field {
            ServerConfigField::ServerName => &self.new_server_name,
            ServerConfigField::LocalUrlRoot => &self.new_server_local_url_root,
            ServerConfigField::LocalServerType => &self.new_server_local_server_type,
            ServerConfigField::OrganizationName => &self.new_server_organization_name,
            ServerConfigField::LocalUserId => &self.new_server_local_user_id,
            ServerConfigField::LocalPassword => &self.new_server_local_password,
        }
    }
}

impl TryFrom<&NewServerForm> for OmagServerConfig {
    type Error = ConfigError;

    fn try_from(form: &NewServerForm) -> Result<Self, Self::Error> {
        if let Some(missing) = ServerConfigField::REQUIRED
            .into_iter()
            .find(|&field| form.value(field).is_empty())
        {
            return Err(ConfigError::MissingField(missing));
        }

        Ok(Self {
            class: OMAG_SERVER_CONFIG_CLASS.to_string(),
            version_id: OMAG_SERVER_CONFIG_VERSION.to_string(),
            local_server_name: form.new_server_name.clone(),
            local_server_type: form.new_server_local_server_type.clone(),
            organization_name: form.new_server_organization_name.clone(),
            local_server_url: form.new_server_local_url_root.clone(),
            local_server_user_id: form.new_server_local_user_id.clone(),
            local_server_password: form.new_server_local_password.clone(),
            max_page_size: form.new_server_max_page_size,
        })
    }
}

/// Builds a basic OMAG server configuration, failing on the first missing field.
pub fn build_config(form: &NewServerForm) -> Result<OmagServerConfig, ConfigError> {
    OmagServerConfig::try_from(form)
}
