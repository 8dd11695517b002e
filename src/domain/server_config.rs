//! OMAG server configuration document.

use serde::{Deserialize, Serialize};

/// Discriminant carried in the `class` field of every generated document.
pub const OMAG_SERVER_CONFIG_CLASS: &str = "OMAGServerConfig";
/// Configuration document version understood by the admin services.
pub const OMAG_SERVER_CONFIG_VERSION: &str = "V2.0";

/// Basic configuration for a new OMAG server.
///
/// Field order and names match the JSON document accepted by the OMAG
/// platform's admin services.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmagServerConfig {
    pub class: String,
    pub version_id: String,
    pub local_server_name: String,
    pub local_server_type: String,
    pub organization_name: String,
    #[serde(rename = "localServerURL")]
    pub local_server_url: String,
    pub local_server_user_id: String,
    pub local_server_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_page_size: Option<u32>,
}

impl OmagServerConfig {
    /// File name offered when the document is downloaded.
    pub fn file_name(&self) -> String {
        format!("{}-config.json", self.local_server_name)
    }
}
