//! Assets and asset types returned by the metadata back end.

use serde::{Deserialize, Serialize};

/// Label shown for assets that carry neither a display name nor a name.
pub const UNNAMED_ASSET: &str = "N/A";

/// Descriptive properties attached to an asset.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetProperties {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub qualified_name: Option<String>,
}

/// Reference to the open metadata type of an asset.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetTypeRef {
    pub name: String,
}

/// A single search hit.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub guid: String,
    #[serde(rename = "type", default)]
    pub asset_type: AssetTypeRef,
    #[serde(default)]
    pub properties: AssetProperties,
}

impl Asset {
    /// Human-readable label: `displayName`, then `name`, else [`UNNAMED_ASSET`].
    pub fn display_name(&self) -> &str {
        [&self.properties.display_name, &self.properties.name]
            .into_iter()
            .filter_map(|value| value.as_deref())
            .find(|value| !value.is_empty())
            .unwrap_or(UNNAMED_ASSET)
    }
}

/// Open metadata type offered as a search filter.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
