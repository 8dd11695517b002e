//! DTOs shaped for the asset search template.

use serde::Serialize;

use crate::domain::asset::{Asset, AssetType};
use crate::domain::notification::Notification;
use crate::domain::search::SearchState;

/// One row of the search results grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AssetRow {
    /// Identifier used to link to the asset's detail view.
    pub guid: String,
    pub name: String,
    pub type_name: String,
    pub summary: Option<String>,
    pub qualified_name: Option<String>,
}

impl From<&Asset> for AssetRow {
    fn from(asset: &Asset) -> Self {
        Self {
            guid: asset.guid.clone(),
            name: asset.display_name().to_string(),
            type_name: asset.asset_type.name.clone(),
            summary: asset.properties.summary.clone(),
            qualified_name: asset.properties.qualified_name.clone(),
        }
    }
}

/// Data required to render the asset search page.
#[derive(Debug, Serialize)]
pub struct SearchPageData {
    pub state: SearchState,
    pub current_page: usize,
    pub rows: Vec<AssetRow>,
    pub asset_types: Vec<AssetType>,
    pub notifications: Vec<Notification>,
}
