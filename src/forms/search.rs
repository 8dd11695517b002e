//! Forms posted by the asset search page.

use serde::Deserialize;

use crate::domain::types::PageSize;
use crate::forms::FormError;

/// Search field and selected type filters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Value picked in the page size selector.
#[derive(Debug, Deserialize)]
pub struct PageSizeForm {
    #[serde(default)]
    pub page_size: String,
}

impl TryFrom<&PageSizeForm> for PageSize {
    type Error = FormError;

    fn try_from(form: &PageSizeForm) -> Result<Self, Self::Error> {
        form.page_size
            .parse::<PageSize>()
            .map_err(|_| FormError::InvalidPageSize)
    }
}
