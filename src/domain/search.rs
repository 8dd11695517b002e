//! Search page state and the REST queries derived from it.

use serde::{Deserialize, Serialize};

use crate::domain::types::PageSize;
use crate::pagination;

/// Back-end endpoint returning assets matching a query.
pub const SEARCH_ENDPOINT: &str = "/api/assets/search";
/// Back-end endpoint listing the open metadata types usable as filters.
pub const TYPES_ENDPOINT: &str = "/api/assets/types";
/// Minimum number of characters in a search term.
pub const MIN_QUERY_LENGTH: u64 = 2;

/// Everything the search page remembers between user interactions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Text typed into the search field.
    pub q: String,
    /// Names of the selected open metadata types.
    pub types: Vec<String>,
    /// Offset of the first result on the current page.
    pub from: usize,
    pub page_size: PageSize,
    /// Number of results currently displayed.
    pub result_count: usize,
}

impl SearchState {
    /// One-based page number derived from `from` and `page_size`.
    pub fn current_page(&self) -> usize {
        pagination::current_page(self.from, self.page_size)
    }

    /// Relative URL of the search request for the current state.
    ///
    /// `from` is only included past the first page.
    pub fn search_url(&self) -> String {
        let types = self
            .types
            .iter()
            .map(|name| urlencoding::encode(name).into_owned())
            .collect::<Vec<_>>()
            .join(",");

        let mut url = format!(
            "{SEARCH_ENDPOINT}?q={}&types={types}",
            urlencoding::encode(&self.q)
        );
        if self.from > 0 {
            url.push_str(&format!("&from={}", self.from));
        }
        url.push_str(&format!("&pageSize={}", self.page_size));
        url
    }
}
