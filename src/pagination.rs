//! Offset pagination arithmetic for the search page.
//!
//! The back end pages by row offset (`from`) rather than by page number, so
//! the page shown to the user is derived from the offset and the page size.

use crate::domain::types::PageSize;

/// One-based page number for the given offset.
pub fn current_page(from: usize, page_size: PageSize) -> usize {
    from / page_size.get() + 1
}

/// Offset of the page following the one starting at `from`.
pub fn next_offset(from: usize, page_size: PageSize) -> usize {
    from.saturating_add(page_size.get())
}

/// Offset of the page preceding the one starting at `from`, clamped at zero.
pub fn previous_offset(from: usize, page_size: PageSize) -> usize {
    from.saturating_sub(page_size.get())
}

/// Whether another page may exist after a page holding `result_count` rows.
///
/// A full page is taken as a hint that more results follow, so a result set
/// whose size is an exact multiple of the page size yields one empty page.
pub fn may_have_next_page(result_count: usize, page_size: PageSize) -> bool {
    result_count >= page_size.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_page_is_one_based() {
        assert_eq!(current_page(0, PageSize::Ten), 1);
        assert_eq!(current_page(10, PageSize::Ten), 2);
        assert_eq!(current_page(20, PageSize::Ten), 3);
        assert_eq!(current_page(200, PageSize::Hundred), 3);
    }

    #[test]
    fn current_page_for_every_page_size() {
        for size in PageSize::ALL {
            for page in 0..5 {
                assert_eq!(current_page(page * size.get(), size), page + 1);
            }
        }
    }

    #[test]
    fn previous_offset_never_goes_negative() {
        assert_eq!(previous_offset(20, PageSize::Ten), 10);
        assert_eq!(previous_offset(10, PageSize::Twenty), 0);
        assert_eq!(previous_offset(0, PageSize::Hundred), 0);
    }

    #[test]
    fn next_offset_advances_by_page_size() {
        assert_eq!(next_offset(0, PageSize::Fifty), 50);
        assert_eq!(next_offset(50, PageSize::Fifty), 100);
    }

    #[test]
    fn full_page_hints_at_more_results() {
        assert!(may_have_next_page(10, PageSize::Ten));
        assert!(!may_have_next_page(9, PageSize::Ten));
        assert!(!may_have_next_page(0, PageSize::Ten));
    }
}
