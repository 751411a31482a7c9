use crate::core::selectors::{region_filter, resolve_nights};
use crate::domain::model::ListParams;

pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const FEATURED_LIMIT: usize = 6;
const MAX_PAGE_LINKS: usize = 5;

/// Filters and page number as they come from the list page query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub nights: Option<String>,
    pub regions: Option<String>,
}

impl ListQuery {
    pub fn current_page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// 無法解析的夜數條件直接忽略，不視為錯誤
    pub fn to_params(&self, page_size: usize) -> ListParams {
        let limit = page_size.max(1);
        let num_nights = self.nights.as_deref().and_then(|token| {
            resolve_nights(token)
                .map_err(|e| tracing::debug!("Ignoring nights filter: {}", e))
                .ok()
        });

        ListParams {
            skip: Some((self.current_page() - 1).saturating_mul(limit)),
            limit: Some(limit),
            num_nights,
            regions: self.regions.as_deref().and_then(region_filter),
        }
    }
}

/// Home page listing: first `limit` itineraries, no filters.
pub fn featured_params(limit: usize) -> ListParams {
    ListParams {
        limit: Some(limit),
        ..ListParams::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    pub page_links: Vec<usize>,
}

impl Pagination {
    pub fn new(current_page: usize, total: usize, limit: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit);
        let previous = (current_page > 1).then(|| current_page - 1);
        let next = (current_page < total_pages).then(|| current_page + 1);
        let page_links = (1..=total_pages.min(MAX_PAGE_LINKS)).collect();

        Self {
            current_page,
            total_pages,
            previous,
            next,
            page_links,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_from_page() {
        let query = ListQuery {
            page: Some(3),
            ..ListQuery::default()
        };
        let params = query.to_params(DEFAULT_PAGE_SIZE);
        assert_eq!(params.skip, Some(18));
        assert_eq!(params.limit, Some(9));
        assert_eq!(params.num_nights, None);
        assert_eq!(params.regions, None);
    }

    #[test]
    fn test_page_below_one_treated_as_first() {
        let query = ListQuery {
            page: Some(0),
            ..ListQuery::default()
        };
        assert_eq!(query.current_page(), 1);
        assert_eq!(query.to_params(9).skip, Some(0));
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let query = ListQuery {
            page: Some(usize::MAX),
            ..ListQuery::default()
        };
        assert_eq!(query.to_params(9).skip, Some(usize::MAX));
    }

    #[test]
    fn test_filters() {
        let query = ListQuery {
            page: None,
            nights: Some("4".to_string()),
            regions: Some("Phi Phi".to_string()),
        };
        let params = query.to_params(9);
        assert_eq!(params.num_nights, Some(4));
        assert_eq!(params.regions.as_deref(), Some("Phi Phi"));

        let query = ListQuery {
            page: None,
            nights: Some("whenever".to_string()),
            regions: Some("all".to_string()),
        };
        let params = query.to_params(9);
        assert_eq!(params.num_nights, None);
        assert_eq!(params.regions, None);
    }

    #[test]
    fn test_pagination_window() {
        let pagination = Pagination::new(1, 40, 9);
        assert_eq!(pagination.total_pages, 5);
        assert_eq!(pagination.previous, None);
        assert_eq!(pagination.next, Some(2));
        assert_eq!(pagination.page_links, vec![1, 2, 3, 4, 5]);

        let pagination = Pagination::new(7, 100, 9);
        assert_eq!(pagination.total_pages, 12);
        assert_eq!(pagination.previous, Some(6));
        assert_eq!(pagination.page_links.len(), 5);
    }

    #[test]
    fn test_pagination_hidden_for_single_page() {
        assert!(!Pagination::new(1, 9, 9).is_visible());
        assert!(!Pagination::new(1, 0, 9).is_visible());
        assert!(Pagination::new(1, 10, 9).is_visible());
    }

    #[test]
    fn test_featured_params() {
        let params = featured_params(FEATURED_LIMIT);
        assert_eq!(params.to_query(), vec![("limit", "6".to_string())]);
    }
}
