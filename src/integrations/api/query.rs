// src/integrations/api/query.rs
//
// Query parameters of a collection request

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    pub page: u32,
    pub search: Option<String>,
    /// Server-side ordering field, e.g. "-bounty"
    pub ordering: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: None,
            ordering: None,
        }
    }
}

impl ListQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page: page.max(1),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    /// `page` is always sent; `search` and `ordering` only when non-empty
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(ordering) = self.ordering.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("ordering", ordering.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_only() {
        assert_eq!(ListQuery::default().to_pairs(), vec![("page", "1".to_string())]);
    }

    #[test]
    fn test_search_and_ordering() {
        let query = ListQuery::page(2).with_search("Luffy").with_ordering("-bounty");
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "2".to_string()),
                ("search", "Luffy".to_string()),
                ("ordering", "-bounty".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_search_is_not_sent() {
        let query = ListQuery::page(1).with_search("");
        assert_eq!(query.to_pairs().len(), 1);
    }

    #[test]
    fn test_page_zero_clamped() {
        assert_eq!(ListQuery::page(0).page, 1);
    }
}
