//! Page envelope returned by every list endpoint of the gateway.
//!
//! ```json
//! {
//!   "items": [...],
//!   "pagination": { "page": 1, "limit": 20, "hasMore": true, "total": 45 }
//! }
//! ```
//!
//! The alumni directory names the sequence `users`; both spellings decode
//! into [`Page::items`].

use serde::{Deserialize, Serialize};

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            has_more: false,
            total: None,
        }
    }
}

impl Pagination {
    /// Page number to request next, `None` when the gateway reported no more pages
    pub fn next_page(&self) -> Option<u32> {
        self.has_more.then(|| self.page.saturating_add(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(alias = "users", default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Parameters of a single list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub filter: String,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32, filter: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            filter: filter.into(),
        }
    }

    /// Query-string pairs in request order. A blank filter is not sent.
    pub fn to_params(&self, filter_param: &str) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        let filter = self.filter.trim();
        if !filter.is_empty() {
            params.push((filter_param.to_string(), filter.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_directory_envelope_uses_users_key() {
        let raw = json!({
            "users": [{ "id": "u1" }, { "id": "u2" }],
            "pagination": { "page": 1, "limit": 20, "hasMore": true, "total": 45 }
        });
        let page: Page<serde_json::Value> = serde_json::from_value(raw).unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.pagination.has_more);
        assert_eq!(page.pagination.total, Some(45));
    }

    #[test]
    fn test_missing_pagination_defaults_to_last_page() {
        let page: Page<serde_json::Value> =
            serde_json::from_value(json!({ "items": [] })).unwrap();
        assert_eq!(page.pagination.page, 1);
        assert!(!page.pagination.has_more);
        assert_eq!(page.pagination.next_page(), None);
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: String,
    }

    #[test]
    fn test_rows_without_default_decode_and_missing_items_is_empty() {
        let page: Page<Row> = serde_json::from_value(json!({
            "items": [{ "id": "e1" }],
            "pagination": { "page": 2, "limit": 20, "hasMore": false }
        }))
        .unwrap();
        assert_eq!(page.items, vec![Row { id: "e1".into() }]);
        assert_eq!(page.pagination.page, 2);

        let page: Page<Row> = serde_json::from_value(json!({
            "pagination": { "page": 1, "limit": 20, "hasMore": false }
        }))
        .unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_next_page() {
        let pagination = Pagination {
            page: 3,
            limit: 20,
            has_more: true,
            total: None,
        };
        assert_eq!(pagination.next_page(), Some(4));
    }

    #[test]
    fn test_query_params_skip_blank_filter() {
        let query = ListQuery::new(2, 20, "  ");
        assert_eq!(
            query.to_params("name"),
            vec![
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );

        let query = ListQuery::new(0, 20, " ann ");
        let params = query.to_params("name");
        assert_eq!(params[0].1, "1");
        assert_eq!(params[2], ("name".to_string(), "ann".to_string()));
    }
}
